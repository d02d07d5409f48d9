//! Run summary printed after a successful clean.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hmda_cli::run::CleanOutcome;

pub fn print_summary(outcome: &CleanOutcome) {
    println!("Input: {}", outcome.input.display());
    println!("Output: {}", outcome.output.display());
    if let Some(path) = &outcome.report_path {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Rows in"),
        header_cell("Rows out"),
        header_cell("Dropped"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for counts in &outcome.report.steps {
        table.add_row(vec![
            Cell::new(&counts.step),
            Cell::new(counts.rows_in),
            Cell::new(counts.rows_out),
            dropped_cell(counts.rows_dropped()),
        ]);
    }
    let input_rows = outcome.report.input_rows().unwrap_or(0);
    let output_rows = outcome.report.output_rows().unwrap_or(0);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(input_rows).add_attribute(Attribute::Bold),
        Cell::new(output_rows).add_attribute(Attribute::Bold),
        dropped_cell(outcome.report.rows_dropped()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if !outcome.report.unmapped_codes.is_empty() {
        let mut unmapped = Table::new();
        unmapped.set_header(vec![header_cell("Column"), header_cell("Unmapped codes")]);
        apply_table_style(&mut unmapped);
        align_column(&mut unmapped, 1, CellAlignment::Right);
        for (column, count) in &outcome.report.unmapped_codes {
            unmapped.add_row(vec![
                Cell::new(column),
                Cell::new(count).fg(Color::Yellow),
            ]);
        }
        println!();
        println!("Unmapped codes (remapped to missing):");
        println!("{unmapped}");
    }
}

pub fn print_steps(steps: &[String]) {
    for step in steps {
        println!("{step}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dropped_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
