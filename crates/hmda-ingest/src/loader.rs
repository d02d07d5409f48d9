//! All-text CSV loading.
//!
//! Every field in the LAR extract is ingested as opaque text; nothing is
//! parsed as numeric or date. Empty cells become null so that later steps can
//! distinguish "missing" from any real value.

use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::debug;

/// Read a LAR CSV file into an all-string [`DataFrame`].
///
/// The first record is the header row. Short records are padded with nulls;
/// records longer than the header are rejected. A file with no header row is
/// an error, an empty body is not.
pub fn read_lar_csv(path: &Path) -> Result<DataFrame> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read header row: {}", path.display()))?
        .iter()
        .map(|h| h.trim().trim_matches('\u{feff}').to_string())
        .collect();
    if headers.is_empty() {
        bail!("no header row in {}", path.display());
    }

    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for (row_idx, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("read record {}: {}", row_idx + 1, path.display()))?;
        if record.len() > headers.len() {
            bail!(
                "record {} has {} fields, header has {}: {}",
                row_idx + 1,
                record.len(),
                headers.len(),
                path.display()
            );
        }
        for (col_idx, values) in columns.iter_mut().enumerate() {
            let cell = record.get(col_idx).map(str::trim).unwrap_or("");
            values.push(if cell.is_empty() {
                None
            } else {
                Some(cell.to_string())
            });
        }
    }

    let series: Vec<Column> = headers
        .iter()
        .zip(columns)
        .map(|(name, values)| Series::new(name.as_str().into(), values).into())
        .collect();
    let df = DataFrame::new(series).with_context(|| format!("build frame: {}", path.display()))?;
    debug!(
        rows = df.height(),
        columns = df.width(),
        path = %path.display(),
        "input loaded"
    );
    Ok(df)
}
