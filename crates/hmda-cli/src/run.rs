//! The clean command: load, transform, write, report.

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use hmda_ingest::read_lar_csv;
use hmda_output::write_clean_csv;
use hmda_transform::{CleanReport, build_default_pipeline};

/// Inputs for one cleaning run.
#[derive(Debug, Clone)]
pub struct CleanRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Optional path for the JSON run report.
    pub report: Option<PathBuf>,
}

/// Outcome of a completed run, consumed by the summary printer.
#[derive(Debug)]
pub struct CleanOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report_path: Option<PathBuf>,
    pub report: CleanReport,
}

/// Execute the whole pipeline once: one file in, one file out. Any failure
/// aborts the run; there are no retries or partial results.
pub fn run_clean(request: &CleanRequest) -> Result<CleanOutcome> {
    let span = info_span!("clean", input = %request.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut df = read_lar_csv(&request.input)
        .with_context(|| format!("load {}", request.input.display()))?;
    let input_rows = df.height();

    let mut report = CleanReport::new();
    build_default_pipeline()
        .execute(&mut df, &mut report)
        .context("clean frame")?;

    write_clean_csv(&request.output, &df)
        .with_context(|| format!("write {}", request.output.display()))?;

    let report_path = match &request.report {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create report: {}", path.display()))?;
            serde_json::to_writer_pretty(file, &report)
                .with_context(|| format!("write report: {}", path.display()))?;
            Some(path.clone())
        }
        None => None,
    };

    info!(
        input_rows,
        output_rows = df.height(),
        output_columns = df.width(),
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );

    Ok(CleanOutcome {
        input: request.input.clone(),
        output: request.output.clone(),
        report_path,
        report,
    })
}

/// Step names of the default pipeline, in execution order.
pub fn pipeline_steps() -> Vec<String> {
    build_default_pipeline()
        .step_names()
        .into_iter()
        .map(str::to_string)
        .collect()
}
