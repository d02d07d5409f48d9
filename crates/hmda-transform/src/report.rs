//! Run diagnostics.
//!
//! Row counts per step are the pipeline's only observability mechanism, and
//! unmapped-code counts are the early warning for a codebook revision: the
//! remap-to-missing policy stays, but it no longer degrades silently.

use std::collections::BTreeMap;

use serde::Serialize;

/// Row counts around one executed step.
#[derive(Debug, Clone, Serialize)]
pub struct StepCounts {
    pub step: String,
    pub rows_in: usize,
    pub rows_out: usize,
}

impl StepCounts {
    pub fn rows_dropped(&self) -> usize {
        self.rows_in.saturating_sub(self.rows_out)
    }
}

/// Diagnostics accumulated over one pipeline run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanReport {
    /// Per-step row counts, in execution order.
    pub steps: Vec<StepCounts>,
    /// Occurrences of codes absent from their lookup table, per column.
    pub unmapped_codes: BTreeMap<String, usize>,
}

impl CleanReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_step(&mut self, step: &str, rows_in: usize, rows_out: usize) {
        self.steps.push(StepCounts {
            step: step.to_string(),
            rows_in,
            rows_out,
        });
    }

    pub fn record_unmapped(&mut self, column: &str, count: usize) {
        *self.unmapped_codes.entry(column.to_string()).or_insert(0) += count;
    }

    pub fn input_rows(&self) -> Option<usize> {
        self.steps.first().map(|counts| counts.rows_in)
    }

    pub fn output_rows(&self) -> Option<usize> {
        self.steps.last().map(|counts| counts.rows_out)
    }

    pub fn rows_dropped(&self) -> usize {
        self.steps.iter().map(StepCounts::rows_dropped).sum()
    }
}
