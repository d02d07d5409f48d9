//! Text normalization for derived categorical columns.

use anyhow::Result;
use polars::prelude::DataFrame;

use crate::data_utils::{opt_string_column, require_column, set_string_column};
use crate::pipeline::CleanStep;
use crate::report::CleanReport;

/// Replace every character outside `[A-Za-z0-9_-]` with `_`. Length and
/// cell-to-cell independence are preserved, and the result is a fixed point
/// of the function.
pub fn sanitize_categorical(value: &str) -> String {
    value
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

/// Sanitize the label-bearing derived columns so downstream tooling sees
/// identifier-safe category values.
pub struct TextNormalizeStep {
    columns: &'static [&'static str],
}

impl TextNormalizeStep {
    pub fn new(columns: &'static [&'static str]) -> Self {
        Self { columns }
    }
}

impl CleanStep for TextNormalizeStep {
    fn apply(&self, df: &mut DataFrame, _report: &mut CleanReport) -> Result<()> {
        for column in self.columns {
            require_column(df, self.step_name(), column)?;
            let values = opt_string_column(df, column)?;
            let sanitized: Vec<Option<String>> = values
                .into_iter()
                .map(|value| value.map(|text| sanitize_categorical(&text)))
                .collect();
            set_string_column(df, column, sanitized)?;
        }
        Ok(())
    }

    fn step_name(&self) -> &str {
        "normalize_text"
    }
}
