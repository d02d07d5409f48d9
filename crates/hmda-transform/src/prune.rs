//! Up-front column pruning.

use anyhow::Result;
use polars::prelude::DataFrame;

use crate::data_utils::drop_column;
use crate::pipeline::CleanStep;
use crate::report::CleanReport;

/// Remove a fixed set of columns. Every named column must be present; the
/// pruner is the first place a schema drift from the expected release shows
/// up.
pub struct DropColumnsStep {
    columns: &'static [&'static str],
}

impl DropColumnsStep {
    pub fn new(columns: &'static [&'static str]) -> Self {
        Self { columns }
    }
}

impl CleanStep for DropColumnsStep {
    fn apply(&self, df: &mut DataFrame, _report: &mut CleanReport) -> Result<()> {
        for column in self.columns {
            drop_column(df, self.step_name(), column)?;
        }
        Ok(())
    }

    fn step_name(&self) -> &str {
        "drop_columns"
    }
}
