//! Row filters.

use anyhow::Result;
use polars::prelude::DataFrame;

use hmda_model::SentinelFilter;

use crate::data_utils::{filter_rows, opt_string_column, require_column, string_column};
use crate::pipeline::CleanStep;
use crate::report::CleanReport;

/// Drop rows whose value in one column is in a disallowed set, compared as
/// text. Null cells never match a sentinel. A column with no disallowed
/// values present is a no-op.
pub struct SentinelFilterStep {
    name: String,
    filter: &'static SentinelFilter,
}

impl SentinelFilterStep {
    pub fn new(filter: &'static SentinelFilter) -> Self {
        Self {
            name: format!("filter:{}", filter.column),
            filter,
        }
    }
}

impl CleanStep for SentinelFilterStep {
    fn apply(&self, df: &mut DataFrame, _report: &mut CleanReport) -> Result<()> {
        require_column(df, &self.name, self.filter.column)?;
        let values = string_column(df, self.filter.column)?;
        let keep: Vec<bool> = values
            .iter()
            .map(|value| !self.filter.disallowed.contains(&value.as_str()))
            .collect();
        if keep.iter().all(|flag| *flag) {
            return Ok(());
        }
        filter_rows(df, &keep)
    }

    fn step_name(&self) -> &str {
        &self.name
    }
}

/// Drop every row still missing a value in any required column. Runs last:
/// the remapping steps are the source of new missing values.
pub struct DropIncompleteStep {
    columns: &'static [&'static str],
}

impl DropIncompleteStep {
    pub fn new(columns: &'static [&'static str]) -> Self {
        Self { columns }
    }
}

impl CleanStep for DropIncompleteStep {
    fn apply(&self, df: &mut DataFrame, _report: &mut CleanReport) -> Result<()> {
        let mut keep = vec![true; df.height()];
        for column in self.columns {
            require_column(df, self.step_name(), column)?;
            for (idx, value) in opt_string_column(df, column)?.iter().enumerate() {
                if value.is_none() {
                    keep[idx] = false;
                }
            }
        }
        filter_rows(df, &keep)
    }

    fn step_name(&self) -> &str {
        "drop_incomplete"
    }
}
