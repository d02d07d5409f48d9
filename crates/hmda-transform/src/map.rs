//! Code-to-label remapping.

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::warn;

use hmda_model::Codelist;

use crate::data_utils::{opt_string_column, require_column, set_string_column};
use crate::pipeline::CleanStep;
use crate::report::CleanReport;

/// Replace each cell with its codelist label. A non-missing code absent from
/// the table becomes missing; the occurrence count is reported so a codebook
/// revision surfaces in the diagnostics instead of silently thinning the
/// final output.
pub struct CodelistMapStep {
    name: String,
    codelist: &'static Codelist,
}

impl CodelistMapStep {
    pub fn new(codelist: &'static Codelist) -> Self {
        Self {
            name: format!("map:{}", codelist.column),
            codelist,
        }
    }
}

impl CleanStep for CodelistMapStep {
    fn apply(&self, df: &mut DataFrame, report: &mut CleanReport) -> Result<()> {
        require_column(df, &self.name, self.codelist.column)?;
        let values = opt_string_column(df, self.codelist.column)?;
        let mut unmapped = 0usize;
        let mapped: Vec<Option<String>> = values
            .into_iter()
            .map(|value| match value {
                None => None,
                Some(code) => match self.codelist.lookup(&code) {
                    Some(label) => Some(label.as_cell_text()),
                    None => {
                        unmapped += 1;
                        None
                    }
                },
            })
            .collect();
        set_string_column(df, self.codelist.column, mapped)?;
        if unmapped > 0 {
            warn!(
                column = self.codelist.column,
                count = unmapped,
                "unrecognized codes remapped to missing"
            );
            report.record_unmapped(self.codelist.column, unmapped);
        }
        Ok(())
    }

    fn step_name(&self) -> &str {
        &self.name
    }
}
