//! In-place value rewrites.

use anyhow::Result;
use polars::prelude::DataFrame;

use hmda_model::ValueRewrite;

use crate::data_utils::{opt_string_column, require_column, set_string_column};
use crate::pipeline::CleanStep;
use crate::report::CleanReport;

/// Apply the fixed token rewrites (`>149` → `over_149`, DTI and age bucket
/// renames, `%` spelled out). Unlike the codelist mapper, values matching no
/// rule pass through unchanged.
pub struct ValueRewriteStep {
    rewrites: &'static [ValueRewrite],
}

impl ValueRewriteStep {
    pub fn new(rewrites: &'static [ValueRewrite]) -> Self {
        Self { rewrites }
    }
}

impl CleanStep for ValueRewriteStep {
    fn apply(&self, df: &mut DataFrame, _report: &mut CleanReport) -> Result<()> {
        for rewrite in self.rewrites {
            require_column(df, self.step_name(), rewrite.column)?;
            let values = opt_string_column(df, rewrite.column)?;
            let rewritten: Vec<Option<String>> = values
                .into_iter()
                .map(|value| value.map(|text| rewrite.apply(&text)))
                .collect();
            set_string_column(df, rewrite.column, rewritten)?;
        }
        Ok(())
    }

    fn step_name(&self) -> &str {
        "rewrite_values"
    }
}
