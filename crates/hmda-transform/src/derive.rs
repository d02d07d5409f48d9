//! Boolean derivation from single-valued coded columns.

use anyhow::Result;
use polars::prelude::DataFrame;

use hmda_model::BooleanRule;

use crate::data_utils::{opt_string_column, require_column, set_bool_column};
use crate::pipeline::CleanStep;
use crate::report::CleanReport;

/// For each rule, create `target = (source == true_value)` as a strict
/// boolean and drop the source column. A missing source cell yields false,
/// never a missing boolean. Rules are independent of one another.
pub struct BooleanDeriveStep {
    rules: &'static [BooleanRule],
}

impl BooleanDeriveStep {
    pub fn new(rules: &'static [BooleanRule]) -> Self {
        Self { rules }
    }
}

impl CleanStep for BooleanDeriveStep {
    fn apply(&self, df: &mut DataFrame, _report: &mut CleanReport) -> Result<()> {
        for rule in self.rules {
            require_column(df, self.step_name(), rule.source)?;
            let values = opt_string_column(df, rule.source)?;
            let flags: Vec<bool> = values
                .iter()
                .map(|value| value.as_deref() == Some(rule.true_value))
                .collect();
            set_bool_column(df, rule.target, flags)?;
            df.drop_in_place(rule.source)?;
        }
        Ok(())
    }

    fn step_name(&self) -> &str {
        "derive_booleans"
    }
}
