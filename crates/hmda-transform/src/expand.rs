//! Multi-valued field group expansion.

use anyhow::Result;
use polars::prelude::DataFrame;

use hmda_model::FieldGroup;

use crate::data_utils::{opt_string_column, require_column, set_bool_column};
use crate::pipeline::CleanStep;
use crate::report::CleanReport;

/// Expand a repeated-code field group into one boolean indicator column per
/// vocabulary entry, then drop the slot columns.
///
/// An indicator is true iff its code appears as the exact text of at least
/// one slot, so slot order and duplicate codes are irrelevant, and missing
/// slots never match. Codes and their sub-codes are independent vocabulary
/// entries: race `2` (Asian) and `22` (Chinese) can both be true on one row.
pub struct ExpandGroupStep {
    name: String,
    group: &'static FieldGroup,
}

impl ExpandGroupStep {
    pub fn new(group: &'static FieldGroup) -> Self {
        Self {
            name: format!("expand:{}", group.group),
            group,
        }
    }
}

impl CleanStep for ExpandGroupStep {
    fn apply(&self, df: &mut DataFrame, _report: &mut CleanReport) -> Result<()> {
        let mut slot_values = Vec::with_capacity(self.group.slots.len());
        for slot in self.group.slots {
            require_column(df, &self.name, slot)?;
            slot_values.push(opt_string_column(df, slot)?);
        }
        for (code, category) in self.group.vocabulary {
            let flags: Vec<bool> = (0..df.height())
                .map(|idx| {
                    slot_values
                        .iter()
                        .any(|slot| slot[idx].as_deref() == Some(*code))
                })
                .collect();
            set_bool_column(df, &self.group.indicator_column(category), flags)?;
        }
        for slot in self.group.slots {
            df.drop_in_place(slot)?;
        }
        Ok(())
    }

    fn step_name(&self) -> &str {
        &self.name
    }
}
