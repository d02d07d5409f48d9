//! Ordered step execution over one frame.
//!
//! The cleaning run is a fixed sequence of steps, each mutating the frame in
//! place. Data flows strictly forward; a step never reads the output of a
//! later one.
//!
//! # Standard Pipeline Order
//!
//! 1. Drop the irrelevant columns
//! 2. Sentinel row filters (not-available labels, purpose 5, age 8888,
//!    the 1111 exemption code, `Exempt`)
//! 3. Code-to-label remapping per codelist
//! 4. Boolean derivation from single-valued coded columns
//! 5. Text normalization of the derived categorical columns
//! 6. In-place value rewrites
//! 7. Multi-valued field group expansion
//! 8. Drop rows with missing required values

use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::debug;

use hmda_model::codebook;

use crate::derive::BooleanDeriveStep;
use crate::expand::ExpandGroupStep;
use crate::filter::{DropIncompleteStep, SentinelFilterStep};
use crate::map::CodelistMapStep;
use crate::normalize::TextNormalizeStep;
use crate::prune::DropColumnsStep;
use crate::report::CleanReport;
use crate::rewrite::ValueRewriteStep;

/// A single step in the cleaning pipeline.
pub trait CleanStep {
    /// Execute this step, mutating the frame in place. Steps that discover
    /// diagnostics (unmapped codes) record them on the report; row counts are
    /// recorded by the pipeline itself.
    fn apply(&self, df: &mut DataFrame, report: &mut CleanReport) -> Result<()>;

    /// Name for diagnostics and error context.
    fn step_name(&self) -> &str;
}

/// An ordered pipeline of cleaning steps.
pub struct CleaningPipeline {
    steps: Vec<Box<dyn CleanStep>>,
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl CleaningPipeline {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn add_step(mut self, step: Box<dyn CleanStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Step names in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.step_name()).collect()
    }

    /// Execute all steps in order, recording row counts around each.
    pub fn execute(&self, df: &mut DataFrame, report: &mut CleanReport) -> Result<()> {
        for step in &self.steps {
            let rows_in = df.height();
            let start = Instant::now();
            step.apply(df, report)
                .with_context(|| format!("step `{}`", step.step_name()))?;
            let rows_out = df.height();
            report.record_step(step.step_name(), rows_in, rows_out);
            debug!(
                step = step.step_name(),
                rows_in,
                rows_out,
                duration_ms = start.elapsed().as_millis(),
                "step complete"
            );
        }
        Ok(())
    }
}

/// Build the full cleaning pipeline for the 2024 LAR release.
pub fn build_default_pipeline() -> CleaningPipeline {
    let mut pipeline = CleaningPipeline::new()
        .add_step(Box::new(DropColumnsStep::new(codebook::DROPPED_COLUMNS)));
    for filter in codebook::SENTINEL_FILTERS {
        pipeline = pipeline.add_step(Box::new(SentinelFilterStep::new(filter)));
    }
    for codelist in codebook::CODELISTS {
        pipeline = pipeline.add_step(Box::new(CodelistMapStep::new(*codelist)));
    }
    pipeline = pipeline
        .add_step(Box::new(BooleanDeriveStep::new(codebook::BOOLEAN_RULES)))
        .add_step(Box::new(TextNormalizeStep::new(codebook::NORMALIZED_COLUMNS)))
        .add_step(Box::new(ValueRewriteStep::new(codebook::VALUE_REWRITES)));
    for group in codebook::FIELD_GROUPS {
        pipeline = pipeline.add_step(Box::new(ExpandGroupStep::new(*group)));
    }
    pipeline.add_step(Box::new(DropIncompleteStep::new(codebook::REQUIRED_COLUMNS)))
}
