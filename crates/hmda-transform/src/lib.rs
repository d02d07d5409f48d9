pub mod data_utils;
pub mod derive;
pub mod expand;
pub mod filter;
pub mod map;
pub mod normalize;
pub mod pipeline;
pub mod prune;
pub mod report;
pub mod rewrite;

pub use derive::BooleanDeriveStep;
pub use expand::ExpandGroupStep;
pub use filter::{DropIncompleteStep, SentinelFilterStep};
pub use map::CodelistMapStep;
pub use normalize::{TextNormalizeStep, sanitize_categorical};
pub use pipeline::{CleanStep, CleaningPipeline, build_default_pipeline};
pub use prune::DropColumnsStep;
pub use report::{CleanReport, StepCounts};
pub use rewrite::ValueRewriteStep;
