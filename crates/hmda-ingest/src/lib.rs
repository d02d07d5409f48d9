pub mod loader;
pub mod polars_utils;

pub use loader::read_lar_csv;
pub use polars_utils::{any_to_opt_string, any_to_string};
