//! Polars `AnyValue` helpers.
//!
//! The pipeline's frames hold string columns (raw and remapped fields) and
//! boolean columns (derived indicators), so cell access only has to handle
//! those plus null.

use polars::prelude::AnyValue;

/// Render a cell as text. Null becomes the empty string; booleans render as
/// `true`/`false`, matching the convention the remapping tables use.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if b { "true" } else { "false" }.to_string(),
        other => other.to_string(),
    }
}

/// Render a cell as text, with null and blank text both reported as missing.
pub fn any_to_opt_string(value: AnyValue<'_>) -> Option<String> {
    let text = any_to_string(value);
    if text.trim().is_empty() { None } else { Some(text) }
}
