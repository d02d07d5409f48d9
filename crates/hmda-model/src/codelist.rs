//! Core codebook types.
//!
//! Every lookup the pipeline performs is driven by the static tables in
//! [`crate::codebook`]; the types here are the shapes those tables take.
//! Keeping the tables as data means a codebook revision touches one entry,
//! not a transformation routine.

/// Target of a code remapping. Lookup tables may mix text labels with
/// boolean labels (the `*_observed` columns map codes to true/false while
/// reserving a text sentinel for "no co-applicant").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Text(&'static str),
    Bool(bool),
}

impl Label {
    /// Render the label as cell text. Booleans follow the table convention
    /// for mapped columns: `true` / `false` as text.
    pub fn as_cell_text(&self) -> String {
        match self {
            Label::Text(text) => (*text).to_string(),
            Label::Bool(true) => "true".to_string(),
            Label::Bool(false) => "false".to_string(),
        }
    }
}

/// A fixed code-to-label table for one column. Codes absent from the table
/// remap to missing, never to an error.
#[derive(Debug, Clone, Copy)]
pub struct Codelist {
    /// Column the table applies to.
    pub column: &'static str,
    pub entries: &'static [(&'static str, Label)],
}

impl Codelist {
    pub fn lookup(&self, code: &str) -> Option<&Label> {
        self.entries
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, label)| label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A multi-valued field group: up to five slot columns holding an unordered
/// collection of codes, expanded into one indicator column per vocabulary
/// entry.
#[derive(Debug, Clone, Copy)]
pub struct FieldGroup {
    /// Prefix for derived indicator columns (`<group>_is_<category>`).
    pub group: &'static str,
    /// Slot columns, in source order (order is irrelevant to the result).
    pub slots: &'static [&'static str],
    /// Code to category name, covering the field's full vocabulary.
    pub vocabulary: &'static [(&'static str, &'static str)],
}

impl FieldGroup {
    pub fn indicator_column(&self, category: &str) -> String {
        format!("{}_is_{}", self.group, category)
    }
}

/// A row filter: drop every row whose value in `column` is one of
/// `disallowed`, compared as text.
#[derive(Debug, Clone, Copy)]
pub struct SentinelFilter {
    pub column: &'static str,
    pub disallowed: &'static [&'static str],
}

/// A boolean derivation: `target = (source == true_value)`, then drop
/// `source`. The result is a strict boolean; a missing source yields false.
#[derive(Debug, Clone, Copy)]
pub struct BooleanRule {
    pub target: &'static str,
    pub source: &'static str,
    pub true_value: &'static str,
}

/// An in-place value rewrite. Unlike a [`Codelist`], values matching no rule
/// pass through unchanged. Exact replacements run first; any substring
/// replacements then apply to whatever remains.
#[derive(Debug, Clone, Copy)]
pub struct ValueRewrite {
    pub column: &'static str,
    pub exact: &'static [(&'static str, &'static str)],
    pub substring: &'static [(&'static str, &'static str)],
}

impl ValueRewrite {
    pub fn apply(&self, value: &str) -> String {
        for (from, to) in self.exact {
            if value == *from {
                return (*to).to_string();
            }
        }
        let mut rewritten = value.to_string();
        for (from, to) in self.substring {
            rewritten = rewritten.replace(from, to);
        }
        rewritten
    }
}
