//! Tests for in-place value rewrites.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use hmda_model::ValueRewrite;
use hmda_model::codebook::VALUE_REWRITES;
use hmda_transform::{CleanReport, CleanStep, ValueRewriteStep};

fn test_df(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| {
            Series::new(
                name.into(),
                values
                    .iter()
                    .map(|value| value.map(String::from))
                    .collect::<Vec<_>>(),
            )
            .into_column()
        })
        .collect();
    DataFrame::new(cols).unwrap()
}

fn cell(df: &DataFrame, name: &str, idx: usize) -> String {
    hmda_ingest::any_to_string(df.column(name).unwrap().get(idx).unwrap())
}

fn dti_rewrite() -> &'static ValueRewrite {
    VALUE_REWRITES
        .iter()
        .find(|rewrite| rewrite.column == "debt_to_income_ratio")
        .unwrap()
}

#[test]
fn exact_rules_take_precedence_over_substring_rules() {
    // `>60%` is renamed wholesale, not run through the `%` expansion.
    assert_eq!(dti_rewrite().apply(">60%"), "over_60_percent");
    assert_eq!(dti_rewrite().apply("<20%"), "below_20_percent");
}

#[test]
fn percent_expands_inside_bucket_values() {
    assert_eq!(dti_rewrite().apply("20%-<30%"), "20_percent-<30_percent");
    assert_eq!(dti_rewrite().apply("50%-60%"), "50_percent-60_percent");
}

#[test]
fn unmatched_values_pass_through() {
    assert_eq!(dti_rewrite().apply("36"), "36");
}

#[test]
fn step_applies_every_rewrite_table() {
    let mut df = test_df(vec![
        ("total_units", vec![Some(">149"), Some("2")]),
        ("debt_to_income_ratio", vec![Some(">60%"), Some("41")]),
        ("applicant_age", vec![Some("<25"), Some("35-44")]),
        ("co-applicant_age", vec![Some(">74"), None]),
    ]);
    let mut report = CleanReport::new();
    ValueRewriteStep::new(VALUE_REWRITES)
        .apply(&mut df, &mut report)
        .unwrap();
    assert_eq!(cell(&df, "total_units", 0), "over_149");
    assert_eq!(cell(&df, "total_units", 1), "2");
    assert_eq!(cell(&df, "debt_to_income_ratio", 0), "over_60_percent");
    assert_eq!(cell(&df, "debt_to_income_ratio", 1), "41");
    assert_eq!(cell(&df, "applicant_age", 0), "below_25");
    assert_eq!(cell(&df, "applicant_age", 1), "35-44");
    assert_eq!(cell(&df, "co-applicant_age", 0), "above_74");
    assert_eq!(cell(&df, "co-applicant_age", 1), "");
}
