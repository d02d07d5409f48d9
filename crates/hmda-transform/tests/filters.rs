//! Tests for the row filters.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use hmda_model::SentinelFilter;
use hmda_transform::{CleanReport, CleanStep, DropIncompleteStep, SentinelFilterStep};

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

static PURPOSE_FILTER: SentinelFilter = SentinelFilter {
    column: "loan_purpose",
    disallowed: &["5"],
};

#[test]
fn filter_drops_only_disallowed_rows() {
    let mut df = test_df(vec![
        ("loan_purpose", vec![Some("1"), Some("5"), Some("2")]),
        ("loan_amount", vec![Some("a"), Some("b"), Some("c")]),
    ]);
    let mut report = CleanReport::new();
    SentinelFilterStep::new(&PURPOSE_FILTER)
        .apply(&mut df, &mut report)
        .unwrap();
    assert_eq!(df.height(), 2);
    // No surviving row carries a disallowed value.
    for idx in 0..df.height() {
        assert_ne!(cell(&df, "loan_purpose", idx), "5");
    }
    assert_eq!(cell(&df, "loan_amount", 0), "a");
    assert_eq!(cell(&df, "loan_amount", 1), "c");
}

#[test]
fn filter_without_matches_is_a_noop() {
    let mut df = test_df(vec![("loan_purpose", vec![Some("1"), Some("2")])]);
    let mut report = CleanReport::new();
    SentinelFilterStep::new(&PURPOSE_FILTER)
        .apply(&mut df, &mut report)
        .unwrap();
    assert_eq!(df.height(), 2);
}

#[test]
fn null_cells_never_match_a_sentinel() {
    let mut df = test_df(vec![("loan_purpose", vec![None, Some("5")])]);
    let mut report = CleanReport::new();
    SentinelFilterStep::new(&PURPOSE_FILTER)
        .apply(&mut df, &mut report)
        .unwrap();
    assert_eq!(df.height(), 1);
    assert_eq!(cell(&df, "loan_purpose", 0), "");
}

#[test]
fn filter_on_absent_column_is_fatal() {
    let mut df = test_df(vec![("loan_amount", vec![Some("a")])]);
    let mut report = CleanReport::new();
    let error = SentinelFilterStep::new(&PURPOSE_FILTER)
        .apply(&mut df, &mut report)
        .unwrap_err();
    assert!(error.to_string().contains("loan_purpose"));
}

#[test]
fn drop_incomplete_requires_every_listed_column() {
    static REQUIRED: &[&str] = &["county_code", "income"];
    let mut df = test_df(vec![
        (
            "county_code",
            vec![Some("Albany"), None, Some("Kings"), Some("Queens")],
        ),
        ("income", vec![Some("96"), Some("75"), None, Some("120")]),
    ]);
    let mut report = CleanReport::new();
    DropIncompleteStep::new(REQUIRED)
        .apply(&mut df, &mut report)
        .unwrap();
    assert_eq!(df.height(), 2);
    for idx in 0..df.height() {
        assert!(!cell(&df, "county_code", idx).is_empty());
        assert!(!cell(&df, "income", idx).is_empty());
    }
}
