//! Tests for code-to-label remapping.

use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};

use hmda_model::codebook::{CO_APPLICANT_SEX_OBSERVED, CONFORMING_LOAN_LIMIT};
use hmda_model::{COUNTY_CODE, Codelist, Label};
use hmda_transform::{CleanReport, CleanStep, CodelistMapStep};

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

fn cell<'a>(df: &'a DataFrame, name: &str, idx: usize) -> AnyValue<'a> {
    df.column(name).unwrap().get(idx).unwrap()
}

#[test]
fn known_codes_map_to_their_labels() {
    let mut df = test_df(vec![(
        "county_code",
        vec![Some("36001"), Some("36047"), Some("36081")],
    )]);
    let mut report = CleanReport::new();
    CodelistMapStep::new(&COUNTY_CODE)
        .apply(&mut df, &mut report)
        .unwrap();
    assert_eq!(
        hmda_ingest::any_to_string(cell(&df, "county_code", 0)),
        "Albany"
    );
    assert_eq!(
        hmda_ingest::any_to_string(cell(&df, "county_code", 1)),
        "Kings"
    );
    assert_eq!(
        hmda_ingest::any_to_string(cell(&df, "county_code", 2)),
        "Queens"
    );
    assert!(report.unmapped_codes.is_empty());
}

#[test]
fn unknown_codes_become_missing_and_are_counted() {
    let mut df = test_df(vec![(
        "county_code",
        vec![Some("36001"), Some("99999"), Some("06037"), None],
    )]);
    let mut report = CleanReport::new();
    CodelistMapStep::new(&COUNTY_CODE)
        .apply(&mut df, &mut report)
        .unwrap();
    assert_eq!(cell(&df, "county_code", 1), AnyValue::Null);
    assert_eq!(cell(&df, "county_code", 2), AnyValue::Null);
    // Originally-missing cells stay missing without counting as unmapped.
    assert_eq!(cell(&df, "county_code", 3), AnyValue::Null);
    assert_eq!(report.unmapped_codes.get("county_code"), Some(&2));
    // The row count is untouched; dropping is the final filter's job.
    assert_eq!(df.height(), 4);
}

#[test]
fn heterogeneous_tables_render_booleans_and_sentinels() {
    let mut df = test_df(vec![(
        "co-applicant_sex_observed",
        vec![Some("1"), Some("2"), Some("3"), Some("4")],
    )]);
    let mut report = CleanReport::new();
    CodelistMapStep::new(&CO_APPLICANT_SEX_OBSERVED)
        .apply(&mut df, &mut report)
        .unwrap();
    assert_eq!(
        hmda_ingest::any_to_string(cell(&df, "co-applicant_sex_observed", 0)),
        "true"
    );
    assert_eq!(
        hmda_ingest::any_to_string(cell(&df, "co-applicant_sex_observed", 1)),
        "false"
    );
    // Code 3 has no table entry, so "not available" becomes a gap.
    assert_eq!(cell(&df, "co-applicant_sex_observed", 2), AnyValue::Null);
    assert_eq!(
        hmda_ingest::any_to_string(cell(&df, "co-applicant_sex_observed", 3)),
        "no_co-applicant"
    );
    assert_eq!(
        report.unmapped_codes.get("co-applicant_sex_observed"),
        Some(&1)
    );
}

#[test]
fn mapping_totality_over_the_full_table() {
    static LIST: &Codelist = &CONFORMING_LOAN_LIMIT;
    let codes: Vec<Option<&str>> = LIST.entries.iter().map(|(code, _)| Some(*code)).collect();
    let mut df = test_df(vec![("conforming_loan_limit", codes)]);
    let mut report = CleanReport::new();
    CodelistMapStep::new(LIST)
        .apply(&mut df, &mut report)
        .unwrap();
    for (idx, (_, label)) in LIST.entries.iter().enumerate() {
        let expected = match label {
            Label::Text(text) => (*text).to_string(),
            Label::Bool(flag) => flag.to_string(),
        };
        assert_eq!(
            hmda_ingest::any_to_string(cell(&df, "conforming_loan_limit", idx)),
            expected
        );
    }
    assert!(report.unmapped_codes.is_empty());
}
