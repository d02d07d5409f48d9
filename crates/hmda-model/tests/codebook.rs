//! Tests for the codebook tables.

use hmda_model::codebook::{
    ACTION_TAKEN, APPLICANT_RACE_GROUP, AUS_GROUP, BOOLEAN_RULES, CODELISTS,
    CO_APPLICANT_ETHNICITY_OBSERVED, DENIAL_REASON_GROUP, DROPPED_COLUMNS, FIELD_GROUPS,
    REQUIRED_COLUMNS, SENTINEL_FILTERS,
};
use hmda_model::{COUNTY_CODE, Label};

#[test]
fn county_lookup_maps_fips_to_name() {
    assert_eq!(
        COUNTY_CODE.lookup("36001"),
        Some(&Label::Text("Albany"))
    );
    assert_eq!(
        COUNTY_CODE.lookup("36119"),
        Some(&Label::Text("Westchester"))
    );
}

#[test]
fn county_lookup_misses_unknown_codes() {
    // Another state's FIPS code is not an error, just absent.
    assert_eq!(COUNTY_CODE.lookup("06037"), None);
    assert_eq!(COUNTY_CODE.lookup(""), None);
}

#[test]
fn county_table_covers_all_62_counties() {
    assert_eq!(COUNTY_CODE.len(), 62);
}

#[test]
fn observed_tables_mix_boolean_and_text_labels() {
    assert_eq!(
        CO_APPLICANT_ETHNICITY_OBSERVED.lookup("1"),
        Some(&Label::Bool(true))
    );
    assert_eq!(
        CO_APPLICANT_ETHNICITY_OBSERVED.lookup("2"),
        Some(&Label::Bool(false))
    );
    // Code 3 ("not available") intentionally remaps to missing.
    assert_eq!(CO_APPLICANT_ETHNICITY_OBSERVED.lookup("3"), None);
    assert_eq!(
        CO_APPLICANT_ETHNICITY_OBSERVED.lookup("4"),
        Some(&Label::Text("no_co-applicant"))
    );
}

#[test]
fn action_taken_covers_all_disposition_codes() {
    for code in ["1", "2", "3", "4", "5", "6", "7", "8"] {
        assert!(ACTION_TAKEN.lookup(code).is_some(), "missing code {code}");
    }
}

#[test]
fn codelist_columns_are_unique() {
    for (idx, list) in CODELISTS.iter().enumerate() {
        for other in &CODELISTS[idx + 1..] {
            assert_ne!(list.column, other.column);
        }
    }
}

#[test]
fn vocabularies_have_no_duplicate_codes() {
    for group in FIELD_GROUPS {
        for (idx, (code, _)) in group.vocabulary.iter().enumerate() {
            for (other, _) in &group.vocabulary[idx + 1..] {
                assert_ne!(code, other, "duplicate code in {}", group.group);
            }
        }
    }
}

#[test]
fn race_vocabulary_nests_aggregate_and_detail_codes() {
    let codes: Vec<&str> = APPLICANT_RACE_GROUP
        .vocabulary
        .iter()
        .map(|(code, _)| *code)
        .collect();
    assert!(codes.contains(&"2"));
    assert!(codes.contains(&"22"));
    assert_eq!(APPLICANT_RACE_GROUP.vocabulary.len(), 19);
}

#[test]
fn indicator_columns_follow_naming_convention() {
    assert_eq!(
        APPLICANT_RACE_GROUP.indicator_column("Chinese"),
        "applicant_race_is_Chinese"
    );
    assert_eq!(AUS_GROUP.indicator_column("DU"), "aus_is_DU");
}

#[test]
fn denial_reason_group_has_four_slots() {
    assert_eq!(DENIAL_REASON_GROUP.slots.len(), 4);
    assert_eq!(DENIAL_REASON_GROUP.vocabulary.len(), 10);
}

#[test]
fn fixed_lists_match_the_2024_release() {
    assert_eq!(DROPPED_COLUMNS.len(), 20);
    assert_eq!(SENTINEL_FILTERS.len(), 24);
    assert_eq!(BOOLEAN_RULES.len(), 10);
    assert_eq!(REQUIRED_COLUMNS.len(), 6);
}

#[test]
fn boolean_rules_drop_their_sources() {
    for rule in BOOLEAN_RULES {
        assert_ne!(rule.target, rule.source);
        assert_eq!(rule.true_value, "1");
    }
}
