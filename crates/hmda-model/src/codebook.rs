//! The fixed codebook for the 2024 HMDA LAR release.
//!
//! Every column list, disallowed-value set, code table, and vocabulary the
//! pipeline uses lives here as data. The tables are tied to the published
//! LAR field list for the 2024 release; a schema change in a future release
//! is expected to surface as a missing-column error, not to be absorbed.

use crate::codelist::{BooleanRule, Codelist, FieldGroup, Label, SentinelFilter, ValueRewrite};
use crate::county::COUNTY_CODE;

/// Columns removed up front as irrelevant to downstream analysis.
pub const DROPPED_COLUMNS: &[&str] = &[
    "activity_year",
    "lei",
    "derived_msa-md",
    "state_code",
    "census_tract",
    "total_loan_costs",
    "total_points_and_fees",
    "origination_charges",
    "discount_points",
    "lender_credits",
    "prepayment_penalty_term",
    "intro_rate_period",
    "multifamily_affordable_units",
    "applicant_credit_score_type",
    "co-applicant_credit_score_type",
    "submission_of_application",
    "initially_payable_to_institution",
    "hoepa_status",
    "manufactured_home_secured_property_type",
    "manufactured_home_land_property_interest",
];

/// The reporting-exemption code partially-exempt institutions file in place
/// of a real value.
const EXEMPT_CODE: &[&str] = &["1111"];

/// Row filters, in application order. Order only affects the per-filter
/// diagnostic counts; the surviving set is the same under any order.
pub const SENTINEL_FILTERS: &[SentinelFilter] = &[
    SentinelFilter {
        column: "derived_ethnicity",
        disallowed: &["Ethnicity Not Available"],
    },
    SentinelFilter {
        column: "derived_race",
        disallowed: &["Race Not Available"],
    },
    SentinelFilter {
        column: "derived_sex",
        disallowed: &["Sex Not Available"],
    },
    // Purpose code 5 is "not applicable".
    SentinelFilter {
        column: "loan_purpose",
        disallowed: &["5"],
    },
    SentinelFilter {
        column: "applicant_age",
        disallowed: &["8888"],
    },
    SentinelFilter {
        column: "co-applicant_age",
        disallowed: &["8888"],
    },
    SentinelFilter {
        column: "reverse_mortgage",
        disallowed: EXEMPT_CODE,
    },
    SentinelFilter {
        column: "open-end_line_of_credit",
        disallowed: EXEMPT_CODE,
    },
    SentinelFilter {
        column: "business_or_commercial_purpose",
        disallowed: EXEMPT_CODE,
    },
    SentinelFilter {
        column: "aus-1",
        disallowed: EXEMPT_CODE,
    },
    SentinelFilter {
        column: "aus-2",
        disallowed: EXEMPT_CODE,
    },
    SentinelFilter {
        column: "aus-3",
        disallowed: EXEMPT_CODE,
    },
    SentinelFilter {
        column: "aus-4",
        disallowed: EXEMPT_CODE,
    },
    SentinelFilter {
        column: "aus-5",
        disallowed: EXEMPT_CODE,
    },
    SentinelFilter {
        column: "denial_reason-1",
        disallowed: EXEMPT_CODE,
    },
    SentinelFilter {
        column: "denial_reason-2",
        disallowed: EXEMPT_CODE,
    },
    SentinelFilter {
        column: "denial_reason-3",
        disallowed: EXEMPT_CODE,
    },
    SentinelFilter {
        column: "denial_reason-4",
        disallowed: EXEMPT_CODE,
    },
    SentinelFilter {
        column: "loan_to_value_ratio",
        disallowed: &["Exempt"],
    },
    SentinelFilter {
        column: "interest_rate",
        disallowed: &["Exempt"],
    },
    SentinelFilter {
        column: "rate_spread",
        disallowed: &["Exempt"],
    },
    SentinelFilter {
        column: "loan_term",
        disallowed: &["Exempt"],
    },
    SentinelFilter {
        column: "property_value",
        disallowed: &["Exempt"],
    },
    SentinelFilter {
        column: "debt_to_income_ratio",
        disallowed: &["Exempt"],
    },
];

pub const CONFORMING_LOAN_LIMIT: Codelist = Codelist {
    column: "conforming_loan_limit",
    entries: &[
        ("C", Label::Text("Conforming")),
        ("NC", Label::Text("Nonconforming")),
        ("U", Label::Text("Undetermined")),
    ],
};

pub const ACTION_TAKEN: Codelist = Codelist {
    column: "action_taken",
    entries: &[
        ("1", Label::Text("Loan_originated")),
        ("2", Label::Text("Application_approved_but_not_accepted")),
        ("3", Label::Text("Application_denied")),
        ("4", Label::Text("Application_withdrawn_by_applicant")),
        ("5", Label::Text("File_closed_for_incompleteness")),
        ("6", Label::Text("Purchased_loan")),
        ("7", Label::Text("Preapproval_request_denied")),
        ("8", Label::Text("Preapproval_request_approved_but_not_accepted")),
    ],
};

pub const PURCHASER_TYPE: Codelist = Codelist {
    column: "purchaser_type",
    entries: &[
        ("0", Label::Text("Not_applicable")),
        ("1", Label::Text("Fannie_Mae")),
        ("2", Label::Text("Ginnie_Mae")),
        ("3", Label::Text("Freddie_Mac")),
        ("4", Label::Text("Farmer_Mac")),
        ("5", Label::Text("Private_securitizer")),
        (
            "6",
            Label::Text("Commercial_bank_or_savings_bank_or_savings_association"),
        ),
        (
            "71",
            Label::Text("Credit_union_or_mortgage_company_or_finance_company"),
        ),
        ("72", Label::Text("Life_insurance_company")),
        ("8", Label::Text("Affiliate_institution")),
        ("9", Label::Text("Other_type_of_purchaser")),
    ],
};

pub const LOAN_TYPE: Codelist = Codelist {
    column: "loan_type",
    entries: &[
        ("1", Label::Text("Conventional")),
        ("2", Label::Text("FHA_insured")),
        ("3", Label::Text("VA_guaranteed")),
        ("4", Label::Text("RHS_or_FSA_guaranteed")),
    ],
};

pub const OCCUPANCY_TYPE: Codelist = Codelist {
    column: "occupancy_type",
    entries: &[
        ("1", Label::Text("Principal_residence")),
        ("2", Label::Text("Second_residence")),
        ("3", Label::Text("Investment_property")),
    ],
};

pub const APPLICANT_SEX: Codelist = Codelist {
    column: "applicant_sex",
    entries: &[
        ("1", Label::Text("Male")),
        ("2", Label::Text("Female")),
        ("3", Label::Text("Not_provided")),
        ("4", Label::Text("Not_applicable")),
        ("6", Label::Text("Both_selected")),
    ],
};

pub const CO_APPLICANT_SEX: Codelist = Codelist {
    column: "co-applicant_sex",
    entries: &[
        ("1", Label::Text("Male")),
        ("2", Label::Text("Female")),
        ("3", Label::Text("Not_provided")),
        ("4", Label::Text("Not_applicable")),
        ("5", Label::Text("No_co-applicant")),
        ("6", Label::Text("Both_selected")),
    ],
};

/// Applicant "collected on the basis of visual observation" tables: code 3
/// (not available) deliberately has no entry, so it remaps to missing.
const OBSERVED_APPLICANT: &[(&str, Label)] = &[("1", Label::Bool(true)), ("2", Label::Bool(false))];

/// Co-applicant variant: code 4 means there is no co-applicant at all.
const OBSERVED_CO_APPLICANT: &[(&str, Label)] = &[
    ("1", Label::Bool(true)),
    ("2", Label::Bool(false)),
    ("4", Label::Text("no_co-applicant")),
];

pub const APPLICANT_ETHNICITY_OBSERVED: Codelist = Codelist {
    column: "applicant_ethnicity_observed",
    entries: OBSERVED_APPLICANT,
};

pub const CO_APPLICANT_ETHNICITY_OBSERVED: Codelist = Codelist {
    column: "co-applicant_ethnicity_observed",
    entries: OBSERVED_CO_APPLICANT,
};

pub const APPLICANT_RACE_OBSERVED: Codelist = Codelist {
    column: "applicant_race_observed",
    entries: OBSERVED_APPLICANT,
};

pub const CO_APPLICANT_RACE_OBSERVED: Codelist = Codelist {
    column: "co-applicant_race_observed",
    entries: OBSERVED_CO_APPLICANT,
};

pub const APPLICANT_SEX_OBSERVED: Codelist = Codelist {
    column: "applicant_sex_observed",
    entries: OBSERVED_APPLICANT,
};

pub const CO_APPLICANT_SEX_OBSERVED: Codelist = Codelist {
    column: "co-applicant_sex_observed",
    entries: OBSERVED_CO_APPLICANT,
};

/// Code tables in application order.
pub const CODELISTS: &[&Codelist] = &[
    &COUNTY_CODE,
    &CONFORMING_LOAN_LIMIT,
    &ACTION_TAKEN,
    &PURCHASER_TYPE,
    &LOAN_TYPE,
    &OCCUPANCY_TYPE,
    &APPLICANT_SEX,
    &CO_APPLICANT_SEX,
    &APPLICANT_ETHNICITY_OBSERVED,
    &CO_APPLICANT_ETHNICITY_OBSERVED,
    &APPLICANT_RACE_OBSERVED,
    &CO_APPLICANT_RACE_OBSERVED,
    &APPLICANT_SEX_OBSERVED,
    &CO_APPLICANT_SEX_OBSERVED,
];

/// Single-valued coded columns rewritten into strict booleans.
pub const BOOLEAN_RULES: &[BooleanRule] = &[
    BooleanRule {
        target: "preapproval_requested",
        source: "preapproval",
        true_value: "1",
    },
    BooleanRule {
        target: "secured_by_a_first_lien",
        source: "lien_status",
        true_value: "1",
    },
    BooleanRule {
        target: "is_reverse_mortgage",
        source: "reverse_mortgage",
        true_value: "1",
    },
    BooleanRule {
        target: "is_open-end_line_of_credit",
        source: "open-end_line_of_credit",
        true_value: "1",
    },
    BooleanRule {
        target: "primarily_for_a_business_or_commercial_purpose",
        source: "business_or_commercial_purpose",
        true_value: "1",
    },
    BooleanRule {
        target: "includes_negative_amortization",
        source: "negative_amortization",
        true_value: "1",
    },
    BooleanRule {
        target: "includes_interest_only_payment",
        source: "interest_only_payment",
        true_value: "1",
    },
    BooleanRule {
        target: "includes_balloon_payment",
        source: "balloon_payment",
        true_value: "1",
    },
    BooleanRule {
        target: "includes_other_nonamortizing_features",
        source: "other_nonamortizing_features",
        true_value: "1",
    },
    BooleanRule {
        target: "is_site_built",
        source: "construction_method",
        true_value: "1",
    },
];

/// Derived categorical columns whose free-text-like values are sanitized to
/// the `[A-Za-z0-9_-]` character set.
pub const NORMALIZED_COLUMNS: &[&str] = &[
    "derived_loan_product_type",
    "derived_dwelling_category",
    "derived_ethnicity",
    "derived_race",
    "derived_sex",
];

/// In-place token rewrites; values matching no rule pass through unchanged.
pub const VALUE_REWRITES: &[ValueRewrite] = &[
    ValueRewrite {
        column: "total_units",
        exact: &[(">149", "over_149")],
        substring: &[],
    },
    ValueRewrite {
        column: "debt_to_income_ratio",
        exact: &[
            (">60%", "over_60_percent"),
            ("<20%", "below_20_percent"),
        ],
        // Bucket values such as `20%-<30%` keep their shape with `%` spelled out.
        substring: &[("%", "_percent")],
    },
    ValueRewrite {
        column: "applicant_age",
        exact: &[("<25", "below_25"), (">74", "above_74")],
        substring: &[],
    },
    ValueRewrite {
        column: "co-applicant_age",
        exact: &[("<25", "below_25"), (">74", "above_74")],
        substring: &[],
    },
];

const ETHNICITY_VOCABULARY: &[(&str, &str)] = &[
    ("1", "Hispanic_or_Latino"),
    ("11", "Mexican"),
    ("12", "Puerto_Rican"),
    ("13", "Cuban"),
    ("14", "Other_Hispanic_or_Latino"),
    ("2", "Not_Hispanic_or_Latino"),
    ("3", "Not_provided"),
    ("4", "Not_applicable"),
    ("5", "No_co-applicant"),
];

/// Race codes nest: `2` (Asian) and its sub-categories `21`-`27` are distinct
/// vocabulary entries, so one row may set both the aggregate and a detail
/// indicator.
const RACE_VOCABULARY: &[(&str, &str)] = &[
    ("1", "American_Indian_or_Alaska_Native"),
    ("2", "Asian"),
    ("21", "Asian_Indian"),
    ("22", "Chinese"),
    ("23", "Filipino"),
    ("24", "Japanese"),
    ("25", "Korean"),
    ("26", "Vietnamese"),
    ("27", "Other_Asian"),
    ("3", "Black_or_African_American"),
    ("4", "Native_Hawaiian_or_Other_Pacific_Islander"),
    ("41", "Native_Hawaiian"),
    ("42", "Guamanian_or_Chamorro"),
    ("43", "Samoan"),
    ("44", "Other_Pacific_Islander"),
    ("5", "White"),
    ("6", "Not_provided"),
    ("7", "Not_applicable"),
    ("8", "No_co-applicant"),
];

const AUS_VOCABULARY: &[(&str, &str)] = &[
    ("1", "DU"),
    ("2", "LP_or_Loan_Product_Advisor"),
    ("3", "TOTAL_scorecard"),
    ("4", "GUS"),
    ("5", "Other"),
    ("6", "Not_applicable"),
    ("7", "Internal Proprietary System"),
];

const DENIAL_REASON_VOCABULARY: &[(&str, &str)] = &[
    ("1", "Debt-to-income_ratio"),
    ("2", "Employment_history"),
    ("3", "Credit_history"),
    ("4", "Collateral"),
    ("5", "Insufficient_cash"),
    ("6", "Unverifiable_information"),
    ("7", "Credit_application_incomplete"),
    ("8", "Mortgage_insurance_denied"),
    ("9", "Other"),
    ("10", "Not_applicable"),
];

pub const APPLICANT_ETHNICITY_GROUP: FieldGroup = FieldGroup {
    group: "applicant_ethnicity",
    slots: &[
        "applicant_ethnicity-1",
        "applicant_ethnicity-2",
        "applicant_ethnicity-3",
        "applicant_ethnicity-4",
        "applicant_ethnicity-5",
    ],
    vocabulary: ETHNICITY_VOCABULARY,
};

pub const CO_APPLICANT_ETHNICITY_GROUP: FieldGroup = FieldGroup {
    group: "co-applicant_ethnicity",
    slots: &[
        "co-applicant_ethnicity-1",
        "co-applicant_ethnicity-2",
        "co-applicant_ethnicity-3",
        "co-applicant_ethnicity-4",
        "co-applicant_ethnicity-5",
    ],
    vocabulary: ETHNICITY_VOCABULARY,
};

pub const APPLICANT_RACE_GROUP: FieldGroup = FieldGroup {
    group: "applicant_race",
    slots: &[
        "applicant_race-1",
        "applicant_race-2",
        "applicant_race-3",
        "applicant_race-4",
        "applicant_race-5",
    ],
    vocabulary: RACE_VOCABULARY,
};

pub const CO_APPLICANT_RACE_GROUP: FieldGroup = FieldGroup {
    group: "co-applicant_race",
    slots: &[
        "co-applicant_race-1",
        "co-applicant_race-2",
        "co-applicant_race-3",
        "co-applicant_race-4",
        "co-applicant_race-5",
    ],
    vocabulary: RACE_VOCABULARY,
};

pub const AUS_GROUP: FieldGroup = FieldGroup {
    group: "aus",
    slots: &["aus-1", "aus-2", "aus-3", "aus-4", "aus-5"],
    vocabulary: AUS_VOCABULARY,
};

/// Denial reason reports at most four codes per record.
pub const DENIAL_REASON_GROUP: FieldGroup = FieldGroup {
    group: "denial_reason",
    slots: &[
        "denial_reason-1",
        "denial_reason-2",
        "denial_reason-3",
        "denial_reason-4",
    ],
    vocabulary: DENIAL_REASON_VOCABULARY,
};

/// Field groups in application order.
pub const FIELD_GROUPS: &[&FieldGroup] = &[
    &APPLICANT_ETHNICITY_GROUP,
    &CO_APPLICANT_ETHNICITY_GROUP,
    &APPLICANT_RACE_GROUP,
    &CO_APPLICANT_RACE_GROUP,
    &AUS_GROUP,
    &DENIAL_REASON_GROUP,
];

/// Columns that must be non-missing for a row to survive the final filter.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "county_code",
    "conforming_loan_limit",
    "income",
    "debt_to_income_ratio",
    "applicant_age",
    "co-applicant_age",
];
