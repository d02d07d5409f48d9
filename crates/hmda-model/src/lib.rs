pub mod codebook;
pub mod codelist;
pub mod county;
pub mod error;

pub use codelist::{BooleanRule, Codelist, FieldGroup, Label, SentinelFilter, ValueRewrite};
pub use county::COUNTY_CODE;
pub use error::{HmdaError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_renders_booleans_as_text() {
        assert_eq!(Label::Bool(true).as_cell_text(), "true");
        assert_eq!(Label::Bool(false).as_cell_text(), "false");
        assert_eq!(Label::Text("no_co-applicant").as_cell_text(), "no_co-applicant");
    }

    #[test]
    fn missing_column_error_names_step_and_column() {
        let error = HmdaError::missing_column("filter:loan_purpose", "loan_purpose");
        assert_eq!(
            error.to_string(),
            "column `loan_purpose` required by step `filter:loan_purpose` is not in the table"
        );
    }
}
