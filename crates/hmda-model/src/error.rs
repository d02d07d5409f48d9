use thiserror::Error;

#[derive(Debug, Error)]
pub enum HmdaError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("column `{column}` required by step `{step}` is not in the table")]
    MissingColumn { step: String, column: String },
    #[error("{0}")]
    Message(String),
}

impl HmdaError {
    pub fn missing_column(step: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            step: step.into(),
            column: column.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HmdaError>;
