//! Error Types

use thiserror::Error;

/// Rejected draft submission
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("required field `{0}` is empty")]
    EmptyField(&'static str),
    #[error("field `{field}` expects a number, got `{value}`")]
    NotANumber { field: &'static str, value: String },
}

impl ValidationError {
    /// Translation key of the user-facing message
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::EmptyField(_) => "fillAllFields",
            ValidationError::NotANumber { .. } => "invalidNumber",
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyField(field) => field,
            ValidationError::NotANumber { field, .. } => field,
        }
    }
}

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} used before provided")]
    ContextMissing(&'static str),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
