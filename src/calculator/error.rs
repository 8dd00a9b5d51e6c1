//! Calculator error types

use thiserror::Error;

/// Errors raised while validating or calculating a nutrition plan
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Unknown sex '{0}' (expected male or female)")]
    UnknownSex(String),

    #[error("Unknown activity level '{0}' (expected sedentary, light, moderate, active or very_active)")]
    UnknownActivityLevel(String),

    #[error("Unknown goal '{0}' (expected cut, maintain or bulk)")]
    UnknownGoal(String),
}

impl CalcError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the input field this error refers to
    pub fn field(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { field, .. } => field,
            CalcError::UnknownSex(_) => "sex",
            CalcError::UnknownActivityLevel(_) => "activity_level",
            CalcError::UnknownGoal(_) => "goal",
        }
    }
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
