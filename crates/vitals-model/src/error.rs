use thiserror::Error;

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationReason {
    #[error("required field is missing")]
    Missing,
    #[error("required field is empty")]
    Empty,
    #[error("expected a number, found '{found}'")]
    NotANumber { found: String },
    #[error("must be greater than 0, found {value}")]
    NotPositive { value: f64 },
    #[error("must not be negative, found {value}")]
    Negative { value: f64 },
    #[error("'{value}' is not one of: {}", .allowed.join(", "))]
    NotAllowed {
        value: String,
        allowed: &'static [&'static str],
    },
    #[error("expected text, found '{found}'")]
    NotText { found: String },
    #[error("expected true/false, found '{found}'")]
    NotABoolean { found: String },
    #[error("'{found}' is not a valid identifier")]
    InvalidId { found: String },
}

/// A candidate record failed its entity schema.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: ValidationReason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
