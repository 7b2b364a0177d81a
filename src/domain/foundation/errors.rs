//! Error types shared across the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur while validating configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Stable error codes reported to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Configuration errors
    InvalidDefaultChoice,

    // Template errors
    VariableNotFound,
    NestedPathIncomplete,

    // Protocol errors
    IndexOutOfRange,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidDefaultChoice => "INVALID_DEFAULT_CHOICE",
            ErrorCode::VariableNotFound => "VARIABLE_NOT_FOUND",
            ErrorCode::NestedPathIncomplete => "NESTED_PATH_INCOMPLETE",
            ErrorCode::IndexOutOfRange => "INDEX_OUT_OF_RANGE",
        };
        write!(f, "{}", s)
    }
}
