//! Template resolution errors.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Errors raised while substituting placeholders from shared state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Variable '{variable}' not found in shared state")]
    VariableNotFound { variable: String },

    #[error("Nested variable '{variable}' not found in shared state")]
    NestedPathIncomplete { variable: String },
}

impl TemplateError {
    pub fn variable_not_found(variable: impl Into<String>) -> Self {
        TemplateError::VariableNotFound {
            variable: variable.into(),
        }
    }

    pub fn nested_path_incomplete(variable: impl Into<String>) -> Self {
        TemplateError::NestedPathIncomplete {
            variable: variable.into(),
        }
    }

    /// The placeholder body that failed to resolve.
    pub fn variable(&self) -> &str {
        match self {
            TemplateError::VariableNotFound { variable }
            | TemplateError::NestedPathIncomplete { variable } => variable,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TemplateError::VariableNotFound { .. } => ErrorCode::VariableNotFound,
            TemplateError::NestedPathIncomplete { .. } => ErrorCode::NestedPathIncomplete,
        }
    }
}
