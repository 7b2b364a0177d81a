use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::template::TemplateError;

/// Failures surfaced to the engine by a choice collector invocation.
///
/// None of these are retried inside the step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("Invalid default choice '{default_choice}'")]
    InvalidDefaultChoice { default_choice: String },

    #[error("Selected index {index} is out of range for {choice_count} choices")]
    IndexOutOfRange { index: i64, choice_count: usize },

    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl StepError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StepError::InvalidDefaultChoice { .. } => ErrorCode::InvalidDefaultChoice,
            StepError::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
            StepError::Template(err) => err.code(),
        }
    }
}
