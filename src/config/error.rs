//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::foundation::ValidationError as NodeValidationError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {document}: {reason}")]
    Parse { document: String, reason: String },

    #[error("Invalid node configuration: {0}")]
    InvalidNode(#[from] NodeValidationError),
}

impl ConfigError {
    pub(crate) fn parse(document: impl Into<String>, reason: impl ToString) -> Self {
        ConfigError::Parse {
            document: document.into(),
            reason: reason.to_string(),
        }
    }
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidLogFilter { filter: String, reason: String },
}
