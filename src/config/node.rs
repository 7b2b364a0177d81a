//! Node configuration documents
//!
//! A node configuration is the `prompt` / `choices` / `defaultChoice`
//! record of one choice collector step, stored as YAML or JSON.

use std::fs;
use std::path::Path;

use crate::domain::choice_collector::ChoiceCollectorConfig;
use crate::domain::shared_state::SharedState;

use super::error::ConfigError;

/// Document syntax of a node configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension; anything but `.json` is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Parse a node configuration without validating it
pub fn parse_node_config(
    contents: &str,
    format: DocumentFormat,
) -> Result<ChoiceCollectorConfig, ConfigError> {
    match format {
        DocumentFormat::Yaml => {
            serde_yaml::from_str(contents).map_err(|e| ConfigError::parse("node configuration", e))
        }
        DocumentFormat::Json => {
            serde_json::from_str(contents).map_err(|e| ConfigError::parse("node configuration", e))
        }
    }
}

/// Load and validate a node configuration file
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, does not parse, or
/// breaks a configuration invariant (see [`ChoiceCollectorConfig::validate`]).
pub fn load_node_config(path: &Path) -> Result<ChoiceCollectorConfig, ConfigError> {
    let contents = read(path)?;
    let config = parse_node_config(&contents, DocumentFormat::from_path(path))?;
    config.validate()?;
    Ok(config)
}

/// Load a shared state snapshot from a JSON file
pub fn load_shared_state(path: &Path) -> Result<SharedState, ConfigError> {
    let contents = read(path)?;
    let value: serde_json::Value =
        serde_json::from_str(&contents).map_err(|e| ConfigError::parse("shared state", e))?;
    Ok(SharedState::try_from(value)?)
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
