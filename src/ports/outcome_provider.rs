//! Outcome Provider Port - Outcome enumeration for configuration tooling.

use serde_json::Value;

use crate::domain::choice_collector::Outcome;

/// Port for listing a step's outcomes from raw node attributes
///
/// Runs before the configuration is known to be valid, so implementations
/// degrade to an empty list instead of failing.
pub trait OutcomeProvider: Send + Sync {
    /// List outcomes described by `node_attributes`
    ///
    /// # Arguments
    /// * `node_attributes` - Unvalidated node configuration as JSON
    fn outcomes(&self, node_attributes: &Value) -> Vec<Outcome>;
}
