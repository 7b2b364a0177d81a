//! Outcomes - named exit edges of the step.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ports::OutcomeProvider;

/// A named exit edge. One exists per configured choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub id: String,
    pub display_name: String,
}

impl Outcome {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// Outcome whose id and display name are both the choice label.
    pub fn from_choice(label: impl AsRef<str>) -> Self {
        let label = label.as_ref();
        Self::new(label, label)
    }
}

/// Derives outcomes from raw, possibly unvalidated node attributes.
///
/// Reads the `choices` attribute. When it is missing or is not a list of
/// strings the result is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChoiceOutcomeProvider;

impl ChoiceOutcomeProvider {
    /// Attribute holding the choice labels.
    pub const CHOICES_ATTRIBUTE: &'static str = "choices";
}

impl OutcomeProvider for ChoiceOutcomeProvider {
    fn outcomes(&self, node_attributes: &Value) -> Vec<Outcome> {
        let Some(items) = node_attributes
            .get(Self::CHOICES_ATTRIBUTE)
            .and_then(Value::as_array)
        else {
            return Vec::new();
        };

        items
            .iter()
            .map(|item| item.as_str().map(Outcome::from_choice))
            .collect::<Option<Vec<_>>>()
            .unwrap_or_default()
    }
}
