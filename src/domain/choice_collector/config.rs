//! Node configuration for the choice collector step.

use serde::{Deserialize, Serialize};

use super::Outcome;
use crate::domain::foundation::ValidationError;

/// Immutable step configuration.
///
/// Construction never validates; `default_choice` membership is checked
/// again on every first-pass invocation. Call [`validate`](Self::validate)
/// when loading configuration to fail earlier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceCollectorConfig {
    /// Prompt template with `{dotted.path}` placeholders.
    pub prompt: String,

    /// Ordered choice labels. Each label is also an outcome name.
    pub choices: Vec<String>,

    /// Label preselected when the prompt is shown.
    pub default_choice: String,
}

impl ChoiceCollectorConfig {
    pub fn new<I, S>(prompt: impl Into<String>, choices: I, default_choice: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            default_choice: default_choice.into(),
        }
    }

    /// Position of the default choice, first occurrence wins.
    pub fn default_index(&self) -> Option<usize> {
        self.choices.iter().position(|c| *c == self.default_choice)
    }

    /// Choice label at a (possibly negative) index supplied by the engine.
    pub fn choice_at(&self, index: i64) -> Option<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.choices.get(i))
            .map(String::as_str)
    }

    /// One outcome per choice, in configured order.
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.choices.iter().map(Outcome::from_choice).collect()
    }

    /// Checks the configuration invariants.
    ///
    /// # Errors
    /// - `EmptyField("choices")` when there are no choices
    /// - `EmptyField("choices[i]")` when a label is blank
    /// - `InvalidFormat("defaultChoice")` when the default is not a choice
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.choices.is_empty() {
            return Err(ValidationError::empty_field("choices"));
        }
        if let Some(i) = self.choices.iter().position(|c| c.trim().is_empty()) {
            return Err(ValidationError::empty_field(format!("choices[{}]", i)));
        }
        if self.default_index().is_none() {
            return Err(ValidationError::invalid_format(
                "defaultChoice",
                format!("'{}' is not one of the configured choices", self.default_choice),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ChoiceCollectorConfig {
        ChoiceCollectorConfig::new("Pick one", ["A", "B", "C"], "B")
    }

    #[test]
    fn default_index_finds_default() {
        assert_eq!(config().default_index(), Some(1));
    }

    #[test]
    fn default_index_uses_first_duplicate() {
        let config = ChoiceCollectorConfig::new("p", ["A", "B", "B"], "B");
        assert_eq!(config.default_index(), Some(1));
    }

    #[test]
    fn default_index_none_when_absent() {
        let config = ChoiceCollectorConfig::new("p", ["A"], "Z");
        assert_eq!(config.default_index(), None);
    }

    #[test]
    fn choice_at_rejects_out_of_range() {
        let config = config();
        assert_eq!(config.choice_at(0), Some("A"));
        assert_eq!(config.choice_at(2), Some("C"));
        assert_eq!(config.choice_at(3), None);
        assert_eq!(config.choice_at(-1), None);
    }

    #[test]
    fn outcomes_follow_choice_order() {
        let ids: Vec<String> = config().outcomes().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn validate_accepts_consistent_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_choices() {
        let empty: [&str; 0] = [];
        let config = ChoiceCollectorConfig::new("p", empty, "A");
        assert_eq!(config.validate(), Err(ValidationError::empty_field("choices")));
    }

    #[test]
    fn validate_rejects_blank_label() {
        let config = ChoiceCollectorConfig::new("p", ["A", "  "], "A");
        assert_eq!(config.validate(), Err(ValidationError::empty_field("choices[1]")));
    }

    #[test]
    fn validate_rejects_unknown_default() {
        let config = ChoiceCollectorConfig::new("p", ["A", "B"], "C");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("defaultChoice"));
    }

    #[test]
    fn construction_does_not_validate() {
        let config = ChoiceCollectorConfig::new("p", ["A"], "missing");
        assert_eq!(config.default_choice, "missing");
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{"prompt": "Hi {user}", "choices": ["Yes", "No"], "defaultChoice": "No"}"#;
        let config: ChoiceCollectorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_choice, "No");
        assert_eq!(config.choices, vec!["Yes", "No"]);
    }
}
