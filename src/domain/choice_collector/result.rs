//! Directives returned to the engine.

use serde::{Deserialize, Serialize};

use super::StepPhase;

/// Ask the engine to present a single-choice prompt and resubmit the answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectDirective {
    /// Rendered prompt text.
    pub prompt: String,
    /// Selectable option labels, in configured order.
    pub options: Vec<String>,
    /// Index of the preselected option.
    pub default_index: usize,
    /// Always false; the step accepts exactly one selection.
    pub multiple_selection: bool,
}

impl CollectDirective {
    pub fn single_choice(prompt: String, options: Vec<String>, default_index: usize) -> Self {
        Self {
            prompt,
            options,
            default_index,
            multiple_selection: false,
        }
    }
}

/// Continue the tree at the named outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDirective {
    pub outcome: String,
}

/// Result of one step invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum StepResult {
    Collect(CollectDirective),
    Route(RouteDirective),
}

impl StepResult {
    pub fn route(outcome: impl Into<String>) -> Self {
        StepResult::Route(RouteDirective {
            outcome: outcome.into(),
        })
    }

    /// Phase the step is left in after this result.
    pub fn phase(&self) -> StepPhase {
        match self {
            StepResult::Collect(_) => StepPhase::AwaitingInput,
            StepResult::Route(_) => StepPhase::Complete,
        }
    }

    pub fn as_collect(&self) -> Option<&CollectDirective> {
        match self {
            StepResult::Collect(directive) => Some(directive),
            StepResult::Route(_) => None,
        }
    }

    /// Outcome name when this is a route directive.
    pub fn outcome(&self) -> Option<&str> {
        match self {
            StepResult::Route(directive) => Some(&directive.outcome),
            StepResult::Collect(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_choice_disallows_multiple_selection() {
        let directive = CollectDirective::single_choice("p".into(), vec!["A".into()], 0);
        assert!(!directive.multiple_selection);
    }

    #[test]
    fn phase_follows_directive_kind() {
        let collect = StepResult::Collect(CollectDirective::single_choice(
            "p".into(),
            vec!["A".into()],
            0,
        ));
        assert_eq!(collect.phase(), StepPhase::AwaitingInput);
        assert_eq!(StepResult::route("A").phase(), StepPhase::Complete);
    }

    #[test]
    fn accessors_match_variant() {
        let route = StepResult::route("B");
        assert_eq!(route.outcome(), Some("B"));
        assert!(route.as_collect().is_none());
    }

    #[test]
    fn serializes_with_action_tag() {
        let value = serde_json::to_value(StepResult::route("C")).unwrap();
        assert_eq!(value, json!({ "action": "route", "outcome": "C" }));

        let collect = StepResult::Collect(CollectDirective::single_choice(
            "Pick".into(),
            vec!["A".into(), "B".into()],
            1,
        ));
        let value = serde_json::to_value(collect).unwrap();
        assert_eq!(
            value,
            json!({
                "action": "collect",
                "prompt": "Pick",
                "options": ["A", "B"],
                "defaultIndex": 1,
                "multipleSelection": false
            })
        );
    }
}
