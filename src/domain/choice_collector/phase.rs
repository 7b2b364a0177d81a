use serde::{Deserialize, Serialize};

/// Phase a choice collector invocation leaves the step in.
///
/// Nothing is persisted inside the step; see [`StepResult::phase`].
///
/// [`StepResult::phase`]: super::StepResult::phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepPhase {
    /// No answer yet; the prompt must be presented.
    AwaitingInput,
    /// An answer was consumed and an outcome chosen.
    Complete,
}
