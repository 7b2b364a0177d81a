//! Tree Step Port - Contract between the tree engine and a decision step.

use crate::domain::choice_collector::{CollectedInput, Outcome, StepResult};
use crate::domain::shared_state::SharedState;

/// Everything the engine supplies for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct TreeContext<'a> {
    /// Snapshot of shared state; read-only for the duration of the call.
    pub shared_state: &'a SharedState,
    /// Answer collected since the previous invocation, if any.
    pub input: CollectedInput,
}

impl<'a> TreeContext<'a> {
    /// Context for a first pass.
    pub fn initial(shared_state: &'a SharedState) -> Self {
        Self {
            shared_state,
            input: CollectedInput::NoAnswer,
        }
    }

    /// Context for a pass that carries a selected index.
    pub fn resuming(shared_state: &'a SharedState, index: i64) -> Self {
        Self {
            shared_state,
            input: CollectedInput::single(index),
        }
    }

    pub fn has_input(&self) -> bool {
        self.input.is_answered()
    }
}

/// Port implemented by steps the engine can execute
pub trait TreeStep: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Execute one invocation
    ///
    /// # Arguments
    /// * `ctx` - Shared state and collected input for this call
    ///
    /// # Returns
    /// A collect directive or a route directive
    ///
    /// # Errors
    /// Returns `Self::Error` on any failure; the engine decides whether to retry
    fn execute(&self, ctx: &TreeContext<'_>) -> Result<StepResult, Self::Error>;

    /// Exit edges the engine should wire for this step
    fn outcomes(&self) -> Vec<Outcome>;
}
