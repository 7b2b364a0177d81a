//! ChoiceCollectorStep - Two-pass collect/resume decision step.

use std::sync::Arc;

use super::{ChoiceCollectorConfig, CollectDirective, CollectedInput, Outcome, StepError, StepResult};
use crate::domain::shared_state::SharedState;
use crate::domain::template::TemplateResolver;
use crate::ports::{StepLogger, TreeContext, TreeStep};

/// Presents a prompt built from shared state and routes on the user's choice.
///
/// The step keeps no state between calls. Whether it is on its first or
/// second pass is decided solely by the [`CollectedInput`] the engine passes.
pub struct ChoiceCollectorStep {
    config: ChoiceCollectorConfig,
    logger: Arc<dyn StepLogger>,
}

impl ChoiceCollectorStep {
    /// Name used in log records.
    pub const NAME: &'static str = "ChoiceCollector";

    /// Creates the step. The configuration is not validated here.
    pub fn new(config: ChoiceCollectorConfig, logger: Arc<dyn StepLogger>) -> Self {
        Self { config, logger }
    }

    pub fn config(&self) -> &ChoiceCollectorConfig {
        &self.config
    }

    /// Runs one invocation.
    ///
    /// - `NoAnswer`: renders the prompt and returns a collect directive.
    /// - `SingleIndex`: returns a route directive for the selected choice.
    ///
    /// # Errors
    /// - `IndexOutOfRange` if the selected index is not a valid choice position
    /// - `InvalidDefaultChoice` if the default is not one of the choices
    /// - `Template` if the prompt references a path missing from `state`
    pub fn process(
        &self,
        state: &SharedState,
        input: CollectedInput,
    ) -> Result<StepResult, StepError> {
        match input {
            CollectedInput::SingleIndex { index } => self.resume(index),
            CollectedInput::NoAnswer => self.collect(state),
        }
    }

    fn resume(&self, index: i64) -> Result<StepResult, StepError> {
        self.logger.debug(&format!("[{}]: selected = {}", Self::NAME, index));

        let choice = self.config.choice_at(index).ok_or_else(|| {
            self.logger.error(&format!(
                "[{}]: selected index {} outside {} choices",
                Self::NAME,
                index,
                self.config.choices.len()
            ));
            StepError::IndexOutOfRange {
                index,
                choice_count: self.config.choices.len(),
            }
        })?;

        Ok(StepResult::route(choice))
    }

    fn collect(&self, state: &SharedState) -> Result<StepResult, StepError> {
        let default_index = self.config.default_index().ok_or_else(|| {
            self.logger.error(&format!(
                "[{}]: default choice '{}' is not a configured choice",
                Self::NAME,
                self.config.default_choice
            ));
            StepError::InvalidDefaultChoice {
                default_choice: self.config.default_choice.clone(),
            }
        })?;

        let prompt = TemplateResolver::resolve(&self.config.prompt, state).map_err(|err| {
            self.logger
                .error(&format!("[{}]: prompt rendering failed: {}", Self::NAME, err));
            StepError::from(err)
        })?;

        self.logger.debug(&format!(
            "[{}]: presenting {} choices, default index {}",
            Self::NAME,
            self.config.choices.len(),
            default_index
        ));

        Ok(StepResult::Collect(CollectDirective::single_choice(
            prompt,
            self.config.choices.clone(),
            default_index,
        )))
    }
}

impl TreeStep for ChoiceCollectorStep {
    type Error = StepError;

    fn execute(&self, ctx: &TreeContext<'_>) -> Result<StepResult, StepError> {
        self.process(ctx.shared_state, ctx.input)
    }

    fn outcomes(&self) -> Vec<Outcome> {
        self.config.outcomes()
    }
}
