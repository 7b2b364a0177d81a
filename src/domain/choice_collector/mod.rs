//! Choice Collector Module - Prompt for a single choice and route on the answer.
//!
//! # Protocol
//!
//! 1. The engine invokes the step with [`CollectedInput::NoAnswer`]. The step
//!    renders its prompt from shared state and returns
//!    [`StepResult::Collect`].
//! 2. The engine presents the prompt, then invokes the step again with
//!    [`CollectedInput::SingleIndex`]. The step returns
//!    [`StepResult::Route`] naming the outcome for that choice.
//!
//! # Components
//!
//! - `ChoiceCollectorConfig` - prompt, choices, default choice
//! - `ChoiceCollectorStep` - the two-pass step
//! - `ChoiceOutcomeProvider` - outcomes from raw node attributes
//! - `StepPhase` - where a result leaves the step

mod config;
mod errors;
mod input;
mod outcome;
mod phase;
mod result;
mod step;

pub use config::ChoiceCollectorConfig;
pub use errors::StepError;
pub use input::CollectedInput;
pub use outcome::{ChoiceOutcomeProvider, Outcome};
pub use phase::StepPhase;
pub use result::{CollectDirective, RouteDirective, StepResult};
pub use step::ChoiceCollectorStep;
