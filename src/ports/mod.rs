//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TreeStep` - What the tree engine calls on each invocation
//! - `OutcomeProvider` - Outcome listing for configuration tooling
//! - `StepLogger` - Observability collaborator injected into steps

mod outcome_provider;
mod step_logger;
mod tree_step;

pub use outcome_provider::OutcomeProvider;
pub use step_logger::{LogLevel, StepLogger};
pub use tree_step::{TreeContext, TreeStep};
