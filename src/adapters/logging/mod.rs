//! Step logger implementations.

mod in_memory;
mod tracing_logger;

pub use in_memory::{InMemoryStepLogger, LogEntry};
pub use tracing_logger::{NoopStepLogger, TracingStepLogger};
