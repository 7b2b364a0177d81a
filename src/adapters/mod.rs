//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `logging` - Step logger implementations (tracing, in-memory, no-op)

pub mod logging;

pub use logging::{InMemoryStepLogger, LogEntry, NoopStepLogger, TracingStepLogger};
