//! Step Logger Port - Observability collaborator injected into steps.
//!
//! Steps never reach for a process-wide logger; the engine hands each step
//! the implementation it wants (tracing, in-memory, no-op).

use serde::{Deserialize, Serialize};

/// Severity of a step log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Port for step-level log output
pub trait StepLogger: Send + Sync {
    /// Record a message at the given level
    ///
    /// # Arguments
    /// * `level` - Severity of the record
    /// * `message` - Human-readable text
    fn log(&self, level: LogLevel, message: &str);

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}
