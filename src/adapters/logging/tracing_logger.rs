//! `tracing` backed step logger.

use crate::ports::{LogLevel, StepLogger};

/// Forwards step log records to `tracing`, tagged with the step name.
///
/// Which records are kept is decided by the subscriber the binary installs.
#[derive(Debug, Clone)]
pub struct TracingStepLogger {
    step: String,
}

impl TracingStepLogger {
    pub fn new(step: impl Into<String>) -> Self {
        Self { step: step.into() }
    }

    pub fn step(&self) -> &str {
        &self.step
    }
}

impl StepLogger for TracingStepLogger {
    fn log(&self, level: LogLevel, message: &str) {
        let step = self.step.as_str();
        match level {
            LogLevel::Debug => tracing::debug!(step = %step, "{}", message),
            LogLevel::Info => tracing::info!(step = %step, "{}", message),
            LogLevel::Warn => tracing::warn!(step = %step, "{}", message),
            LogLevel::Error => tracing::error!(step = %step, "{}", message),
        }
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStepLogger;

impl StepLogger for NoopStepLogger {
    fn log(&self, _level: LogLevel, _message: &str) {}
}
