//! In-memory step logger for testing.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned.

use std::sync::RwLock;

use crate::ports::{LogLevel, StepLogger};

/// A captured log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Step logger that keeps every record for assertions.
///
/// # Example
///
/// ```ignore
/// let logger = Arc::new(InMemoryStepLogger::new());
/// let step = ChoiceCollectorStep::new(config, logger.clone());
///
/// step.process(&state, CollectedInput::single(1))?;
/// assert!(logger.contains("selected = 1"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStepLogger {
    entries: RwLock<Vec<LogEntry>>,
}

impl InMemoryStepLogger {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Returns all captured records.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.read().expect("logger lock poisoned").clone()
    }

    /// True if any record contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries().iter().any(|e| e.message.contains(needle))
    }

    /// Number of records at exactly `level`.
    pub fn count_at(&self, level: LogLevel) -> usize {
        self.entries().iter().filter(|e| e.level == level).count()
    }

    pub fn clear(&self) {
        self.entries.write().expect("logger lock poisoned").clear();
    }
}

impl StepLogger for InMemoryStepLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries
            .write()
            .expect("logger lock poisoned")
            .push(LogEntry {
                level,
                message: message.to_string(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_records_in_order() {
        let logger = InMemoryStepLogger::new();
        logger.debug("first");
        logger.error("second");

        assert_eq!(
            logger.entries(),
            vec![
                LogEntry {
                    level: LogLevel::Debug,
                    message: "first".to_string()
                },
                LogEntry {
                    level: LogLevel::Error,
                    message: "second".to_string()
                },
            ]
        );
        assert_eq!(logger.count_at(LogLevel::Error), 1);
        assert!(logger.contains("sec"));
    }

    #[test]
    fn clear_removes_records() {
        let logger = InMemoryStepLogger::new();
        logger.info("x");
        logger.clear();
        assert!(logger.entries().is_empty());
    }
}
