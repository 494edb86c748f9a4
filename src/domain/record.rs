//! Log record model
//!
//! A [`LogRecord`] is what the formatter receives for each logging call:
//! structured metadata (logger name, level, timestamp) plus the already
//! rendered user message. Only the message is ever subject to redaction.

use chrono::{DateTime, Local};
use tracing::Level;

/// One log event, handed to the formatter once and then discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Logger name (the tracing target)
    pub name: String,

    /// Severity level
    pub level: Level,

    /// Time the event was created
    pub timestamp: DateTime<Local>,

    /// Fully rendered message
    pub message: String,
}

impl LogRecord {
    /// Create a record stamped with the current local time
    pub fn new(name: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            timestamp: Local::now(),
            message: message.into(),
        }
    }

    /// Replace the timestamp
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Timestamp rendered as `YYYY-MM-DD HH:MM:SS,mmm`
    pub fn asctime(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S,%3f").to_string()
    }
}
