//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Nesting depth; rendered as `indent * indent_width` spaces
    pub indent: usize,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub logger: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            indent: 0,
            message: message.into(),
            timestamp: Local::now(),
            logger: String::new(),
        }
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_logger(mut self, logger: impl Into<String>) -> Self {
        self.logger = logger.into();
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
