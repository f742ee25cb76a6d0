//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod file_path;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use appender::Appender;
pub use config::{FileMode, LoggerConfig, DEFAULT_LOGGER_NAME};
pub use error::{LoggerError, Result};
pub use file_path::{
    resolve_log_path, resolve_log_path_on, DEFAULT_FILE_EXTENSION, DEFAULT_FILE_NAME,
};
pub use formatter::{
    extract_message, indentation, strip_ansi, ColoredIndentedFormatter, Formatter,
    FormatterConfig, IndentedFormatter, DEFAULT_INDENT_WIDTH,
};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Indented, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use timestamp::TimestampFormat;
