//! # Tidy Logger
//!
//! Indented, color-coded console logging with a plain-text file sink.
//!
//! Every record carries a level, an indentation depth and a message. The
//! console shows it colored by level; the log file receives the same layout
//! without color codes.
//!
//! ```
//! use tidy_logger::prelude::*;
//!
//! let logger = Logger::builder()
//!     .file_logging(false)
//!     .colors(false)
//!     .build()?;
//!
//! logger.info("loading dataset")?;
//! logger.indented(1).info("42 rows")?;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, ConsoleTarget, FileAppender};
    pub use crate::core::{
        Appender, FileMode, Formatter, FormatterConfig, Indented, LogEntry, LogLevel, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, TimestampFormat,
    };
}

pub use appenders::{ConsoleAppender, ConsoleTarget, FileAppender};
pub use core::{
    extract_message, indentation, resolve_log_path, resolve_log_path_on, strip_ansi, Appender,
    ColoredIndentedFormatter, FileMode, Formatter, FormatterConfig, Indented, IndentedFormatter,
    LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result,
    TimestampFormat, DEFAULT_FILE_EXTENSION, DEFAULT_FILE_NAME, DEFAULT_INDENT_WIDTH,
    DEFAULT_LOGGER_NAME,
};
