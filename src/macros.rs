//! Logging macros with `format!`-style arguments.
//!
//! Every macro takes the logger first, an optional `indent = N;` prefix, and
//! then the format string. Each expands to the `Result<()>` of the call.
//!
//! # Examples
//!
//! ```
//! use tidy_logger::prelude::*;
//! use tidy_logger::{info, warning};
//!
//! let logger = Logger::builder().file_logging(false).colors(false).build()?;
//!
//! info!(logger, "Server listening on port {}", 8080)?;
//! warning!(logger, indent = 1; "slow handler: {} ms", 250)?;
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use tidy_logger::prelude::*;
/// # let logger = Logger::builder().file_logging(false).colors(false).build().unwrap();
/// use tidy_logger::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, indent = 2; "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, indent = $depth:expr; $($arg:tt)+) => {
        $logger.log($level, $depth, format!($($arg)+))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, 0, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, indent = $depth:expr; $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, indent = $depth; $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use tidy_logger::prelude::*;
/// # let logger = Logger::builder().file_logging(false).colors(false).build().unwrap();
/// use tidy_logger::info;
/// info!(logger, "Processing {} items", 100).unwrap();
/// info!(logger, indent = 1; "item {} done", 1).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, indent = $depth:expr; $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, indent = $depth; $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, indent = $depth:expr; $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, indent = $depth; $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, indent = $depth:expr; $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, indent = $depth; $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, indent = $depth:expr; $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, indent = $depth; $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}
