//! Logger configuration
//!
//! [`LoggerConfig`] describes both sinks. It can be built in code, through
//! [`LoggerBuilder`](super::logger::LoggerBuilder), or loaded from JSON:
//!
//! ```
//! use tidy_logger::{LoggerConfig, LogLevel};
//!
//! let config = LoggerConfig::from_json_str(r#"{
//!     "name": "ingest",
//!     "console_level": "warning",
//!     "file_level": 10,
//!     "file_name": "logs/ingest",
//!     "file_mode": "w"
//! }"#).unwrap();
//!
//! assert_eq!(config.console_level, LogLevel::Warning);
//! assert_eq!(config.file_level, LogLevel::Debug);
//! ```

use super::error::{LoggerError, Result};
use super::formatter::DEFAULT_INDENT_WIDTH;
use super::log_level::LogLevel;
use crate::appenders::ConsoleTarget;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOGGER_NAME: &str = "TidyLogger";

/// Largest accepted indent width
pub const MAX_INDENT_WIDTH: usize = 16;

/// How an existing log file is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FileMode {
    #[default]
    #[serde(rename = "a", alias = "append")]
    Append,
    #[serde(rename = "w", alias = "truncate")]
    Truncate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub name: String,
    pub console_enabled: bool,
    pub console_level: LogLevel,
    pub file_enabled: bool,
    pub file_level: LogLevel,
    /// Requested file name; `None` uses `log[_YYYYMMDD].log`
    pub file_name: Option<PathBuf>,
    pub file_mode: FileMode,
    pub add_date_suffix: bool,
    pub indent_width: usize,
    /// `None` colors only when stderr is a terminal, honoring `NO_COLOR`
    pub use_colors: Option<bool>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_LOGGER_NAME.to_string(),
            console_enabled: true,
            console_level: LogLevel::Info,
            file_enabled: true,
            file_level: LogLevel::Debug,
            file_name: None,
            file_mode: FileMode::Append,
            add_date_suffix: true,
            indent_width: DEFAULT_INDENT_WIDTH,
            use_colors: None,
        }
    }
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_layout()?;
        if !self.console_enabled && !self.file_enabled {
            return Err(LoggerError::config(
                "LoggerConfig",
                "at least one of console or file output must be enabled",
            ));
        }
        Ok(())
    }

    /// Checks that apply regardless of which sinks are enabled
    pub fn validate_layout(&self) -> Result<()> {
        if self.indent_width > MAX_INDENT_WIDTH {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!(
                    "indent_width {} exceeds the maximum of {}",
                    self.indent_width, MAX_INDENT_WIDTH
                ),
            ));
        }
        Ok(())
    }

    /// Lowest level any enabled sink accepts
    pub fn effective_level(&self) -> LogLevel {
        match (self.console_enabled, self.file_enabled) {
            (true, true) => self.console_level.min(self.file_level),
            (false, true) => self.file_level,
            _ => self.console_level,
        }
    }

    /// Explicit setting, or detection for the stderr console sink
    pub fn colors_enabled(&self) -> bool {
        self.use_colors
            .unwrap_or_else(|| ConsoleTarget::Stderr.supports_color())
    }
}
