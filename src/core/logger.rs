//! Main logger implementation

use super::{
    appender::Appender,
    config::{FileMode, LoggerConfig},
    error::{LoggerError, Result},
    file_path::resolve_log_path,
    formatter::FormatterConfig,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
};
use crate::appenders::{ConsoleAppender, FileAppender};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

/// Synchronous logger fanning each record out to its appenders
///
/// # Example
///
/// ```no_run
/// use tidy_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .name("build")
///     .file_name("logs/build")
///     .build()?;
///
/// logger.info("compiling")?;
/// let step = logger.indented(1);
/// step.debug("parsing manifest")?;
/// step.nested().warning("unused key `foo`")?;
///
/// logger.close()?;
/// # Ok::<(), tidy_logger::LoggerError>(())
/// ```
pub struct Logger {
    name: String,
    min_level: LogLevel,
    appenders: Mutex<Vec<Box<dyn Appender>>>,
    file_path: Option<PathBuf>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger with no appenders; add them with [`Logger::add_appender`]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_level: LogLevel::Debug,
            appenders: Mutex::new(Vec::new()),
            file_path: None,
            metrics: LoggerMetrics::new(),
        }
    }

    /// Build the console and file sinks described by `config`
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid, the file name is rejected, or
    /// the log file cannot be opened.
    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        config.validate()?;

        let mut logger = Logger::new(config.name.clone());
        logger.min_level = config.effective_level();

        let formatter_config = FormatterConfig::default().with_indent_width(config.indent_width);

        if config.file_enabled {
            let path = resolve_log_path(config.file_name.as_deref(), config.add_date_suffix)?;
            let appender = FileAppender::open(&path, config.file_mode, config.file_level)?
                .with_formatter_config(formatter_config.clone().with_logger_name(true));
            logger.file_path = Some(path);
            logger.add_appender(Box::new(appender));
        }

        if config.console_enabled {
            let appender = ConsoleAppender::with_colors(config.colors_enabled())
                .with_level(config.console_level)
                .with_formatter_config(formatter_config);
            logger.add_appender(Box::new(appender));
        }

        Ok(logger)
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved path of the configured log file, if file output is enabled
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    pub fn add_appender(&mut self, appender: Box<dyn Appender>) {
        self.appenders.get_mut().push(appender);
    }

    pub fn appender_count(&self) -> usize {
        self.appenders.lock().len()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Emit `message` at `level`, indented `indent` levels deep
    ///
    /// Every appender whose level admits the record is written to, even if
    /// an earlier one fails.
    ///
    /// # Errors
    ///
    /// Returns the first appender error encountered.
    pub fn log(&self, level: LogLevel, indent: usize, message: impl Into<String>) -> Result<()> {
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return Ok(());
        }

        let entry = LogEntry::new(level, message)
            .with_indent(indent)
            .with_logger(self.name.as_str());
        self.dispatch(&entry)
    }

    fn dispatch(&self, entry: &LogEntry) -> Result<()> {
        let mut first_error: Option<LoggerError> = None;

        let mut appenders = self.appenders.lock();
        for appender in appenders.iter_mut().filter(|a| a.accepts(entry.level)) {
            if let Err(e) = appender.append(entry) {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => {
                self.metrics.record_failed();
                Err(e)
            }
            None => {
                self.metrics.record_logged();
                Ok(())
            }
        }
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Debug, 0, message)
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Info, 0, message)
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Warning, 0, message)
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Error, 0, message)
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Critical, 0, message)
    }

    /// View of this logger that writes at a fixed depth
    pub fn indented(&self, depth: usize) -> Indented<'_> {
        Indented {
            logger: self,
            depth,
        }
    }

    /// Flush every appender, stopping at the first failure
    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.lock();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    /// Flush and release every appender
    ///
    /// All appenders are flushed and dropped even if one fails; the first
    /// error is returned.
    pub fn close(self) -> Result<()> {
        let appenders = std::mem::take(&mut *self.appenders.lock());
        let mut first_error = None;
        for mut appender in appenders {
            if let Err(e) = appender.flush() {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        for appender in self.appenders.get_mut().iter_mut() {
            if let Err(e) = appender.flush() {
                eprintln!(
                    "[LOGGER ERROR] Failed to flush appender '{}' during shutdown: {}",
                    appender.name(),
                    e
                );
            }
        }
    }
}

/// Borrowed view of a [`Logger`] at a fixed indentation depth
#[derive(Clone, Copy)]
pub struct Indented<'a> {
    logger: &'a Logger,
    depth: usize,
}

impl<'a> Indented<'a> {
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// One level deeper
    #[must_use]
    pub fn nested(&self) -> Indented<'a> {
        Indented {
            logger: self.logger,
            depth: self.depth + 1,
        }
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) -> Result<()> {
        self.logger.log(level, self.depth, message)
    }

    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Debug, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Info, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Warning, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Error, message)
    }

    pub fn critical(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Critical, message)
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use tidy_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .name("worker")
///     .console_level(LogLevel::Warning)
///     .file_logging(false)
///     .indent_width(2)
///     .build()
///     .unwrap();
///
/// assert_eq!(logger.min_level(), LogLevel::Warning);
/// assert!(logger.file_path().is_none());
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    appenders: Vec<Box<dyn Appender>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::default())
    }

    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            appenders: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn console_level(mut self, level: LogLevel) -> Self {
        self.config.console_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_level(mut self, level: LogLevel) -> Self {
        self.config.file_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, enabled: bool) -> Self {
        self.config.console_enabled = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_logging(mut self, enabled: bool) -> Self {
        self.config.file_enabled = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_name(mut self, file_name: impl Into<PathBuf>) -> Self {
        self.config.file_name = Some(file_name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_mode(mut self, mode: FileMode) -> Self {
        self.config.file_mode = mode;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn add_date_suffix(mut self, enabled: bool) -> Self {
        self.config.add_date_suffix = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn indent_width(mut self, width: usize) -> Self {
        self.config.indent_width = width;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.config.use_colors = Some(enabled);
        self
    }

    /// Add a custom appender alongside the configured sinks
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Build the Logger
    ///
    /// With custom appenders both built-in sinks may be disabled. The
    /// logger's level is lowered to the most verbose custom appender.
    pub fn build(self) -> Result<Logger> {
        let LoggerBuilder { config, appenders } = self;

        let mut logger = if appenders.is_empty() || config.console_enabled || config.file_enabled {
            Logger::from_config(config)?
        } else {
            config.validate_layout()?;
            Logger::new(config.name)
        };

        let has_builtin_sinks = logger.appender_count() > 0;
        if let Some(lowest) = appenders.iter().map(|a| a.level()).min() {
            logger.min_level = if has_builtin_sinks {
                lowest.min(logger.min_level)
            } else {
                lowest
            };
        }
        for appender in appenders {
            logger.add_appender(appender);
        }

        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
