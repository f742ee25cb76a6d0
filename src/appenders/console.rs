//! Console appender implementation

use crate::core::{
    Appender, ColoredIndentedFormatter, Formatter, FormatterConfig, IndentedFormatter, LogEntry,
    LogLevel, Result,
};
use std::env;
use std::io::{self, IsTerminal, Write};

/// Where console output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTarget {
    Stdout,
    #[default]
    Stderr,
}

impl ConsoleTarget {
    /// Whether output to this stream should be colored
    ///
    /// A non-empty `NO_COLOR` turns colors off and `CLICOLOR_FORCE` turns
    /// them on. Otherwise colors follow whether the stream is a terminal,
    /// unless `CLICOLOR=0`.
    pub fn supports_color(self) -> bool {
        let is_terminal = match self {
            ConsoleTarget::Stdout => io::stdout().is_terminal(),
            ConsoleTarget::Stderr => io::stderr().is_terminal(),
        };
        color_choice(|name| env::var(name).ok(), is_terminal)
    }
}

fn color_choice(var: impl Fn(&str) -> Option<String>, is_terminal: bool) -> bool {
    if var("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    if var("CLICOLOR_FORCE").is_some_and(|v| !v.is_empty() && v != "0") {
        return true;
    }
    if var("CLICOLOR").as_deref() == Some("0") {
        return false;
    }
    is_terminal
}

pub struct ConsoleAppender {
    writer: Box<dyn Write + Send>,
    formatter: Box<dyn Formatter>,
    use_colors: bool,
    level: LogLevel,
}

impl ConsoleAppender {
    /// Output to stderr at `Info`, colored when stderr supports it
    pub fn new() -> Self {
        Self::with_colors(ConsoleTarget::Stderr.supports_color())
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self::build(Box::new(io::stderr()), use_colors, FormatterConfig::default())
    }

    pub fn with_target(target: ConsoleTarget, use_colors: bool) -> Self {
        let writer: Box<dyn Write + Send> = match target {
            ConsoleTarget::Stdout => Box::new(io::stdout()),
            ConsoleTarget::Stderr => Box::new(io::stderr()),
        };
        Self::build(writer, use_colors, FormatterConfig::default())
    }

    /// Write to an arbitrary stream instead of stdout/stderr
    ///
    /// # Example
    ///
    /// ```
    /// use tidy_logger::{Appender, ConsoleAppender, LogEntry, LogLevel};
    ///
    /// let mut appender = ConsoleAppender::with_writer(Vec::new(), false);
    /// appender.append(&LogEntry::new(LogLevel::Info, "ready")).unwrap();
    /// ```
    pub fn with_writer<W: Write + Send + 'static>(writer: W, use_colors: bool) -> Self {
        Self::build(Box::new(writer), use_colors, FormatterConfig::default())
    }

    fn build(writer: Box<dyn Write + Send>, use_colors: bool, config: FormatterConfig) -> Self {
        Self {
            writer,
            formatter: Self::formatter_for(use_colors, config),
            use_colors,
            level: LogLevel::Info,
        }
    }

    fn formatter_for(use_colors: bool, config: FormatterConfig) -> Box<dyn Formatter> {
        if use_colors {
            Box::new(ColoredIndentedFormatter::new(config))
        } else {
            Box::new(IndentedFormatter::new(config))
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_formatter_config(mut self, config: FormatterConfig) -> Self {
        self.formatter = Self::formatter_for(self.use_colors, config);
        self
    }

    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let mut output = self.formatter.format(entry);
        output.push('\n');
        self.writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }

    fn level(&self) -> LogLevel {
        self.level
    }
}
