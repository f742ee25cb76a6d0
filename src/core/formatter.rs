//! Indented line formatting
//!
//! Every record renders as a header followed by the indented message:
//!
//! ```text
//! 2025-01-08 10:30:45,123 | app | INFO     |         connecting to db
//! ```
//!
//! Continuation lines of a multi-line message are padded to the header
//! width so the whole block stays aligned under the first line. The colored
//! variant produces the same layout with SGR codes around the level label
//! and each message line, so [`strip_ansi`] of a colored line equals the
//! plain line for the same entry. Escape sequences already present in a
//! message are removed before layout, so the file never receives them.

use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use std::borrow::Cow;

pub const DEFAULT_INDENT_WIDTH: usize = 4;

const HEADER_SEPARATOR: &str = " | ";
const ANSI_RESET: &str = "\x1b[0m";

/// Turns a log entry into the text written to a sink
pub trait Formatter: Send {
    fn format(&self, entry: &LogEntry) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Spaces per indentation level
    pub indent_width: usize,
    /// `None` omits the timestamp column
    pub timestamp: Option<TimestampFormat>,
    pub show_logger_name: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            timestamp: Some(TimestampFormat::Default),
            show_logger_name: false,
        }
    }
}

impl FormatterConfig {
    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: Option<TimestampFormat>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn with_logger_name(mut self, show: bool) -> Self {
        self.show_logger_name = show;
        self
    }

    /// Header text before the level label
    fn prefix(&self, entry: &LogEntry) -> String {
        let mut prefix = String::new();
        if let Some(ref format) = self.timestamp {
            prefix.push_str(&format.format(&entry.timestamp));
            prefix.push_str(HEADER_SEPARATOR);
        }
        if self.show_logger_name {
            prefix.push_str(&entry.logger);
            prefix.push_str(HEADER_SEPARATOR);
        }
        prefix
    }

    /// Uncolored header, e.g. `"2025-01-08 10:30:45,123 | INFO     | "`
    pub fn header(&self, entry: &LogEntry) -> String {
        format!(
            "{}{:<8}{}",
            self.prefix(entry),
            entry.level,
            HEADER_SEPARATOR
        )
    }
}

/// Leading whitespace for a nesting depth
#[inline]
pub fn indentation(depth: usize, width: usize) -> String {
    " ".repeat(depth.saturating_mul(width))
}

/// Message line with every escape sequence removed
fn without_escapes(line: &str) -> Cow<'_, str> {
    if line.contains('\x1b') {
        Cow::Owned(strip_ansi(line).replace('\x1b', ""))
    } else {
        Cow::Borrowed(line)
    }
}

/// Lay out `message` under `header`, wrapping each message line with `paint`
fn layout(
    header: &str,
    header_width: usize,
    indent: &str,
    message: &str,
    paint: impl Fn(&str) -> String,
) -> String {
    let padding = " ".repeat(header_width);
    let mut out = String::with_capacity(header.len() + indent.len() + message.len());

    for (i, line) in message.split('\n').enumerate() {
        if i == 0 {
            out.push_str(header);
        } else {
            out.push('\n');
            out.push_str(&padding);
        }
        out.push_str(indent);
        out.push_str(&paint(&without_escapes(line)));
    }
    out
}

/// Plain formatter used for file output
#[derive(Debug, Clone, Default)]
pub struct IndentedFormatter {
    config: FormatterConfig,
}

impl IndentedFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }
}

impl Formatter for IndentedFormatter {
    fn format(&self, entry: &LogEntry) -> String {
        let header = self.config.header(entry);
        let width = header.chars().count();
        let indent = indentation(entry.indent, self.config.indent_width);
        layout(&header, width, &indent, &entry.message, str::to_string)
    }
}

/// Console formatter: same layout as [`IndentedFormatter`], colored per level
#[derive(Debug, Clone, Default)]
pub struct ColoredIndentedFormatter {
    config: FormatterConfig,
}

impl ColoredIndentedFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }
}

/// Wrap `text` in an SGR color sequence
///
/// Built directly rather than through `colored::Colorize`: a `ColoredString`
/// consults the global `SHOULD_COLORIZE` switch, which would drop the codes
/// even when the appender was explicitly asked for colors.
fn paint(code: &str, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("\x1b[{}m{}{}", code, text, ANSI_RESET)
}

impl Formatter for ColoredIndentedFormatter {
    fn format(&self, entry: &LogEntry) -> String {
        let code = entry.level.ansi_code();
        let label = format!("{:<8}", entry.level);
        let plain_width = self.config.header(entry).chars().count();

        let header = format!(
            "{}{}{}",
            self.config.prefix(entry),
            paint(&code, &label),
            HEADER_SEPARATOR
        );
        let indent = indentation(entry.indent, self.config.indent_width);
        layout(&header, plain_width, &indent, &entry.message, |line| paint(&code, line))
    }
}

/// Remove SGR escape sequences (`ESC [ ... m`) and other CSI sequences
pub fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters and intermediates run until a final byte in '@'..='~'
            for next in chars.by_ref() {
                if ('@'..='~').contains(&next) {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Recover the original message from a formatted, uncolored block
///
/// `header_width` is the character width of the header and `indent` the
/// leading whitespace added for the entry's depth. Returns `None` if the
/// block does not have that shape.
pub fn extract_message(block: &str, header_width: usize, indent: &str) -> Option<String> {
    let mut lines = Vec::new();
    for line in block.split('\n') {
        if line.chars().count() < header_width {
            return None;
        }
        let body: String = line.chars().skip(header_width).collect();
        lines.push(body.strip_prefix(indent)?.to_string());
    }
    Some(lines.join("\n"))
}
