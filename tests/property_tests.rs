//! Property-based tests for tidy_logger using proptest

use proptest::prelude::*;
use tidy_logger::prelude::*;
use tidy_logger::{
    extract_message, indentation, strip_ansi, ColoredIndentedFormatter, IndentedFormatter,
};

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
        Just(LogLevel::Critical),
    ]
}

fn any_timestamp() -> impl Strategy<Value = Option<TimestampFormat>> {
    prop_oneof![
        Just(None),
        Just(Some(TimestampFormat::Default)),
        Just(Some(TimestampFormat::Iso8601)),
    ]
}

// Message text with occasional SGR sequences, no carriage returns
const MESSAGE: &str = "([a-zA-Z0-9 \t.,:;|=_()-]|\x1b\\[[0-9;]{0,4}m){0,40}(\n([a-zA-Z0-9 \t.,:;|=_()-]|\x1b\\[[0-9;]{0,4}m){0,40}){0,3}";

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// The color assigned to a level never changes between calls
    #[test]
    fn test_color_is_stable(level in any_level()) {
        let first = level.ansi_code();
        for _ in 0..3 {
            prop_assert_eq!(level.ansi_code(), first.clone());
            prop_assert_eq!(level.color(), level.color());
        }
    }

    /// Names and severities parse back to the same level
    #[test]
    fn test_level_parse_roundtrip(level in any_level(), lower in any::<bool>()) {
        let name = if lower { level.to_str().to_lowercase() } else { level.to_str().to_string() };
        prop_assert_eq!(name.parse::<LogLevel>().unwrap(), level);
        prop_assert_eq!(level.severity().to_string().parse::<LogLevel>().unwrap(), level);
    }

    /// Ordering agrees with numeric severity
    #[test]
    fn test_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a < b, a.severity() < b.severity());
        prop_assert_eq!(a == b, a.severity() == b.severity());
    }
}

// ============================================================================
// Formatting Tests
// ============================================================================

proptest! {
    /// Leading whitespace is exactly depth * width
    #[test]
    fn test_indentation_is_proportional(depth in 0usize..32, width in 0usize..=16) {
        let indent = indentation(depth, width);
        prop_assert_eq!(indent.len(), depth * width);
        prop_assert!(indent.chars().all(|c| c == ' '));
    }

    /// The message column starts after header + depth * width spaces
    #[test]
    fn test_message_column(
        level in any_level(),
        depth in 0usize..10,
        width in 1usize..=8,
        word in "[a-z]{1,12}",
    ) {
        let config = FormatterConfig::default().with_timestamp(None).with_indent_width(width);
        let entry = LogEntry::new(level, word.clone()).with_indent(depth);
        let line = IndentedFormatter::new(config.clone()).format(&entry);

        let header = config.header(&entry);
        let rest = line.strip_prefix(header.as_str()).unwrap();
        let leading = rest.len() - rest.trim_start_matches(' ').len();
        prop_assert_eq!(leading, depth * width);
        prop_assert_eq!(rest.trim_start_matches(' '), word.as_str());
    }

    /// Removing color codes from console output yields the file output
    #[test]
    fn test_strip_ansi_equals_plain(
        level in any_level(),
        depth in 0usize..6,
        message in MESSAGE,
        timestamp in any_timestamp(),
        show_name in any::<bool>(),
    ) {
        let config = FormatterConfig::default()
            .with_timestamp(timestamp)
            .with_logger_name(show_name);
        let entry = LogEntry::new(level, message).with_indent(depth).with_logger("prop");

        let plain = IndentedFormatter::new(config.clone()).format(&entry);
        let colored = ColoredIndentedFormatter::new(config).format(&entry);
        prop_assert_eq!(strip_ansi(&colored), plain);
    }

    /// The plain message, minus its escape sequences, is recoverable from
    /// formatted output
    #[test]
    fn test_message_roundtrip(
        level in any_level(),
        depth in 0usize..6,
        message in MESSAGE,
    ) {
        let config = FormatterConfig::default().with_logger_name(true);
        let entry = LogEntry::new(level, message.clone()).with_indent(depth).with_logger("rt");

        let colored = ColoredIndentedFormatter::new(config.clone()).format(&entry);
        let width = config.header(&entry).chars().count();
        let indent = indentation(depth, config.indent_width);

        let recovered = extract_message(&strip_ansi(&colored), width, &indent);
        prop_assert_eq!(recovered, Some(strip_ansi(&message)));
    }

    /// Plain output never carries escape characters
    #[test]
    fn test_plain_output_is_escape_free(level in any_level(), message in MESSAGE) {
        let entry = LogEntry::new(level, message);
        let out = IndentedFormatter::default().format(&entry);
        prop_assert!(!out.contains('\x1b'));
    }

    /// One output line per message line
    #[test]
    fn test_line_count_matches(message in MESSAGE) {
        let entry = LogEntry::new(LogLevel::Info, message.clone());
        let out = IndentedFormatter::default().format(&entry);
        prop_assert_eq!(out.split('\n').count(), message.split('\n').count());
    }
}
