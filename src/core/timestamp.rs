//! Timestamp formatting utilities
//!
//! Log lines are stamped in local time. The default layout mirrors the
//! classic `asctime` form: `2025-01-08 10:30:45,123`.

use chrono::{DateTime, Local};

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use tidy_logger::TimestampFormat;
/// use chrono::Local;
///
/// let stamp = TimestampFormat::Default.format(&Local::now());
/// assert_eq!(stamp.len(), "2025-01-08 10:30:45,123".len());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45,123`
    #[default]
    Default,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// RFC 3339: `2025-01-08T10:30:45.123456789+01:00`
    Rfc3339,

    /// Custom strftime format, e.g. `"%H:%M:%S"`
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Default => datetime.format("%Y-%m-%d %H:%M:%S,%3f").to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}
