//! Log level definitions

use super::error::LoggerError;
use colored::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Debug = 10,
    #[default]
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Conventional numeric severity (10, 20, ... 50)
    #[inline]
    pub fn severity(&self) -> u8 {
        *self as u8
    }

    pub fn from_severity(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.severity() == value)
    }

    pub fn color(&self) -> Color {
        match self {
            LogLevel::Debug => Color::Cyan,
            LogLevel::Info => Color::Green,
            LogLevel::Warning => Color::Yellow,
            LogLevel::Error => Color::Red,
            LogLevel::Critical => Color::BrightRed,
        }
    }

    /// SGR foreground parameter for this level's color, e.g. `"32"` for green
    pub fn ansi_code(&self) -> String {
        self.color().to_fg_str().into_owned()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` keeps width/alignment flags working, e.g. `{:<8}`
        f.pad(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u8>() {
            return Self::from_severity(value).ok_or_else(|| LoggerError::invalid_level(s));
        }

        match trimmed.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" | "FATAL" => Ok(LogLevel::Critical),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_str())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Name(String),
    Severity(u8),
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match LevelRepr::deserialize(deserializer)? {
            LevelRepr::Name(name) => name.parse().map_err(serde::de::Error::custom),
            LevelRepr::Severity(value) => Self::from_severity(value).ok_or_else(|| {
                serde::de::Error::custom(LoggerError::invalid_level(value.to_string()))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Critical);
        assert_eq!(LogLevel::Warning.severity(), 30);
    }

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("Warn".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("FATAL".parse::<LogLevel>().unwrap(), LogLevel::Critical);
        assert_eq!("40".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert!("25".parse::<LogLevel>().is_err());
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_color_table() {
        assert_eq!(LogLevel::Debug.color(), Color::Cyan);
        assert_eq!(LogLevel::Info.ansi_code(), "32");
        assert_eq!(LogLevel::Warning.ansi_code(), "33");
        assert_eq!(LogLevel::Error.ansi_code(), "31");
        assert_eq!(LogLevel::Critical.ansi_code(), "91");
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(format!("{:<8}|", LogLevel::Info), "INFO    |");
        assert_eq!(LogLevel::Critical.to_string(), "CRITICAL");
    }

    #[test]
    fn test_serde_accepts_name_or_severity() {
        let level: LogLevel = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(level, LogLevel::Warning);

        let level: LogLevel = serde_json::from_str("10").unwrap();
        assert_eq!(level, LogLevel::Debug);

        assert!(serde_json::from_str::<LogLevel>("11").is_err());
        assert_eq!(serde_json::to_string(&LogLevel::Error).unwrap(), "\"ERROR\"");
    }
}
