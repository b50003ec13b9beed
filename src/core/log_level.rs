//! Log level definitions

use super::color::ConsoleColor;
use crate::platform::PlatformPriority;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Fixed-width label used inside the `[HH:MM:SS|Label]` tag.
    ///
    /// All labels are five characters wide so the closing bracket lines up.
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info ",
            LogLevel::Warn => "Warn ",
            LogLevel::Error => "Error",
        }
    }

    pub fn color(&self) -> ConsoleColor {
        match self {
            LogLevel::Debug => ConsoleColor::Green,
            LogLevel::Info => ConsoleColor::Blue,
            LogLevel::Warn => ConsoleColor::Yellow,
            LogLevel::Error => ConsoleColor::Red,
        }
    }

    pub fn platform_priority(&self) -> PlatformPriority {
        match self {
            LogLevel::Debug => PlatformPriority::Debug,
            LogLevel::Info => PlatformPriority::Info,
            LogLevel::Warn => PlatformPriority::Warn,
            LogLevel::Error => PlatformPriority::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" | "ERR" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_fixed_width() {
        for level in LogLevel::ALL {
            assert_eq!(level.label().len(), 5, "label for {level} must be 5 wide");
        }
        assert_eq!(LogLevel::Info.label(), "Info ");
        assert_eq!(LogLevel::Warn.label(), "Warn ");
    }

    #[test]
    fn test_level_colors() {
        assert_eq!(LogLevel::Debug.color(), ConsoleColor::Green);
        assert_eq!(LogLevel::Info.color(), ConsoleColor::Blue);
        assert_eq!(LogLevel::Warn.color(), ConsoleColor::Yellow);
        assert_eq!(LogLevel::Error.color(), ConsoleColor::Red);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("Err".parse::<LogLevel>(), Ok(LogLevel::Error));
        assert_eq!(" info ".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert!("verbose".parse::<LogLevel>().is_err());
    }
}
