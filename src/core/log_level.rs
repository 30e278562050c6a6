//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log line, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[repr(u8)]
pub enum Level {
    Debug = 0,
    Warning = 1,
    Notice = 2,
    #[default]
    Info = 3,
    Error = 4,
    Fatal = 5,
}

impl Level {
    /// All levels, lowest severity first.
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Warning,
        Level::Notice,
        Level::Info,
        Level::Error,
        Level::Fatal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "Debug",
            Level::Warning => "Warning",
            Level::Notice => "Notice",
            Level::Info => "Info",
            Level::Error => "Error",
            Level::Fatal => "Fatal",
        }
    }

    /// Display name for a raw level value; anything out of range is `"Unknown"`.
    pub fn name_of(value: u8) -> &'static str {
        Level::try_from(value).map_or("Unknown", |level| level.as_str())
    }

    #[cfg(feature = "console")]
    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Debug => BrightBlack,
            Level::Warning => Yellow,
            Level::Notice => Cyan,
            Level::Info => Green,
            Level::Error => Red,
            Level::Fatal => BrightRed,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Level {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, LoggerError> {
        Level::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(LoggerError::InvalidLevel { value })
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, LoggerError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "warning" | "warn" => Ok(Level::Warning),
            "notice" => Ok(Level::Notice),
            "info" => Ok(Level::Info),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(LoggerError::parse_level(s)),
        }
    }
}
