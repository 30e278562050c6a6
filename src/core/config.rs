//! Construction options for a [`Logger`](super::Logger)
//!
//! `LoggerConfig` derives serde so callers can load it from whatever source
//! they already use; the crate itself reads no files.

use super::error::{LoggerError, Result};
use super::header::{HeaderFormat, DEFAULT_HEADER_FORMAT};
use super::log_level::Level;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level written to the sink
    pub threshold: Level,
    /// Header template (`%L` level, `%T` timestamp)
    pub format: String,
    /// Rendering of `%T`
    pub timestamp_format: TimestampFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            threshold: Level::default(),
            format: DEFAULT_HEADER_FORMAT.to_string(),
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Reject header templates containing escapes that would render as nothing.
    ///
    /// Loggers accept such templates and silently drop the escapes; this is
    /// for callers that would rather catch a typo like `%l` up front.
    pub fn validate(&self) -> Result<()> {
        let dropped = HeaderFormat::parse(self.format.as_str()).dropped_escapes();
        if dropped.is_empty() {
            Ok(())
        } else {
            Err(LoggerError::config(
                "format",
                format!("unrecognized placeholders {}", dropped.join(", ")),
            ))
        }
    }
}
