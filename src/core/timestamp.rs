//! Timestamp formatting utilities
//!
//! The `%T` header placeholder renders the local wall-clock time. By default
//! that is `DD/MM/YYYY HH:MM:SS` (24-hour clock, seconds precision), using the
//! offset chrono reports for the local timezone at the moment of rendering.

use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// strftime pattern behind [`TimestampFormat::Local`].
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%d/%m/%Y %H:%M:%S";

/// Source of wall-clock time for header timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Reads the system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// How `%T` is rendered.
///
/// # Examples
///
/// ```
/// use stream_logger::core::TimestampFormat;
/// use chrono::{FixedOffset, TimeZone};
///
/// let at = FixedOffset::east_opt(0)
///     .unwrap()
///     .with_ymd_and_hms(2024, 12, 25, 13, 5, 9)
///     .unwrap();
/// assert_eq!(TimestampFormat::Local.format(&at), "25/12/2024 13:05:09");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `25/12/2024 13:05:09`
    #[default]
    Local,

    /// ISO 8601 with milliseconds and offset: `2024-12-25T13:05:09.000+00:00`
    Iso8601,

    /// RFC 3339: `2024-12-25T13:05:09+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1735131909`
    Unix,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<FixedOffset>) -> String {
        match self {
            TimestampFormat::Local => datetime.format(DEFAULT_TIMESTAMP_PATTERN).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::Custom(format_str) => {
                // chrono reports bad specifiers as a fmt error; keep the pattern text instead
                let mut out = String::new();
                match write!(out, "{}", datetime.format(format_str)) {
                    Ok(()) => out,
                    Err(_) => format_str.clone(),
                }
            }
        }
    }

    /// Render the current time of `clock`.
    #[must_use]
    pub fn format_now(&self, clock: &dyn Clock) -> String {
        self.format(&clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3600)
            .expect("valid offset")
            .with_ymd_and_hms(2024, 12, 25, 13, 5, 9)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_local_format() {
        let result = TimestampFormat::Local.format(&fixed_datetime());
        assert_eq!(result, "25/12/2024 13:05:09");
    }

    #[test]
    fn test_local_format_pads_single_digits() {
        let at = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 2, 3, 4, 5)
            .unwrap();
        assert_eq!(TimestampFormat::Local.format(&at), "02/01/2025 03:04:05");
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert_eq!(result, "2024-12-25T13:05:09.000+01:00");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert_eq!(result, "2024-12-25T13:05:09+01:00");
    }

    #[test]
    fn test_unix_format() {
        let result = TimestampFormat::Unix.format(&fixed_datetime());
        assert_eq!(result, "1735128309");
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2024/12/25 13:05");
    }

    #[test]
    fn test_invalid_custom_format_falls_back_to_pattern() {
        let format = TimestampFormat::Custom("%Q".to_string());
        assert_eq!(format.format(&fixed_datetime()), "%Q");
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(fixed_datetime());
        assert_eq!(
            TimestampFormat::Local.format_now(&clock),
            "25/12/2024 13:05:09"
        );
    }

    #[test]
    fn test_system_clock_shape() {
        let rendered = TimestampFormat::Local.format_now(&SystemClock);
        // DD/MM/YYYY HH:MM:SS
        assert_eq!(rendered.len(), 19);
        assert_eq!(&rendered[2..3], "/");
        assert_eq!(&rendered[5..6], "/");
        assert_eq!(&rendered[10..11], " ");
        assert_eq!(&rendered[13..14], ":");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TimestampFormat::Local).expect("serialize");
        assert_eq!(json, "\"Local\"");

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%H:%M"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%H:%M".to_string()));
    }
}
