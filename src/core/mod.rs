//! Core logger types and traits

pub mod config;
pub mod error;
pub mod header;
pub mod log_level;
pub mod logger;
pub mod timestamp;
pub mod value;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use header::{HeaderFormat, Segment, DEFAULT_HEADER_FORMAT};
pub use log_level::Level;
pub use logger::{Logger, LoggerBuilder, LINE_TERMINATOR};
pub use timestamp::{Clock, FixedClock, SystemClock, TimestampFormat, DEFAULT_TIMESTAMP_PATTERN};
pub use value::Loggable;
