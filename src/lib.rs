//! # Stream Logger
//!
//! A minimal stream-style logger. It writes leveled lines to any
//! `std::io::Write` sink, filters them by a minimum level, and prefixes each
//! line with a header built from a template (`%L` level, `%T` timestamp).
//!
//! ```
//! use stream_logger::prelude::*;
//!
//! let mut out = Vec::new();
//! {
//!     let mut logger = Logger::with_format(&mut out, Level::Error, "%L: ");
//!     logger.select_level(Level::Info).append("Info message");
//!     logger.select_level(Level::Error).append("Error message");
//! }
//! assert_eq!(String::from_utf8(out).unwrap(), "Error: Error message");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Clock, FixedClock, HeaderFormat, Level, Loggable, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, Result, SystemClock, TimestampFormat,
    };
    pub use crate::sinks::FileSink;
}

pub use crate::core::{
    Clock, FixedClock, HeaderFormat, Level, Loggable, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, Result, SystemClock, TimestampFormat,
};
pub use sinks::FileSink;
