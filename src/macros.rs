//! Logging macros for ergonomic log message formatting.
//!
//! Each macro selects a level and appends the `format!`-ed message, so it
//! starts a new line (terminating the previous visible one).
//!
//! # Examples
//!
//! ```
//! use stream_logger::prelude::*;
//! use stream_logger::{info, error};
//!
//! let mut out = Vec::new();
//! {
//!     let mut logger = Logger::with_format(&mut out, Level::Info, "%L: ");
//!     let port = 8080;
//!     info!(logger, "Server listening on port {}", port);
//!     error!(logger, "Bind failed");
//! }
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Info: Server listening on port 8080\nError: Bind failed"
//! );
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use stream_logger::prelude::*;
/// # let mut out = std::io::sink();
/// # let mut logger = Logger::new(&mut out);
/// use stream_logger::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, &format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Notice, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// Only writes the line; it does not abort the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Fatal, $($arg)+)
    };
}
