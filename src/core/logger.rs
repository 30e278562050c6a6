//! Main logger implementation
//!
//! A [`Logger`] borrows a sink and turns a sequence of level selections and
//! appended values into header-prefixed lines:
//!
//! - [`Logger::select_level`] closes the open line (if one is visible) and
//!   makes `level` the level of whatever is appended next.
//! - [`Logger::append`] writes a value to the current line, emitting the
//!   header first if the line has no content yet.
//!
//! Lines below the threshold are discarded. The last line is never
//! terminated on the caller's behalf.

use super::{
    config::LoggerConfig,
    header::HeaderFormat,
    log_level::Level,
    timestamp::{Clock, SystemClock, TimestampFormat},
    value::Loggable,
};
use std::fmt;
use std::io::Write;

/// Written between two visible lines.
pub const LINE_TERMINATOR: &str = "\n";

/// Stream-style logger over a borrowed [`Write`] sink.
///
/// Write errors from the sink are ignored; the sink's owner is responsible
/// for detecting them (and for flushing or closing the sink).
///
/// # Example
/// ```
/// use stream_logger::prelude::*;
///
/// let mut out = Vec::new();
/// {
///     let mut logger = Logger::with_format(&mut out, Level::Debug, "%L: ");
///     logger.select_level(Level::Info).append("answer is ").append(&42);
///     logger.select_level(Level::Error).append("failed");
/// }
/// assert_eq!(String::from_utf8(out).unwrap(), "Info: answer is 42\nError: failed");
/// ```
pub struct Logger<'a, W: Write + ?Sized = dyn Write> {
    sink: &'a mut W,
    threshold: Level,
    current_level: Level,
    line_started: bool,
    format: HeaderFormat,
    timestamp_format: TimestampFormat,
    clock: Box<dyn Clock>,
    #[cfg(feature = "console")]
    colored: bool,
}

impl<'a, W: Write + ?Sized> Logger<'a, W> {
    /// Logger with threshold `Info` and header `"[%L] %T"`.
    pub fn new(sink: &'a mut W) -> Self {
        LoggerBuilder::new().build(sink)
    }

    /// Logger with the given threshold and the default header.
    pub fn with_level(sink: &'a mut W, threshold: Level) -> Self {
        LoggerBuilder::new().threshold(threshold).build(sink)
    }

    /// Logger with the given threshold and header template.
    pub fn with_format(sink: &'a mut W, threshold: Level, format: impl Into<HeaderFormat>) -> Self {
        LoggerBuilder::new()
            .threshold(threshold)
            .format(format)
            .build(sink)
    }

    /// Logger built from a [`LoggerConfig`].
    pub fn from_config(sink: &'a mut W, config: &LoggerConfig) -> Self {
        LoggerBuilder::from_config(config).build(sink)
    }

    /// Make `level` the level of subsequently appended content.
    ///
    /// If the current line is visible and has content, it is terminated first.
    pub fn select_level(&mut self, level: Level) -> &mut Self {
        if self.line_started && self.is_enabled(self.current_level) {
            self.write_raw(LINE_TERMINATOR);
            let _ = self.sink.flush();
        }
        self.current_level = level;
        self.line_started = false;
        self
    }

    /// Append a value to the current line.
    ///
    /// No-op while the current level is below the threshold.
    pub fn append<T: Loggable + ?Sized>(&mut self, value: &T) -> &mut Self {
        if !self.is_enabled(self.current_level) {
            return self;
        }
        if !self.line_started {
            let header = self.render_header();
            self.write_raw(&header);
            self.line_started = true;
        }
        let text = value.to_log_text();
        self.write_raw(&text);
        self
    }

    /// Select `level` and append `value` as the start of a new line.
    pub fn log<T: Loggable + ?Sized>(&mut self, level: Level, value: &T) -> &mut Self {
        self.select_level(level).append(value)
    }

    /// Minimum level written to the sink.
    pub fn threshold(&self) -> Level {
        self.threshold
    }

    /// Level of the line being composed.
    pub fn current_level(&self) -> Level {
        self.current_level
    }

    /// Whether the current line already has content.
    pub fn is_line_started(&self) -> bool {
        self.line_started
    }

    /// Header template text.
    pub fn format(&self) -> &str {
        self.format.as_str()
    }

    /// Rendering used for `%T`.
    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    /// Whether content at `level` reaches the sink.
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.threshold
    }

    #[cfg(feature = "console")]
    fn render_header(&self) -> String {
        use colored::Colorize;
        let level = self.current_level;
        if !self.colored {
            return self.format.render(level, self.clock.as_ref(), &self.timestamp_format);
        }
        self.format
            .render_with(self.clock.as_ref(), &self.timestamp_format, |out| {
                out.push_str(&level.as_str().color(level.color()).to_string())
            })
    }

    #[cfg(not(feature = "console"))]
    fn render_header(&self) -> String {
        self.format
            .render(self.current_level, self.clock.as_ref(), &self.timestamp_format)
    }

    fn write_raw(&mut self, text: &str) {
        let _ = self.sink.write_all(text.as_bytes());
    }
}

/// Lets `write!` append formatted text to the current line.
impl<W: Write + ?Sized> fmt::Write for Logger<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}

impl<W: Write + ?Sized> fmt::Debug for Logger<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("current_level", &self.current_level)
            .field("line_started", &self.line_started)
            .field("format", &self.format.as_str())
            .field("timestamp_format", &self.timestamp_format)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use stream_logger::prelude::*;
///
/// let mut out = std::io::sink();
/// let logger = Logger::builder()
///     .threshold(Level::Debug)
///     .format("%T %L> ")
///     .timestamp_format(TimestampFormat::Iso8601)
///     .build(&mut out);
/// assert_eq!(logger.format(), "%T %L> ");
/// ```
pub struct LoggerBuilder {
    threshold: Level,
    format: HeaderFormat,
    timestamp_format: TimestampFormat,
    clock: Box<dyn Clock>,
    #[cfg(feature = "console")]
    colored: bool,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            threshold: Level::default(),
            format: HeaderFormat::default(),
            timestamp_format: TimestampFormat::default(),
            clock: Box::new(SystemClock),
            #[cfg(feature = "console")]
            colored: false,
        }
    }

    /// Builder preloaded with the values of `config`
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new()
            .threshold(config.threshold)
            .format(config.format.as_str())
            .timestamp_format(config.timestamp_format.clone())
    }

    /// Set minimum level written to the sink
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: Level) -> Self {
        self.threshold = level;
        self
    }

    /// Set the header template
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: impl Into<HeaderFormat>) -> Self {
        self.format = format.into();
        self
    }

    /// Set the rendering used for `%T`
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Replace the time source used for `%T`
    #[must_use = "builder methods return a new value"]
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Render `%L` in the level's terminal color
    #[cfg(feature = "console")]
    #[must_use = "builder methods return a new value"]
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Build the Logger over `sink`
    pub fn build<W: Write + ?Sized>(self, sink: &mut W) -> Logger<'_, W> {
        Logger {
            sink,
            threshold: self.threshold,
            current_level: self.threshold,
            line_started: false,
            format: self.format,
            timestamp_format: self.timestamp_format,
            clock: self.clock,
            #[cfg(feature = "console")]
            colored: self.colored,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger<'_> {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
