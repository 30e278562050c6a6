//! Line header templates
//!
//! A header template is scanned once, at logger construction, into a list of
//! segments. `%L` becomes the level name and `%T` the timestamp. A `%`
//! followed by anything else is dropped together with that character, and a
//! lone trailing `%` is dropped too. Everything else is copied verbatim.

use super::log_level::Level;
use super::timestamp::{Clock, TimestampFormat};

/// Template used when none is given.
pub const DEFAULT_HEADER_FORMAT: &str = "[%L] %T";

const ESCAPE: char = '%';

/// One parsed piece of a header template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied as-is
    Literal(String),
    /// `%L`
    Level,
    /// `%T`
    Timestamp,
}

/// Parsed header template, rendered at the start of every visible line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFormat {
    source: String,
    segments: Vec<Segment>,
}

impl HeaderFormat {
    /// Parse a template. Never fails: malformed escapes are dropped.
    pub fn parse(template: impl Into<String>) -> Self {
        let source = template.into();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars();

        while let Some(c) = chars.next() {
            if c != ESCAPE {
                literal.push(c);
                continue;
            }
            let placeholder = match chars.next() {
                Some('L') => Segment::Level,
                Some('T') => Segment::Timestamp,
                _ => continue,
            };
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(placeholder);
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { source, segments }
    }

    /// The template text as given.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Parsed segments in template order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the template contains `%L`.
    pub fn uses_level(&self) -> bool {
        self.segments.contains(&Segment::Level)
    }

    /// Whether the template contains `%T`.
    pub fn uses_timestamp(&self) -> bool {
        self.segments.contains(&Segment::Timestamp)
    }

    /// Escapes in the template that render as nothing, in order of appearance.
    ///
    /// A trailing lone `%` is reported as `"%"`.
    pub fn dropped_escapes(&self) -> Vec<String> {
        let mut dropped = Vec::new();
        let mut chars = self.source.chars();
        while let Some(c) = chars.next() {
            if c != ESCAPE {
                continue;
            }
            match chars.next() {
                Some('L') | Some('T') => {}
                Some(other) => dropped.push(format!("%{other}")),
                None => dropped.push(ESCAPE.to_string()),
            }
        }
        dropped
    }

    /// Render the header for a line at `level`.
    pub fn render(&self, level: Level, clock: &dyn Clock, timestamp: &TimestampFormat) -> String {
        self.render_with(clock, timestamp, |out| out.push_str(level.as_str()))
    }

    pub(crate) fn render_with(
        &self,
        clock: &dyn Clock,
        timestamp: &TimestampFormat,
        mut write_level: impl FnMut(&mut String),
    ) -> String {
        let mut out = String::with_capacity(self.source.len() + 24);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Level => write_level(&mut out),
                Segment::Timestamp => out.push_str(&timestamp.format_now(clock)),
            }
        }
        out
    }
}

impl Default for HeaderFormat {
    fn default() -> Self {
        Self::parse(DEFAULT_HEADER_FORMAT)
    }
}

impl From<&str> for HeaderFormat {
    fn from(template: &str) -> Self {
        Self::parse(template)
    }
}

impl From<String> for HeaderFormat {
    fn from(template: String) -> Self {
        Self::parse(template)
    }
}
