//! Sink implementations
//!
//! Any `std::io::Write` works as a sink; this module only adds the ones that
//! need setup beyond what std provides.

pub mod file;

pub use file::FileSink;
