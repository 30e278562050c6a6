//! File sink implementation

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-mode file that a [`Logger`](crate::Logger) can borrow.
///
/// The caller owns the sink and keeps it alive for as long as any logger
/// writes to it. Buffered bytes are flushed when the sink is dropped.
///
/// # Examples
///
/// ```no_run
/// use stream_logger::prelude::*;
///
/// let mut sink = FileSink::new("/var/log/app.log")?;
/// let mut logger = Logger::new(&mut sink);
/// logger.append("service started");
/// # Ok::<(), LoggerError>(())
/// ```
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    source,
                )
            })?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush buffered bytes to the file.
    pub fn sync(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_appends_to_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("app.log");
        fs::write(&path, "existing\n").unwrap();

        {
            let mut sink = FileSink::new(&path).expect("Failed to open sink");
            assert_eq!(sink.path(), path.as_path());
            sink.write_all(b"appended").unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\nappended");
    }

    #[test]
    fn test_sync_flushes_buffer() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("sync.log");

        let mut sink = FileSink::new(&path).expect("Failed to open sink");
        sink.write_all(b"buffered").unwrap();
        sink.sync().expect("Failed to sync");

        assert_eq!(fs::read_to_string(&path).unwrap(), "buffered");
    }

    #[test]
    fn test_missing_directory_is_reported() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing").join("app.log");

        let err = FileSink::new(&path).err().expect("open should fail");
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
    }
}
