//! File-backed append sink.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use mailshim_types::{LogEntry, Result, ShimError};
use tracing::debug;

use crate::writer::write_entry;
use crate::AppendSink;

/// Sink that appends to a log file, creating it if absent.
///
/// Holds only the target path. Each append opens the file fresh in append
/// mode and releases the handle on every exit path, so a write is scoped to
/// exactly one call and concurrent invocations coordinate purely through the
/// filesystem's append-at-EOF semantics.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Create a sink targeting `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The target log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<File> {
        let mut options = OpenOptions::new();
        options.create(true).write(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }
        options.open(&self.path).map_err(|source| ShimError::OpenLogFile {
            path: self.path.clone(),
            source,
        })
    }
}

impl AppendSink for FileSink {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        // Open failure surfaces before any encoding is attempted.
        let mut file = self.open()?;
        write_entry(&mut file, entry)?;
        debug!(path = %self.path.display(), "appended log entry");
        Ok(())
        // file dropped here; handle released on success and failure alike
    }
}
