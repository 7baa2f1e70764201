//! Durable append-only log sinks for mailshim.

mod file;
mod writer;

use mailshim_types::{LogEntry, Result};

pub use file::FileSink;
pub use writer::WriterSink;

/// An appendable destination for encoded log entries.
///
/// On success exactly one line has been appended. On failure either nothing
/// was written or the write is reported as failed; no retry is attempted.
pub trait AppendSink {
    /// Encode `entry` as one JSON line and append it.
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
}
