//! The capture-and-append pipeline.

use std::io::Read;

use mailshim_capture::{Clock, EntryBuilder, IdentitySource};
use mailshim_sink::AppendSink;
use mailshim_types::{LogEntry, Result};

/// Build one entry from the invocation and append it to the sink.
///
/// Strict two-phase, fail-fast sequence: the entry is fully populated before
/// the sink is touched, and a failure in either phase propagates untouched.
/// Returns the appended entry so the caller can key telemetry by uid.
pub fn emit_log<R, S>(
    args: Vec<String>,
    body: R,
    identity: impl IdentitySource,
    clock: impl Clock,
    sink: &mut S,
) -> Result<LogEntry>
where
    R: Read,
    S: AppendSink,
{
    let entry = EntryBuilder::new(identity, clock).populate(args, body)?;
    sink.append(&entry)?;
    Ok(entry)
}
