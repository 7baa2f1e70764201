//! Entry construction from the ambient invocation.

use std::io::Read;

use mailshim_types::{LogEntry, Result, ShimError};
use tracing::debug;

use crate::{Clock, Identity, IdentitySource};

/// Assembles a [`LogEntry`] from the argument list, the body stream, and the
/// injected identity/time capabilities.
pub struct EntryBuilder<I, C> {
    identity: I,
    clock: C,
}

impl<I: IdentitySource, C: Clock> EntryBuilder<I, C> {
    /// Create a builder over the given capabilities.
    pub fn new(identity: I, clock: C) -> Self {
        Self { identity, clock }
    }

    /// Build a fully populated entry.
    ///
    /// Drains `body` to end-of-stream before returning; any read error aborts
    /// the whole operation so a truncated body is never logged as empty.
    /// Invalid UTF-8 in the body is decoded lossily (replacement characters).
    /// `args` is captured verbatim; the caller excludes the program name.
    pub fn populate(&self, args: Vec<String>, mut body: impl Read) -> Result<LogEntry> {
        let time = self.clock.now();
        let Identity { user_id, username } = self.identity.resolve();

        let mut raw = Vec::new();
        body.read_to_end(&mut raw)
            .map_err(|source| ShimError::StdinFailed { source })?;
        debug!(bytes = raw.len(), "drained body stream");

        Ok(LogEntry {
            time,
            user_id,
            username: username.filter(|name| !name.is_empty()),
            arguments: args,
            body: String::from_utf8_lossy(&raw).into_owned(),
        })
    }
}
