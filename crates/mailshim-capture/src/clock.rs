//! Capture-time resolution.

use chrono::{SecondsFormat, Utc};

/// Capability for reading the capture instant.
///
/// Always succeeds; substitutable with a constant clock in tests.
pub trait Clock {
    /// Current time as UTC RFC 3339 with second precision.
    fn now(&self) -> String;
}

/// Production clock reading the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
