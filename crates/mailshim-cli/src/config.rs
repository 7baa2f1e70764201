//! Shim configuration.
//!
//! The argv surface belongs entirely to the intercepted invocation, so the
//! shim itself is configured through the environment only.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Well-known default log file location.
pub const DEFAULT_LOG_FILE: &str = "/var/log/mailshim.log.json";

/// Environment variable overriding the log file path.
pub const LOG_FILE_ENV: &str = "MAILSHIM_LOG_FILE";

/// Resolved shim configuration, passed explicitly to the sink.
#[derive(Debug, Clone)]
pub struct ShimConfig {
    /// Target log file for appended entries.
    pub log_file: PathBuf,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl ShimConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        match lookup(LOG_FILE_ENV) {
            Some(path) if !path.is_empty() => Self {
                log_file: PathBuf::from(path),
            },
            _ => Self::default(),
        }
    }
}
