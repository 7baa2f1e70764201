//! Error taxonomy for the capture-and-append pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// A pipeline stage failure.
///
/// Each variant carries the underlying cause and maps to a stable tag used
/// for telemetry keying. Every failure is fatal to the invocation; no stage
/// retries or suppresses.
#[derive(Debug, Error)]
pub enum ShimError {
    /// The target file could not be opened or created for append.
    #[error("couldn't open log file {path}: {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input stream could not be fully drained.
    #[error("couldn't read stdin: {source}")]
    StdinFailed {
        #[source]
        source: std::io::Error,
    },

    /// The entry could not be serialized or written out.
    #[error("couldn't encode JSON: {source}")]
    JsonEncoding {
        #[source]
        source: serde_json::Error,
    },
}

impl ShimError {
    /// Stable failure tag for this error class.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::OpenLogFile { .. } => "open-log-file",
            Self::StdinFailed { .. } => "stdin-failed",
            Self::JsonEncoding { .. } => "json-encoding",
        }
    }
}

/// Result type alias using [`ShimError`].
pub type Result<T> = std::result::Result<T, ShimError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_tags_are_stable() {
        let open = ShimError::OpenLogFile {
            path: PathBuf::from(""),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let stdin = ShimError::StdinFailed {
            source: io::Error::new(io::ErrorKind::Other, "oh no"),
        };
        let encode = ShimError::JsonEncoding {
            source: serde_json::Error::io(io::Error::new(io::ErrorKind::Other, "oh no")),
        };
        assert_eq!(open.tag(), "open-log-file");
        assert_eq!(stdin.tag(), "stdin-failed");
        assert_eq!(encode.tag(), "json-encoding");
    }

    #[test]
    fn test_display_carries_cause() {
        let err = ShimError::StdinFailed {
            source: io::Error::new(io::ErrorKind::Other, "oh no"),
        };
        assert_eq!(err.to_string(), "couldn't read stdin: oh no");
    }
}
