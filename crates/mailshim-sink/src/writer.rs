//! Caller-owned writer sink and the shared line-write path.

use std::io::Write;

use mailshim_types::{LogEntry, Result, ShimError};

use crate::AppendSink;

/// Sink over an externally supplied writer.
///
/// The writer stays caller-owned: nothing is opened or closed implicitly,
/// and [`WriterSink::into_inner`] hands it back.
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a caller-owned writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Release the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> AppendSink for WriterSink<W> {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        write_entry(&mut self.writer, entry)
    }
}

/// Encode `entry` and issue the whole line as a single write call, so
/// concurrent appenders interleave whole lines rather than fragments.
pub(crate) fn write_entry(writer: &mut impl Write, entry: &LogEntry) -> Result<()> {
    let line = entry
        .to_json_line()
        .map_err(|source| ShimError::JsonEncoding { source })?;
    writer
        .write_all(&line)
        .map_err(|e| ShimError::JsonEncoding {
            source: serde_json::Error::io(e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn sample() -> LogEntry {
        LogEntry {
            time: "2009-11-10T23:00:00Z".to_string(),
            user_id: "123".to_string(),
            username: Some("foo".to_string()),
            arguments: vec!["yay".to_string(), "asdf".to_string()],
            body: "stuff".to_string(),
        }
    }

    struct ErrorWriter;
    impl Write for ErrorWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "oh no"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_sink_appends_expected_line() {
        let mut sink = WriterSink::new(Vec::new());
        sink.append(&sample()).unwrap();
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            written,
            "{\"time\":\"2009-11-10T23:00:00Z\",\"uid\":\"123\",\"username\":\"foo\",\
             \"arguments\":[\"yay\",\"asdf\"],\"body\":\"stuff\"}\n"
        );
    }

    #[test]
    fn test_write_failure_is_tagged_json_encoding() {
        let mut sink = WriterSink::new(ErrorWriter);
        let err = sink.append(&sample()).unwrap_err();
        assert_eq!(err.tag(), "json-encoding");
    }
}
