//! The captured invocation record.

use serde::{Deserialize, Serialize};

/// One captured mail-submission invocation.
///
/// Built once per process lifetime, fully populated in a single pass, then
/// handed to a sink for one encode-and-append cycle. Field order here is the
/// canonical key order of the encoded line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Capture instant, UTC, RFC 3339.
    pub time: String,
    /// Invoking OS user id as a decimal string.
    #[serde(rename = "uid")]
    pub user_id: String,
    /// Human-readable user name; the key is omitted entirely when unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Verbatim invocation arguments, program name excluded.
    pub arguments: Vec<String>,
    /// Full contents of the captured input stream.
    pub body: String,
}

impl LogEntry {
    /// Encode to a single JSON line terminated by exactly one newline.
    pub fn to_json_line(&self) -> serde_json::Result<Vec<u8>> {
        let mut buf = serde_json::to_vec(self)?;
        buf.push(b'\n');
        Ok(buf)
    }
}
