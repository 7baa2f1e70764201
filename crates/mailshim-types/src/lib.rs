//! Log entry and error types for mailshim.

mod entry;
mod error;

pub use entry::LogEntry;
pub use error::{Result, ShimError};
