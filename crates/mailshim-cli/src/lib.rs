//! Library surface of the mailshim binary: configuration and the
//! capture-and-append pipeline, kept separate so integration tests can drive
//! the full sequence with deterministic capabilities.

pub mod config;
pub mod pipeline;

pub use config::ShimConfig;
pub use pipeline::emit_log;
