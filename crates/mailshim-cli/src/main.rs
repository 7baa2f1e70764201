//! mailshim - sendmail interception shim.
//!
//! Installed in place of a mail-submission binary. Captures the invocation
//! (arguments, stdin body, invoking identity, timestamp) into one JSON line
//! appended to the audit log. Never delivers mail.

use std::env;
use std::io;
use std::process::ExitCode;

use mailshim_capture::{OsIdentity, SystemClock};
use mailshim_metrics::names;
use mailshim_sink::FileSink;
use mailshim_types::ShimError;
use tracing::error;

use mailshim_cli::{emit_log, ShimConfig};

/// Application exit codes, one per failure class.
#[repr(u8)]
pub enum Exit {
    Success = 0,
    OpenLogFile = 3,
    StdinFailed = 4,
    JsonEncoding = 5,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

impl From<&ShimError> for Exit {
    fn from(err: &ShimError) -> Self {
        match err {
            ShimError::OpenLogFile { .. } => Exit::OpenLogFile,
            ShimError::StdinFailed { .. } => Exit::StdinFailed,
            ShimError::JsonEncoding { .. } => Exit::JsonEncoding,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let config = ShimConfig::from_env();
    let mut sink = FileSink::new(config.log_file);

    // Everything after the program name belongs to the intercepted
    // invocation; the shim itself takes no flags.
    let args: Vec<String> = env::args().skip(1).collect();

    match emit_log(args, io::stdin().lock(), OsIdentity, SystemClock, &mut sink) {
        Ok(entry) => {
            mailshim_metrics::labeled_counter(names::ENTRIES_APPENDED, "uid", &entry.user_id)
                .inc();
            Exit::Success.into()
        }
        Err(e) => {
            mailshim_metrics::labeled_counter(names::EMIT_FAILURES, "reason", e.tag()).inc();
            error!("{e}");
            Exit::from(&e).into()
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_env("MAILSHIM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}
