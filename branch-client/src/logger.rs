//! Logging Infrastructure
//!
//! The library only emits `tracing` events; binaries call [`init_logger`]
//! once at startup. Logs go to stderr so command output stays clean.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "branch_client=info,branch_admin=info";

/// Initialize the logger
pub fn init_logger() {
    init_logger_with(None, false);
}

/// Initialize the logger with an explicit level and output format.
///
/// `RUST_LOG` still wins over `level` when it is set.
pub fn init_logger_with(level: Option<&str>, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match level {
        Some(level) => EnvFilter::new(format!("branch_client={level},branch_admin={level}")),
        None => EnvFilter::new(DEFAULT_FILTER),
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
