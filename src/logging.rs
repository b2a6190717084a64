//! Logging setup for the `subcmd` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the program embedding it.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter
pub const LOG_ENV: &str = "SUBCMD_LOG";

/// Build the log filter from `SUBCMD_LOG`, falling back to `default_filter`.
pub fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::try_new(default_filter).unwrap_or_else(|_| EnvFilter::new("warn"))
    })
}

/// Install a stderr subscriber. Later calls are ignored.
pub fn init_logging(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
