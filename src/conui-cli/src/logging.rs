//! Tracing subscriber setup.
//!
//! Logs always go to stderr so they never interleave with `--capture`
//! snapshots on stdout.

use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Environment variable overriding `--log-level`.
pub const LOG_ENV: &str = "CONUI_LOG";

/// Picks the effective level: `-v` wins, then `CONUI_LOG`, then the flag.
pub fn effective_level(flag: LogLevel, verbose: bool, env_value: Option<&str>) -> LogLevel {
    if verbose {
        LogLevel::Debug
    } else if let Some(level) = env_value.and_then(LogLevel::from_str_loose) {
        level
    } else {
        flag
    }
}

/// Builds the filter. `RUST_LOG` directives take over when set.
pub fn build_filter(level: LogLevel) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level.as_filter_str())
    }
}

/// Installs the global subscriber. A subscriber that is already installed
/// is left in place.
pub fn init(flag: LogLevel, verbose: bool) {
    let env_value = std::env::var(LOG_ENV).ok();
    let level = effective_level(flag, verbose, env_value.as_deref());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
