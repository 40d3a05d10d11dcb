//! Utilities for logging.

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

/// Output format for emitted traces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoggingMode {
    #[default]
    Pretty,
    Json,
    Compact,
}

/// Initialize the global tracing subscriber.
///
/// `verbosity` maps repeated `-v` flags to a default level filter: 0 =>
/// warn, 1 => info, 2 => debug, 3+ => trace. `RUST_LOG` takes precedence
/// when set.
pub fn init(verbosity: u8, mode: LoggingMode) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // `init` panics if a global subscriber is already set. Tests may
    // initialize more than once, so swallow that case.
    let result = match mode {
        LoggingMode::Pretty => builder.pretty().try_init(),
        LoggingMode::Json => builder.json().try_init(),
        LoggingMode::Compact => builder.compact().try_init(),
    };
    let _ = result;
}
