//! Diagnostic logging for the CLI, written to stderr.

use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding an `EnvFilter` directive, e.g. `chainorder=debug`.
pub const LOG_ENV: &str = "CHAINORDER_LOG";

/// Install the global subscriber.
///
/// `--verbose` forces `debug`; otherwise `CHAINORDER_LOG` applies, falling back to `warn`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let stderr_layer = fmt::layer().with_writer(io::stderr).with_target(false).without_time();

    let _ = tracing_subscriber::registry().with(filter).with(stderr_layer).try_init();
}
