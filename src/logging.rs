//! Diagnostic logging on stderr.
//!
//! Warnings (rejected tools, unknown models, ...) and notices go through
//! `tracing`. The filter comes from `AGENT_SCAFFOLD_LOG` when set, otherwise
//! `info`, or `debug` with `--verbose`. Regular command output stays on stdout.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "AGENT_SCAFFOLD_LOG";

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
