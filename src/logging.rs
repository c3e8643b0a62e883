//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const ENV_VAR: &str = "RINGPASS_LOG";

/// Install the global subscriber with `default` as the filter unless
/// `RINGPASS_LOG` is set.
pub fn init(default: &str) {
    let filter = EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
