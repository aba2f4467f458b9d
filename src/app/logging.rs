//! Tracing subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `dagsmith=debug`).
pub const LOG_ENV: &str = "DAGSMITH_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second call only fails because a global subscriber is already set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
