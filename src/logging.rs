//! Logging initialization for datenbot
//!
//! Console logging via tracing-subscriber. The log level comes from
//! `RUST_LOG` and defaults to `info`.

use tracing_subscriber::EnvFilter;

/// Initialize logging. Safe to call once per process; subsequent calls are
/// ignored so tests can initialize independently.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}
