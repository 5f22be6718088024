#![forbid(unsafe_code)]

//! Structured logging setup for hosts that want JSON output.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! host's decision. Native hosts (tests, tools, server-side rendering) can call
//! [`init_json`] once at startup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "TYPEAHEAD_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Install a global JSON subscriber filtered by [`LOG_ENV`].
///
/// Returns an error if a global subscriber is already installed.
pub fn init_json() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
}
