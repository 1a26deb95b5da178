//! Telemetry logic.
//! Logging setup for the embedding application.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber, filtered by `RUST_LOG`.
///
/// Intended to be called once by the presentation layer before
/// [`crate::initialize_state`].
pub fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
