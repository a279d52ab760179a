//! Logging setup.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the global subscriber.
///
/// `RUST_LOG` overrides the default `info` level, e.g.
/// `RUST_LOG=salidas_report=debug`. Output goes to stderr so stdout stays
/// clean for the summary table.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Verbose subscriber for tests; safe to call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
