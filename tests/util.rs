//! Logging setup shared by the integration tests.
#![allow(dead_code)]

use tracing_subscriber::filter::EnvFilter;

/// Installs a global `fmt` subscriber for this test binary, once.
///
/// The library only emits events with the "tracing" feature enabled. Set
/// `RUST_LOG` to override the default `hyphae=trace` filter.
pub fn trace_init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hyphae=trace"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init();
}
