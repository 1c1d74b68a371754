//! Shared setup for the runnable examples.

use tracing_subscriber::{EnvFilter, fmt};

/// Installs a compact stderr subscriber filtered by `RUST_LOG`, defaulting
/// to `warn`. Set `RUST_LOG=optschema_core=trace` to watch the parser
/// classify each token.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
