//! Tracing subscriber setup.

/// Initializes structured logging for binaries and tests.
///
/// Installs a `tracing_subscriber` fmt layer filtered through `RUST_LOG`
/// (e.g. `RUST_LOG=catalog_core=debug`). Safe to call more than once: later
/// calls are no-ops instead of panics, so every test can call it.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
