use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber honoring `RUST_LOG`
///
/// The library itself only emits events and never installs a subscriber;
/// binaries and tests that want log output call this once at startup.
/// Falls back to the `info` level when `RUST_LOG` is unset, and is a no-op
/// when a subscriber is already installed.
pub fn setup_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
