/// Tracing subscriber setup shared by every Lambda binary
use tracing_subscriber::EnvFilter;

/// Initializes JSON structured logging
///
/// The filter comes from `RUST_LOG` and falls back to `info`. Calling this
/// twice is harmless; the second call is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .json()
        .try_init();
}
