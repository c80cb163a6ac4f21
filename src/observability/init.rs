//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Installs a registry with an [`EnvFilter`] and a compact formatting layer that
/// writes to stderr, keeping stdout free for query results.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, if set and valid
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// Idempotent: only the first call installs a subscriber.
///
/// # Example
///
/// ```rust
/// use photofinder::observability::init_tracing;
/// use photofinder::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
