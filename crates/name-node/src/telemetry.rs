//! Tracing subscriber setup.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Returns false if a
/// global subscriber was already installed, which makes repeated calls from
/// tests harmless.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(config.with_target)
        .with_thread_ids(config.with_thread_ids)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = %config.level, "logging initialized");
    }
    installed
}
