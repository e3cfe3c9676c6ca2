//! Tracing subscriber setup for applications embedding the library

use crate::config::LoggingConfig;
use tracing_subscriber::{EnvFilter, fmt};

/// Install a global fmt subscriber.
///
/// `RUST_LOG` wins over the configured level. Returns `false` if a subscriber
/// was already installed, which leaves the existing one in place.
pub fn init(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("travelquote={}", config.level)));

    let installed = match config.format.as_str() {
        "json" => fmt().json().with_env_filter(filter).try_init().is_ok(),
        _ => fmt().with_env_filter(filter).try_init().is_ok(),
    };

    if installed {
        tracing::debug!(
            "Logging initialized at level {} ({})",
            config.level,
            config.format
        );
    }
    installed
}
