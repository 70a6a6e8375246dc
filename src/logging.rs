//! Logging setup on top of tracing-subscriber.

use crate::config::LoggingConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("auto_eda={},warn", config.level)));

    let registry = tracing_subscriber::registry().with(filter_layer);

    if config.json {
        registry
            .with(fmt::layer().with_target(false).json())
            .init();
    } else {
        registry.with(fmt::layer().with_target(false)).init();
    }
}
