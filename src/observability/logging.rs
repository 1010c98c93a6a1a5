//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins; otherwise the configured level applies to this crate
//! - Installed before the config is read, then reloaded with the configured level

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{
    layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

use crate::config::ObservabilityConfig;

/// Handle for swapping the filter of an installed subscriber.
pub type LogHandle = reload::Handle<EnvFilter, Registry>;

/// Build the filter used when `RUST_LOG` is not set.
pub fn default_filter(config: &ObservabilityConfig) -> String {
    format!("view_router={}", config.log_level)
}

/// Reloadable filter layer: `RUST_LOG` if set, the configured level otherwise.
pub fn filter_layer(
    config: &ObservabilityConfig,
) -> (reload::Layer<EnvFilter, Registry>, LogHandle) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config)));
    reload::Layer::new(filter)
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &ObservabilityConfig) -> Result<LogHandle, TryInitError> {
    let (filter, handle) = filter_layer(config);
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(handle)
}

/// Switch to the configured level. `RUST_LOG` keeps precedence.
pub fn apply_level(handle: &LogHandle, config: &ObservabilityConfig) -> Result<(), reload::Error> {
    if std::env::var_os("RUST_LOG").is_some() {
        return Ok(());
    }
    handle.reload(EnvFilter::new(default_filter(config)))
}
