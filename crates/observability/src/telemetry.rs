//! Global subscriber initialization.

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;
use crate::host_log_layer::host_log_layer;

/// Install the global tracing subscriber described by `config`.
///
/// Layers: an `EnvFilter` (from `log_level`, else `RUST_LOG`, else "info"),
/// an optional stderr fmt layer, and the host log layer when a sink is set.
///
/// Fails with [`ObservabilityError::Config`] on an unparsable filter and
/// [`ObservabilityError::InitFailed`] when a global subscriber already exists.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = match config.log_level.as_deref() {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| ObservabilityError::Config(format!("invalid log level `{level}`: {e}")))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    // Build layers first, then compose once to avoid type mismatch
    let fmt_layer = config
        .enable_console
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let host_layer = host_log_layer(config.log_sink.clone());

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(host_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::info!(
        service.name = %config.service_name,
        console = config.enable_console,
        host_sink = config.log_sink.is_some(),
        "Tracing initialized"
    );

    Ok(())
}

/// Initialize with configuration from environment variables
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}
