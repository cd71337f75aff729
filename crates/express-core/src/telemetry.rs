//! Logging bootstrap.
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and either a
//! human-readable or a JSON formatting layer. `RUST_LOG` overrides the
//! configured level when set.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ExpressResult;
use serde::{Deserialize, Serialize};

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, colored output for local development.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Whether a subscriber should be installed at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Service name attached to the startup event.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Default filter directive (e.g. `info` or `info,express_core=debug`).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_enabled() -> bool {
    true
}

fn default_service_name() -> String {
    "default-server".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            service_name: default_service_name(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl TelemetryConfig {
    /// The filter directive used when `RUST_LOG` is unset.
    #[must_use]
    pub fn filter_directive(&self) -> String {
        format!("{},express_core=debug,express_config=debug", self.log_level)
    }
}

/// Initialize logging with the given configuration.
///
/// # Errors
///
/// Returns [`crate::ExpressError::Internal`] when a global subscriber is
/// already installed.
#[cfg(feature = "telemetry")]
pub fn init_telemetry(config: &TelemetryConfig) -> ExpressResult<()> {
    if !config.enabled {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    let installed = match config.log_format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
    };
    installed.map_err(|e| crate::ExpressError::Internal(format!("Failed to install subscriber: {}", e)))?;

    tracing::info!(
        service_name = %config.service_name,
        log_level = %config.log_level,
        log_format = ?config.log_format,
        "Telemetry initialized"
    );

    Ok(())
}

/// Placeholder for when telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_telemetry(_config: &TelemetryConfig) -> ExpressResult<()> {
    Ok(())
}
