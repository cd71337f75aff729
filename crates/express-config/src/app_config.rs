//! Application configuration structures.

use express_core::telemetry::{LogFormat, TelemetryConfig};
use express_core::{ExpressResult, PageDefaults, PageParams, PageQuery};
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Paging defaults for list endpoints.
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Logging configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Builds the telemetry settings for this application.
    #[must_use]
    pub fn telemetry(&self) -> TelemetryConfig {
        TelemetryConfig {
            enabled: true,
            service_name: self.app.name.clone(),
            log_level: self.observability.log_level.clone(),
            log_format: self.observability.log_format,
        }
    }
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "default-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Paging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size used when a request names none.
    pub default_size: usize,
    /// Largest page size a request may ask for.
    pub max_size: usize,
    /// Whether `page` request parameters count from 1.
    pub one_indexed_parameters: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_size: PageQuery::DEFAULT_SIZE,
            max_size: 100,
            one_indexed_parameters: false,
        }
    }
}

impl PaginationConfig {
    /// The defaults handed to [`PageParams::into_query`].
    #[must_use]
    pub const fn defaults(&self) -> PageDefaults {
        PageDefaults {
            default_size: self.default_size,
            max_size: self.max_size,
            one_indexed: self.one_indexed_parameters,
        }
    }

    /// Resolves raw request parameters into a page query.
    ///
    /// # Errors
    ///
    /// Propagates validation and sort-parsing errors from [`PageParams::into_query`].
    pub fn resolve(&self, params: PageParams) -> ExpressResult<PageQuery> {
        params.into_query(&self.defaults())
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log format (json, pretty).
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
