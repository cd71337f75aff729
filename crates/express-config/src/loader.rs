//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use express_core::ExpressError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Environment variable selecting the environment-specific config file.
pub const ENVIRONMENT_VAR: &str = "EXPRESS_ENVIRONMENT";

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: PathBuf,
    environment: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `EXPRESS__` prefix
    ///
    /// The environment comes from `EXPRESS_ENVIRONMENT` (default `development`).
    ///
    /// # Errors
    ///
    /// Returns [`ExpressError::Configuration`] when a source cannot be read
    /// or the merged configuration is invalid.
    pub fn new(config_dir: impl Into<PathBuf>) -> Result<Self, ExpressError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());
        Self::with_environment(config_dir, environment)
    }

    /// Creates a loader for an explicit environment name.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigLoader::new`].
    pub fn with_environment(config_dir: impl Into<PathBuf>, environment: impl Into<String>) -> Result<Self, ExpressError> {
        let config_dir = config_dir.into();
        let environment = environment.into();
        let config = Self::load_config(&config_dir, &environment)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
            environment,
        })
    }

    /// Loads configuration from the default location (`./config`).
    ///
    /// # Errors
    ///
    /// Same as [`ConfigLoader::new`].
    pub fn from_default_location() -> Result<Self, ExpressError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// The environment this loader reads overrides for.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Reloads the configuration from disk.
    ///
    /// The current configuration is kept when the reload fails.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigLoader::new`].
    pub async fn reload(&self) -> Result<(), ExpressError> {
        let new_config = Self::load_config(&self.config_dir, &self.environment)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &Path, environment: &str) -> Result<AppConfig, ExpressError> {
        info!(environment, config_dir = %config_dir.display(), "Loading configuration");

        let mut builder = Config::builder();

        for name in ["default", environment, "local"] {
            let path = config_dir.join(format!("{name}.toml"));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        // Override with environment variables (EXPRESS__ prefix)
        builder = builder.add_source(
            Environment::with_prefix("EXPRESS")
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_express_error)?;

        ConfigValidator::validate(&app_config).map_err(|errors| {
            ExpressError::Configuration(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

        Ok(app_config)
    }

    /// Gets a specific configuration value by key path, e.g. `pagination.max_size`.
    pub async fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let config = self.config.read().await;
        let json = serde_json::to_value(&*config).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }
}

fn config_error_to_express_error(err: ConfigError) -> ExpressError {
    ExpressError::Configuration(err.to_string())
}
