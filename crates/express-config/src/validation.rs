//! Configuration validation.
//!
//! Collects every problem in one pass so a bad deployment fails fast with
//! the full list rather than one error at a time.

use crate::{AppConfig, AppMetadata, ObservabilityConfig, PaginationConfig};
use express_core::SIZE_LIMIT;
use std::fmt;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Application name is empty.
    EmptyAppName,
    /// A page size setting is zero.
    ZeroPageSize { name: String },
    /// Default page size exceeds the maximum page size.
    DefaultSizeAboveMax { default_size: usize, max_size: usize },
    /// Maximum page size exceeds the hard request limit.
    MaxSizeTooLarge { value: usize, maximum: usize },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAppName => write!(f, "Application name must not be empty"),
            Self::ZeroPageSize { name } => write!(f, "Page size '{}' must be at least 1", name),
            Self::DefaultSizeAboveMax { default_size, max_size } => {
                write!(
                    f,
                    "Default page size ({}) cannot be greater than max page size ({})",
                    default_size, max_size
                )
            }
            Self::MaxSizeTooLarge { value, maximum } => {
                write!(f, "Max page size {} exceeds maximum allowed ({})", value, maximum)
            }
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{}' (valid: trace, debug, info, warn, error)",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];

    /// Validates the entire application configuration.
    ///
    /// # Errors
    ///
    /// Returns every validation error found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_app(&config.app, &mut errors);
        Self::validate_pagination(&config.pagination, &mut errors);
        Self::validate_observability(&config.observability, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_app(config: &AppMetadata, errors: &mut Vec<ConfigValidationError>) {
        if config.name.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyAppName);
        }
    }

    fn validate_pagination(config: &PaginationConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.default_size == 0 {
            errors.push(ConfigValidationError::ZeroPageSize {
                name: "pagination.default_size".to_string(),
            });
        }
        if config.max_size == 0 {
            errors.push(ConfigValidationError::ZeroPageSize {
                name: "pagination.max_size".to_string(),
            });
        }
        if config.default_size > config.max_size {
            errors.push(ConfigValidationError::DefaultSizeAboveMax {
                default_size: config.default_size,
                max_size: config.max_size,
            });
        }
        if config.max_size > SIZE_LIMIT {
            errors.push(ConfigValidationError::MaxSizeTooLarge {
                value: config.max_size,
                maximum: SIZE_LIMIT,
            });
        }
    }

    fn validate_observability(config: &ObservabilityConfig, errors: &mut Vec<ConfigValidationError>) {
        let level = config.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.log_level.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_app_name() {
        let mut config = AppConfig::default();
        config.app.name = "  ".to_string();
        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors, vec![ConfigValidationError::EmptyAppName]);
    }

    #[test]
    fn test_zero_sizes_collected() {
        let mut config = AppConfig::default();
        config.pagination.default_size = 0;
        config.pagination.max_size = 0;
        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| matches!(e, ConfigValidationError::ZeroPageSize { .. })));
    }

    #[test]
    fn test_default_above_max() {
        let mut config = AppConfig::default();
        config.pagination.default_size = 200;
        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ConfigValidationError::DefaultSizeAboveMax {
                default_size: 200,
                max_size: 100,
            }]
        );
    }

    #[test]
    fn test_max_size_too_large() {
        let mut config = AppConfig::default();
        config.pagination.max_size = SIZE_LIMIT + 1;
        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors.contains(&ConfigValidationError::MaxSizeTooLarge {
            value: SIZE_LIMIT + 1,
            maximum: SIZE_LIMIT,
        }));
    }

    #[test]
    fn test_log_level() {
        let mut config = AppConfig::default();
        config.observability.log_level = "WARN".to_string();
        assert!(ConfigValidator::validate(&config).is_ok());

        config.observability.log_level = "verbose".to_string();
        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors[0].to_string().contains("verbose"));
    }
}
