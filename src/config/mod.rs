//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ARGOS_ROI` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use argos_roi::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Logging with filter {}", config.logging.level);
//! ```

mod defaults;
mod error;
mod format;
mod logging;
mod storage;

pub use defaults::DefaultsConfig;
pub use error::{ConfigError, ValidationError};
pub use format::FormatConfig;
pub use logging::LoggingConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Seed values of the global parameters
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Currency and percentage rendering
    #[serde(default)]
    pub format: FormatConfig,

    /// Workspace persistence
    #[serde(default)]
    pub storage: StorageConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ARGOS_ROI` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ARGOS_ROI__DEFAULTS__DETECTION_RATE=80` -> `defaults.detection_rate = 80`
    /// - `ARGOS_ROI__STORAGE__PATH=./workspace.yaml` -> `storage.path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ARGOS_ROI")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.defaults.validate()?;
        self.format.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
