//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Default detection rate must be between 0 and 100, got {0}")]
    InvalidDetectionRate(f64),

    #[error("Default service cost per pump must be greater than 0, got {0}")]
    InvalidServiceCost(f64),

    #[error("Percentage digits must be at most 6, got {0}")]
    TooManyPercentageDigits(usize),

    #[error("Decimal separator must not be empty")]
    EmptyDecimalSeparator,

    #[error("Group and decimal separators must differ")]
    AmbiguousSeparators,

    #[error("Storage path must not be empty")]
    EmptyStoragePath,

    #[error("Log level must not be empty")]
    EmptyLogLevel,
}
