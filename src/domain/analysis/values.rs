//! Enumerated configuration values of an analysis.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// How the failure rate of an analysis is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureRateMode {
    /// Failure rate typed directly as a percentage of the pump fleet.
    #[default]
    Percentage,
    /// Failure rate derived from an absolute count of failing pumps.
    Absolute,
}

impl FailureRateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureRateMode::Percentage => "percentage",
            FailureRateMode::Absolute => "absolute",
        }
    }
}

impl fmt::Display for FailureRateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailureRateMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percentage" => Ok(FailureRateMode::Percentage),
            "absolute" => Ok(FailureRateMode::Absolute),
            other => Err(ValidationError::invalid_format(
                "failure_rate_mode",
                format!("unknown mode '{}'", other),
            )),
        }
    }
}

/// Wafer handling of the process step protected by the pumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaferType {
    /// Single-wafer tool: one wafer is lost per failure.
    Mono,
    /// Batch tool: the whole batch is lost per failure.
    #[default]
    Batch,
}

impl WaferType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaferType::Mono => "mono",
            WaferType::Batch => "batch",
        }
    }
}

impl fmt::Display for WaferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WaferType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mono" => Ok(WaferType::Mono),
            "batch" => Ok(WaferType::Batch),
            other => Err(ValidationError::invalid_format(
                "wafer_type",
                format!("unknown wafer type '{}'", other),
            )),
        }
    }
}
