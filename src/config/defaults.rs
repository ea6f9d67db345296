//! Default global parameters for a fresh workspace

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{GlobalParams, DEFAULT_DETECTION_RATE, DEFAULT_SERVICE_COST_PER_PUMP};

/// Seed values of the global parameters
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    /// Detection rate in percent inherited by analyses without an override
    #[serde(default = "default_detection_rate")]
    pub detection_rate: f64,

    /// Yearly Argos service cost per pump
    #[serde(default = "default_service_cost_per_pump")]
    pub service_cost_per_pump: f64,
}

impl DefaultsConfig {
    /// Validate defaults configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=100.0).contains(&self.detection_rate) {
            return Err(ValidationError::InvalidDetectionRate(self.detection_rate));
        }
        if !(self.service_cost_per_pump.is_finite() && self.service_cost_per_pump > 0.0) {
            return Err(ValidationError::InvalidServiceCost(self.service_cost_per_pump));
        }
        Ok(())
    }

    /// Global parameters seeded from this section
    pub fn global_params(&self) -> Result<GlobalParams, ValidationError> {
        self.validate()?;
        Ok(GlobalParams {
            detection_rate: self.detection_rate,
            service_cost_per_pump: self.service_cost_per_pump,
        })
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            detection_rate: default_detection_rate(),
            service_cost_per_pump: default_service_cost_per_pump(),
        }
    }
}

fn default_detection_rate() -> f64 {
    DEFAULT_DETECTION_RATE
}

fn default_service_cost_per_pump() -> f64 {
    DEFAULT_SERVICE_COST_PER_PUMP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_domain_defaults() {
        let config = DefaultsConfig::default();
        assert_eq!(config.global_params().unwrap(), GlobalParams::default());
    }

    #[test]
    fn test_validate_rejects_out_of_range_detection() {
        let config = DefaultsConfig {
            detection_rate: 120.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidDetectionRate(120.0))
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_service_cost() {
        let config = DefaultsConfig {
            service_cost_per_pump: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidServiceCost(_))
        ));
    }
}
