//! Parameters shared by every analysis.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Default detection rate of the Argos service, in percent.
pub const DEFAULT_DETECTION_RATE: f64 = 70.0;

/// Default yearly Argos service cost per monitored pump.
pub const DEFAULT_SERVICE_COST_PER_PUMP: f64 = 2500.0;

/// Global parameters applied to all analyses unless overridden.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalParams {
    /// Share of failures the service detects in time, 0-100.
    pub detection_rate: f64,
    /// Service cost per pump, strictly positive.
    pub service_cost_per_pump: f64,
}

impl GlobalParams {
    /// Creates global parameters after range-checking both values.
    pub fn try_new(detection_rate: f64, service_cost_per_pump: f64) -> Result<Self, ValidationError> {
        if !detection_rate.is_finite() || !(0.0..=100.0).contains(&detection_rate) {
            return Err(ValidationError::out_of_range(
                "detection_rate",
                0.0,
                100.0,
                detection_rate,
            ));
        }
        if !service_cost_per_pump.is_finite() || service_cost_per_pump <= 0.0 {
            return Err(ValidationError::invalid_format(
                "service_cost_per_pump",
                "must be greater than 0",
            ));
        }
        Ok(Self {
            detection_rate,
            service_cost_per_pump,
        })
    }

    /// Returns a copy with the given partial update applied.
    pub fn merged(&self, update: &GlobalParamsUpdate) -> Self {
        Self {
            detection_rate: update.detection_rate.unwrap_or(self.detection_rate),
            service_cost_per_pump: update
                .service_cost_per_pump
                .unwrap_or(self.service_cost_per_pump),
        }
    }
}

impl Default for GlobalParams {
    fn default() -> Self {
        Self {
            detection_rate: DEFAULT_DETECTION_RATE,
            service_cost_per_pump: DEFAULT_SERVICE_COST_PER_PUMP,
        }
    }
}

/// Partial update of the global parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlobalParamsUpdate {
    pub detection_rate: Option<f64>,
    pub service_cost_per_pump: Option<f64>,
}
