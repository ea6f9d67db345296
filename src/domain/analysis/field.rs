//! Addressable fields of an analysis.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A user-editable field of an [`Analysis`](super::Analysis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisField {
    Name,
    PumpType,
    PumpQuantity,
    FailureRateMode,
    FailureRatePercentage,
    AbsoluteFailureCount,
    WaferType,
    WaferQuantity,
    WaferCost,
    DowntimeDuration,
    DowntimeCostPerHour,
    DetectionRate,
}

impl AnalysisField {
    /// Fields carried over when a what-if replaces its original.
    ///
    /// The name is excluded: the what-if name carries the " (What If)" suffix.
    pub const EDITABLE: [AnalysisField; 11] = [
        AnalysisField::PumpType,
        AnalysisField::PumpQuantity,
        AnalysisField::FailureRateMode,
        AnalysisField::FailureRatePercentage,
        AnalysisField::AbsoluteFailureCount,
        AnalysisField::WaferType,
        AnalysisField::WaferQuantity,
        AnalysisField::WaferCost,
        AnalysisField::DowntimeDuration,
        AnalysisField::DowntimeCostPerHour,
        AnalysisField::DetectionRate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisField::Name => "name",
            AnalysisField::PumpType => "pump_type",
            AnalysisField::PumpQuantity => "pump_quantity",
            AnalysisField::FailureRateMode => "failure_rate_mode",
            AnalysisField::FailureRatePercentage => "failure_rate_percentage",
            AnalysisField::AbsoluteFailureCount => "absolute_failure_count",
            AnalysisField::WaferType => "wafer_type",
            AnalysisField::WaferQuantity => "wafer_quantity",
            AnalysisField::WaferCost => "wafer_cost",
            AnalysisField::DowntimeDuration => "downtime_duration",
            AnalysisField::DowntimeCostPerHour => "downtime_cost_per_hour",
            AnalysisField::DetectionRate => "detection_rate",
        }
    }
}

impl fmt::Display for AnalysisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        std::iter::once(AnalysisField::Name)
            .chain(AnalysisField::EDITABLE)
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("field", format!("unknown field '{}'", s)))
    }
}
