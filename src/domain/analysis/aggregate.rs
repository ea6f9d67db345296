//! Analysis entity - one process/equipment configuration.

use serde::{Deserialize, Serialize};

use super::{AnalysisField, FailureRateMode, GlobalParams, WaferType};
use crate::domain::foundation::{AnalysisId, Timestamp, ValidationError};
use crate::domain::validation::percentage_from_count;

/// Suffix appended to the name of a what-if duplicate.
pub const WHAT_IF_SUFFIX: &str = " (What If)";

/// One process/equipment configuration evaluated for the Argos service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub id: AnalysisId,
    pub name: String,
    pub pump_type: String,
    pub pump_quantity: u32,
    pub failure_rate_mode: FailureRateMode,
    pub failure_rate_percentage: f64,
    /// Only meaningful when `failure_rate_mode` is absolute.
    pub absolute_failure_count: Option<u32>,
    pub wafer_type: WaferType,
    pub wafer_quantity: u32,
    pub wafer_cost: f64,
    /// Hours of downtime per failure.
    pub downtime_duration: f64,
    pub downtime_cost_per_hour: f64,
    /// Per-analysis override; `None` inherits the global detection rate.
    pub detection_rate: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Analysis {
    /// Creates an analysis with a fresh id and default (incomplete) values.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if the name is blank after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let now = Timestamp::now();
        Ok(Self {
            id: AnalysisId::new(),
            name: name.to_string(),
            pump_type: String::new(),
            pump_quantity: 0,
            failure_rate_mode: FailureRateMode::Percentage,
            failure_rate_percentage: 0.0,
            absolute_failure_count: None,
            wafer_type: WaferType::Batch,
            wafer_quantity: 1,
            wafer_cost: 0.0,
            downtime_duration: 0.0,
            downtime_cost_per_hour: 0.0,
            detection_rate: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// True when every input the ROI depends on is strictly positive.
    pub fn is_calculable(&self) -> bool {
        self.pump_quantity > 0
            && self.failure_rate_percentage > 0.0
            && self.wafer_cost > 0.0
            && self.downtime_duration > 0.0
            && self.downtime_cost_per_hour > 0.0
    }

    /// Wafers lost per failure: a mono tool always loses exactly one.
    pub fn effective_wafer_quantity(&self) -> u32 {
        match self.wafer_type {
            WaferType::Mono => 1,
            WaferType::Batch => self.wafer_quantity,
        }
    }

    /// The analysis override if present, else the global detection rate.
    pub fn effective_detection_rate(&self, global: &GlobalParams) -> f64 {
        self.detection_rate.unwrap_or(global.detection_rate)
    }

    /// Deep copy with a new id, fresh timestamps and a " (What If)" name.
    pub fn what_if_copy(&self) -> Self {
        let now = Timestamp::now();
        Self {
            id: AnalysisId::new(),
            name: format!("{}{}", self.name, WHAT_IF_SUFFIX),
            created_at: now,
            updated_at: now,
            ..self.clone()
        }
    }

    /// Merges a partial update and refreshes `updated_at`.
    ///
    /// In absolute mode, touching the pump quantity, the failure count or the
    /// mode re-derives the failure percentage from the count.
    pub fn apply(&mut self, update: &AnalysisUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(pump_type) = &update.pump_type {
            self.pump_type = pump_type.clone();
        }
        if let Some(v) = update.pump_quantity {
            self.pump_quantity = v;
        }
        if let Some(v) = update.failure_rate_mode {
            self.failure_rate_mode = v;
        }
        if let Some(v) = update.failure_rate_percentage {
            self.failure_rate_percentage = v;
        }
        if let Some(v) = update.absolute_failure_count {
            self.absolute_failure_count = v;
        }
        if let Some(v) = update.wafer_type {
            self.wafer_type = v;
        }
        if let Some(v) = update.wafer_quantity {
            self.wafer_quantity = v;
        }
        if let Some(v) = update.wafer_cost {
            self.wafer_cost = v;
        }
        if let Some(v) = update.downtime_duration {
            self.downtime_duration = v;
        }
        if let Some(v) = update.downtime_cost_per_hour {
            self.downtime_cost_per_hour = v;
        }
        if let Some(v) = update.detection_rate {
            self.detection_rate = v;
        }

        let rederive = update.pump_quantity.is_some()
            || update.absolute_failure_count.is_some()
            || update.failure_rate_mode.is_some();
        if rederive && update.failure_rate_percentage.is_none() {
            self.rederive_failure_percentage();
        }

        self.updated_at = self.updated_at.refreshed();
    }

    /// Copies every editable field from `source`, keeping id, name and
    /// creation time.
    pub fn copy_editable_fields_from(&mut self, source: &Analysis) {
        self.apply(&AnalysisUpdate::editable_fields_of(source));
    }

    /// True when `field` holds the same value in both analyses.
    pub fn same_value(&self, other: &Analysis, field: AnalysisField) -> bool {
        match field {
            AnalysisField::Name => self.name == other.name,
            AnalysisField::PumpType => self.pump_type == other.pump_type,
            AnalysisField::PumpQuantity => self.pump_quantity == other.pump_quantity,
            AnalysisField::FailureRateMode => self.failure_rate_mode == other.failure_rate_mode,
            AnalysisField::FailureRatePercentage => {
                self.failure_rate_percentage == other.failure_rate_percentage
            }
            AnalysisField::AbsoluteFailureCount => {
                self.absolute_failure_count == other.absolute_failure_count
            }
            AnalysisField::WaferType => self.wafer_type == other.wafer_type,
            AnalysisField::WaferQuantity => self.wafer_quantity == other.wafer_quantity,
            AnalysisField::WaferCost => self.wafer_cost == other.wafer_cost,
            AnalysisField::DowntimeDuration => self.downtime_duration == other.downtime_duration,
            AnalysisField::DowntimeCostPerHour => {
                self.downtime_cost_per_hour == other.downtime_cost_per_hour
            }
            AnalysisField::DetectionRate => self.detection_rate == other.detection_rate,
        }
    }

    /// Committed value of `field` as it appears in an input box.
    ///
    /// Unset optional values render as an empty string.
    pub fn field_text(&self, field: AnalysisField) -> String {
        match field {
            AnalysisField::Name => self.name.clone(),
            AnalysisField::PumpType => self.pump_type.clone(),
            AnalysisField::PumpQuantity => self.pump_quantity.to_string(),
            AnalysisField::FailureRateMode => self.failure_rate_mode.to_string(),
            AnalysisField::FailureRatePercentage => plain_number(self.failure_rate_percentage),
            AnalysisField::AbsoluteFailureCount => self
                .absolute_failure_count
                .map(|c| c.to_string())
                .unwrap_or_default(),
            AnalysisField::WaferType => self.wafer_type.to_string(),
            AnalysisField::WaferQuantity => self.wafer_quantity.to_string(),
            AnalysisField::WaferCost => plain_number(self.wafer_cost),
            AnalysisField::DowntimeDuration => plain_number(self.downtime_duration),
            AnalysisField::DowntimeCostPerHour => plain_number(self.downtime_cost_per_hour),
            AnalysisField::DetectionRate => {
                self.detection_rate.map(plain_number).unwrap_or_default()
            }
        }
    }

    fn rederive_failure_percentage(&mut self) {
        if self.failure_rate_mode != FailureRateMode::Absolute {
            return;
        }
        if let Some(count) = self.absolute_failure_count {
            self.failure_rate_percentage = percentage_from_count(count, self.pump_quantity);
        }
    }
}

fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Partial update of an analysis; `None` leaves a field untouched.
///
/// Optional fields use a nested `Option` so they can be cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisUpdate {
    pub name: Option<String>,
    pub pump_type: Option<String>,
    pub pump_quantity: Option<u32>,
    pub failure_rate_mode: Option<FailureRateMode>,
    pub failure_rate_percentage: Option<f64>,
    pub absolute_failure_count: Option<Option<u32>>,
    pub wafer_type: Option<WaferType>,
    pub wafer_quantity: Option<u32>,
    pub wafer_cost: Option<f64>,
    pub downtime_duration: Option<f64>,
    pub downtime_cost_per_hour: Option<f64>,
    pub detection_rate: Option<Option<f64>>,
}

impl AnalysisUpdate {
    /// An update carrying every editable field of `source`.
    pub fn editable_fields_of(source: &Analysis) -> Self {
        Self {
            name: None,
            pump_type: Some(source.pump_type.clone()),
            pump_quantity: Some(source.pump_quantity),
            failure_rate_mode: Some(source.failure_rate_mode),
            failure_rate_percentage: Some(source.failure_rate_percentage),
            absolute_failure_count: Some(source.absolute_failure_count),
            wafer_type: Some(source.wafer_type),
            wafer_quantity: Some(source.wafer_quantity),
            wafer_cost: Some(source.wafer_cost),
            downtime_duration: Some(source.downtime_duration),
            downtime_cost_per_hour: Some(source.downtime_cost_per_hour),
            detection_rate: Some(source.detection_rate),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod aggregate_test;
