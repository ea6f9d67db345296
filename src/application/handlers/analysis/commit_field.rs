//! CommitFieldHandler - validates one raw input and commits it to an analysis.
//!
//! A rejected value never reaches the store. A soft warning (e.g. an empty
//! downtime field) is committed and returned alongside the updated analysis
//! so the caller can still surface it.

use std::str::FromStr;

use tracing::debug;

use crate::application::AnalysisStore;
use crate::domain::analysis::{Analysis, AnalysisField, AnalysisUpdate, FailureRateMode, WaferType};
use crate::domain::foundation::{AnalysisId, DomainError};
use crate::domain::validation::{
    validate_detection_rate_input, validate_downtime_cost_per_hour, validate_downtime_duration,
    validate_failure_count, validate_failure_rate_percentage, validate_name,
    validate_pump_quantity, validate_wafer_cost, validate_wafer_quantity, FieldValidation,
    MSG_FAILURE_COUNT_EXCEEDS_PUMPS, MSG_PUMP_QUANTITY_BELOW_FAILURES, MSG_WHOLE_NUMBER,
};

/// Command to commit the raw text of one field.
#[derive(Debug, Clone)]
pub struct CommitFieldCommand {
    pub analysis_id: AnalysisId,
    pub field: AnalysisField,
    pub raw: String,
}

impl CommitFieldCommand {
    pub fn new(analysis_id: AnalysisId, field: AnalysisField, raw: impl Into<String>) -> Self {
        Self {
            analysis_id,
            field,
            raw: raw.into(),
        }
    }
}

/// Result of a successful commit.
#[derive(Debug, Clone)]
pub struct CommitFieldResult {
    pub analysis_id: AnalysisId,
    pub field: AnalysisField,
    /// Soft warning attached to the committed value, if any.
    pub warning: Option<String>,
    /// The analysis as stored after the commit.
    pub analysis: Analysis,
}

/// Error type for field commits.
#[derive(Debug, Clone)]
pub enum CommitFieldError {
    AnalysisNotFound(AnalysisId),
    /// Hard validation failure; the store is unchanged.
    Rejected {
        field: AnalysisField,
        message: String,
    },
    Domain(DomainError),
}

impl CommitFieldError {
    /// The user-facing message of a rejected value.
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            CommitFieldError::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl std::fmt::Display for CommitFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommitFieldError::AnalysisNotFound(id) => write!(f, "Analysis not found: {}", id),
            CommitFieldError::Rejected { field, message } => {
                write!(f, "Invalid value for {}: {}", field, message)
            }
            CommitFieldError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommitFieldError {}

impl From<DomainError> for CommitFieldError {
    fn from(err: DomainError) -> Self {
        CommitFieldError::Domain(err)
    }
}

/// Handler for validated field commits.
#[derive(Debug, Default)]
pub struct CommitFieldHandler;

impl CommitFieldHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        store: &mut AnalysisStore,
        cmd: CommitFieldCommand,
    ) -> Result<CommitFieldResult, CommitFieldError> {
        let Some(current) = store.get(cmd.analysis_id) else {
            return Err(CommitFieldError::AnalysisNotFound(cmd.analysis_id));
        };

        let (update, warning) = match field_update(current, cmd.field, &cmd.raw) {
            Ok(parsed) => parsed,
            Err(message) => {
                debug!(
                    analysis_id = %cmd.analysis_id,
                    field = %cmd.field,
                    reason = %message,
                    "Field commit rejected"
                );
                return Err(CommitFieldError::Rejected {
                    field: cmd.field,
                    message,
                });
            }
        };

        let analysis = store.update_analysis(cmd.analysis_id, &update)?.clone();

        Ok(CommitFieldResult {
            analysis_id: cmd.analysis_id,
            field: cmd.field,
            warning,
            analysis,
        })
    }
}

/// Turns validated raw text into a partial update.
///
/// Empty numeric inputs commit the field's unset value: 0 for counts and
/// costs, 1 for the wafer quantity, and "inherit" for the detection rate.
///
/// A failure count may not exceed the pump quantity. Zero pumps lifts the
/// limit so the count can be entered first.
fn field_update(
    current: &Analysis,
    field: AnalysisField,
    raw: &str,
) -> Result<(AnalysisUpdate, Option<String>), String> {
    let mut update = AnalysisUpdate::default();
    let mut warning = None;

    match field {
        AnalysisField::Name => {
            if let Some(message) = validate_name(raw) {
                return Err(message.to_string());
            }
            update.name = Some(raw.trim().to_string());
        }
        AnalysisField::PumpType => {
            update.pump_type = Some(raw.trim().to_string());
        }
        AnalysisField::PumpQuantity => {
            let value = checked(validate_pump_quantity(raw), &mut warning)?;
            let pumps = value.map(to_count).transpose()?.unwrap_or(0);
            if current.failure_rate_mode == FailureRateMode::Absolute
                && current.absolute_failure_count.is_some_and(|count| pumps > 0 && count > pumps)
            {
                return Err(MSG_PUMP_QUANTITY_BELOW_FAILURES.to_string());
            }
            update.pump_quantity = Some(pumps);
        }
        AnalysisField::FailureRateMode => {
            let mode = FailureRateMode::from_str(raw.trim()).map_err(|e| e.to_string())?;
            update.failure_rate_mode = Some(mode);
        }
        AnalysisField::FailureRatePercentage => {
            let value = checked(validate_failure_rate_percentage(raw), &mut warning)?;
            update.failure_rate_percentage = Some(value.unwrap_or(0.0));
        }
        AnalysisField::AbsoluteFailureCount => {
            let value = checked(validate_failure_count(raw), &mut warning)?;
            let count = value.map(to_count).transpose()?;
            let pumps = current.pump_quantity;
            if count.is_some_and(|count| pumps > 0 && count > pumps) {
                return Err(MSG_FAILURE_COUNT_EXCEEDS_PUMPS.to_string());
            }
            update.absolute_failure_count = Some(count);
        }
        AnalysisField::WaferType => {
            let wafer_type = WaferType::from_str(raw.trim()).map_err(|e| e.to_string())?;
            update.wafer_type = Some(wafer_type);
        }
        AnalysisField::WaferQuantity => {
            let value = checked(validate_wafer_quantity(raw), &mut warning)?;
            update.wafer_quantity = Some(value.map(to_count).transpose()?.unwrap_or(1));
        }
        AnalysisField::WaferCost => {
            let value = checked(validate_wafer_cost(raw), &mut warning)?;
            update.wafer_cost = Some(value.unwrap_or(0.0));
        }
        AnalysisField::DowntimeDuration => {
            let value = checked(validate_downtime_duration(raw), &mut warning)?;
            update.downtime_duration = Some(value.unwrap_or(0.0));
        }
        AnalysisField::DowntimeCostPerHour => {
            let value = checked(validate_downtime_cost_per_hour(raw), &mut warning)?;
            update.downtime_cost_per_hour = Some(value.unwrap_or(0.0));
        }
        AnalysisField::DetectionRate => {
            let value = checked(validate_detection_rate_input(raw), &mut warning)?;
            update.detection_rate = Some(value);
        }
    }

    Ok((update, warning))
}

/// Splits a validation into its value, recording any soft warning.
fn checked(validation: FieldValidation, warning: &mut Option<String>) -> Result<Option<f64>, String> {
    if let Some(message) = validation.error() {
        return Err(message.to_string());
    }
    *warning = validation.warning_message().map(str::to_string);
    Ok(validation.value())
}

fn to_count(value: f64) -> Result<u32, String> {
    if value.fract() == 0.0 && value >= 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(MSG_WHOLE_NUMBER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::{
        MSG_DOWNTIME_REQUIRED, MSG_FAILURE_COUNT_INTEGER, MSG_PUMP_QUANTITY_MAX,
        MSG_WAFER_COST_MAX,
    };

    fn absolute_with_pumps(pumps: &str) -> (AnalysisStore, AnalysisId) {
        let (mut store, id) = store_with_analysis();
        commit(&mut store, id, AnalysisField::PumpQuantity, pumps).unwrap();
        commit(&mut store, id, AnalysisField::FailureRateMode, "absolute").unwrap();
        (store, id)
    }

    fn store_with_analysis() -> (AnalysisStore, AnalysisId) {
        let mut store = AnalysisStore::default();
        let id = store.add_analysis(Analysis::new("CVD").unwrap());
        (store, id)
    }

    fn commit(
        store: &mut AnalysisStore,
        id: AnalysisId,
        field: AnalysisField,
        raw: &str,
    ) -> Result<CommitFieldResult, CommitFieldError> {
        CommitFieldHandler::new().handle(store, CommitFieldCommand::new(id, field, raw))
    }

    #[test]
    fn accepted_value_reaches_store() {
        let (mut store, id) = store_with_analysis();
        let result = commit(&mut store, id, AnalysisField::PumpQuantity, " 12 ").unwrap();
        assert_eq!(result.analysis.pump_quantity, 12);
        assert_eq!(store.get(id).unwrap().pump_quantity, 12);
        assert!(result.warning.is_none());
    }

    #[test]
    fn rejected_value_leaves_store_unchanged() {
        let (mut store, id) = store_with_analysis();
        commit(&mut store, id, AnalysisField::PumpQuantity, "10").unwrap();
        let before = store.get(id).unwrap().clone();

        let err = commit(&mut store, id, AnalysisField::PumpQuantity, "1001").unwrap_err();

        assert_eq!(err.rejection_message(), Some(MSG_PUMP_QUANTITY_MAX));
        assert_eq!(store.get(id).unwrap(), &before);
    }

    #[test]
    fn warning_does_not_block_commit() {
        let (mut store, id) = store_with_analysis();
        commit(&mut store, id, AnalysisField::DowntimeDuration, "6").unwrap();

        let result = commit(&mut store, id, AnalysisField::DowntimeDuration, "").unwrap();

        assert_eq!(result.warning.as_deref(), Some(MSG_DOWNTIME_REQUIRED));
        assert_eq!(store.get(id).unwrap().downtime_duration, 0.0);
    }

    #[test]
    fn empty_inputs_commit_unset_values() {
        let (mut store, id) = store_with_analysis();
        commit(&mut store, id, AnalysisField::WaferQuantity, "25").unwrap();
        commit(&mut store, id, AnalysisField::DetectionRate, "85").unwrap();

        commit(&mut store, id, AnalysisField::WaferQuantity, "").unwrap();
        commit(&mut store, id, AnalysisField::DetectionRate, "").unwrap();

        let analysis = store.get(id).unwrap();
        assert_eq!(analysis.wafer_quantity, 1);
        assert_eq!(analysis.detection_rate, None);
    }

    #[test]
    fn wafer_cost_cap_is_enforced() {
        let (mut store, id) = store_with_analysis();
        let err = commit(&mut store, id, AnalysisField::WaferCost, "1000001").unwrap_err();
        assert_eq!(err.rejection_message(), Some(MSG_WAFER_COST_MAX));
    }

    #[test]
    fn absolute_mode_recomputes_percentage() {
        let (mut store, id) = store_with_analysis();
        commit(&mut store, id, AnalysisField::PumpQuantity, "8").unwrap();
        commit(&mut store, id, AnalysisField::FailureRateMode, "absolute").unwrap();

        let result = commit(&mut store, id, AnalysisField::AbsoluteFailureCount, "1").unwrap();
        assert_eq!(result.analysis.failure_rate_percentage, 12.5);

        let result = commit(&mut store, id, AnalysisField::PumpQuantity, "3").unwrap();
        assert_eq!(result.analysis.failure_rate_percentage, 33.3);
    }

    #[test]
    fn failure_count_above_pump_quantity_is_rejected() {
        let (mut store, id) = absolute_with_pumps("10");
        let before = store.get(id).unwrap().clone();

        let err = commit(&mut store, id, AnalysisField::AbsoluteFailureCount, "25").unwrap_err();

        assert_eq!(err.rejection_message(), Some(MSG_FAILURE_COUNT_EXCEEDS_PUMPS));
        assert_eq!(store.get(id).unwrap(), &before);

        let result = commit(&mut store, id, AnalysisField::AbsoluteFailureCount, "10").unwrap();
        assert_eq!(result.analysis.failure_rate_percentage, 100.0);
    }

    #[test]
    fn pump_quantity_below_failure_count_is_rejected() {
        let (mut store, id) = absolute_with_pumps("10");
        commit(&mut store, id, AnalysisField::AbsoluteFailureCount, "4").unwrap();

        let err = commit(&mut store, id, AnalysisField::PumpQuantity, "2").unwrap_err();

        assert_eq!(err.rejection_message(), Some(MSG_PUMP_QUANTITY_BELOW_FAILURES));
        let analysis = store.get(id).unwrap();
        assert_eq!(analysis.pump_quantity, 10);
        assert_eq!(analysis.failure_rate_percentage, 40.0);

        let result = commit(&mut store, id, AnalysisField::PumpQuantity, "4").unwrap();
        assert_eq!(result.analysis.failure_rate_percentage, 100.0);
    }

    #[test]
    fn count_entered_before_pumps_is_accepted() {
        let (mut store, id) = absolute_with_pumps("");
        commit(&mut store, id, AnalysisField::AbsoluteFailureCount, "3").unwrap();
        assert_eq!(store.get(id).unwrap().failure_rate_percentage, 0.0);

        let result = commit(&mut store, id, AnalysisField::PumpQuantity, "12").unwrap();
        assert_eq!(result.analysis.failure_rate_percentage, 25.0);
    }

    #[test]
    fn stale_count_is_capped_on_switch_to_absolute() {
        let (mut store, id) = store_with_analysis();
        commit(&mut store, id, AnalysisField::PumpQuantity, "10").unwrap();
        commit(&mut store, id, AnalysisField::AbsoluteFailureCount, "8").unwrap();
        commit(&mut store, id, AnalysisField::PumpQuantity, "5").unwrap();

        let result = commit(&mut store, id, AnalysisField::FailureRateMode, "absolute").unwrap();

        assert_eq!(result.analysis.failure_rate_percentage, 100.0);
    }

    #[test]
    fn percentage_mode_ignores_count() {
        let (mut store, id) = store_with_analysis();
        commit(&mut store, id, AnalysisField::PumpQuantity, "10").unwrap();
        commit(&mut store, id, AnalysisField::FailureRatePercentage, "10").unwrap();

        commit(&mut store, id, AnalysisField::AbsoluteFailureCount, "5").unwrap();

        assert_eq!(store.get(id).unwrap().failure_rate_percentage, 10.0);
    }

    #[test]
    fn decimal_failure_count_is_rejected() {
        let (mut store, id) = store_with_analysis();
        let err = commit(&mut store, id, AnalysisField::AbsoluteFailureCount, "2.0").unwrap_err();
        assert_eq!(err.rejection_message(), Some(MSG_FAILURE_COUNT_INTEGER));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let (mut store, id) = store_with_analysis();
        let err = commit(&mut store, id, AnalysisField::WaferType, "triple").unwrap_err();
        assert!(matches!(err, CommitFieldError::Rejected { field: AnalysisField::WaferType, .. }));
    }

    #[test]
    fn name_is_trimmed_and_required() {
        let (mut store, id) = store_with_analysis();
        let result = commit(&mut store, id, AnalysisField::Name, "  Etch line 2 ").unwrap();
        assert_eq!(result.analysis.name, "Etch line 2");

        let err = commit(&mut store, id, AnalysisField::Name, "   ").unwrap_err();
        assert!(err.rejection_message().is_some());
        assert_eq!(store.get(id).unwrap().name, "Etch line 2");
    }

    #[test]
    fn unknown_analysis_is_reported() {
        let mut store = AnalysisStore::default();
        let id = AnalysisId::new();
        let err = commit(&mut store, id, AnalysisField::WaferCost, "10").unwrap_err();
        assert!(matches!(err, CommitFieldError::AnalysisNotFound(got) if got == id));
    }
}
