//! Per-field validators turning raw text into a [`FieldValidation`].
//!
//! Validators never panic and never touch the store; the caller decides what
//! to commit based on the returned tag.

use super::FieldValidation;

/// Upper bound for pump and wafer quantities.
pub const MAX_QUANTITY: i64 = 1000;

/// Upper bound for the cost of a single wafer.
pub const MAX_WAFER_COST: f64 = 1_000_000.0;

pub const MSG_WHOLE_NUMBER: &str = "Please enter a whole number";
pub const MSG_INVALID_NUMBER: &str = "Please enter a valid number";
pub const MSG_PUMP_QUANTITY_POSITIVE: &str = "Pump quantity must be greater than 0";
pub const MSG_PUMP_QUANTITY_MAX: &str = "Maximum 1000 pumps allowed";
pub const MSG_WAFER_QUANTITY_POSITIVE: &str = "Wafer quantity must be greater than 0";
pub const MSG_WAFER_QUANTITY_MAX: &str = "Maximum 1000 wafers allowed";
pub const MSG_WAFER_COST_POSITIVE: &str = "Wafer cost must be greater than 0";
pub const MSG_WAFER_COST_MAX: &str = "Maximum wafer cost is 1,000,000";
pub const MSG_DOWNTIME_REQUIRED: &str = "Required for ROI calculation";
pub const MSG_NEGATIVE: &str = "Value cannot be negative";
pub const MSG_FAILURE_RATE_NEGATIVE: &str = "Failure rate cannot be negative";
pub const MSG_FAILURE_RATE_RANGE: &str = "Failure rate must be between 0 and 100";
pub const MSG_FAILURE_COUNT_INTEGER: &str = "Failure count must be a whole number";
pub const MSG_FAILURE_COUNT_NEGATIVE: &str = "Failure count cannot be negative";
pub const MSG_FAILURE_COUNT_EXCEEDS_PUMPS: &str = "Failure count cannot exceed pump quantity";
pub const MSG_PUMP_QUANTITY_BELOW_FAILURES: &str =
    "Pump quantity cannot be less than the failure count";
pub const MSG_DETECTION_RATE_RANGE: &str = "Detection rate must be between 0 and 100";
pub const MSG_DETECTION_RATE_REQUIRED: &str = "Detection rate is required";
pub const MSG_SERVICE_COST_REQUIRED: &str = "Service cost is required";
pub const MSG_SERVICE_COST_INVALID: &str = "Service cost must be a valid number";
pub const MSG_SERVICE_COST_POSITIVE: &str = "Service cost must be greater than 0";
pub const MSG_NAME_REQUIRED: &str = "Name cannot be empty";

/// Parses an integer whose canonical rendering equals the trimmed input.
///
/// Rejects "1.5", "12abc", "+3" and "007".
fn parse_exact_integer(trimmed: &str) -> Option<i64> {
    let value = trimmed.parse::<i64>().ok()?;
    (value.to_string() == trimmed).then_some(value)
}

/// Parses a finite float; "inf" and "NaN" count as unparsable.
fn parse_finite(trimmed: &str) -> Option<f64> {
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn validate_bounded_quantity(raw: &str, positive_msg: &str, max_msg: &str) -> FieldValidation {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldValidation::Empty;
    }
    match parse_exact_integer(trimmed) {
        None => FieldValidation::rejected(MSG_WHOLE_NUMBER),
        Some(v) if v <= 0 => FieldValidation::rejected(positive_msg),
        Some(v) if v > MAX_QUANTITY => FieldValidation::rejected(max_msg),
        Some(v) => FieldValidation::accepted(v as f64),
    }
}

/// Number of pumps of an analysis: empty, or an integer in 1..=1000.
pub fn validate_pump_quantity(raw: &str) -> FieldValidation {
    validate_bounded_quantity(raw, MSG_PUMP_QUANTITY_POSITIVE, MSG_PUMP_QUANTITY_MAX)
}

/// Wafers per batch: empty, or an integer in 1..=1000.
pub fn validate_wafer_quantity(raw: &str) -> FieldValidation {
    validate_bounded_quantity(raw, MSG_WAFER_QUANTITY_POSITIVE, MSG_WAFER_QUANTITY_MAX)
}

/// Checks a numeric detection rate; returns the error message if out of range.
pub fn validate_detection_rate(value: f64) -> Option<&'static str> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        None
    } else {
        Some(MSG_DETECTION_RATE_RANGE)
    }
}

/// Text form of the detection rate override: empty means "inherit global".
pub fn validate_detection_rate_input(raw: &str) -> FieldValidation {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldValidation::Empty;
    }
    match parse_finite(trimmed) {
        None => FieldValidation::rejected(MSG_INVALID_NUMBER),
        Some(v) => match validate_detection_rate(v) {
            Some(message) => FieldValidation::rejected(message),
            None => FieldValidation::accepted(v),
        },
    }
}

/// Global detection rate: like the override, but it cannot be left empty.
pub fn validate_global_detection_rate(raw: &str) -> FieldValidation {
    match validate_detection_rate_input(raw) {
        FieldValidation::Empty => FieldValidation::rejected(MSG_DETECTION_RATE_REQUIRED),
        other => other,
    }
}

/// Cost of one wafer: empty, or a number in (0, 1,000,000].
pub fn validate_wafer_cost(raw: &str) -> FieldValidation {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldValidation::Empty;
    }
    match parse_finite(trimmed) {
        None => FieldValidation::rejected(MSG_INVALID_NUMBER),
        Some(v) if v <= 0.0 => FieldValidation::rejected(MSG_WAFER_COST_POSITIVE),
        Some(v) if v > MAX_WAFER_COST => FieldValidation::rejected(MSG_WAFER_COST_MAX),
        Some(v) => FieldValidation::accepted(v),
    }
}

fn validate_downtime_value(raw: &str) -> FieldValidation {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldValidation::warning(None, MSG_DOWNTIME_REQUIRED);
    }
    match parse_finite(trimmed) {
        None => FieldValidation::rejected(MSG_INVALID_NUMBER),
        Some(v) if v < 0.0 => FieldValidation::rejected(MSG_NEGATIVE),
        Some(v) => FieldValidation::accepted(v),
    }
}

/// Hours of downtime per failure. Empty is a soft warning, not an error.
pub fn validate_downtime_duration(raw: &str) -> FieldValidation {
    validate_downtime_value(raw)
}

/// Cost of one downtime hour. Empty is a soft warning, not an error.
pub fn validate_downtime_cost_per_hour(raw: &str) -> FieldValidation {
    validate_downtime_value(raw)
}

/// Failure rate in percent: empty, or a number in [0, 100].
pub fn validate_failure_rate_percentage(raw: &str) -> FieldValidation {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldValidation::Empty;
    }
    match parse_finite(trimmed) {
        None => FieldValidation::rejected(MSG_INVALID_NUMBER),
        Some(v) if v < 0.0 => FieldValidation::rejected(MSG_FAILURE_RATE_NEGATIVE),
        Some(v) if v > 100.0 => FieldValidation::rejected(MSG_FAILURE_RATE_RANGE),
        Some(v) => FieldValidation::accepted(v),
    }
}

/// Absolute number of failing pumps: empty, or a non-negative integer.
pub fn validate_failure_count(raw: &str) -> FieldValidation {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldValidation::Empty;
    }
    if trimmed.contains('.') {
        return FieldValidation::rejected(MSG_FAILURE_COUNT_INTEGER);
    }
    match parse_exact_integer(trimmed) {
        None => FieldValidation::rejected(MSG_FAILURE_COUNT_INTEGER),
        Some(v) if v < 0 => FieldValidation::rejected(MSG_FAILURE_COUNT_NEGATIVE),
        Some(v) => FieldValidation::accepted(v as f64),
    }
}

/// Service cost per pump: required and strictly positive.
pub fn validate_service_cost(raw: &str) -> FieldValidation {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldValidation::rejected(MSG_SERVICE_COST_REQUIRED);
    }
    match parse_finite(trimmed) {
        None => FieldValidation::rejected(MSG_SERVICE_COST_INVALID),
        Some(v) if v <= 0.0 => FieldValidation::rejected(MSG_SERVICE_COST_POSITIVE),
        Some(v) => FieldValidation::accepted(v),
    }
}

/// Analysis name: must not be blank once trimmed.
pub fn validate_name(raw: &str) -> Option<&'static str> {
    raw.trim().is_empty().then_some(MSG_NAME_REQUIRED)
}

/// Failure percentage implied by `count` failing pumps out of `pump_quantity`.
///
/// Rounded to one decimal and capped at 100; zero pumps yields 0 rather
/// than a division error.
pub fn percentage_from_count(count: u32, pump_quantity: u32) -> f64 {
    if pump_quantity == 0 {
        return 0.0;
    }
    let pct = f64::from(count) / f64::from(pump_quantity) * 100.0;
    ((pct * 10.0).round() / 10.0).min(100.0)
}

#[cfg(test)]
#[path = "validators_test.rs"]
mod validators_test;
