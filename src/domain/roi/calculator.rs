//! ROI Calculator - failure cost, service cost, savings and ROI formulas.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{Analysis, GlobalParams};

/// ROI (in percent) from which an analysis is considered clearly positive.
pub const ROI_POSITIVE_THRESHOLD: f64 = 15.0;

/// Display band of an ROI percentage.
///
/// Each band is closed on its lower bound: exactly 0 is `Warning`, exactly
/// 15 is `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoiBand {
    Negative,
    Warning,
    Positive,
}

impl RoiBand {
    /// Returns the display label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            RoiBand::Negative => "Negative",
            RoiBand::Warning => "Marginal",
            RoiBand::Positive => "Positive",
        }
    }
}

/// Derived metrics of one calculable analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetrics {
    pub total_failure_cost: f64,
    pub service_cost: f64,
    pub savings: f64,
    pub roi_percentage: f64,
}

impl AnalysisMetrics {
    pub fn band(&self) -> RoiBand {
        RoiCalculator::band(self.roi_percentage)
    }
}

fn neutral(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Pure, total ROI formulas.
///
/// Every function returns 0 instead of a non-finite value; inputs are
/// expected to be validated upstream.
pub struct RoiCalculator;

impl RoiCalculator {
    /// Yearly cost of pump failures:
    /// `pumps * rate% * (wafer_cost * wafers + hours * cost_per_hour)`.
    pub fn total_failure_cost(
        pump_quantity: f64,
        failure_rate_pct: f64,
        wafer_cost: f64,
        wafers_per_batch: f64,
        downtime_hours: f64,
        downtime_cost_per_hour: f64,
    ) -> f64 {
        if !all_finite(&[
            pump_quantity,
            failure_rate_pct,
            wafer_cost,
            wafers_per_batch,
            downtime_hours,
            downtime_cost_per_hour,
        ]) {
            return 0.0;
        }
        let cost_per_failure = wafer_cost * wafers_per_batch + downtime_hours * downtime_cost_per_hour;
        neutral(pump_quantity * (failure_rate_pct / 100.0) * cost_per_failure)
    }

    /// Cost of monitoring every pump with the Argos service.
    pub fn argos_service_cost(pump_quantity: f64, service_cost_per_pump: f64) -> f64 {
        if !all_finite(&[pump_quantity, service_cost_per_pump]) {
            return 0.0;
        }
        neutral(pump_quantity * service_cost_per_pump)
    }

    /// Net benefit: avoided failure cost minus the service cost. May be negative.
    pub fn savings(total_failure_cost: f64, service_cost: f64, detection_rate_pct: f64) -> f64 {
        if !all_finite(&[total_failure_cost, service_cost, detection_rate_pct]) {
            return 0.0;
        }
        neutral(total_failure_cost * (detection_rate_pct / 100.0) - service_cost)
    }

    /// ROI in percent of the service cost; exactly 0 when the service is free.
    pub fn roi(savings: f64, service_cost: f64) -> f64 {
        if service_cost == 0.0 || !all_finite(&[savings, service_cost]) {
            return 0.0;
        }
        neutral(savings / service_cost * 100.0)
    }

    /// Classifies an ROI percentage for display.
    pub fn band(roi: f64) -> RoiBand {
        if roi < 0.0 {
            RoiBand::Negative
        } else if roi < ROI_POSITIVE_THRESHOLD {
            RoiBand::Warning
        } else {
            RoiBand::Positive
        }
    }

    /// Metrics of one analysis, or `None` when it is not calculable.
    pub fn analysis_metrics(analysis: &Analysis, global: &GlobalParams) -> Option<AnalysisMetrics> {
        if !analysis.is_calculable() {
            return None;
        }
        let pumps = f64::from(analysis.pump_quantity);
        let total_failure_cost = Self::total_failure_cost(
            pumps,
            analysis.failure_rate_percentage,
            analysis.wafer_cost,
            f64::from(analysis.effective_wafer_quantity()),
            analysis.downtime_duration,
            analysis.downtime_cost_per_hour,
        );
        let service_cost = Self::argos_service_cost(pumps, global.service_cost_per_pump);
        let savings = Self::savings(
            total_failure_cost,
            service_cost,
            analysis.effective_detection_rate(global),
        );
        Some(AnalysisMetrics {
            total_failure_cost,
            service_cost,
            savings,
            roi_percentage: Self::roi(savings, service_cost),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{AnalysisUpdate, WaferType};
    use proptest::prelude::*;

    fn reference_line() -> Analysis {
        let mut analysis = Analysis::new("Reference line").unwrap();
        analysis.apply(&AnalysisUpdate {
            pump_quantity: Some(10),
            failure_rate_percentage: Some(10.0),
            wafer_quantity: Some(125),
            wafer_cost: Some(8000.0),
            downtime_duration: Some(6.0),
            downtime_cost_per_hour: Some(500.0),
            ..Default::default()
        });
        analysis
    }

    #[test]
    fn reference_line_formulas() {
        assert_eq!(
            RoiCalculator::total_failure_cost(10.0, 10.0, 8000.0, 125.0, 6.0, 500.0),
            1_003_000.0
        );
        assert_eq!(RoiCalculator::argos_service_cost(10.0, 2500.0), 25_000.0);

        let savings = RoiCalculator::savings(1_003_000.0, 25_000.0, 70.0);
        assert!((savings - 677_100.0).abs() < 1e-6);

        let roi = RoiCalculator::roi(677_100.0, 25_000.0);
        assert!((roi - 2708.4).abs() < 1e-9);
    }

    #[test]
    fn reference_line_through_the_entity() {
        let metrics = RoiCalculator::analysis_metrics(&reference_line(), &GlobalParams::default()).unwrap();
        assert_eq!(metrics.total_failure_cost, 1_003_000.0);
        assert_eq!(metrics.service_cost, 25_000.0);
        assert!((metrics.roi_percentage - 2708.4).abs() < 1e-6);
        assert_eq!(metrics.band(), RoiBand::Positive);
    }

    #[test]
    fn mono_wafer_uses_single_wafer_in_cost() {
        let mut analysis = reference_line();
        analysis.wafer_type = WaferType::Mono;
        let metrics = RoiCalculator::analysis_metrics(&analysis, &GlobalParams::default()).unwrap();
        // 10 * 0.1 * (8000 * 1 + 6 * 500)
        assert_eq!(metrics.total_failure_cost, 11_000.0);
    }

    #[test]
    fn analysis_override_beats_global_detection_rate() {
        let mut analysis = reference_line();
        analysis.detection_rate = Some(100.0);
        let metrics = RoiCalculator::analysis_metrics(&analysis, &GlobalParams::default()).unwrap();
        assert_eq!(metrics.savings, 1_003_000.0 - 25_000.0);
    }

    #[test]
    fn incomplete_analysis_has_no_metrics() {
        let mut analysis = reference_line();
        analysis.pump_quantity = 0;
        assert!(RoiCalculator::analysis_metrics(&analysis, &GlobalParams::default()).is_none());
    }

    #[test]
    fn roi_with_free_service_is_zero() {
        assert_eq!(RoiCalculator::roi(1234.0, 0.0), 0.0);
        assert_eq!(RoiCalculator::roi(-1234.0, 0.0), 0.0);
        assert_eq!(RoiCalculator::roi(0.0, 0.0), 0.0);
    }

    #[test]
    fn non_finite_inputs_are_neutral() {
        assert_eq!(
            RoiCalculator::total_failure_cost(f64::NAN, 10.0, 1.0, 1.0, 1.0, 1.0),
            0.0
        );
        assert_eq!(RoiCalculator::argos_service_cost(10.0, f64::INFINITY), 0.0);
        assert_eq!(RoiCalculator::savings(f64::NAN, 1.0, 70.0), 0.0);
        assert_eq!(RoiCalculator::roi(f64::NAN, 10.0), 0.0);
        assert_eq!(RoiCalculator::roi(1.0, f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn savings_can_be_negative() {
        let savings = RoiCalculator::savings(10_000.0, 25_000.0, 70.0);
        assert!(savings < 0.0);
        assert_eq!(RoiCalculator::band(RoiCalculator::roi(savings, 25_000.0)), RoiBand::Negative);
    }

    #[test]
    fn band_boundaries_are_closed_below() {
        assert_eq!(RoiCalculator::band(-0.01), RoiBand::Negative);
        assert_eq!(RoiCalculator::band(0.0), RoiBand::Warning);
        assert_eq!(RoiCalculator::band(14.99), RoiBand::Warning);
        assert_eq!(RoiCalculator::band(15.0), RoiBand::Positive);
        assert_eq!(RoiCalculator::band(2708.4), RoiBand::Positive);
    }

    proptest! {
        #[test]
        fn failure_cost_is_monotone_in_each_argument(
            args in (0.0f64..1000.0, 0.0f64..100.0, 0.0f64..1_000_000.0, 0.0f64..1000.0, 0.0f64..10_000.0, 0.0f64..100_000.0),
            index in 0usize..6,
            bump in 0.0f64..1000.0,
        ) {
            let mut base = [args.0, args.1, args.2, args.3, args.4, args.5];
            let before = RoiCalculator::total_failure_cost(base[0], base[1], base[2], base[3], base[4], base[5]);
            base[index] += bump;
            let after = RoiCalculator::total_failure_cost(base[0], base[1], base[2], base[3], base[4], base[5]);
            prop_assert!(after >= before, "{} < {}", after, before);
        }

        #[test]
        fn roi_over_zero_service_cost_is_zero(savings in -1e12f64..1e12) {
            prop_assert_eq!(RoiCalculator::roi(savings, 0.0), 0.0);
        }

        #[test]
        fn roi_sign_matches_savings_sign(savings in -1e9f64..1e9, service in 1.0f64..1e7) {
            let roi = RoiCalculator::roi(savings, service);
            prop_assert_eq!(roi > 0.0, savings > 0.0);
            prop_assert_eq!(roi < 0.0, savings < 0.0);
        }
    }
}
