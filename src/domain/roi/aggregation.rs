//! Aggregation of ROI metrics across a collection of analyses.

use serde::Serialize;

use super::{AnalysisMetrics, RoiCalculator};
use crate::domain::analysis::{Analysis, GlobalParams};

/// Sums over the calculable analyses of a collection.
///
/// Non-calculable analyses are counted in `excluded_count` and never
/// contribute a term to any sum.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedMetrics {
    pub total_failure_cost: f64,
    pub total_service_cost: f64,
    pub total_savings: f64,
    pub total_pumps: u64,
    pub overall_roi: f64,
    pub process_count: usize,
    pub excluded_count: usize,
}

impl AggregatedMetrics {
    /// Aggregates `analyses` under the given global parameters.
    ///
    /// # Edge Cases
    /// - Empty list: all totals 0, both counts 0
    /// - No calculable analysis: totals 0, `overall_roi` 0
    pub fn from_analyses(analyses: &[Analysis], global: &GlobalParams) -> Self {
        let mut aggregate = Self::default();

        for analysis in analyses {
            match RoiCalculator::analysis_metrics(analysis, global) {
                Some(metrics) => aggregate.include(analysis, &metrics),
                None => aggregate.excluded_count += 1,
            }
        }

        aggregate.overall_roi = if aggregate.total_service_cost > 0.0 {
            aggregate.total_savings / aggregate.total_service_cost * 100.0
        } else {
            0.0
        };
        aggregate
    }

    fn include(&mut self, analysis: &Analysis, metrics: &AnalysisMetrics) {
        self.total_failure_cost += metrics.total_failure_cost;
        self.total_service_cost += metrics.service_cost;
        self.total_savings += metrics.savings;
        self.total_pumps += u64::from(analysis.pump_quantity);
        self.process_count += 1;
    }

    /// Total number of analyses seen, included or not.
    pub fn analysis_count(&self) -> usize {
        self.process_count + self.excluded_count
    }
}
