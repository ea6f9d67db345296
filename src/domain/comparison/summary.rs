//! Side-by-side metrics of an original analysis and its what-if copy.

use serde::Serialize;

use crate::domain::roi::AnalysisMetrics;

/// Metric differences between the what-if and the original.
///
/// Deltas are only present when both sides are calculable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDelta {
    pub original: Option<AnalysisMetrics>,
    pub what_if: Option<AnalysisMetrics>,
    pub failure_cost_delta: Option<f64>,
    pub service_cost_delta: Option<f64>,
    pub savings_delta: Option<f64>,
    /// Difference in ROI percentage points.
    pub roi_delta: Option<f64>,
}

impl ScenarioDelta {
    pub fn between(original: Option<AnalysisMetrics>, what_if: Option<AnalysisMetrics>) -> Self {
        let both = original.zip(what_if);
        Self {
            original,
            what_if,
            failure_cost_delta: both.map(|(o, w)| w.total_failure_cost - o.total_failure_cost),
            service_cost_delta: both.map(|(o, w)| w.service_cost - o.service_cost),
            savings_delta: both.map(|(o, w)| w.savings - o.savings),
            roi_delta: both.map(|(o, w)| w.roi_percentage - o.roi_percentage),
        }
    }

    /// True when the what-if yields strictly more savings.
    pub fn what_if_is_better(&self) -> bool {
        self.savings_delta.map_or(false, |d| d > 0.0)
    }
}
