//! GetGlobalViewHandler - Query handler for the aggregated global view.

use serde::Serialize;

use crate::application::AnalysisStore;
use crate::domain::analysis::GlobalParams;
use crate::domain::formatting::NumberFormat;
use crate::domain::roi::{AggregatedMetrics, RoiBand, RoiCalculator};

/// Portfolio-level figures across every analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalView {
    pub global_params: GlobalParams,
    pub totals: AggregatedMetrics,
    /// Absent when no analysis is calculable.
    pub band: Option<RoiBand>,
    pub total_failure_cost_text: String,
    pub total_service_cost_text: String,
    pub total_savings_text: String,
    pub overall_roi_text: String,
}

/// Query for the global view.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetGlobalViewQuery;

/// Handler for global view queries.
#[derive(Debug, Clone, Default)]
pub struct GetGlobalViewHandler {
    format: NumberFormat,
}

impl GetGlobalViewHandler {
    pub fn new(format: NumberFormat) -> Self {
        Self { format }
    }

    pub fn handle(&self, store: &AnalysisStore, _query: GetGlobalViewQuery) -> GlobalView {
        let global_params = *store.global_params();
        let totals = AggregatedMetrics::from_analyses(store.analyses(), &global_params);
        let fmt = &self.format;

        GlobalView {
            global_params,
            band: (totals.process_count > 0).then(|| RoiCalculator::band(totals.overall_roi)),
            total_failure_cost_text: fmt.currency(totals.total_failure_cost),
            total_service_cost_text: fmt.currency(totals.total_service_cost),
            total_savings_text: fmt.currency(totals.total_savings),
            overall_roi_text: fmt.percentage(totals.overall_roi),
            totals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{Analysis, AnalysisUpdate};

    fn complete(name: &str, pumps: u32) -> Analysis {
        let mut a = Analysis::new(name).unwrap();
        a.pump_quantity = pumps;
        a.failure_rate_percentage = 10.0;
        a.wafer_quantity = 125;
        a.wafer_cost = 8000.0;
        a.downtime_duration = 6.0;
        a.downtime_cost_per_hour = 500.0;
        a
    }

    #[test]
    fn empty_store_has_zero_totals() {
        let store = AnalysisStore::default();
        let view = GetGlobalViewHandler::default().handle(&store, GetGlobalViewQuery);
        assert_eq!(view.totals, AggregatedMetrics::default());
        assert_eq!(view.band, None);
        assert_eq!(view.overall_roi_text, "0.0%");
    }

    #[test]
    fn totals_skip_incomplete_analyses() {
        let mut store = AnalysisStore::default();
        store.add_analysis(complete("A", 10));
        store.add_analysis(complete("B", 0));

        let view = GetGlobalViewHandler::default().handle(&store, GetGlobalViewQuery);

        assert_eq!(view.totals.process_count, 1);
        assert_eq!(view.totals.excluded_count, 1);
        assert_eq!(view.totals.total_pumps, 10);
        assert_eq!(view.total_service_cost_text, "$25,000");
        assert_eq!(view.band, Some(RoiBand::Positive));
    }

    #[test]
    fn detection_override_changes_only_its_analysis() {
        let mut store = AnalysisStore::default();
        let id = store.add_analysis(complete("A", 10));
        let inherited = GetGlobalViewHandler::default().handle(&store, GetGlobalViewQuery);

        let update = AnalysisUpdate {
            detection_rate: Some(Some(0.0)),
            ..Default::default()
        };
        store.update_analysis(id, &update).unwrap();
        let overridden = GetGlobalViewHandler::default().handle(&store, GetGlobalViewQuery);

        assert!(inherited.totals.total_savings > 0.0);
        assert_eq!(overridden.totals.total_savings, -25_000.0);
        assert_eq!(overridden.band, Some(RoiBand::Negative));
    }
}
