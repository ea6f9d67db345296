//! GetDashboardHandler - Query handler for the per-analysis dashboard.
//!
//! Incomplete analyses still get a row; their metrics are absent and their
//! formatted figures show the "not available" sentinel.

use serde::Serialize;

use crate::application::AnalysisStore;
use crate::domain::analysis::Analysis;
use crate::domain::foundation::AnalysisId;
use crate::domain::formatting::NumberFormat;
use crate::domain::roi::{AggregatedMetrics, AnalysisMetrics, RoiBand, RoiCalculator};

/// One dashboard row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRow {
    pub analysis_id: AnalysisId,
    pub name: String,
    pub pump_type: String,
    pub pump_quantity: u32,
    pub is_active: bool,
    pub metrics: Option<AnalysisMetrics>,
    pub band: Option<RoiBand>,
    pub failure_cost_text: String,
    pub service_cost_text: String,
    pub savings_text: String,
    pub roi_text: String,
    /// Only complete analyses can seed a what-if comparison.
    pub can_start_what_if: bool,
}

/// The dashboard: one row per analysis plus the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub rows: Vec<DashboardRow>,
    pub totals: AggregatedMetrics,
    pub total_savings_text: String,
    pub overall_roi_text: String,
}

/// Query for the dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetDashboardQuery;

/// Handler for dashboard queries.
#[derive(Debug, Clone, Default)]
pub struct GetDashboardHandler {
    format: NumberFormat,
}

impl GetDashboardHandler {
    pub fn new(format: NumberFormat) -> Self {
        Self { format }
    }

    pub fn handle(&self, store: &AnalysisStore, _query: GetDashboardQuery) -> DashboardView {
        let global = store.global_params();
        let active = store.active_analysis_id();

        let rows = store
            .analyses()
            .iter()
            .map(|analysis| {
                let metrics = RoiCalculator::analysis_metrics(analysis, global);
                self.row(analysis, metrics, active == Some(analysis.id))
            })
            .collect();

        let totals = AggregatedMetrics::from_analyses(store.analyses(), global);

        DashboardView {
            rows,
            total_savings_text: self.format.currency(totals.total_savings),
            overall_roi_text: self.format.percentage(totals.overall_roi),
            totals,
        }
    }

    fn row(
        &self,
        analysis: &Analysis,
        metrics: Option<AnalysisMetrics>,
        is_active: bool,
    ) -> DashboardRow {
        let fmt = &self.format;
        DashboardRow {
            analysis_id: analysis.id,
            name: analysis.name.clone(),
            pump_type: analysis.pump_type.clone(),
            pump_quantity: analysis.pump_quantity,
            is_active,
            band: metrics.map(|m| m.band()),
            failure_cost_text: fmt.optional_currency(metrics.map(|m| m.total_failure_cost)),
            service_cost_text: fmt.optional_currency(metrics.map(|m| m.service_cost)),
            savings_text: fmt.optional_currency(metrics.map(|m| m.savings)),
            roi_text: fmt.optional_percentage(metrics.map(|m| m.roi_percentage)),
            can_start_what_if: metrics.is_some(),
            metrics,
        }
    }
}
