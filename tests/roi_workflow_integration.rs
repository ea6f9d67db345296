//! Integration tests for the ROI calculator.
//!
//! These tests drive the public API end to end:
//! 1. Analyses are created and filled through validated field commits
//! 2. Metrics and aggregates are read through the dashboard queries
//! 3. A what-if comparison is started, edited and resolved
//! 4. The workspace survives a save/load cycle through file storage

use std::sync::Arc;

use tempfile::TempDir;

use argos_roi::adapters::{FileAnalysisStorage, InMemoryAnalysisStorage};
use argos_roi::application::{
    enable_autosave, load_store, AnalysisStore, CommitFieldCommand, CommitFieldHandler,
    CommitGlobalParamCommand, CommitGlobalParamError, CommitGlobalParamHandler,
    ComparisonScreen, ComparisonWorkflow, CreateAnalysisCommand, CreateAnalysisHandler,
    GetDashboardHandler, GetDashboardQuery, GetGlobalViewHandler, GetGlobalViewQuery,
    GlobalParam, Route, StartWhatIfCommand, StartWhatIfHandler,
};
use argos_roi::domain::analysis::{AnalysisField, GlobalParams};
use argos_roi::domain::comparison::{ComparisonStatus, InputSection};
use argos_roi::domain::foundation::AnalysisId;
use argos_roi::domain::roi::RoiBand;
use argos_roi::ports::AnalysisStorage;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn create(store: &mut AnalysisStore, name: &str) -> AnalysisId {
    CreateAnalysisHandler::new()
        .handle(
            store,
            CreateAnalysisCommand {
                name: name.to_string(),
                activate: true,
            },
        )
        .unwrap()
        .analysis_id
}

fn fill(store: &mut AnalysisStore, id: AnalysisId, values: &[(AnalysisField, &str)]) {
    let handler = CommitFieldHandler::new();
    for (field, raw) in values {
        handler
            .handle(store, CommitFieldCommand::new(id, *field, *raw))
            .unwrap_or_else(|err| panic!("commit of {} failed: {}", field, err));
    }
}

/// Reference line: 10 pumps, 10% failures, 125 wafers at 8,000, 6 h at 500/h.
fn reference_line(store: &mut AnalysisStore, name: &str) -> AnalysisId {
    let id = create(store, name);
    fill(
        store,
        id,
        &[
            (AnalysisField::PumpType, "Dry pump"),
            (AnalysisField::PumpQuantity, "10"),
            (AnalysisField::FailureRatePercentage, "10"),
            (AnalysisField::WaferType, "batch"),
            (AnalysisField::WaferQuantity, "125"),
            (AnalysisField::WaferCost, "8000"),
            (AnalysisField::DowntimeDuration, "6"),
            (AnalysisField::DowntimeCostPerHour, "500"),
        ],
    );
    id
}

// =============================================================================
// Calculation through the public API
// =============================================================================

#[test]
fn reference_line_dashboard_figures() {
    let mut store = AnalysisStore::default();
    reference_line(&mut store, "Etch");

    let view = GetDashboardHandler::default().handle(&store, GetDashboardQuery);

    let row = &view.rows[0];
    let metrics = row.metrics.unwrap();
    assert_eq!(metrics.total_failure_cost, 1_003_000.0);
    assert_eq!(metrics.service_cost, 25_000.0);
    assert!((metrics.savings - 677_100.0).abs() < 1e-6);
    assert!((metrics.roi_percentage - 2708.4).abs() < 1e-6);
    assert_eq!(row.roi_text, "2,708.4%");
    assert_eq!(row.band, Some(RoiBand::Positive));
}

#[test]
fn zero_pumps_is_excluded_from_totals() {
    let mut store = AnalysisStore::default();
    let id = reference_line(&mut store, "Idle");
    fill(&mut store, id, &[(AnalysisField::PumpQuantity, "")]);

    let global = GetGlobalViewHandler::default().handle(&store, GetGlobalViewQuery);

    assert!(!store.get(id).unwrap().is_calculable());
    assert_eq!(global.totals.process_count, 0);
    assert_eq!(global.totals.excluded_count, 1);
    assert_eq!(global.totals.total_failure_cost, 0.0);
    assert_eq!(global.totals.total_savings, 0.0);
    assert_eq!(global.totals.overall_roi, 0.0);
}

#[test]
fn global_parameter_commit_moves_inheriting_analyses() {
    let mut store = AnalysisStore::default();
    let inheriting = reference_line(&mut store, "Inherit");
    let overriding = reference_line(&mut store, "Override");
    fill(&mut store, overriding, &[(AnalysisField::DetectionRate, "70")]);

    CommitGlobalParamHandler::new()
        .handle(
            &mut store,
            CommitGlobalParamCommand {
                param: GlobalParam::DetectionRate,
                raw: "90".to_string(),
            },
        )
        .unwrap();

    let view = GetDashboardHandler::default().handle(&store, GetDashboardQuery);
    let savings = |id: AnalysisId| {
        view.rows
            .iter()
            .find(|row| row.analysis_id == id)
            .and_then(|row| row.metrics)
            .unwrap()
            .savings
    };
    assert!(savings(inheriting) > savings(overriding));
}

#[test]
fn service_cost_validation_messages() {
    let mut store = AnalysisStore::default();
    let handler = CommitGlobalParamHandler::new();
    let commit = |store: &mut AnalysisStore, raw: &str| {
        handler.handle(
            store,
            CommitGlobalParamCommand {
                param: GlobalParam::ServiceCostPerPump,
                raw: raw.to_string(),
            },
        )
    };

    for raw in ["0", "-100"] {
        match commit(&mut store, raw) {
            Err(CommitGlobalParamError::Rejected { message, .. }) => {
                assert_eq!(message, "Service cost must be greater than 0")
            }
            other => panic!("unexpected result for {:?}: {:?}", raw, other),
        }
    }
    match commit(&mut store, "") {
        Err(CommitGlobalParamError::Rejected { message, .. }) => {
            assert_eq!(message, "Service cost is required")
        }
        other => panic!("unexpected result: {:?}", other),
    }

    let params = commit(&mut store, "2500.50").unwrap();
    assert_eq!(params.service_cost_per_pump, 2500.5);
}

// =============================================================================
// What-if comparison
// =============================================================================

#[test]
fn modified_flag_follows_snapshot() {
    let mut store = AnalysisStore::default();
    let original_id = reference_line(&mut store, "Litho");
    let started = StartWhatIfHandler::new()
        .handle(&mut store, StartWhatIfCommand { original_id })
        .unwrap();
    let mut workflow = ComparisonWorkflow::new(started.session);
    assert!(matches!(workflow.view(&store), ComparisonScreen::Show(_)));

    workflow.edit(&mut store, AnalysisField::PumpQuantity, "15").unwrap();
    let ComparisonScreen::Show(view) = workflow.view(&store) else {
        panic!("comparison should be visible");
    };
    assert!(view.sections.get(InputSection::Equipment));

    workflow.edit(&mut store, AnalysisField::PumpQuantity, "10").unwrap();
    let ComparisonScreen::Show(view) = workflow.view(&store) else {
        panic!("comparison should be visible");
    };
    assert!(!view.sections.get(InputSection::Equipment));
    assert!(!view.sections.any());
}

#[test]
fn replace_original_restores_count() {
    let mut store = AnalysisStore::default();
    reference_line(&mut store, "Other");
    let original_id = reference_line(&mut store, "Litho");
    let count_before = store.len();

    let started = StartWhatIfHandler::new()
        .handle(&mut store, StartWhatIfCommand { original_id })
        .unwrap();
    let what_if_id = started.what_if_id;
    let mut workflow = ComparisonWorkflow::new(started.session);
    workflow.view(&store);
    workflow.edit(&mut store, AnalysisField::WaferCost, "9500").unwrap();
    workflow.edit(&mut store, AnalysisField::DetectionRate, "85").unwrap();

    workflow.request_replace().unwrap();
    let route = workflow.confirm_replace(&mut store).unwrap();

    assert_eq!(route, Route::Dashboard);
    assert_eq!(workflow.status(), ComparisonStatus::Replaced);
    assert_eq!(store.len(), count_before);
    assert!(!store.contains(what_if_id));
    let original = store.get(original_id).unwrap();
    assert_eq!(original.name, "Litho");
    assert_eq!(original.wafer_cost, 9500.0);
    assert_eq!(original.detection_rate, Some(85.0));
}

#[test]
fn compare_route_with_unknown_ids_redirects() {
    let mut store = AnalysisStore::default();
    let original_id = reference_line(&mut store, "Litho");
    let path = format!("/compare/{}/{}", original_id, AnalysisId::new());

    assert_eq!(Route::navigate(&path, &store), Route::Dashboard);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn autosaved_workspace_reloads_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("workspace.yaml");
    let storage: Arc<dyn AnalysisStorage> = Arc::new(FileAnalysisStorage::new(&path));

    let mut store = load_store(storage.as_ref(), GlobalParams::default()).unwrap();
    enable_autosave(&mut store, Arc::clone(&storage));
    let id = reference_line(&mut store, "Persisted");
    let before = store.snapshot();

    let reloaded = load_store(&FileAnalysisStorage::new(&path), GlobalParams::default()).unwrap();

    assert_eq!(reloaded.workspace(), &before);
    assert_eq!(reloaded.active_analysis_id(), Some(id));
}

#[test]
fn fresh_storage_uses_configured_defaults() {
    let storage = InMemoryAnalysisStorage::new();
    let defaults = GlobalParams::try_new(85.0, 1800.0).unwrap();

    let store = load_store(&storage, defaults).unwrap();

    assert!(store.is_empty());
    assert_eq!(*store.global_params(), defaults);
}
