//! AnalysisStore - the single source of truth for analyses and global
//! parameters.
//!
//! Every mutation runs to completion and notifies subscribers before it
//! returns, so a caller can read post-mutation state in the same handler.

use std::fmt;

use tracing::debug;

use crate::domain::analysis::{
    Analysis, AnalysisUpdate, GlobalParams, GlobalParamsUpdate, Workspace,
};
use crate::domain::foundation::{AnalysisId, DomainError, ErrorCode};

/// Change notification delivered synchronously to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    AnalysisAdded(AnalysisId),
    AnalysisUpdated(AnalysisId),
    AnalysisDeleted(AnalysisId),
    ActiveChanged(Option<AnalysisId>),
    GlobalParamsUpdated,
    Restored,
}

type Subscriber = Box<dyn FnMut(&StoreEvent, &Workspace)>;

/// Explicit state container injected by reference into every handler.
pub struct AnalysisStore {
    workspace: Workspace,
    subscribers: Vec<Subscriber>,
}

impl AnalysisStore {
    /// Creates an empty store with the given global parameters.
    pub fn new(global_params: GlobalParams) -> Self {
        Self::from_workspace(Workspace::with_global_params(global_params))
    }

    /// Creates a store seeded with a previously saved workspace.
    pub fn from_workspace(workspace: Workspace) -> Self {
        Self {
            workspace,
            subscribers: Vec::new(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Reads
    // ───────────────────────────────────────────────────────────────

    pub fn analyses(&self) -> &[Analysis] {
        &self.workspace.analyses
    }

    pub fn len(&self) -> usize {
        self.workspace.analyses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workspace.analyses.is_empty()
    }

    pub fn get(&self, id: AnalysisId) -> Option<&Analysis> {
        self.workspace.find(id)
    }

    pub fn contains(&self, id: AnalysisId) -> bool {
        self.get(id).is_some()
    }

    pub fn active_analysis_id(&self) -> Option<AnalysisId> {
        self.workspace.active_analysis_id
    }

    pub fn active_analysis(&self) -> Option<&Analysis> {
        self.workspace.active()
    }

    pub fn global_params(&self) -> &GlobalParams {
        &self.workspace.global_params
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Structurally independent copy of the current state.
    pub fn snapshot(&self) -> Workspace {
        self.workspace.clone()
    }

    /// Registers a callback invoked after every mutation.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&StoreEvent, &Workspace) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    // ───────────────────────────────────────────────────────────────
    // Mutations
    // ───────────────────────────────────────────────────────────────

    /// Appends an analysis; the new length is visible on return.
    pub fn add_analysis(&mut self, analysis: Analysis) -> AnalysisId {
        let id = analysis.id;
        self.workspace.analyses.push(analysis);
        debug!(analysis_id = %id, count = self.len(), "Analysis added");
        self.notify(StoreEvent::AnalysisAdded(id));
        id
    }

    /// Merges `update` into the analysis and refreshes its `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `ANALYSIS_NOT_FOUND` if no analysis has this id.
    pub fn update_analysis(
        &mut self,
        id: AnalysisId,
        update: &AnalysisUpdate,
    ) -> Result<&Analysis, DomainError> {
        self.workspace
            .find_mut(id)
            .ok_or_else(|| not_found(id))?
            .apply(update);
        debug!(analysis_id = %id, "Analysis updated");
        self.notify(StoreEvent::AnalysisUpdated(id));
        self.get(id).ok_or_else(|| not_found(id))
    }

    /// Removes an analysis, clearing the active pointer if it pointed there.
    pub fn delete_analysis(&mut self, id: AnalysisId) -> Result<Analysis, DomainError> {
        let index = self
            .workspace
            .analyses
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| not_found(id))?;
        let removed = self.workspace.analyses.remove(index);
        debug!(analysis_id = %id, count = self.len(), "Analysis deleted");
        self.notify(StoreEvent::AnalysisDeleted(id));

        if self.workspace.active_analysis_id == Some(id) {
            self.workspace.active_analysis_id = None;
            self.notify(StoreEvent::ActiveChanged(None));
        }
        Ok(removed)
    }

    /// Points the active-analysis pointer at `id`, or clears it.
    pub fn set_active(&mut self, id: Option<AnalysisId>) -> Result<(), DomainError> {
        if let Some(id) = id {
            if !self.contains(id) {
                return Err(not_found(id));
            }
        }
        self.workspace.active_analysis_id = id;
        self.notify(StoreEvent::ActiveChanged(id));
        Ok(())
    }

    /// Applies a partial update of the global parameters.
    ///
    /// # Errors
    ///
    /// Returns a validation error and leaves the parameters unchanged if the
    /// merged values are out of range.
    pub fn update_global_params(
        &mut self,
        update: &GlobalParamsUpdate,
    ) -> Result<GlobalParams, DomainError> {
        let merged = self.workspace.global_params.merged(update);
        let validated = GlobalParams::try_new(merged.detection_rate, merged.service_cost_per_pump)?;
        self.workspace.global_params = validated;
        debug!(
            detection_rate = validated.detection_rate,
            service_cost_per_pump = validated.service_cost_per_pump,
            "Global parameters updated"
        );
        self.notify(StoreEvent::GlobalParamsUpdated);
        Ok(validated)
    }

    /// Replaces the whole state, e.g. after loading or a contained fault.
    pub fn restore(&mut self, workspace: Workspace) {
        self.workspace = workspace;
        debug!(count = self.len(), "Store restored");
        self.notify(StoreEvent::Restored);
    }

    fn notify(&mut self, event: StoreEvent) {
        for subscriber in self.subscribers.iter_mut() {
            subscriber(&event, &self.workspace);
        }
    }
}

fn not_found(id: AnalysisId) -> DomainError {
    DomainError::new(ErrorCode::AnalysisNotFound, format!("Analysis not found: {}", id))
        .with_detail("analysis_id", id.to_string())
}

impl Default for AnalysisStore {
    fn default() -> Self {
        Self::new(GlobalParams::default())
    }
}

impl fmt::Debug for AnalysisStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisStore")
            .field("workspace", &self.workspace)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
