//! ComparisonWorkflow - drives one what-if session from view to resolution.
//!
//! The workflow owns the session; the store is passed in for each step. Every
//! resolution returns the route the caller should navigate to.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::application::handlers::analysis::{
    CommitFieldCommand, CommitFieldError, CommitFieldHandler, CommitFieldResult,
};
use crate::application::{AnalysisStore, Route};
use crate::domain::analysis::{Analysis, AnalysisField, AnalysisUpdate};
use crate::domain::comparison::{
    ComparisonSession, ComparisonStatus, ModifiedSections, ScenarioDelta,
};
use crate::domain::foundation::{AnalysisId, DomainError, ErrorCode};
use crate::domain::roi::RoiCalculator;

/// Everything the comparison screen shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonView {
    /// Live original as currently stored.
    pub original: Analysis,
    /// Baseline captured when the view first opened.
    pub snapshot: Analysis,
    pub what_if: Analysis,
    pub sections: ModifiedSections,
    pub modified_fields: Vec<AnalysisField>,
    /// Metrics of the what-if against the baseline.
    pub delta: ScenarioDelta,
    pub status: ComparisonStatus,
}

/// Outcome of opening the comparison screen.
#[derive(Debug, Clone)]
pub enum ComparisonScreen {
    Show(Box<ComparisonView>),
    Redirect(Route),
}

/// Error type for comparison steps.
#[derive(Debug, Clone)]
pub enum ComparisonError {
    /// Editing is only allowed while the view is open.
    NotEditing(ComparisonStatus),
    AnalysisNotFound(AnalysisId),
    Commit(CommitFieldError),
    /// Store failures and lifecycle violations (`InvalidStateTransition`).
    Domain(DomainError),
}

impl std::fmt::Display for ComparisonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComparisonError::NotEditing(status) => {
                write!(f, "Comparison is not editable while {:?}", status)
            }
            ComparisonError::AnalysisNotFound(id) => write!(f, "Analysis not found: {}", id),
            ComparisonError::Commit(err) => write!(f, "{}", err),
            ComparisonError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ComparisonError {}

impl From<DomainError> for ComparisonError {
    fn from(err: DomainError) -> Self {
        ComparisonError::Domain(err)
    }
}

impl From<CommitFieldError> for ComparisonError {
    fn from(err: CommitFieldError) -> Self {
        ComparisonError::Commit(err)
    }
}

/// One what-if comparison in progress.
#[derive(Debug, Clone)]
pub struct ComparisonWorkflow {
    session: ComparisonSession,
}

impl ComparisonWorkflow {
    /// Wraps a session created by `StartWhatIfHandler`.
    pub fn new(session: ComparisonSession) -> Self {
        Self { session }
    }

    /// Opens a comparison directly from a `/compare/:a/:b` route.
    pub fn open(original_id: AnalysisId, what_if_id: AnalysisId) -> Self {
        Self::new(ComparisonSession::new(original_id, what_if_id))
    }

    pub fn session(&self) -> &ComparisonSession {
        &self.session
    }

    pub fn status(&self) -> ComparisonStatus {
        self.session.status()
    }

    fn route(&self) -> Route {
        Route::Compare {
            original_id: self.session.original_id(),
            what_if_id: self.session.what_if_id(),
        }
    }

    /// Builds the comparison screen.
    ///
    /// The first successful read captures the baseline snapshot and moves
    /// the session into `Editing`. A missing analysis or a resolved session
    /// redirects to the dashboard.
    pub fn view(&mut self, store: &AnalysisStore) -> ComparisonScreen {
        let original_id = self.session.original_id();
        let what_if_id = self.session.what_if_id();

        let (original, what_if) = match (store.get(original_id), store.get(what_if_id)) {
            (Some(original), Some(what_if)) if !self.status().is_resolved() => (original, what_if),
            _ => {
                debug!(
                    original_id = %original_id,
                    what_if_id = %what_if_id,
                    status = ?self.status(),
                    "Comparison unavailable, redirecting to dashboard"
                );
                return ComparisonScreen::Redirect(Route::Dashboard);
            }
        };

        let snapshot = self.session.capture_snapshot(original).clone();
        if self.status() == ComparisonStatus::Initiated {
            if let Err(err) = self.session.transition(ComparisonStatus::Editing) {
                warn!(error = %err, what_if_id = %what_if_id, "Comparison could not start editing");
                return ComparisonScreen::Redirect(Route::Dashboard);
            }
            debug!(original_id = %original_id, what_if_id = %what_if_id, "Comparison editing");
        }

        let global = store.global_params();
        let delta = ScenarioDelta::between(
            RoiCalculator::analysis_metrics(&snapshot, global),
            RoiCalculator::analysis_metrics(what_if, global),
        );

        ComparisonScreen::Show(Box::new(ComparisonView {
            original: original.clone(),
            sections: self.session.modified_sections(what_if),
            modified_fields: self.session.modified_fields(what_if),
            what_if: what_if.clone(),
            snapshot,
            delta,
            status: self.status(),
        }))
    }

    /// Commits one field of the what-if copy. The original is never edited.
    pub fn edit(
        &mut self,
        store: &mut AnalysisStore,
        field: AnalysisField,
        raw: impl Into<String>,
    ) -> Result<CommitFieldResult, ComparisonError> {
        if self.status() != ComparisonStatus::Editing {
            return Err(ComparisonError::NotEditing(self.status()));
        }
        let cmd = CommitFieldCommand::new(self.session.what_if_id(), field, raw);
        Ok(CommitFieldHandler::new().handle(store, cmd)?)
    }

    /// Keeps both analyses unchanged.
    pub fn save_both(&mut self) -> Result<Route, ComparisonError> {
        self.move_to(ComparisonStatus::SavedBoth)?;
        info!(what_if_id = %self.session.what_if_id(), "Comparison resolved: saved both");
        Ok(Route::Dashboard)
    }

    /// Deletes the what-if copy.
    pub fn discard(&mut self, store: &mut AnalysisStore) -> Result<Route, ComparisonError> {
        self.ensure_can_move(ComparisonStatus::Discarded)?;
        let what_if_id = self.session.what_if_id();
        match store.delete_analysis(what_if_id) {
            Ok(_) => {}
            Err(err) if err.code == ErrorCode::AnalysisNotFound => {
                debug!(what_if_id = %what_if_id, "What-if copy already gone");
            }
            Err(err) => return Err(err.into()),
        }
        self.move_to(ComparisonStatus::Discarded)?;
        info!(what_if_id = %what_if_id, "Comparison resolved: discarded");
        Ok(Route::Dashboard)
    }

    /// Escape key: backs out of a pending replace confirmation, otherwise
    /// discards the what-if.
    pub fn escape(&mut self, store: &mut AnalysisStore) -> Result<Route, ComparisonError> {
        if self.status() == ComparisonStatus::ConfirmingReplace {
            self.cancel_replace()
        } else {
            self.discard(store)
        }
    }

    /// Shows the replace confirmation. Nothing is modified yet.
    pub fn request_replace(&mut self) -> Result<Route, ComparisonError> {
        self.move_to(ComparisonStatus::ConfirmingReplace)?;
        Ok(self.route())
    }

    /// Closes the confirmation and returns to editing unchanged.
    pub fn cancel_replace(&mut self) -> Result<Route, ComparisonError> {
        if self.status() != ComparisonStatus::ConfirmingReplace {
            let err = DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("No replace confirmation is open while {:?}", self.status()),
            );
            return Err(err.into());
        }
        self.move_to(ComparisonStatus::Editing)?;
        Ok(self.route())
    }

    /// Writes every editable field of the what-if onto the original, keeping
    /// the original's id, name and creation time, then deletes the what-if.
    ///
    /// Nothing is mutated if either analysis is missing.
    pub fn confirm_replace(&mut self, store: &mut AnalysisStore) -> Result<Route, ComparisonError> {
        self.ensure_can_move(ComparisonStatus::Replaced)?;
        let original_id = self.session.original_id();
        let what_if_id = self.session.what_if_id();

        if !store.contains(original_id) {
            return Err(ComparisonError::AnalysisNotFound(original_id));
        }
        let update = store
            .get(what_if_id)
            .map(AnalysisUpdate::editable_fields_of)
            .ok_or(ComparisonError::AnalysisNotFound(what_if_id))?;

        store.update_analysis(original_id, &update)?;
        store.delete_analysis(what_if_id)?;
        self.move_to(ComparisonStatus::Replaced)?;

        info!(
            original_id = %original_id,
            what_if_id = %what_if_id,
            "Comparison resolved: original replaced"
        );
        Ok(Route::Dashboard)
    }

    fn ensure_can_move(&self, target: ComparisonStatus) -> Result<(), ComparisonError> {
        Ok(self.session.ensure_can_transition(target)?)
    }

    fn move_to(&mut self, target: ComparisonStatus) -> Result<(), ComparisonError> {
        Ok(self.session.transition(target)?)
    }
}

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;
