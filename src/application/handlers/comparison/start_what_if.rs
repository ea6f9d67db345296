//! StartWhatIfHandler - duplicates a calculable analysis for comparison.

use tracing::info;

use crate::application::{AnalysisStore, Route};
use crate::domain::comparison::ComparisonSession;
use crate::domain::foundation::{AnalysisId, DomainError};

/// Command to start a what-if comparison from an existing analysis.
#[derive(Debug, Clone, Copy)]
pub struct StartWhatIfCommand {
    pub original_id: AnalysisId,
}

/// Result of a started comparison.
#[derive(Debug, Clone)]
pub struct StartWhatIfResult {
    pub what_if_id: AnalysisId,
    /// Session in `Initiated`; the snapshot is taken when the view opens.
    pub session: ComparisonSession,
    /// Where the caller should navigate next.
    pub route: Route,
}

/// Error type for starting a comparison.
#[derive(Debug, Clone)]
pub enum StartWhatIfError {
    AnalysisNotFound(AnalysisId),
    /// The source is missing inputs the ROI depends on.
    NotCalculable(AnalysisId),
    Domain(DomainError),
}

impl std::fmt::Display for StartWhatIfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartWhatIfError::AnalysisNotFound(id) => write!(f, "Analysis not found: {}", id),
            StartWhatIfError::NotCalculable(id) => {
                write!(f, "Analysis {} is incomplete and cannot be compared", id)
            }
            StartWhatIfError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for StartWhatIfError {}

impl From<DomainError> for StartWhatIfError {
    fn from(err: DomainError) -> Self {
        StartWhatIfError::Domain(err)
    }
}

/// Handler for starting what-if comparisons.
#[derive(Debug, Default)]
pub struct StartWhatIfHandler;

impl StartWhatIfHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        store: &mut AnalysisStore,
        cmd: StartWhatIfCommand,
    ) -> Result<StartWhatIfResult, StartWhatIfError> {
        let original = store
            .get(cmd.original_id)
            .ok_or(StartWhatIfError::AnalysisNotFound(cmd.original_id))?;
        if !original.is_calculable() {
            return Err(StartWhatIfError::NotCalculable(cmd.original_id));
        }

        let copy = original.what_if_copy();
        let what_if_id = store.add_analysis(copy);
        let session = ComparisonSession::new(cmd.original_id, what_if_id);

        info!(
            original_id = %cmd.original_id,
            what_if_id = %what_if_id,
            "What-if comparison started"
        );

        Ok(StartWhatIfResult {
            what_if_id,
            session,
            route: Route::Compare {
                original_id: cmd.original_id,
                what_if_id,
            },
        })
    }
}
