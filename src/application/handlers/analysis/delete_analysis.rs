//! DeleteAnalysisHandler - removes an analysis from the store.

use tracing::info;

use crate::application::AnalysisStore;
use crate::domain::analysis::Analysis;
use crate::domain::foundation::{AnalysisId, DomainError, ErrorCode};

/// Command to delete an analysis.
#[derive(Debug, Clone, Copy)]
pub struct DeleteAnalysisCommand {
    pub analysis_id: AnalysisId,
}

/// Error type for analysis deletion.
#[derive(Debug, Clone)]
pub enum DeleteAnalysisError {
    AnalysisNotFound(AnalysisId),
    Domain(DomainError),
}

impl std::fmt::Display for DeleteAnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteAnalysisError::AnalysisNotFound(id) => write!(f, "Analysis not found: {}", id),
            DeleteAnalysisError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DeleteAnalysisError {}

impl From<DomainError> for DeleteAnalysisError {
    fn from(err: DomainError) -> Self {
        DeleteAnalysisError::Domain(err)
    }
}

/// Handler for deleting analyses.
#[derive(Debug, Default)]
pub struct DeleteAnalysisHandler;

impl DeleteAnalysisHandler {
    pub fn new() -> Self {
        Self
    }

    /// Returns the removed analysis.
    pub fn handle(
        &self,
        store: &mut AnalysisStore,
        cmd: DeleteAnalysisCommand,
    ) -> Result<Analysis, DeleteAnalysisError> {
        let removed = store.delete_analysis(cmd.analysis_id).map_err(|err| {
            if err.code == ErrorCode::AnalysisNotFound {
                DeleteAnalysisError::AnalysisNotFound(cmd.analysis_id)
            } else {
                DeleteAnalysisError::Domain(err)
            }
        })?;
        info!(analysis_id = %cmd.analysis_id, remaining = store.len(), "Analysis deleted");
        Ok(removed)
    }
}
