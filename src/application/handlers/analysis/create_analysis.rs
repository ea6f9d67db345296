//! CreateAnalysisHandler - adds a fresh analysis to the store.

use tracing::info;

use crate::application::AnalysisStore;
use crate::domain::analysis::Analysis;
use crate::domain::foundation::{AnalysisId, DomainError, ValidationError};

/// Command to create a new analysis with default values.
#[derive(Debug, Clone)]
pub struct CreateAnalysisCommand {
    pub name: String,
    /// Make the new analysis the active one.
    pub activate: bool,
}

/// Result of successful analysis creation.
#[derive(Debug, Clone)]
pub struct CreateAnalysisResult {
    pub analysis_id: AnalysisId,
    /// Store length observed right after the insertion.
    pub analysis_count: usize,
}

/// Error type for analysis creation.
#[derive(Debug, Clone)]
pub enum CreateAnalysisError {
    InvalidName(ValidationError),
    Domain(DomainError),
}

impl std::fmt::Display for CreateAnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateAnalysisError::InvalidName(err) => write!(f, "Invalid name: {}", err),
            CreateAnalysisError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CreateAnalysisError {}

impl From<DomainError> for CreateAnalysisError {
    fn from(err: DomainError) -> Self {
        CreateAnalysisError::Domain(err)
    }
}

/// Handler for creating analyses.
#[derive(Debug, Default)]
pub struct CreateAnalysisHandler;

impl CreateAnalysisHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        store: &mut AnalysisStore,
        cmd: CreateAnalysisCommand,
    ) -> Result<CreateAnalysisResult, CreateAnalysisError> {
        let analysis = Analysis::new(cmd.name).map_err(CreateAnalysisError::InvalidName)?;
        let analysis_id = store.add_analysis(analysis);

        if cmd.activate {
            store.set_active(Some(analysis_id))?;
        }

        let analysis_count = store.len();
        info!(analysis_id = %analysis_id, analysis_count, "Analysis created");

        Ok(CreateAnalysisResult {
            analysis_id,
            analysis_count,
        })
    }
}
