//! Scoped edit of a single field.
//!
//! The buffer is seeded from committed state and can be changed freely. Only
//! `commit` touches the store; `cancel` drops the pending text and yields
//! the last committed value for display.

use crate::application::handlers::analysis::{
    CommitFieldCommand, CommitFieldError, CommitFieldHandler, CommitFieldResult,
};
use crate::application::AnalysisStore;
use crate::domain::analysis::AnalysisField;
use crate::domain::foundation::AnalysisId;

/// Transient text of one field being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEditBuffer {
    analysis_id: AnalysisId,
    field: AnalysisField,
    committed: String,
    text: String,
}

impl FieldEditBuffer {
    /// Opens a buffer holding the committed value of `field`.
    pub fn open(
        store: &AnalysisStore,
        analysis_id: AnalysisId,
        field: AnalysisField,
    ) -> Result<Self, CommitFieldError> {
        let analysis = store
            .get(analysis_id)
            .ok_or(CommitFieldError::AnalysisNotFound(analysis_id))?;
        let committed = analysis.field_text(field);
        Ok(Self {
            analysis_id,
            field,
            text: committed.clone(),
            committed,
        })
    }

    pub fn analysis_id(&self) -> AnalysisId {
        self.analysis_id
    }

    pub fn field(&self) -> AnalysisField {
        self.field
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn committed_text(&self) -> &str {
        &self.committed
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// True when the pending text differs from the committed value.
    pub fn is_dirty(&self) -> bool {
        self.text != self.committed
    }

    /// Validates and commits the pending text.
    ///
    /// On success the buffer is reseeded from the stored value. On rejection
    /// the store is unchanged and the pending text is kept for correction.
    pub fn commit(&mut self, store: &mut AnalysisStore) -> Result<CommitFieldResult, CommitFieldError> {
        let cmd = CommitFieldCommand::new(self.analysis_id, self.field, self.text.clone());
        let result = CommitFieldHandler::new().handle(store, cmd)?;
        self.committed = result.analysis.field_text(self.field);
        self.text = self.committed.clone();
        Ok(result)
    }

    /// Drops pending text, keeping the buffer open.
    pub fn revert(&mut self) {
        self.text = self.committed.clone();
    }

    /// Closes the buffer without committing; returns the value to display.
    pub fn cancel(self) -> String {
        self.committed
    }
}
