//! Analysis Storage Port - Interface for persisting the workspace.
//!
//! The whole workspace (analyses, active pointer, global parameters) is the
//! unit of persistence. Derived metrics are never stored.

use crate::domain::analysis::Workspace;

/// Errors that can occur during workspace storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to serialize workspace: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize workspace: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting and loading the workspace
pub trait AnalysisStorage: Send + Sync {
    /// Load the saved workspace
    ///
    /// # Returns
    /// `None` if nothing has been saved yet
    ///
    /// # Errors
    /// Returns `StorageError` if the stored data cannot be read or parsed
    fn load(&self) -> Result<Option<Workspace>, StorageError>;

    /// Save the workspace, replacing any previous save
    ///
    /// # Errors
    /// Returns `StorageError` if save fails
    fn save(&self, workspace: &Workspace) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_displays_correctly() {
        let err = StorageError::IoError("disk full".to_string());
        assert_eq!(err.to_string(), "IO error: disk full");

        let err = StorageError::DeserializationFailed("bad yaml".to_string());
        assert!(err.to_string().contains("bad yaml"));
    }

    #[test]
    fn analysis_storage_is_object_safe() {
        fn _accepts_dyn(_storage: &dyn AnalysisStorage) {}
    }
}
