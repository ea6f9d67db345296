//! File-based Analysis Storage Adapter
//!
//! Stores the workspace as a single YAML file on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::analysis::Workspace;
use crate::ports::{AnalysisStorage, StorageError};

/// File-based storage for the workspace
#[derive(Debug, Clone)]
pub struct FileAnalysisStorage {
    path: PathBuf,
}

impl FileAnalysisStorage {
    /// Create a file storage writing to `path`
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileAnalysisStorage::new("./data/workspace.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the parent directory exists
    fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                fs::create_dir_all(dir).map_err(|e| StorageError::IoError(e.to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl AnalysisStorage for FileAnalysisStorage {
    fn load(&self) -> Result<Option<Workspace>, StorageError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No saved workspace");
            return Ok(None);
        }

        let yaml =
            fs::read_to_string(&self.path).map_err(|e| StorageError::IoError(e.to_string()))?;

        let workspace: Workspace = serde_yaml::from_str(&yaml)
            .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;

        debug!(
            path = %self.path.display(),
            analyses = workspace.analyses.len(),
            "Workspace loaded"
        );
        Ok(Some(workspace))
    }

    fn save(&self, workspace: &Workspace) -> Result<(), StorageError> {
        self.ensure_parent_dir()?;

        let yaml = serde_yaml::to_string(workspace)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        fs::write(&self.path, yaml).map_err(|e| StorageError::IoError(e.to_string()))?;

        debug!(
            path = %self.path.display(),
            analyses = workspace.analyses.len(),
            "Workspace saved"
        );
        Ok(())
    }
}
