//! In-Memory Analysis Storage Adapter
//!
//! Keeps the last saved workspace in memory.
//! Useful for testing and development.

use std::sync::{Arc, RwLock};

use crate::domain::analysis::Workspace;
use crate::ports::{AnalysisStorage, StorageError};

/// In-memory storage for the workspace
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnalysisStorage {
    saved: Arc<RwLock<Option<Workspace>>>,
    save_count: Arc<RwLock<usize>>,
}

impl InMemoryAnalysisStorage {
    /// Create an empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that already holds `workspace`
    pub fn with_workspace(workspace: Workspace) -> Self {
        Self {
            saved: Arc::new(RwLock::new(Some(workspace))),
            save_count: Arc::new(RwLock::new(0)),
        }
    }

    /// Number of successful saves (useful for tests)
    pub fn save_count(&self) -> usize {
        self.save_count.read().map(|count| *count).unwrap_or(0)
    }
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::IoError("in-memory storage lock poisoned".to_string())
}

impl AnalysisStorage for InMemoryAnalysisStorage {
    fn load(&self) -> Result<Option<Workspace>, StorageError> {
        Ok(self.saved.read().map_err(poisoned)?.clone())
    }

    fn save(&self, workspace: &Workspace) -> Result<(), StorageError> {
        *self.saved.write().map_err(poisoned)? = Some(workspace.clone());
        *self.save_count.write().map_err(poisoned)? += 1;
        Ok(())
    }
}
