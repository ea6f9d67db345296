//! Wiring between the store and the storage port.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::AnalysisStore;
use crate::domain::analysis::GlobalParams;
use crate::ports::{AnalysisStorage, StorageError};

/// Builds a store from saved state, or an empty one seeded with `defaults`.
pub fn load_store(
    storage: &dyn AnalysisStorage,
    defaults: GlobalParams,
) -> Result<AnalysisStore, StorageError> {
    match storage.load()? {
        Some(workspace) => {
            info!(analyses = workspace.analyses.len(), "Restored saved workspace");
            Ok(AnalysisStore::from_workspace(workspace))
        }
        None => {
            info!("No saved workspace, starting empty");
            Ok(AnalysisStore::new(defaults))
        }
    }
}

/// Saves the workspace after every store mutation.
///
/// A failed save is logged and does not undo the mutation.
pub fn enable_autosave(store: &mut AnalysisStore, storage: Arc<dyn AnalysisStorage>) {
    store.subscribe(move |event, workspace| {
        if let Err(err) = storage.save(workspace) {
            warn!(event = ?event, error = %err, "Autosave failed");
        }
    });
}
