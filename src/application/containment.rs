//! Top-level fault boundary.
//!
//! An unexpected panic inside an operation is caught, logged, and the store
//! is put back to the state it had before the operation started.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::error;

use crate::application::AnalysisStore;

/// An operation aborted by an unexpected fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Operation '{operation}' failed unexpectedly: {message}")]
pub struct ContainedFault {
    pub operation: String,
    pub message: String,
}

/// Runs `f` against the store, restoring the last committed state on panic.
pub fn run_contained<T, F>(
    store: &mut AnalysisStore,
    operation: &str,
    f: F,
) -> Result<T, ContainedFault>
where
    F: FnOnce(&mut AnalysisStore) -> T,
{
    let committed = store.snapshot();

    match panic::catch_unwind(AssertUnwindSafe(|| f(&mut *store))) {
        Ok(value) => Ok(value),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!(operation, reason = %message, "Contained fault, restoring store");
            store.restore(committed);
            Err(ContainedFault {
                operation: operation.to_string(),
                message,
            })
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::Analysis;

    #[test]
    fn successful_operation_passes_value_through() {
        let mut store = AnalysisStore::default();
        let id = run_contained(&mut store, "add", |s| {
            s.add_analysis(Analysis::new("Etch").unwrap())
        })
        .unwrap();
        assert!(store.contains(id));
    }

    #[test]
    fn panic_restores_last_committed_state() {
        let mut store = AnalysisStore::default();
        store.add_analysis(Analysis::new("Kept").unwrap());
        let before = store.snapshot();

        let fault = run_contained::<(), _>(&mut store, "broken", |s| {
            s.add_analysis(Analysis::new("Lost").unwrap());
            panic!("boom");
        })
        .unwrap_err();

        assert_eq!(fault.operation, "broken");
        assert_eq!(fault.message, "boom");
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn formatted_panic_message_is_captured() {
        let mut store = AnalysisStore::default();
        let fault = run_contained::<(), _>(&mut store, "format", |_| {
            panic!("bad value {}", 42);
        })
        .unwrap_err();
        assert_eq!(fault.message, "bad value 42");
    }
}
