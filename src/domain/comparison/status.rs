//! Lifecycle status of a what-if comparison session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where a comparison session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonStatus {
    /// What-if copy exists; comparison view not yet opened.
    Initiated,
    /// Comparison view open, user editing the what-if copy.
    Editing,
    /// Replace-original confirmation shown; nothing destroyed yet.
    ConfirmingReplace,
    /// Both analyses kept.
    SavedBoth,
    /// What-if copy deleted.
    Discarded,
    /// What-if values written onto the original, copy deleted.
    Replaced,
}

impl ComparisonStatus {
    pub fn is_resolved(&self) -> bool {
        matches!(
            self,
            ComparisonStatus::SavedBoth | ComparisonStatus::Discarded | ComparisonStatus::Replaced
        )
    }
}

impl StateMachine for ComparisonStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ComparisonStatus::*;
        matches!(
            (self, target),
            (Initiated, Editing)
                | (Initiated, Discarded)
                | (Editing, ConfirmingReplace)
                | (Editing, SavedBoth)
                | (Editing, Discarded)
                | (ConfirmingReplace, Editing)
                | (ConfirmingReplace, Replaced)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ComparisonStatus::*;
        match self {
            Initiated => vec![Editing, Discarded],
            Editing => vec![ConfirmingReplace, SavedBoth, Discarded],
            ConfirmingReplace => vec![Editing, Replaced],
            SavedBoth | Discarded | Replaced => vec![],
        }
    }
}
