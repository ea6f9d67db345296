//! Comparison session - one what-if exploration of an analysis.

use serde::Serialize;

use super::{ComparisonStatus, ModifiedSections};
use crate::domain::analysis::{Analysis, AnalysisField};
use crate::domain::foundation::{AnalysisId, DomainError, ErrorCode, StateMachine, Timestamp};

/// State of one what-if comparison.
///
/// The snapshot of the original is captured once, on the first successful
/// read, and never re-derived from the live store. Later edits to the live
/// original do not move the baseline of the "modified" flags.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSession {
    original_id: AnalysisId,
    what_if_id: AnalysisId,
    snapshot: Option<Analysis>,
    status: ComparisonStatus,
    started_at: Timestamp,
}

impl ComparisonSession {
    /// Starts a session for a freshly created what-if copy.
    pub fn new(original_id: AnalysisId, what_if_id: AnalysisId) -> Self {
        Self {
            original_id,
            what_if_id,
            snapshot: None,
            status: ComparisonStatus::Initiated,
            started_at: Timestamp::now(),
        }
    }

    pub fn original_id(&self) -> AnalysisId {
        self.original_id
    }

    pub fn what_if_id(&self) -> AnalysisId {
        self.what_if_id
    }

    pub fn status(&self) -> ComparisonStatus {
        self.status
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn snapshot(&self) -> Option<&Analysis> {
        self.snapshot.as_ref()
    }

    /// Records the original as baseline if none was taken yet.
    ///
    /// Returns the baseline in effect, which is the first capture.
    pub fn capture_snapshot(&mut self, original: &Analysis) -> &Analysis {
        self.snapshot.get_or_insert_with(|| original.clone())
    }

    /// Section badges of `what_if` against the baseline.
    ///
    /// Without a baseline nothing is reported as modified.
    pub fn modified_sections(&self, what_if: &Analysis) -> ModifiedSections {
        self.snapshot
            .as_ref()
            .map(|baseline| ModifiedSections::between(baseline, what_if))
            .unwrap_or_default()
    }

    /// Field-level differences of `what_if` against the baseline.
    pub fn modified_fields(&self, what_if: &Analysis) -> Vec<AnalysisField> {
        self.snapshot
            .as_ref()
            .map(|baseline| super::modified_fields(baseline, what_if))
            .unwrap_or_default()
    }

    /// Fails with `InvalidStateTransition` when the lifecycle has no edge
    /// from the current status to `target`.
    pub fn ensure_can_transition(&self, target: ComparisonStatus) -> Result<(), DomainError> {
        let from = self.status;
        from.transition_to(target).map(|_| ()).map_err(|err| {
            DomainError::new(ErrorCode::InvalidStateTransition, err.to_string())
                .with_detail("from", format!("{:?}", from))
                .with_detail("to", format!("{:?}", target))
        })
    }

    /// Moves the session to `target` if the lifecycle allows it.
    pub fn transition(&mut self, target: ComparisonStatus) -> Result<(), DomainError> {
        self.ensure_can_transition(target)?;
        self.status = target;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn original() -> Analysis {
        let mut a = Analysis::new("Diffusion").unwrap();
        a.pump_quantity = 10;
        a
    }

    #[test]
    fn new_session_starts_initiated_without_snapshot() {
        let a = original();
        let copy = a.what_if_copy();
        let session = ComparisonSession::new(a.id, copy.id);
        assert_eq!(session.status(), ComparisonStatus::Initiated);
        assert!(session.snapshot().is_none());
        assert!(!session.modified_sections(&copy).any());
    }

    #[test]
    fn snapshot_is_taken_only_once() {
        let mut live = original();
        let copy = live.what_if_copy();
        let mut session = ComparisonSession::new(live.id, copy.id);

        session.capture_snapshot(&live);
        live.pump_quantity = 99;
        let baseline = session.capture_snapshot(&live);

        assert_eq!(baseline.pump_quantity, 10);
    }

    #[test]
    fn snapshot_is_independent_of_later_mutation() {
        let mut live = original();
        let mut copy = live.what_if_copy();
        let mut session = ComparisonSession::new(live.id, copy.id);
        session.capture_snapshot(&live);

        live.pump_quantity = 15;
        copy.pump_quantity = 15;
        assert!(session.modified_sections(&copy).equipment);
        assert_eq!(session.modified_fields(&copy), vec![AnalysisField::PumpQuantity]);
    }

    #[test]
    fn invalid_transition_keeps_status() {
        let a = original();
        let mut session = ComparisonSession::new(a.id, a.what_if_copy().id);
        let err = session.transition(ComparisonStatus::Replaced).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert_eq!(err.details.get("from").map(String::as_str), Some("Initiated"));
        assert_eq!(err.details.get("to").map(String::as_str), Some("Replaced"));
        assert_eq!(session.status(), ComparisonStatus::Initiated);
    }
}
