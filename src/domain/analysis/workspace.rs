//! Workspace - everything the store owns, as one plain value.

use serde::{Deserialize, Serialize};

use super::{Analysis, GlobalParams};
use crate::domain::foundation::AnalysisId;

/// The analyses, the active-analysis pointer and the global parameters.
///
/// This is the unit handed to readers as an immutable snapshot and to the
/// storage port for persistence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Workspace {
    pub analyses: Vec<Analysis>,
    #[serde(default)]
    pub active_analysis_id: Option<AnalysisId>,
    #[serde(default)]
    pub global_params: GlobalParams,
}

impl Workspace {
    /// Empty workspace with the given global parameters.
    pub fn with_global_params(global_params: GlobalParams) -> Self {
        Self {
            analyses: Vec::new(),
            active_analysis_id: None,
            global_params,
        }
    }

    pub fn find(&self, id: AnalysisId) -> Option<&Analysis> {
        self.analyses.iter().find(|a| a.id == id)
    }

    pub(crate) fn find_mut(&mut self, id: AnalysisId) -> Option<&mut Analysis> {
        self.analyses.iter_mut().find(|a| a.id == id)
    }

    pub fn active(&self) -> Option<&Analysis> {
        self.active_analysis_id.and_then(|id| self.find(id))
    }
}
