//! CommitGlobalParamHandler - validated commit of a global parameter.
//!
//! Every analysis without its own detection rate inherits the global one, so
//! a commit here changes the metrics of all such analyses at once.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::application::AnalysisStore;
use crate::domain::analysis::{GlobalParams, GlobalParamsUpdate};
use crate::domain::foundation::DomainError;
use crate::domain::validation::{validate_global_detection_rate, validate_service_cost};

/// The global parameters a user can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalParam {
    DetectionRate,
    ServiceCostPerPump,
}

impl std::fmt::Display for GlobalParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlobalParam::DetectionRate => write!(f, "detection_rate"),
            GlobalParam::ServiceCostPerPump => write!(f, "service_cost_per_pump"),
        }
    }
}

/// Command to commit the raw text of a global parameter.
#[derive(Debug, Clone)]
pub struct CommitGlobalParamCommand {
    pub param: GlobalParam,
    pub raw: String,
}

/// Error type for global parameter commits.
#[derive(Debug, Clone)]
pub enum CommitGlobalParamError {
    Rejected { param: GlobalParam, message: String },
    Domain(DomainError),
}

impl std::fmt::Display for CommitGlobalParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommitGlobalParamError::Rejected { param, message } => {
                write!(f, "Invalid value for {}: {}", param, message)
            }
            CommitGlobalParamError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommitGlobalParamError {}

impl From<DomainError> for CommitGlobalParamError {
    fn from(err: DomainError) -> Self {
        CommitGlobalParamError::Domain(err)
    }
}

/// Handler for global parameter commits.
#[derive(Debug, Default)]
pub struct CommitGlobalParamHandler;

impl CommitGlobalParamHandler {
    pub fn new() -> Self {
        Self
    }

    /// Returns the global parameters in force after the commit.
    pub fn handle(
        &self,
        store: &mut AnalysisStore,
        cmd: CommitGlobalParamCommand,
    ) -> Result<GlobalParams, CommitGlobalParamError> {
        let validation = match cmd.param {
            GlobalParam::DetectionRate => validate_global_detection_rate(&cmd.raw),
            GlobalParam::ServiceCostPerPump => validate_service_cost(&cmd.raw),
        };

        let value = match (validation.error(), validation.value()) {
            (None, Some(value)) => value,
            (error, _) => {
                let message = error.unwrap_or_default().to_string();
                debug!(param = %cmd.param, reason = %message, "Global parameter rejected");
                return Err(CommitGlobalParamError::Rejected {
                    param: cmd.param,
                    message,
                });
            }
        };

        let update = match cmd.param {
            GlobalParam::DetectionRate => GlobalParamsUpdate {
                detection_rate: Some(value),
                ..Default::default()
            },
            GlobalParam::ServiceCostPerPump => GlobalParamsUpdate {
                service_cost_per_pump: Some(value),
                ..Default::default()
            },
        };

        let params = store.update_global_params(&update)?;
        info!(param = %cmd.param, value, "Global parameter committed");
        Ok(params)
    }
}
