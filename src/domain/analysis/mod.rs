//! Analysis module - the process/equipment configuration entity.
//!
//! An [`Analysis`] holds the raw inputs of one ROI evaluation. Derived
//! metrics are never stored here; see [`crate::domain::roi`].

mod aggregate;
mod field;
mod global_params;
mod values;
mod workspace;

pub use aggregate::{Analysis, AnalysisUpdate, WHAT_IF_SUFFIX};
pub use field::AnalysisField;
pub use global_params::{
    GlobalParams, GlobalParamsUpdate, DEFAULT_DETECTION_RATE, DEFAULT_SERVICE_COST_PER_PUMP,
};
pub use values::{FailureRateMode, WaferType};
pub use workspace::Workspace;
