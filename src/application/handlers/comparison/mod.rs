//! What-if comparison handlers.

mod start_what_if;
mod workflow;

pub use start_what_if::{
    StartWhatIfCommand, StartWhatIfError, StartWhatIfHandler, StartWhatIfResult,
};
pub use workflow::{ComparisonError, ComparisonScreen, ComparisonView, ComparisonWorkflow};
