//! Application command and query handlers.

pub mod analysis;
pub mod comparison;
pub mod dashboard;
pub mod global;

pub use analysis::{
    CommitFieldCommand, CommitFieldError, CommitFieldHandler, CommitFieldResult,
    CreateAnalysisCommand, CreateAnalysisError, CreateAnalysisHandler, CreateAnalysisResult,
    DeleteAnalysisCommand, DeleteAnalysisError, DeleteAnalysisHandler,
};
pub use comparison::{
    ComparisonError, ComparisonScreen, ComparisonView, ComparisonWorkflow, StartWhatIfCommand,
    StartWhatIfError, StartWhatIfHandler, StartWhatIfResult,
};
pub use dashboard::{
    DashboardRow, DashboardView, GetDashboardHandler, GetDashboardQuery, GetGlobalViewHandler,
    GetGlobalViewQuery, GlobalView,
};
pub use global::{
    CommitGlobalParamCommand, CommitGlobalParamError, CommitGlobalParamHandler, GlobalParam,
};
