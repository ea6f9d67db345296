//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations against the [`AnalysisStore`].
//! Following CQRS, it separates command handlers (write) from query handlers (read).

mod containment;
mod edit_buffer;
pub mod handlers;
mod navigation;
mod persistence;
mod store;

pub use containment::{run_contained, ContainedFault};
pub use edit_buffer::FieldEditBuffer;
pub use navigation::{ParsedRoute, Route};
pub use persistence::{enable_autosave, load_store};
pub use store::{AnalysisStore, StoreEvent};

pub use handlers::{
    // Analysis handlers
    CommitFieldCommand, CommitFieldError, CommitFieldHandler, CommitFieldResult,
    CreateAnalysisCommand, CreateAnalysisError, CreateAnalysisHandler, CreateAnalysisResult,
    DeleteAnalysisCommand, DeleteAnalysisError, DeleteAnalysisHandler,
    // Global parameter handlers
    CommitGlobalParamCommand, CommitGlobalParamError, CommitGlobalParamHandler, GlobalParam,
    // Comparison handlers
    ComparisonError, ComparisonScreen, ComparisonView, ComparisonWorkflow, StartWhatIfCommand,
    StartWhatIfError, StartWhatIfHandler, StartWhatIfResult,
    // Queries
    DashboardRow, DashboardView, GetDashboardHandler, GetDashboardQuery, GetGlobalViewHandler,
    GetGlobalViewQuery, GlobalView,
};
