//! Analysis command handlers.

mod commit_field;
mod create_analysis;
mod delete_analysis;

pub use commit_field::{CommitFieldCommand, CommitFieldError, CommitFieldHandler, CommitFieldResult};
pub use create_analysis::{
    CreateAnalysisCommand, CreateAnalysisError, CreateAnalysisHandler, CreateAnalysisResult,
};
pub use delete_analysis::{DeleteAnalysisCommand, DeleteAnalysisError, DeleteAnalysisHandler};
