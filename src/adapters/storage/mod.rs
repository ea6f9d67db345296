//! Storage Adapters
//!
//! Implementations of the AnalysisStorage port for persisting the workspace.
//!
//! ## Available Adapters
//!
//! - **FileAnalysisStorage** - Stores the workspace as a YAML file on disk
//! - **InMemoryAnalysisStorage** - Stores the workspace in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use argos_roi::adapters::storage::{FileAnalysisStorage, InMemoryAnalysisStorage};
//!
//! // Production: file-based storage
//! let storage = FileAnalysisStorage::new("./data/workspace.yaml");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryAnalysisStorage::new();
//! ```

mod file_analysis_storage;
mod in_memory_analysis_storage;

pub use file_analysis_storage::FileAnalysisStorage;
pub use in_memory_analysis_storage::InMemoryAnalysisStorage;
