//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Workspace persistence (YAML file, in-memory)

pub mod storage;

pub use storage::{FileAnalysisStorage, InMemoryAnalysisStorage};
