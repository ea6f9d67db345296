//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `AnalysisStorage` - Loads and saves the workspace

mod analysis_storage;

pub use analysis_storage::{AnalysisStorage, StorageError};
