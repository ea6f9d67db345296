//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the workspace is persisted
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// YAML file holding the workspace; `None` keeps everything in memory
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if path.as_os_str().is_empty() => Err(ValidationError::EmptyStoragePath),
            _ => Ok(()),
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_in_memory() {
        let config = StorageConfig::default();
        assert!(!config.is_persistent());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let config = StorageConfig {
            path: Some(PathBuf::new()),
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyStoragePath));
    }
}
