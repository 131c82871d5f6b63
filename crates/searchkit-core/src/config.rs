//! Search configuration for searchkit
//!
//! Configuration is read from a TOML file; every field is optional.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{Result, SearchError};
use crate::search::BeamOptions;

pub use types::SearchConfig;

impl SearchConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SearchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SearchError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.beam_width == 0 {
            bail_invalid!("beam_width", "0 (must be at least 1)");
        }
        Ok(())
    }

    pub fn beam_options(&self) -> BeamOptions {
        BeamOptions {
            width: self.beam_width,
            max_iterations: self.max_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExitCode;
    use crate::search::Priority;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.beam_width, 2);
        assert_eq!(config.priority, Priority::PathCost);
        assert!(config.max_depth.is_none());
        assert!(config.max_iterations.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("searchkit.toml");

        let config = SearchConfig {
            beam_width: 4,
            max_iterations: Some(100),
            max_depth: Some(12),
            priority: Priority::EdgeCost,
        };
        config.save(&path).unwrap();

        let loaded = SearchConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("searchkit.toml");
        fs::write(&path, "priority = \"edge-cost\"\n").unwrap();

        let loaded = SearchConfig::load(&path).unwrap();
        assert_eq!(loaded.priority, Priority::EdgeCost);
        assert_eq!(loaded.beam_width, 2);
    }

    #[test]
    fn test_zero_beam_width_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("searchkit.toml");
        fs::write(&path, "beam_width = 0\n").unwrap();

        let err = SearchConfig::load(&path).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::Usage);
    }

    #[test]
    fn test_malformed_file_is_data_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("searchkit.toml");
        fs::write(&path, "beam_width = \"wide\"\n").unwrap();

        let err = SearchConfig::load(&path).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::Data);
    }

    #[test]
    fn test_missing_file_is_data_error() {
        let dir = tempdir().unwrap();
        let err = SearchConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, SearchError::Io(_)));
    }

    #[test]
    fn test_beam_options_from_config() {
        let config = SearchConfig {
            beam_width: 3,
            max_iterations: Some(7),
            ..Default::default()
        };
        let options = config.beam_options();
        assert_eq!(options.width, 3);
        assert_eq!(options.max_iterations, Some(7));
    }
}
