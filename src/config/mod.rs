mod loader;

pub use loader::{
    directory_ancestors, load_config, load_config_from_path, parse_and_validate_config,
    CONFIG_FILE_NAME,
};

use crate::complexity::ComplexityThresholds;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure, read from `.migramap.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MigramapConfig {
    /// Which files the scanner enumerates
    #[serde(default)]
    pub scan: ScanConfig,

    /// Complexity bucket boundaries
    #[serde(default)]
    pub thresholds: ComplexityThresholds,

    /// Migration score weights
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Report artifact location
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// File extensions treated as source files (without the leading dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns; matching paths are skipped
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Honour `.gitignore` files under the scan root
    #[serde(default)]
    pub respect_gitignore: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore: Vec::new(),
            respect_gitignore: false,
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["js".to_string(), "ts".to_string()]
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoringConfig {
    /// Score added per injected dependency
    #[serde(default = "default_dependency_weight")]
    pub dependency_weight: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            dependency_weight: default_dependency_weight(),
        }
    }
}

fn default_dependency_weight() -> usize {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("component-analysis.json")
}

impl MigramapConfig {
    /// Check cross-field constraints that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.scan.extensions.is_empty() {
            return Err("scan.extensions must name at least one extension".to_string());
        }
        if self.scan.extensions.iter().any(|ext| ext.trim().is_empty()) {
            return Err("scan.extensions must not contain empty entries".to_string());
        }
        if self.thresholds.low_max >= self.thresholds.medium_max {
            return Err(format!(
                "thresholds.low_max ({}) must be below thresholds.medium_max ({})",
                self.thresholds.low_max, self.thresholds.medium_max
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_layout() {
        let config = MigramapConfig::default();
        assert_eq!(config.scan.extensions, vec!["js", "ts"]);
        assert!(!config.scan.respect_gitignore);
        assert_eq!(config.thresholds.low_max, 100);
        assert_eq!(config.thresholds.medium_max, 300);
        assert_eq!(config.scoring.dependency_weight, 10);
        assert_eq!(
            config.output.path,
            PathBuf::from("component-analysis.json")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_thresholds() {
        let mut config = MigramapConfig::default();
        config.thresholds.low_max = 300;
        config.thresholds.medium_max = 100;
        let err = config.validate().unwrap_err();
        assert!(err.contains("low_max"));
    }

    #[test]
    fn test_validate_rejects_empty_extensions() {
        let mut config = MigramapConfig::default();
        config.scan.extensions.clear();
        assert!(config.validate().is_err());
    }
}
