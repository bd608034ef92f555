//! Configuration module
//!
//! Settings come from an optional TOML file; command-line flags override
//! them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Which analyses run by default
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Report every published index, not just the basic metrics
    pub composite: bool,

    /// Compute the Fry coordinate
    pub fry: bool,

    /// Strip Markdown markers before analysis
    pub strip_markdown: bool,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Decimal places for scores
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            precision: 2,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Parse a configuration held in memory
    pub fn parse(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&source)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("Loaded CLI configuration from {}", path.display());
        Ok(config)
    }

    /// Configuration from `path`, or the defaults when none is given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert!(!config.analysis.composite);
        assert!(!config.analysis.fry);
        assert_eq!(config.output.default_format, "text");
        assert_eq!(config.output.precision, 2);
        assert_eq!(config.performance.worker_threads, 0);
    }

    #[test]
    fn test_partial_file() {
        let config = CliConfig::parse(
            r#"
[analysis]
composite = true

[output]
precision = 4
"#,
        )
        .unwrap();
        assert!(config.analysis.composite);
        assert!(!config.analysis.strip_markdown);
        assert_eq!(config.output.precision, 4);
        assert_eq!(config.output.default_format, "text");
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(CliConfig::parse("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = CliConfig::parse("[analysis]\ncolour = true\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("legible.toml");
        fs::write(&path, "[performance]\nworker_threads = 2\n").unwrap();

        let config = CliConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.performance.worker_threads, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/legible.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
