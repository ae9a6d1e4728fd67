//! CLI configuration file
//!
//! Every value is a default; explicit command line flags win.

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Classifier and input files
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Classifier name (`rule-based`, `baseline`, `random`)
    pub classifier: String,

    /// Settings file for the tokenizer
    pub settings: Option<PathBuf>,

    /// Lexicon CSV
    pub lexicon: Option<PathBuf>,

    /// Trigger lexicon CSV
    pub triggers: Option<PathBuf>,

    /// Evaluate on a thread pool
    pub threaded: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            classifier: "rule-based".to_string(),
            settings: None,
            lexicon: None,
            triggers: None,
            threaded: true,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse a name with a clap value enum, as flags would
    pub fn parse_value<T: clap::ValueEnum>(key: &str, value: &str) -> Result<T> {
        T::from_str(value, true).map_err(|_| {
            CliError::ConfigError(format!("invalid value '{value}' for '{key}'")).into()
        })
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to render CLI configuration")
    }
}
