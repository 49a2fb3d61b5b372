//! Estimator Configuration
//!
//! Where exports go and which URL accompanies shared estimates. Values come
//! from built-in defaults, then an optional JSON file, then environment
//! variables.

use crate::error::ConfigError;
use crate::export::DEFAULT_EXPORT_FILE_NAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_SHARE_URL: &str = "LAND_ESTIMATE_SHARE_URL";
pub const ENV_EXPORT_DIR: &str = "LAND_ESTIMATE_EXPORT_DIR";
pub const ENV_EXPORT_FILE: &str = "LAND_ESTIMATE_EXPORT_FILE";

/// Runtime settings for the share and export adapters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Referring URL appended to shared text
    pub share_url: String,

    /// Directory export files are written to
    pub export_dir: PathBuf,

    /// Export file name (no directories)
    pub export_file_name: String,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            share_url: String::new(),
            export_dir: PathBuf::from("."),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl EstimatorConfig {
    /// Load configuration from JSON file; missing keys take defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: EstimatorConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse config JSON")?;

        config.validate()?;
        Ok(config)
    }

    /// Defaults overlaid with environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply `LAND_ESTIMATE_*` environment variables on top of `self`
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (environment, test fixtures)
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_SHARE_URL) {
            self.share_url = url;
        }
        if let Some(dir) = lookup(ENV_EXPORT_DIR) {
            self.export_dir = PathBuf::from(dir);
        }
        if let Some(name) = lookup(ENV_EXPORT_FILE) {
            self.export_file_name = name;
        }

        self.validate()?;
        Ok(self)
    }

    /// Reject file names that would escape `export_dir`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.export_file_name.trim().is_empty() {
            return Err(ConfigError::EmptyFileName);
        }
        if self.export_file_name.contains(['/', '\\']) {
            return Err(ConfigError::FileNameHasSeparator(self.export_file_name.clone()));
        }
        Ok(())
    }

    /// Full path of the export file
    pub fn export_path(&self) -> PathBuf {
        self.export_dir.join(&self.export_file_name)
    }
}
