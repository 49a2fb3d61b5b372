//! Download Record
//!
//! The structured record written when the user downloads an estimate.
//! Field names follow the export file schema (camelCase, ISO-8601 timestamp).

use crate::parcel::{Factors, Inputs, Region};
use crate::summary::Summary;
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default download file name
pub const DEFAULT_EXPORT_FILE_NAME: &str = "land-value-estimate.json";

/// Exported estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub location: String,
    pub region: Region,
    pub acres: f64,
    pub multipliers: Factors,
    pub estimate: u64,
    pub confidence: f64,
    /// UTC, millisecond precision, `Z` suffix
    pub generated_at: String,
}

impl ExportRecord {
    /// Build a record stamped with the current time
    pub fn new(inputs: &Inputs, summary: &Summary) -> Self {
        Self::at(inputs, summary, Utc::now())
    }

    /// Build a record with an explicit timestamp
    pub fn at(inputs: &Inputs, summary: &Summary, generated_at: DateTime<Utc>) -> Self {
        Self {
            location: inputs.location.clone(),
            region: inputs.region.clone(),
            acres: inputs.acres,
            multipliers: summary.multipliers,
            estimate: summary.estimate,
            confidence: summary.confidence,
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Pretty-printed JSON document
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).with_context(|| "Failed to serialize export record")
    }

    /// Write the record into `dir/file_name`, returning the full path
    pub fn write_to(&self, dir: &Path, file_name: &str) -> Result<PathBuf> {
        let path = dir.join(file_name);
        let json = self.to_json()?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write export file: {:?}", path))?;

        tracing::info!("Exported estimate to {:?}", path);
        Ok(path)
    }

    /// Read a previously exported record
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read export file: {:?}", path))?;

        serde_json::from_str(&contents).with_context(|| "Failed to parse export JSON")
    }
}
