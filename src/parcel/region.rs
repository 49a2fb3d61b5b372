//! Region Profiles
//!
//! Fixed per-acre baselines for the three region profiles. Anything else the
//! user types is kept as-is and priced at the fallback baseline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-acre baseline for labels outside the table
pub const FALLBACK_BASELINE: u64 = 100_000;

/// Region profile of a parcel
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Region {
    /// Urban core, $250,000 per acre
    Urban,

    /// Suburban, $120,000 per acre
    #[default]
    Suburban,

    /// Rural, $35,000 per acre
    Rural,

    /// Unrecognized label, priced at `FALLBACK_BASELINE`
    Other(String),
}

impl Region {
    /// Parse a region label
    ///
    /// Only the exact machine labels select a profile; anything else
    /// (including "Urban" or " urban") is kept verbatim in `Region::Other`
    /// and prices at the fallback baseline.
    pub fn from_label(label: &str) -> Self {
        match label {
            "urban" => Region::Urban,
            "suburban" => Region::Suburban,
            "rural" => Region::Rural,
            _ => Region::Other(label.to_string()),
        }
    }

    /// Per-acre baseline value
    pub fn baseline(&self) -> u64 {
        match self {
            Region::Urban => 250_000,
            Region::Suburban => 120_000,
            Region::Rural => 35_000,
            Region::Other(_) => FALLBACK_BASELINE,
        }
    }

    /// Machine label used in exports ("urban", "suburban", "rural")
    pub fn as_str(&self) -> &str {
        match self {
            Region::Urban => "urban",
            Region::Suburban => "suburban",
            Region::Rural => "rural",
            Region::Other(label) => label.as_str(),
        }
    }

    /// Friendly name for display
    pub fn display_name(&self) -> &str {
        match self {
            Region::Urban => "Urban core",
            Region::Suburban => "Suburban",
            Region::Rural => "Rural",
            Region::Other(label) => label.as_str(),
        }
    }

    /// Whether this region has its own baseline in the table
    pub fn is_known(&self) -> bool {
        !matches!(self, Region::Other(_))
    }

    /// The three profiles offered by the region picker
    pub fn all() -> [Region; 3] {
        [Region::Urban, Region::Suburban, Region::Rural]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Region {
    fn from(label: String) -> Self {
        Region::from_label(&label)
    }
}

impl From<&str> for Region {
    fn from(label: &str) -> Self {
        Region::from_label(label)
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        match region {
            Region::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}
