//! Adjustable Value Factors
//!
//! Four multipliers the user tunes on the factors step. Each has a fixed
//! range; 1.0 is neutral for all of them.

use serde::{Deserialize, Serialize};

/// One of the four adjustable multipliers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorKind {
    /// Fertility, drainage, contamination risk
    Soil,

    /// Proximity to paved roads and highways
    Access,

    /// Water, power, sewer, internet
    Utilities,

    /// Development rights and permitted uses
    Zoning,
}

impl FactorKind {
    /// Slider resolution (presentation only, not enforced)
    pub const STEP: f64 = 0.01;

    /// Inclusive (min, max) bounds
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            FactorKind::Soil => (0.8, 1.2),
            FactorKind::Access => (0.9, 1.15),
            FactorKind::Utilities => (0.9, 1.2),
            FactorKind::Zoning => (0.8, 1.3),
        }
    }

    pub fn min(&self) -> f64 {
        self.bounds().0
    }

    pub fn max(&self) -> f64 {
        self.bounds().1
    }

    /// Clamp a raw value into this factor's range
    pub fn clamp(&self, value: f64) -> f64 {
        let (min, max) = self.bounds();
        if value.is_nan() {
            return Factors::NEUTRAL;
        }
        value.clamp(min, max)
    }

    /// Key used in exports and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            FactorKind::Soil => "soil",
            FactorKind::Access => "access",
            FactorKind::Utilities => "utilities",
            FactorKind::Zoning => "zoning",
        }
    }

    /// Slider label
    pub fn label(&self) -> &'static str {
        match self {
            FactorKind::Soil => "Soil quality",
            FactorKind::Access => "Road access",
            FactorKind::Utilities => "Utilities availability",
            FactorKind::Zoning => "Zoning potential",
        }
    }

    /// Short hint shown under the label
    pub fn hint(&self) -> &'static str {
        match self {
            FactorKind::Soil => "Fertility, drainage, contamination risk",
            FactorKind::Access => "Proximity to paved roads and highways",
            FactorKind::Utilities => "Water, power, sewer, internet",
            FactorKind::Zoning => "Development rights and permitted uses",
        }
    }

    /// Parse a factor key ("soil", "access", "utilities", "zoning")
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "soil" => Some(FactorKind::Soil),
            "access" => Some(FactorKind::Access),
            "utilities" => Some(FactorKind::Utilities),
            "zoning" => Some(FactorKind::Zoning),
            _ => None,
        }
    }

    /// Get all factor kinds in display order
    pub fn all() -> &'static [FactorKind] {
        &[
            FactorKind::Soil,
            FactorKind::Access,
            FactorKind::Utilities,
            FactorKind::Zoning,
        ]
    }
}

/// Current multiplier values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Factors {
    pub soil: f64,
    pub access: f64,
    pub utilities: f64,
    pub zoning: f64,
}

impl Default for Factors {
    fn default() -> Self {
        Self {
            soil: Self::NEUTRAL,
            access: Self::NEUTRAL,
            utilities: Self::NEUTRAL,
            zoning: Self::NEUTRAL,
        }
    }
}

impl Factors {
    /// Neutral multiplier
    pub const NEUTRAL: f64 = 1.0;

    /// Read one factor
    pub fn get(&self, kind: FactorKind) -> f64 {
        match kind {
            FactorKind::Soil => self.soil,
            FactorKind::Access => self.access,
            FactorKind::Utilities => self.utilities,
            FactorKind::Zoning => self.zoning,
        }
    }

    /// Set one factor, clamped to its bounds. Returns the stored value.
    pub fn set(&mut self, kind: FactorKind, value: f64) -> f64 {
        let clamped = kind.clamp(value);
        if clamped != value {
            tracing::warn!(
                "{} value {} outside [{}, {}], clamped to {}",
                kind.key(),
                value,
                kind.min(),
                kind.max(),
                clamped
            );
        }
        match kind {
            FactorKind::Soil => self.soil = clamped,
            FactorKind::Access => self.access = clamped,
            FactorKind::Utilities => self.utilities = clamped,
            FactorKind::Zoning => self.zoning = clamped,
        }
        clamped
    }

    /// Copy with every factor clamped into its range
    pub fn clamped(&self) -> Self {
        Self {
            soil: FactorKind::Soil.clamp(self.soil),
            access: FactorKind::Access.clamp(self.access),
            utilities: FactorKind::Utilities.clamp(self.utilities),
            zoning: FactorKind::Zoning.clamp(self.zoning),
        }
    }

    /// Combined multiplier (soil × access × utilities × zoning)
    pub fn product(&self) -> f64 {
        self.soil * self.access * self.utilities * self.zoning
    }

    /// L1 deviation from neutral
    pub fn distance_from_neutral(&self) -> f64 {
        (Self::NEUTRAL - self.soil).abs()
            + (Self::NEUTRAL - self.access).abs()
            + (Self::NEUTRAL - self.utilities).abs()
            + (Self::NEUTRAL - self.zoning).abs()
    }

    /// Position of a factor within its range as a percentage (0-100)
    pub fn position_pct(&self, kind: FactorKind) -> f64 {
        let (min, max) = kind.bounds();
        ((self.get(kind) - min) / (max - min) * 100.0).clamp(0.0, 100.0)
    }

    /// Iterate (kind, value) pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (FactorKind, f64)> + '_ {
        FactorKind::all().iter().map(move |&kind| (kind, self.get(kind)))
    }
}
