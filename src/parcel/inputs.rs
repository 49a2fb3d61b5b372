//! Parcel Inputs
//!
//! What the user tells us about the land on the location step.

use super::region::Region;
use crate::utils::{clamp_acres, round_to_tenth};
use serde::{Deserialize, Serialize};

/// Location, region profile and size of a parcel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    /// Free-text address or area. Not validated, never stored.
    pub location: String,

    /// Region profile that selects the per-acre baseline
    pub region: Region,

    /// Total acres (kept >= 0.1 by every setter)
    pub acres: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            location: String::new(),
            region: Region::Suburban,
            acres: Self::DEFAULT_ACRES,
        }
    }
}

impl Inputs {
    pub const DEFAULT_ACRES: f64 = 1.0;

    /// Acres added or removed by one stepper click
    pub const ACRE_STEP: f64 = 1.0;

    pub fn new(location: impl Into<String>, region: Region, acres: f64) -> Self {
        Self {
            location: location.into(),
            region,
            acres: clamp_acres(acres),
        }
    }

    /// Free-form acreage entry: clamped, otherwise taken as typed
    pub fn set_acres(&mut self, acres: f64) -> f64 {
        let clamped = clamp_acres(acres);
        if clamped != acres {
            tracing::warn!("Acreage {} below minimum, clamped to {}", acres, clamped);
        }
        self.acres = clamped;
        self.acres
    }

    /// Stepper "+" button
    pub fn increment_acres(&mut self) -> f64 {
        self.acres = clamp_acres(round_to_tenth(self.acres + Self::ACRE_STEP));
        self.acres
    }

    /// Stepper "−" button
    pub fn decrement_acres(&mut self) -> f64 {
        self.acres = clamp_acres(round_to_tenth(self.acres - Self::ACRE_STEP));
        self.acres
    }
}
