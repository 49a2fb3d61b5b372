//! Rounding Utilities
//!
//! Acreage is never allowed to reach zero or go negative. Every path that
//! feeds acres into the engine goes through `clamp_acres` first.

/// Smallest parcel the estimator will price (acres)
pub const MIN_ACRES: f64 = 0.1;

/// Clamp acreage to the minimum parcel size
///
/// NaN collapses to `MIN_ACRES` as well, since `f64::max` ignores NaN operands.
pub fn clamp_acres(acres: f64) -> f64 {
    acres.max(MIN_ACRES)
}

/// Round to one decimal place (stepper buttons)
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
