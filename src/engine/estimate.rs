//! Estimate and Confidence
//!
//! Algorithm:
//! 1. base = per-acre baseline of the region (fallback 100000)
//! 2. scale = size_scaling(max(0.1, acres))
//! 3. multiplier = soil × access × utilities × zoning
//! 4. estimate = max(0, round(base × acres × scale × multiplier))
//! 5. factor_distance = Σ |1 - factor|
//! 6. size_penalty = 0.65 (> 50 ac), 0.8 (> 10 ac), else 0.95
//! 7. confidence = clamp((1 - factor_distance / 5) × size_penalty, 0.35, 0.95)
//!
//! Only the final product in step 4 is rounded. Multiplication runs left to
//! right in exactly that order; regrouping changes the rounding of fractional
//! acreage.

use super::size_scaling::size_scaling;
use crate::parcel::{Factors, Inputs};
use crate::utils::clamp_acres;
use serde::{Deserialize, Serialize};

/// Confidence floor
pub const MIN_CONFIDENCE: f64 = 0.35;

/// Confidence ceiling
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Factor distance that would drive the deviation score to zero
const DISTANCE_SCALE: f64 = 5.0;

/// Engine output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    /// Whole currency units
    pub estimate: u64,
    /// Heuristic certainty in [0.35, 0.95]
    pub confidence: f64,
    /// Per-acre baseline used
    pub region_baseline: u64,
}

/// Every intermediate term of one computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateBreakdown {
    pub base: u64,
    pub acres: f64,
    pub scale: f64,
    pub multiplier: f64,
    /// Unrounded base × acres × scale × multiplier
    pub raw_value: f64,
    pub factor_distance: f64,
    pub size_penalty: f64,
    pub confidence: f64,
}

impl EstimateBreakdown {
    /// Rounded, non-negative estimate
    pub fn estimate(&self) -> u64 {
        self.raw_value.round().max(0.0) as u64
    }

    pub fn to_estimate(&self) -> Estimate {
        Estimate {
            estimate: self.estimate(),
            confidence: self.confidence,
            region_baseline: self.base,
        }
    }
}

/// Confidence penalty for parcel size
///
/// Larger parcels are modeled as inherently less certain.
pub fn size_penalty(acres: f64) -> f64 {
    if acres > 50.0 {
        0.65
    } else if acres > 10.0 {
        0.8
    } else {
        0.95
    }
}

/// Confidence proxy from factor deviation and size penalty
pub fn confidence(factor_distance: f64, size_penalty: f64) -> f64 {
    ((1.0 - factor_distance / DISTANCE_SCALE) * size_penalty).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

/// Compute all intermediate terms for a parcel
///
/// Acreage is clamped to >= 0.1 and every factor to its range before use, so
/// this is total over arbitrary input.
pub fn explain_estimate(inputs: &Inputs, factors: &Factors) -> EstimateBreakdown {
    let base = inputs.region.baseline();
    let acres = clamp_acres(inputs.acres);
    let factors = factors.clamped();

    let scale = size_scaling(acres);
    let multiplier = factors.product();
    let raw_value = base as f64 * acres * scale * multiplier;

    let factor_distance = factors.distance_from_neutral();
    let size_penalty = size_penalty(acres);
    let confidence = confidence(factor_distance, size_penalty);

    let breakdown = EstimateBreakdown {
        base,
        acres,
        scale,
        multiplier,
        raw_value,
        factor_distance,
        size_penalty,
        confidence,
    };

    tracing::debug!(
        region = %inputs.region,
        acres,
        scale,
        multiplier,
        raw_value,
        confidence,
        "Computed estimate"
    );

    breakdown
}

/// Compute estimate, confidence and region baseline
pub fn compute_estimate(inputs: &Inputs, factors: &Factors) -> Estimate {
    explain_estimate(inputs, factors).to_estimate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parcel::Region;
    use approx::assert_relative_eq;

    #[test]
    fn test_neutral_suburban_acre() {
        let inputs = Inputs::new("", Region::Suburban, 1.0);
        let result = compute_estimate(&inputs, &Factors::default());
        assert_eq!(result.estimate, 120_000);
        assert_eq!(result.region_baseline, 120_000);
        assert_relative_eq!(result.confidence, 0.95);
    }

    #[test]
    fn test_size_penalty_thresholds() {
        assert_relative_eq!(size_penalty(10.0), 0.95);
        assert_relative_eq!(size_penalty(10.01), 0.8);
        assert_relative_eq!(size_penalty(50.0), 0.8);
        assert_relative_eq!(size_penalty(50.01), 0.65);
    }

    #[test]
    fn test_confidence_clamped() {
        assert_relative_eq!(confidence(0.0, 0.95), 0.95);
        assert_relative_eq!(confidence(0.0, 0.65), 0.65);
        // 1 - 4/5 = 0.2 → floor
        assert_relative_eq!(confidence(4.0, 0.95), 0.35);
    }

    #[test]
    fn test_out_of_range_factors_are_clamped() {
        let inputs = Inputs::new("", Region::Suburban, 1.0);
        let wild = Factors {
            soil: 9.0,
            access: 1.0,
            utilities: 1.0,
            zoning: 1.0,
        };
        let capped = Factors {
            soil: 1.2,
            ..Factors::default()
        };
        assert_eq!(compute_estimate(&inputs, &wild), compute_estimate(&inputs, &capped));
    }

    #[test]
    fn test_zero_acres_priced_as_minimum() {
        let mut inputs = Inputs::new("", Region::Urban, 1.0);
        inputs.acres = 0.0;
        let breakdown = explain_estimate(&inputs, &Factors::default());
        assert_relative_eq!(breakdown.acres, 0.1);
        // 250000 × 0.1 × 1.045 = 26125
        assert_eq!(breakdown.estimate(), 26_125);
    }

    #[test]
    fn test_breakdown_matches_estimate() {
        let inputs = Inputs::new("", Region::Rural, 25.0);
        let factors = Factors {
            soil: 1.1,
            access: 0.95,
            utilities: 1.0,
            zoning: 1.2,
        };
        let breakdown = explain_estimate(&inputs, &factors);
        let result = compute_estimate(&inputs, &factors);
        assert_eq!(breakdown.to_estimate(), result);
        assert_relative_eq!(breakdown.size_penalty, 0.8);
        assert_relative_eq!(breakdown.factor_distance, 0.35, epsilon = 1e-9);
    }
}
