//! Summary Projector
//!
//! Builds the read-only `Summary` handed to formatters and export adapters.
//! Always rebuilt whole from the current inputs and factors.

use crate::engine::{explain_estimate, EstimateBreakdown};
use crate::parcel::{Factors, Inputs};
use crate::utils::group_thousands;
use serde::{Deserialize, Serialize};

/// View model of one estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub estimate: u64,
    pub confidence: f64,
    pub region_baseline: u64,
    /// Acreage as entered
    pub acres: f64,
    /// Factors echoed from the current state
    pub multipliers: Factors,
}

impl Summary {
    /// Confidence as a whole percentage, 0-100
    pub fn confidence_pct(&self) -> u8 {
        (self.confidence * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Estimate with thousands separators
    pub fn estimate_display(&self) -> String {
        group_thousands(self.estimate)
    }

    /// Region baseline with thousands separators
    pub fn baseline_display(&self) -> String {
        group_thousands(self.region_baseline)
    }
}

/// Project the summary for the given state
pub fn project(inputs: &Inputs, factors: &Factors) -> Summary {
    project_with_breakdown(inputs, factors).0
}

/// Project the summary together with the intermediate terms behind it
pub fn project_with_breakdown(inputs: &Inputs, factors: &Factors) -> (Summary, EstimateBreakdown) {
    let breakdown = explain_estimate(inputs, factors);
    let estimate = breakdown.to_estimate();

    let summary = Summary {
        estimate: estimate.estimate,
        confidence: estimate.confidence,
        region_baseline: estimate.region_baseline,
        acres: inputs.acres,
        multipliers: *factors,
    };

    (summary, breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parcel::Region;
    use approx::assert_relative_eq;

    #[test]
    fn test_project_echoes_inputs() {
        let inputs = Inputs::new("Meadow Lane", Region::Rural, 100.0);
        let factors = Factors::default();
        let summary = project(&inputs, &factors);

        assert_eq!(summary.estimate, 2_625_000);
        assert_eq!(summary.region_baseline, 35_000);
        assert_relative_eq!(summary.acres, 100.0);
        assert_eq!(summary.multipliers, factors);
        assert_eq!(summary.confidence_pct(), 65);
        assert_eq!(summary.estimate_display(), "2,625,000");
        assert_eq!(summary.baseline_display(), "35,000");
    }

    #[test]
    fn test_serializes_camel_case() {
        let summary = project(&Inputs::default(), &Factors::default());
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["regionBaseline"], 120_000);
        assert_eq!(json["multipliers"]["zoning"], 1.0);
    }
}
