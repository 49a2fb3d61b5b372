//! Estimation engine
//!
//! Pure functions from (region, acreage, factors) to (estimate, confidence,
//! baseline). No state, no I/O; the same inputs always give the same output.

pub mod size_scaling;
pub mod estimate;

// Re-export engine functions
pub use size_scaling::{size_scaling, LARGE_LOT_FLOOR, SMALL_LOT_PREMIUM};
pub use estimate::{
    compute_estimate, confidence, explain_estimate, size_penalty, Estimate, EstimateBreakdown,
    MAX_CONFIDENCE, MIN_CONFIDENCE,
};
