//! Size Scaling
//!
//! Small lots carry a per-acre premium, large lots a discount. The three
//! pieces meet at 1 acre (1.0) and the discount is floored at 0.75.

/// Upper end of the small-lot premium
pub const SMALL_LOT_PREMIUM: f64 = 1.05;

/// Lowest scale any parcel can receive
pub const LARGE_LOT_FLOOR: f64 = 0.75;

/// Acreage where the moderate-discount piece ends
pub const MODERATE_LOT_LIMIT: f64 = 10.0;

/// Size scaling factor for a parcel
///
/// - `acres <= 1`: `1.05 - 0.05 × acres` (1.05 as acres → 0, exactly 1.0 at 1)
/// - `1 < acres <= 10`: `1 - 0.03 × ln(acres)`
/// - `acres > 10`: `max(0.75, 1 - 0.08 × ln(acres))`
///
/// Callers clamp acres to >= 0.1 first; this function assumes acres > 0.
pub fn size_scaling(acres: f64) -> f64 {
    if acres <= 1.0 {
        SMALL_LOT_PREMIUM - 0.05 * acres
    } else if acres <= MODERATE_LOT_LIMIT {
        1.0 - 0.03 * acres.ln()
    } else {
        (1.0 - 0.08 * acres.ln()).max(LARGE_LOT_FLOOR)
    }
}
