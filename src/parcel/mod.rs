//! Parcel data model
//!
//! ## Architecture
//! - `region.rs` - Region profiles and the fixed baseline table
//! - `inputs.rs` - Location, region and acreage entered by the user
//! - `factors.rs` - The four adjustable multipliers and their bounds

pub mod region;
pub mod inputs;
pub mod factors;

// Re-export public API
pub use region::{Region, FALLBACK_BASELINE};
pub use inputs::Inputs;
pub use factors::{FactorKind, Factors};
