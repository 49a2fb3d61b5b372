//! Utility modules for estimation
//!
//! Contains shared functionality used across the engine, wizard and formatters:
//! - Rounding: Acreage clamping and one-decimal rounding
//! - Formatting: Thousands grouping and acreage display

pub mod rounding;
pub mod formatting;

// Re-export commonly used helpers
pub use rounding::{clamp_acres, round_to_tenth, MIN_ACRES};
pub use formatting::{format_acres, format_acres_grouped, group_thousands};
