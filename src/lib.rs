//! Land Value Estimator
//!
//! Deterministic, explainable land value estimates from a few parcel
//! attributes, collected through a four-step guided flow.
//!
//! Modules:
//! - `parcel/`: Region profiles, parcel inputs and adjustable factors
//! - `engine/`: Size scaling, estimate and confidence formulas
//! - `summary/`: Summary projection plus JSON/markdown formatters
//! - `wizard/`: Step sequencing with draft commit and line commands
//! - `export/`: Download record and share flow with clipboard fallback
//! - `utils/`: Rounding and number formatting
//!
//! Everything in `engine` and `summary` is pure and synchronous.

pub mod utils;
pub mod parcel;
pub mod engine;
pub mod summary;
pub mod wizard;
pub mod export;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use parcel::{FactorKind, Factors, Inputs, Region};
pub use engine::{compute_estimate, explain_estimate, size_scaling, Estimate, EstimateBreakdown};
pub use summary::{project, Summary};
pub use wizard::{WizardStateMachine, WizardStep};
pub use export::{share_summary, share_text, ExportRecord, ShareOutcome};
pub use config::EstimatorConfig;
pub use error::{ConfigError, ShareError};
