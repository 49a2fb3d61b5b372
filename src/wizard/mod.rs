//! Guided estimation flow
//!
//! ## Architecture
//! - `step.rs` - The four steps, ordering and progress display
//! - `machine.rs` - State machine owning inputs/factors with draft commit
//! - `command.rs` - Line command grammar for terminal sessions

pub mod step;
pub mod machine;
pub mod command;

// Re-export public API
pub use step::{render_progress, StepStatus, WizardStep};
pub use machine::WizardStateMachine;
pub use command::{apply_command, CommandEffect, CommandError, WizardCommand};
