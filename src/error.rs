//! Typed errors at the collaborator and configuration boundaries
//!
//! The engine itself never fails. These only describe what can go wrong when
//! talking to the host (share sheet, clipboard) or reading configuration.

use thiserror::Error;

/// Failure of a native share or clipboard attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("native share is not available on this host")]
    Unavailable,

    #[error("share was cancelled by the user")]
    Cancelled,

    #[error("clipboard access denied: {0}")]
    ClipboardDenied(String),

    #[error("share target failed: {0}")]
    Failed(String),
}

/// Invalid configuration value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("export file name must not be empty")]
    EmptyFileName,

    #[error("export file name '{0}' must not contain a path separator")]
    FileNameHasSeparator(String),
}
