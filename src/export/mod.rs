//! Export and share adapters
//!
//! Both consume a `Summary` and never feed anything back into the engine.
//! - `record.rs` - JSON download record
//! - `share.rs` - Native share with clipboard fallback

pub mod record;
pub mod share;

pub use record::{ExportRecord, DEFAULT_EXPORT_FILE_NAME};
pub use share::{
    share_summary, share_text, Clipboard, NativeShare, Notifier, ShareOutcome, SharePayload,
    COPIED_NOTICE, COPY_FAILED_NOTICE, SHARE_TITLE,
};
