//! Share Flow
//!
//! Try the host's native share first. If there is none, or it fails, copy the
//! same text plus the URL to the clipboard and tell the user. Nothing here is
//! ever fatal; the caller gets a `ShareOutcome` describing which path ran.

use crate::error::ShareError;
use crate::summary::Summary;
use crate::utils::format_acres;

/// Title passed to native share sheets
pub const SHARE_TITLE: &str = "Land Value Estimate";

/// Notification after a successful clipboard fallback
pub const COPIED_NOTICE: &str = "Link copied to clipboard";

/// Notification when neither path worked
pub const COPY_FAILED_NOTICE: &str = "Could not share or copy the estimate";

/// What gets handed to a share target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn from_summary(summary: &Summary, url: &str) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: share_text(summary),
            url: url.to_string(),
        }
    }

    /// Text placed on the clipboard: share text, newline, URL
    pub fn clipboard_text(&self) -> String {
        format!("{}\n{}", self.text, self.url)
    }
}

/// Host share sheet
pub trait NativeShare {
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Host clipboard
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ShareError>;
}

/// Transient user-visible message
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Which share path ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Native share accepted the payload
    Shared,

    /// Native share missing or failed, text copied to clipboard
    CopiedToClipboard { native_error: ShareError },

    /// Clipboard also failed, user was only notified
    NotifiedOnly {
        native_error: ShareError,
        clipboard_error: ShareError,
    },
}

impl ShareOutcome {
    /// Whether the estimate left the app by some path
    pub fn delivered(&self) -> bool {
        !matches!(self, ShareOutcome::NotifiedOnly { .. })
    }
}

/// Two-line share text
///
/// "Estimated land value: $275,828\nAcreage: 0.5 ac"
pub fn share_text(summary: &Summary) -> String {
    format!(
        "Estimated land value: ${}\nAcreage: {} ac",
        summary.estimate_display(),
        format_acres(summary.acres)
    )
}

/// Run the share flow with clipboard fallback
pub fn share_summary(
    summary: &Summary,
    url: &str,
    native: Option<&dyn NativeShare>,
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
) -> ShareOutcome {
    let payload = SharePayload::from_summary(summary, url);

    let native_error = match native {
        Some(target) => match target.share(&payload) {
            Ok(()) => {
                tracing::info!("Shared estimate via native share");
                return ShareOutcome::Shared;
            }
            Err(e) => e,
        },
        None => ShareError::Unavailable,
    };
    tracing::warn!("Native share did not complete ({}), falling back to clipboard", native_error);

    match clipboard.write_text(&payload.clipboard_text()) {
        Ok(()) => {
            notifier.notify(COPIED_NOTICE);
            ShareOutcome::CopiedToClipboard { native_error }
        }
        Err(clipboard_error) => {
            tracing::warn!("Clipboard fallback failed: {}", clipboard_error);
            notifier.notify(COPY_FAILED_NOTICE);
            ShareOutcome::NotifiedOnly {
                native_error,
                clipboard_error,
            }
        }
    }
}
