//! Sharing the session totals with an outside destination.
//!
//! Sharing only reads session state. A missing destination is reported back
//! to the caller so the UI can show a transient notice.

use thiserror::Error;

use crate::session::SessionState;

/// User-facing message for [`ShareError::NoDestination`].
pub const SHARING_NOT_AVAILABLE: &str = "Sharing not available";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareError {
    #[error("No destination available to receive a share request: {reason}")]
    NoDestination { reason: String },
}

impl ShareError {
    /// Message suitable for a notice on screen.
    pub fn user_message(&self) -> &'static str {
        match self {
            ShareError::NoDestination { .. } => SHARING_NOT_AVAILABLE,
        }
    }
}

/// Something that can receive share text.
pub trait ShareTarget {
    /// Hand `text` to the destination.
    fn share(&mut self, text: &str) -> Result<(), ShareError>;

    /// Short name used in logs and confirmations.
    fn name(&self) -> &'static str;
}

/// Text shared for the given totals. Both numbers appear verbatim.
pub fn share_text(sold_count: u64, revenue: u64) -> String {
    format!(
        "I've clicked {} desserts for a total of ${} #DessertClicker",
        sold_count, revenue
    )
}

/// Format the totals from `state` and send them to `target`.
///
/// Returns the text that was shared.
pub fn share_session(
    state: &SessionState,
    target: &mut dyn ShareTarget,
) -> Result<String, ShareError> {
    let text = share_text(state.sold_count(), state.revenue());
    match target.share(&text) {
        Ok(()) => {
            tracing::info!(
                target_name = target.name(),
                sold = state.sold_count(),
                revenue = state.revenue(),
                "Session shared"
            );
            Ok(text)
        }
        Err(err) => {
            tracing::warn!(target_name = target.name(), error = %err, "Sharing unavailable");
            Err(err)
        }
    }
}
