use std::time::Instant;

use crate::ui::mvi::Intent;
use crate::ui::notice::state::NoticeLevel;

#[derive(Debug, Clone)]
pub enum NoticeIntent {
    /// Show `message` until `expires_at`, replacing any current notice.
    Show {
        message: String,
        level: NoticeLevel,
        expires_at: Instant,
    },
    /// Clock advanced; hides the notice once it has expired.
    Tick { now: Instant },
    Dismiss,
}

impl Intent for NoticeIntent {}
