use std::time::Instant;

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient message shown above the footer, dismissed on its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NoticeState {
    #[default]
    Hidden,
    Visible {
        message: String,
        level: NoticeLevel,
        expires_at: Instant,
    },
}

impl UiState for NoticeState {}

impl NoticeState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Visible { message, .. } => Some(message.as_str()),
            Self::Hidden => None,
        }
    }

    pub fn level(&self) -> Option<NoticeLevel> {
        match self {
            Self::Visible { level, .. } => Some(*level),
            Self::Hidden => None,
        }
    }
}
