//! System clipboard as a share destination.

use arboard::Clipboard;

use crate::share::{ShareError, ShareTarget};

/// Copies share text to the system clipboard.
///
/// The clipboard is opened on first use and kept open afterwards; on some
/// platforms the copied text disappears once the handle is dropped.
#[derive(Default)]
pub struct ClipboardShareTarget {
    clipboard: Option<Clipboard>,
}

impl ClipboardShareTarget {
    pub fn new() -> Self {
        Self::default()
    }

    fn clipboard(&mut self) -> Result<&mut Clipboard, ShareError> {
        if self.clipboard.is_none() {
            let clipboard = Clipboard::new().map_err(|e| ShareError::NoDestination {
                reason: format!("Failed to open clipboard: {}", e),
            })?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard.as_mut().ok_or_else(|| ShareError::NoDestination {
            reason: "Clipboard unavailable".to_string(),
        })
    }
}

impl ShareTarget for ClipboardShareTarget {
    fn share(&mut self, text: &str) -> Result<(), ShareError> {
        let result = self.clipboard()?.set_text(text.to_string());
        result.map_err(|e| {
            // A failed write usually means the handle went stale.
            self.clipboard = None;
            ShareError::NoDestination {
                reason: format!("Failed to set clipboard text: {}", e),
            }
        })
    }

    fn name(&self) -> &'static str {
        "clipboard"
    }
}
