// SPDX-License-Identifier: MPL-2.0
//! Desktop share backend.
//!
//! Desktop platforms have no share sheet reachable from here, so native
//! sharing always reports [`ShareError::Unsupported`].
//!
//! On X11 and Wayland the copied text is served by the clipboard instance that
//! set it, so the backend keeps that instance for its whole lifetime.

use crate::share::{ShareBackend, ShareError};
use std::fmt;
use std::sync::{Mutex, PoisonError};

#[derive(Default)]
pub struct SystemShareBackend {
    clipboard: Mutex<Option<arboard::Clipboard>>,
}

impl SystemShareBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn holds_clipboard(&self) -> bool {
        self.clipboard
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl fmt::Debug for SystemShareBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemShareBackend")
            .field("holds_clipboard", &self.holds_clipboard())
            .finish()
    }
}

impl ShareBackend for SystemShareBackend {
    fn native_share(&self, _title: &str, _text: &str, _url: &str) -> Result<(), ShareError> {
        Err(ShareError::Unsupported)
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError> {
        let mut slot = self.clipboard.lock().unwrap_or_else(PoisonError::into_inner);

        let clipboard = match slot.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(|e| ShareError::Failed(e.to_string()))?,
        };
        let clipboard = slot.insert(clipboard);

        clipboard
            .set_text(text)
            .map_err(|e| ShareError::Failed(e.to_string()))
    }

    fn open_in_browser(&self, url: &str) -> Result<(), ShareError> {
        tracing::debug!(url, "opening in browser");
        open::that(url).map_err(|e| ShareError::Failed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_share_is_unsupported_on_desktop() {
        let backend = SystemShareBackend::new();
        assert_eq!(
            backend.native_share("Nytårstalen", "text", "https://nytaarstale.dk/"),
            Err(ShareError::Unsupported)
        );
    }

    #[test]
    fn clipboard_outlives_the_copy() {
        let backend = SystemShareBackend::new();
        assert!(!backend.holds_clipboard());

        match backend.copy_to_clipboard("https://nytaarstale.dk/?year=2023") {
            Ok(()) => {
                assert!(backend.holds_clipboard());
                // A second copy reuses the retained instance.
                assert!(backend.copy_to_clipboard("https://nytaarstale.dk/").is_ok());
                assert!(backend.holds_clipboard());
            }
            // Headless environments have no clipboard to open.
            Err(err) => {
                assert!(matches!(err, ShareError::Failed(_)));
                assert!(!backend.holds_clipboard());
            }
        }
    }
}
