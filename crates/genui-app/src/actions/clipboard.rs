//! System clipboard access

use genui_core::prelude::*;

/// Write-only clipboard
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSink: Send {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard backed by `arboard`
///
/// The platform handle is opened lazily and reopened after a failure, so a
/// missing display at startup does not disable copying for the whole session.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| Error::clipboard(format!("Clipboard unavailable: {}", e)))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| Error::clipboard("Clipboard unavailable"))
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .finish()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let result = self
            .handle()?
            .set_text(text.to_string())
            .map_err(|e| Error::clipboard(e.to_string()));

        match result {
            Ok(()) => {
                debug!("Copied {} bytes to clipboard", text.len());
                Ok(())
            }
            Err(e) => {
                self.inner = None;
                Err(e)
            }
        }
    }
}
