//! Clipboard access.
//!
//! The finder treats the clipboard as a write-only sink. Writes are
//! best-effort: callers log failures and move on.

use icondex_core::{Error, Result};
use tracing::warn;

/// Something that can receive copied text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard backed by `arboard`.
///
/// The handle is kept for the whole session. On X11 and Wayland the copied
/// text is served by this process, so dropping the handle early would lose it.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                warn!(error = %err, "system clipboard unavailable");
                None
            }
        };
        Self { inner }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let clipboard = self
            .inner
            .as_mut()
            .ok_or_else(|| Error::Clipboard("no clipboard available".to_string()))?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

/// In-memory clipboard, used when no system clipboard is wanted.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    history: Vec<String>,
    fail: bool,
}

impl MemoryClipboard {
    /// A clipboard whose writes always fail.
    pub fn failing() -> Self {
        Self {
            history: Vec::new(),
            fail: true,
        }
    }

    pub fn last(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(Error::Clipboard("write rejected".to_string()));
        }
        self.history.push(text.to_string());
        Ok(())
    }
}
