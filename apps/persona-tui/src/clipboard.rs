//! Best-effort system clipboard access

use tracing::warn;

/// System clipboard using arboard, initialized on first use.
///
/// Clipboard access is best-effort: failures (no display server, denied
/// access) are logged and swallowed, never surfaced as a UI error state.
#[derive(Default)]
pub struct ClipboardHandle {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy text to the system clipboard, verbatim.
    ///
    /// Returns whether the write succeeded; callers are free to ignore it.
    pub fn copy(&mut self, text: &str) -> bool {
        let clipboard = match self.ensure() {
            Ok(clipboard) => clipboard,
            Err(err) => {
                warn!("clipboard unavailable: {err}");
                return false;
            }
        };

        match clipboard.set_text(text.to_string()) {
            Ok(()) => true,
            Err(err) => {
                warn!("clipboard write failed: {err}");
                false
            }
        }
    }

    fn ensure(&mut self) -> Result<&mut arboard::Clipboard, arboard::Error> {
        match &mut self.inner {
            Some(clipboard) => Ok(clipboard),
            slot => {
                let clipboard = arboard::Clipboard::new()?;
                Ok(slot.insert(clipboard))
            }
        }
    }
}
