//! System clipboard adapter backed by `arboard`.

use codex_core::ClipboardAdapter;
use tracing::warn;

/// Lazily opened OS clipboard.
///
/// Opening is attempted once; when the platform has no clipboard every read
/// returns `None` and writes are dropped.
#[derive(Default)]
pub(crate) struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    unavailable: bool,
}

impl SystemClipboard {
    fn handle(&mut self) -> Option<&mut arboard::Clipboard> {
        if self.inner.is_none() && !self.unavailable {
            match arboard::Clipboard::new() {
                Ok(clipboard) => self.inner = Some(clipboard),
                Err(err) => {
                    warn!(error = %err, "system clipboard unavailable");
                    self.unavailable = true;
                }
            }
        }
        self.inner.as_mut()
    }
}

impl ClipboardAdapter for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        // Non-text and non-UTF-8 content surfaces as an arboard error.
        let text = self.handle()?.get_text().ok()?;
        (!text.is_empty()).then_some(text)
    }

    fn set_text(&mut self, text: &str) {
        let Some(clipboard) = self.handle() else {
            return;
        };
        if let Err(err) = clipboard.set_text(text) {
            warn!(error = %err, "failed to write system clipboard");
        }
    }
}
