//! Plain-text clipboard seam.

/// Host clipboard access.
///
/// `get_text` returns `None` for empty, null, or non-text content; reads never
/// surface errors. `set_text` is last-writer-wins.
pub trait ClipboardAdapter {
    fn get_text(&mut self) -> Option<String>;
    fn set_text(&mut self, text: &str);
}

/// Decode raw clipboard bytes into pasteable text.
///
/// # Returns
/// `None` when the clipboard is null, empty, or not valid UTF-8.
pub fn text_from_clipboard_bytes(raw: Option<&[u8]>) -> Option<String> {
    let bytes = raw?;
    match std::str::from_utf8(bytes) {
        Ok(text) if !text.is_empty() => Some(text.to_string()),
        Ok(_) => None,
        Err(err) => {
            tracing::debug!(
                valid_up_to = err.valid_up_to(),
                "dropping non-UTF-8 clipboard content"
            );
            None
        }
    }
}

/// Flatten multi-line clipboard text for a single-line field.
///
/// Newlines become spaces and carriage returns are dropped.
pub fn flatten_for_single_line(text: &str) -> String {
    text.chars()
        .filter(|ch| *ch != '\r')
        .map(|ch| if ch == '\n' { ' ' } else { ch })
        .collect()
}

/// In-process clipboard holding raw bytes; used by headless hosts and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<Vec<u8>>,
}

impl MemoryClipboard {
    /// Replace the clipboard with arbitrary bytes, valid UTF-8 or not.
    pub fn set_raw(&mut self, bytes: Option<Vec<u8>>) {
        self.contents = bytes;
    }
}

impl ClipboardAdapter for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        text_from_clipboard_bytes(self.contents.as_deref())
    }

    fn set_text(&mut self, text: &str) {
        self.contents = Some(text.as_bytes().to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_empty_and_invalid_bytes_read_as_none() {
        assert_eq!(text_from_clipboard_bytes(None), None);
        assert_eq!(text_from_clipboard_bytes(Some(b"")), None);
        assert_eq!(text_from_clipboard_bytes(Some(&[0x66, 0xff, 0x6f])), None);
        assert_eq!(
            text_from_clipboard_bytes(Some("héllo".as_bytes())),
            Some("héllo".to_string())
        );
    }

    #[test]
    fn memory_clipboard_round_trips_text_and_rejects_garbage() {
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(clipboard.get_text(), None);
        clipboard.set_text("copied");
        assert_eq!(clipboard.get_text(), Some("copied".to_string()));
        clipboard.set_raw(Some(vec![0xc3, 0x28]));
        assert_eq!(clipboard.get_text(), None);
    }

    #[test]
    fn flattening_replaces_newlines_and_drops_carriage_returns() {
        assert_eq!(flatten_for_single_line("one\r\ntwo\nthree"), "one two three");
        assert_eq!(flatten_for_single_line("plain"), "plain");
    }
}
