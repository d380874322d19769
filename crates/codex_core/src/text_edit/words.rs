//! Word-boundary scanning for Ctrl-modified motion and deletion.

use ropey::Rope;

fn is_separator(ch: char) -> bool {
    ch == ' ' || ch == '\n'
}

/// Start of the word to the left of `pos`.
///
/// Steps over the character just left of `pos`, then any run of spaces, then
/// the word itself. Returns 0 at or before the buffer start.
pub fn word_left(text: &Rope, pos: usize) -> usize {
    let mut idx = pos.min(text.len_chars());
    if idx == 0 {
        return 0;
    }
    idx -= 1;
    while idx > 0 && text.char(idx) == ' ' {
        idx -= 1;
    }
    while idx > 0 && !is_separator(text.char(idx - 1)) {
        idx -= 1;
    }
    idx
}

/// End of the word at or right of `pos`, including trailing spaces.
///
/// A position sitting on a newline steps over that newline only. Returns
/// `len(text)` at or past the buffer end.
pub fn word_right(text: &Rope, pos: usize) -> usize {
    let len = text.len_chars();
    if pos >= len {
        return len;
    }
    let mut idx = pos;
    if text.char(idx) == '\n' {
        return idx + 1;
    }
    while idx < len && !is_separator(text.char(idx)) {
        idx += 1;
    }
    while idx < len && text.char(idx) == ' ' {
        idx += 1;
    }
    idx
}
