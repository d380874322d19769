//! Rope-backed text storage for editable fields.

use ropey::Rope;
use std::ops::Range;

/// Scalar-value addressed text buffer with a mutation revision counter.
#[derive(Clone, Debug, Default)]
pub struct TextBuffer {
    rope: Rope,
    revision: u64,
}

impl TextBuffer {
    /// Create a new buffer from UTF-8 text.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            revision: 0,
        }
    }

    /// Returns a borrowed rope handle.
    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Returns the current revision; bumps on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the content length in chars.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// True when the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Returns the char at `char_index`, if in bounds.
    pub fn char_at(&self, char_index: usize) -> Option<char> {
        self.rope.get_char(char_index)
    }

    /// Returns a UTF-8 snapshot of the whole buffer.
    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }

    /// Replace the full buffer text.
    pub fn reset(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.revision = self.revision.wrapping_add(1);
    }

    /// Returns a UTF-8 snapshot for the given char range, clamped to the buffer.
    pub fn slice_chars(&self, range: Range<usize>) -> String {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    /// Insert text at the given char position.
    ///
    /// # Returns
    /// Number of chars inserted.
    pub fn insert_text(&mut self, char_index: usize, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        let start = char_index.min(self.len_chars());
        self.rope.insert(start, text);
        self.revision = self.revision.wrapping_add(1);
        text.chars().count()
    }

    /// Delete a char range, clamped to the buffer.
    ///
    /// # Returns
    /// Number of chars removed.
    pub fn delete_char_range(&mut self, range: Range<usize>) -> usize {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if start >= end {
            return 0;
        }
        self.rope.remove(start..end);
        self.revision = self.revision.wrapping_add(1);
        end - start
    }

    /// Char index just after the last `\n` before `char_index`, or 0.
    pub fn logical_line_start(&self, char_index: usize) -> usize {
        let mut idx = char_index.min(self.len_chars());
        while idx > 0 && self.rope.char(idx - 1) != '\n' {
            idx -= 1;
        }
        idx
    }

    /// Char index of the next `\n` at or after `char_index`, or the buffer end.
    pub fn logical_line_end(&self, char_index: usize) -> usize {
        let len = self.len_chars();
        let mut idx = char_index.min(len);
        while idx < len && self.rope.char(idx) != '\n' {
            idx += 1;
        }
        idx
    }
}
