//! Text, caret, selection, blink, and focus state for one editable field.

use super::buffer::TextBuffer;
use super::key_repeat::KeyRepeat;
use super::mapping::offset_to_line_col;
use super::measure::TextMeasurer;
use super::words::{word_left, word_right};
use super::wrap::{WrapLayout, WrapLayoutCache};
use std::ops::Range;

/// Whether the owning field currently accepts input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusState {
    /// Not focused; the model is frozen.
    #[default]
    Idle,
    Focused,
}

/// Accumulating caret blink timer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaretBlink {
    elapsed: f32,
    visible: bool,
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            visible: true,
        }
    }
}

impl CaretBlink {
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Show the caret and restart the period.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Accumulate `dt` seconds, toggling visibility once a period has elapsed.
    pub fn advance(&mut self, dt: f32, period: f32) {
        self.elapsed += dt.max(0.0);
        if self.elapsed >= period {
            self.elapsed = 0.0;
            self.visible = !self.visible;
        }
    }
}

/// Mutable editing state owned by a single text field.
///
/// Offsets are char (Unicode scalar value) indices. After every mutator
/// `cursor <= len` and any selection anchor is `<= len`.
#[derive(Clone, Debug, Default)]
pub struct EditState {
    buffer: TextBuffer,
    cursor: usize,
    selection_anchor: Option<usize>,
    blink: CaretBlink,
    key_repeat: KeyRepeat,
    focus: FocusState,
    wrap_cache: WrapLayoutCache,
}

impl EditState {
    /// Create state for `text` with the caret at the end.
    pub fn new(text: &str) -> Self {
        let buffer = TextBuffer::new(text);
        let cursor = buffer.len_chars();
        Self {
            buffer,
            cursor,
            ..Self::default()
        }
    }

    /// Returns a UTF-8 snapshot of the text.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Returns the underlying buffer.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Text length in chars.
    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Returns the caret position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the fixed end of the selection, if one is active.
    pub fn selection_anchor(&self) -> Option<usize> {
        self.selection_anchor
    }

    /// Normalized selection range; may be empty when anchor equals cursor.
    pub fn selection_range(&self) -> Option<Range<usize>> {
        let anchor = self.selection_anchor?;
        Some(anchor.min(self.cursor)..anchor.max(self.cursor))
    }

    /// True when a non-empty selection is active.
    pub fn has_selection(&self) -> bool {
        self.selection_range().is_some_and(|range| !range.is_empty())
    }

    /// Selected text, or `""` without a selection.
    pub fn selected_text(&self) -> String {
        self.selection_range()
            .map(|range| self.buffer.slice_chars(range))
            .unwrap_or_default()
    }

    /// True when the caret should be drawn this frame.
    pub fn caret_visible(&self) -> bool {
        self.blink.visible()
    }

    pub fn focus(&self) -> FocusState {
        self.focus
    }

    pub fn is_focused(&self) -> bool {
        self.focus == FocusState::Focused
    }

    /// Idle -> Focused.
    pub fn grant_focus(&mut self) {
        if self.focus == FocusState::Focused {
            return;
        }
        self.focus = FocusState::Focused;
        self.key_repeat.reset();
        self.blink.reset();
    }

    /// Focused -> Idle; text, caret, and selection are kept.
    pub fn release_focus(&mut self) {
        if self.focus == FocusState::Idle {
            return;
        }
        self.focus = FocusState::Idle;
        self.key_repeat.reset();
        self.blink.reset();
    }

    /// Replace the whole text, collapsing the selection and clamping the caret.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.reset(text);
        self.selection_anchor = None;
        self.cursor = self.cursor.min(self.buffer.len_chars());
        self.debug_check_invariants();
    }

    /// Insert `text` at the caret, replacing any selection.
    pub fn insert(&mut self, text: &str) {
        self.delete_selection();
        let inserted = self.buffer.insert_text(self.cursor, text);
        self.cursor += inserted;
        self.selection_anchor = None;
        self.blink.reset();
        self.debug_check_invariants();
    }

    /// Remove the selected text and collapse the caret to its start.
    ///
    /// # Returns
    /// `false` when there was no non-empty selection; an empty selection is
    /// simply dropped.
    pub fn delete_selection(&mut self) -> bool {
        let Some(range) = self.selection_range() else {
            return false;
        };
        self.selection_anchor = None;
        if range.is_empty() {
            return false;
        }
        self.buffer.delete_char_range(range.clone());
        self.cursor = range.start;
        self.debug_check_invariants();
        true
    }

    /// Backspace: delete the selection, else one char or one word left of the caret.
    ///
    /// # Returns
    /// `true` when text changed.
    pub fn delete_backward(&mut self, word_mode: bool) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        let start = if word_mode {
            word_left(self.buffer.rope(), self.cursor)
        } else {
            self.cursor - 1
        };
        let removed = self.buffer.delete_char_range(start..self.cursor);
        self.cursor = start;
        self.debug_check_invariants();
        removed > 0
    }

    /// Delete: delete the selection, else one char or one word right of the caret.
    ///
    /// # Returns
    /// `true` when text changed.
    pub fn delete_forward(&mut self, word_mode: bool) -> bool {
        if self.delete_selection() {
            return true;
        }
        let len = self.buffer.len_chars();
        if self.cursor >= len {
            return false;
        }
        let end = if word_mode {
            word_right(self.buffer.rope(), self.cursor)
        } else {
            self.cursor + 1
        };
        let removed = self.buffer.delete_char_range(self.cursor..end.min(len));
        self.debug_check_invariants();
        removed > 0
    }

    /// Select the entire text with the caret at the end.
    pub fn select_all(&mut self) {
        self.selection_anchor = Some(0);
        self.cursor = self.buffer.len_chars();
        self.debug_check_invariants();
    }

    /// Drop the selection, keeping the caret in place.
    pub fn clear_selection(&mut self) {
        self.selection_anchor = None;
    }

    /// Move the caret to `target`, clamped to the text.
    ///
    /// With `extend`, a selection is anchored at the old caret when none
    /// exists yet; without it any selection is cleared.
    pub fn move_cursor(&mut self, target: usize, extend: bool) {
        if extend {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.cursor);
            }
        } else {
            self.selection_anchor = None;
        }
        self.cursor = target.min(self.buffer.len_chars());
        self.blink.reset();
        self.debug_check_invariants();
    }

    /// Show the caret and restart its blink period.
    pub fn reset_blink(&mut self) {
        self.blink.reset();
    }

    /// Advance the blink timer by `dt` seconds.
    pub fn advance_blink(&mut self, dt: f32, period: f32) {
        self.blink.advance(dt, period);
    }

    pub(crate) fn key_repeat_mut(&mut self) -> &mut KeyRepeat {
        &mut self.key_repeat
    }

    /// Wrapped layout of the current text, rebuilt only when stale.
    pub fn wrap_layout<M>(&mut self, max_width: f32, font_size: u32, measurer: &M) -> &WrapLayout
    where
        M: TextMeasurer + ?Sized,
    {
        self.wrap_cache
            .layout_for(&self.buffer, max_width, font_size, measurer)
    }

    /// Caret position as a wrapped `(line, column)`.
    pub fn caret_line_col(&self, layout: &WrapLayout) -> (usize, usize) {
        offset_to_line_col(self.cursor, layout)
    }

    /// Assert offset invariants in debug builds.
    pub fn debug_check_invariants(&self) {
        let len = self.buffer.len_chars();
        debug_assert!(
            self.cursor <= len,
            "cursor {} past text length {}",
            self.cursor,
            len
        );
        debug_assert!(
            self.selection_anchor.map_or(true, |anchor| anchor <= len),
            "selection anchor {:?} past text length {}",
            self.selection_anchor,
            len
        );
    }
}
