//! Pixel-width word wrapping with a line-start offset map.
//!
//! Breaks never consume characters other than the single space a word-wrap
//! break lands on, so line contents plus the implied separators always
//! reconstruct the source text.

use super::buffer::TextBuffer;
use super::measure::TextMeasurer;

/// Wrapped display lines of a text buffer and where each one starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrapLayout {
    lines: Vec<String>,
    line_starts: Vec<usize>,
    line_lens: Vec<usize>,
}

impl Default for WrapLayout {
    fn default() -> Self {
        let mut layout = Self::empty();
        layout.push_line(String::new(), 0, 0);
        layout
    }
}

impl WrapLayout {
    fn empty() -> Self {
        Self {
            lines: Vec::new(),
            line_starts: Vec::new(),
            line_lens: Vec::new(),
        }
    }

    fn push_line(&mut self, line: String, start: usize, len: usize) {
        self.lines.push(line);
        self.line_starts.push(start);
        self.line_lens.push(len);
    }

    /// Layout that keeps the whole text on one unwrapped line.
    ///
    /// Used for single-line fields, which scroll horizontally instead of wrapping.
    pub fn single_line(text: &str) -> Self {
        let mut layout = Self::empty();
        layout.push_line(text.to_string(), 0, text.chars().count());
        layout
    }

    /// Wrapped line contents, top to bottom.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Char offset of each line's first character in the source text.
    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }

    /// Number of wrapped lines; always at least one.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of a wrapped line, or `""` when out of range.
    pub fn line(&self, index: usize) -> &str {
        self.lines.get(index).map(String::as_str).unwrap_or("")
    }

    /// Start offset of a wrapped line, clamped to the last line.
    pub fn line_start(&self, index: usize) -> usize {
        let index = index.min(self.line_count().saturating_sub(1));
        self.line_starts.get(index).copied().unwrap_or(0)
    }

    /// Char length of a wrapped line, or 0 when out of range.
    pub fn line_len(&self, index: usize) -> usize {
        self.line_lens.get(index).copied().unwrap_or(0)
    }

    /// Assert structural invariants in debug builds.
    pub fn debug_check_invariants(&self) {
        debug_assert!(!self.lines.is_empty(), "wrap layout has no lines");
        debug_assert_eq!(self.line_starts.first().copied(), Some(0));
        debug_assert!(
            self.line_starts.windows(2).all(|pair| pair[0] <= pair[1]),
            "wrap layout line starts are not monotonic: {:?}",
            self.line_starts
        );
        debug_assert!(self
            .lines
            .iter()
            .zip(&self.line_lens)
            .all(|(line, len)| line.chars().count() == *len));
    }
}

/// Wrap `text` into lines no wider than `max_width` pixels.
///
/// Paragraphs split on `\n` wrap independently; an empty paragraph yields one
/// empty line. An overflowing line breaks at its last space when one exists
/// past the first column, otherwise right before the overflowing character.
/// A single character wider than `max_width` still occupies its own line.
pub fn wrap_text<M>(text: &str, max_width: f32, font_size: u32, measurer: &M) -> WrapLayout
where
    M: TextMeasurer + ?Sized,
{
    if text.is_empty() {
        return WrapLayout::default();
    }
    let mut layout = WrapLayout::empty();
    let mut paragraph_start = 0usize;
    for paragraph in text.split('\n') {
        let paragraph_chars = wrap_paragraph(
            paragraph,
            paragraph_start,
            max_width,
            font_size,
            measurer,
            &mut layout,
        );
        paragraph_start += paragraph_chars + 1;
    }
    layout.debug_check_invariants();
    layout
}

fn wrap_paragraph<M>(
    paragraph: &str,
    paragraph_start: usize,
    max_width: f32,
    font_size: u32,
    measurer: &M,
    layout: &mut WrapLayout,
) -> usize
where
    M: TextMeasurer + ?Sized,
{
    let mut current = String::new();
    let mut current_chars = 0usize;
    let mut line_start = paragraph_start;
    let mut consumed = 0usize;

    for ch in paragraph.chars() {
        consumed += 1;
        loop {
            current.push(ch);
            if current_chars == 0 || measurer.measure(&current, font_size) <= max_width {
                current_chars += 1;
                break;
            }
            current.pop();
            match last_space(&current) {
                Some((space_byte, space_col)) if space_col > 0 => {
                    let tail = current[space_byte + 1..].to_string();
                    current.truncate(space_byte);
                    layout.push_line(std::mem::take(&mut current), line_start, space_col);
                    line_start += space_col + 1;
                    current_chars -= space_col + 1;
                    current = tail;
                }
                _ => {
                    layout.push_line(std::mem::take(&mut current), line_start, current_chars);
                    line_start += current_chars;
                    current_chars = 0;
                }
            }
        }
    }

    layout.push_line(current, line_start, current_chars);
    consumed
}

/// Byte and char position of the last `' '` in `line`.
fn last_space(line: &str) -> Option<(usize, usize)> {
    let (byte, _) = line.char_indices().rev().find(|(_, c)| *c == ' ')?;
    Some((byte, line[..byte].chars().count()))
}

/// Lazily rebuilt wrap layout keyed by text revision and geometry.
#[derive(Clone, Debug, Default)]
pub struct WrapLayoutCache {
    revision: u64,
    max_width_bits: u32,
    font_size: u32,
    valid: bool,
    layout: WrapLayout,
}

impl WrapLayoutCache {
    /// Returns `true` when cache keys no longer match the requested layout.
    pub fn needs_rebuild(&self, revision: u64, max_width: f32, font_size: u32) -> bool {
        !self.valid
            || self.revision != revision
            || self.max_width_bits != max_width.to_bits()
            || self.font_size != font_size
    }

    /// Drop the cached layout so the next request rebuilds it.
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Return the layout for `buffer`, rebuilding it when stale.
    pub fn layout_for<M>(
        &mut self,
        buffer: &TextBuffer,
        max_width: f32,
        font_size: u32,
        measurer: &M,
    ) -> &WrapLayout
    where
        M: TextMeasurer + ?Sized,
    {
        if self.needs_rebuild(buffer.revision(), max_width, font_size) {
            self.layout = wrap_text(&buffer.to_string(), max_width, font_size, measurer);
            self.revision = buffer.revision();
            self.max_width_bits = max_width.to_bits();
            self.font_size = font_size;
            self.valid = true;
            tracing::trace!(
                revision = self.revision,
                lines = self.layout.line_count(),
                "rebuilt wrap layout"
            );
        }
        &self.layout
    }
}

#[cfg(test)]
#[path = "wrap_tests.rs"]
mod tests;
