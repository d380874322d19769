//! Conversions between flat offsets, wrapped (line, column) pairs, and pixels.

use super::measure::TextMeasurer;
use super::wrap::WrapLayout;
use crate::constants::SINGLE_LINE_SCROLL_MARGIN;
use std::ops::Range;

/// Map a flat char offset to its wrapped `(line, column)`.
///
/// Picks the last line starting at or before `offset`, so an offset on a wrap
/// boundary lands at the start of the following line. The column is clamped
/// to the line length.
pub fn offset_to_line_col(offset: usize, layout: &WrapLayout) -> (usize, usize) {
    let starts = layout.line_starts();
    let line = starts.partition_point(|start| *start <= offset).saturating_sub(1);
    let col = offset
        .saturating_sub(layout.line_start(line))
        .min(layout.line_len(line));
    (line, col)
}

/// Map a wrapped `(line, column)` back to a flat offset.
///
/// Out-of-range lines clamp to the last line; columns clamp to the line length.
pub fn line_col_to_offset(line: usize, col: usize, layout: &WrapLayout) -> usize {
    let line = line.min(layout.line_count().saturating_sub(1));
    layout.line_start(line) + col.min(layout.line_len(line))
}

/// Column of `line` nearest to pixel `x`, snapping at glyph midpoints.
pub fn x_to_column<M>(line: &str, x: f32, font_size: u32, measurer: &M) -> usize
where
    M: TextMeasurer + ?Sized,
{
    if x <= 0.0 {
        return 0;
    }
    let mut column = 0usize;
    let mut prefix_width = 0.0f32;
    for (byte, ch) in line.char_indices() {
        let next_width = measurer.measure(&line[..byte + ch.len_utf8()], font_size);
        if x < (prefix_width + next_width) / 2.0 {
            return column;
        }
        prefix_width = next_width;
        column += 1;
    }
    column
}

/// Resolve a click at `(x, y)`, relative to the text origin, to a flat offset.
///
/// Multi-line fields pick the row under `y`; single-line fields always use
/// the first line.
pub fn click_to_offset<M>(
    x: f32,
    y: f32,
    layout: &WrapLayout,
    line_height: f32,
    multiline: bool,
    font_size: u32,
    measurer: &M,
) -> usize
where
    M: TextMeasurer + ?Sized,
{
    let line = if multiline && y > 0.0 && line_height > 0.0 {
        ((y / line_height).floor() as usize).min(layout.line_count().saturating_sub(1))
    } else {
        0
    };
    layout.line_start(line) + x_to_column(layout.line(line), x, font_size, measurer)
}

/// Columns of a wrapped line covered by `selection`, if any.
pub fn selection_span_for_line(
    selection: Range<usize>,
    line_start: usize,
    line_len: usize,
) -> Option<Range<usize>> {
    let line_end = line_start + line_len;
    if selection.start >= line_end || selection.end <= line_start {
        return None;
    }
    let start = selection.start.saturating_sub(line_start);
    let end = (selection.end - line_start).min(line_len);
    (start < end).then_some(start..end)
}

/// Horizontal scroll that keeps the caret of a single-line field visible.
pub fn single_line_scroll(cursor_px: f32, max_text_width: f32) -> f32 {
    if cursor_px > max_text_width {
        cursor_px - max_text_width + SINGLE_LINE_SCROLL_MARGIN
    } else {
        0.0
    }
}
