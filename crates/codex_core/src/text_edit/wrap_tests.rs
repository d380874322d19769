//! Regression and correctness tests for word-wrap layout.

use super::*;
use crate::text_edit::measure::MonospaceMeasurer;

const MONO: MonospaceMeasurer = MonospaceMeasurer { char_width: 9.0 };

fn reconstruct(text: &str, layout: &WrapLayout) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    for (idx, line) in layout.lines().iter().enumerate() {
        out.push_str(line);
        let end = layout.line_starts()[idx] + layout.line_len(idx);
        let next_start = layout
            .line_starts()
            .get(idx + 1)
            .copied()
            .unwrap_or(chars.len());
        // Whatever sits between two lines must be the separator the break consumed.
        for ch in &chars[end..next_start] {
            out.push(*ch);
        }
    }
    out
}

#[test]
fn wraps_sentence_at_last_space() {
    let layout = wrap_text("The quick brown fox", 90.0, 16, &MONO);
    assert_eq!(layout.lines(), ["The quick", "brown fox"]);
    assert_eq!(layout.line_starts(), [0, 10]);
}

#[test]
fn empty_text_yields_single_empty_line() {
    let layout = wrap_text("", 90.0, 16, &MONO);
    assert_eq!(layout.lines(), [""]);
    assert_eq!(layout.line_starts(), [0]);
    assert_eq!(layout, WrapLayout::default());
}

#[test]
fn explicit_newlines_start_new_paragraphs() {
    let layout = wrap_text("ab\n\ncd\n", 90.0, 16, &MONO);
    assert_eq!(layout.lines(), ["ab", "", "cd", ""]);
    assert_eq!(layout.line_starts(), [0, 3, 4, 7]);
}

#[test]
fn unbreakable_run_wraps_per_character() {
    let layout = wrap_text("abcdefghij", 36.0, 16, &MONO);
    assert_eq!(layout.lines(), ["abcd", "efgh", "ij"]);
    assert_eq!(layout.line_starts(), [0, 4, 8]);
}

#[test]
fn overwide_single_character_is_never_split_further() {
    let layout = wrap_text("abc", 4.0, 16, &MONO);
    assert_eq!(layout.lines(), ["a", "b", "c"]);
    assert_eq!(layout.line_starts(), [0, 1, 2]);
}

#[test]
fn leading_space_is_not_used_as_a_break_point() {
    let layout = wrap_text(" abcdef", 36.0, 16, &MONO);
    assert_eq!(layout.lines(), [" abc", "def"]);
    assert_eq!(layout.line_starts(), [0, 4]);
}

#[test]
fn space_break_followed_by_hard_break_in_long_word() {
    // "ab cdefgh" at 4 columns: break on the space after "ab", then "cdefgh" hard-wraps.
    let layout = wrap_text("ab cdefgh", 36.0, 16, &MONO);
    assert_eq!(layout.lines(), ["ab", "cdef", "gh"]);
    assert_eq!(layout.line_starts(), [0, 3, 7]);
    for idx in 0..layout.line_count() {
        assert!(MONO.measure(layout.line(idx), 16) <= 36.0);
    }
}

#[test]
fn multibyte_text_uses_char_offsets() {
    let layout = wrap_text("héllo wörld", 54.0, 16, &MONO);
    assert_eq!(layout.lines(), ["héllo", "wörld"]);
    assert_eq!(layout.line_starts(), [0, 6]);
    assert_eq!(layout.line_len(1), 5);
}

#[test]
fn wrapping_is_deterministic_and_reconstructs_source() {
    let samples = [
        "The quick brown fox jumps over the lazy dog",
        "  spaced   out  words ",
        "line one\nline two is longer than the width\n\nend",
        "supercalifragilisticexpialidocious and more",
    ];
    for text in samples {
        for width in [9.0, 27.0, 45.0, 90.0, 400.0] {
            let first = wrap_text(text, width, 16, &MONO);
            let second = wrap_text(text, width, 16, &MONO);
            assert_eq!(first, second);
            assert_eq!(reconstruct(text, &first), text, "width {}", width);
            for idx in 0..first.line_count() {
                let line = first.line(idx);
                assert!(
                    line.chars().count() <= 1 || MONO.measure(line, 16) <= width,
                    "line {:?} overflows {}",
                    line,
                    width
                );
            }
        }
    }
}

#[test]
fn cache_rebuilds_only_when_keys_change() {
    let mut buffer = TextBuffer::new("The quick brown fox");
    let mut cache = WrapLayoutCache::default();
    assert!(cache.needs_rebuild(buffer.revision(), 90.0, 16));
    assert_eq!(cache.layout_for(&buffer, 90.0, 16, &MONO).line_count(), 2);
    assert!(!cache.needs_rebuild(buffer.revision(), 90.0, 16));
    assert!(cache.needs_rebuild(buffer.revision(), 91.0, 16));
    assert!(cache.needs_rebuild(buffer.revision(), 90.0, 18));

    buffer.insert_text(19, " jumps");
    assert!(cache.needs_rebuild(buffer.revision(), 90.0, 16));
    let layout = cache.layout_for(&buffer, 90.0, 16, &MONO);
    assert_eq!(layout.lines(), ["The quick", "brown fox", "jumps"]);

    cache.invalidate();
    assert!(cache.needs_rebuild(buffer.revision(), 90.0, 16));
}
