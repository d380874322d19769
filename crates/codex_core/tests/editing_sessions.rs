//! Headless frame-driven editing workflows against an in-memory clipboard.

use codex_core::text_edit::{
    EditKey, EditSession, EditState, FieldGeometry, FieldRect, FrameInput, FrameOutcome,
    MemoryClipboard, MonospaceMeasurer, PointerPress, WrapLayout,
};
use codex_core::{ClipboardAdapter, EditorConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MONO: MonospaceMeasurer = MonospaceMeasurer { char_width: 9.0 };
const PAD: f32 = 8.0;

struct Harness {
    config: EditorConfig,
    clipboard: MemoryClipboard,
    state: EditState,
    geometry: FieldGeometry,
}

impl Harness {
    // Text width 106 - 2 * 8 = 90 px: ten monospace columns.
    fn multiline(text: &str) -> Self {
        Self::with_geometry(
            text,
            FieldGeometry::multiline(FieldRect::new(0.0, 0.0, 106.0, 400.0), false),
        )
    }

    fn single_line(text: &str) -> Self {
        Self::with_geometry(
            text,
            FieldGeometry::single_line(FieldRect::new(0.0, 0.0, 106.0, 34.0)),
        )
    }

    fn with_geometry(text: &str, geometry: FieldGeometry) -> Self {
        Self {
            config: EditorConfig::default(),
            clipboard: MemoryClipboard::default(),
            state: EditState::new(text),
            geometry,
        }
    }

    fn frame(&mut self, input: FrameInput) -> FrameOutcome {
        self.frame_with_focus(input, true)
    }

    fn frame_with_focus(&mut self, input: FrameInput, focused: bool) -> FrameOutcome {
        let mut session = EditSession::new(&self.config, &MONO, &mut self.clipboard);
        session.update(&mut self.state, &self.geometry, &input, focused)
    }

    fn idle_frame(&mut self) {
        self.frame(FrameInput::default());
    }

    fn layout(&mut self) -> WrapLayout {
        let session = EditSession::new(&self.config, &MONO, &mut self.clipboard);
        session
            .display_layout(&mut self.state, &self.geometry)
            .into_owned()
    }
}

fn click(local_x: f32, local_y: f32) -> FrameInput {
    FrameInput::default().with_click(local_x + PAD, local_y + PAD)
}

fn keys(keys: impl IntoIterator<Item = EditKey>) -> FrameInput {
    FrameInput::default().with_keys(keys)
}

#[test]
fn click_then_type_inserts_at_the_clicked_offset() {
    let mut h = Harness::multiline("The quick brown fox");
    let outcome = h.frame(click(20.0, 20.0));
    assert!(outcome.clicked);
    assert!(!outcome.text_changed);
    assert_eq!(h.state.cursor(), 12);

    let outcome = h.frame(FrameInput::default().with_text("X"));
    assert!(outcome.text_changed);
    assert_eq!(h.state.text(), "The quick brXown fox");
    assert_eq!(h.state.cursor(), 13);
}

#[test]
fn shift_click_extends_and_plain_click_clears_selection() {
    let mut h = Harness::multiline("The quick brown fox");
    h.frame(click(0.0, 1.0).with_shift());
    assert_eq!(h.state.selection_range(), Some(0..19));
    assert_eq!(h.state.selected_text(), "The quick brown fox");

    h.frame(click(30.0, 1.0));
    assert_eq!(h.state.selection_anchor(), None);
    assert_eq!(h.state.cursor(), 3);
}

#[test]
fn press_outside_the_field_is_ignored() {
    let mut h = Harness::single_line("abc");
    let outcome = h.frame(FrameInput::default().with_click(500.0, 5.0));
    assert!(!outcome.clicked);
    assert_eq!(h.state.cursor(), 3);
}

#[test]
fn select_all_copy_cut_paste_round_trip() {
    let mut h = Harness::single_line("Hello world");
    h.frame(keys([EditKey::A]).with_ctrl());
    assert_eq!(h.state.selection_range(), Some(0..11));

    let outcome = h.frame(keys([EditKey::C]).with_ctrl());
    assert!(outcome.copied);
    assert!(!outcome.text_changed);

    let outcome = h.frame(keys([EditKey::X]).with_ctrl());
    assert!(outcome.cut);
    assert!(outcome.text_changed);
    assert_eq!(h.state.text(), "");

    let outcome = h.frame(keys([EditKey::V]).with_ctrl());
    assert!(outcome.pasted);
    assert_eq!(h.state.text(), "Hello world");
    assert_eq!(h.state.cursor(), 11);
}

#[test]
fn copy_without_selection_leaves_clipboard_alone() {
    let mut h = Harness::single_line("abc");
    h.clipboard.set_text("kept");
    let outcome = h.frame(keys([EditKey::C]).with_ctrl());
    assert!(!outcome.copied);
    assert_eq!(h.clipboard.get_text(), Some("kept".to_string()));
}

#[test]
fn ctrl_combo_suppresses_literal_characters() {
    let mut h = Harness::single_line("");
    h.clipboard.set_raw(Some(b"clip".to_vec()));
    h.frame(keys([EditKey::V]).with_ctrl().with_text("v"));
    assert_eq!(h.state.text(), "clip");

    h.frame(FrameInput::default().with_ctrl().with_text("q"));
    assert_eq!(h.state.text(), "clip");
}

#[test]
fn single_line_paste_flattens_newlines() {
    let mut h = Harness::single_line("x");
    h.clipboard.set_raw(Some(b"a\r\nb\nc".to_vec()));
    h.frame(keys([EditKey::V]).with_ctrl());
    assert_eq!(h.state.text(), "xa b c");
}

#[test]
fn multiline_paste_keeps_newlines() {
    let mut h = Harness::multiline("x");
    h.clipboard.set_raw(Some(b"a\nb".to_vec()));
    h.frame(keys([EditKey::V]).with_ctrl());
    assert_eq!(h.state.text(), "xa\nb");
    assert_eq!(h.state.cursor(), 4);
}

#[test]
fn non_utf8_clipboard_pastes_nothing() {
    let mut h = Harness::multiline("safe");
    h.clipboard.set_raw(Some(vec![0xff, 0xfe, 0x00]));
    let outcome = h.frame(keys([EditKey::V]).with_ctrl());
    assert!(!outcome.pasted);
    assert!(!outcome.text_changed);
    assert_eq!(h.state.text(), "safe");
}

#[test]
fn holding_backspace_repeats_after_the_delay() {
    let mut h = Harness::single_line(&"a".repeat(30));
    let mut fired = Vec::new();
    for frame in 0..=30 {
        if h.frame(keys([EditKey::Backspace])).text_changed {
            fired.push(frame);
        }
    }
    assert_eq!(fired, vec![0, 26, 28, 30]);
    assert_eq!(h.state.len_chars(), 26);
}

#[test]
fn losing_focus_resets_the_repeat_counter() {
    let mut h = Harness::single_line(&"a".repeat(10));
    for _ in 0..5 {
        h.frame(keys([EditKey::Backspace]));
    }
    assert_eq!(h.state.len_chars(), 9);
    h.frame_with_focus(keys([EditKey::Backspace]), false);
    assert_eq!(h.state.len_chars(), 9);
    assert!(h.frame(keys([EditKey::Backspace])).text_changed);
    assert_eq!(h.state.len_chars(), 8);
}

#[test]
fn enter_only_breaks_lines_in_multiline_fields() {
    let mut single = Harness::single_line("ab");
    single.frame(keys([EditKey::Enter]));
    assert_eq!(single.state.text(), "ab");

    let mut multi = Harness::multiline("ab");
    multi.frame(keys([EditKey::Enter]));
    assert_eq!(multi.state.text(), "ab\n");
    assert_eq!(multi.state.cursor(), 3);
}

#[test]
fn arrow_keys_walk_wrapped_rows_and_clamp_columns() {
    let mut h = Harness::multiline("The quick brown fox\nhi");
    let layout = h.layout();
    assert_eq!(layout.lines(), ["The quick", "brown fox", "hi"]);
    assert_eq!(layout.line_starts(), [0, 10, 20]);

    h.frame(click(63.0, 20.0));
    assert_eq!(h.state.cursor(), 17);
    h.frame(keys([EditKey::ArrowDown]));
    assert_eq!(h.state.cursor(), 22);
    h.idle_frame();
    h.frame(keys([EditKey::ArrowUp]));
    assert_eq!(h.state.cursor(), 12);
    h.idle_frame();
    h.frame(keys([EditKey::ArrowUp]).with_shift());
    assert_eq!(h.state.cursor(), 2);
    assert_eq!(h.state.selected_text(), "e quick br");
}

#[test]
fn ctrl_arrows_jump_by_words() {
    let mut h = Harness::single_line("foo bar baz");
    h.frame(keys([EditKey::ArrowLeft]).with_ctrl());
    assert_eq!(h.state.cursor(), 8);
    h.idle_frame();
    h.frame(keys([EditKey::ArrowLeft]).with_ctrl());
    assert_eq!(h.state.cursor(), 4);
    h.idle_frame();
    h.frame(keys([EditKey::ArrowRight]).with_ctrl().with_shift());
    assert_eq!(h.state.cursor(), 8);
    assert_eq!(h.state.selected_text(), "bar ");
    h.idle_frame();
    h.frame(keys([EditKey::Backspace]));
    assert_eq!(h.state.text(), "foo baz");
}

#[test]
fn caret_blinks_and_typing_shows_it_again() {
    let mut h = Harness::single_line("");
    h.frame(FrameInput::default().with_dt(0.3));
    assert!(h.state.caret_visible());
    h.frame(FrameInput::default().with_dt(0.3));
    assert!(!h.state.caret_visible());
    h.frame(FrameInput::default().with_text("x").with_dt(0.3));
    assert!(h.state.caret_visible());
}

fn random_frame(rng: &mut StdRng, len: usize) -> FrameInput {
    const KEYS: [EditKey; 13] = [
        EditKey::A,
        EditKey::C,
        EditKey::V,
        EditKey::X,
        EditKey::Enter,
        EditKey::Backspace,
        EditKey::Delete,
        EditKey::ArrowLeft,
        EditKey::ArrowRight,
        EditKey::ArrowUp,
        EditKey::ArrowDown,
        EditKey::Home,
        EditKey::End,
    ];
    const ALPHABET: [char; 8] = ['a', 'b', ' ', ' ', 'é', '€', 'z', '\n'];

    let mut input = FrameInput::default().with_dt(rng.gen_range(0.0..0.1));
    input.ctrl = rng.gen_bool(0.2);
    input.shift = rng.gen_bool(0.3);
    for key in KEYS {
        if rng.gen_bool(0.1) {
            input.held_keys.push(key);
        }
    }
    for _ in 0..rng.gen_range(0..3) {
        input.typed.push(ALPHABET[rng.gen_range(0..ALPHABET.len())]);
    }
    if rng.gen_bool(0.15) {
        let x = rng.gen_range(-10.0..120.0);
        let y = rng.gen_range(-10.0..(len as f32 * 2.0 + 40.0));
        input.pointer_pressed = Some(PointerPress { x, y });
    }
    input
}

fn assert_consistent(h: &mut Harness) {
    let len = h.state.len_chars();
    assert!(h.state.cursor() <= len);
    if let Some(anchor) = h.state.selection_anchor() {
        assert!(anchor <= len);
    }
    let selected = h.state.selected_text();
    let span = h.state.selection_range().map_or(0, |range| range.len());
    assert_eq!(selected.chars().count(), span);

    let text: Vec<char> = h.state.text().chars().collect();
    let layout = h.layout();
    assert_eq!(layout.line_starts()[0], 0);
    for (index, line) in layout.lines().iter().enumerate() {
        let start = layout.line_starts()[index];
        if index > 0 {
            assert!(layout.line_starts()[index - 1] <= start);
        }
        let expected: String = text[start..start + line.chars().count()].iter().collect();
        assert_eq!(line, &expected);
        if h.geometry.multiline && line.chars().count() > 1 {
            assert!(MONO.char_width * line.chars().count() as f32 <= 90.0);
        }
    }
}

#[test]
fn random_frames_preserve_offset_and_layout_invariants() {
    for seed in 0..8u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut h = if seed % 2 == 0 {
            Harness::multiline("The quick brown fox\njumps over the lazy dog")
        } else {
            Harness::single_line("single line seed text")
        };
        h.clipboard.set_raw(Some("pasted\nchunk".as_bytes().to_vec()));
        for _ in 0..300 {
            let input = random_frame(&mut rng, h.state.len_chars());
            let focused = rng.gen_bool(0.95);
            h.frame_with_focus(input, focused);
            assert_consistent(&mut h);
            if !h.geometry.multiline {
                assert!(!h.state.text().contains('\n'));
            }
        }
    }
}
