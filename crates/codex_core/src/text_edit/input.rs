//! Per-frame input snapshot and the reducer that turns it into edit commands.

use super::key_repeat::{EditKey, KeyRepeat, KeyRepeatTimings};

/// Pointer press location in screen coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPress {
    pub x: f32,
    pub y: f32,
}

/// Raw signals the host samples once per frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Primary-button press this frame, if any.
    pub pointer_pressed: Option<PointerPress>,
    pub ctrl: bool,
    pub shift: bool,
    /// Keys currently held down.
    pub held_keys: Vec<EditKey>,
    /// Characters typed since the previous frame, in order.
    pub typed: Vec<char>,
    /// Seconds since the previous frame.
    pub dt: f32,
}

impl FrameInput {
    /// Returns true when `key` is held this frame.
    pub fn is_held(&self, key: EditKey) -> bool {
        self.held_keys.contains(&key)
    }

    pub fn with_keys(mut self, keys: impl IntoIterator<Item = EditKey>) -> Self {
        self.held_keys.extend(keys);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.typed.extend(text.chars());
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_click(mut self, x: f32, y: f32) -> Self {
        self.pointer_pressed = Some(PointerPress { x, y });
        self
    }

    pub fn with_dt(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }
}

/// Normalized commands consumed by the editing session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditCommand {
    SelectAll,
    Copy,
    Cut,
    Paste,
    InsertText(String),
    InsertNewline,
    Backspace { word: bool },
    DeleteForward { word: bool },
    MoveLeft { select: bool, word: bool },
    MoveRight { select: bool, word: bool },
    MoveHome { select: bool },
    MoveEnd { select: bool },
    MoveUp { select: bool },
    MoveDown { select: bool },
}

const COMBO_KEYS: [(EditKey, EditCommand); 4] = [
    (EditKey::A, EditCommand::SelectAll),
    (EditKey::C, EditCommand::Copy),
    (EditKey::X, EditCommand::Cut),
    (EditKey::V, EditCommand::Paste),
];

/// Reduce one frame of input into commands, advancing key-repeat counters.
///
/// Ctrl combinations come first and suppress typed characters for the frame.
/// Edit and navigation keys follow in a fixed order; Enter, Up, and Down are
/// only polled for multi-line fields.
pub fn commands_for_frame(
    input: &FrameInput,
    repeat: &mut KeyRepeat,
    timings: KeyRepeatTimings,
    multiline: bool,
) -> Vec<EditCommand> {
    let mut out = Vec::new();
    let mut fires = |key: EditKey| repeat.poll(key, input.is_held(key), timings);

    if input.ctrl {
        for (key, command) in COMBO_KEYS {
            if fires(key) {
                out.push(command);
            }
        }
    } else {
        let text: String = input.typed.iter().filter(|ch| !ch.is_control()).collect();
        if !text.is_empty() {
            out.push(EditCommand::InsertText(text));
        }
    }

    let select = input.shift;
    let word = input.ctrl;
    if multiline && fires(EditKey::Enter) {
        out.push(EditCommand::InsertNewline);
    }
    if fires(EditKey::Backspace) {
        out.push(EditCommand::Backspace { word });
    }
    if fires(EditKey::Delete) {
        out.push(EditCommand::DeleteForward { word });
    }
    if fires(EditKey::ArrowLeft) {
        out.push(EditCommand::MoveLeft { select, word });
    }
    if fires(EditKey::ArrowRight) {
        out.push(EditCommand::MoveRight { select, word });
    }
    if fires(EditKey::Home) {
        out.push(EditCommand::MoveHome { select });
    }
    if fires(EditKey::End) {
        out.push(EditCommand::MoveEnd { select });
    }
    if multiline {
        if fires(EditKey::ArrowUp) {
            out.push(EditCommand::MoveUp { select });
        }
        if fires(EditKey::ArrowDown) {
            out.push(EditCommand::MoveDown { select });
        }
    }

    if !input.ctrl {
        for (key, _) in COMBO_KEYS {
            repeat.release(key);
        }
    }
    out
}
