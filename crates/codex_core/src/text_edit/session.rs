//! Per-frame orchestration of pointer, keyboard, clipboard, and blink handling.

use super::clipboard::{flatten_for_single_line, ClipboardAdapter};
use super::geometry::{field_content_height, FieldGeometry};
use super::input::{commands_for_frame, EditCommand, FrameInput};
use super::mapping::{
    click_to_offset, line_col_to_offset, offset_to_line_col, single_line_scroll,
};
use super::measure::TextMeasurer;
use super::state::EditState;
use super::words::{word_left, word_right};
use super::wrap::WrapLayout;
use crate::config::EditorConfig;
use std::borrow::Cow;

/// What happened during one [`EditSession::update`] or command application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// The expand button was pressed; the host may open a larger editor
    /// backed by the same [`EditState`].
    pub request_expand: bool,
    pub text_changed: bool,
    pub copied: bool,
    pub cut: bool,
    pub pasted: bool,
    /// A press inside the field moved the caret.
    pub clicked: bool,
}

impl FrameOutcome {
    fn merge(&mut self, other: FrameOutcome) {
        self.request_expand |= other.request_expand;
        self.text_changed |= other.text_changed;
        self.copied |= other.copied;
        self.cut |= other.cut;
        self.pasted |= other.pasted;
        self.clicked |= other.clicked;
    }
}

/// Borrowed collaborators needed to drive one or more fields for a frame.
pub struct EditSession<'a, M: ?Sized, C: ?Sized> {
    config: &'a EditorConfig,
    measurer: &'a M,
    clipboard: &'a mut C,
}

impl<'a, M, C> EditSession<'a, M, C>
where
    M: TextMeasurer + ?Sized,
    C: ClipboardAdapter + ?Sized,
{
    pub fn new(config: &'a EditorConfig, measurer: &'a M, clipboard: &'a mut C) -> Self {
        Self {
            config,
            measurer,
            clipboard,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        self.config
    }

    pub fn measurer(&self) -> &M {
        self.measurer
    }

    /// Run one frame for a single field.
    ///
    /// Focus is synced from `focused` first. The expand button is hit-tested
    /// even while idle; everything else only runs while focused, in order:
    /// pointer press, keyboard commands, blink timer.
    pub fn update(
        &mut self,
        state: &mut EditState,
        geometry: &FieldGeometry,
        input: &FrameInput,
        focused: bool,
    ) -> FrameOutcome {
        if focused {
            state.grant_focus();
        } else {
            state.release_focus();
        }

        let revision = state.buffer().revision();
        let mut outcome = FrameOutcome::default();
        let expand_hit = input.pointer_pressed.is_some_and(|press| {
            geometry
                .expand_button()
                .is_some_and(|button| button.contains(press.x, press.y))
        });
        outcome.request_expand = expand_hit;

        if !state.is_focused() {
            return outcome;
        }

        if let Some(press) = input.pointer_pressed.filter(|_| !expand_hit) {
            if geometry.rect.contains(press.x, press.y) {
                let (origin_x, origin_y) = geometry.text_origin(self.config.padding);
                let offset =
                    self.offset_at(state, geometry, press.x - origin_x, press.y - origin_y);
                state.move_cursor(offset, input.shift);
                outcome.clicked = true;
            }
        }

        let commands = commands_for_frame(
            input,
            state.key_repeat_mut(),
            self.config.key_repeat(),
            geometry.multiline,
        );
        for command in &commands {
            outcome.merge(self.apply(state, geometry, command));
        }

        state.advance_blink(input.dt, self.config.caret_blink_period);
        state.debug_check_invariants();
        outcome.text_changed = state.buffer().revision() != revision;
        outcome
    }

    /// Apply one command outside the frame loop, e.g. from a context menu.
    pub fn apply_command(
        &mut self,
        state: &mut EditState,
        geometry: &FieldGeometry,
        command: &EditCommand,
    ) -> FrameOutcome {
        let revision = state.buffer().revision();
        let mut outcome = self.apply(state, geometry, command);
        outcome.text_changed = state.buffer().revision() != revision;
        outcome
    }

    fn apply(
        &mut self,
        state: &mut EditState,
        geometry: &FieldGeometry,
        command: &EditCommand,
    ) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();
        match command {
            EditCommand::SelectAll => state.select_all(),
            EditCommand::Copy => {
                let selected = state.selected_text();
                if !selected.is_empty() {
                    self.clipboard.set_text(&selected);
                    outcome.copied = true;
                    tracing::debug!(chars = selected.chars().count(), "copied selection");
                }
            }
            EditCommand::Cut => {
                let selected = state.selected_text();
                if !selected.is_empty() {
                    self.clipboard.set_text(&selected);
                    state.delete_selection();
                    outcome.cut = true;
                    tracing::debug!(chars = selected.chars().count(), "cut selection");
                }
            }
            EditCommand::Paste => match self.clipboard.get_text() {
                Some(text) => {
                    let text = if geometry.multiline {
                        text
                    } else {
                        flatten_for_single_line(&text)
                    };
                    if text.is_empty() {
                        tracing::debug!("paste skipped: nothing left after flattening");
                    } else {
                        state.insert(&text);
                        outcome.pasted = true;
                        tracing::debug!(chars = text.chars().count(), "pasted clipboard text");
                    }
                }
                None => tracing::debug!("paste skipped: clipboard has no text"),
            },
            EditCommand::InsertText(text) => state.insert(text),
            EditCommand::InsertNewline => state.insert("\n"),
            EditCommand::Backspace { word } => {
                state.delete_backward(*word);
                state.reset_blink();
            }
            EditCommand::DeleteForward { word } => {
                state.delete_forward(*word);
                state.reset_blink();
            }
            EditCommand::MoveLeft { select, word } => {
                let cursor = state.cursor();
                let target = if *word {
                    word_left(state.buffer().rope(), cursor)
                } else {
                    cursor.saturating_sub(1)
                };
                state.move_cursor(target, *select);
            }
            EditCommand::MoveRight { select, word } => {
                let cursor = state.cursor();
                let target = if *word {
                    word_right(state.buffer().rope(), cursor)
                } else {
                    (cursor + 1).min(state.len_chars())
                };
                state.move_cursor(target, *select);
            }
            EditCommand::MoveHome { select } => {
                let target = if geometry.multiline {
                    state.buffer().logical_line_start(state.cursor())
                } else {
                    0
                };
                state.move_cursor(target, *select);
            }
            EditCommand::MoveEnd { select } => {
                let target = if geometry.multiline {
                    state.buffer().logical_line_end(state.cursor())
                } else {
                    state.len_chars()
                };
                state.move_cursor(target, *select);
            }
            EditCommand::MoveUp { select } => {
                if let Some(target) = self.vertical_target(state, geometry, false) {
                    state.move_cursor(target, *select);
                }
            }
            EditCommand::MoveDown { select } => {
                if let Some(target) = self.vertical_target(state, geometry, true) {
                    state.move_cursor(target, *select);
                }
            }
        }
        outcome
    }

    /// Offset one wrapped row up or down, preserving the column.
    fn vertical_target(
        &self,
        state: &mut EditState,
        geometry: &FieldGeometry,
        down: bool,
    ) -> Option<usize> {
        if !geometry.multiline {
            return None;
        }
        let cursor = state.cursor();
        let layout = state.wrap_layout(
            geometry.text_width(self.config.padding),
            self.config.font_size,
            self.measurer,
        );
        let (line, col) = offset_to_line_col(cursor, layout);
        let target_line = if down {
            (line + 1 < layout.line_count()).then_some(line + 1)?
        } else {
            line.checked_sub(1)?
        };
        Some(line_col_to_offset(target_line, col, layout))
    }

    /// Resolve a point relative to the text origin to a char offset.
    pub fn offset_at(
        &self,
        state: &mut EditState,
        geometry: &FieldGeometry,
        local_x: f32,
        local_y: f32,
    ) -> usize {
        let font_size = self.config.font_size;
        if geometry.multiline {
            let layout = state.wrap_layout(
                geometry.text_width(self.config.padding),
                font_size,
                self.measurer,
            );
            return click_to_offset(
                local_x,
                local_y,
                layout,
                self.config.line_height,
                true,
                font_size,
                self.measurer,
            );
        }
        let scroll = self.horizontal_scroll(state, geometry);
        let layout = WrapLayout::single_line(&state.text());
        click_to_offset(
            local_x + scroll,
            local_y,
            &layout,
            self.config.line_height,
            false,
            font_size,
            self.measurer,
        )
    }

    /// Lines to render: wrapped for multi-line fields, the whole text otherwise.
    pub fn display_layout<'s>(
        &self,
        state: &'s mut EditState,
        geometry: &FieldGeometry,
    ) -> Cow<'s, WrapLayout> {
        if geometry.multiline {
            Cow::Borrowed(state.wrap_layout(
                geometry.text_width(self.config.padding),
                self.config.font_size,
                self.measurer,
            ))
        } else {
            Cow::Owned(WrapLayout::single_line(&state.text()))
        }
    }

    /// Horizontal scroll keeping a single-line caret visible; 0 for multi-line.
    pub fn horizontal_scroll(&self, state: &EditState, geometry: &FieldGeometry) -> f32 {
        if geometry.multiline {
            return 0.0;
        }
        let prefix = state.buffer().slice_chars(0..state.cursor());
        let cursor_px = self.measurer.measure(&prefix, self.config.font_size);
        single_line_scroll(cursor_px, geometry.text_width(self.config.padding))
    }

    /// Caret top-left relative to the text origin, scroll applied.
    pub fn caret_position(&self, state: &mut EditState, geometry: &FieldGeometry) -> (f32, f32) {
        let scroll = self.horizontal_scroll(state, geometry);
        let cursor = state.cursor();
        let layout = self.display_layout(state, geometry);
        let (line, col) = offset_to_line_col(cursor, &layout);
        let prefix: String = layout.line(line).chars().take(col).collect();
        let x = self.measurer.measure(&prefix, self.config.font_size) - scroll;
        (x, line as f32 * self.config.line_height)
    }

    /// Pixel height needed to show every wrapped line of `state`.
    pub fn content_height(&self, state: &EditState, geometry: &FieldGeometry, min_height: f32) -> f32 {
        field_content_height(
            &state.text(),
            geometry.rect.width,
            min_height,
            geometry.multiline,
            geometry.expandable,
            self.measurer,
            self.config,
        )
    }
}
