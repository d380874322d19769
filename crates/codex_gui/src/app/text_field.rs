//! egui glue for engine-driven text fields: measurement, input sampling, painting.

use super::style::{
    selection_fill_color, COLOR_ACCENT, COLOR_BG_SECONDARY, COLOR_BG_TERTIARY, COLOR_BORDER,
    COLOR_TEXT_PRIMARY, COLOR_TEXT_SECONDARY,
};
use codex_core::text_edit::{
    selection_span_for_line, ClipboardAdapter, EditKey, EditSession, EditState, FieldGeometry,
    FieldRect, FrameInput, PointerPress, TextMeasurer,
};
use eframe::egui::{self, Align2, Color32, FontId, Stroke};

/// Measures text with the context's proportional font.
pub(crate) struct EguiMeasurer {
    ctx: egui::Context,
}

impl EguiMeasurer {
    pub(crate) fn new(ctx: &egui::Context) -> Self {
        Self { ctx: ctx.clone() }
    }
}

impl TextMeasurer for EguiMeasurer {
    fn measure(&self, text: &str, font_size: u32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.ctx.fonts_mut(|fonts| {
            fonts
                .layout_no_wrap(text.to_owned(), field_font(font_size), Color32::WHITE)
                .size()
                .x
        })
    }
}

pub(crate) fn field_font(font_size: u32) -> FontId {
    FontId::proportional(font_size as f32)
}

const KEY_MAP: [(egui::Key, EditKey); 13] = [
    (egui::Key::A, EditKey::A),
    (egui::Key::C, EditKey::C),
    (egui::Key::V, EditKey::V),
    (egui::Key::X, EditKey::X),
    (egui::Key::Enter, EditKey::Enter),
    (egui::Key::Backspace, EditKey::Backspace),
    (egui::Key::Delete, EditKey::Delete),
    (egui::Key::ArrowLeft, EditKey::ArrowLeft),
    (egui::Key::ArrowRight, EditKey::ArrowRight),
    (egui::Key::ArrowUp, EditKey::ArrowUp),
    (egui::Key::ArrowDown, EditKey::ArrowDown),
    (egui::Key::Home, EditKey::Home),
    (egui::Key::End, EditKey::End),
];

/// Engine key for an egui key, if the engine handles it.
pub(crate) fn edit_key_for(key: egui::Key) -> Option<EditKey> {
    KEY_MAP
        .iter()
        .find(|(egui_key, _)| *egui_key == key)
        .map(|(_, edit_key)| *edit_key)
}

/// Characters from this frame's text events, in order.
pub(crate) fn typed_chars(events: &[egui::Event]) -> Vec<char> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Text(text) => Some(text.chars()),
            _ => None,
        })
        .flatten()
        .collect()
}

/// Combo key for the clipboard events the platform layer emits in place of
/// Ctrl/Cmd+C, X, and V key presses.
pub(crate) fn clipboard_event_key(event: &egui::Event) -> Option<EditKey> {
    match event {
        egui::Event::Copy => Some(EditKey::C),
        egui::Event::Cut => Some(EditKey::X),
        egui::Event::Paste(_) => Some(EditKey::V),
        _ => None,
    }
}

/// Sample pointer, modifier, held-key, and text state for one frame.
///
/// Paste events carry text, but the engine reads the clipboard itself so
/// keyboard and context-menu pastes share one path.
pub(crate) fn frame_input_from_egui(ctx: &egui::Context) -> FrameInput {
    ctx.input(|input| {
        let mut frame = FrameInput::default().with_dt(input.stable_dt);
        frame.ctrl = input.modifiers.command || input.modifiers.ctrl;
        frame.shift = input.modifiers.shift;
        if input.pointer.primary_pressed() {
            frame.pointer_pressed = input
                .pointer
                .interact_pos()
                .map(|pos| PointerPress { x: pos.x, y: pos.y });
        }
        frame.held_keys = KEY_MAP
            .iter()
            .filter(|(key, _)| input.key_down(*key))
            .map(|(_, edit_key)| *edit_key)
            .collect();
        for key in input.events.iter().filter_map(clipboard_event_key) {
            frame.ctrl = true;
            if !frame.held_keys.contains(&key) {
                frame.held_keys.push(key);
            }
        }
        frame.typed = typed_chars(&input.events);
        frame
    })
}

pub(crate) fn field_rect(rect: egui::Rect) -> FieldRect {
    FieldRect::new(rect.min.x, rect.min.y, rect.width(), rect.height())
}

fn egui_rect(rect: FieldRect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(rect.x, rect.y),
        egui::vec2(rect.width, rect.height),
    )
}

fn char_prefix(line: &str, chars: usize) -> &str {
    match line.char_indices().nth(chars) {
        Some((byte, _)) => &line[..byte],
        None => line,
    }
}

/// Paint background, selection, text, caret, and expand button for one field.
pub(crate) fn paint_field<M, C>(
    ui: &egui::Ui,
    session: &EditSession<'_, M, C>,
    state: &mut EditState,
    geometry: &FieldGeometry,
    focused: bool,
) where
    M: TextMeasurer + ?Sized,
    C: ClipboardAdapter + ?Sized,
{
    let config = session.config();
    let measurer = session.measurer();
    let rect = egui_rect(geometry.rect);
    let painter = ui.painter_at(rect);
    let border = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    painter.rect_filled(rect, 4.0, COLOR_BG_TERTIARY);
    painter.rect_stroke(rect, 4.0, Stroke::new(1.0, border), egui::StrokeKind::Inside);

    let (origin_x, origin_y) = geometry.text_origin(config.padding);
    let text_area = egui::Rect::from_min_size(
        egui::pos2(origin_x, origin_y),
        egui::vec2(
            geometry.text_width(config.padding),
            (geometry.rect.height - config.padding * 2.0).max(config.line_height),
        ),
    );
    let text_painter = painter.with_clip_rect(text_area.intersect(rect));
    let font = field_font(config.font_size);
    let scroll = session.horizontal_scroll(state, geometry);
    let selection = state.selection_range();
    let layout = session.display_layout(state, geometry).into_owned();

    for (index, line) in layout.lines().iter().enumerate() {
        let x = origin_x - scroll;
        let y = origin_y + index as f32 * config.line_height;
        let span = selection.clone().and_then(|selection| {
            selection_span_for_line(selection, layout.line_start(index), layout.line_len(index))
        });
        if let Some(span) = span {
            let left = measurer.measure(char_prefix(line, span.start), config.font_size);
            let right = measurer.measure(char_prefix(line, span.end), config.font_size);
            let highlight = egui::Rect::from_min_max(
                egui::pos2(x + left, y),
                egui::pos2(x + right.max(left + 1.0), y + config.line_height),
            );
            text_painter.rect_filled(highlight, 2.0, selection_fill_color());
        }
        text_painter.text(
            egui::pos2(x, y),
            Align2::LEFT_TOP,
            line,
            font.clone(),
            COLOR_TEXT_PRIMARY,
        );
    }

    if focused && state.caret_visible() {
        let (caret_x, caret_y) = session.caret_position(state, geometry);
        let top = egui::pos2(origin_x + caret_x, origin_y + caret_y);
        text_painter.line_segment(
            [top, top + egui::vec2(0.0, config.line_height)],
            Stroke::new(1.0, COLOR_TEXT_PRIMARY),
        );
    }

    if let Some(button) = geometry.expand_button() {
        let button = egui_rect(button);
        painter.rect_filled(button, 3.0, COLOR_BG_SECONDARY);
        painter.text(
            button.center(),
            Align2::CENTER_CENTER,
            "+",
            FontId::proportional(14.0),
            COLOR_TEXT_SECONDARY,
        );
    }
}
