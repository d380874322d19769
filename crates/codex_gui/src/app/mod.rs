//! Demo entity form whose text fields run on the Codex editing engine.

mod clipboard;
mod style;
mod text_field;

use clipboard::SystemClipboard;
use codex_core::text_edit::{
    field_content_height, ClipboardAdapter, ContextMenuAction, EditSession, FieldGeometry,
    FrameInput,
};
use codex_core::{EditorConfig, FieldId, FieldKind, FieldStates};
use eframe::egui::{self, RichText};
use std::collections::HashMap;
use style::COLOR_TEXT_MUTED;
use text_field::{field_rect, frame_input_from_egui, paint_field, EguiMeasurer};
use tracing::{debug, info};

/// Initial native window size.
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [900.0, 680.0];
/// Minimum native window size.
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [560.0, 420.0];

const LABEL_WIDTH: f32 = 110.0;
const FIELD_MIN_HEIGHT: f32 = 34.0;
const MULTILINE_MIN_HEIGHT: f32 = 90.0;
const EXPANDED_EDITOR_SIZE: [f32; 2] = [760.0, 520.0];
const CONTEXT_MENU_WIDTH: f32 = 140.0;

struct FormField {
    id: FieldId,
    label: &'static str,
    kind: FieldKind,
    initial: &'static str,
}

impl FormField {
    fn new(id: &str, label: &'static str, kind: FieldKind, initial: &'static str) -> Self {
        Self {
            id: FieldId::from(id),
            label,
            kind,
            initial,
        }
    }

    fn geometry(&self, rect: egui::Rect) -> FieldGeometry {
        if self.kind.is_multiline() {
            FieldGeometry::multiline(field_rect(rect), true)
        } else {
            FieldGeometry::single_line(field_rect(rect))
        }
    }
}

fn demo_fields() -> Vec<FormField> {
    vec![
        FormField::new("name", "Name", FieldKind::Text, "Mira Voss"),
        FormField::new("aliases", "Aliases", FieldKind::Tags, "the cartographer, M.V."),
        FormField::new("age", "Age", FieldKind::Number, "34"),
        FormField::new("homepage", "Home", FieldKind::Link, "Harbor Ward"),
        FormField::new("portrait", "Portrait", FieldKind::MainImage, ""),
        FormField::new(
            "biography",
            "Biography",
            FieldKind::Multiline,
            "Raised above the harbor, Mira mapped every alley of the old town before she \
             turned sixteen.\nShe now keeps the guild's charts.",
        ),
    ]
}

struct ContextMenu {
    field: FieldId,
    pos: egui::Pos2,
    /// Sampled on the first frame the menu is shown.
    clipboard_has_text: Option<bool>,
}

impl ContextMenu {
    fn new(field: FieldId, pos: egui::Pos2) -> Self {
        Self {
            field,
            pos,
            clipboard_has_text: None,
        }
    }

    fn clipboard_has_text<C>(&mut self, clipboard: &mut C) -> bool
    where
        C: ClipboardAdapter + ?Sized,
    {
        *self
            .clipboard_has_text
            .get_or_insert_with(|| clipboard.get_text().is_some())
    }
}

/// Native egui application shell for the entity form.
pub(crate) struct CodexApp {
    config: EditorConfig,
    clipboard: SystemClipboard,
    fields: Vec<FormField>,
    states: FieldStates,
    /// Geometry each field was laid out with last frame.
    geometries: HashMap<FieldId, FieldGeometry>,
    focused: Option<FieldId>,
    expanded: Option<FieldId>,
    context_menu: Option<ContextMenu>,
    menu_rect: Option<egui::Rect>,
    style_applied: bool,
}

impl CodexApp {
    pub(crate) fn new(config: EditorConfig) -> Self {
        Self {
            config,
            clipboard: SystemClipboard::default(),
            fields: demo_fields(),
            states: FieldStates::new(),
            geometries: HashMap::new(),
            focused: None,
            expanded: None,
            context_menu: None,
            menu_rect: None,
            style_applied: false,
        }
    }

    fn field_at(&self, pos: egui::Pos2) -> Option<FieldId> {
        self.geometries
            .iter()
            .find(|(_, geometry)| geometry.rect.contains(pos.x, pos.y))
            .map(|(id, _)| id.clone())
    }

    /// Move focus from this frame's presses, using last frame's field layout.
    fn resolve_focus(&mut self, input: &mut FrameInput, secondary: Option<egui::Pos2>) {
        if let Some(press) = input.pointer_pressed {
            let pos = egui::pos2(press.x, press.y);
            if self.menu_rect.is_some_and(|rect| rect.contains(pos)) {
                input.pointer_pressed = None;
                return;
            }
            self.context_menu = None;
            self.set_focus(self.field_at(pos));
        }
        if let Some(pos) = secondary {
            if let Some(field) = self.field_at(pos) {
                self.set_focus(Some(field.clone()));
                self.context_menu = Some(ContextMenu::new(field, pos));
            }
        }
    }

    fn set_focus(&mut self, field: Option<FieldId>) {
        if self.focused != field {
            debug!(field = ?field.as_ref().map(|id| id.0.as_str()), "focus changed");
            self.focused = field;
        }
    }

    fn render_form(&mut self, ui: &mut egui::Ui, input: &FrameInput) {
        ui.heading("Character");
        ui.add_space(8.0);

        let measurer = EguiMeasurer::new(ui.ctx());
        let modal_open = self.expanded.is_some();
        let mut session = EditSession::new(&self.config, &measurer, &mut self.clipboard);
        let mut expand_request = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            for field in &self.fields {
                ui.horizontal_top(|ui| {
                    ui.add_sized([LABEL_WIDTH, FIELD_MIN_HEIGHT], egui::Label::new(field.label));
                    if !field.kind.is_text_editable() {
                        ui.label(
                            RichText::new(format!("{} fields use the image gallery", field.kind))
                                .color(COLOR_TEXT_MUTED),
                        );
                        return;
                    }

                    let state = self.states.get_or_create(&field.id, field.initial);
                    let multiline = field.kind.is_multiline();
                    let min_height = if multiline {
                        MULTILINE_MIN_HEIGHT
                    } else {
                        FIELD_MIN_HEIGHT
                    };
                    let width = ui.available_width().max(120.0);
                    let height = field_content_height(
                        &state.text(),
                        width,
                        min_height,
                        multiline,
                        multiline,
                        &measurer,
                        &self.config,
                    );
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());
                    let geometry = field.geometry(rect);
                    self.geometries.insert(field.id.clone(), geometry);

                    let focused = !modal_open && self.focused.as_ref() == Some(&field.id);
                    if !modal_open {
                        let outcome = session.update(state, &geometry, input, focused);
                        if outcome.request_expand {
                            expand_request = Some(field.id.clone());
                        }
                        if outcome.text_changed {
                            tracing::trace!(field = %field.id, "field text changed");
                        }
                    }
                    paint_field(ui, &session, state, &geometry, focused);
                });
            }
        });

        if let Some(field) = expand_request {
            info!(field = %field, "opening expanded editor");
            self.focused = Some(field.clone());
            self.expanded = Some(field);
            self.context_menu = None;
        }
    }

    fn render_expanded(&mut self, ctx: &egui::Context, input: &FrameInput) {
        let Some(id) = self.expanded.clone() else {
            return;
        };
        let Some(field) = self.fields.iter().find(|field| field.id == id) else {
            self.expanded = None;
            return;
        };

        let mut close = false;
        let measurer = EguiMeasurer::new(ctx);
        let mut session = EditSession::new(&self.config, &measurer, &mut self.clipboard);
        let state = self.states.get_or_create(&field.id, field.initial);

        egui::Window::new(format!("Edit {}", field.label))
            .id(egui::Id::new("expanded_editor"))
            .collapsible(false)
            .resizable(false)
            .fixed_size(EXPANDED_EDITOR_SIZE)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                if ui.button("Done").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape))
                {
                    close = true;
                }
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let width = ui.available_width();
                    let height = field_content_height(
                        &state.text(),
                        width,
                        EXPANDED_EDITOR_SIZE[1] - 80.0,
                        true,
                        false,
                        &measurer,
                        &self.config,
                    );
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());
                    let geometry = FieldGeometry::multiline(field_rect(rect), false);
                    session.update(state, &geometry, input, true);
                    paint_field(ui, &session, state, &geometry, true);
                });
            });

        if close {
            debug!(field = %id, "closing expanded editor");
            self.expanded = None;
        }
    }

    fn render_context_menu(&mut self, ctx: &egui::Context) {
        let Some(menu) = self.context_menu.as_mut() else {
            self.menu_rect = None;
            return;
        };
        let field = menu.field.clone();
        let pos = menu.pos;
        let clipboard_has_text = menu.clipboard_has_text(&mut self.clipboard);
        let Some(state) = self.states.get(&field) else {
            self.context_menu = None;
            return;
        };

        let mut chosen = None;
        let shown = egui::Area::new(egui::Id::new("field_context_menu"))
            .order(egui::Order::Foreground)
            .fixed_pos(pos)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(CONTEXT_MENU_WIDTH);
                    for action in ContextMenuAction::ALL {
                        let enabled = action.is_enabled(state, clipboard_has_text);
                        if ui
                            .add_enabled(enabled, egui::Button::new(action.label()))
                            .clicked()
                        {
                            chosen = Some(action);
                        }
                    }
                });
            });
        self.menu_rect = Some(shown.response.rect);

        let Some(action) = chosen else {
            return;
        };
        self.context_menu = None;
        self.menu_rect = None;
        let Some(geometry) = self.geometries.get(&field).copied() else {
            return;
        };
        let measurer = EguiMeasurer::new(ctx);
        let mut session = EditSession::new(&self.config, &measurer, &mut self.clipboard);
        if let Some(state) = self.states.get_mut(&field) {
            debug!(field = %field, action = action.label(), "context menu action");
            session.apply_command(state, &geometry, &action.command());
        }
    }
}

impl eframe::App for CodexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_style(ctx);

        let mut input = frame_input_from_egui(ctx);
        let secondary = ctx.input(|i| {
            if i.pointer.secondary_pressed() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        let was_expanded = self.expanded.is_some();
        if !was_expanded {
            self.resolve_focus(&mut input, secondary);
        }

        egui::CentralPanel::default().show(ctx, |ui| self.render_form(ui, &input));

        if was_expanded {
            self.render_expanded(ctx, &input);
        } else {
            // The press that opened the editor must not also place its caret.
            let opening = FrameInput {
                pointer_pressed: None,
                ..input.clone()
            };
            self.render_expanded(ctx, &opening);
        }
        self.render_context_menu(ctx);

        // Caret blink and key repeat advance once per rendered frame.
        ctx.request_repaint();
    }
}
