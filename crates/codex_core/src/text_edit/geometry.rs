//! Field rectangles, text-area insets, and content height.

use super::measure::TextMeasurer;
use super::wrap::wrap_text;
use crate::config::EditorConfig;
use crate::constants::{EXPAND_BUTTON_GAP, EXPAND_BUTTON_INSET, EXPAND_BUTTON_SIZE};

/// Axis-aligned screen rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FieldRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive point containment.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

/// Screen placement and shape of one text field for the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldGeometry {
    pub rect: FieldRect,
    pub multiline: bool,
    /// Draws an expand button in the top-right corner.
    pub expandable: bool,
}

impl FieldGeometry {
    pub fn single_line(rect: FieldRect) -> Self {
        Self {
            rect,
            multiline: false,
            expandable: false,
        }
    }

    pub fn multiline(rect: FieldRect, expandable: bool) -> Self {
        Self {
            rect,
            multiline: true,
            expandable,
        }
    }

    /// Screen position of the first character's top-left corner.
    pub fn text_origin(&self, padding: f32) -> (f32, f32) {
        (self.rect.x + padding, self.rect.y + padding)
    }

    /// Pixel width available to text, excluding padding and the expand button.
    pub fn text_width(&self, padding: f32) -> f32 {
        text_width_for(self.rect.width, padding, self.expandable)
    }

    /// Expand button rectangle, when the field is expandable.
    pub fn expand_button(&self) -> Option<FieldRect> {
        if !self.expandable {
            return None;
        }
        Some(FieldRect::new(
            self.rect.x + self.rect.width - EXPAND_BUTTON_SIZE - EXPAND_BUTTON_INSET,
            self.rect.y + EXPAND_BUTTON_INSET,
            EXPAND_BUTTON_SIZE,
            EXPAND_BUTTON_SIZE,
        ))
    }
}

fn text_width_for(width: f32, padding: f32, expandable: bool) -> f32 {
    let reserved = if expandable {
        EXPAND_BUTTON_SIZE + EXPAND_BUTTON_GAP
    } else {
        0.0
    };
    (width - padding * 2.0 - reserved).max(0.0)
}

/// Height a field needs to show all of `text`.
///
/// Single-line fields keep `min_height`. Multi-line fields grow to fit every
/// wrapped line at the same text width the field renders with.
pub fn field_content_height<M>(
    text: &str,
    width: f32,
    min_height: f32,
    multiline: bool,
    expandable: bool,
    measurer: &M,
    config: &EditorConfig,
) -> f32
where
    M: TextMeasurer + ?Sized,
{
    if !multiline {
        return min_height;
    }
    let max_text_width = text_width_for(width, config.padding, expandable);
    let sample = if text.is_empty() { " " } else { text };
    let layout = wrap_text(sample, max_text_width, config.font_size, measurer);
    let content = layout.line_count() as f32 * config.line_height + config.padding * 2.0;
    content.max(min_height)
}
