//! Shared constants used across Codex crates.

/// Default font size (px) for text field content.
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Default height of one wrapped row in a multi-line field.
pub const DEFAULT_LINE_HEIGHT: f32 = 18.0;

/// Default inner padding between a field's border and its text.
pub const DEFAULT_TEXT_PADDING: f32 = 8.0;

/// Default caret blink half-period in seconds.
pub const DEFAULT_CARET_BLINK_SECS: f32 = 0.5;

/// Frames a key must be held before auto-repeat kicks in.
pub const DEFAULT_KEY_REPEAT_DELAY_FRAMES: u32 = 25;
/// Frames between auto-repeat fires once the delay has elapsed.
pub const DEFAULT_KEY_REPEAT_INTERVAL_FRAMES: u32 = 2;

/// Side length of the expand button drawn in expandable fields.
pub const EXPAND_BUTTON_SIZE: f32 = 20.0;
/// Gap kept between the text area and the expand button.
pub const EXPAND_BUTTON_GAP: f32 = 8.0;
/// Offset of the expand button from the field's top-right corner.
pub const EXPAND_BUTTON_INSET: f32 = 4.0;

/// Extra pixels scrolled past the caret when a single-line field overflows.
pub const SINGLE_LINE_SCROLL_MARGIN: f32 = 20.0;
