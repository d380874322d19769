//! Stateful text-editing engine shared by every text field.
//!
//! The host samples pointer and key signals into a [`FrameInput`] each frame
//! and hands it to an [`EditSession`] together with the field's
//! [`FieldGeometry`]. The session mutates the field's [`EditState`]; wrapped
//! layout is derived lazily from the text and never stored as truth.

mod buffer;
mod clipboard;
mod context_menu;
mod geometry;
mod input;
mod key_repeat;
mod mapping;
mod measure;
mod session;
mod state;
mod words;
mod wrap;

pub use buffer::TextBuffer;
pub use clipboard::{
    flatten_for_single_line, text_from_clipboard_bytes, ClipboardAdapter, MemoryClipboard,
};
pub use context_menu::ContextMenuAction;
pub use geometry::{field_content_height, FieldGeometry, FieldRect};
pub use input::{commands_for_frame, EditCommand, FrameInput, PointerPress};
pub use key_repeat::{EditKey, KeyRepeat, KeyRepeatTimings};
pub use mapping::{
    click_to_offset, line_col_to_offset, offset_to_line_col, selection_span_for_line,
    single_line_scroll, x_to_column,
};
pub use measure::{MonospaceMeasurer, TextMeasurer};
pub use session::{EditSession, FrameOutcome};
pub use state::{CaretBlink, EditState, FocusState};
pub use words::{word_left, word_right};
pub use wrap::{wrap_text, WrapLayout, WrapLayoutCache};
