//! Core editing library for Codex (text fields, field kinds, configuration).

/// Editor configuration loading and defaults.
pub mod config;
/// Shared constants used across Codex crates.
pub mod constants;
/// Configuration error types.
pub mod error;
/// Field kinds and form-owned editing state.
pub mod fields;
/// Stateful text-editing engine backing every text field.
pub mod text_edit;

pub use config::EditorConfig;
pub use error::ConfigError;
pub use fields::{FieldId, FieldKind, FieldStates};
pub use text_edit::{
    ClipboardAdapter, EditSession, EditState, FieldGeometry, FrameInput, FrameOutcome,
    TextMeasurer, WrapLayout,
};
