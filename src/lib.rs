//! Root crate facade for the Codex editing engine and desktop host.

pub use codex_core::{
    config, constants, error, fields, text_edit, ConfigError, EditorConfig, FieldId, FieldKind,
    FieldStates,
};

#[cfg(feature = "gui")]
pub use codex_gui::run;
