//! Right-click menu entries for text fields.

use super::input::EditCommand;
use super::state::EditState;

/// One entry of a text field's context menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextMenuAction {
    Cut,
    Copy,
    Paste,
    SelectAll,
}

impl ContextMenuAction {
    /// Menu entries in display order.
    pub const ALL: [ContextMenuAction; 4] = [
        ContextMenuAction::Cut,
        ContextMenuAction::Copy,
        ContextMenuAction::Paste,
        ContextMenuAction::SelectAll,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContextMenuAction::Cut => "Cut",
            ContextMenuAction::Copy => "Copy",
            ContextMenuAction::Paste => "Paste",
            ContextMenuAction::SelectAll => "Select All",
        }
    }

    /// Cut and Copy need a selection, Paste needs clipboard text, and
    /// Select All needs any text at all.
    pub fn is_enabled(self, state: &EditState, clipboard_has_text: bool) -> bool {
        match self {
            ContextMenuAction::Cut | ContextMenuAction::Copy => state.has_selection(),
            ContextMenuAction::Paste => clipboard_has_text,
            ContextMenuAction::SelectAll => state.len_chars() > 0,
        }
    }

    /// Command the editing session runs for this entry.
    pub fn command(self) -> EditCommand {
        match self {
            ContextMenuAction::Cut => EditCommand::Cut,
            ContextMenuAction::Copy => EditCommand::Copy,
            ContextMenuAction::Paste => EditCommand::Paste,
            ContextMenuAction::SelectAll => EditCommand::SelectAll,
        }
    }
}
