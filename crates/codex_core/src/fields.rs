//! Field kinds declared by entity templates and the edit state each form owns.

use crate::text_edit::EditState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Kind of a template field, keyed by its type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Multiline,
    Tags,
    Number,
    Link,
    Image,
    #[serde(rename = "mimage")]
    MainImage,
}

impl FieldKind {
    /// Parse a template type name; unknown names yield `None`.
    pub fn from_type_name(name: &str) -> Option<Self> {
        let kind = match name.trim().to_ascii_lowercase().as_str() {
            "text" => Self::Text,
            "multiline" => Self::Multiline,
            "tags" => Self::Tags,
            "number" => Self::Number,
            "link" => Self::Link,
            "image" => Self::Image,
            "mimage" => Self::MainImage,
            _ => return None,
        };
        Some(kind)
    }

    pub fn type_name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Multiline => "multiline",
            Self::Tags => "tags",
            Self::Number => "number",
            Self::Link => "link",
            Self::Image => "image",
            Self::MainImage => "mimage",
        }
    }

    pub fn is_multiline(self) -> bool {
        self == Self::Multiline
    }

    /// Image kinds are picked from a gallery rather than typed.
    pub fn is_text_editable(self) -> bool {
        !matches!(self, Self::Image | Self::MainImage)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Stable key of a field within one form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldId(pub String);

impl From<&str> for FieldId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Edit state for every field of an open form, created lazily per field.
#[derive(Debug, Default)]
pub struct FieldStates {
    states: HashMap<FieldId, EditState>,
}

impl FieldStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state for `id`, creating it from `initial` on first access.
    ///
    /// `initial` is ignored once the state exists.
    pub fn get_or_create(&mut self, id: &FieldId, initial: &str) -> &mut EditState {
        self.states
            .entry(id.clone())
            .or_insert_with(|| EditState::new(initial))
    }

    pub fn get(&self, id: &FieldId) -> Option<&EditState> {
        self.states.get(id)
    }

    pub fn get_mut(&mut self, id: &FieldId) -> Option<&mut EditState> {
        self.states.get_mut(id)
    }

    pub fn remove(&mut self, id: &FieldId) -> Option<EditState> {
        self.states.remove(id)
    }

    /// Drop every state, e.g. when the form is torn down.
    pub fn clear(&mut self) {
        if !self.states.is_empty() {
            tracing::debug!(fields = self.states.len(), "dropping form edit state");
        }
        self.states.clear();
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Current text of every field, sorted by id.
    pub fn texts(&self) -> Vec<(FieldId, String)> {
        let mut out: Vec<_> = self
            .states
            .iter()
            .map(|(id, state)| (id.clone(), state.text()))
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_parse_and_round_trip() {
        for kind in [
            FieldKind::Text,
            FieldKind::Multiline,
            FieldKind::Tags,
            FieldKind::Number,
            FieldKind::Link,
            FieldKind::Image,
            FieldKind::MainImage,
        ] {
            assert_eq!(FieldKind::from_type_name(kind.type_name()), Some(kind));
        }
        assert_eq!(FieldKind::from_type_name(" MImage "), Some(FieldKind::MainImage));
        assert_eq!(FieldKind::from_type_name("date"), None);
    }

    #[test]
    fn only_multiline_wraps_and_images_are_not_typed() {
        assert!(FieldKind::Multiline.is_multiline());
        assert!(!FieldKind::Tags.is_multiline());
        assert!(FieldKind::Number.is_text_editable());
        assert!(!FieldKind::Image.is_text_editable());
        assert!(!FieldKind::MainImage.is_text_editable());
    }

    #[test]
    fn states_are_created_once_with_caret_at_end() {
        let mut states = FieldStates::new();
        let name = FieldId::from("name");
        let state = states.get_or_create(&name, "Aria");
        assert_eq!(state.cursor(), 4);
        state.insert("na");

        let again = states.get_or_create(&name, "ignored");
        assert_eq!(again.text(), "Ariana");
        assert_eq!(states.len(), 1);

        states.get_or_create(&FieldId::from("age"), "31");
        assert_eq!(
            states.texts(),
            vec![
                (FieldId::from("age"), "31".to_string()),
                (FieldId::from("name"), "Ariana".to_string()),
            ]
        );
        assert!(states.remove(&name).is_some());
        states.clear();
        assert!(states.is_empty());
    }

    #[test]
    fn serde_names_match_template_type_names() {
        let main: FieldKind = serde_json::from_str("\"mimage\"").expect("mimage");
        assert_eq!(main, FieldKind::MainImage);
        for kind in [FieldKind::Multiline, FieldKind::Tags, FieldKind::MainImage] {
            let encoded = serde_json::to_string(&kind).expect("encode");
            assert_eq!(encoded, format!("\"{}\"", kind.type_name()));
        }
        assert!(serde_json::from_str::<FieldKind>("\"main_image\"").is_err());
    }
}
