//! The style document emitted for each theme variant.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Style for one syntax-highlighting category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxStyle {
    pub color: Option<String>,
    pub font_style: Option<String>,
    pub font_weight: Option<u16>,
}

/// Cursor and selection colors for a collaborator slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub cursor: String,
    pub selection: String,
    pub background: String,
}

/// A fully resolved Zed style object.
///
/// Roles keep their table order so the serialized document is stable and
/// diffs cleanly between runs. `None` serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDocument {
    pub(crate) roles: Vec<(&'static str, Option<String>)>,
    pub(crate) players: Vec<Player>,
    pub(crate) syntax: Vec<(&'static str, SyntaxStyle)>,
}

impl StyleDocument {
    /// Value of a flat role.
    ///
    /// Returns `None` for unknown roles and `Some(None)` for roles explicitly
    /// left at Zed's default.
    pub fn role(&self, name: &str) -> Option<Option<&str>> {
        self.roles
            .iter()
            .find(|(role, _)| *role == name)
            .map(|(_, value)| value.as_deref())
    }

    /// Color of a flat role, if the role exists and is set.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.role(name).flatten()
    }

    pub fn syntax(&self, category: &str) -> Option<&SyntaxStyle> {
        self.syntax
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, style)| style)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Flat role names in output order.
    pub fn role_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.roles.iter().map(|(role, _)| *role)
    }

    /// Syntax category names in output order.
    pub fn syntax_categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.syntax.iter().map(|(name, _)| *name)
    }
}

impl Serialize for StyleDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.roles.len() + 2))?;
        for (role, value) in &self.roles {
            map.serialize_entry(role, value)?;
        }
        map.serialize_entry("players", &self.players)?;
        map.serialize_entry("syntax", &OrderedSyntax(&self.syntax))?;
        map.end()
    }
}

struct OrderedSyntax<'a>(&'a [(&'static str, SyntaxStyle)]);

impl Serialize for OrderedSyntax<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, style) in self.0 {
            map.serialize_entry(category, style)?;
        }
        map.end()
    }
}
