//! Color palettes keyed by appearance and contrast.
//!
//! A [`Palette`] is the flat slot → color mapping the theme mapper reads from.
//! Palettes are never written by hand; they are produced by
//! [`ColorDefinitions::palette`], which merges a contrast-specific background
//! sub-palette with the appearance's foreground sub-palette.

mod loader;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::{Result, ThemeError};

pub use loader::{AppearanceColors, ColorDefinitions, ContrastBackgrounds};

/// Overall light/dark family of a theme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Dark,
    Light,
}

impl Appearance {
    /// All appearances in output order.
    pub const ALL: [Self; 2] = [Self::Dark, Self::Light];

    /// Lowercase literal used in the theme document and file names.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Capitalized label used in display names.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Background contrast level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Contrast {
    Hard,
    Medium,
    Soft,
}

impl Contrast {
    /// All contrast levels in output order.
    pub const ALL: [Self; 3] = [Self::Hard, Self::Medium, Self::Soft];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Medium => "medium",
            Self::Soft => "soft",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hard => "Hard",
            Self::Medium => "Medium",
            Self::Soft => "Soft",
        }
    }
}

impl fmt::Display for Contrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat mapping from color-slot names to color values.
///
/// Values are opaque strings; no color format is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<String, String>,
}

impl Palette {
    /// Merge a background sub-palette with a foreground sub-palette.
    ///
    /// Foreground entries win on a name collision.
    pub fn merged(
        background: &BTreeMap<String, String>,
        foreground: &BTreeMap<String, String>,
    ) -> Self {
        let mut colors = background.clone();
        colors.extend(foreground.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { colors }
    }

    /// Set a slot, replacing any previous value.
    pub fn insert(&mut self, slot: impl Into<String>, color: impl Into<String>) {
        self.colors.insert(slot.into(), color.into());
    }

    /// Remove a slot, returning its previous value.
    pub fn remove(&mut self, slot: &str) -> Option<String> {
        self.colors.remove(slot)
    }

    /// Look up a slot, failing with [`ThemeError::MissingColorSlot`] if absent.
    pub fn color(&self, slot: &str) -> Result<&str> {
        self.colors
            .get(slot)
            .map(String::as_str)
            .ok_or_else(|| ThemeError::MissingColorSlot {
                slot: slot.to_string(),
            })
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.colors.contains_key(slot)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Palette {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
