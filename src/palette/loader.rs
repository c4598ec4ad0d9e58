//! Loader for the color-definition document.
//!
//! The document groups palettes by appearance:
//!
//! ```json
//! {
//!   "dark": {
//!     "background": { "hard": {...}, "medium": {...}, "soft": {...} },
//!     "foreground": { "fg": "#d3c6aa", "red": "#e67e80", ... }
//!   },
//!   "light": { ... }
//! }
//! ```
//!
//! Unknown keys are ignored. Every color value must be a string.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument, trace};

use super::{Appearance, Contrast, Palette};
use crate::error::{Result, ThemeError};

/// Background sub-palettes for each contrast level.
#[derive(Debug, Clone, Deserialize)]
pub struct ContrastBackgrounds {
    pub hard: BTreeMap<String, String>,
    pub medium: BTreeMap<String, String>,
    pub soft: BTreeMap<String, String>,
}

impl ContrastBackgrounds {
    pub const fn get(&self, contrast: Contrast) -> &BTreeMap<String, String> {
        match contrast {
            Contrast::Hard => &self.hard,
            Contrast::Medium => &self.medium,
            Contrast::Soft => &self.soft,
        }
    }
}

/// Colors for one appearance.
#[derive(Debug, Clone, Deserialize)]
pub struct AppearanceColors {
    pub background: ContrastBackgrounds,
    pub foreground: BTreeMap<String, String>,
}

/// The full color-definition document.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorDefinitions {
    pub dark: AppearanceColors,
    pub light: AppearanceColors,
}

impl ColorDefinitions {
    /// Load color definitions from a JSON file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ThemeError::SourceNotFound {
                path: path.display().to_string(),
            },
            _ => ThemeError::SourceMalformed {
                path: path.display().to_string(),
                reason: e.to_string(),
            },
        })?;
        trace!(bytes = contents.len(), "Read color definitions");

        let definitions = Self::parse(&contents, &path.display().to_string())?;
        debug!("Loaded color definitions");
        Ok(definitions)
    }

    /// Parse color definitions from an in-memory JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::parse(json, "<memory>")
    }

    fn parse(json: &str, origin: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ThemeError::SourceMalformed {
            path: origin.to_string(),
            reason: e.to_string(),
        })
    }

    pub const fn appearance(&self, appearance: Appearance) -> &AppearanceColors {
        match appearance {
            Appearance::Dark => &self.dark,
            Appearance::Light => &self.light,
        }
    }

    /// Build the merged palette for one appearance and contrast level.
    pub fn palette(&self, appearance: Appearance, contrast: Contrast) -> Palette {
        let colors = self.appearance(appearance);
        Palette::merged(colors.background.get(contrast), &colors.foreground)
    }
}
