//! Theme variants and the top-level theme file.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::style::StyleDocument;
use crate::palette::{Appearance, Contrast};

/// Schema URI Zed validates theme files against.
pub const SCHEMA_URI: &str = "https://zed.dev/schema/themes/v0.1.0.json";

/// One named theme inside a theme file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeVariant {
    pub name: String,
    pub appearance: Appearance,
    pub style: StyleDocument,
}

impl ThemeVariant {
    /// Build a variant named `"<Family> <Appearance> <Contrast>"`.
    pub fn new(
        family: &str,
        appearance: Appearance,
        contrast: Contrast,
        style: StyleDocument,
    ) -> Self {
        Self {
            name: format!("{family} {} {}", appearance.label(), contrast.label()),
            appearance,
            style,
        }
    }
}

/// A Zed theme family file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeFile {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    pub author: String,
    pub themes: Vec<ThemeVariant>,
}

impl ThemeFile {
    /// Assemble the file for one appearance, named `"<Family> <Appearance>"`.
    pub fn new(
        family: &str,
        author: &str,
        appearance: Appearance,
        themes: Vec<ThemeVariant>,
    ) -> Self {
        Self {
            schema: SCHEMA_URI.to_string(),
            name: format!("{family} {}", appearance.label()),
            author: author.to_string(),
            themes,
        }
    }

    /// Serialize as 4-space indented JSON with a trailing newline.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser)?;
        buf.push(b'\n');
        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Output path for an appearance, e.g. `themes/everforest-dark.json`.
pub fn theme_file_path(output_dir: &Path, family: &str, appearance: Appearance) -> PathBuf {
    let slug = family.to_lowercase().replace(' ', "-");
    output_dir.join(format!("{slug}-{}.json", appearance.as_str()))
}
