//! Generator configuration.
//!
//! [`GeneratorConfig`] is the resolved, CLI-independent description of one
//! run: where the palette comes from, where themes go, and which variants to
//! build.

mod path;

use std::path::PathBuf;

use crate::palette::{Appearance, Contrast};

pub use path::{home_dir, resolve_path};

/// Default color-definition document, relative to the working directory.
pub const DEFAULT_INPUT: &str = "colors.json";

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "themes";

pub const DEFAULT_FAMILY: &str = "Everforest";
pub const DEFAULT_AUTHOR: &str = "Kimberli Zhong";

/// Settings for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Path to the color-definition document.
    pub input: PathBuf,
    /// Directory theme files are written to. Created if absent.
    pub output_dir: PathBuf,
    /// Theme family name, used in variant names and file names.
    pub family: String,
    pub author: String,
    /// Appearances to generate, in output order.
    pub appearances: Vec<Appearance>,
    /// Contrast levels to generate for each appearance, in output order.
    pub contrasts: Vec<Contrast>,
    /// Map and serialize everything but skip writing.
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            family: DEFAULT_FAMILY.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            appearances: Appearance::ALL.to_vec(),
            contrasts: Contrast::ALL.to_vec(),
            dry_run: false,
        }
    }
}

impl GeneratorConfig {
    /// Restrict generation to one appearance.
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearances = vec![appearance];
        self
    }

    /// Restrict generation to a subset of contrast levels.
    ///
    /// Selection order and duplicates are ignored; variants are always
    /// emitted as hard, medium, soft. An empty selection keeps all three.
    pub fn with_contrasts(mut self, contrasts: &[Contrast]) -> Self {
        if !contrasts.is_empty() {
            self.contrasts = Contrast::ALL
                .into_iter()
                .filter(|c| contrasts.contains(c))
                .collect();
        }
        self
    }
}
