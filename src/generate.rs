//! End-to-end theme generation.
//!
//! Generation is all-or-nothing: every requested variant is mapped and every
//! file serialized before anything touches the output directory, so a
//! missing color slot never leaves a half-updated theme behind. Files are
//! staged next to their destination and renamed into place.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::GeneratorConfig;
use crate::error::{Result, ThemeError};
use crate::palette::{Appearance, ColorDefinitions, Contrast};
use crate::theme::{self, ThemeFile, ThemeVariant, theme_file_path};

/// A theme file ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTheme {
    pub appearance: Appearance,
    pub path: PathBuf,
    pub file: ThemeFile,
    /// Serialized document, exactly as written to disk.
    pub contents: String,
}

/// Summary of one generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub path: String,
    pub name: String,
    pub appearance: Appearance,
    pub contrasts: Vec<Contrast>,
    pub variants: Vec<String>,
}

/// Outcome of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub ok: bool,
    pub dry_run: bool,
    pub files: Vec<GeneratedFile>,
}

impl GenerationReport {
    /// Variant names across all files, in output order.
    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .flat_map(|f| f.variants.iter().map(String::as_str))
    }
}

/// Build every requested theme file from loaded color definitions.
///
/// Pure apart from logging: nothing is written.
pub fn render(
    definitions: &ColorDefinitions,
    config: &GeneratorConfig,
) -> Result<Vec<RenderedTheme>> {
    config
        .appearances
        .iter()
        .map(|&appearance| render_appearance(definitions, config, appearance))
        .collect()
}

fn render_appearance(
    definitions: &ColorDefinitions,
    config: &GeneratorConfig,
    appearance: Appearance,
) -> Result<RenderedTheme> {
    let mut variants = Vec::with_capacity(config.contrasts.len());
    for &contrast in &config.contrasts {
        let palette = definitions.palette(appearance, contrast);
        let style = theme::map(&palette).inspect_err(|e| {
            debug!(%appearance, %contrast, error = %e, "Mapping failed");
        })?;
        let variant = ThemeVariant::new(&config.family, appearance, contrast, style);
        debug!(name = %variant.name, slots = palette.len(), "Mapped variant");
        variants.push(variant);
    }

    let file = ThemeFile::new(&config.family, &config.author, appearance, variants);
    let path = theme_file_path(&config.output_dir, &config.family, appearance);
    let contents = file.to_pretty_json().map_err(|e| write_failed(&path, &e))?;
    Ok(RenderedTheme {
        appearance,
        path,
        file,
        contents,
    })
}

/// Write rendered themes, creating the output directory if needed.
///
/// Existing files are overwritten.
pub fn write_all(output_dir: &Path, rendered: &[RenderedTheme]) -> Result<()> {
    fs::create_dir_all(output_dir).map_err(|e| write_failed(output_dir, &e))?;

    let mut staged = Vec::with_capacity(rendered.len());
    for theme in rendered {
        let tmp = theme.path.with_extension("json.tmp");
        if let Err(e) = fs::write(&tmp, &theme.contents) {
            for (written, _) in &staged {
                let _ = fs::remove_file(written);
            }
            let _ = fs::remove_file(&tmp);
            return Err(write_failed(&tmp, &e));
        }
        staged.push((tmp, theme.path.as_path()));
    }

    for (i, (tmp, dest)) in staged.iter().enumerate() {
        if let Err(e) = fs::rename(tmp, dest) {
            for (pending, _) in &staged[i..] {
                let _ = fs::remove_file(pending);
            }
            return Err(write_failed(dest, &e));
        }
        info!(path = %dest.display(), "Wrote theme file");
    }
    Ok(())
}

fn write_failed(path: &Path, err: &impl std::fmt::Display) -> ThemeError {
    ThemeError::OutputWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Load, map, and (unless `dry_run`) write all requested themes.
#[instrument(skip_all, fields(input = %config.input.display(), dry_run = config.dry_run))]
pub fn run(config: &GeneratorConfig) -> Result<GenerationReport> {
    let definitions = ColorDefinitions::load(&config.input)?;
    let rendered = render(&definitions, config)?;

    if config.dry_run {
        info!(files = rendered.len(), "Dry run, skipping writes");
    } else {
        write_all(&config.output_dir, &rendered)?;
    }

    Ok(report(&rendered, config))
}

fn report(rendered: &[RenderedTheme], config: &GeneratorConfig) -> GenerationReport {
    let files = rendered
        .iter()
        .map(|theme| GeneratedFile {
            path: theme.path.display().to_string(),
            name: theme.file.name.clone(),
            appearance: theme.appearance,
            contrasts: config.contrasts.clone(),
            variants: theme.file.themes.iter().map(|v| v.name.clone()).collect(),
        })
        .collect();

    GenerationReport {
        ok: true,
        dry_run: config.dry_run,
        files,
    }
}
