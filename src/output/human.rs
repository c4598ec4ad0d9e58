//! Human-friendly output using `console` styling.

use std::fmt::Write as _;
use std::path::Path;

use console::{Emoji, style};
use tracing::trace;

use crate::error::ThemeError;
use crate::generate::{GeneratedFile, GenerationReport};

use super::Output;

static CHECK: Emoji<'_, '_> = Emoji("✅ ", "");
static PALETTE: Emoji<'_, '_> = Emoji("🎨 ", "");

/// Styled terminal output for human users.
#[derive(Debug, Default)]
pub struct HumanOutput;

impl HumanOutput {
    pub const fn new() -> Self {
        Self
    }

    /// Render the generation summary.
    pub fn render_report(&self, report: &GenerationReport) -> String {
        let mut out = String::new();
        let heading = if report.dry_run {
            "Dry run, would generate Everforest Zed themes:"
        } else {
            "Generated Everforest Zed themes:"
        };
        let _ = writeln!(out, "{CHECK}{}", style(heading).green().bold());
        for file in &report.files {
            let _ = writeln!(
                out,
                "   - {} ({})",
                style(display_path(&file.path)).cyan(),
                contrast_labels(file)
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{PALETTE}{}", style("Theme variants created:").bold());
        for name in report.variant_names() {
            let _ = writeln!(out, "   - {name}");
        }
        trace!(len = out.len(), "Rendered human report");
        out
    }

    /// Render an error with its hint.
    pub fn render_error(&self, error: &ThemeError) -> String {
        let mut out = format!("{}: {error}", style("Error").red().bold());
        if let Some(suggestion) = error.suggestion() {
            let _ = write!(out, "\n{}: {suggestion}", style("Hint").yellow());
        }
        out
    }
}

impl Output for HumanOutput {
    fn report(&self, report: &GenerationReport) {
        print!("{}", self.render_report(report));
    }

    fn error(&self, error: &ThemeError) {
        eprintln!("{}", self.render_error(error));
    }
}

fn contrast_labels(file: &GeneratedFile) -> String {
    file.contrasts
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Show paths under the working directory relative to it.
fn display_path(path: &str) -> String {
    let path = Path::new(path);
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}
