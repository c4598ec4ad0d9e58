//! CLI argument definitions.

use std::path::{Path, PathBuf};

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, ValueEnum};

use crate::config::{self, GeneratorConfig, resolve_path};
use crate::error::Result;
use crate::palette::{Appearance, Contrast};

/// Generate the Everforest themes for the Zed editor.
///
/// Reads the palette from colors.json and writes themes/everforest-dark.json
/// and themes/everforest-light.json. Run with no arguments from the
/// repository root.
#[derive(Parser, Debug)]
#[command(name = "everforest", version, about, long_about = None)]
pub struct Cli {
    /// Color definitions to read
    #[arg(long, short = 'i', default_value = config::DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory to write theme files into (created if missing)
    #[arg(long, short = 'o', default_value = config::DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Only generate one appearance
    #[arg(long, short = 'a')]
    pub appearance: Option<Appearance>,

    /// Only generate these contrast levels (repeatable)
    #[arg(long, short = 'c')]
    pub contrast: Vec<Contrast>,

    /// Map and validate everything without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Output format (text for humans, json for scripts)
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json
    #[arg(long)]
    pub robot: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// Pretty JSON
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }

    /// Build the generator configuration, resolving paths against `cwd`.
    pub fn to_config(&self, cwd: &Path) -> Result<GeneratorConfig> {
        let mut config = GeneratorConfig {
            input: resolve_path(&self.input, cwd)?,
            output_dir: resolve_path(&self.output_dir, cwd)?,
            dry_run: self.dry_run,
            ..GeneratorConfig::default()
        }
        .with_contrasts(&self.contrast);

        if let Some(appearance) = self.appearance {
            config = config.with_appearance(appearance);
        }
        Ok(config)
    }
}
