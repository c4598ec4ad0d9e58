//! Everforest theme generator for Zed.
//!
//! Reads `colors.json`, maps each appearance × contrast palette onto Zed's
//! style schema, and writes `themes/everforest-{dark,light}.json`.
#![forbid(unsafe_code)]

use std::io::{self, IsTerminal};
use std::path::Path;

use clap::Parser;
use tracing::debug;

use everforest::cli::Cli;
use everforest::error::Result;
use everforest::generate::{self, GenerationReport};
use everforest::logging::init_logging;
use everforest::output::OutputMode;

fn main() {
    let cli = Cli::parse();

    if cli.no_color || !io::stdout().is_terminal() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let mode = OutputMode::from_cli(&cli);
    init_logging(mode.is_robot(), cli.verbose, cli.quiet);
    let output = mode.into_output();

    match run(&cli) {
        Ok(report) => output.report(&report),
        Err(e) => {
            output.error(&e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<GenerationReport> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());
    let config = cli.to_config(&cwd)?;
    debug!(?config, "Resolved configuration");
    generate::run(&config)
}
