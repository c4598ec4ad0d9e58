//! Output mode abstraction for robot and human output.

use crate::cli::Cli;
use crate::error::ThemeError;
use crate::generate::GenerationReport;

pub mod human;
pub mod robot;

pub use human::HumanOutput;
pub use robot::RobotOutput;

/// JSON formatting options for robot mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotFormat {
    /// Pretty-printed JSON (default for --robot).
    Json,
    /// Single-line JSON (--format=json-compact).
    JsonCompact,
}

/// Determines how command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// JSON output for scripting.
    Robot(RobotFormat),
    /// Styled terminal output for human users.
    Human,
}

impl OutputMode {
    /// Create OutputMode from CLI arguments.
    pub const fn from_cli(cli: &Cli) -> Self {
        if cli.use_json() {
            if cli.use_compact_json() {
                Self::Robot(RobotFormat::JsonCompact)
            } else {
                Self::Robot(RobotFormat::Json)
            }
        } else {
            Self::Human
        }
    }

    pub const fn is_robot(&self) -> bool {
        matches!(self, Self::Robot(_))
    }

    /// Convert into the appropriate Output implementation.
    pub fn into_output(self) -> Box<dyn Output> {
        match self {
            Self::Robot(format) => Box::new(RobotOutput::new(format)),
            Self::Human => Box::new(HumanOutput::new()),
        }
    }
}

/// Rendering of run results.
///
/// Reports go to stdout, errors to stderr.
pub trait Output {
    fn report(&self, report: &GenerationReport);
    fn error(&self, error: &ThemeError);
}
