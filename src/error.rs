//! Error types for theme generation.

use thiserror::Error;

/// Primary error type for theme generation.
///
/// Every variant aborts the run; there is no partial-output mode.
#[derive(Error, Debug)]
pub enum ThemeError {
    // Source errors
    #[error("Color definitions not found: {path}")]
    SourceNotFound { path: String },

    #[error("Malformed color definitions in {path}: {reason}")]
    SourceMalformed { path: String, reason: String },

    // Mapping errors
    #[error("Palette is missing required color slot '{slot}'")]
    MissingColorSlot { slot: String },

    // Output errors
    #[error("Failed to write theme output '{path}': {reason}")]
    OutputWriteFailed { path: String, reason: String },

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ThemeError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::SourceNotFound { .. }
                | Self::SourceMalformed { .. }
                | Self::MissingColorSlot { .. }
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::SourceNotFound { .. } => {
                Some("Run from the repository root or pass --input <PATH>")
            }
            Self::SourceMalformed { .. } => Some(
                "Expected {\"dark\"|\"light\": {\"background\": {\"hard\"|\"medium\"|\"soft\": {...}}, \"foreground\": {...}}}",
            ),
            Self::MissingColorSlot { .. } => {
                Some("Add the slot to the background or foreground palette")
            }
            Self::OutputWriteFailed { .. } => Some("Check permissions or pass --output-dir <DIR>"),
            Self::Io(_) => None,
        }
    }

    /// Short machine-readable name of the error kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SourceNotFound { .. } => "source_not_found",
            Self::SourceMalformed { .. } => "source_malformed",
            Self::MissingColorSlot { .. } => "missing_color_slot",
            Self::OutputWriteFailed { .. } => "output_write_failed",
            Self::Io(_) => "io",
        }
    }
}

/// Convenience type alias for Results using ThemeError.
pub type Result<T> = std::result::Result<T, ThemeError>;
