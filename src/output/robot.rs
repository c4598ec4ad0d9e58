//! Robot mode JSON output.

use serde::Serialize;
use tracing::{instrument, trace};

use crate::error::ThemeError;
use crate::generate::GenerationReport;

use super::{Output, RobotFormat};

/// JSON error payload written to stderr.
#[derive(Debug, Serialize)]
pub struct ErrorPayload<'a> {
    pub error: bool,
    pub kind: &'static str,
    pub message: String,
    pub suggestion: Option<&'a str>,
    pub recoverable: bool,
}

impl<'a> ErrorPayload<'a> {
    pub fn new(error: &'a ThemeError) -> Self {
        Self {
            error: true,
            kind: error.kind(),
            message: error.to_string(),
            suggestion: error.suggestion(),
            recoverable: error.is_user_recoverable(),
        }
    }
}

/// JSON output implementation for scripting.
pub struct RobotOutput {
    format: RobotFormat,
}

impl RobotOutput {
    pub const fn new(format: RobotFormat) -> Self {
        Self { format }
    }

    /// Serialize any payload in the configured format.
    #[instrument(skip(self, data), fields(format = ?self.format))]
    pub fn to_json<T: Serialize + ?Sized>(&self, data: &T) -> String {
        let json = match self.format {
            RobotFormat::Json => serde_json::to_string_pretty(data),
            RobotFormat::JsonCompact => serde_json::to_string(data),
        };
        // Payloads are plain structs of strings and bools.
        let json = json.unwrap_or_else(|e| {
            format!(r#"{{"error":true,"kind":"serialization","message":"{e}"}}"#)
        });
        trace!(json_len = json.len(), "JSON serialized");
        json
    }
}

impl Output for RobotOutput {
    fn report(&self, report: &GenerationReport) {
        println!("{}", self.to_json(report));
    }

    fn error(&self, error: &ThemeError) {
        eprintln!("{}", self.to_json(&ErrorPayload::new(error)));
    }
}
