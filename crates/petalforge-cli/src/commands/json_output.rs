//! JSON output types for the `--json` flag.
//!
//! Every command that supports `--json` prints exactly one document of the
//! shape `{"success": bool, "errors": [...], "result": {...}}`.

use anyhow::Result;
use petalforge_backend_vector::RenderError;
use petalforge_spec::{BackendError, ParamsError};
use serde::{Deserialize, Serialize};

use super::render::UnknownFormat;
use crate::presets::PresetError;

/// Error codes for CLI operations.
///
/// These codes are stable. Backend errors pass their own codes through
/// (`VECTOR_xxx`).
pub mod error_codes {
    /// Parameter file, query string or JSON could not be used
    pub const INVALID_PARAMS: &str = "CLI_001";
    /// Output extension or format not recognized
    pub const UNKNOWN_FORMAT: &str = "CLI_002";
    /// Preset store could not be read or written
    pub const PRESET_STORE: &str = "CLI_003";
    /// Named preset does not exist
    pub const PRESET_NOT_FOUND: &str = "CLI_004";
    /// Generic failure without a more specific code
    pub const INTERNAL: &str = "CLI_005";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "VECTOR_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Suggestion for fixing the error (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Picks the most specific code found in the error chain.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        let message = format!("{:#}", err);
        for cause in err.chain() {
            if let Some(render) = cause.downcast_ref::<RenderError>() {
                return Self::new(render.code(), message);
            }
            if cause.downcast_ref::<UnknownFormat>().is_some() {
                return Self::new(error_codes::UNKNOWN_FORMAT, message);
            }
            if let Some(preset) = cause.downcast_ref::<PresetError>() {
                return match preset {
                    PresetError::NotFound(_) => Self::new(error_codes::PRESET_NOT_FOUND, message)
                        .with_suggestion("run `petalforge preset list` to see stored presets"),
                    _ => Self::new(error_codes::PRESET_STORE, message),
                };
            }
            if cause.downcast_ref::<ParamsError>().is_some()
                || cause.downcast_ref::<serde_json::Error>().is_some()
            {
                return Self::new(error_codes::INVALID_PARAMS, message);
            }
        }
        Self::new(error_codes::INTERNAL, message)
    }
}

/// Envelope shared by all JSON outputs.
#[derive(Debug, Clone, Serialize)]
pub struct CommandOutput<T: Serialize> {
    pub success: bool,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T: Serialize> CommandOutput<T> {
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
