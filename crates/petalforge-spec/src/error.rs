//! Error types for parameter parsing and backend reporting.

use thiserror::Error;

/// Errors produced while decoding a parameter set.
///
/// Out-of-range numbers are never an error: they are clamped. Only values that
/// cannot be interpreted at all are rejected.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// A shared key carried a value that does not parse as the field's type.
    #[error("invalid value for '{key}': {value:?}")]
    InvalidValue {
        /// Parameter key as used in the flat key/value mapping.
        key: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0:?} (expected #rgb, #rrggbb, #rrggbbaa or rgb(r, g, b))")]
    InvalidColor(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Common interface for backend errors so the CLI can report them uniformly.
///
/// # Example
///
/// ```
/// use petalforge_spec::BackendError;
///
/// fn report(err: &dyn BackendError) -> String {
///     format!("[{}] {}: {}", err.code(), err.category(), err.message())
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Stable error code such as `"VECTOR_001"`.
    fn code(&self) -> &'static str;

    /// Human-readable message, the `Display` output by default.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Category used to group related errors.
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message_names_key() {
        let err = ParamsError::InvalidValue {
            key: "numPetals".to_string(),
            value: "many".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("numPetals"));
        assert!(msg.contains("many"));
    }

    #[test]
    fn test_invalid_color_message() {
        let err = ParamsError::InvalidColor("#zz".to_string());
        assert!(err.to_string().contains("#zz"));
    }
}
