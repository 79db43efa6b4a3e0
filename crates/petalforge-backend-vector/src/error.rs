//! Error types for rendering and export.

use thiserror::Error;

use petalforge_spec::BackendError;

use crate::png::PngError;

/// Errors from rasterization and file export.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl BackendError for RenderError {
    fn code(&self) -> &'static str {
        match self {
            RenderError::Png(_) => "VECTOR_001",
            RenderError::Io(_) => "VECTOR_002",
            RenderError::InvalidParameter(_) => "VECTOR_003",
        }
    }

    fn category(&self) -> &'static str {
        "vector"
    }
}
