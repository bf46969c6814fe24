//! Error types for skeletonize-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error (channel mismatch, invalid dimensions)
    #[error("core error: {0}")]
    Core(#[from] skeletonize_core::Error),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
