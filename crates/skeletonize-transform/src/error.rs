//! Error types for skeletonize-transform

use thiserror::Error;

/// Errors that can occur during geometric transformations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error (channel mismatch, invalid dimensions)
    #[error("core error: {0}")]
    Core(#[from] skeletonize_core::Error),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
