//! Error types for skeletonize-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error (channel mismatch, invalid dimensions)
    #[error("core error: {0}")]
    Core(#[from] skeletonize_core::Error),

    /// Thinning did not reach a fixed point within the iteration cap
    #[error("thinning did not converge within {iterations} iteration(s)")]
    NonConvergence { iterations: u32 },
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
