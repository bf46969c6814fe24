//! Error type for the pipeline facade

use thiserror::Error;

/// Errors surfaced by the skeletonization pipeline.
///
/// Every stage's error type converts via `#[from]`, so `?` works
/// across the whole run and the variant names the stage family that
/// failed.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Core library error (invalid parameter, invalid dimensions)
    #[error("core error: {0}")]
    Core(#[from] skeletonize_core::Error),

    /// Grayscale conversion or thresholding failed
    #[error("color error: {0}")]
    Color(#[from] skeletonize_color::ColorError),

    /// Resampling failed
    #[error("transform error: {0}")]
    Transform(#[from] skeletonize_transform::TransformError),

    /// Thinning failed or did not converge
    #[error("morph error: {0}")]
    Morph(#[from] skeletonize_morph::MorphError),

    /// A stage sink or snapshot write failed
    #[error("i/o error: {0}")]
    Io(#[from] skeletonize_io::IoError),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
