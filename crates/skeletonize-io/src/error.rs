//! Error types for skeletonize-io

use thiserror::Error;

/// Errors that can occur during raster I/O operations
#[derive(Debug, Error)]
pub enum IoError {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image layout has no raster mapping (bit depth or color type)
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The decoder rejected the stream
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The encoder failed to produce a stream
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Core library error (channel mismatch, invalid dimensions)
    #[error("core error: {0}")]
    Core(#[from] skeletonize_core::Error),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
