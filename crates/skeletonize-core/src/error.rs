//! Error types for skeletonize-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details. Downstream crates wrap this type in
//! their own error enums via `#[from]`.

use crate::raster::Channels;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Channel count is not one of the supported layouts
    #[error("invalid channel count: {0} (supported: 1 or 3)")]
    InvalidChannelCount(u32),

    /// A kernel received a raster with the wrong channel layout
    #[error("channel mismatch: expected {expected} channel(s), got {actual}")]
    ChannelMismatch { expected: u32, actual: u32 },

    /// Pixel buffer length does not match the declared shape
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Two rasters that must share a shape do not
    #[error("raster shapes differ: {0}x{1}x{2} vs {3}x{4}x{5}")]
    ShapeMismatch(u32, u32, u32, u32, u32, u32),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl Error {
    /// Build a [`Error::ChannelMismatch`] from channel layouts.
    pub(crate) fn channel_mismatch(expected: Channels, actual: Channels) -> Self {
        Error::ChannelMismatch {
            expected: expected.count(),
            actual: actual.count(),
        }
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
