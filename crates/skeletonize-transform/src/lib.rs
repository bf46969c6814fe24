//! skeletonize-transform - Raster resampling for the skeletonize pipeline
//!
//! This crate provides the sub-pixel resampling kernel:
//!
//! - Bilinear resize to an exact target size, using half-pixel-center
//!   source coordinates and edge-clamped four-neighbor sampling
//! - Two loop strategies ([`ResizeMethod`]): a per-pixel reference and
//!   a precomputed variant that hoists the scales and fast-paths the
//!   leading clamped run, with byte-identical output

pub mod error;
pub mod resize;

pub use error::{TransformError, TransformResult};
pub use resize::{ResizeMethod, resize, resize_with};
