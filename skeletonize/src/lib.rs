//! Skeletonize - topological skeleton extraction for raster images
//!
//! Reduces the dark regions of a color image to one-pixel-wide,
//! connectivity-preserving skeletons, a preprocessing step for
//! handwriting and line-art analysis.
//!
//! # Overview
//!
//! The pipeline runs five stages, each a pure function of the
//! previous stage's output:
//!
//! - BT.709 grayscale conversion (`skeletonize-color`)
//! - Bilinear downscaling (`skeletonize-transform`)
//! - Threshold binarization, inverted so dark strokes become the
//!   foreground (`skeletonize-color`)
//! - Guo-Hall iterative thinning (`skeletonize-morph`)
//! - A final inversion back to the caller's polarity
//!
//! # Example
//!
//! ```
//! use skeletonize::{skeletonize, Channels, Raster, SkeletonizeOptions};
//!
//! // a white canvas with a black bar across it
//! let mut image = Raster::filled(90, 60, Channels::Rgb, 255).unwrap();
//! for y in 20..30 {
//!     image.row_mut(y)[30..240].fill(0); // bytes, 3 per pixel
//! }
//!
//! let skeleton = skeletonize(&image, &SkeletonizeOptions::default()).unwrap();
//! assert_eq!(skeleton.width(), 60); // 90 / 1.5
//! assert_eq!(skeleton.height(), 40);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use skeletonize_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use skeletonize_color as color;
pub use skeletonize_io as io;
pub use skeletonize_morph as morph;
pub use skeletonize_transform as transform;

pub mod error;
pub mod pipeline;
pub mod stages;

pub use error::{PipelineError, PipelineResult};
pub use pipeline::{skeletonize, skeletonize_staged, SkeletonizeOptions};
pub use stages::{DirSink, Stage, StageSink};
