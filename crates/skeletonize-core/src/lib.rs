//! Skeletonize Core - Basic data structures for the skeletonization pipeline
//!
//! This crate provides the fundamental types used throughout the
//! skeletonize workspace:
//!
//! - [`Raster`] - row-major 8-bit image container with 1 or 3 channels
//! - [`Channels`] - channel layout (grayscale or RGB)
//! - [`Error`] / [`Result`] - the core error type wrapped by every
//!   downstream crate
//! - [`compare`] - sample-level raster comparison used by conformance
//!   tests
//!
//! Kernel implementations live in the domain crates
//! (`skeletonize-color`, `skeletonize-transform`, `skeletonize-morph`);
//! this crate holds only what they all share.

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::compare;
pub use raster::{Channels, Raster};
