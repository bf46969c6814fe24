//! skeletonize-io - Raster I/O for the skeletonize pipeline
//!
//! This crate provides the PNG surface:
//!
//! - **Reading** ([`read_png`], [`read_png_file`]): 8-bit grayscale,
//!   RGB and their alpha variants map onto the two raster layouts
//! - **Writing** ([`write_png`], [`write_png_file`]): rasters encode
//!   as 8-bit grayscale or RGB by channel layout
//!
//! The kernel crates never depend on this one; it exists for stage
//! snapshots, fixtures and the surrounding tooling.

pub mod error;
pub mod png;

pub use error::{IoError, IoResult};
pub use self::png::{read_png, read_png_file, write_png, write_png_file};
