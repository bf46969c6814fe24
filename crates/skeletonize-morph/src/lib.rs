//! skeletonize-morph - Morphological thinning for the skeletonize pipeline
//!
//! This crate provides the Guo-Hall thinning engine:
//!
//! - **Iterative thinning** ([`thin`]): two-pass boundary erosion that
//!   reduces a binary raster to a one-pixel-wide, connectivity-preserving
//!   skeleton
//! - **Decision tables** ([`table`]): the 256-entry neighborhood
//!   classification precomputed per sub-iteration, shareable across runs

pub mod error;
pub mod table;
pub mod thin;

pub use error::{MorphError, MorphResult};
pub use table::{DecisionTables, SubIteration, is_removable};
pub use thin::{
    ThinMethod, ThinOptions, thin_guo_hall, thin_guo_hall_with, thin_guo_hall_with_tables,
};
