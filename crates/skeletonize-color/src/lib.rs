//! skeletonize-color - Color reduction stages of the skeletonize pipeline
//!
//! This crate provides the two color-domain kernels:
//!
//! - **Grayscale conversion** ([`gray`]): ITU-R BT.709 luma with
//!   selectable numeric backends (float reference, scaled integer,
//!   lane-oriented integer)
//! - **Thresholding** ([`threshold`]): fixed-threshold binarization in
//!   either polarity

pub mod error;
pub mod gray;
pub mod threshold;

pub use error::{ColorError, ColorResult};
pub use gray::{GrayMethod, to_gray_bt709, to_gray_bt709_with};
pub use threshold::{ThresholdKind, threshold};
