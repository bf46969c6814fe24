//! Fixed-threshold binarization
//!
//! The pipeline's binarize-and-invert stage delegates to this generic
//! primitive: compare every sample of a grayscale raster against a
//! threshold and emit {0, 255} in the requested polarity.

use crate::error::ColorResult;
use skeletonize_core::{Channels, Raster};

/// Output polarity of [`threshold`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdKind {
    /// Samples above the threshold become 255, the rest 0
    #[default]
    Binary,
    /// Samples above the threshold become 0, the rest 255
    BinaryInverted,
}

/// Threshold a grayscale raster into a {0, 255} binary raster.
///
/// A sample `v` counts as above when `v > thresh`; the threshold value
/// itself lands in the low band.
///
/// # Errors
///
/// Returns a channel mismatch error if `src` is not 1-channel.
pub fn threshold(src: &Raster, thresh: u8, kind: ThresholdKind) -> ColorResult<Raster> {
    src.require_channels(Channels::Gray)?;
    let (above, below) = match kind {
        ThresholdKind::Binary => (255u8, 0u8),
        ThresholdKind::BinaryInverted => (0u8, 255u8),
    };
    let mut dst = src.create_template();
    for (out, &v) in dst.data_mut().iter_mut().zip(src.data()) {
        *out = if v > thresh { above } else { below };
    }
    Ok(dst)
}
