//! Perceptual grayscale conversion
//!
//! Converts a 3-channel color raster to single-channel luma using the
//! ITU-R BT.709 weights. One contract, three numeric backends: the
//! floating-point reference, a scaled-integer path, and a lane-oriented
//! scaled-integer path for long rows. The integer backends may differ
//! from the reference by at most one gray level; `tests/gray_reg.rs`
//! holds them to that bound.

use crate::error::ColorResult;
use skeletonize_core::{Channels, Raster};

/// BT.709 luma weight for the red channel.
pub const RED_WEIGHT: f32 = 0.2126;

/// BT.709 luma weight for the green channel.
pub const GREEN_WEIGHT: f32 = 0.7152;

/// BT.709 luma weight for the blue channel.
pub const BLUE_WEIGHT: f32 = 0.0722;

/// Bit width of the scaled-integer backends.
const FIXED_SHIFT: u32 = 8;

/// Rounding bias applied before the shift (0.5 in fixed point).
const FIXED_BIAS: u32 = 1 << (FIXED_SHIFT - 1);

// round(weight * 256) per channel: 54 + 183 + 18 = 255, so this backend
// can land one level below the reference (white maps to 254).
const FIXED_RED: u32 = 54;
const FIXED_GREEN: u32 = 183;
const FIXED_BLUE: u32 = 18;

// Lane weights: blue is 19 rather than 18 so the three weights sum to
// 256 and white maps to white.
const LANE_RED: u16 = 54;
const LANE_GREEN: u16 = 183;
const LANE_BLUE: u16 = 19;

/// Pixels per lane group.
const LANE_WIDTH: usize = 16;

/// Numeric backend for [`to_gray_bt709_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrayMethod {
    /// f32 weighted sum, rounded to nearest (the reference)
    #[default]
    Float,
    /// Scaled-integer weights summing to 255; at most 1 below the
    /// reference
    FixedPoint,
    /// 16-pixel groups of u16 scaled-integer math with weights summing
    /// to 256; within 1 of the reference. Row tails shorter than a
    /// group use the reference path.
    Lanes,
}

/// Convert a color raster to BT.709 luma with the reference backend.
///
/// Each output pixel is `0.2126*R + 0.7152*G + 0.0722*B`, rounded to
/// nearest with ties going up.
///
/// # Errors
///
/// Returns a channel mismatch error if `src` is not 3-channel.
pub fn to_gray_bt709(src: &Raster) -> ColorResult<Raster> {
    to_gray_bt709_with(src, GrayMethod::Float)
}

/// Convert a color raster to BT.709 luma with a chosen backend.
///
/// # Arguments
///
/// * `src` - 3-channel color raster, R,G,B byte order
/// * `method` - numeric backend; see [`GrayMethod`] for the deviation
///   each backend is allowed from the reference
///
/// # Errors
///
/// Returns a channel mismatch error if `src` is not 3-channel.
pub fn to_gray_bt709_with(src: &Raster, method: GrayMethod) -> ColorResult<Raster> {
    src.require_channels(Channels::Rgb)?;
    let mut dst = Raster::new(src.width(), src.height(), Channels::Gray)?;
    match method {
        GrayMethod::Float => convert_float(src, &mut dst),
        GrayMethod::FixedPoint => convert_fixed_point(src, &mut dst),
        GrayMethod::Lanes => convert_lanes(src, &mut dst),
    }
    Ok(dst)
}

// ============================================================================
// Backends
// ============================================================================

#[inline]
fn luma_float(r: u8, g: u8, b: u8) -> u8 {
    let luma = RED_WEIGHT * r as f32 + GREEN_WEIGHT * g as f32 + BLUE_WEIGHT * b as f32;
    (luma + 0.5) as u8
}

fn convert_float(src: &Raster, dst: &mut Raster) {
    let width = src.width() as usize;
    for (dst_row, src_row) in dst
        .data_mut()
        .chunks_exact_mut(width)
        .zip(src.data().chunks_exact(width * 3))
    {
        for (d, p) in dst_row.iter_mut().zip(src_row.chunks_exact(3)) {
            *d = luma_float(p[0], p[1], p[2]);
        }
    }
}

fn convert_fixed_point(src: &Raster, dst: &mut Raster) {
    let width = src.width() as usize;
    for (dst_row, src_row) in dst
        .data_mut()
        .chunks_exact_mut(width)
        .zip(src.data().chunks_exact(width * 3))
    {
        for (d, p) in dst_row.iter_mut().zip(src_row.chunks_exact(3)) {
            let acc = FIXED_RED * p[0] as u32
                + FIXED_GREEN * p[1] as u32
                + FIXED_BLUE * p[2] as u32;
            *d = ((acc + FIXED_BIAS) >> FIXED_SHIFT) as u8;
        }
    }
}

fn convert_lanes(src: &Raster, dst: &mut Raster) {
    let width = src.width() as usize;
    let grouped = width - width % LANE_WIDTH;
    for (dst_row, src_row) in dst
        .data_mut()
        .chunks_exact_mut(width)
        .zip(src.data().chunks_exact(width * 3))
    {
        let groups = dst_row[..grouped]
            .chunks_exact_mut(LANE_WIDTH)
            .zip(src_row[..grouped * 3].chunks_exact(LANE_WIDTH * 3));
        for (d_group, p_group) in groups {
            for (d, p) in d_group.iter_mut().zip(p_group.chunks_exact(3)) {
                // max 54*255 + 183*255 + 19*255 + 128 = 65408, fits u16
                let acc = LANE_RED * p[0] as u16
                    + LANE_GREEN * p[1] as u16
                    + LANE_BLUE * p[2] as u16;
                *d = ((acc + FIXED_BIAS as u16) >> FIXED_SHIFT) as u8;
            }
        }
        for (d, p) in dst_row[grouped..]
            .iter_mut()
            .zip(src_row[grouped * 3..].chunks_exact(3))
        {
            *d = luma_float(p[0], p[1], p[2]);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
