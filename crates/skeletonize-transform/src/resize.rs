//! Bilinear resampling
//!
//! Produces a raster of an exact target size from a grayscale source.
//! Source coordinates use the half-pixel-center convention
//! `x = (col + 0.5) * (src_w / dst_w) - 0.5`; the four sampled
//! neighbors are each edge-clamped independently, and collapsed
//! neighbor pairs reduce to 1D interpolation or a direct copy.
//!
//! Two backends share one sampling helper, so their output is
//! identical byte for byte; `tests/resize_reg.rs` diffs them over
//! random inputs to keep it that way.

use crate::error::TransformResult;
use skeletonize_core::{Channels, Raster};

/// Loop strategy for [`resize_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeMethod {
    /// Evaluate the source coordinate and sample for every destination
    /// pixel (the reference)
    #[default]
    Direct,
    /// Hoist the scales and fast-path the leading boundary run: pixels
    /// whose source coordinate is negative all clamp to source
    /// column/row 0 and share one interpolated value per row, so the
    /// run is filled once and leading rows are copied. Output is
    /// identical to [`ResizeMethod::Direct`].
    Precomputed,
}

/// Resize a grayscale raster to exactly `dst_w` x `dst_h` with the
/// reference backend.
///
/// # Errors
///
/// Returns a channel mismatch error if `src` is not 1-channel, or an
/// invalid-dimensions error if either target dimension is 0.
pub fn resize(src: &Raster, dst_w: u32, dst_h: u32) -> TransformResult<Raster> {
    resize_with(src, dst_w, dst_h, ResizeMethod::default())
}

/// Resize a grayscale raster to exactly `dst_w` x `dst_h` with a
/// chosen backend.
///
/// # Arguments
///
/// * `src` - 1-channel source raster
/// * `dst_w`, `dst_h` - target dimensions (must be > 0)
/// * `method` - loop strategy; both produce the same bytes
///
/// # Errors
///
/// Returns a channel mismatch error if `src` is not 1-channel, or an
/// invalid-dimensions error if either target dimension is 0.
pub fn resize_with(
    src: &Raster,
    dst_w: u32,
    dst_h: u32,
    method: ResizeMethod,
) -> TransformResult<Raster> {
    src.require_channels(Channels::Gray)?;
    let mut dst = Raster::new(dst_w, dst_h, Channels::Gray)?;
    match method {
        ResizeMethod::Direct => resize_direct(src, &mut dst),
        ResizeMethod::Precomputed => resize_precomputed(src, &mut dst),
    }
    Ok(dst)
}

// ============================================================================
// Backends
// ============================================================================

/// Continuous source coordinate of a destination index, half-pixel
/// centers.
#[inline]
fn source_coord(dst_index: u32, scale: f32) -> f32 {
    (dst_index as f32 + 0.5) * scale - 0.5
}

/// Bilinear sample at continuous source coordinates, each neighbor
/// edge-clamped independently.
fn sample_clamped(src: &Raster, x: f32, y: f32) -> u8 {
    let src_cols = src.width() as i32;
    let src_rows = src.height() as i32;

    let ix = x.floor() as i32;
    let iy = y.floor() as i32;

    let x1 = ix.clamp(0, src_cols - 1);
    let x2 = (ix + 1).clamp(0, src_cols - 1);
    let y1 = iy.clamp(0, src_rows - 1);
    let y2 = (iy + 1).clamp(0, src_rows - 1);

    let q11 = src.row(y1 as u32)[x1 as usize] as f32;
    let q12 = src.row(y2 as u32)[x1 as usize] as f32;
    let q21 = src.row(y1 as u32)[x2 as usize] as f32;
    let q22 = src.row(y2 as u32)[x2 as usize] as f32;

    let value = if x1 == x2 && y1 == y2 {
        q11
    } else if x1 == x2 {
        q11 * (y2 as f32 - y) + q22 * (y - y1 as f32)
    } else if y1 == y2 {
        q11 * (x2 as f32 - x) + q22 * (x - x1 as f32)
    } else {
        let wx1 = x2 as f32 - x;
        let wx2 = x - x1 as f32;
        let wy1 = y2 as f32 - y;
        let wy2 = y - y1 as f32;
        q11 * wx1 * wy1 + q21 * wx2 * wy1 + q12 * wx1 * wy2 + q22 * wx2 * wy2
    };

    (value + 0.5).clamp(0.0, 255.0) as u8
}

fn resize_direct(src: &Raster, dst: &mut Raster) {
    let xscale = src.width() as f32 / dst.width() as f32;
    let yscale = src.height() as f32 / dst.height() as f32;
    let dst_w = dst.width();

    for row in 0..dst.height() {
        let y = source_coord(row, yscale);
        let dst_row = dst.row_mut(row);
        for col in 0..dst_w {
            dst_row[col as usize] = sample_clamped(src, source_coord(col, xscale), y);
        }
    }
}

/// Length of the leading destination run whose source coordinate is
/// negative (and therefore clamps to index 0).
fn leading_clamped_run(dst_len: u32, scale: f32) -> u32 {
    (0..dst_len)
        .take_while(|&i| source_coord(i, scale) < 0.0)
        .count() as u32
}

fn resize_precomputed(src: &Raster, dst: &mut Raster) {
    let xscale = src.width() as f32 / dst.width() as f32;
    let yscale = src.height() as f32 / dst.height() as f32;
    let dst_w = dst.width() as usize;
    let dst_h = dst.height();

    let lead_x = leading_clamped_run(dst.width(), xscale) as usize;
    let lead_y = leading_clamped_run(dst_h, yscale);

    for row in 0..dst_h {
        // rows in the leading run all clamp to source row 0 and are
        // interpolated without y, so they equal row 0
        if row > 0 && row < lead_y {
            let (head, tail) = dst.data_mut().split_at_mut(row as usize * dst_w);
            tail[..dst_w].copy_from_slice(&head[..dst_w]);
            continue;
        }

        let y = source_coord(row, yscale);
        let dst_row = dst.row_mut(row);

        // columns in the leading run clamp to source column 0 and are
        // interpolated without x, so they share one value per row
        if lead_x > 0 {
            let v = sample_clamped(src, source_coord(0, xscale), y);
            dst_row[..lead_x].fill(v);
        }
        for col in lead_x as u32..dst_w as u32 {
            dst_row[col as usize] = sample_clamped(src, source_coord(col, xscale), y);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
