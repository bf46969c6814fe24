//! Raster comparison
//!
//! Sample-level comparison of two same-shaped rasters. These back the
//! conformance tests that hold optimized kernel backends to their
//! documented deviation from the reference backend.

use crate::error::{Error, Result};
use crate::raster::Raster;

fn require_same_shape(a: &Raster, b: &Raster) -> Result<()> {
    if !a.same_shape(b) {
        return Err(Error::ShapeMismatch(
            a.width(),
            a.height(),
            a.channels().count(),
            b.width(),
            b.height(),
            b.channels().count(),
        ));
    }
    Ok(())
}

/// Count the samples at which two rasters differ.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if the rasters differ in width,
/// height, or channel layout.
pub fn count_differing(a: &Raster, b: &Raster) -> Result<usize> {
    require_same_shape(a, b)?;
    let count = a
        .data()
        .iter()
        .zip(b.data())
        .filter(|(x, y)| x != y)
        .count();
    Ok(count)
}

/// Find the largest absolute sample difference between two rasters.
///
/// Returns 0 for identical rasters.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if the rasters differ in width,
/// height, or channel layout.
pub fn max_abs_diff(a: &Raster, b: &Raster) -> Result<u8> {
    require_same_shape(a, b)?;
    let max = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(&x, &y)| x.abs_diff(y))
        .max()
        .unwrap_or(0);
    Ok(max)
}
