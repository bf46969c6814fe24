//! skeletonize-test - Deterministic test fixtures
//!
//! Generators shared by the regression tests of the kernel crates. All
//! random fixtures take an explicit seed so a failing test reproduces
//! exactly; grid fixtures build small binary rasters from ASCII rows so
//! a test can state its input shape literally.
//!
//! # Usage
//!
//! ```
//! use skeletonize_test::{grid, random_gray};
//!
//! let noise = random_gray(64, 64, 7);
//! let cross = grid(&[
//!     "010",
//!     "111",
//!     "010",
//! ]);
//! assert_eq!(cross.count_nonzero(), 5);
//! ```
//!
//! This crate appears only in `[dev-dependencies]` tables; nothing in
//! the library crates depends on it.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use skeletonize_core::{Channels, Raster};

/// Build a seeded grayscale raster with uniformly random samples.
///
/// # Panics
///
/// Panics if `width` or `height` is 0 (fixture misuse, not runtime input).
pub fn random_gray(width: u32, height: u32, seed: u64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width as usize * height as usize)
        .map(|_| rng.random::<u8>())
        .collect();
    Raster::from_vec(width, height, Channels::Gray, data).expect("fixture shape")
}

/// Build a seeded RGB raster with uniformly random samples.
///
/// # Panics
///
/// Panics if `width` or `height` is 0.
pub fn random_rgb(width: u32, height: u32, seed: u64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width as usize * height as usize * 3)
        .map(|_| rng.random::<u8>())
        .collect();
    Raster::from_vec(width, height, Channels::Rgb, data).expect("fixture shape")
}

/// Build a seeded binary raster with samples in {0, 255}.
///
/// `density` is the foreground probability per pixel.
///
/// # Panics
///
/// Panics if `width` or `height` is 0, or if `density` is outside [0, 1].
pub fn random_binary(width: u32, height: u32, seed: u64, density: f64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width as usize * height as usize)
        .map(|_| if rng.random_bool(density) { 255u8 } else { 0u8 })
        .collect();
    Raster::from_vec(width, height, Channels::Gray, data).expect("fixture shape")
}

/// Build a binary raster from ASCII rows: `'1'` is foreground (255),
/// `'0'` is background (0).
///
/// # Panics
///
/// Panics on empty input, ragged rows, or characters other than
/// `'0'`/`'1'`.
pub fn grid(rows: &[&str]) -> Raster {
    assert!(!rows.is_empty(), "grid fixture needs at least one row");
    let width = rows[0].len();
    assert!(width > 0, "grid fixture needs at least one column");

    let mut data = Vec::with_capacity(width * rows.len());
    for row in rows {
        assert_eq!(row.len(), width, "grid fixture rows must share a width");
        for ch in row.chars() {
            data.push(match ch {
                '0' => 0u8,
                '1' => 255u8,
                other => panic!("grid fixture accepts '0'/'1', got {other:?}"),
            });
        }
    }
    Raster::from_vec(width as u32, rows.len() as u32, Channels::Gray, data)
        .expect("fixture shape")
}

/// Render a 1-channel raster as ASCII rows, `'1'` for nonzero samples.
///
/// Inverse of [`grid`] for assertion messages: a failing shape test can
/// print what the kernel actually produced.
///
/// # Panics
///
/// Panics if the raster is not 1-channel.
pub fn grid_string(raster: &Raster) -> String {
    assert_eq!(
        raster.channels(),
        Channels::Gray,
        "grid_string takes 1-channel rasters"
    );
    let mut out = String::with_capacity((raster.row_len() + 1) * raster.height() as usize);
    for y in 0..raster.height() {
        for &v in raster.row(y) {
            out.push(if v != 0 { '1' } else { '0' });
        }
        out.push('\n');
    }
    out
}
