//! Resize backend regression test
//!
//! The precomputed backend must match the direct backend byte for byte
//! on every input. Random rasters cover downscale, upscale (where the
//! leading clamped run is non-empty), identity, anisotropic ratios and
//! degenerate one-pixel sources.

use skeletonize_core::compare::count_differing;
use skeletonize_test::random_gray;
use skeletonize_transform::{resize, resize_with, ResizeMethod};

#[test]
fn resize_reg() {
    let cases: &[(u32, u32, u32, u32)] = &[
        (64, 48, 42, 32), // ~1.5x downscale, the pipeline's default
        (64, 48, 64, 48), // identity
        (10, 10, 80, 64), // upscale, long leading clamped run
        (33, 7, 7, 33),   // anisotropic, both directions at once
        (1, 1, 16, 16),   // single-pixel source
        (5, 4, 3, 1),     // collapse to a single row
        (256, 256, 171, 171),
    ];

    for (i, &(src_w, src_h, dst_w, dst_h)) in cases.iter().enumerate() {
        let src = random_gray(src_w, src_h, 0xA500 + i as u64);
        let direct = resize_with(&src, dst_w, dst_h, ResizeMethod::Direct).unwrap();
        let fast = resize_with(&src, dst_w, dst_h, ResizeMethod::Precomputed).unwrap();

        assert_eq!(direct.width(), dst_w);
        assert_eq!(direct.height(), dst_h);
        assert_eq!(
            count_differing(&direct, &fast).unwrap(),
            0,
            "backends diverge at {src_w}x{src_h} -> {dst_w}x{dst_h}"
        );
    }
}

#[test]
fn resize_default_method_matches_direct() {
    let src = random_gray(40, 30, 99);
    let default = resize(&src, 27, 20).unwrap();
    let direct = resize_with(&src, 27, 20, ResizeMethod::Direct).unwrap();
    assert_eq!(count_differing(&default, &direct).unwrap(), 0);
}
