//! Guo-Hall iterative thinning
//!
//! Reduces the foreground of a binary raster to a one-pixel-wide
//! skeleton that preserves connectivity and approximates the medial
//! axis. Each full iteration runs two masked erosion passes; each pass
//! classifies every interior foreground pixel against a snapshot of
//! the raster taken before the pass, then applies all removals at
//! once, so the scan order can never influence the result.
//!
//! Input samples are taken as foreground when nonzero; the raster
//! border is never touched; the output uses {0, 255}. The run stops at
//! the fixed point (a full iteration that removes nothing) or fails
//! with [`MorphError::NonConvergence`] once the iteration cap is hit.

use crate::error::{MorphError, MorphResult};
use crate::table::{is_removable, DecisionTables, SubIteration};
use skeletonize_core::{Channels, Raster};

/// Classification strategy for [`thin_guo_hall_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThinMethod {
    /// One precomputed-table lookup per foreground pixel
    #[default]
    Table,
    /// Re-evaluate the boolean rule per foreground pixel; kept as the
    /// conformance reference, the output is identical
    Rule,
}

/// Options for [`thin_guo_hall_with`].
#[derive(Debug, Clone, Default)]
pub struct ThinOptions {
    /// Classification strategy; both produce the same bytes
    pub method: ThinMethod,
    /// Hard cap on full iterations; 0 picks `max(width, height)`,
    /// which genuine inputs stay well under
    pub max_iters: u32,
}

/// Thin a binary raster to its skeleton with the default options.
///
/// # Errors
///
/// Returns a channel mismatch error if `src` is not 1-channel, or
/// [`MorphError::NonConvergence`] if the fixed point is not reached
/// within `max(width, height)` iterations.
pub fn thin_guo_hall(src: &Raster) -> MorphResult<Raster> {
    thin_guo_hall_with(src, &ThinOptions::default())
}

/// Thin a binary raster to its skeleton with chosen options.
///
/// # Arguments
///
/// * `src` - 1-channel raster; nonzero samples are foreground
/// * `options` - classification strategy and iteration cap
///
/// # Errors
///
/// Returns a channel mismatch error if `src` is not 1-channel, or
/// [`MorphError::NonConvergence`] if the fixed point is not reached
/// within the iteration cap.
pub fn thin_guo_hall_with(src: &Raster, options: &ThinOptions) -> MorphResult<Raster> {
    match options.method {
        ThinMethod::Table => {
            let tables = DecisionTables::build();
            thin_guo_hall_with_tables(src, &tables, options.max_iters)
        }
        ThinMethod::Rule => thin_normalized(src, is_removable, options.max_iters),
    }
}

/// Thin a binary raster using caller-provided decision tables.
///
/// [`DecisionTables`] is immutable once built, so a caller thinning
/// many rasters can build it once and share it across runs (and
/// threads) instead of paying the construction per call.
///
/// # Errors
///
/// Same conditions as [`thin_guo_hall_with`].
pub fn thin_guo_hall_with_tables(
    src: &Raster,
    tables: &DecisionTables,
    max_iters: u32,
) -> MorphResult<Raster> {
    thin_normalized(src, |code, sub| tables.should_remove(code, sub), max_iters)
}

// ============================================================================
// Engine
// ============================================================================

/// Run the iteration loop over a {0, 1} working copy of `src`.
fn thin_normalized<F>(src: &Raster, decide: F, max_iters: u32) -> MorphResult<Raster>
where
    F: Fn(u8, SubIteration) -> bool,
{
    src.require_channels(Channels::Gray)?;

    let width = src.width() as usize;
    let height = src.height() as usize;
    let cap = if max_iters == 0 {
        src.width().max(src.height())
    } else {
        max_iters
    };

    // working copy in {0, 1}; any nonzero input sample is foreground
    let mut image: Vec<u8> = src.data().iter().map(|&v| u8::from(v != 0)).collect();
    let mut marks = vec![0u8; image.len()];

    let mut iterations = 0u32;
    loop {
        if iterations == cap {
            return Err(MorphError::NonConvergence { iterations });
        }
        let first =
            sub_iteration(&mut image, &mut marks, width, height, &decide, SubIteration::First);
        let second =
            sub_iteration(&mut image, &mut marks, width, height, &decide, SubIteration::Second);
        let removed = first + second;
        iterations += 1;
        if removed == 0 {
            break;
        }
    }

    for v in &mut image {
        *v *= 255;
    }
    Ok(Raster::from_vec(src.width(), src.height(), Channels::Gray, image)?)
}

/// One masked erosion pass. Classifies every interior foreground pixel
/// against the pre-pass state, marks the removable ones, then clears
/// all marks in one sweep. Returns the number of pixels removed.
fn sub_iteration<F>(
    image: &mut [u8],
    marks: &mut [u8],
    width: usize,
    height: usize,
    decide: &F,
    sub: SubIteration,
) -> usize
where
    F: Fn(u8, SubIteration) -> bool,
{
    if width < 3 || height < 3 {
        return 0; // no interior pixels
    }

    marks.fill(0);
    let mut removed = 0;

    for row in 1..height - 1 {
        let base = (row - 1) * width;
        let above = &image[base..base + width];
        let this = &image[base + width..base + 2 * width];
        let below = &image[base + 2 * width..base + 3 * width];
        let mark_row = &mut marks[row * width..(row + 1) * width];

        for col in 1..width - 1 {
            if this[col] == 0 {
                continue;
            }
            // neighborhood code: p2..p9 clockwise from north, one bit
            // each, p2 in the low bit (samples are 0 or 1 here)
            let code = above[col]
                | above[col + 1] << 1
                | this[col + 1] << 2
                | below[col + 1] << 3
                | below[col] << 4
                | below[col - 1] << 5
                | this[col - 1] << 6
                | above[col - 1] << 7;
            if decide(code, sub) {
                mark_row[col] = 1;
                removed += 1;
            }
        }
    }

    if removed > 0 {
        for (sample, &mark) in image.iter_mut().zip(marks.iter()) {
            if mark != 0 {
                *sample = 0;
            }
        }
    }

    removed
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use skeletonize_test::{grid, grid_string, random_binary};

    #[test]
    fn test_dimensions_and_channels_preserved() {
        let src = random_binary(37, 23, 7, 0.4);
        let thinned = thin_guo_hall(&src).unwrap();
        assert!(thinned.same_shape(&src));
    }

    #[test]
    fn test_empty_raster_unchanged() {
        let src = Raster::new(8, 8, Channels::Gray).unwrap();
        let thinned = thin_guo_hall(&src).unwrap();
        assert_eq!(thinned.count_nonzero(), 0);
    }

    #[test]
    fn test_solid_raster_unchanged() {
        // with no background anywhere there is no boundary to erode
        let src = Raster::filled(8, 6, Channels::Gray, 255).unwrap();
        let thinned = thin_guo_hall(&src).unwrap();
        assert_eq!(thinned.data(), src.data());
    }

    #[test]
    fn test_block_2x2_thins_to_single_pixel() {
        let src = grid(&[
            "0000", //
            "0110",
            "0110",
            "0000",
        ]);
        let thinned = thin_guo_hall(&src).unwrap();
        assert_eq!(grid_string(&thinned), "0000\n0010\n0000\n0000\n");
    }

    #[test]
    fn test_block_3x3_thins_to_center() {
        let src = grid(&[
            "00000", //
            "01110",
            "01110",
            "01110",
            "00000",
        ]);
        let thinned = thin_guo_hall(&src).unwrap();
        assert_eq!(grid_string(&thinned), "00000\n00000\n00100\n00000\n00000\n");
    }

    #[test]
    fn test_one_pixel_line_is_stable() {
        let src = grid(&[
            "00000000", //
            "01111110",
            "00000000",
        ]);
        let thinned = thin_guo_hall(&src).unwrap();
        assert_eq!(thinned.data(), src.data());
    }

    #[test]
    fn test_raster_too_small_for_interior_unchanged() {
        let src = grid(&["111", "111"]);
        let thinned = thin_guo_hall(&src).unwrap();
        assert_eq!(thinned.data(), src.data());
    }

    #[test]
    fn test_any_nonzero_sample_is_foreground() {
        let soft = Raster::from_vec(
            4,
            4,
            Channels::Gray,
            vec![
                0, 0, 0, 0, //
                0, 7, 200, 0,
                0, 200, 7, 0,
                0, 0, 0, 0,
            ],
        )
        .unwrap();
        let hard = grid(&[
            "0000", //
            "0110",
            "0110",
            "0000",
        ]);
        let a = thin_guo_hall(&soft).unwrap();
        let b = thin_guo_hall(&hard).unwrap();
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn test_output_samples_are_binary() {
        let src = random_binary(64, 64, 11, 0.6);
        let thinned = thin_guo_hall(&src).unwrap();
        assert!(thinned.data().iter().all(|&v| v == 0 || v == 255));
    }

    #[test]
    fn test_rejects_color_input() {
        let src = Raster::new(4, 4, Channels::Rgb).unwrap();
        assert!(matches!(thin_guo_hall(&src), Err(MorphError::Core(_))));
    }

    #[test]
    fn test_iteration_cap_reports_nonconvergence() {
        // a 6x6 blob needs more than one iteration to erode
        let mut src = Raster::new(8, 8, Channels::Gray).unwrap();
        for y in 1..7 {
            src.row_mut(y)[1..7].fill(255);
        }
        let options = ThinOptions {
            max_iters: 1,
            ..ThinOptions::default()
        };
        let result = thin_guo_hall_with(&src, &options);
        assert!(matches!(
            result,
            Err(MorphError::NonConvergence { iterations: 1 })
        ));
    }

    #[test]
    fn test_rule_matches_table_per_pass() {
        let tables = DecisionTables::build();
        let noise = random_binary(128, 128, 99, 0.5);
        let width = noise.width() as usize;
        let height = noise.height() as usize;

        for sub in [SubIteration::First, SubIteration::Second] {
            let mut by_rule: Vec<u8> = noise.data().iter().map(|&v| u8::from(v != 0)).collect();
            let mut by_table = by_rule.clone();
            let mut marks = vec![0u8; by_rule.len()];

            let a = sub_iteration(&mut by_rule, &mut marks, width, height, &is_removable, sub);
            let b = sub_iteration(
                &mut by_table,
                &mut marks,
                width,
                height,
                &|code, sub| tables.should_remove(code, sub),
                sub,
            );

            assert_eq!(a, b);
            assert_eq!(by_rule, by_table);
        }
    }
}
