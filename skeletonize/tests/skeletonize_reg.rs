//! End-to-end pipeline regression test
//!
//! Drives the full run on synthetic pages: solid inputs must map to
//! exact outputs, a thick bar must collapse to a thin line inside its
//! own footprint, the two thinning backends must agree byte for byte,
//! and staged runs must report every snapshot in pipeline order.

use skeletonize::compare::count_differing;
use skeletonize::morph::ThinMethod;
use skeletonize::{
    skeletonize, skeletonize_staged, Channels, DirSink, PipelineError, PipelineResult, Raster,
    SkeletonizeOptions, Stage, StageSink,
};
use skeletonize_test::random_rgb;
use std::fs;
use std::path::PathBuf;

/// White 90x60 page with a black bar at rows 24..36, cols 15..75.
///
/// After the default 1.5x downscale the binarized foreground is
/// exactly the 8x40 block at rows 16..=23, cols 10..=49.
fn bar_page() -> Raster {
    let mut page = Raster::filled(90, 60, Channels::Rgb, 255).unwrap();
    for y in 24..36 {
        page.row_mut(y)[15 * 3..75 * 3].fill(0);
    }
    page
}

#[test]
fn skeletonize_reg() {
    // a white page holds no strokes: the output is all background
    let white = Raster::filled(64, 48, Channels::Rgb, 255).unwrap();
    let out = skeletonize(&white, &SkeletonizeOptions::default()).unwrap();
    assert_eq!(out.width(), 42); // 64 / 1.5, truncated
    assert_eq!(out.height(), 32);
    assert!(out.data().iter().all(|&v| v == 255));

    // a black page is all foreground: nothing erodes without a
    // background boundary, so every pixel stays skeleton
    let black = Raster::filled(64, 48, Channels::Rgb, 0).unwrap();
    let out = skeletonize(&black, &SkeletonizeOptions::default()).unwrap();
    assert!(out.data().iter().all(|&v| v == 0));
}

#[test]
fn skeletonize_bar_collapses_to_line() {
    let out = skeletonize(&bar_page(), &SkeletonizeOptions::default()).unwrap();
    assert_eq!(out.width(), 60);
    assert_eq!(out.height(), 40);
    assert!(out.data().iter().all(|&v| v == 0 || v == 255));

    // skeleton pixels are dark in the output's polarity
    let mut dark = 0usize;
    let mut dark_cols = [false; 60];
    for y in 0..out.height() {
        for (x, &v) in out.row(y).iter().enumerate() {
            if v == 0 {
                dark += 1;
                dark_cols[x] = true;
                assert!(
                    (16..=23).contains(&y) && (10..=49).contains(&x),
                    "skeleton pixel ({x}, {y}) left the bar footprint"
                );
            }
        }
    }

    // far fewer pixels than the 8x40 bar, still spanning most of it
    assert!(dark > 20, "skeleton too sparse: {dark} pixels");
    assert!(dark < 120, "bar not thinned: {dark} pixels");
    assert!(dark_cols.iter().filter(|&&c| c).count() >= 20);
}

#[test]
fn skeletonize_backends_agree() {
    let src = random_rgb(96, 72, 0xBEEF);
    let rule = SkeletonizeOptions::default().with_thin_method(ThinMethod::Rule);
    let table = SkeletonizeOptions::default().with_thin_method(ThinMethod::Table);

    let a = skeletonize(&src, &rule).unwrap();
    let b = skeletonize(&src, &table).unwrap();
    assert_eq!(count_differing(&a, &b).unwrap(), 0);
}

// ============================================================================
// Staged runs
// ============================================================================

struct RecordingSink {
    stages: Vec<(Stage, Raster)>,
}

impl StageSink for RecordingSink {
    fn record(&mut self, stage: Stage, raster: &Raster) -> PipelineResult<()> {
        self.stages.push((stage, raster.clone()));
        Ok(())
    }
}

/// Fails the run once the named stage arrives.
struct TrippingSink {
    trip_at: Stage,
    seen: Vec<Stage>,
}

impl StageSink for TrippingSink {
    fn record(&mut self, stage: Stage, _raster: &Raster) -> PipelineResult<()> {
        if stage == self.trip_at {
            return Err(skeletonize::Error::InvalidParameter("sink refused".to_string()).into());
        }
        self.seen.push(stage);
        Ok(())
    }
}

#[test]
fn staged_run_reports_stages_in_order() {
    let page = bar_page();
    let mut sink = RecordingSink { stages: Vec::new() };
    let out = skeletonize_staged(&page, &SkeletonizeOptions::default(), &mut sink).unwrap();

    assert_eq!(sink.stages.len(), 6);
    for (i, (stage, _)) in sink.stages.iter().enumerate() {
        assert_eq!(stage.index(), i);
    }

    let shapes: Vec<(u32, u32, Channels)> = sink
        .stages
        .iter()
        .map(|(_, r)| (r.width(), r.height(), r.channels()))
        .collect();
    assert_eq!(
        shapes,
        [
            (90, 60, Channels::Rgb),  // input
            (90, 60, Channels::Gray), // grayscale
            (60, 40, Channels::Gray), // resized
            (60, 40, Channels::Gray), // binarized
            (60, 40, Channels::Gray), // thinned
            (60, 40, Channels::Gray), // output
        ]
    );

    // the first snapshot is the untouched input, the last the result
    assert_eq!(sink.stages[0].1.data(), page.data());
    assert_eq!(sink.stages[5].1.data(), out.data());

    // a staged run returns the same bytes as a plain run
    let plain = skeletonize(&page, &SkeletonizeOptions::default()).unwrap();
    assert_eq!(count_differing(&plain, &out).unwrap(), 0);
}

#[test]
fn staged_run_stops_on_sink_error() {
    let mut sink = TrippingSink {
        trip_at: Stage::Resized,
        seen: Vec::new(),
    };
    let result = skeletonize_staged(&bar_page(), &SkeletonizeOptions::default(), &mut sink);
    assert!(matches!(result, Err(PipelineError::Core(_))));
    assert_eq!(sink.seen, [Stage::Input, Stage::Grayscale]);
}

#[test]
fn dir_sink_writes_documented_files() {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("skeletonize_reg");
    fs::create_dir_all(&dir).unwrap();

    let mut sink = DirSink::new(&dir);
    let out = skeletonize_staged(&bar_page(), &SkeletonizeOptions::default(), &mut sink).unwrap();

    let names: Vec<String> = Stage::ALL
        .iter()
        .map(|s| format!("{}-{}.png", s.index(), s.name()))
        .collect();
    assert_eq!(
        names,
        [
            "0-input.png",
            "1-grayscale.png",
            "2-resized.png",
            "3-binarized.png",
            "4-thinned.png",
            "5-output.png",
        ]
    );
    for stage in Stage::ALL {
        assert!(sink.path_for(stage).is_file(), "missing {:?}", stage);
    }

    // the output snapshot holds the returned bytes
    let snapshot = skeletonize::io::read_png_file(sink.path_for(Stage::Output)).unwrap();
    assert_eq!(snapshot.data(), out.data());
}
