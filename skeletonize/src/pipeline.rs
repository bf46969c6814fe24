//! The skeletonization pipeline
//!
//! Sequences the kernel crates over a color input: BT.709 grayscale,
//! bilinear downscale, threshold binarization with inverted polarity
//! (dark strokes become the foreground the thinning engine erodes),
//! Guo-Hall thinning, and a final inversion back to the caller's
//! polarity. The run fails fast: the first stage error propagates and
//! no later stage executes.

use crate::error::PipelineResult;
use crate::stages::{Stage, StageSink};
use skeletonize_color::{threshold, to_gray_bt709_with, GrayMethod, ThresholdKind};
use skeletonize_core::{Error as CoreError, Raster};
use skeletonize_morph::{thin_guo_hall_with, ThinMethod, ThinOptions};
use skeletonize_transform::{resize_with, ResizeMethod};

/// Factor both dimensions are divided by before thinning.
pub const DEFAULT_DOWNSCALE: f32 = 1.5;

/// Gray level separating strokes from page background.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Configuration for [`skeletonize`].
///
/// The defaults reproduce the standard run: divide both dimensions by
/// 1.5, binarize at 128, thin with the table backend until the fixed
/// point.
#[derive(Debug, Clone)]
pub struct SkeletonizeOptions {
    /// Downscale ratio applied to both dimensions (target size is
    /// truncated). Must be finite and positive.
    pub downscale: f32,
    /// Binarization threshold: gray values above it become background
    pub threshold: u8,
    /// Grayscale conversion backend
    pub gray_method: GrayMethod,
    /// Resize backend
    pub resize_method: ResizeMethod,
    /// Thinning classification backend
    pub thin_method: ThinMethod,
    /// Cap on thinning iterations; 0 picks `max(width, height)` of
    /// the binarized raster
    pub max_thin_iters: u32,
}

impl Default for SkeletonizeOptions {
    fn default() -> Self {
        SkeletonizeOptions {
            downscale: DEFAULT_DOWNSCALE,
            threshold: DEFAULT_THRESHOLD,
            gray_method: GrayMethod::default(),
            resize_method: ResizeMethod::default(),
            thin_method: ThinMethod::default(),
            max_thin_iters: 0,
        }
    }
}

impl SkeletonizeOptions {
    /// Replace the downscale ratio.
    pub fn with_downscale(mut self, ratio: f32) -> Self {
        self.downscale = ratio;
        self
    }

    /// Replace the binarization threshold.
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replace the grayscale conversion backend.
    pub fn with_gray_method(mut self, method: GrayMethod) -> Self {
        self.gray_method = method;
        self
    }

    /// Replace the resize backend.
    pub fn with_resize_method(mut self, method: ResizeMethod) -> Self {
        self.resize_method = method;
        self
    }

    /// Replace the thinning classification backend.
    pub fn with_thin_method(mut self, method: ThinMethod) -> Self {
        self.thin_method = method;
        self
    }

    /// Replace the thinning iteration cap (0 = automatic).
    pub fn with_max_thin_iters(mut self, cap: u32) -> Self {
        self.max_thin_iters = cap;
        self
    }
}

/// Extract the skeleton of the dark regions of a color raster.
///
/// The output raster keeps the input's polarity: skeleton pixels are
/// 0 on a 255 background, at the downscaled size.
///
/// # Errors
///
/// Fails on a non-3-channel input, a downscale ratio that is not
/// finite and positive or that truncates a dimension to zero, and on
/// thinning non-convergence.
pub fn skeletonize(src: &Raster, options: &SkeletonizeOptions) -> PipelineResult<Raster> {
    run(src, options, None)
}

/// Like [`skeletonize`], reporting every intermediate raster to `sink`.
///
/// Stages arrive in pipeline order ([`Stage::ALL`]); the sink sees the
/// input itself first and the final output last. A sink error aborts
/// the run.
pub fn skeletonize_staged(
    src: &Raster,
    options: &SkeletonizeOptions,
    sink: &mut dyn StageSink,
) -> PipelineResult<Raster> {
    run(src, options, Some(sink))
}

fn run(
    src: &Raster,
    options: &SkeletonizeOptions,
    mut sink: Option<&mut dyn StageSink>,
) -> PipelineResult<Raster> {
    if !(options.downscale.is_finite() && options.downscale > 0.0) {
        return Err(CoreError::InvalidParameter(format!(
            "downscale ratio must be finite and positive, got {}",
            options.downscale
        ))
        .into());
    }

    record(&mut sink, Stage::Input, src)?;

    let gray = to_gray_bt709_with(src, options.gray_method)?;
    record(&mut sink, Stage::Grayscale, &gray)?;

    let dst_w = (src.width() as f32 / options.downscale) as u32;
    let dst_h = (src.height() as f32 / options.downscale) as u32;
    let resized = resize_with(&gray, dst_w, dst_h, options.resize_method)?;
    record(&mut sink, Stage::Resized, &resized)?;

    let binary = threshold(&resized, options.threshold, ThresholdKind::BinaryInverted)?;
    record(&mut sink, Stage::Binarized, &binary)?;

    let thin_options = ThinOptions {
        method: options.thin_method,
        max_iters: options.max_thin_iters,
    };
    let thinned = thin_guo_hall_with(&binary, &thin_options)?;
    record(&mut sink, Stage::Thinned, &thinned)?;

    let mut output = thinned;
    output.invert();
    record(&mut sink, Stage::Output, &output)?;

    Ok(output)
}

fn record(
    sink: &mut Option<&mut dyn StageSink>,
    stage: Stage,
    raster: &Raster,
) -> PipelineResult<()> {
    if let Some(sink) = sink {
        sink.record(stage, raster)?;
    }
    Ok(())
}
