//! Pipeline stage snapshots
//!
//! [`skeletonize_staged`](crate::skeletonize_staged) hands each
//! intermediate raster to a [`StageSink`] as soon as the stage that
//! produced it finishes, so a failing run still yields every snapshot
//! up to the failure. [`DirSink`] is the bundled filesystem sink;
//! tests and tooling implement the trait for in-memory capture.

use crate::error::PipelineResult;
use skeletonize_core::Raster;
use skeletonize_io::write_png_file;
use std::path::PathBuf;

/// Identifies one pipeline stage output.
///
/// Declared in pipeline order, so the discriminant doubles as the
/// stage position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The caller's color input, untouched
    Input,
    /// After BT.709 grayscale conversion
    Grayscale,
    /// After bilinear downscaling
    Resized,
    /// After threshold binarization (strokes are foreground here)
    Binarized,
    /// After Guo-Hall thinning
    Thinned,
    /// The skeleton, re-inverted to the caller's polarity
    Output,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Stage; 6] = [
        Stage::Input,
        Stage::Grayscale,
        Stage::Resized,
        Stage::Binarized,
        Stage::Thinned,
        Stage::Output,
    ];

    /// Position of the stage in the pipeline, starting at 0.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short lowercase name used in snapshot file names.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Input => "input",
            Stage::Grayscale => "grayscale",
            Stage::Resized => "resized",
            Stage::Binarized => "binarized",
            Stage::Thinned => "thinned",
            Stage::Output => "output",
        }
    }
}

/// Receives the intermediate rasters of a staged pipeline run.
///
/// `record` is called once per stage, in pipeline order. Errors
/// propagate out of the run like any kernel failure.
pub trait StageSink {
    fn record(&mut self, stage: Stage, raster: &Raster) -> PipelineResult<()>;
}

/// Writes every stage as `<index>-<name>.png` into one directory.
///
/// The directory must already exist; the sink does not create it.
#[derive(Debug, Clone)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirSink { dir: dir.into() }
    }

    /// Path the snapshot of `stage` is written to.
    pub fn path_for(&self, stage: Stage) -> PathBuf {
        self.dir
            .join(format!("{}-{}.png", stage.index(), stage.name()))
    }
}

impl StageSink for DirSink {
    fn record(&mut self, stage: Stage, raster: &Raster) -> PipelineResult<()> {
        write_png_file(raster, self.path_for(stage))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order_and_names() {
        assert_eq!(Stage::ALL.len(), 6);
        for (i, stage) in Stage::ALL.iter().enumerate() {
            assert_eq!(stage.index(), i);
        }
        assert_eq!(Stage::Input.name(), "input");
        assert_eq!(Stage::Output.name(), "output");
    }

    #[test]
    fn test_dir_sink_file_names() {
        let sink = DirSink::new("/tmp/snapshots");
        assert_eq!(
            sink.path_for(Stage::Binarized),
            PathBuf::from("/tmp/snapshots/3-binarized.png")
        );
    }
}
