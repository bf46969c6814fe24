//! Raster - the image container
//!
//! A `Raster` is a row-major grid of 8-bit samples with an explicit
//! width, height, and channel layout.
//!
//! # Pixel layout
//!
//! - Samples are stored one byte each, rows packed back to back
//!   (no padding, stride = `width * channels`)
//! - 1-channel rasters hold grayscale or binary data
//! - 3-channel rasters hold color data in R,G,B byte order
//!
//! # Ownership model
//!
//! Kernels take `&Raster` and allocate a fresh output raster; the only
//! in-place mutation in the pipeline is the thinning engine's private
//! working buffer. `Raster` therefore stays a plain owned value with
//! `&mut self` mutators and no interior sharing.

pub mod compare;

use crate::error::{Error, Result};

/// Channel layout of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Channels {
    /// Single-channel grayscale or binary data
    Gray = 1,
    /// Three-channel color data, R,G,B byte order
    Rgb = 3,
}

impl Channels {
    /// Create `Channels` from a raw sample count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannelCount`] if `count` is not 1 or 3.
    pub fn from_count(count: u32) -> Result<Self> {
        match count {
            1 => Ok(Channels::Gray),
            3 => Ok(Channels::Rgb),
            _ => Err(Error::InvalidChannelCount(count)),
        }
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn count(self) -> u32 {
        self as u32
    }
}

/// Raster - row-major 8-bit image container
///
/// # Examples
///
/// ```
/// use skeletonize_core::{Channels, Raster};
///
/// let raster = Raster::new(640, 480, Channels::Gray).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert_eq!(raster.data().len(), 640 * 480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel
    channels: Channels,
    /// Sample data, `height` rows of `width * channels` bytes
    data: Vec<u8>,
}

impl Raster {
    /// Create a new raster with all samples set to zero.
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    /// * `channels` - Channel layout
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is 0.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let data = vec![0u8; Self::buffer_len(width, height, channels)];
        Ok(Raster {
            width,
            height,
            channels,
            data,
        })
    }

    /// Create a new raster with all samples set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is 0.
    pub fn filled(width: u32, height: u32, channels: Channels, value: u8) -> Result<Self> {
        let mut raster = Self::new(width, height, channels)?;
        raster.fill(value);
        Ok(raster)
    }

    /// Create a raster from an existing sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is 0, or
    /// [`Error::BufferSize`] if `data.len() != width * height * channels`.
    pub fn from_vec(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let expected = Self::buffer_len(width, height, channels);
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Raster {
            width,
            height,
            channels,
            data,
        })
    }

    #[inline]
    fn buffer_len(width: u32, height: u32, channels: Channels) -> usize {
        width as usize * height as usize * channels.count() as usize
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Get the number of bytes in one row (`width * channels`).
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * self.channels.count() as usize
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable raw access to the sample data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get the samples of one row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.row_len();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Get the mutable samples of one row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.row_len();
        let start = y as usize * stride;
        &mut self.data[start..start + stride]
    }

    /// Get the samples of one pixel, or `None` if out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let n = self.channels.count() as usize;
        let start = (y as usize * self.width as usize + x as usize) * n;
        Some(&self.data[start..start + n])
    }

    /// Create a new zero-filled raster with the same shape as this one.
    pub fn create_template(&self) -> Self {
        Raster {
            width: self.width,
            height: self.height,
            channels: self.channels,
            data: vec![0u8; self.data.len()],
        }
    }

    /// Check whether two rasters have the same width, height, and channels.
    #[inline]
    pub fn same_shape(&self, other: &Raster) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.channels == other.channels
    }

    /// Verify that this raster has the expected channel layout.
    ///
    /// Every kernel calls this before touching sample data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelMismatch`] on a different layout.
    #[inline]
    pub fn require_channels(&self, expected: Channels) -> Result<()> {
        if self.channels != expected {
            return Err(Error::channel_mismatch(expected, self.channels));
        }
        Ok(())
    }

    /// Set every sample to `value`.
    pub fn fill(&mut self, value: u8) {
        self.data.fill(value);
    }

    /// Replace every sample `v` with `255 - v`.
    pub fn invert(&mut self) {
        for v in &mut self.data {
            *v = 255 - *v;
        }
    }

    /// Count samples with a nonzero value.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

// ============================================================================
// Tests
// ============================================================================
