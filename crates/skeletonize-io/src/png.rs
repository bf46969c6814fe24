//! PNG image format support
//!
//! The diagnostic surface of the pipeline: stage snapshots and test
//! fixtures move through these functions. Reads map 8-bit PNG layouts
//! onto the two raster layouts, dropping alpha planes; writes emit
//! 8-bit grayscale or RGB depending on the raster's channel layout.

use crate::error::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder};
use skeletonize_core::{Channels, Raster};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, Write};
use std::path::Path;

/// Read a PNG image into a raster.
///
/// 8-bit grayscale decodes to a 1-channel raster and 8-bit RGB to a
/// 3-channel raster; grayscale+alpha and RGBA decode to the same
/// layouts with the alpha plane dropped. Other bit depths and color
/// types are rejected as unsupported.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth: {:?}",
            bit_depth
        )));
    }

    // samples per decoded pixel and the raster layout they map to
    let (samples, channels) = match color_type {
        ColorType::Grayscale => (1usize, Channels::Gray),
        ColorType::GrayscaleAlpha => (2, Channels::Gray),
        ColorType::Rgb => (3, Channels::Rgb),
        ColorType::Rgba => (4, Channels::Rgb),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG color type: {:?}",
                other
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let keep = channels.count() as usize;

    let mut out = Vec::with_capacity(width as usize * height as usize * keep);
    for row in data.chunks_exact(bytes_per_row).take(height as usize) {
        for pixel in row[..width as usize * samples].chunks_exact(samples) {
            out.extend_from_slice(&pixel[..keep]);
        }
    }

    Ok(Raster::from_vec(width, height, channels, out)?)
}

/// Write a raster as an 8-bit PNG.
///
/// 1-channel rasters encode as grayscale, 3-channel rasters as RGB.
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let color_type = match raster.channels() {
        Channels::Gray => ColorType::Grayscale,
        Channels::Rgb => ColorType::Rgb,
    };

    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(raster.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}

/// Read a PNG file into a raster.
pub fn read_png_file(path: impl AsRef<Path>) -> IoResult<Raster> {
    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

/// Write a raster to a PNG file.
pub fn write_png_file(raster: &Raster, path: impl AsRef<Path>) -> IoResult<()> {
    let file = File::create(path)?;
    write_png(raster, BufWriter::new(file))
}
