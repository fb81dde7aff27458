//! Buffer encoding via the `image` crate's encoders.
//!
//! RGB buffers are written as 8-bit RGB and luma buffers as 8-bit gray, so a
//! grayscale result stays single-channel on disk.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use log::info;
use thiserror::Error;

use super::OutputFormat;
use crate::buffer::{ChannelLayout, PixelBuffer};

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero (the absent buffer)
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Output extension has no matching encoder
    #[error("Unsupported output format: {0:?}")]
    UnsupportedFormat(String),

    /// The encoder itself failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// Writing the encoded bytes failed
    #[error("I/O error: {0}")]
    Io(String),
}

/// Encode a pixel buffer to bytes in the given format.
///
/// # Arguments
///
/// * `buffer` - Image to encode
/// * `format` - Target format (JPEG quality is clamped to 1-100)
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 80-90: Good quality, recommended for most uses
/// * Below 60: Low quality, visible artifacts
pub fn encode(buffer: &PixelBuffer, format: OutputFormat) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = buffer.dimensions();
    if buffer.is_empty() {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let color = match buffer.layout() {
        ChannelLayout::Rgb => ExtendedColorType::Rgb8,
        ChannelLayout::Luma => ExtendedColorType::L8,
    };
    let pixels = buffer.as_bytes();
    let mut out = Cursor::new(Vec::new());

    let result = match format {
        OutputFormat::Jpeg { quality } => JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100))
            .write_image(pixels, width, height, color),
        OutputFormat::Png => PngEncoder::new(&mut out).write_image(pixels, width, height, color),
        OutputFormat::Bmp => BmpEncoder::new(&mut out).write_image(pixels, width, height, color),
    };
    result.map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(out.into_inner())
}

/// Encode a buffer and write it to `path`, inferring the format from the
/// extension.
///
/// Returns the format that was used.
pub fn encode_file(
    buffer: &PixelBuffer,
    path: impl AsRef<Path>,
    quality: u8,
) -> Result<OutputFormat, EncodeError> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path, quality)?;
    let bytes = encode(buffer, format)?;

    fs::write(path, &bytes).map_err(|e| EncodeError::Io(format!("{}: {}", path.display(), e)))?;
    info!(
        "wrote {} ({} bytes, {:?})",
        path.display(),
        bytes.len(),
        format
    );
    Ok(format)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
