//! In-memory image decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::ImageReader;
use log::debug;

use super::{DecodeError, Orientation};
use crate::buffer::PixelBuffer;
use crate::transform::{flip_horizontal, flip_vertical, rotate_180, rotate_left, rotate_right};

/// Decode an image from bytes, applying EXIF orientation correction.
///
/// The format is guessed from the bytes. Gray sources decode to a luma
/// buffer; everything else decodes to RGB with alpha dropped.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are empty or not a
/// recognized image format.
/// Returns `DecodeError::CorruptedFile` if the image data is broken.
pub fn decode(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let orientation = extract_orientation(bytes);
    let buffer = decode_no_orientation(bytes)?;
    apply_orientation(buffer, orientation)
}

/// Decode an image from bytes without applying EXIF orientation.
pub fn decode_no_orientation(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let format = reader.format().ok_or(DecodeError::InvalidFormat)?;
    debug!("decoding {:?} image ({} bytes)", format, bytes.len());

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let buffer = PixelBuffer::from_dynamic(img);
    if buffer.is_empty() {
        return Err(DecodeError::CorruptedFile(
            "image has zero width or height".to_string(),
        ));
    }
    Ok(buffer)
}

/// Extract EXIF orientation value from image bytes (for external use).
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(e) => {
            debug!("no EXIF orientation: {}", e);
            Orientation::Normal
        }
    }
}

/// Bring a decoded buffer upright using the engine's own transforms.
fn apply_orientation(
    buffer: PixelBuffer,
    orientation: Orientation,
) -> Result<PixelBuffer, DecodeError> {
    let oriented = match orientation {
        Orientation::Normal => return Ok(buffer),
        Orientation::FlipHorizontal => flip_horizontal(&buffer),
        Orientation::Rotate180 => rotate_180(&buffer),
        Orientation::FlipVertical => flip_vertical(&buffer),
        Orientation::Transpose => rotate_right(&buffer).and_then(|b| flip_horizontal(&b)),
        Orientation::Rotate90CW => rotate_right(&buffer),
        Orientation::Transverse => rotate_left(&buffer).and_then(|b| flip_horizontal(&b)),
        Orientation::Rotate270CW => rotate_left(&buffer),
    };
    debug!("applied EXIF orientation {:?}", orientation);
    oriented.map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}
