//! Decoding straight from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::info;

use super::{decode, DecodeError};
use crate::buffer::PixelBuffer;

/// Read and decode the image at `path`.
///
/// # Errors
///
/// Returns `DecodeError::FileNotFound` if the path does not exist,
/// `DecodeError::Io` for other read failures, and any error from [`decode`].
pub fn decode_file(path: impl AsRef<Path>) -> Result<PixelBuffer, DecodeError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DecodeError::FileNotFound(path.to_path_buf()),
        _ => DecodeError::Io(format!("{}: {}", path.display(), e)),
    })?;

    let buffer = decode(&bytes)?;
    info!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        buffer.width(),
        buffer.height(),
        buffer.layout()
    );
    Ok(buffer)
}
