//! Pixel dump for debugging.
//!
//! Prints every pixel of a buffer in row-major order, one image row per
//! line. Each value is followed by a single space.

use std::fmt::Write as _;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;

/// How each pixel is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PixelStyle {
    /// Signed packed ARGB integer, e.g. `-65536` for pure red.
    #[default]
    Packed,
    /// Channel triple, e.g. `(255,0,0)`.
    Channels,
}

/// Write the pixel values of `buffer` to `writer`.
///
/// Luma pixels are printed as channel-equal triples / packed grays.
///
/// # Errors
///
/// Returns `io::ErrorKind::InvalidInput` for the absent buffer, or any
/// error from the writer.
pub fn write_pixel_values<W: Write>(
    buffer: &PixelBuffer,
    writer: &mut W,
    style: PixelStyle,
) -> io::Result<()> {
    if buffer.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "No input image supplied",
        ));
    }

    let width = buffer.width() as usize;
    let mut line = String::new();
    for (i, px) in buffer.pixels().enumerate() {
        // Writing to a String cannot fail
        let _ = match style {
            PixelStyle::Packed => write!(line, "{} ", px.to_packed()),
            PixelStyle::Channels => write!(line, "({},{},{}) ", px.r, px.g, px.b),
        };
        if (i + 1) % width == 0 {
            writeln!(writer, "{}", line)?;
            line.clear();
        }
    }
    writer.flush()
}

/// Render the pixel values of `buffer` into a `String`.
pub fn format_pixel_values(buffer: &PixelBuffer, style: PixelStyle) -> io::Result<String> {
    let mut out = Vec::new();
    write_pixel_values(buffer, &mut out, style)?;
    String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
