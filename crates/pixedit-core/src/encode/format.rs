//! Output format selection.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::EncodeError;

/// JPEG quality used when none is given.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Format to serialize a buffer into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Lossy JPEG; quality is clamped to 1-100 at encode time.
    Jpeg { quality: u8 },
    /// Lossless PNG.
    Png,
    /// Uncompressed BMP.
    Bmp,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Jpeg {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl OutputFormat {
    /// Infer the format from a file extension (case-insensitive).
    ///
    /// `quality` is only used for JPEG.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::UnsupportedFormat` for unknown or missing
    /// extensions.
    pub fn from_path(path: impl AsRef<Path>, quality: u8) -> Result<Self, EncodeError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg { quality }),
            "png" => Ok(OutputFormat::Png),
            "bmp" => Ok(OutputFormat::Bmp),
            _ => Err(EncodeError::UnsupportedFormat(ext)),
        }
    }

    /// Canonical file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg { .. } => "jpg",
            OutputFormat::Png => "png",
            OutputFormat::Bmp => "bmp",
        }
    }
}
