//! One user request mapped onto exactly one core call.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use pixedit_core::encode::{encode_file, OutputFormat};
use pixedit_core::{
    adjust_brightness, blur_with_policy, flip_horizontal, flip_vertical, grayscale, rotate_left,
    rotate_right, write_pixel_values, BlurEdgePolicy, PixelBuffer, PixelStyle,
};

/// A single operation the user can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    PrintPixels(PixelStyle),
    Grayscale,
    Brightness(i32),
    RotateRight,
    RotateLeft,
    FlipHorizontal,
    FlipVertical,
    Blur {
        block_size: u32,
        policy: BlurEdgePolicy,
    },
}

/// What running an operation produced.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Pixel values were written; there is no image to save.
    Printed,
    /// A new image to save.
    Image(PixelBuffer),
}

impl Operation {
    /// Short human-readable name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::PrintPixels(_) => "print pixel values",
            Operation::Grayscale => "grayscale",
            Operation::Brightness(_) => "brightness",
            Operation::RotateRight => "rotate right",
            Operation::RotateLeft => "rotate left",
            Operation::FlipHorizontal => "flip horizontal",
            Operation::FlipVertical => "flip vertical",
            Operation::Blur { .. } => "blur",
        }
    }

    /// Run against `image`. Pixel dumps go to `out`.
    pub fn run<W: Write>(&self, image: &PixelBuffer, out: &mut W) -> Result<Outcome> {
        info!("running {}", self.name());
        let result = match *self {
            Operation::PrintPixels(style) => {
                write_pixel_values(image, out, style).context("failed to print pixel values")?;
                return Ok(Outcome::Printed);
            }
            Operation::Grayscale => grayscale(image),
            Operation::Brightness(percentage) => adjust_brightness(image, percentage),
            Operation::RotateRight => rotate_right(image),
            Operation::RotateLeft => rotate_left(image),
            Operation::FlipHorizontal => flip_horizontal(image),
            Operation::FlipVertical => flip_vertical(image),
            Operation::Blur { block_size, policy } => blur_with_policy(image, block_size, policy),
        };
        let buffer = result.with_context(|| format!("{} failed", self.name()))?;
        Ok(Outcome::Image(buffer))
    }
}

/// Encode `buffer` to `path`, picking the format from its extension.
pub fn save(buffer: &PixelBuffer, path: &Path, quality: u8) -> Result<OutputFormat> {
    encode_file(buffer, path, quality).with_context(|| format!("failed to save {}", path.display()))
}
