//! Horizontal and vertical mirroring.

use log::debug;
use rayon::prelude::*;

use super::remap;
use crate::buffer::PixelBuffer;
use crate::error::{require_input, TransformError};

/// Mirror an image left-to-right: `out(x, y) = in(W - 1 - x, y)`.
///
/// # Errors
///
/// Returns `TransformError::NullInput` for the absent buffer.
pub fn flip_horizontal(input: &PixelBuffer) -> Result<PixelBuffer, TransformError> {
    require_input(input)?;
    let (w, h) = (input.width() as usize, input.height() as usize);
    debug!("flip_horizontal: {}x{}", w, h);

    Ok(remap(input, w, h, |x, y| (w - 1 - x, y)))
}

/// Mirror an image top-to-bottom: `out(x, y) = in(x, H - 1 - y)`.
///
/// Whole rows are copied, so this is a straight memcpy per row.
///
/// # Errors
///
/// Returns `TransformError::NullInput` for the absent buffer.
pub fn flip_vertical(input: &PixelBuffer) -> Result<PixelBuffer, TransformError> {
    require_input(input)?;
    let (width, height) = input.dimensions();
    debug!("flip_vertical: {}x{}", width, height);

    let row_bytes = input.row_bytes();
    let last = height as usize - 1;
    let src = input.as_bytes();
    let mut output = vec![0u8; src.len()];

    output
        .par_chunks_exact_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            let start = (last - y) * row_bytes;
            row.copy_from_slice(&src[start..start + row_bytes]);
        });

    Ok(PixelBuffer::from_parts(width, height, input.layout(), output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{ChannelLayout, Rgb};

    /// Gradient: r = 25x, g = 25y, b = 12(x + y), each mod 256.
    fn test_image(width: u32, height: u32) -> PixelBuffer {
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(Rgb::new(
                    ((x * 25) % 256) as u8,
                    ((y * 25) % 256) as u8,
                    (((x + y) * 12) % 256) as u8,
                ));
            }
        }
        PixelBuffer::from_pixels(width, height, pixels).unwrap()
    }

    #[test]
    fn test_flip_horizontal_dimensions() {
        let result = flip_horizontal(&test_image(10, 6)).unwrap();
        assert_eq!(result.dimensions(), (10, 6));
    }

    #[test]
    fn test_flip_horizontal_mapping() {
        let img = PixelBuffer::from_pixels(2, 1, vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)])
            .unwrap();
        let result = flip_horizontal(&img).unwrap();

        assert_eq!(result.pixel(0, 0), Some(Rgb::new(0, 255, 0)));
        assert_eq!(result.pixel(1, 0), Some(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn test_flip_vertical_dimensions() {
        let result = flip_vertical(&test_image(10, 6)).unwrap();
        assert_eq!(result.dimensions(), (10, 6));
    }

    #[test]
    fn test_flip_vertical_mapping() {
        let img = PixelBuffer::new(2, 3, ChannelLayout::Luma, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let result = flip_vertical(&img).unwrap();

        assert_eq!(result.as_bytes(), &[5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn test_double_horizontal_flip() {
        let img = test_image(10, 10);
        let result = flip_horizontal(&flip_horizontal(&img).unwrap()).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_double_vertical_flip() {
        let img = test_image(10, 10);
        let result = flip_vertical(&flip_vertical(&img).unwrap()).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_both_flips_equal_180_rotation() {
        let img = test_image(7, 4);
        let flipped = flip_vertical(&flip_horizontal(&img).unwrap()).unwrap();
        assert_eq!(flipped, crate::transform::rotate_180(&img).unwrap());
    }

    #[test]
    fn test_single_pixel_flip() {
        let img = PixelBuffer::filled(1, 1, Rgb::new(9, 9, 9)).unwrap();
        assert_eq!(flip_horizontal(&img).unwrap(), img);
        assert_eq!(flip_vertical(&img).unwrap(), img);
    }

    #[test]
    fn test_flip_null_input() {
        let empty = PixelBuffer::default();
        assert_eq!(flip_horizontal(&empty), Err(TransformError::NullInput));
        assert_eq!(flip_vertical(&empty), Err(TransformError::NullInput));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
