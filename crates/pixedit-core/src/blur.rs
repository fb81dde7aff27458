//! Block-average ("pixelate") blur.
//!
//! The image is partitioned into non-overlapping `block_size x block_size`
//! blocks starting at the origin. Every pixel of a block is replaced by the
//! block's per-channel mean, using truncating integer division.
//!
//! When the dimensions are not multiples of the block size, the trailing
//! partial blocks are handled according to a [`BlurEdgePolicy`].

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::{require_input, TransformError};

/// How to treat trailing rows/columns that don't fill a whole block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlurEdgePolicy {
    /// Edge blocks shrink to the pixels that exist and average over those.
    #[default]
    Shrink,
    /// Pixels outside complete blocks are copied unchanged from the input.
    Preserve,
    /// Dimensions must be multiples of the block size.
    Reject,
}

/// Apply block-average blur with the default [`BlurEdgePolicy::Shrink`].
///
/// # Arguments
///
/// * `input` - Source image
/// * `block_size` - Edge length of each square block, in pixels
///
/// # Errors
///
/// Returns `TransformError::NullInput` for the absent buffer and
/// `TransformError::InvalidParameter` if `block_size` is zero or larger
/// than the width or height.
pub fn blur(input: &PixelBuffer, block_size: u32) -> Result<PixelBuffer, TransformError> {
    blur_with_policy(input, block_size, BlurEdgePolicy::default())
}

/// Apply block-average blur with an explicit edge policy.
///
/// `block_size == 1` is the identity. Under [`BlurEdgePolicy::Reject`],
/// dimensions that are not multiples of `block_size` fail with
/// `TransformError::InvalidParameter`.
pub fn blur_with_policy(
    input: &PixelBuffer,
    block_size: u32,
    policy: BlurEdgePolicy,
) -> Result<PixelBuffer, TransformError> {
    require_input(input)?;
    let (width, height) = input.dimensions();
    validate_block_size(width, height, block_size, policy)?;
    debug!(
        "blur: {}x{} block_size={} policy={:?}",
        width, height, block_size, policy
    );

    if block_size == 1 {
        return Ok(input.clone());
    }

    let ch = input.channels();
    let w = width as usize;
    let bs = block_size as usize;
    let row_bytes = input.row_bytes();
    let band_bytes = row_bytes * bs;

    // Start from the input so preserved edges need no extra pass
    let mut output = input.as_bytes().to_vec();

    output
        .par_chunks_mut(band_bytes)
        .zip(input.as_bytes().par_chunks(band_bytes))
        .for_each(|(dst_band, src_band)| {
            let rows = src_band.len() / row_bytes;
            if rows < bs && policy == BlurEdgePolicy::Preserve {
                return;
            }

            for bx in (0..w).step_by(bs) {
                let cols = bs.min(w - bx);
                if cols < bs && policy == BlurEdgePolicy::Preserve {
                    continue;
                }

                let mean = block_mean(src_band, row_bytes, ch, bx, cols, rows);
                for y in 0..rows {
                    let start = y * row_bytes + bx * ch;
                    for px in dst_band[start..start + cols * ch].chunks_exact_mut(ch) {
                        px.copy_from_slice(&mean[..ch]);
                    }
                }
            }
        });

    Ok(PixelBuffer::from_parts(width, height, input.layout(), output))
}

fn validate_block_size(
    width: u32,
    height: u32,
    block_size: u32,
    policy: BlurEdgePolicy,
) -> Result<(), TransformError> {
    if block_size == 0 {
        return Err(TransformError::invalid(
            "block_size",
            block_size,
            "must be at least 1",
        ));
    }

    if block_size > width || block_size > height {
        return Err(TransformError::invalid(
            "block_size",
            block_size,
            format!("exceeds image dimensions {}x{}", width, height),
        ));
    }

    if policy == BlurEdgePolicy::Reject && (width % block_size != 0 || height % block_size != 0) {
        return Err(TransformError::invalid(
            "block_size",
            block_size,
            format!("does not evenly divide image dimensions {}x{}", width, height),
        ));
    }

    Ok(())
}

/// Truncated per-channel mean of the block starting at column `bx` of a band.
#[inline]
fn block_mean(
    band: &[u8],
    row_bytes: usize,
    ch: usize,
    bx: usize,
    cols: usize,
    rows: usize,
) -> [u8; 3] {
    let mut sums = [0u64; 3];
    for y in 0..rows {
        let start = y * row_bytes + bx * ch;
        for px in band[start..start + cols * ch].chunks_exact(ch) {
            for (sum, &v) in sums.iter_mut().zip(px) {
                *sum += v as u64;
            }
        }
    }

    let count = (rows * cols) as u64;
    let mut mean = [0u8; 3];
    for (m, sum) in mean.iter_mut().zip(sums) {
        *m = (sum / count) as u8;
    }
    mean
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
    fn test_blur_uniform_image_unchanged() {
        let img = PixelBuffer::filled(4, 4, Rgb::new(10, 20, 30)).unwrap();
        let result = blur(&img, 2).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_blur_block_size_one_is_identity() {
        let img = test_image(10, 10);
        assert_eq!(blur(&img, 1).unwrap(), img);
    }

    #[test]
    fn test_blur_preserves_dimensions() {
        let img = test_image(10, 7);
        let result = blur(&img, 2).unwrap();
        assert_eq!(result.dimensions(), (10, 7));
        assert_eq!(result.layout(), ChannelLayout::Rgb);
    }

    #[test]
    fn test_blur_block_mean_truncates() {
        // One 2x2 block with red values 0, 1, 1, 1 -> mean 3/4 truncates to 0
        let img = PixelBuffer::from_pixels(
            2,
            2,
            vec![
                Rgb::new(0, 10, 255),
                Rgb::new(1, 20, 255),
                Rgb::new(1, 30, 254),
                Rgb::new(1, 41, 254),
            ],
        )
        .unwrap();
        let result = blur(&img, 2).unwrap();

        // green: 101 / 4 = 25; blue: 1018 / 4 = 254
        assert!(result.pixels().all(|p| p == Rgb::new(0, 25, 254)));
    }

    #[test]
    fn test_blur_blocks_are_independent() {
        // 4x2 luma image, two 2x2 blocks
        let img = PixelBuffer::new(4, 2, ChannelLayout::Luma, vec![0, 4, 100, 100, 8, 12, 200, 200])
            .unwrap();
        let result = blur(&img, 2).unwrap();

        assert_eq!(result.as_bytes(), &[6, 6, 150, 150, 6, 6, 150, 150]);
    }

    #[test]
    fn test_blur_shrink_covers_edges() {
        // Right column and bottom row form one-pixel-wide edge blocks
        let img = PixelBuffer::new(
            3,
            3,
            ChannelLayout::Luma,
            vec![
                10, 20, 90, //
                30, 40, 60, //
                70, 80, 5,
            ],
        )
        .unwrap();
        let result = blur_with_policy(&img, 2, BlurEdgePolicy::Shrink).unwrap();

        assert_eq!(
            result.as_bytes(),
            &[
                25, 25, 75, //
                25, 25, 75, //
                75, 75, 5,
            ]
        );
    }

    #[test]
    fn test_blur_preserve_keeps_edges() {
        let img = PixelBuffer::new(
            3,
            3,
            ChannelLayout::Luma,
            vec![
                10, 20, 90, //
                30, 40, 60, //
                70, 80, 5,
            ],
        )
        .unwrap();
        let result = blur_with_policy(&img, 2, BlurEdgePolicy::Preserve).unwrap();

        assert_eq!(
            result.as_bytes(),
            &[
                25, 25, 90, //
                25, 25, 60, //
                70, 80, 5,
            ]
        );
    }

    #[test]
    fn test_blur_reject_non_divisible() {
        let img = test_image(5, 4);
        let result = blur_with_policy(&img, 2, BlurEdgePolicy::Reject);
        assert!(matches!(
            result,
            Err(TransformError::InvalidParameter {
                name: "block_size",
                value: 2,
                ..
            })
        ));

        // Divisible dimensions are fine
        assert!(blur_with_policy(&test_image(4, 4), 2, BlurEdgePolicy::Reject).is_ok());
    }

    #[test]
    fn test_blur_zero_block_size() {
        let result = blur(&test_image(4, 4), 0);
        assert!(matches!(
            result,
            Err(TransformError::InvalidParameter { value: 0, .. })
        ));
    }

    #[test]
    fn test_blur_block_larger_than_image() {
        let img = test_image(4, 6);
        assert!(matches!(
            blur(&img, 7),
            Err(TransformError::InvalidParameter { .. })
        ));
        // Larger than the width alone is also rejected
        assert!(matches!(
            blur(&img, 5),
            Err(TransformError::InvalidParameter { .. })
        ));
        // Exactly one block covering the short side is fine
        assert!(blur(&img, 4).is_ok());
    }

    #[test]
    fn test_blur_whole_image_block() {
        let img = PixelBuffer::new(2, 2, ChannelLayout::Luma, vec![0, 1, 2, 3]).unwrap();
        let result = blur(&img, 2).unwrap();
        // 6 / 4 = 1
        assert_eq!(result.as_bytes(), &[1, 1, 1, 1]);
    }

    #[test]
    fn test_blur_null_input() {
        assert_eq!(
            blur(&PixelBuffer::default(), 2),
            Err(TransformError::NullInput)
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
