//! Photometric adjustments: grayscale conversion and brightness scaling.
//!
//! Both operations work channel-by-channel and never change the image
//! geometry. Rows are processed in parallel.

use log::debug;
use rayon::prelude::*;

use crate::buffer::{ChannelLayout, PixelBuffer};
use crate::error::{require_input, TransformError};
use crate::luminance::luma_u8;

/// Convert an image to single-channel grayscale.
///
/// Each RGB pixel is reduced to its BT.601 luma. The output always has the
/// [`ChannelLayout::Luma`] layout and the same dimensions as the input; a
/// luma input is returned unchanged.
///
/// # Errors
///
/// Returns `TransformError::NullInput` for the absent buffer.
pub fn grayscale(input: &PixelBuffer) -> Result<PixelBuffer, TransformError> {
    require_input(input)?;
    let (width, height) = input.dimensions();
    debug!("grayscale: {}x{} {:?}", width, height, input.layout());

    if input.layout() == ChannelLayout::Luma {
        return Ok(input.clone());
    }

    let w = width as usize;
    let mut output = vec![0u8; w * height as usize];

    output
        .par_chunks_exact_mut(w)
        .zip(input.as_bytes().par_chunks_exact(w * 3))
        .for_each(|(dst_row, src_row)| {
            for (dst, px) in dst_row.iter_mut().zip(src_row.chunks_exact(3)) {
                *dst = luma_u8(px[0], px[1], px[2]);
            }
        });

    Ok(PixelBuffer::from_parts(
        width,
        height,
        ChannelLayout::Luma,
        output,
    ))
}

/// Scale every channel by a percentage.
///
/// For each channel: `new = old + (old * percentage) / 100`, truncating
/// toward zero, then clamped to `[0, 255]`. Any `i32` is accepted; extreme
/// values saturate rather than wrap.
///
/// # Arguments
///
/// * `input` - Source image
/// * `percentage` - Brightness change (e.g. `50` brightens by half, `-100` gives black)
///
/// # Errors
///
/// Returns `TransformError::NullInput` for the absent buffer.
pub fn adjust_brightness(input: &PixelBuffer, percentage: i32) -> Result<PixelBuffer, TransformError> {
    require_input(input)?;
    debug!(
        "adjust_brightness: {}x{} percentage={}",
        input.width(),
        input.height(),
        percentage
    );

    // Early exit if no adjustment
    if percentage == 0 {
        return Ok(input.clone());
    }

    let output: Vec<u8> = input
        .as_bytes()
        .par_iter()
        .map(|&v| scale_channel(v, percentage))
        .collect();

    Ok(PixelBuffer::from_parts(
        input.width(),
        input.height(),
        input.layout(),
        output,
    ))
}

/// Apply the brightness formula to one channel value.
#[inline]
fn scale_channel(value: u8, percentage: i32) -> u8 {
    let old = value as i64;
    // i64 keeps i32::MIN * 255 in range; `/` truncates toward zero
    (old + (old * percentage as i64) / 100).clamp(0, 255) as u8
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating small RGB buffers.
    fn buffer_strategy() -> impl Strategy<Value = PixelBuffer> {
        (1u32..=12, 1u32..=12).prop_flat_map(|(w, h)| {
            let size = (w * h * 3) as usize;
            prop::collection::vec(any::<u8>(), size..=size)
                .prop_map(move |data| PixelBuffer::new(w, h, ChannelLayout::Rgb, data).unwrap())
        })
    }

    proptest! {
        /// Property: Positive percentages never darken a channel.
        #[test]
        fn prop_positive_never_darkens(img in buffer_strategy(), p in 1i32..=i32::MAX) {
            let result = adjust_brightness(&img, p).unwrap();
            for (before, after) in img.as_bytes().iter().zip(result.as_bytes()) {
                prop_assert!(after >= before);
            }
        }

        /// Property: Negative percentages never brighten a channel.
        #[test]
        fn prop_negative_never_brightens(img in buffer_strategy(), p in i32::MIN..=-1) {
            let result = adjust_brightness(&img, p).unwrap();
            for (before, after) in img.as_bytes().iter().zip(result.as_bytes()) {
                prop_assert!(after <= before);
            }
        }

        /// Property: Brightness preserves dimensions for any percentage.
        #[test]
        fn prop_brightness_preserves_dimensions(img in buffer_strategy(), p in any::<i32>()) {
            let result = adjust_brightness(&img, p).unwrap();
            prop_assert_eq!(result.dimensions(), img.dimensions());
            prop_assert_eq!(result.as_bytes().len(), img.as_bytes().len());
        }

        /// Property: Grayscale output is channel-equal everywhere.
        #[test]
        fn prop_grayscale_is_channel_equal(img in buffer_strategy()) {
            let result = grayscale(&img).unwrap();
            prop_assert_eq!(result.dimensions(), img.dimensions());
            prop_assert!(result.pixels().all(|p| p.is_gray()));
        }
    }
}
