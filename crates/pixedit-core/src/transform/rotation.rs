//! Quarter-turn rotation.
//!
//! Rotation uses inverse mapping: for each pixel in the output image we
//! compute the single source pixel it comes from. For an input of width `W`
//! and height `H`:
//!
//! ```text
//! right (90° CW):   out(x, y) = in(y, H - 1 - x)        output is H x W
//! left  (90° CCW):  out(x, y) = in(W - 1 - y, x)        output is H x W
//! 180°:             out(x, y) = in(W - 1 - x, H - 1 - y) output is W x H
//! ```

use log::debug;

use super::remap;
use crate::buffer::PixelBuffer;
use crate::error::{require_input, TransformError};

/// Rotate an image 90 degrees clockwise.
///
/// The output width is the input height and vice versa.
///
/// # Errors
///
/// Returns `TransformError::NullInput` for the absent buffer.
pub fn rotate_right(input: &PixelBuffer) -> Result<PixelBuffer, TransformError> {
    require_input(input)?;
    let (w, h) = (input.width() as usize, input.height() as usize);
    debug!("rotate_right: {}x{} -> {}x{}", w, h, h, w);

    Ok(remap(input, h, w, |x, y| (y, h - 1 - x)))
}

/// Rotate an image 90 degrees counter-clockwise.
///
/// The output width is the input height and vice versa.
///
/// # Errors
///
/// Returns `TransformError::NullInput` for the absent buffer.
pub fn rotate_left(input: &PixelBuffer) -> Result<PixelBuffer, TransformError> {
    require_input(input)?;
    let (w, h) = (input.width() as usize, input.height() as usize);
    debug!("rotate_left: {}x{} -> {}x{}", w, h, h, w);

    Ok(remap(input, h, w, |x, y| (w - 1 - y, x)))
}

/// Rotate an image 180 degrees.
pub fn rotate_180(input: &PixelBuffer) -> Result<PixelBuffer, TransformError> {
    require_input(input)?;
    let (w, h) = (input.width() as usize, input.height() as usize);
    debug!("rotate_180: {}x{}", w, h);

    Ok(remap(input, w, h, |x, y| (w - 1 - x, h - 1 - y)))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::buffer::ChannelLayout;
    use proptest::prelude::*;

    /// Strategy for generating small buffers of either layout.
    fn buffer_strategy() -> impl Strategy<Value = PixelBuffer> {
        (1u32..=16, 1u32..=16, prop::bool::ANY).prop_flat_map(|(w, h, luma)| {
            let layout = if luma {
                ChannelLayout::Luma
            } else {
                ChannelLayout::Rgb
            };
            let size = (w * h) as usize * layout.channels();
            prop::collection::vec(any::<u8>(), size..=size)
                .prop_map(move |data| PixelBuffer::new(w, h, layout, data).unwrap())
        })
    }

    proptest! {
        /// Property: Four clockwise rotations reproduce the input.
        #[test]
        fn prop_four_right_rotations_identity(img in buffer_strategy()) {
            let mut result = img.clone();
            for _ in 0..4 {
                result = rotate_right(&result).unwrap();
            }
            prop_assert_eq!(result, img);
        }

        /// Property: Four counter-clockwise rotations reproduce the input.
        #[test]
        fn prop_four_left_rotations_identity(img in buffer_strategy()) {
            let mut result = img.clone();
            for _ in 0..4 {
                result = rotate_left(&result).unwrap();
            }
            prop_assert_eq!(result, img);
        }

        /// Property: Rotation swaps width and height and keeps the layout.
        #[test]
        fn prop_rotation_swaps_dimensions(img in buffer_strategy()) {
            let (w, h) = img.dimensions();
            let right = rotate_right(&img).unwrap();
            let left = rotate_left(&img).unwrap();

            prop_assert_eq!(right.dimensions(), (h, w));
            prop_assert_eq!(left.dimensions(), (h, w));
            prop_assert_eq!(right.layout(), img.layout());
        }

        /// Property: Clockwise rotation follows out(x, y) = in(y, H - 1 - x).
        #[test]
        fn prop_rotate_right_mapping(img in buffer_strategy()) {
            let h = img.height();
            let result = rotate_right(&img).unwrap();
            for y in 0..result.height() {
                for x in 0..result.width() {
                    prop_assert_eq!(result.pixel(x, y), img.pixel(y, h - 1 - x));
                }
            }
        }
    }
}
