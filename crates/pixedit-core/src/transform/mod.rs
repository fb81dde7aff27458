//! Geometric transforms: quarter-turn rotation and mirroring.
//!
//! Every transform here is a pure index remapping: each output pixel is a
//! copy of exactly one input pixel, so no interpolation happens and the
//! channel layout is preserved.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - `x` grows to the right, `y` grows downward
//! - Pixels are stored row-major

mod flip;
mod rotation;

pub use flip::{flip_horizontal, flip_vertical};
pub use rotation::{rotate_180, rotate_left, rotate_right};

use rayon::prelude::*;

use crate::buffer::PixelBuffer;

/// Build an `out_w` x `out_h` buffer where output `(x, y)` copies input
/// `source(x, y)`.
///
/// Output rows are independent and filled in parallel.
fn remap<F>(input: &PixelBuffer, out_w: usize, out_h: usize, source: F) -> PixelBuffer
where
    F: Fn(usize, usize) -> (usize, usize) + Sync,
{
    let ch = input.channels();
    let in_w = input.width() as usize;
    let src = input.as_bytes();
    let mut output = vec![0u8; out_w * out_h * ch];

    output
        .par_chunks_exact_mut(out_w * ch)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, dst) in row.chunks_exact_mut(ch).enumerate() {
                let (sx, sy) = source(x, y);
                let idx = (sy * in_w + sx) * ch;
                dst.copy_from_slice(&src[idx..idx + ch]);
            }
        });

    PixelBuffer::from_parts(out_w as u32, out_h as u32, input.layout(), output)
}
