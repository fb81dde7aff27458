//! pixedit Core - Pixel transformation library
//!
//! This crate provides the pixel transform engine for pixedit: grayscale
//! conversion, brightness scaling, quarter-turn rotation, mirroring and
//! block-average blur over an in-memory [`PixelBuffer`], plus the decode and
//! encode collaborators that move buffers to and from image files.
//!
//! Every transform is a pure function: it borrows its input, allocates a new
//! output buffer and either returns it complete or fails with a
//! [`TransformError`].

pub mod adjustments;
pub mod blur;
pub mod buffer;
pub mod decode;
pub mod encode;
pub mod error;
pub mod inspect;
pub mod luminance;
pub mod transform;

pub use adjustments::{adjust_brightness, grayscale};
pub use blur::{blur, blur_with_policy, BlurEdgePolicy};
pub use buffer::{BufferError, ChannelLayout, PixelBuffer, Rgb};
pub use error::TransformError;
pub use inspect::{format_pixel_values, write_pixel_values, PixelStyle};
pub use transform::{flip_horizontal, flip_vertical, rotate_180, rotate_left, rotate_right};
