//! Image decoding for pixedit.
//!
//! This module provides functionality for:
//! - Decoding any supported format (JPEG, PNG, BMP) from bytes
//! - Correcting EXIF orientation so buffers come out upright
//! - Reading and decoding files from disk
//!
//! # Examples
//!
//! ```ignore
//! use pixedit_core::decode::decode_file;
//!
//! let image = decode_file("photo.jpg").unwrap();
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```

mod file;
mod reader;
mod types;

pub use file::decode_file;
pub use reader::{decode, decode_no_orientation, get_orientation};
pub use types::{DecodeError, Orientation};
