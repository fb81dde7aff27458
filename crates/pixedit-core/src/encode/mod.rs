//! Image encoding for pixedit.
//!
//! This module provides functionality for:
//! - Encoding pixel buffers to JPEG (with configurable quality), PNG or BMP
//! - Choosing the output format from a file extension
//! - Writing encoded images to disk
//!
//! # Examples
//!
//! ```ignore
//! use pixedit_core::encode::{encode, OutputFormat};
//!
//! let bytes = encode(&buffer, OutputFormat::Jpeg { quality: 90 }).unwrap();
//! println!("Encoded {} bytes", bytes.len());
//! ```

mod codec;
mod format;

pub use codec::{encode, encode_file, EncodeError};
pub use format::{OutputFormat, DEFAULT_JPEG_QUALITY};
