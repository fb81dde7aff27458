//! The pixel buffer shared by every operation.
//!
//! A [`PixelBuffer`] is a rectangular, row-major grid of 8-bit pixels in one
//! of two layouts: three-channel RGB or single-channel luma. Transforms never
//! mutate their input; they allocate a fresh buffer sized for their output
//! geometry.

use image::{DynamicImage, GrayImage, RgbImage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when building a [`PixelBuffer`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match the dimensions and layout
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// How many channels each pixel carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelLayout {
    /// Red, green, blue (3 bytes per pixel).
    #[default]
    Rgb,
    /// Single luma channel (1 byte per pixel).
    Luma,
}

impl ChannelLayout {
    /// Bytes per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            ChannelLayout::Rgb => 3,
            ChannelLayout::Luma => 1,
        }
    }
}

/// A single RGB pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A channel-equal pixel.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Returns true if all three channels hold the same value.
    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Pack into a signed opaque ARGB integer (alpha = 0xFF).
    ///
    /// Pure red packs to `0xFFFF0000`, which prints as `-65536`.
    pub fn to_packed(self) -> i32 {
        let argb =
            0xFF00_0000u32 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32;
        argb as i32
    }

    /// Unpack an ARGB integer, ignoring alpha.
    pub fn from_packed(packed: i32) -> Self {
        let argb = packed as u32;
        Self::new((argb >> 16) as u8, (argb >> 8) as u8, argb as u8)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// A rectangular grid of pixels.
///
/// `PixelBuffer::default()` is the absent buffer (0x0, no data); every
/// transform rejects it. All other buffers have non-zero dimensions and
/// exactly `width * height * channels` bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from raw row-major bytes.
    pub fn new(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        data: Vec<u8>,
    ) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::InvalidDimensions { width, height });
        }

        let expected = width as usize * height as usize * layout.channels();
        if data.len() != expected {
            return Err(BufferError::InvalidPixelData {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self::from_parts(width, height, layout, data))
    }

    /// Create an RGB buffer from pixel values in row-major order.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, BufferError> {
        let data = pixels.into_iter().flat_map(Rgb::channels).collect();
        Self::new(width, height, ChannelLayout::Rgb, data)
    }

    /// Create an RGB buffer where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self, BufferError> {
        let count = width as usize * height as usize;
        Self::from_pixels(width, height, vec![color; count])
    }

    /// Assemble a buffer whose size has already been computed by the caller.
    pub(crate) fn from_parts(width: u32, height: u32, layout: ChannelLayout, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * layout.channels(),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            layout,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Bytes per pixel.
    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    /// Bytes per row.
    pub fn row_bytes(&self) -> usize {
        self.width as usize * self.channels()
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if this is the absent buffer.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.data.is_empty()
    }

    /// Raw row-major bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Raw bytes of row `y`, or `None` if out of range.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.row_bytes();
        Some(&self.data[start..start + self.row_bytes()])
    }

    /// The pixel at `(x, y)`, or `None` if out of range.
    ///
    /// Luma pixels are expanded to channel-equal RGB.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let ch = self.channels();
        let idx = (y as usize * self.width as usize + x as usize) * ch;
        Some(self.decode_pixel(&self.data[idx..idx + ch]))
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.data
            .chunks_exact(self.channels())
            .map(move |px| self.decode_pixel(px))
    }

    #[inline]
    fn decode_pixel(&self, px: &[u8]) -> Rgb {
        match self.layout {
            ChannelLayout::Rgb => Rgb::new(px[0], px[1], px[2]),
            ChannelLayout::Luma => Rgb::gray(px[0]),
        }
    }

    /// Create a buffer from an `image::RgbImage`.
    pub fn from_rgb_image(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: ChannelLayout::Rgb,
            data: img.into_raw(),
        }
    }

    /// Create a buffer from an `image::GrayImage`.
    pub fn from_gray_image(img: GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: ChannelLayout::Luma,
            data: img.into_raw(),
        }
    }

    /// Create a buffer from any decoded image.
    ///
    /// Gray sources keep a single channel; everything else becomes RGB.
    /// Alpha is dropped.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        match img {
            DynamicImage::ImageLuma8(_)
            | DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_) => Self::from_gray_image(img.into_luma8()),
            other => Self::from_rgb_image(other.into_rgb8()),
        }
    }

    /// Convert to an `image::DynamicImage` for encoding.
    ///
    /// Returns `None` for the absent buffer.
    pub fn to_dynamic(&self) -> Option<DynamicImage> {
        if self.is_empty() {
            return None;
        }
        match self.layout {
            ChannelLayout::Rgb => RgbImage::from_raw(self.width, self.height, self.data.clone())
                .map(DynamicImage::ImageRgb8),
            ChannelLayout::Luma => GrayImage::from_raw(self.width, self.height, self.data.clone())
                .map(DynamicImage::ImageLuma8),
        }
    }
}
