//! Luma calculation using ITU-R BT.601 coefficients.
//!
//! Weights are kept as integers (per mille) so grayscale conversion is exact
//! and reproducible across platforms.

/// ITU-R BT.601 weight for the red channel, per mille.
pub const LUMA_R: u32 = 299;

/// ITU-R BT.601 weight for the green channel, per mille.
pub const LUMA_G: u32 = 587;

/// ITU-R BT.601 weight for the blue channel, per mille.
pub const LUMA_B: u32 = 114;

/// Calculate luma from u8 RGB values (0 to 255), rounded to nearest.
///
/// # Arguments
/// * `r` - Red channel value (0-255)
/// * `g` - Green channel value (0-255)
/// * `b` - Blue channel value (0-255)
///
/// # Returns
/// Luma value (0-255)
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let weighted = LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32;
    // Weights sum to 1000, so the result never exceeds 255
    ((weighted + 500) / 1000) as u8
}
