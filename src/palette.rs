//! Brightness palette - maps luminance to one of 11 glyphs.

use crate::{AsciiError, Result};

/// Glyphs ordered from heaviest (darkest) to lightest.
pub const PALETTE: [char; 11] = ['@', '#', 'S', '%', '?', '*', '+', ';', ':', ',', '.'];

/// Luminance span covered by one palette entry.
pub const BUCKET_WIDTH: u32 = 25;

/// Highest luminance a grayscale sample can carry.
pub const MAX_LUMINANCE: u32 = 255;

/// Select the glyph for a luminance sample in 0..=255.
pub fn quantize(luminance: u32) -> Result<char> {
    if luminance > MAX_LUMINANCE {
        return Err(AsciiError::InvalidPixel(luminance));
    }
    let index = (luminance / BUCKET_WIDTH).min(PALETTE.len() as u32 - 1);
    Ok(PALETTE[index as usize])
}
