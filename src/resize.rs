//! Aspect-preserving resize to a fixed output width.

use crate::{AsciiError, Result};
use image::{imageops, GrayImage};

/// Upper bound on `width * height` of a resize target.
pub const MAX_SAMPLES: u64 = 1 << 26;

/// Compute the `(width, height)` an image of `w0 × h0` is resized to.
///
/// Height is `round(width * h0 / w0)`, taken from the original dimensions.
pub fn target_dimensions(w0: u32, h0: u32, width: u32) -> Result<(u32, u32)> {
    if w0 == 0 || h0 == 0 {
        return Err(AsciiError::InvalidImage { width: w0, height: h0 });
    }
    if width == 0 {
        return Err(AsciiError::InvalidTarget { width, height: 0 });
    }
    // round-half-up in integers: (2*n + d) / (2*d)
    let (n, d) = (u128::from(width) * u128::from(h0), u128::from(w0));
    let height = (2 * n + d) / (2 * d);
    if height == 0 {
        return Err(AsciiError::InvalidImage { width: w0, height: h0 });
    }
    let samples = height.saturating_mul(u128::from(width));
    if samples > u128::from(MAX_SAMPLES) {
        let height = u64::try_from(height).unwrap_or(u64::MAX);
        return Err(AsciiError::InvalidTarget { width, height });
    }
    // bounded by MAX_SAMPLES
    Ok((width, height as u32))
}

/// Resize a grayscale image to `width` columns, keeping its aspect ratio.
pub fn resize_to_width(gray: &GrayImage, width: u32) -> Result<GrayImage> {
    let (w0, h0) = gray.dimensions();
    let (out_w, out_h) = target_dimensions(w0, h0, width)?;
    log::debug!("resizing {w0}x{h0} -> {out_w}x{out_h}");

    if (w0, h0) == (out_w, out_h) {
        return Ok(gray.clone());
    }
    Ok(imageops::resize(gray, out_w, out_h, imageops::FilterType::CatmullRom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_landscape() {
        assert_eq!(target_dimensions(200, 100, 100).unwrap(), (100, 50));
    }

    #[test]
    fn test_portrait() {
        assert_eq!(target_dimensions(50, 120, 100).unwrap(), (100, 240));
    }

    #[test]
    fn test_rounds_half_up() {
        // 100 * 1 / 8 = 12.5
        assert_eq!(target_dimensions(8, 1, 100).unwrap(), (100, 13));
        // 100 * 1 / 3 = 33.33
        assert_eq!(target_dimensions(3, 1, 100).unwrap(), (100, 33));
        // 100 * 2 / 3 = 66.67
        assert_eq!(target_dimensions(3, 2, 100).unwrap(), (100, 67));
    }

    #[test]
    fn test_scale_invariant() {
        for &(w, h) in &[(200, 100), (37, 91), (640, 480), (3, 7)] {
            assert_eq!(
                target_dimensions(w, h, 100).unwrap(),
                target_dimensions(w * 2, h * 2, 100).unwrap()
            );
        }
    }

    #[test]
    fn test_zero_width() {
        assert!(matches!(
            target_dimensions(0, 10, 100),
            Err(AsciiError::InvalidImage { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_zero_target_width() {
        assert!(matches!(
            target_dimensions(4, 4, 0),
            Err(AsciiError::InvalidTarget { width: 0, .. })
        ));
    }

    #[test]
    fn test_extreme_inputs_do_not_overflow() {
        assert!(matches!(
            target_dimensions(u32::MAX, u32::MAX, u32::MAX),
            Err(AsciiError::InvalidTarget { .. })
        ));
        assert!(matches!(
            target_dimensions(1, u32::MAX, u32::MAX),
            Err(AsciiError::InvalidTarget { .. })
        ));
        assert_eq!(target_dimensions(u32::MAX, u32::MAX, 100).unwrap(), (100, 100));
    }

    #[test]
    fn test_target_over_sample_limit() {
        // 1x1 at width 10000 needs 10^8 samples
        let err = target_dimensions(1, 1, 10_000).unwrap_err();
        assert!(matches!(err, AsciiError::InvalidTarget { width: 10_000, height: 10_000 }));
        assert_eq!(target_dimensions(1, 1, 8_000).unwrap(), (8_000, 8_000));
    }

    #[test]
    fn test_height_rounds_to_zero() {
        // 100 * 1 / 1000 = 0.1
        assert!(matches!(
            target_dimensions(1000, 1, 100),
            Err(AsciiError::InvalidImage { .. })
        ));
    }

    #[test]
    fn test_resize_output_dimensions() {
        let img = GrayImage::from_pixel(200, 100, Luma([128]));
        let resized = resize_to_width(&img, 100).unwrap();
        assert_eq!(resized.dimensions(), (100, 50));
    }

    #[test]
    fn test_resize_keeps_uniform_luminance() {
        let img = GrayImage::from_pixel(64, 32, Luma([200]));
        let resized = resize_to_width(&img, 100).unwrap();
        assert_eq!(resized.dimensions(), (100, 50));
        assert!(resized.pixels().all(|p| p.0[0].abs_diff(200) <= 1));
    }

    #[test]
    fn test_resize_noop_at_target() {
        let mut img = GrayImage::new(100, 50);
        img.put_pixel(3, 4, Luma([77]));
        let resized = resize_to_width(&img, 100).unwrap();
        assert_eq!(resized, img);
    }
}
