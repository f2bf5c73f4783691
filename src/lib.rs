//! Image to ASCII art converter using an 11-step brightness palette.

pub mod output;
pub mod palette;
pub mod prompt;
pub mod render;
pub mod resize;

pub use render::AsciiArt;

use image::{DynamicImage, GrayImage};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Output width used when none is given.
pub const DEFAULT_WIDTH: u32 = 100;

#[derive(Error, Debug)]
pub enum AsciiError {
    #[error("cannot decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("invalid image dimensions {width}x{height}")]
    InvalidImage { width: u32, height: u32 },
    #[error("invalid output size {width}x{height} (at most {} characters)", resize::MAX_SAMPLES)]
    InvalidTarget { width: u32, height: u64 },
    #[error("luminance {0} is outside 0..=255")]
    InvalidPixel(u32),
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no answer given to: {0}")]
    MissingAnswer(&'static str),
}

pub type Result<T> = std::result::Result<T, AsciiError>;

/// Decode an image file from disk.
pub fn load(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let image = image::open(path)
        .map_err(|source| AsciiError::Decode { path: path.to_path_buf(), source })?;
    log::debug!("decoded {} ({}x{})", path.display(), image.width(), image.height());
    Ok(image)
}

/// Single-channel luminance in 0..=255.
pub fn to_luminance(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}

/// Converts images to ASCII art at a fixed output width
pub struct Converter {
    width: u32,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    pub fn new() -> Self {
        Self { width: DEFAULT_WIDTH }
    }

    /// Row width in characters, used both to resize and to wrap.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn convert(&self, image: &DynamicImage) -> Result<AsciiArt> {
        let gray = to_luminance(image);
        let resized = resize::resize_to_width(&gray, self.width)?;
        render::render(&resized)
    }

    pub fn convert_path(&self, path: impl AsRef<Path>) -> Result<AsciiArt> {
        self.convert(&load(path)?)
    }
}

/// Convert `input`, save the art to `output` and print it to `display`.
///
/// Nothing is written to `output` unless rendering succeeds. If saving fails
/// the art is still printed before the error is returned.
pub fn convert_file<W: Write>(
    converter: &Converter,
    input: &Path,
    output: &Path,
    display: &mut W,
) -> Result<AsciiArt> {
    let art = converter.convert_path(input)?;
    let text = art.text();

    let saved = output::write_atomic(output, &text);
    if let Err(e) = &saved {
        log::warn!("displaying art that could not be saved: {e}");
    }
    writeln!(display, "{text}")?;
    display.flush()?;
    saved?;
    Ok(art)
}
