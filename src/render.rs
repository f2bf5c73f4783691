//! Glyph rendering and line wrapping.

use crate::palette::quantize;
use crate::Result;
use image::GrayImage;
use std::fmt;

/// Rendered glyphs in row-major order, with the row width they were produced at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    glyphs: String,
    width: u32,
}

impl AsciiArt {
    /// Flat glyph stream, no line breaks.
    pub fn glyphs(&self) -> &str {
        &self.glyphs
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Wrapped text, one line per row, no trailing newline.
    pub fn text(&self) -> String {
        wrap(&self.glyphs, self.width)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        chunks(&self.glyphs, self.width as usize)
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Map every sample of `gray` to a palette glyph.
pub fn render(gray: &GrayImage) -> Result<AsciiArt> {
    let glyphs = gray
        .pixels()
        .map(|p| quantize(u32::from(p.0[0])))
        .collect::<Result<String>>()?;
    Ok(AsciiArt { glyphs, width: gray.width() })
}

/// Split `glyphs` into lines of `width` characters joined by `\n`.
///
/// The last line holds the remainder. Glyphs are single-byte ASCII.
pub fn wrap(glyphs: &str, width: u32) -> String {
    chunks(glyphs, width as usize).collect::<Vec<_>>().join("\n")
}

fn chunks(glyphs: &str, width: usize) -> impl Iterator<Item = &str> + '_ {
    let width = width.max(1);
    (0..glyphs.len()).step_by(width).map(move |start| {
        let end = (start + width).min(glyphs.len());
        &glyphs[start..end]
    })
}
