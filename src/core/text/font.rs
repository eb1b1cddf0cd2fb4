use std::path::Path;

use ab_glyph::{Font, FontArc, FontVec, PxScale, ScaleFont, point};
use image::RgbImage;
use imageproc::drawing::{draw_text_mut, text_size};
use tracing::debug;

use super::{CanvasFont, TextMeasure, TextPainter};
use crate::error::{Error, Result};
use crate::types::Color;

/// Glyph used to sample the line height of a font
pub const REFERENCE_GLYPH: char = 'あ';

/// Load a font face from disk, selecting `index` inside collections
pub fn load_font(path: &Path, index: u32) -> Result<FontArc> {
    if !path.is_file() {
        return Err(Error::FontNotFound {
            path: path.to_path_buf(),
        });
    }
    let data = std::fs::read(path)?;
    let font = FontVec::try_from_vec_and_index(data, index).map_err(|_| Error::InvalidFont {
        path: path.to_path_buf(),
        index,
    })?;
    debug!("Loaded font {:?} (face {})", path, index);
    Ok(FontArc::new(font))
}

/// A font face bound to a pixel size
#[derive(Clone, Debug)]
pub struct CardFont {
    font: FontArc,
    scale: PxScale,
}

impl CardFont {
    pub fn new(font: FontArc, size: f32) -> Self {
        Self {
            font,
            scale: PxScale::from(size),
        }
    }

    pub fn font(&self) -> &FontArc {
        &self.font
    }

    pub fn scale(&self) -> PxScale {
        self.scale
    }
}

impl TextMeasure for CardFont {
    fn text_width(&self, text: &str) -> u32 {
        text_size(self.scale, &self.font, text).0
    }

    fn line_height(&self) -> u32 {
        let scaled = self.font.as_scaled(self.scale);
        let mut glyph = scaled.scaled_glyph(REFERENCE_GLYPH);
        glyph.position = point(0.0, scaled.ascent());
        match self.font.outline_glyph(glyph) {
            Some(outlined) => outlined.px_bounds().max.y.ceil().max(0.0) as u32,
            // Missing glyphs resolve to .notdef; only an outline-less .notdef lands here
            None => (scaled.ascent() - scaled.descent()).ceil().max(0.0) as u32,
        }
    }
}

impl CanvasFont for CardFont {
    fn draw_on(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Color) {
        draw_text_mut(canvas, color.to_rgb(), x, y, self.scale, &self.font, text);
    }
}

/// Paints text straight onto an RGB canvas with one font
pub struct CanvasPainter<'a, F: CanvasFont + ?Sized> {
    canvas: &'a mut RgbImage,
    font: &'a F,
}

impl<'a, F: CanvasFont + ?Sized> CanvasPainter<'a, F> {
    pub fn new(canvas: &'a mut RgbImage, font: &'a F) -> Self {
        Self { canvas, font }
    }
}

impl<F: CanvasFont + ?Sized> TextMeasure for CanvasPainter<'_, F> {
    fn text_width(&self, text: &str) -> u32 {
        self.font.text_width(text)
    }

    fn line_height(&self) -> u32 {
        self.font.line_height()
    }
}

impl<F: CanvasFont + ?Sized> TextPainter for CanvasPainter<'_, F> {
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        self.font.draw_on(self.canvas, x, y, text, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_names_the_path() {
        let err = load_font(Path::new("/definitely/not/here.ttf"), 0).unwrap_err();
        assert!(matches!(err, Error::FontNotFound { .. }));
        assert!(err.to_string().contains("/definitely/not/here.ttf"));
    }

    #[test]
    fn garbage_bytes_are_not_a_font() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font at all").unwrap();
        assert!(matches!(
            load_font(&path, 0),
            Err(Error::InvalidFont { index: 0, .. })
        ));
    }
}
