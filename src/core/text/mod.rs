//! Text layout: greedy line wrapping, centred multiline drawing, and the
//! font-backed measurer/painter used on real canvases.
pub mod font;
pub mod render;
pub mod wrap;

pub use font::{CanvasPainter, CardFont, REFERENCE_GLYPH, load_font};
pub use render::{Band, BlockMetrics, BlockStyle, OUTLINE_OFFSETS, draw_lines, draw_multiline};
pub use wrap::wrap_text;

use image::RgbImage;

use crate::types::Color;

/// Pixel metrics for a single font at a fixed size
pub trait TextMeasure {
    /// Advance width of `text` laid out on one line
    fn text_width(&self, text: &str) -> u32;

    /// Height sampled from the reference glyph, used for every line
    fn line_height(&self) -> u32;
}

/// A surface that can draw a run of text with the font it measures with
pub trait TextPainter: TextMeasure {
    /// `(x, y)` is the top-left of the line box
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color);
}

/// A sized font that can rasterize onto an RGB canvas
pub trait CanvasFont: TextMeasure {
    fn draw_on(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Color);
}
