use tracing::trace;

use super::{TextPainter, wrap::wrap_text};
use crate::types::Color;

/// Unit offsets drawn in the outline color before the fill pass
pub const OUTLINE_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A horizontal strip of the canvas reserved for one text block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub top: u32,
    pub height: u32,
}

/// Where each line of a block lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMetrics {
    /// Top of the first line; negative when the block is taller than the canvas above it
    pub first_line_top: i64,
    pub line_advance: u32,
    pub total_height: u64,
}

/// Compute the vertical placement of `line_count` lines centred in `band`.
///
/// The advance is sampled once from the font's reference line height, so every
/// line moves down by the same amount regardless of its own glyphs.
pub fn block_metrics(
    line_height: u32,
    line_spacing_ratio: f64,
    line_count: usize,
    band: Band,
) -> BlockMetrics {
    let line_advance = (line_height as f64 * line_spacing_ratio).floor().max(0.0) as u32;
    let total_height = line_advance as u64 * line_count as u64;
    let slack = band.height as i64 - total_height as i64;
    BlockMetrics {
        first_line_top: band.top as i64 + slack.div_euclid(2),
        line_advance,
        total_height,
    }
}

/// Text settings shared by every line of one block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStyle {
    pub x_margin: u32,
    pub max_width: u32,
    pub line_spacing_ratio: f64,
    pub fill: Color,
    pub outline: Option<Color>,
}

/// Draw pre-wrapped `lines` left-aligned and vertically centred in `band`
pub fn draw_lines<P: TextPainter + ?Sized>(
    painter: &mut P,
    lines: &[String],
    band: Band,
    style: &BlockStyle,
) -> BlockMetrics {
    let metrics = block_metrics(
        painter.line_height(),
        style.line_spacing_ratio,
        lines.len(),
        band,
    );
    let x = style.x_margin as i32;

    for (i, line) in lines.iter().enumerate() {
        let y = clamp_i32(metrics.first_line_top + i as i64 * metrics.line_advance as i64);
        trace!("line {} at ({}, {}): {:?}", i, x, y, line);

        if let Some(outline) = style.outline {
            for (dx, dy) in OUTLINE_OFFSETS {
                painter.draw_text(x + dx, y + dy, line, outline);
            }
        }
        painter.draw_text(x, y, line, style.fill);
    }
    metrics
}

/// Wrap `text` to `style.max_width` and draw it centred in `band`
pub fn draw_multiline<P: TextPainter + ?Sized>(
    painter: &mut P,
    text: &str,
    band: Band,
    style: &BlockStyle,
) -> Vec<String> {
    let lines = wrap_text(text, &*painter, style.max_width);
    draw_lines(painter, &lines, band, style);
    lines
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
