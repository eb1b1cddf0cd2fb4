use image::RgbImage;
use tracing::debug;

use crate::core::params::{BandStyle, RenderConfig};
use crate::core::processing::{BackgroundSource, resolve_background};
use crate::core::text::{Band, BlockStyle, CanvasFont, CanvasPainter, CardFont, draw_multiline, load_font};
use crate::error::Result;

/// Literal placed before the answer text
pub const ANSWER_PREFIX: &str = "Ans. : ";

/// Band heights as a percentage of canvas height, top to bottom
pub const HEADER_PERCENT: u32 = 5;
pub const TITLE_PERCENT: u32 = 20;
pub const QUESTION_PERCENT: u32 = 50;
pub const ANSWER_PERCENT: u32 = 20;
pub const FOOTER_PERCENT: u32 = 5;

fn percent_of(height: u32, percent: u32) -> u32 {
    (height as u64 * percent as u64 / 100) as u32
}

/// The five vertically stacked regions of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandLayout {
    pub header: Band,
    pub title: Band,
    pub question: Band,
    pub answer: Band,
    /// Reserved; nothing is drawn here
    pub footer: Band,
}

impl BandLayout {
    /// Split `height` with truncating percentages; any remainder falls below the footer
    pub fn for_height(height: u32) -> Self {
        let mut top = 0;
        let mut next = |percent: u32| {
            let band = Band {
                top,
                height: percent_of(height, percent),
            };
            top += band.height;
            band
        };
        Self {
            header: next(HEADER_PERCENT),
            title: next(TITLE_PERCENT),
            question: next(QUESTION_PERCENT),
            answer: next(ANSWER_PERCENT),
            footer: next(FOOTER_PERCENT),
        }
    }
}

/// The three strings drawn on one card
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardText {
    pub title: String,
    pub question: String,
    pub answer: String,
}

impl CardText {
    pub fn new(
        title: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Draws title, question and answer bands over a background
pub struct CardComposer<F: CanvasFont = CardFont> {
    config: RenderConfig,
    title_font: F,
    question_font: F,
    answer_font: F,
}

impl CardComposer<CardFont> {
    /// Load the configured font face once and size it for each band
    pub fn new(config: &RenderConfig) -> Result<Self> {
        let face = load_font(&config.font_path, config.font_index)?;
        Ok(Self::with_fonts(
            config,
            CardFont::new(face.clone(), config.title.font_size),
            CardFont::new(face.clone(), config.question.font_size),
            CardFont::new(face, config.answer.font_size),
        ))
    }
}

impl<F: CanvasFont> CardComposer<F> {
    pub fn with_fonts(config: &RenderConfig, title_font: F, question_font: F, answer_font: F) -> Self {
        Self {
            config: config.clone(),
            title_font,
            question_font,
            answer_font,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn layout(&self) -> BandLayout {
        BandLayout::for_height(self.config.height)
    }

    /// Resolve `source` to a canvas-sized background
    pub fn background(&self, source: &BackgroundSource) -> Result<RgbImage> {
        resolve_background(
            source,
            self.config.width,
            self.config.height,
            &self.config.adjustments,
        )
    }

    /// Draw `card` over a copy of `background`, which must match the canvas size
    pub fn compose_on(&self, background: &RgbImage, card: &CardText) -> RgbImage {
        let mut canvas = background.clone();
        let layout = self.layout();

        self.draw_band(&mut canvas, &self.title_font, &card.title, layout.title, &self.config.title);
        self.draw_band(
            &mut canvas,
            &self.question_font,
            &card.question,
            layout.question,
            &self.config.question,
        );
        let answer = format!("{ANSWER_PREFIX}{}", card.answer);
        self.draw_band(&mut canvas, &self.answer_font, &answer, layout.answer, &self.config.answer);

        canvas
    }

    /// Resolve the background and draw `card` on it
    pub fn compose(&self, source: &BackgroundSource, card: &CardText) -> Result<RgbImage> {
        let background = self.background(source)?;
        Ok(self.compose_on(&background, card))
    }

    fn draw_band(&self, canvas: &mut RgbImage, font: &F, text: &str, band: Band, style: &BandStyle) {
        let block = BlockStyle {
            x_margin: self.config.x_margin,
            max_width: self.config.max_text_width(),
            line_spacing_ratio: self.config.line_spacing_ratio,
            fill: style.text_color,
            outline: style.outline_color,
        };
        let mut painter = CanvasPainter::new(canvas, font);
        let lines = draw_multiline(&mut painter, text, band, &block);
        debug!("Band at {}+{}: {} line(s)", band.top, band.height, lines.len());
    }
}
