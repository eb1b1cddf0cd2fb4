//! High-level, ergonomic library API: validate table rows, render single
//! cards, and run whole batches with per-row failure isolation. Prefer these
//! entrypoints over the low-level `core` modules when integrating quizcard.
pub mod batch;
pub mod row;

pub use batch::{BatchReport, RowOutcome, render_row, render_rows, run_batch};
pub use row::{QuizRow, parse_order};

use image::RgbImage;

use crate::core::compose::{CardComposer, CardText};
use crate::core::processing::BackgroundSource;
use crate::core::text::CanvasFont;
use crate::error::Result;

/// Render the configured sample card used by `test` mode
pub fn render_sample<F: CanvasFont>(
    composer: &CardComposer<F>,
    source: &BackgroundSource,
) -> Result<RgbImage> {
    let sample = &composer.config().sample;
    let card = CardText::new(
        sample.title.as_str(),
        sample.question.as_str(),
        sample.answer.as_str(),
    );
    composer.compose(source, &card)
}
