use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::{info, warn};

use super::row::QuizRow;
use crate::core::compose::{CardComposer, CardText};
use crate::core::processing::BackgroundSource;
use crate::core::text::CanvasFont;
use crate::error::{Error, Result};
use crate::io::table::TableRow;
use crate::io::writers::write_rgb_png;

/// What happened to one table row
#[derive(Debug)]
pub struct RowOutcome {
    /// 1-based sheet row number
    pub line: usize,
    /// Display order, when the row got far enough to parse it
    pub order: Option<u32>,
    pub result: Result<PathBuf>,
}

impl RowOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&Error> {
        self.result.as_ref().err()
    }
}

/// Per-row results of a batch, in table order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<RowOutcome>,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.processed() - self.succeeded()
    }

    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(PathBuf::as_path))
    }

    pub fn failures(&self) -> impl Iterator<Item = &RowOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }
}

/// Render one validated row over `background` and save it under `base_dir`
pub fn render_row<F: CanvasFont>(
    composer: &CardComposer<F>,
    background: &RgbImage,
    row: &QuizRow,
    base_dir: &Path,
) -> Result<PathBuf> {
    let dir = row.output_dir(base_dir);
    fs::create_dir_all(&dir)?;
    let path = dir.join(row.file_name());

    let card = CardText::new(row.title(), row.question_text.as_str(), row.answer_text.as_str());
    let image = composer.compose_on(background, &card);
    write_rgb_png(&path, &image)?;
    Ok(path)
}

fn process_table_row<F: CanvasFont>(
    composer: &CardComposer<F>,
    background: &RgbImage,
    raw: &TableRow,
    base_dir: &Path,
) -> RowOutcome {
    let row = match QuizRow::try_from(raw) {
        Ok(row) => row,
        Err(e) => {
            return RowOutcome {
                line: raw.line,
                order: None,
                result: Err(e),
            };
        }
    };
    RowOutcome {
        line: raw.line,
        order: Some(row.order),
        result: render_row(composer, background, &row, base_dir),
    }
}

/// Render already prepared `background` for every row; a failing row never stops the batch
pub fn render_rows<F: CanvasFont>(
    composer: &CardComposer<F>,
    background: &RgbImage,
    rows: &[TableRow],
    base_dir: &Path,
) -> BatchReport {
    let mut report = BatchReport::default();

    for raw in rows {
        let outcome = process_table_row(composer, background, raw, base_dir);
        match (&outcome.result, outcome.order) {
            (Ok(path), _) => info!("Row {}: wrote {:?}", outcome.line, path),
            (Err(e), Some(order)) => warn!("Row {} (order {}): {}", outcome.line, order, e),
            (Err(e), None) => warn!("Row {}: {}", outcome.line, e),
        }
        report.outcomes.push(outcome);
    }

    info!("Batch processing complete!");
    info!("Processed: {}", report.processed());
    info!("Succeeded: {}", report.succeeded());
    info!("Errors: {}", report.failed());
    report
}

/// Resolve `source` once, then render every row relative to `base_dir`.
/// Only background resolution can fail the batch as a whole.
pub fn run_batch<F: CanvasFont>(
    composer: &CardComposer<F>,
    source: &BackgroundSource,
    rows: &[TableRow],
    base_dir: &Path,
) -> Result<BatchReport> {
    info!("Starting batch of {} row(s) into {:?}", rows.len(), base_dir);
    let background = composer.background(source)?;
    Ok(render_rows(composer, &background, rows, base_dir))
}
