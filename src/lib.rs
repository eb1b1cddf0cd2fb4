#![doc = r#"
quizcard: render quiz-card images from spreadsheet rows.

Each card is a fixed-layout image: a title band, a question band and an answer
band drawn over a solid color or a stretched background image. Text is wrapped
one character at a time against a pixel budget, which suits Japanese and other
scripts written without spaces, and each block is vertically centred in its band
with an optional 8-direction outline.

Quick start: render one card
----------------------------
```rust,no_run
use quizcard::{BackgroundSource, CardComposer, CardText, RenderConfig};

fn main() -> quizcard::Result<()> {
    let config = RenderConfig::load("quizcard.json".as_ref())?;
    let composer = CardComposer::new(&config)?;
    let card = CardText::new("第1ラウンド 1問目", "日本で一番高い山は？", "富士山");
    let image = composer.compose(&BackgroundSource::Color(config.background_color), &card)?;
    image.save("card.png")?;
    Ok(())
}
```

Batch from a workbook
---------------------
```rust,no_run
use std::path::Path;
use quizcard::{BackgroundSource, CardComposer, RenderConfig, read_table, run_batch};

fn main() -> quizcard::Result<()> {
    let config = RenderConfig::load(Path::new("quizcard.json"))?;
    let composer = CardComposer::new(&config)?;
    let rows = read_table(Path::new("quiz.xlsx"))?;
    let report = run_batch(
        &composer,
        &BackgroundSource::Image("background.jpg".into()),
        &rows,
        Path::new("."),
    )?;
    println!("ok={} failed={}", report.succeeded(), report.failed());
    Ok(())
}
```

A row with a bad order or a missing field shows up as a failed
[`RowOutcome`] in the report; the remaining rows are still rendered.

Useful modules
--------------
- [`api`]: rows, single cards and batches.
- [`core`]: configuration, text wrapping/drawing, backgrounds, composition.
- [`io`]: spreadsheet input, PNG output, dialogs and preview sinks.
- [`error`]: crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::compose::{ANSWER_PREFIX, BandLayout, CardComposer, CardText};
pub use core::params::{Adjustments, BandStyle, Overrides, RenderConfig, SampleCard};
pub use core::processing::BackgroundSource;
pub use core::text::{CanvasFont, CardFont, TextMeasure, TextPainter, wrap_text};
pub use error::{Error, Result};
pub use types::{Color, RunMode};

// Input/output
pub use io::{FilePreview, InputProvider, NoPrompt, PreviewSink, ViewerPreview, read_table};

// High-level API re-exports
pub use api::{BatchReport, QuizRow, RowOutcome, render_row, render_rows, render_sample, run_batch};
