//! End-to-end batch tests: workbook in, PNG files out.
//!
//! A block font stands in for a real typeface so the tests run without any
//! font files; every glyph is a solid rectangle with a fixed advance.

use std::path::Path;

use image::{Rgb, RgbImage};
use pretty_assertions::assert_eq;
use quizcard::io::table::{Cell, TableRow};
use quizcard::{
    BackgroundSource, CanvasFont, CardComposer, Color, Error, RenderConfig, TextMeasure, read_table,
    run_batch,
};
use rust_xlsxwriter::Workbook;

struct BlockFont;

impl TextMeasure for BlockFont {
    fn text_width(&self, text: &str) -> u32 {
        text.chars().map(|c| if c.is_ascii() { 6 } else { 12 }).sum()
    }

    fn line_height(&self) -> u32 {
        12
    }
}

impl CanvasFont for BlockFont {
    fn draw_on(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Color) {
        let w = self.text_width(text) as i32;
        for py in y.max(0)..(y + 12).min(canvas.height() as i32) {
            for px in x.max(0)..(x + w).min(canvas.width() as i32) {
                canvas.put_pixel(px as u32, py as u32, color.to_rgb());
            }
        }
    }
}

fn small_config() -> RenderConfig {
    RenderConfig {
        width: 240,
        height: 126,
        x_margin: 10,
        background_color: Color([20, 30, 40]),
        ..RenderConfig::default()
    }
}

fn composer(config: &RenderConfig) -> CardComposer<BlockFont> {
    CardComposer::with_fonts(config, BlockFont, BlockFont, BlockFont)
}

fn row(line: usize, order: Cell, folder: &str, prefix: &str) -> TableRow {
    TableRow {
        line,
        round: Cell::from("第1ラウンド"),
        order,
        question: Cell::from("日本で一番高い山は何でしょう？"),
        answer: Cell::from("富士山"),
        folder: Cell::from(folder),
        prefix: Cell::from(prefix),
    }
}

fn write_workbook(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let header = ["ラウンド", "出題順", "問題文", "答え", "フォルダ名", "ファイル名接頭辞"];
    for (col, h) in header.iter().enumerate() {
        sheet.write_string(0, col as u16, *h).unwrap();
    }

    // order 1, 2, "abc", 4; the third row must fail on its own
    let orders: [Option<f64>; 4] = [Some(1.0), Some(2.0), None, Some(4.0)];
    for (i, order) in orders.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_string(r, 0, "R").unwrap();
        match order {
            Some(n) => sheet.write_number(r, 1, *n).unwrap(),
            None => sheet.write_string(r, 1, "abc").unwrap(),
        };
        sheet.write_string(r, 2, "問題").unwrap();
        sheet.write_string(r, 3, "答え").unwrap();
        sheet.write_string(r, 4, "round1").unwrap();
        if i == 3 {
            sheet.write_string(r, 5, "q_").unwrap();
        }
    }
    workbook.save(path).unwrap();
}

#[test]
fn one_bad_order_does_not_stop_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let xlsx = dir.path().join("quiz.xlsx");
    write_workbook(&xlsx);

    let rows = read_table(&xlsx).unwrap();
    assert_eq!(rows.len(), 4);

    let out = dir.path().join("out");
    let config = small_config();
    let report = run_batch(
        &composer(&config),
        &BackgroundSource::Color(config.background_color),
        &rows,
        &out,
    )
    .unwrap();

    assert_eq!(report.processed(), 4);
    assert_eq!(report.succeeded(), 3);
    assert_eq!(report.failed(), 1);

    let failure = report.failures().next().unwrap();
    assert_eq!(failure.line, 4);
    assert!(matches!(failure.error(), Some(Error::InvalidOrder { row: 4, .. })));

    let written: Vec<_> = report.written().map(|p| p.to_path_buf()).collect();
    assert_eq!(
        written,
        vec![
            out.join("round1").join("001.png"),
            out.join("round1").join("002.png"),
            out.join("round1").join("q_004.png"),
        ]
    );
    for path in &written {
        let img = image::open(path).unwrap().into_rgb8();
        assert_eq!(img.dimensions(), (240, 126));
        assert_eq!(*img.get_pixel(0, 0), Rgb([20, 30, 40]));
    }
    assert!(!out.join("round1").join("000.png").exists());
}

#[test]
fn filenames_follow_folder_prefix_and_padded_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = small_config();
    let rows = vec![
        row(2, Cell::Number(7.0), "R1", ""),
        row(3, Cell::Number(42.0), "R2/nested", "q_"),
    ];
    let report = run_batch(
        &composer(&config),
        &BackgroundSource::Color(config.background_color),
        &rows,
        dir.path(),
    )
    .unwrap();

    assert_eq!(report.failed(), 0);
    assert!(dir.path().join("R1/007.png").is_file());
    assert!(dir.path().join("R2/nested/q_042.png").is_file());
}

#[test]
fn existing_output_directory_is_reused() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("R1")).unwrap();
    let config = small_config();
    let rows = vec![row(2, Cell::Number(1.0), "R1", ""), row(3, Cell::Number(2.0), "R1", "")];

    let report = run_batch(
        &composer(&config),
        &BackgroundSource::Color(config.background_color),
        &rows,
        dir.path(),
    )
    .unwrap();
    assert_eq!(report.succeeded(), 2);
}

#[test]
fn unwritable_row_fails_alone() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the folder should go makes directory creation fail
    std::fs::write(dir.path().join("blocked"), b"").unwrap();
    let config = small_config();
    let rows = vec![
        row(2, Cell::Number(1.0), "blocked", ""),
        row(3, Cell::Empty, "R1", ""),
        row(4, Cell::Number(3.0), "R1", ""),
    ];

    let report = run_batch(
        &composer(&config),
        &BackgroundSource::Color(config.background_color),
        &rows,
        dir.path(),
    )
    .unwrap();

    let lines: Vec<(usize, Option<u32>, bool)> = report
        .outcomes
        .iter()
        .map(|o| (o.line, o.order, o.is_ok()))
        .collect();
    assert_eq!(lines, vec![(2, Some(1), false), (3, None, false), (4, Some(3), true)]);
    assert!(matches!(report.outcomes[0].error(), Some(Error::Io(_))));
    assert!(dir.path().join("R1/003.png").is_file());
}

#[test]
fn background_image_is_stretched_to_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let bg_path = dir.path().join("bg.png");
    // tall, narrow source in red/green/blue thirds; a crop would keep only green
    RgbImage::from_fn(30, 300, |_, y| match y / 100 {
        0 => Rgb([255, 0, 0]),
        1 => Rgb([0, 255, 0]),
        _ => Rgb([0, 0, 255]),
    })
    .save(&bg_path)
    .unwrap();

    let config = small_config();
    let rows = vec![row(2, Cell::Number(5.0), "R1", "")];
    let report = run_batch(
        &composer(&config),
        &BackgroundSource::Image(bg_path),
        &rows,
        dir.path(),
    )
    .unwrap();
    assert_eq!(report.succeeded(), 1);

    let img = image::open(dir.path().join("R1/005.png")).unwrap().into_rgb8();
    assert_eq!(img.dimensions(), (240, 126));
    let near = |x: u32, y: u32, expected: [u8; 3]| {
        img.get_pixel(x, y).0.iter().zip(expected).all(|(c, e)| c.abs_diff(e) <= 1)
    };
    // x = 0 sits left of the text margin, so it shows the stretched background
    for x in [0, 239] {
        assert!(near(x, 0, [255, 0, 0]), "top row at x={x}");
        assert!(near(x, 125, [0, 0, 255]), "bottom row at x={x}");
    }
    assert!(near(0, 63, [0, 255, 0]));
}

#[test]
fn missing_background_image_aborts_before_any_row() {
    let dir = tempfile::tempdir().unwrap();
    let config = small_config();
    let rows = vec![row(2, Cell::Number(1.0), "R1", "")];
    let res = run_batch(
        &composer(&config),
        &BackgroundSource::Image(dir.path().join("missing.jpg")),
        &rows,
        dir.path(),
    );
    assert!(res.is_err());
    assert!(!dir.path().join("R1").exists());
}
