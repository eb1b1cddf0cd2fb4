use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::io::table::{Cell, TableRow};

/// One validated card description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRow {
    pub round_label: String,
    pub order: u32,
    pub question_text: String,
    pub answer_text: String,
    pub output_folder: String,
    pub filename_prefix: String,
}

impl QuizRow {
    /// Title line drawn at the top of the card
    pub fn title(&self) -> String {
        format!("{} {}問目", self.round_label, self.order)
    }

    /// `{prefix}{order:03}.png`
    pub fn file_name(&self) -> String {
        format!("{}{:03}.png", self.filename_prefix, self.order)
    }

    /// Folder the card is written to, relative to `base_dir`
    pub fn output_dir(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.output_folder)
    }

    pub fn output_path(&self, base_dir: &Path) -> PathBuf {
        self.output_dir(base_dir).join(self.file_name())
    }
}

fn required(cell: &Cell, row: usize, field: &'static str) -> Result<String> {
    cell.to_text().ok_or(Error::MissingField { row, field })
}

/// Parse a display order; only positive whole numbers are accepted
pub fn parse_order(cell: &Cell, row: usize) -> Result<u32> {
    let invalid = |value: String| Error::InvalidOrder { row, value };
    let number = match cell {
        Cell::Empty => return Err(Error::MissingField { row, field: "order" }),
        Cell::Number(n) => *n,
        Cell::Text(s) => s.trim().parse::<f64>().map_err(|_| invalid(s.clone()))?,
    };
    if !number.is_finite() || number.fract() != 0.0 || number < 1.0 || number > u32::MAX as f64 {
        return Err(invalid(cell.to_text().unwrap_or_default()));
    }
    Ok(number as u32)
}

impl TryFrom<&TableRow> for QuizRow {
    type Error = Error;

    fn try_from(row: &TableRow) -> Result<Self> {
        let line = row.line;
        Ok(QuizRow {
            round_label: required(&row.round, line, "round")?,
            order: parse_order(&row.order, line)?,
            question_text: required(&row.question, line, "question")?,
            answer_text: required(&row.answer, line, "answer")?,
            output_folder: required(&row.folder, line, "folder")?,
            filename_prefix: row.prefix.to_text().unwrap_or_default(),
        })
    }
}
