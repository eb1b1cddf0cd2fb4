//! Spreadsheet input: reads the first sheet of an Excel/ODS workbook into
//! loosely typed rows. Field validation happens per row in the batch driver,
//! so a malformed cell only affects its own card.
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// One spreadsheet cell, reduced to what the card renderer cares about
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Text form of the cell; integral numbers print without a fraction
    pub fn to_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                Some(format!("{}", *n as i64))
            }
            Cell::Number(n) => Some(n.to_string()),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) if s.is_empty() => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            other => Cell::Text(other.to_string()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

/// Semantic columns of the quiz table
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Column {
    Round,
    Order,
    Question,
    Answer,
    Folder,
    Prefix,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Round,
        Column::Order,
        Column::Question,
        Column::Answer,
        Column::Folder,
        Column::Prefix,
    ];

    /// Japanese header label
    pub fn label(self) -> &'static str {
        match self {
            Column::Round => "ラウンド",
            Column::Order => "出題順",
            Column::Question => "問題文",
            Column::Answer => "答え",
            Column::Folder => "フォルダ名",
            Column::Prefix => "ファイル名接頭辞",
        }
    }

    fn alias(self) -> &'static str {
        match self {
            Column::Round => "round",
            Column::Order => "order",
            Column::Question => "question",
            Column::Answer => "answer",
            Column::Folder => "folder",
            Column::Prefix => "prefix",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Column::Prefix)
    }

    fn matches(self, header: &str) -> bool {
        let h = header.trim();
        h == self.label() || h.eq_ignore_ascii_case(self.alias())
    }
}

/// One data row of the table; `line` is the 1-based sheet row number
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub line: usize,
    pub round: Cell,
    pub order: Cell,
    pub question: Cell,
    pub answer: Cell,
    pub folder: Cell,
    pub prefix: Cell,
}

impl TableRow {
    pub fn get(&self, column: Column) -> &Cell {
        match column {
            Column::Round => &self.round,
            Column::Order => &self.order,
            Column::Question => &self.question,
            Column::Answer => &self.answer,
            Column::Folder => &self.folder,
            Column::Prefix => &self.prefix,
        }
    }

    fn is_blank(&self) -> bool {
        Column::ALL.iter().all(|c| self.get(*c).is_empty())
    }
}

/// Column positions resolved from a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    positions: [Option<usize>; 6],
}

impl ColumnMap {
    pub fn from_header<S: AsRef<str>>(header: &[S]) -> Result<Self> {
        let mut positions = [None; 6];
        for (slot, column) in positions.iter_mut().zip(Column::ALL) {
            *slot = header.iter().position(|h| column.matches(h.as_ref()));
            if slot.is_none() && column.is_required() {
                return Err(Error::MissingColumn {
                    column: column.label(),
                });
            }
        }
        Ok(Self { positions })
    }

    fn cell(&self, column: Column, cells: &[Cell]) -> Cell {
        self.positions[column as usize]
            .and_then(|i| cells.get(i))
            .cloned()
            .unwrap_or(Cell::Empty)
    }

    /// Build a row from raw cells, leaving absent columns empty
    pub fn row(&self, line: usize, cells: &[Cell]) -> TableRow {
        TableRow {
            line,
            round: self.cell(Column::Round, cells),
            order: self.cell(Column::Order, cells),
            question: self.cell(Column::Question, cells),
            answer: self.cell(Column::Answer, cells),
            folder: self.cell(Column::Folder, cells),
            prefix: self.cell(Column::Prefix, cells),
        }
    }
}

/// Turn a header line plus data lines into table rows, skipping blank rows.
/// `first_line` is the sheet row number of the header.
pub fn rows_from_cells(first_line: usize, grid: &[Vec<Cell>]) -> Result<Vec<TableRow>> {
    let Some((header, body)) = grid.split_first() else {
        return Ok(Vec::new());
    };
    let header: Vec<String> = header.iter().map(|c| c.to_text().unwrap_or_default()).collect();
    let map = ColumnMap::from_header(&header)?;

    let rows: Vec<TableRow> = body
        .iter()
        .enumerate()
        .map(|(i, cells)| map.row(first_line + 1 + i, cells))
        .filter(|row| !row.is_blank())
        .collect();
    Ok(rows)
}

/// Read the first worksheet of `path` into table rows
pub fn read_table(path: &Path) -> Result<Vec<TableRow>> {
    info!("Reading quiz table: {:?}", path);
    let table_err = |message: String| Error::Table {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| table_err(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| table_err("workbook has no sheets".to_string()))?
        .map_err(|e| table_err(e.to_string()))?;

    let first_line = range.start().map(|(row, _)| row as usize + 1).unwrap_or(1);
    let grid: Vec<Vec<Cell>> = range
        .rows()
        .map(|r| r.iter().map(Cell::from).collect())
        .collect();

    let rows = rows_from_cells(first_line, &grid)?;
    debug!("Read {} data row(s)", rows.len());
    Ok(rows)
}
