//! Crate-level error type and `Result` alias for structured error handling.
//! Wraps underlying I/O, image, and spreadsheet errors, and provides semantic
//! variants for configuration, font, and per-row failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration in {}: {source}", path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Font file not found: {}", path.display())]
    FontNotFound { path: PathBuf },

    #[error("Unable to parse font {} (index {index})", path.display())]
    InvalidFont { path: PathBuf, index: u32 },

    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Spreadsheet error in {}: {message}", path.display())]
    Table { path: PathBuf, message: String },

    #[error("Missing required column: {column}")]
    MissingColumn { column: &'static str },

    #[error("Row {row}: missing required field {field}")]
    MissingField { row: usize, field: &'static str },

    #[error("Row {row}: order must be a positive integer, got {value:?}")]
    InvalidOrder { row: usize, value: String },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Preview error: {0}")]
    Preview(String),
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}
