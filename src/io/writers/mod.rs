//! Output writers for finished cards.
pub mod png;

pub use png::{write_png_to, write_rgb_png};
