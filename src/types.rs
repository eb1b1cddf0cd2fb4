//! Shared types and enums used across quizcard.
//! Includes `Color` (parsed from hex or named colors) and the CLI `RunMode`.
use clap::ValueEnum;
use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum RunMode {
    /// Render every row of the input table to disk
    Normal,
    /// Render the sample card from configuration and preview it
    Test,
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunMode::Normal => write!(f, "normal"),
            RunMode::Test => write!(f, "test"),
        }
    }
}

/// An opaque RGB color.
///
/// Accepts `#rgb`, `#rrggbb` and a set of common color names when parsed;
/// serializes back to `#rrggbb`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub [u8; 3]);

const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("lime", [0, 255, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("aqua", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("fuchsia", [255, 0, 255]),
    ("orange", [255, 165, 0]),
    ("gold", [255, 215, 0]),
    ("pink", [255, 192, 203]),
    ("purple", [128, 0, 128]),
    ("navy", [0, 0, 128]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("silver", [192, 192, 192]),
    ("maroon", [128, 0, 0]),
    ("olive", [128, 128, 0]),
    ("teal", [0, 128, 128]),
];

impl Color {
    pub const BLACK: Color = Color([0, 0, 0]);
    pub const WHITE: Color = Color([255, 255, 255]);
    pub const YELLOW: Color = Color([255, 255, 0]);

    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return Self::parse_hex(hex).ok_or_else(|| Error::InvalidColor(s.to_string()));
        }
        let lower = trimmed.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, rgb)| Color(*rgb))
            .ok_or_else(|| Error::InvalidColor(s.to_string()))
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let mut out = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let v = c.to_digit(16)? as u8;
                    out[i] = v * 17;
                }
                Some(Color(out))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color([r, g, b]))
            }
            _ => None,
        }
    }

    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb(self.0)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}
