use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Color;

/// Font size and colors for one text band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandStyle {
    pub font_size: f32,
    pub text_color: Color,
    /// None disables the outline stroke
    #[serde(default)]
    pub outline_color: Option<Color>,
}

impl BandStyle {
    pub fn new(font_size: f32, text_color: Color, outline_color: Option<Color>) -> Self {
        Self {
            font_size,
            text_color,
            outline_color,
        }
    }
}

/// Background image adjustments; identity values leave the image untouched
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Adjustments {
    pub brightness: f32,
    pub contrast: f32,
    pub blur_radius: f32,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
            blur_radius: 0.0,
        }
    }
}

/// Strings rendered in `test` mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleCard {
    pub title: String,
    pub question: String,
    pub answer: String,
}

impl Default for SampleCard {
    fn default() -> Self {
        Self {
            title: "第1ラウンド 1問目".to_string(),
            question: "日本で一番高い山は何でしょう？".to_string(),
            answer: "富士山".to_string(),
        }
    }
}

/// Render configuration suitable for config files; loaded once per process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub font_path: PathBuf,
    /// Face index inside a font collection (.ttc)
    pub font_index: u32,
    pub line_spacing_ratio: f64,
    pub x_margin: u32,
    pub title: BandStyle,
    pub question: BandStyle,
    pub answer: BandStyle,
    pub adjustments: Adjustments,
    pub sample: SampleCard,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
            background_color: Color::BLACK,
            font_path: PathBuf::from("C:/Windows/Fonts/BIZ-UDGOTHICR.ttc"),
            font_index: 0,
            line_spacing_ratio: 1.4,
            x_margin: 30,
            title: BandStyle::new(42.0, Color::WHITE, Some(Color::BLACK)),
            question: BandStyle::new(36.0, Color::WHITE, Some(Color::BLACK)),
            answer: BandStyle::new(36.0, Color::YELLOW, Some(Color::BLACK)),
            adjustments: Adjustments::default(),
            sample: SampleCard::default(),
        }
    }
}

/// Per-invocation overrides taken from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overrides {
    pub brightness: Option<f32>,
    pub contrast: Option<f32>,
    pub blur_radius: Option<f32>,
}

impl RenderConfig {
    /// Load and validate a JSON configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path)?;
        let config: RenderConfig =
            serde_json::from_str(&text).map_err(|source| Error::InvalidConfig {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::InvalidArgument {
                arg: "width",
                value: self.width.to_string(),
            });
        }
        if self.height == 0 {
            return Err(Error::InvalidArgument {
                arg: "height",
                value: self.height.to_string(),
            });
        }
        if !(self.line_spacing_ratio.is_finite() && self.line_spacing_ratio > 0.0) {
            return Err(Error::InvalidArgument {
                arg: "line_spacing_ratio",
                value: self.line_spacing_ratio.to_string(),
            });
        }
        if self.x_margin.saturating_mul(2) >= self.width {
            return Err(Error::InvalidArgument {
                arg: "x_margin",
                value: self.x_margin.to_string(),
            });
        }
        for (arg, style) in [
            ("title.font_size", &self.title),
            ("question.font_size", &self.question),
            ("answer.font_size", &self.answer),
        ] {
            if !(style.font_size.is_finite() && style.font_size > 0.0) {
                return Err(Error::InvalidArgument {
                    arg,
                    value: style.font_size.to_string(),
                });
            }
        }
        self.adjustments.validate()
    }

    /// Return a copy with command-line overrides applied on top
    pub fn with_overrides(&self, overrides: &Overrides) -> Result<Self> {
        let mut out = self.clone();
        if let Some(b) = overrides.brightness {
            out.adjustments.brightness = b;
        }
        if let Some(c) = overrides.contrast {
            out.adjustments.contrast = c;
        }
        if let Some(r) = overrides.blur_radius {
            out.adjustments.blur_radius = r;
        }
        out.adjustments.validate()?;
        Ok(out)
    }

    /// Usable text width between the horizontal margins
    pub fn max_text_width(&self) -> u32 {
        self.width.saturating_sub(self.x_margin * 2)
    }
}

impl Adjustments {
    pub fn validate(&self) -> Result<()> {
        if !(self.brightness.is_finite() && self.brightness >= 0.0) {
            return Err(Error::InvalidArgument {
                arg: "brightness",
                value: self.brightness.to_string(),
            });
        }
        if !(self.contrast.is_finite() && self.contrast >= 0.0) {
            return Err(Error::InvalidArgument {
                arg: "contrast",
                value: self.contrast.to_string(),
            });
        }
        if !(self.blur_radius.is_finite() && self.blur_radius >= 0.0) {
            return Err(Error::InvalidArgument {
                arg: "blur",
                value: self.blur_radius.to_string(),
            });
        }
        Ok(())
    }
}
