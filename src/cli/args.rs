use clap::Parser;
use std::path::PathBuf;

use quizcard::{Overrides, RunMode};

#[derive(Parser)]
#[command(name = "quizcard", version, about = "Render quiz-card images from a spreadsheet")]
pub struct CliArgs {
    /// Run mode (normal renders the table, test previews the sample card)
    #[arg(value_enum, default_value_t = RunMode::Normal)]
    pub mode: RunMode,

    /// JSON configuration file
    #[arg(short, long, default_value = "quizcard.json")]
    pub config: PathBuf,

    /// Quiz table (.xlsx/.xls/.ods); asked for interactively when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Background image; asked for interactively when omitted
    #[arg(short, long)]
    pub background: Option<PathBuf>,

    /// Use the configured background color instead of an image
    #[arg(long, default_value_t = false, conflicts_with = "background")]
    pub solid_background: bool,

    /// Brightness factor for the background image (1.0 = unchanged)
    #[arg(long)]
    pub brightness: Option<f32>,

    /// Contrast factor for the background image (1.0 = unchanged)
    #[arg(long)]
    pub contrast: Option<f32>,

    /// Gaussian blur radius for the background image (0 = none)
    #[arg(long)]
    pub blur: Option<f32>,

    /// Test mode: save the preview here instead of opening a viewer
    #[arg(long)]
    pub preview_out: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            brightness: self.brightness,
            contrast: self.contrast,
            blur_radius: self.blur,
        }
    }
}
