//! Test-mode preview sinks: write the card to a chosen file, or hand a
//! temporary PNG to the platform image viewer.
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use image::RgbImage;
use tracing::info;

use crate::error::{Error, Result};
use crate::io::writers::{write_png_to, write_rgb_png};

pub trait PreviewSink {
    fn show(&self, image: &RgbImage) -> Result<()>;
}

/// Saves the preview to a fixed path
#[derive(Debug, Clone)]
pub struct FilePreview {
    path: PathBuf,
}

impl FilePreview {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreviewSink for FilePreview {
    fn show(&self, image: &RgbImage) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        write_rgb_png(&self.path, image)?;
        info!("Preview written to {:?}", self.path);
        Ok(())
    }
}

/// Opens the preview in the system's default image viewer
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewerPreview;

impl PreviewSink for ViewerPreview {
    fn show(&self, image: &RgbImage) -> Result<()> {
        let mut tmp = tempfile::Builder::new()
            .prefix("quizcard-preview-")
            .suffix(".png")
            .tempfile()?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            write_png_to(&mut writer, image)?;
            writer.flush()?;
        }
        // The viewer outlives this process, so the file must stay behind
        let path = tmp
            .into_temp_path()
            .keep()
            .map_err(|e| Error::Preview(e.to_string()))?;
        info!("Opening preview {:?}", path);
        open_in_viewer(&path)
    }
}

fn open_in_viewer(path: &Path) -> Result<()> {
    #[cfg(target_os = "windows")]
    let mut cmd = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    };
    #[cfg(target_os = "macos")]
    let mut cmd = {
        let mut c = Command::new("open");
        c.arg(path);
        c
    };
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let mut cmd = {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };

    cmd.spawn()
        .map(|_| ())
        .map_err(|e| Error::Preview(format!("failed to launch image viewer: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn file_preview_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("previews").join("sample.png");
        let img = RgbImage::from_pixel(3, 2, Rgb([1, 2, 3]));
        FilePreview::new(&path).show(&img).unwrap();
        assert_eq!(image::open(&path).unwrap().into_rgb8(), img);
    }
}
