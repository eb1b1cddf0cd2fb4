use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbImage};
use tracing::info;

use super::adjust::apply_adjustments;
use super::resize::resize_rgb_exact;
use crate::core::params::Adjustments;
use crate::error::Result;
use crate::types::Color;

/// Where the card background comes from
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundSource {
    Color(Color),
    Image(PathBuf),
}

/// Fill a canvas with a flat color
pub fn solid_background(color: Color, width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, color.to_rgb())
}

/// Convert, stretch to the canvas and adjust an already decoded image
pub fn prepare_background(
    img: DynamicImage,
    width: u32,
    height: u32,
    adjustments: &Adjustments,
) -> Result<RgbImage> {
    let rgb = img.into_rgb8();
    let resized = resize_rgb_exact(&rgb, width, height)?;
    Ok(apply_adjustments(resized, adjustments))
}

/// Decode `path` and prepare it as a `width` x `height` background
pub fn load_background(
    path: &Path,
    width: u32,
    height: u32,
    adjustments: &Adjustments,
) -> Result<RgbImage> {
    info!("Loading background image: {:?}", path);
    let img = image::open(path)?;
    prepare_background(img, width, height, adjustments)
}

/// Produce the base canvas for `source`
pub fn resolve_background(
    source: &BackgroundSource,
    width: u32,
    height: u32,
    adjustments: &Adjustments,
) -> Result<RgbImage> {
    match source {
        BackgroundSource::Color(color) => Ok(solid_background(*color, width, height)),
        BackgroundSource::Image(path) => load_background(path, width, height, adjustments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image::Rgb;

    #[test]
    fn color_source_fills_canvas() {
        let bg = resolve_background(
            &BackgroundSource::Color(Color([1, 2, 3])),
            40,
            21,
            &Adjustments::default(),
        )
        .unwrap();
        assert_eq!(bg.dimensions(), (40, 21));
        assert!(bg.pixels().all(|p| *p == Rgb([1, 2, 3])));
    }

    #[test]
    fn image_source_is_stretched_to_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("square.png");
        RgbImage::from_pixel(64, 64, Rgb([90, 90, 90]))
            .save(&path)
            .unwrap();

        let bg = resolve_background(
            &BackgroundSource::Image(path),
            120,
            63,
            &Adjustments {
                brightness: 0.5,
                ..Adjustments::default()
            },
        )
        .unwrap();
        assert_eq!(bg.dimensions(), (120, 63));
        // uniform 90 halved by brightness, allowing for resampler rounding
        assert!(bg.get_pixel(60, 30).0.iter().all(|c| c.abs_diff(45) <= 1));
    }

    #[test]
    fn grayscale_input_is_converted() {
        let gray = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(3, 9, image::Luma([77])));
        let bg = prepare_background(gray, 10, 10, &Adjustments::default()).unwrap();
        let [r, g, b] = bg.get_pixel(5, 5).0;
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert!(r.abs_diff(77) <= 1);
    }

    #[test]
    fn missing_image_is_an_error() {
        let err = resolve_background(
            &BackgroundSource::Image(PathBuf::from("/no/such/background.png")),
            10,
            10,
            &Adjustments::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Image(_) | Error::Io(_)));
    }
}
