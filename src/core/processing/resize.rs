use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbImage;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Resize an RGB8 image to exactly `target_cols` x `target_rows`.
///
/// Source aspect ratio is ignored: the picture is stretched or squashed to fill
/// the requested frame.
pub fn resize_rgb_exact(src: &RgbImage, target_cols: u32, target_rows: u32) -> Result<RgbImage> {
    let (original_cols, original_rows) = src.dimensions();
    if (original_cols, original_rows) == (target_cols, target_rows) {
        debug!("Image already {}x{}, skipping resize", target_cols, target_rows);
        return Ok(src.clone());
    }

    info!(
        "Original size: {}x{}, New size: {}x{}",
        original_cols, original_rows, target_cols, target_rows
    );

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::CatmullRom));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols,
        original_rows,
        src.as_raw().clone(),
        PixelType::U8x3,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    RgbImage::from_raw(target_cols, target_rows, dst_image.into_vec())
        .ok_or_else(|| Error::Resize("resized buffer has unexpected length".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn forces_exact_dimensions_ignoring_aspect() {
        let wide = RgbImage::from_pixel(300, 20, Rgb([10, 20, 30]));
        let out = resize_rgb_exact(&wide, 120, 63).unwrap();
        assert_eq!(out.dimensions(), (120, 63));

        let tall = RgbImage::from_pixel(7, 500, Rgb([10, 20, 30]));
        let out = resize_rgb_exact(&tall, 120, 63).unwrap();
        assert_eq!(out.dimensions(), (120, 63));
    }

    fn thirds(cols: u32, rows: u32) -> RgbImage {
        RgbImage::from_fn(cols, rows, |_, y| match y * 3 / rows {
            0 => Rgb([255, 0, 0]),
            1 => Rgb([0, 255, 0]),
            _ => Rgb([0, 0, 255]),
        })
    }

    fn near(p: &Rgb<u8>, expected: [u8; 3]) -> bool {
        p.0.iter().zip(expected).all(|(c, e)| c.abs_diff(e) <= 1)
    }

    #[test]
    fn tall_source_is_squashed_not_cropped() {
        let out = resize_rgb_exact(&thirds(30, 300), 240, 126).unwrap();
        // a centre crop would leave only the green middle stripe
        for x in [0, 120, 239] {
            assert!(near(out.get_pixel(x, 0), [255, 0, 0]), "top at x={x}");
            assert!(near(out.get_pixel(x, 63), [0, 255, 0]), "middle at x={x}");
            assert!(near(out.get_pixel(x, 125), [0, 0, 255]), "bottom at x={x}");
        }
    }

    #[test]
    fn uniform_color_survives_resampling() {
        let src = RgbImage::from_pixel(50, 50, Rgb([200, 100, 50]));
        let out = resize_rgb_exact(&src, 17, 90).unwrap();
        let expected = [200u8, 100, 50];
        assert!(
            out.pixels()
                .all(|p| p.0.iter().zip(expected).all(|(c, e)| c.abs_diff(e) <= 1))
        );
    }

    #[test]
    fn same_size_is_a_copy() {
        let src = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8, y as u8, 0]));
        assert_eq!(resize_rgb_exact(&src, 4, 3).unwrap(), src);
    }
}
