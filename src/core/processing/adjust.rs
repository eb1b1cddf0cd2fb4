use image::{RgbImage, imageops};
use tracing::info;

use crate::core::params::Adjustments;

fn blend_channel(base: f32, value: u8, factor: f32) -> u8 {
    let v = base + factor * (value as f32 - base);
    v.clamp(0.0, 255.0) as u8
}

/// Scale every channel by `factor` (0 = black, 1 = unchanged)
pub fn brightness(img: &mut RgbImage, factor: f32) {
    for px in img.pixels_mut() {
        for c in px.0.iter_mut() {
            *c = blend_channel(0.0, *c, factor);
        }
    }
}

/// Mean luma of the image, rounded to the nearest integer level
pub fn mean_luma(img: &RgbImage) -> u8 {
    let count = img.width() as u64 * img.height() as u64;
    if count == 0 {
        return 0;
    }
    let sum: u64 = img
        .pixels()
        .map(|p| {
            let [r, g, b] = p.0;
            (r as u64 * 299 + g as u64 * 587 + b as u64 * 114) / 1000
        })
        .sum();
    (sum as f64 / count as f64 + 0.5) as u8
}

/// Push channels away from (or toward) the mean luma (0 = flat gray, 1 = unchanged)
pub fn contrast(img: &mut RgbImage, factor: f32) {
    let mean = mean_luma(img) as f32;
    for px in img.pixels_mut() {
        for c in px.0.iter_mut() {
            *c = blend_channel(mean, *c, factor);
        }
    }
}

/// Apply brightness, contrast and blur in that order, skipping identity values
pub fn apply_adjustments(img: RgbImage, adjustments: &Adjustments) -> RgbImage {
    let mut img = img;
    if adjustments.brightness != 1.0 {
        info!("Adjusting brightness by {}", adjustments.brightness);
        brightness(&mut img, adjustments.brightness);
    }
    if adjustments.contrast != 1.0 {
        info!("Adjusting contrast by {}", adjustments.contrast);
        contrast(&mut img, adjustments.contrast);
    }
    if adjustments.blur_radius > 0.0 {
        info!("Blurring with radius {}", adjustments.blur_radius);
        img = imageops::blur(&img, adjustments.blur_radius);
    }
    img
}
