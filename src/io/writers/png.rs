use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};

use crate::error::Result;

/// Encode `image` as PNG into any writer
pub fn write_png_to<W: Write>(writer: W, image: &RgbImage) -> Result<()> {
    let encoder = PngEncoder::new(writer);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(())
}

/// Write `image` as a PNG file, replacing any existing file
pub fn write_rgb_png(output: &Path, image: &RgbImage) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    write_png_to(&mut writer, image)?;
    writer.flush()?;
    Ok(())
}
