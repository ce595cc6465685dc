//! Image encoding via the `image` crate.
use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};
use tracing::info;

use crate::error::{Error, Result};
use crate::image::Image;
use crate::types::OutputFormat;

/// Encode an image to `path` in the requested format.
pub fn save_image(img: &Image, path: &Path, format: OutputFormat) -> Result<()> {
    let (w, h) = (img.width() as u32, img.height() as u32);
    let dynamic = if img.is_gray() {
        GrayImage::from_raw(w, h, img.data().to_vec())
            .map(DynamicImage::ImageLuma8)
            .ok_or(Error::SizeMismatch {
                expected: img.width() * img.height(),
                actual: img.data().len(),
            })?
    } else {
        RgbImage::from_raw(w, h, img.data().to_vec())
            .map(DynamicImage::ImageRgb8)
            .ok_or(Error::SizeMismatch {
                expected: img.width() * img.height() * 3,
                actual: img.data().len(),
            })?
    };

    let image_format = match format {
        OutputFormat::Png => ImageFormat::Png,
        OutputFormat::Jpeg => ImageFormat::Jpeg,
    };
    dynamic.save_with_format(path, image_format)?;
    info!("Saved {:?} ({})", path, format);
    Ok(())
}

/// Infer the output format from a path's extension.
pub fn format_for_path(path: &Path) -> Option<OutputFormat> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(OutputFormat::from_extension)
}
