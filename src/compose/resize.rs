//! Tile resizing for presentation, backed by `fast_image_resize` with a
//! Lanczos3 convolution kernel.
use fast_image_resize::{
    FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image as FirImage,
};

use crate::error::{Error, Result};
use crate::image::Image;

/// Resize to an exact `target_width x target_height`.
pub fn resize_exact(img: &Image, target_width: usize, target_height: usize) -> Result<Image> {
    if target_width == 0 || target_height == 0 {
        return Err(Error::invalid_parameter(
            "size",
            format!("{target_width}x{target_height}"),
        ));
    }
    if target_width == img.width() && target_height == img.height() {
        return Ok(img.clone());
    }

    let pixel_type = if img.is_gray() {
        PixelType::U8
    } else {
        PixelType::U8x3
    };

    let src = FirImage::from_vec_u8(
        img.width() as u32,
        img.height() as u32,
        img.data().to_vec(),
        pixel_type,
    )
    .map_err(Error::external)?;
    let mut dst = FirImage::new(target_width as u32, target_height as u32, pixel_type);

    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();
    resizer
        .resize(&src, &mut dst, &options)
        .map_err(Error::external)?;

    Image::from_vec(
        target_width,
        target_height,
        img.channels(),
        dst.into_vec(),
    )
}

/// Resize to a target height, preserving aspect ratio.
pub fn resize_to_height(img: &Image, target_height: usize) -> Result<Image> {
    if target_height == 0 {
        return Err(Error::invalid_parameter("size", target_height));
    }
    let ratio = target_height as f64 / img.height() as f64;
    let target_width = ((img.width() as f64 * ratio).round() as usize).max(1);
    resize_exact(img, target_width, target_height)
}

#[cfg(test)]
mod tests {
    use super::{resize_exact, resize_to_height};
    use crate::error::Error;
    use crate::image::{COLOR_CHANNELS, GRAY_CHANNELS, Image};

    #[test]
    fn same_size_is_identity() {
        let img = Image::from_vec(2, 2, GRAY_CHANNELS, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(resize_exact(&img, 2, 2).unwrap(), img);
    }

    #[test]
    fn constant_tiles_stay_constant() {
        let img = Image::new_fill(8, 8, COLOR_CHANNELS, 120).unwrap();
        let out = resize_exact(&img, 4, 4).unwrap();
        assert_eq!((out.width(), out.height()), (4, 4));
        assert!(out.data().iter().all(|&v| v == 120));
    }

    #[test]
    fn height_resize_keeps_aspect_ratio() {
        let img = Image::new_fill(40, 20, GRAY_CHANNELS, 5).unwrap();
        let out = resize_to_height(&img, 10).unwrap();
        assert_eq!((out.width(), out.height()), (20, 10));
    }

    #[test]
    fn rejects_zero_target() {
        let img = Image::new_fill(4, 4, GRAY_CHANNELS, 0).unwrap();
        assert!(matches!(
            resize_exact(&img, 0, 4),
            Err(Error::InvalidParameter { arg: "size", .. })
        ));
    }
}
