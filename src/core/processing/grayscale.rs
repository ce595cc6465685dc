//! Color-space reduction between interleaved RGB and grayscale.
//!
//! Uses the fixed BT.601 luma weighting `0.299 R + 0.587 G + 0.114 B`
//! (the standard RGB-to-gray conversion), rounded to nearest.
use crate::error::Result;
use crate::image::{COLOR_CHANNELS, Image};

/// Reduce a color image to a single luma channel. Grayscale input is
/// returned unchanged.
pub fn to_grayscale(img: &Image) -> Result<Image> {
    if img.is_gray() {
        return Ok(img.clone());
    }

    let data = img
        .data()
        .chunks_exact(COLOR_CHANNELS)
        .map(|px| {
            let luma = 0.299 * px[0] as f64 + 0.587 * px[1] as f64 + 0.114 * px[2] as f64;
            luma.round().min(255.0) as u8
        })
        .collect();
    Image::from_vec(img.width(), img.height(), 1, data)
}

/// Replicate a grayscale channel into RGB, for display composition next to
/// color tiles. Color input is returned unchanged.
pub fn gray_to_color(img: &Image) -> Result<Image> {
    if !img.is_gray() {
        return Ok(img.clone());
    }

    let mut data = Vec::with_capacity(img.data().len() * COLOR_CHANNELS);
    for &v in img.data() {
        data.extend_from_slice(&[v, v, v]);
    }
    Image::from_vec(img.width(), img.height(), COLOR_CHANNELS, data)
}

#[cfg(test)]
mod tests {
    use super::{gray_to_color, to_grayscale};
    use crate::image::{COLOR_CHANNELS, GRAY_CHANNELS, Image};

    #[test]
    fn luma_weights_match_bt601() {
        let img = Image::from_vec(
            2,
            2,
            COLOR_CHANNELS,
            vec![
                255, 0, 0, // pure red -> 76
                0, 255, 0, // pure green -> 150
                0, 0, 255, // pure blue -> 29
                255, 255, 255, // white -> 255
            ],
        )
        .unwrap();
        let out = to_grayscale(&img).unwrap();
        assert_eq!(out.data(), &[76, 150, 29, 255]);
    }

    #[test]
    fn gray_input_passes_through() {
        let img = Image::from_vec(2, 1, GRAY_CHANNELS, vec![3, 4]).unwrap();
        assert_eq!(to_grayscale(&img).unwrap(), img);
    }

    #[test]
    fn gray_to_color_replicates_channels() {
        let img = Image::from_vec(2, 1, GRAY_CHANNELS, vec![10, 20]).unwrap();
        let out = gray_to_color(&img).unwrap();
        assert_eq!(out.channels(), COLOR_CHANNELS);
        assert_eq!(out.data(), &[10, 10, 10, 20, 20, 20]);
    }
}
