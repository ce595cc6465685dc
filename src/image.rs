//! The shared raster value type.
//!
//! An [`Image`] is a row-major grid of `u8` samples with 1 (grayscale) or
//! 3 (color, interleaved RGB) channels. Every transform consumes an `Image`
//! by reference and produces a fresh one; nothing mutates a caller's buffer.
use ndarray::Array2;

use crate::error::{Error, Result};

/// Channel count of a grayscale image.
pub const GRAY_CHANNELS: usize = 1;
/// Channel count of an interleaved RGB image.
pub const COLOR_CHANNELS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl Image {
    /// Wrap an existing interleaved buffer.
    ///
    /// The buffer length must equal `width * height * channels` and the
    /// channel count must be 1 or 3.
    pub fn from_vec(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        if channels != GRAY_CHANNELS && channels != COLOR_CHANNELS {
            return Err(Error::invalid_parameter("channels", channels));
        }
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage);
        }

        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channels))
            .ok_or(Error::SizeMismatch {
                expected: usize::MAX,
                actual: data.len(),
            })?;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Allocate an image filled with a single sample value.
    pub fn new_fill(width: usize, height: usize, channels: usize, value: u8) -> Result<Self> {
        if channels != GRAY_CHANNELS && channels != COLOR_CHANNELS {
            return Err(Error::invalid_parameter("channels", channels));
        }
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage);
        }
        Ok(Self {
            width,
            height,
            channels,
            data: vec![value; width * height * channels],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn is_gray(&self) -> bool {
        self.channels == GRAY_CHANNELS
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// One row of interleaved samples.
    pub fn row(&self, y: usize) -> &[u8] {
        assert!(y < self.height, "row index out of bounds");
        let stride = self.width * self.channels;
        let start = y * stride;
        &self.data[start..start + stride]
    }

    /// One sample. Panics when out of bounds; transforms keep their loops
    /// inside the grid and use this only on validated coordinates.
    pub fn sample(&self, x: usize, y: usize, c: usize) -> u8 {
        assert!(x < self.width && y < self.height && c < self.channels);
        self.data[(y * self.width + x) * self.channels + c]
    }

    /// Deinterleave one channel into a `(height, width)` plane.
    pub fn plane(&self, c: usize) -> Array2<u8> {
        assert!(c < self.channels, "channel index out of bounds");
        Array2::from_shape_fn((self.height, self.width), |(y, x)| {
            self.data[(y * self.width + x) * self.channels + c]
        })
    }

    /// Reassemble an image from per-channel planes of identical shape.
    pub fn from_planes(planes: &[Array2<u8>]) -> Result<Self> {
        let first = planes.first().ok_or(Error::EmptyImage)?;
        let (height, width) = first.dim();
        let channels = planes.len();

        for plane in planes {
            if plane.dim() != (height, width) {
                return Err(Error::SizeMismatch {
                    expected: height * width,
                    actual: plane.len(),
                });
            }
        }

        let mut data = vec![0u8; width * height * channels];
        for (c, plane) in planes.iter().enumerate() {
            for ((y, x), &v) in plane.indexed_iter() {
                data[(y * width + x) * channels + c] = v;
            }
        }
        Image::from_vec(width, height, channels, data)
    }
}

#[cfg(test)]
mod tests {
    use super::{COLOR_CHANNELS, GRAY_CHANNELS, Image};
    use crate::error::Error;

    #[test]
    fn from_vec_validates_length_and_channels() {
        assert!(Image::from_vec(2, 2, GRAY_CHANNELS, vec![0; 4]).is_ok());
        assert!(matches!(
            Image::from_vec(2, 2, GRAY_CHANNELS, vec![0; 5]),
            Err(Error::SizeMismatch {
                expected: 4,
                actual: 5
            })
        ));
        assert!(matches!(
            Image::from_vec(2, 2, 2, vec![0; 8]),
            Err(Error::InvalidParameter { .. })
        ));
        assert!(matches!(
            Image::from_vec(0, 2, GRAY_CHANNELS, vec![]),
            Err(Error::EmptyImage)
        ));
    }

    #[test]
    fn plane_roundtrip_preserves_interleaving() {
        let img = Image::from_vec(
            2,
            2,
            COLOR_CHANNELS,
            vec![
                1, 2, 3, 4, 5, 6, // row 0
                7, 8, 9, 10, 11, 12, // row 1
            ],
        )
        .unwrap();

        let planes: Vec<_> = (0..3).map(|c| img.plane(c)).collect();
        assert_eq!(planes[0][[0, 1]], 4);
        assert_eq!(planes[2][[1, 0]], 9);

        let back = Image::from_planes(&planes).unwrap();
        assert_eq!(back, img);
    }

    #[test]
    fn row_and_sample_access() {
        let img = Image::from_vec(3, 2, GRAY_CHANNELS, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(img.row(1), &[4, 5, 6]);
        assert_eq!(img.sample(2, 0, 0), 3);
    }
}
