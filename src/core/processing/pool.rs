//! Block-average pooling (spatial resolution reduction).
//!
//! Partitions a grayscale grid into non-overlapping `k x k` blocks and
//! overwrites every sample in a block with the block's mean, truncated
//! toward zero. The remainder strip along the bottom/right that does not
//! fill a whole block is trimmed, not padded, so the output is
//! `(h - h % k) x (w - w % k)`.
use ndarray::s;
use tracing::debug;

use crate::error::{Error, Result};
use crate::image::Image;

/// Replace each `k x k` block of a grayscale image with its mean.
///
/// `k` larger than either image dimension leaves nothing to pool and is
/// rejected; `k` equal to a dimension degenerates to a single block span.
pub fn block_average(img: &Image, k: usize) -> Result<Image> {
    if !img.is_gray() {
        return Err(Error::invalid_parameter("channels", img.channels()));
    }
    if k < 1 {
        return Err(Error::invalid_parameter("kernel", k));
    }

    let th = img.height() - img.height() % k;
    let tw = img.width() - img.width() % k;
    if th == 0 || tw == 0 {
        return Err(Error::invalid_parameter("kernel", k));
    }
    debug!(
        "Block averaging with k={}: {}x{} -> {}x{}",
        k,
        img.width(),
        img.height(),
        tw,
        th
    );

    let mut plane = img.plane(0).slice(s![..th, ..tw]).to_owned();
    // Block sums can reach 255 * k^2 for k up to the full image side, so
    // accumulate in u64 like the filter's integral image does.
    let area = (k * k) as u64;
    for mut block in plane.exact_chunks_mut((k, k)) {
        let sum: u64 = block.iter().map(|&v| v as u64).sum();
        block.fill((sum / area) as u8);
    }

    Image::from_planes(&[plane])
}

#[cfg(test)]
mod tests {
    use super::block_average;
    use crate::error::Error;
    use crate::image::{COLOR_CHANNELS, GRAY_CHANNELS, Image};

    fn gray(width: usize, height: usize, data: Vec<u8>) -> Image {
        Image::from_vec(width, height, GRAY_CHANNELS, data).unwrap()
    }

    #[test]
    fn rejects_color_zero_kernel_and_oversized_kernel() {
        let img = gray(4, 4, vec![0; 16]);
        assert!(matches!(
            block_average(&img, 0),
            Err(Error::InvalidParameter { arg: "kernel", .. })
        ));
        assert!(matches!(
            block_average(&img, 5),
            Err(Error::InvalidParameter { arg: "kernel", .. })
        ));

        let color = Image::new_fill(4, 4, COLOR_CHANNELS, 0).unwrap();
        assert!(matches!(
            block_average(&color, 2),
            Err(Error::InvalidParameter { arg: "channels", .. })
        ));
    }

    #[test]
    fn constant_9x9_with_k3_is_unchanged() {
        let img = gray(9, 9, vec![88; 81]);
        let out = block_average(&img, 3).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn trims_remainder_rows_and_columns() {
        let img = gray(10, 10, vec![88; 100]);
        let out = block_average(&img, 3).unwrap();
        assert_eq!((out.width(), out.height()), (9, 9));
        assert!(out.data().iter().all(|&v| v == 88));
    }

    #[test]
    fn block_mean_truncates_toward_zero() {
        // Block [0, 0, 0, 2]: mean 0.5 truncates to 0.
        // Block [255, 255, 255, 254]: mean 254.75 truncates to 254.
        let img = gray(4, 2, vec![0, 0, 255, 255, 0, 2, 255, 254]);
        let out = block_average(&img, 2).unwrap();
        assert_eq!(out.data(), &[0, 0, 254, 254, 0, 0, 254, 254]);
    }

    #[test]
    fn every_block_is_uniform() {
        let data: Vec<u8> = (0..36u32).map(|i| ((i * 53 + 7) % 256) as u8).collect();
        let img = gray(6, 6, data);
        let out = block_average(&img, 3).unwrap();
        for by in 0..2 {
            for bx in 0..2 {
                let anchor = out.sample(bx * 3, by * 3, 0);
                for y in 0..3 {
                    for x in 0..3 {
                        assert_eq!(out.sample(bx * 3 + x, by * 3 + y, 0), anchor);
                    }
                }
            }
        }
    }

    #[test]
    fn single_block_larger_than_u32_sum_stays_exact() {
        // 4105^2 * 255 exceeds u32::MAX; the mean must still come out
        // exact instead of wrapping.
        let img = Image::new_fill(4105, 4105, GRAY_CHANNELS, 255).unwrap();
        let out = block_average(&img, 4105).unwrap();
        assert_eq!((out.width(), out.height()), (4105, 4105));
        assert!(out.data().iter().all(|&v| v == 255));
    }

    #[test]
    fn kernel_equal_to_dimension_pools_whole_image() {
        let img = gray(4, 4, (0..16).collect());
        let out = block_average(&img, 4).unwrap();
        // Sum of 0..=15 is 120, mean 7.5 truncates to 7.
        assert!(out.data().iter().all(|&v| v == 7));
        assert_eq!((out.width(), out.height()), (4, 4));
    }
}
