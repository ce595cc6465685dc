//! Spatial box (mean) filtering.
//!
//! Replaces every sample with the mean of a `k x k` window, per channel.
//! The window is anchored at `(k / 2, k / 2)`, so it is centered for odd
//! `k` and covers offsets `-(k / 2) .. k - k / 2 - 1` for even `k`.
//!
//! Border policy is explicit (see [`BorderPolicy`]): the default reflects
//! about the edge pixel without repeating it, so border means are drawn
//! from real image content instead of darkening toward zero.
//!
//! The implementation pads once, builds an integral image, and reads each
//! window sum with four lookups, so the cost is O(width * height)
//! regardless of `k`. Means are rounded to nearest (ties away from zero).
use ndarray::parallel::prelude::*;
use ndarray::{Array2, Axis};
use tracing::debug;

use crate::error::{Error, Result};
use crate::image::Image;
use crate::types::BorderPolicy;

/// Box-filter with the default reflecting border.
pub fn box_filter(img: &Image, k: usize) -> Result<Image> {
    box_filter_with_border(img, k, BorderPolicy::Reflect)
}

/// Box-filter with an explicit border policy.
///
/// `k = 1` is the identity. Output dimensions and channel count equal the
/// input's.
pub fn box_filter_with_border(img: &Image, k: usize, border: BorderPolicy) -> Result<Image> {
    if k < 1 {
        return Err(Error::invalid_parameter("kernel", k));
    }
    if k == 1 {
        return Ok(img.clone());
    }
    debug!("Box filtering with k={} border={}", k, border);

    let planes: Vec<Array2<u8>> = (0..img.channels())
        .map(|c| filter_plane(&img.plane(c), k, border))
        .collect();
    Image::from_planes(&planes)
}

fn filter_plane(plane: &Array2<u8>, k: usize, border: BorderPolicy) -> Array2<u8> {
    let (h, w) = plane.dim();
    let left = k / 2;

    // Padded plane: index p maps to source index p - left under the border
    // policy, so the window of output (y, x) is padded rows y..y+k and
    // padded cols x..x+k.
    let ph = h + k - 1;
    let pw = w + k - 1;

    let row_map: Vec<Option<usize>> = (0..ph)
        .map(|p| map_border(p as isize - left as isize, h, border))
        .collect();
    let col_map: Vec<Option<usize>> = (0..pw)
        .map(|p| map_border(p as isize - left as isize, w, border))
        .collect();

    // Summed-area table with a zero top row and left column.
    let mut integral = Array2::<u64>::zeros((ph + 1, pw + 1));
    for py in 0..ph {
        for px in 0..pw {
            let v = match (row_map[py], col_map[px]) {
                (Some(sy), Some(sx)) => plane[[sy, sx]] as u64,
                _ => 0,
            };
            integral[[py + 1, px + 1]] =
                v + integral[[py, px + 1]] + integral[[py + 1, px]] - integral[[py, px]];
        }
    }

    let area = (k * k) as u64;
    let mut out = Array2::<u8>::zeros((h, w));
    out.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(y, mut row)| {
            for (x, slot) in row.iter_mut().enumerate() {
                let sum = integral[[y + k, x + k]] + integral[[y, x]]
                    - integral[[y, x + k]]
                    - integral[[y + k, x]];
                let mean = (sum + area / 2) / area;
                *slot = mean.min(255) as u8;
            }
        });
    out
}

/// Map a possibly out-of-bounds index into `[0, len)` under the border
/// policy. `None` means the sample contributes zero.
fn map_border(i: isize, len: usize, border: BorderPolicy) -> Option<usize> {
    if i >= 0 && (i as usize) < len {
        return Some(i as usize);
    }
    match border {
        BorderPolicy::Zero => None,
        BorderPolicy::Reflect => {
            if len == 1 {
                return Some(0);
            }
            // Mirror about the edge pixel without repeating it: the
            // reflected sequence has period 2 * len - 2.
            let period = (2 * len - 2) as isize;
            let r = i.rem_euclid(period) as usize;
            if r < len { Some(r) } else { Some(2 * len - 2 - r) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{box_filter, box_filter_with_border, map_border};
    use crate::error::Error;
    use crate::image::{COLOR_CHANNELS, GRAY_CHANNELS, Image};
    use crate::types::BorderPolicy;

    fn gray(width: usize, height: usize, data: Vec<u8>) -> Image {
        Image::from_vec(width, height, GRAY_CHANNELS, data).unwrap()
    }

    /// O(k^2) reference used to pin down the integral-image fast path.
    fn reference_filter(img: &Image, k: usize, border: BorderPolicy) -> Image {
        let (w, h) = (img.width(), img.height());
        let left = (k / 2) as isize;
        let mut data = vec![0u8; w * h];
        for y in 0..h {
            for x in 0..w {
                let mut sum = 0u64;
                for dy in 0..k as isize {
                    for dx in 0..k as isize {
                        let sy = map_border(y as isize + dy - left, h, border);
                        let sx = map_border(x as isize + dx - left, w, border);
                        if let (Some(sy), Some(sx)) = (sy, sx) {
                            sum += img.sample(sx, sy, 0) as u64;
                        }
                    }
                }
                let area = (k * k) as u64;
                data[y * w + x] = ((sum + area / 2) / area).min(255) as u8;
            }
        }
        gray(w, h, data)
    }

    #[test]
    fn rejects_zero_kernel() {
        let img = gray(2, 2, vec![0; 4]);
        assert!(matches!(
            box_filter(&img, 0),
            Err(Error::InvalidParameter { arg: "kernel", .. })
        ));
    }

    #[test]
    fn kernel_one_is_identity() {
        let img = gray(3, 2, vec![9, 8, 7, 6, 5, 4]);
        assert_eq!(box_filter(&img, 1).unwrap(), img);
    }

    #[test]
    fn constant_image_is_invariant_under_reflect() {
        for k in [2, 3, 7, 20] {
            let img = gray(5, 4, vec![137; 20]);
            let out = box_filter(&img, k).unwrap();
            assert_eq!(out, img, "k={k}");
        }
    }

    #[test]
    fn center_impulse_averages_to_28() {
        // 5x5 zeros with a single 255 at (2, 2), k=3: 255 / 9 rounds to 28.
        let mut data = vec![0u8; 25];
        data[2 * 5 + 2] = 255;
        let out = box_filter(&gray(5, 5, data), 3).unwrap();
        assert_eq!(out.sample(2, 2, 0), 28);
        assert_eq!(out.sample(0, 0, 0), 0);
    }

    #[test]
    fn matches_naive_reference_for_odd_and_even_kernels() {
        let data: Vec<u8> = (0..42u32).map(|i| ((i * 37 + 11) % 256) as u8).collect();
        let img = gray(7, 6, data);
        for k in [2, 3, 4, 5, 9] {
            for border in [BorderPolicy::Reflect, BorderPolicy::Zero] {
                let fast = box_filter_with_border(&img, k, border).unwrap();
                let slow = reference_filter(&img, k, border);
                assert_eq!(fast, slow, "k={k} border={border}");
            }
        }
    }

    #[test]
    fn filters_each_color_channel_independently() {
        // Red plane constant, green plane impulse.
        let mut data = vec![0u8; 5 * 5 * 3];
        for px in data.chunks_exact_mut(3) {
            px[0] = 60;
        }
        data[(2 * 5 + 2) * 3 + 1] = 255;
        let img = Image::from_vec(5, 5, COLOR_CHANNELS, data).unwrap();

        let out = box_filter(&img, 3).unwrap();
        assert_eq!(out.sample(2, 2, 0), 60);
        assert_eq!(out.sample(2, 2, 1), 28);
        assert_eq!(out.sample(2, 2, 2), 0);
    }

    #[test]
    fn reflect_mapping_mirrors_without_repeating_edge() {
        let cases = [(-2, 2), (-1, 1), (0, 0), (4, 4), (5, 3), (6, 2)];
        for (i, expected) in cases {
            assert_eq!(map_border(i, 5, BorderPolicy::Reflect), Some(expected));
        }
        assert_eq!(map_border(-1, 5, BorderPolicy::Zero), None);
        assert_eq!(map_border(3, 5, BorderPolicy::Zero), Some(3));
    }
}
