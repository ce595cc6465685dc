//! Angle-preserving rotation with canvas auto-expansion.
//!
//! The grid is rotated about its center by an arbitrary angle in degrees
//! (positive is counter-clockwise). The output canvas grows to the rotated
//! bounding box, `new_w = ceil(h * |sin| + w * |cos|)` by
//! `new_h = ceil(h * |cos| + w * |sin|)`, and the original center maps to
//! the new canvas center, so content is never cropped. Output pixels whose
//! inverse-mapped source coordinate falls outside the input are filled with
//! a background value (white by default).
use ndarray::parallel::prelude::*;
use ndarray::{Array2, Axis};
use tracing::debug;

use crate::error::Result;
use crate::image::Image;
use crate::types::Interpolation;

/// Default background sample for uncovered canvas area.
pub const DEFAULT_FILL: u8 = 255;

/// Tolerance for snapping sin/cos to exact 0 and +/-1, so right-angle
/// turns produce exact canvas dimensions.
const SNAP_EPS: f64 = 1e-12;

/// Rotate with bilinear sampling and a white background.
pub fn rotate(img: &Image, angle_degrees: f64) -> Result<Image> {
    rotate_with_options(img, angle_degrees, DEFAULT_FILL, Interpolation::Bilinear)
}

/// Rotate with an explicit background fill and sampling method.
///
/// Any real angle is accepted; reduction modulo 360 is internal. A turn
/// that reduces to exactly zero returns the input unchanged.
pub fn rotate_with_options(
    img: &Image,
    angle_degrees: f64,
    fill: u8,
    method: Interpolation,
) -> Result<Image> {
    let turn = angle_degrees.rem_euclid(360.0);
    if turn == 0.0 {
        return Ok(img.clone());
    }

    let rad = turn.to_radians();
    let cos = snap(rad.cos());
    let sin = snap(rad.sin());

    let (w, h) = (img.width() as f64, img.height() as f64);
    let new_w = (h * sin.abs() + w * cos.abs()).ceil() as usize;
    let new_h = (h * cos.abs() + w * sin.abs()).ceil() as usize;
    debug!(
        "Rotating {}x{} by {} deg -> {}x{}",
        img.width(),
        img.height(),
        angle_degrees,
        new_w,
        new_h
    );

    // Pixel-center convention: sample (x, y) sits at coordinate (x, y), so
    // the image center is ((w - 1) / 2, (h - 1) / 2). With the matching
    // output center, right-angle turns land exactly on the grid.
    let cx = (w - 1.0) / 2.0;
    let cy = (h - 1.0) / 2.0;
    let ncx = (new_w as f64 - 1.0) / 2.0;
    let ncy = (new_h as f64 - 1.0) / 2.0;

    let planes: Vec<Array2<u8>> = (0..img.channels()).map(|c| img.plane(c)).collect();
    let mut out_planes = vec![Array2::<u8>::from_elem((new_h, new_w), fill); img.channels()];

    for (plane, out) in planes.iter().zip(&mut out_planes) {
        out.axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(yy, mut row)| {
                let dy = yy as f64 - ncy;
                for (xx, slot) in row.iter_mut().enumerate() {
                    let dx = xx as f64 - ncx;
                    // Inverse of dst = R * (src - c) + nc for
                    // R = [cos sin; -sin cos] (counter-clockwise in image
                    // coordinates with y pointing down).
                    let sx = cos * dx - sin * dy + cx;
                    let sy = sin * dx + cos * dy + cy;
                    *slot = match method {
                        Interpolation::Nearest => sample_nearest(plane, sx, sy, fill),
                        Interpolation::Bilinear => sample_bilinear(plane, sx, sy, fill),
                    };
                }
            });
    }

    Image::from_planes(&out_planes)
}

fn snap(v: f64) -> f64 {
    for target in [-1.0, 0.0, 1.0] {
        if (v - target).abs() < SNAP_EPS {
            return target;
        }
    }
    v
}

fn sample_nearest(plane: &Array2<u8>, x: f64, y: f64, fill: u8) -> u8 {
    let (h, w) = plane.dim();
    let xi = x.round();
    let yi = y.round();
    if xi < 0.0 || yi < 0.0 || xi >= w as f64 || yi >= h as f64 {
        return fill;
    }
    plane[[yi as usize, xi as usize]]
}

fn sample_bilinear(plane: &Array2<u8>, x: f64, y: f64, fill: u8) -> u8 {
    let x0 = x.floor();
    let y0 = y.floor();
    let dx = x - x0;
    let dy = y - y0;

    let p00 = tap(plane, x0, y0, fill);
    let p10 = tap(plane, x0 + 1.0, y0, fill);
    let p01 = tap(plane, x0, y0 + 1.0, fill);
    let p11 = tap(plane, x0 + 1.0, y0 + 1.0, fill);

    let top = p00 * (1.0 - dx) + p10 * dx;
    let bottom = p01 * (1.0 - dx) + p11 * dx;
    let v = top * (1.0 - dy) + bottom * dy;
    v.round().clamp(0.0, 255.0) as u8
}

fn tap(plane: &Array2<u8>, x: f64, y: f64, fill: u8) -> f64 {
    let (h, w) = plane.dim();
    if x < 0.0 || y < 0.0 || x >= w as f64 || y >= h as f64 {
        return fill as f64;
    }
    plane[[y as usize, x as usize]] as f64
}
