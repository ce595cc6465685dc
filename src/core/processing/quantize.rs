//! Intensity quantization.
//!
//! Maps every sample to the lower edge of one of `levels` evenly spaced
//! bins: `step = 256 / levels`, `v -> (v / step) * step` in integer
//! arithmetic. The mapping is deterministic, monotonic, and idempotent for
//! a fixed level count.
use tracing::debug;

use crate::error::{Error, Result};
use crate::image::Image;

pub const MIN_LEVELS: u32 = 2;
pub const MAX_LEVELS: u32 = 256;

/// True when `levels` is a power of two in `[2, 256]`.
pub fn valid_levels(levels: u32) -> bool {
    (MIN_LEVELS..=MAX_LEVELS).contains(&levels) && levels.is_power_of_two()
}

/// Reduce a grayscale image to `levels` intensity levels.
///
/// `levels` must be a power of two in `[2, 256]`; anything else is a caller
/// error and is rejected, never rounded. `levels = 256` is the identity.
pub fn quantize(img: &Image, levels: u32) -> Result<Image> {
    if !img.is_gray() {
        return Err(Error::invalid_parameter("channels", img.channels()));
    }
    if !valid_levels(levels) {
        return Err(Error::invalid_parameter("levels", levels));
    }

    let step = (256 / levels) as u8;
    if step == 1 {
        return Ok(img.clone());
    }
    debug!("Quantizing to {} levels (step {})", levels, step);

    let data = img.data().iter().map(|&v| (v / step) * step).collect();
    Image::from_vec(img.width(), img.height(), img.channels(), data)
}
