//! Image ingestion via the `image` crate.
//!
//! Decode failures surface as [`Error::Decode`](crate::error::Error), never
//! a silently substituted image.
use std::path::Path;

use tracing::info;

use crate::core::processing::grayscale::to_grayscale;
use crate::error::Result;
use crate::image::{COLOR_CHANNELS, Image};

/// Decode a file into an interleaved RGB image.
pub fn load_image(path: &Path) -> Result<Image> {
    let decoded = image::open(path)?.to_rgb8();
    let (width, height) = decoded.dimensions();
    info!("Loaded {:?}: {}x{} rgb", path, width, height);
    Image::from_vec(
        width as usize,
        height as usize,
        COLOR_CHANNELS,
        decoded.into_raw(),
    )
}

/// Decode a file and reduce it to a single luma channel.
///
/// Decoding goes through RGB first so the crate's documented BT.601
/// weighting applies regardless of the source color type.
pub fn load_grayscale(path: &Path) -> Result<Image> {
    let rgb = load_image(path)?;
    to_grayscale(&rgb)
}
