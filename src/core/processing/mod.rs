//! The transform primitives. Each operation is a pure function from an
//! input [`Image`](crate::image::Image) and validated parameters to a fresh
//! output image; validation happens before any allocation.
pub mod boxfilter;
pub mod grayscale;
pub mod pool;
pub mod quantize;
pub mod rotate;

pub use boxfilter::{box_filter, box_filter_with_border};
pub use grayscale::{gray_to_color, to_grayscale};
pub use pool::block_average;
pub use quantize::quantize;
pub use rotate::{rotate, rotate_with_options};
