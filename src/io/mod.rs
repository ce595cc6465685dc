//! I/O layer: decoding files into [`Image`](crate::image::Image) values and
//! encoding results back to PNG/JPEG.
pub mod reader;
pub use reader::{load_grayscale, load_image};

pub mod writer;
pub use writer::{format_for_path, save_image};
