//! Presentation glue: tile resizing, caption bars, and grid composition
//! for side-by-side comparison. The core transforms never resize or label;
//! everything here operates on already-transformed images.
pub mod grid;
pub mod label;
pub mod resize;

pub use grid::{compose_grid, hstack, vstack};
pub use label::{LABEL_BAR_HEIGHT, add_label};
pub use resize::{resize_exact, resize_to_height};
