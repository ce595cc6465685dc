#![doc = r#"
rastermill — a deterministic raster transformation toolkit.

This crate provides four exact, stateless pixel-level transforms over a shared
`Image` value (a row-major grid of `u8` samples, grayscale or interleaved RGB):

- **Quantize** — reduce intensity levels to a power of two in `[2, 256]`.
- **Box filter** — `k x k` mean filter with an explicit, documented border
  policy (reflecting by default).
- **Rotate** — arbitrary-angle rotation about the center with canvas
  auto-expansion and background fill, so content is never cropped.
- **Block average** — non-overlapping `k x k` block-mean pooling that trims
  remainder rows/columns ("trim, don't pad").

Every transform validates its parameters before allocating, produces a fresh
image, and is bit-exact: equal inputs give identical outputs. Boundary and
rounding rules are part of each operation's contract and are documented on the
function.

Quick start: transform a file
-----------------------------
```rust,no_run
use std::path::Path;
use rastermill::{transform_file_to_path, TransformOp, TransformParams, OutputFormat};

fn main() -> rastermill::Result<()> {
    let params = TransformParams::new(
        TransformOp::Quantize { levels: 8 },
        OutputFormat::Png,
    );
    transform_file_to_path(Path::new("in.png"), Path::new("out.png"), &params)
}
```

Work on in-memory images
------------------------
```rust
use rastermill::{Image, quantize, box_filter, rotate, block_average};

fn main() -> rastermill::Result<()> {
    let img = Image::new_fill(60, 48, 1, 200)?;

    let posterized = quantize(&img, 4)?;
    let smoothed = box_filter(&img, 3)?;
    let turned = rotate(&img, 45.0)?;
    let pooled = block_average(&img, 3)?;

    assert_eq!(posterized.data()[0], 192);
    assert_eq!(smoothed, img);
    assert!(turned.width() > img.width());
    assert_eq!(pooled, img);
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use rastermill::{process_directory_to_path, TransformOp, TransformParams, OutputFormat};

fn main() -> rastermill::Result<()> {
    let params = TransformParams::new(TransformOp::BoxFilter {
        kernel: 10,
        border: Default::default(),
    }, OutputFormat::Jpeg);

    let report = process_directory_to_path(
        Path::new("/data/in"),
        Path::new("/data/out"),
        &params,
        true, // continue_on_error
    )?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Error handling
--------------
All public functions return `rastermill::Result<T>`; match on
`rastermill::Error` for specific cases. Invalid parameters are rejected, never
silently clamped: a non-power-of-two level count is a caller error.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — the transform primitives and typed parameters.
- [`compose`] — presentation glue: resize, caption bars, grids.
- [`io`] — decode/encode adapters.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod compose;
pub mod core;
pub mod error;
pub mod image;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::{TransformOp, TransformParams};
pub use error::{Error, Result};
pub use image::Image;
pub use types::{BorderPolicy, Interpolation, OutputFormat};

// Transform primitives
pub use core::processing::{
    block_average, box_filter, box_filter_with_border, gray_to_color, quantize, rotate,
    rotate_with_options, to_grayscale,
};

// Readers and writers
pub use io::{format_for_path, load_grayscale, load_image, save_image};

// High-level API re-exports
pub use api::{
    BatchReport, process_directory_to_path, transform_file_to_image, transform_file_to_path,
    transform_image,
};
