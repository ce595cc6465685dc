use clap::{Parser, Subcommand};
use std::path::PathBuf;

use rastermill::types::OutputFormat;
use rastermill::{BorderPolicy, Interpolation};

#[derive(Parser)]
#[command(name = "rastermill", version, about = "rastermill CLI")]
pub struct CliArgs {
    /// Input image file (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory of image files (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output filename (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Output format (png or jpeg)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Reduce the input to grayscale before transforming
    #[arg(long, default_value_t = false)]
    pub gray: bool,

    /// Target height in pixels for the output (panel tiles or resized result)
    #[arg(long)]
    pub size: Option<usize>,

    /// Emit a labeled comparison grid (original plus every result)
    #[arg(long, default_value_t = false)]
    pub panel: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: abort at the first per-file error instead of logging
    /// it and continuing
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,

    /// JSON preset file with full transform parameters (replaces the
    /// subcommand and the flags above except input/output selection)
    #[arg(long)]
    pub params: Option<PathBuf>,

    #[command(subcommand)]
    pub op: Option<OpCommand>,
}

/// Each operation accepts several comma-separated values for its main
/// parameter; more than one turns the output into a comparison grid of
/// the original against every variant.
#[derive(Subcommand)]
pub enum OpCommand {
    /// Reduce intensity levels (power of two between 2 and 256)
    Quantize {
        /// Number of intensity levels (repeat or comma-separate to compare)
        #[arg(long, required = true, num_args = 1.., value_delimiter = ',')]
        levels: Vec<u32>,
    },

    /// Spatial mean filter over a k x k neighborhood
    Filter {
        /// Kernel size (k >= 1, odd or even; repeat or comma-separate to compare)
        #[arg(short, long, required = true, num_args = 1.., value_delimiter = ',')]
        kernel: Vec<usize>,

        /// Border policy for neighborhood samples outside the image
        #[arg(long, value_enum, default_value_t = BorderPolicy::Reflect)]
        border: BorderPolicy,
    },

    /// Rotate about the center, expanding the canvas to avoid cropping
    Rotate {
        /// Angle in degrees, positive counter-clockwise (repeat or
        /// comma-separate to compare)
        #[arg(
            short,
            long,
            required = true,
            num_args = 1..,
            value_delimiter = ',',
            allow_negative_numbers = true
        )]
        angle: Vec<f64>,

        /// Background sample value for uncovered canvas area
        #[arg(long, default_value_t = 255)]
        fill: u8,

        /// Sampling method for non-integer source coordinates
        #[arg(long, value_enum, default_value_t = Interpolation::Bilinear)]
        interpolation: Interpolation,
    },

    /// Replace non-overlapping k x k blocks by their average
    Pool {
        /// Block size (k >= 1; repeat or comma-separate to compare)
        #[arg(short, long, required = true, num_args = 1.., value_delimiter = ',')]
        kernel: Vec<usize>,
    },
}
