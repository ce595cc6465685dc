//! Typed transform parameters suitable for config files and CLI presets.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{BorderPolicy, Interpolation, OutputFormat};

fn default_fill() -> u8 {
    255
}

/// One of the four grid transforms with its validated parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TransformOp {
    /// Reduce intensity levels to a power of two in `[2, 256]`.
    Quantize { levels: u32 },
    /// `k x k` mean filter.
    BoxFilter {
        kernel: usize,
        #[serde(default)]
        border: BorderPolicy,
    },
    /// Rotate about the center, expanding the canvas.
    Rotate {
        angle: f64,
        #[serde(default = "default_fill")]
        fill: u8,
        #[serde(default)]
        interpolation: Interpolation,
    },
    /// Non-overlapping `k x k` block-mean pooling.
    BlockAverage { kernel: usize },
}

impl TransformOp {
    /// Quantize and BlockAverage are defined on a single channel only; the
    /// pipeline reduces color input up front for them.
    pub fn requires_grayscale(&self) -> bool {
        matches!(
            self,
            TransformOp::Quantize { .. } | TransformOp::BlockAverage { .. }
        )
    }

    /// Human-readable caption used on comparison panels.
    pub fn label(&self) -> String {
        match self {
            TransformOp::Quantize { levels } => format!("Quantized to {levels} Levels"),
            TransformOp::BoxFilter { kernel, .. } => format!("{kernel}x{kernel} Mean Filter"),
            TransformOp::Rotate { angle, .. } => format!("Rotated {angle} deg"),
            TransformOp::BlockAverage { kernel } => format!("Block Avg {kernel}x{kernel}"),
        }
    }
}

/// End-to-end parameters for processing one file.
///
/// `ops` holds one transform for plain processing, or several
/// parameterizations of interest (different kernels, angles, level counts)
/// for a labeled comparison grid of the original against every result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformParams {
    pub ops: Vec<TransformOp>,
    pub format: OutputFormat,
    /// Reduce color input to grayscale before transforming. Implied by
    /// operations that only accept a single channel.
    #[serde(default)]
    pub grayscale: bool,
    /// Target tile height in pixels for presentation output; None keeps
    /// the transform's native size.
    #[serde(default)]
    pub size: Option<usize>,
    /// Emit a labeled comparison grid (original plus every result) even
    /// for a single operation.
    #[serde(default)]
    pub panel: bool,
}

impl TransformParams {
    pub fn new(op: TransformOp, format: OutputFormat) -> Self {
        Self::with_ops(vec![op], format)
    }

    pub fn with_ops(ops: Vec<TransformOp>, format: OutputFormat) -> Self {
        Self {
            ops,
            format,
            grayscale: false,
            size: None,
            panel: false,
        }
    }

    /// Load a JSON preset.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
