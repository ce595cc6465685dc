//! Shared types and enums used across rastermill.
//! Includes `OutputFormat`, rotation `Interpolation`, and the box filter
//! `BorderPolicy`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Jpeg, // Lossy, preview only
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }

    /// Infer the format from a file extension, case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "Png"),
            OutputFormat::Jpeg => write!(f, "Jpeg"),
        }
    }
}

/// Resampling method used by the rotator for non-integer source coordinates.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    Nearest,
    Bilinear,
}

impl Default for Interpolation {
    fn default() -> Self {
        Interpolation::Bilinear
    }
}

impl std::fmt::Display for Interpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interpolation::Nearest => write!(f, "Nearest"),
            Interpolation::Bilinear => write!(f, "Bilinear"),
        }
    }
}

/// Border handling for neighborhood samples that fall outside the image.
///
/// `Reflect` mirrors about the edge pixel without repeating it
/// (`cb|abc` for a left edge), which avoids artificial darkening at
/// borders. `Zero` treats out-of-bounds samples as 0.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderPolicy {
    Reflect,
    Zero,
}

impl Default for BorderPolicy {
    fn default() -> Self {
        BorderPolicy::Reflect
    }
}

impl std::fmt::Display for BorderPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BorderPolicy::Reflect => write!(f, "Reflect"),
            BorderPolicy::Zero => write!(f, "Zero"),
        }
    }
}
