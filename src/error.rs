//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and decode errors, and provides semantic variants
//! for parameter validation failures. Transforms validate before allocating,
//! so an `Err` never leaves partial output behind.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Invalid parameter: {arg}={value}")]
    InvalidParameter { arg: &'static str, value: String },

    #[error("Empty image input")]
    EmptyImage,

    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Preset error: {0}")]
    Preset(#[from] serde_json::Error),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }

    pub fn invalid_parameter<V: std::fmt::Display>(arg: &'static str, value: V) -> Self {
        Error::InvalidParameter {
            arg,
            value: value.to_string(),
        }
    }
}
