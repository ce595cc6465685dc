//! Core processing building blocks: the four grid transforms, grayscale
//! reduction, and typed parameters. These are internal primitives consumed
//! by the high-level `api` module.
pub mod params;
pub mod processing;
