//! CLI argument parsing and dispatch for the rastermill binary.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
