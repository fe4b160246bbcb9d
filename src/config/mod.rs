//! Configuration for the N-Queens SAT solver

pub mod settings;

pub use settings::{CliOverrides, OutputConfig, OutputFormat, RunConfig, Settings};
