//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - run configuration (`ExperimentConfig`, `SampleSizeConfig`, `ModePolicy`)
//! - per-size outputs (`ExperimentResult`)
//! - the reference constants of the default run

pub mod types;

pub use types::*;
