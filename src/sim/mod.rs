//! Monte Carlo simulation: single-run sampling and repeated runs per sample size.

pub mod runner;
pub mod sampler;

pub use runner::run_experiment;
pub use sampler::estimate_pi;
