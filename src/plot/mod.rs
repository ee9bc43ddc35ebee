//! Chart rendering.
//!
//! - PNG convergence chart (`chart`)

pub mod chart;

pub use chart::*;

use crate::domain::ExperimentResult;

/// `(sample size, mean)` pairs in result order, ready for charting.
pub fn convergence_points(results: &[ExperimentResult]) -> Vec<(u64, f64)> {
    results.iter().map(|r| (r.sample_size, r.mean)).collect()
}
