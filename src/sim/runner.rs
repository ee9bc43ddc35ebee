//! Repeat the sampler for one sample-size configuration.

use rand::Rng;

use crate::domain::SampleSizeConfig;
use crate::error::AppError;
use crate::sim::sampler::estimate_pi;

/// Upper bound on the up-front reservation; longer runs grow the vector as they go.
const RESERVE_LIMIT: usize = 1024;

/// Run the sampler `config.iterations` times with `config.points` points each.
///
/// Estimates are returned in invocation order.
pub fn run_experiment<R: Rng + ?Sized>(rng: &mut R, config: &SampleSizeConfig) -> Result<Vec<f64>, AppError> {
    config.validate()?;

    let mut estimates = Vec::with_capacity((config.iterations as usize).min(RESERVE_LIMIT));
    for _ in 0..config.iterations {
        estimates.push(estimate_pi(rng, config.points)?);
    }
    Ok(estimates)
}
