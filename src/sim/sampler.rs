//! Point-dropping π estimator.
//!
//! Points are drawn uniformly in the square [-1, 1] x [-1, 1]. The inscribed
//! unit circle covers π/4 of the square, so
//!
//! `π ≈ 4 * inside / n`

use rand::Rng;
use rand::distributions::{Distribution, Standard};

use crate::error::AppError;

/// Estimate π from `points` uniformly drawn points.
///
/// The only side effect is advancing `rng`.
pub fn estimate_pi<R: Rng + ?Sized>(rng: &mut R, points: u64) -> Result<f64, AppError> {
    if points == 0 {
        return Err(AppError::invalid_config(
            "Cannot estimate π from zero points (sample size must be >= 1).",
        ));
    }

    let mut inside = 0u64;
    for _ in 0..points {
        if sample_inside(rng) {
            inside += 1;
        }
    }

    Ok(4.0 * inside as f64 / points as f64)
}

fn sample_inside<R: Rng + ?Sized>(rng: &mut R) -> bool {
    let x = to_square(Standard.sample(rng));
    let y = to_square(Standard.sample(rng));
    x * x + y * y <= 1.0
}

/// Map `u` in [0, 1) onto [-1, 1).
fn to_square(u: f64) -> f64 {
    -1.0 + 2.0 * u
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn zero_points_is_invalid() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = estimate_pi(&mut rng, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn center_points_are_all_inside() {
        // 1 << 63 maps to u = 0.5, i.e. the origin.
        let mut rng = StepRng::new(1 << 63, 0);
        assert_eq!(estimate_pi(&mut rng, 100).unwrap(), 4.0);
    }

    #[test]
    fn corner_points_are_all_outside() {
        // 0 maps to u = 0.0, i.e. the corner (-1, -1).
        let mut rng = StepRng::new(0, 0);
        assert_eq!(estimate_pi(&mut rng, 100).unwrap(), 0.0);
    }

    #[test]
    fn large_sample_is_close_to_pi() {
        let mut rng = StdRng::seed_from_u64(42);
        let est = estimate_pi(&mut rng, 200_000).unwrap();
        assert!((est - std::f64::consts::PI).abs() < 0.02, "estimate {est}");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn estimate_stays_in_closed_range(seed in any::<u64>(), n in 1u64..2_000) {
            let mut rng = StdRng::seed_from_u64(seed);
            let est = estimate_pi(&mut rng, n).unwrap();
            prop_assert!((0.0..=4.0).contains(&est), "estimate {} out of range", est);
        }
    }
}
