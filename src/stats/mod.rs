//! Descriptive statistics over the estimates of one sample size.

use std::collections::HashMap;

use crate::domain::{ExperimentResult, ModePolicy};
use crate::error::{AppError, ErrorKind};

/// Arithmetic mean (sum / count), rounded once.
///
/// The sum is carried exactly as a list of non-overlapping partials, so the
/// result is the correctly rounded value of the true mean. A naive running sum
/// gives e.g. `3.1359999999999997` instead of `3.136` for
/// `[3.1444, 3.1224, 3.1412]`.
pub fn mean(values: &[f64]) -> Result<f64, AppError> {
    if values.is_empty() {
        return Err(AppError::invalid_config("Cannot take the mean of zero estimates."));
    }
    let n = values.len() as f64;
    let mut partials = exact_partials(values);
    let q = round_partials(&partials) / n;

    // q * n is exactly prod + err; the remainder sum - q * n corrects q.
    let prod = q * n;
    let err = q.mul_add(n, -prod);
    partials.push(-prod);
    partials.push(-err);
    let remainder = round_partials(&exact_partials(&partials));

    Ok(q + remainder / n)
}

/// Shewchuk's exact summation: non-overlapping partials whose sum is exactly
/// the sum of `values`, in increasing magnitude.
fn exact_partials(values: &[f64]) -> Vec<f64> {
    let mut partials: Vec<f64> = Vec::new();
    for &v in values {
        let mut x = v;
        let mut kept = 0;
        for j in 0..partials.len() {
            let mut y = partials[j];
            if x.abs() < y.abs() {
                std::mem::swap(&mut x, &mut y);
            }
            let hi = x + y;
            let lo = y - (hi - x);
            if lo != 0.0 {
                partials[kept] = lo;
                kept += 1;
            }
            x = hi;
        }
        partials.truncate(kept);
        partials.push(x);
    }
    partials
}

/// Correctly rounded sum of Shewchuk partials (round-half-even).
fn round_partials(partials: &[f64]) -> f64 {
    let Some((&top, rest)) = partials.split_last() else {
        return 0.0;
    };
    let mut hi = top;
    let mut lo = 0.0;
    let mut remaining = rest.len();
    while remaining > 0 {
        remaining -= 1;
        let x = hi;
        let y = rest[remaining];
        hi = x + y;
        lo = y - (hi - x);
        if lo != 0.0 {
            break;
        }
    }
    // Halfway case: the lower partials decide the rounding direction.
    if remaining > 0 {
        let below = rest[remaining - 1];
        if (lo < 0.0 && below < 0.0) || (lo > 0.0 && below > 0.0) {
            let y = lo * 2.0;
            let x = hi + y;
            if y == x - hi {
                hi = x;
            }
        }
    }
    hi
}

/// Most frequent value under exact floating-point equality.
///
/// Ties are resolved by `policy`; see [`ModePolicy`].
pub fn mode(values: &[f64], policy: ModePolicy) -> Result<f64, AppError> {
    if values.is_empty() {
        return Err(AppError::invalid_config("Cannot take the mode of zero estimates."));
    }

    // Distinct values in first-seen order, with their counts.
    let mut order: Vec<f64> = Vec::new();
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for &v in values {
        let count = counts.entry(key(v)).or_insert(0);
        if *count == 0 {
            order.push(v);
        }
        *count += 1;
    }

    let max_count = counts.values().copied().max().unwrap_or(0);
    let mut tied = order.iter().copied().filter(|v| counts[&key(*v)] == max_count);
    let Some(first) = tied.next() else {
        return Err(AppError::invalid_config("Cannot take the mode of zero estimates."));
    };

    match policy {
        ModePolicy::FirstEncountered => Ok(first),
        ModePolicy::Strict => {
            let others = tied.count();
            if others > 0 {
                return Err(AppError::new(
                    ErrorKind::NoUniqueMode,
                    format!("No unique mode; found {} equally common values.", others + 1),
                ));
            }
            Ok(first)
        }
    }
}

/// Aggregate the estimates of one sample size.
pub fn summarize(sample_size: u64, estimates: Vec<f64>, policy: ModePolicy) -> Result<ExperimentResult, AppError> {
    let mean = mean(&estimates)?;
    let mode = mode(&estimates, policy)?;
    Ok(ExperimentResult {
        sample_size,
        estimates,
        mean,
        mode,
    })
}

// Equality key; folds -0.0 into 0.0 so they count as the same value.
fn key(v: f64) -> u64 {
    if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
}
