//! Summary moments and extremes of a numeric sequence.
//!
//! ## Purpose
//!
//! This module computes the building blocks of the processor's statistics:
//! arithmetic mean, population standard deviation, minimum and maximum.
//!
//! ## Design notes
//!
//! * **Two-pass variance**: The mean is computed first, then squared deviations.
//! * **Population definition**: Variance divides by N, not N - 1.
//! * **NaN propagation**: A NaN anywhere in the input makes `min`/`max` NaN.
//!
//! ## Invariants
//!
//! * Callers pass non-empty slices; empty slices yield zero rather than panicking.
//! * The standard deviation is never negative.

// External dependencies
use num_traits::Float;

/// Arithmetic mean: `sum(x) / n`.
pub fn mean<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let n = T::from(vals.len()).unwrap_or(T::one());
    let sum = vals.iter().fold(T::zero(), |acc, &x| acc + x);
    sum / n
}

/// Population variance around a precomputed mean: `sum((x - mean)^2) / n`.
pub fn population_variance<T: Float>(vals: &[T], mean: T) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let n = T::from(vals.len()).unwrap_or(T::one());
    let ss = vals.iter().fold(T::zero(), |acc, &x| {
        let d = x - mean;
        acc + d * d
    });
    ss / n
}

/// Population standard deviation around a precomputed mean.
pub fn population_std<T: Float>(vals: &[T], mean: T) -> T {
    population_variance(vals, mean).max(T::zero()).sqrt()
}

/// Smallest value; NaN if any value is NaN.
pub fn min<T: Float>(vals: &[T]) -> T {
    extreme(vals, |x, acc| x < acc)
}

/// Largest value; NaN if any value is NaN.
pub fn max<T: Float>(vals: &[T]) -> T {
    extreme(vals, |x, acc| x > acc)
}

/// Both extremes in a single pass, as `(min, max)`.
pub fn extent<T: Float>(vals: &[T]) -> (T, T) {
    let Some(&first) = vals.first() else {
        return (T::zero(), T::zero());
    };
    vals.iter().skip(1).fold((first, first), |(lo, hi), &x| {
        if lo.is_nan() || x.is_nan() {
            (T::nan(), T::nan())
        } else {
            (lo.min(x), hi.max(x))
        }
    })
}

// Fold with a replacement predicate, sticking to NaN once seen.
#[inline]
fn extreme<T: Float>(vals: &[T], replaces: fn(T, T) -> bool) -> T {
    let Some(&first) = vals.first() else {
        return T::zero();
    };
    vals.iter().skip(1).fold(first, |acc, &x| {
        if acc.is_nan() || x.is_nan() {
            T::nan()
        } else if replaces(x, acc) {
            x
        } else {
            acc
        }
    })
}
