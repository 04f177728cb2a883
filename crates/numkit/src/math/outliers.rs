//! Z-score outlier filtering.
//!
//! ## Purpose
//!
//! This module flags values far from a sequence's own mean, measured in
//! population standard deviations, and keeps the rest.
//!
//! ## Key concepts
//!
//! * **Z-score**: `|x - mean| / std`.
//! * **Threshold**: Values with a z-score strictly below the threshold are kept.
//! * **Undefined scores**: With fewer than [`MIN_POINTS`] values or zero deviation,
//!   no value is scored and the input is kept as is.
//!
//! ## Invariants
//!
//! * Kept values preserve their original relative order.
//! * The threshold is not validated; a negative threshold keeps nothing.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::math::moments;

/// Minimum number of values needed to assess spread.
pub const MIN_POINTS: usize = 3;

/// Z-score of a single value.
#[inline]
pub fn z_score<T: Float>(x: T, mean: T, std: T) -> T {
    ((x - mean) / std).abs()
}

/// Z-scores of every value; `None` when the scores are undefined.
pub fn z_scores<T: Float>(vals: &[T]) -> Option<Vec<T>> {
    let (mean, std) = spread(vals)?;
    Some(vals.iter().map(|&x| z_score(x, mean, std)).collect())
}

/// Keep the values whose z-score is strictly below `threshold`.
pub fn retain_inliers<T: Float>(vals: &[T], threshold: T) -> Vec<T> {
    let Some(scores) = z_scores(vals) else {
        return vals.to_vec();
    };

    vals.iter()
        .zip(scores)
        .filter(|&(_, z)| z < threshold)
        .map(|(&x, _)| x)
        .collect()
}

// Mean and population std, or `None` when z-scores are undefined.
fn spread<T: Float>(vals: &[T]) -> Option<(T, T)> {
    if vals.len() < MIN_POINTS {
        debug!(
            len = vals.len(),
            min = MIN_POINTS,
            "too few values to score, keeping input"
        );
        return None;
    }

    let mean = moments::mean(vals);
    let std = moments::population_std(vals, mean);
    if std == T::zero() {
        debug!(len = vals.len(), "zero deviation, keeping input");
        return None;
    }

    Some((mean, std))
}
