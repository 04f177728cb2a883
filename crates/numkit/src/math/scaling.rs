//! Min-max normalization.
//!
//! This module rescales a sequence linearly into `[0, 1]` using its own
//! observed minimum and maximum: `(x - min) / (max - min)`.
//!
//! A sequence whose minimum equals its maximum has no range to scale by; it
//! maps to all zeros instead of dividing by zero.

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

/// Min-max normalize a sequence into a new vector.
pub fn min_max<T: Float>(vals: &[T]) -> Vec<T> {
    let mut out = vals.to_vec();
    min_max_in_place(&mut out);
    out
}

/// Min-max normalize a sequence in place.
pub fn min_max_in_place<T: Float>(vals: &mut [T]) {
    let (lo, hi) = moments::extent(vals);

    if hi == lo {
        debug!(len = vals.len(), "constant data, normalizing to zeros");
        vals.iter_mut().for_each(|x| *x = T::zero());
        return;
    }

    let range = hi - lo;
    for x in vals.iter_mut() {
        *x = (*x - lo) / range;
    }
}
