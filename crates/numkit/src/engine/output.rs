//! Output types for processor statistics.
//!
//! ## Purpose
//!
//! This module defines the `Statistics` struct returned by
//! `DataProcessor::statistics`, with a string-keyed view for callers that
//! treat it as a mapping.
//!
//! ## Design notes
//!
//! * **Generics**: Values are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Keys**: `"mean"`, `"std"`, `"min"`, `"max"`, always in that order.
//!
//! ## Invariants
//!
//! * `min <= mean <= max` for finite input.
//! * `std` is the population standard deviation and is never negative.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::BTreeMap;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

/// Summary statistics of a numeric sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics<T> {
    /// Arithmetic mean.
    pub mean: T,

    /// Population standard deviation (divides by N).
    pub std: T,

    /// Smallest value.
    pub min: T,

    /// Largest value.
    pub max: T,
}

impl<T: Float> Statistics<T> {
    /// Mapping keys, in iteration order.
    pub const KEYS: [&'static str; 4] = ["mean", "std", "min", "max"];

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<T> {
        match key {
            "mean" => Some(self.mean),
            "std" => Some(self.std),
            "min" => Some(self.min),
            "max" => Some(self.max),
            _ => None,
        }
    }

    /// `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, T)> {
        let values = [self.mean, self.std, self.min, self.max];
        Self::KEYS.into_iter().zip(values)
    }

    /// Owned string-keyed mapping of all values.
    pub fn to_map(&self) -> BTreeMap<&'static str, T> {
        self.iter().collect()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Statistics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Statistics:")?;
        writeln!(f, "  Mean: {:.6}", self.mean)?;
        writeln!(f, "  Std:  {:.6}", self.std)?;
        writeln!(f, "  Min:  {:.6}", self.min)?;
        writeln!(f, "  Max:  {:.6}", self.max)
    }
}
