//! Processing operations.
//!
//! ## Purpose
//!
//! This module defines the transforms the processor can apply to a sequence
//! and how each is looked up by name.
//!
//! ## Key concepts
//!
//! * **Elementwise**: `Identity`, `Square` and `Sqrt` map each value independently.
//! * **Whole-sequence**: `Normalize` depends on the sequence's min and max.
//! * **Names**: Operations parse from their exact lowercase names.
//!
//! ## Invariants
//!
//! * Every operation returns a sequence of the same length and order as its input.
//! * `Sqrt` takes the absolute value first, so negative inputs never yield NaN.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::math::scaling;
use crate::primitives::errors::NumkitError;

/// Transform applied by `DataProcessor::process`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operation {
    /// Values unchanged.
    #[default]
    Identity,

    /// `x^2`.
    Square,

    /// `sqrt(|x|)`.
    Sqrt,

    /// Min-max scaling into `[0, 1]`.
    Normalize,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Self; 4] = [Self::Identity, Self::Square, Self::Sqrt, Self::Normalize];

    /// Canonical name of the operation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Square => "square",
            Self::Sqrt => "sqrt",
            Self::Normalize => "normalize",
        }
    }

    /// Apply the operation to a sequence, producing a new vector.
    pub fn apply<T: Float>(self, vals: &[T]) -> Vec<T> {
        match self {
            Self::Identity => vals.to_vec(),
            Self::Square => vals.iter().map(|&x| x * x).collect(),
            Self::Sqrt => vals.iter().map(|&x| x.abs().sqrt()).collect(),
            Self::Normalize => scaling::min_max(vals),
        }
    }
}

impl FromStr for Operation {
    type Err = NumkitError;

    fn from_str(name: &str) -> core::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| NumkitError::InvalidOperation(name.to_string()))
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}
