//! Input abstractions for the data processor.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for processor inputs, allowing
//! every `DataProcessor` method to accept slices, vectors, fixed-size arrays
//! and (with the `ndarray` feature) one-dimensional arrays through a single
//! interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Provides direct slice access to the underlying buffer.
//! * **Borrowing**: Inputs are only borrowed for the duration of one call.
//! * **Fail-fast validation**: Non-contiguous `ndarray` views are rejected up front.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements of the input container, in order.
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or imputation.
//! * This module does not handle multi-dimensional data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(all(feature = "ndarray", not(feature = "std")))]
use alloc::string::ToString;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
#[cfg(feature = "ndarray")]
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::NumkitError;

/// Trait for types that can be used as input for the data processor.
pub trait ProcessInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_process_slice(&self) -> Result<&[T], NumkitError>;
}

impl<T: Float> ProcessInput<T> for [T] {
    fn as_process_slice(&self) -> Result<&[T], NumkitError> {
        Ok(self)
    }
}

impl<T: Float, const N: usize> ProcessInput<T> for [T; N] {
    fn as_process_slice(&self) -> Result<&[T], NumkitError> {
        Ok(self.as_slice())
    }
}

impl<T: Float> ProcessInput<T> for Vec<T> {
    fn as_process_slice(&self) -> Result<&[T], NumkitError> {
        Ok(self.as_slice())
    }
}

#[cfg(feature = "ndarray")]
impl<T: Float, S> ProcessInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_process_slice(&self) -> Result<&[T], NumkitError> {
        self.as_slice().ok_or_else(|| {
            NumkitError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
