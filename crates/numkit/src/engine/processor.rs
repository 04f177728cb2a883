//! The data processor.
//!
//! ## Purpose
//!
//! This module provides [`DataProcessor`], which transforms numeric
//! sequences, summarizes them and filters their outliers.
//!
//! ## Design notes
//!
//! * **Stateless**: The only state is the `normalize` flag, fixed at construction.
//! * **Borrowing**: Inputs are borrowed for one call and never retained or mutated.
//! * **Generics**: Every method is generic over `Float` types and input containers.
//!
//! ## Key concepts
//!
//! * **Post-normalization**: With `normalize` set, every operation except
//!   `Normalize` itself is followed by min-max scaling. `Normalize` is never
//!   applied twice.
//! * **Empty input**: Rejected by every method before any other check.
//!
//! ## Invariants
//!
//! * `process` returns exactly one value per input value, in input order.
//! * Repeated calls with identical arguments give identical results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::trace;

// Internal dependencies
use crate::engine::operation::Operation;
use crate::engine::options::ProcessOptions;
use crate::engine::output::Statistics;
use crate::engine::validator::Validator;
use crate::math::{moments, outliers, scaling};
use crate::primitives::errors::NumkitError;
use crate::primitives::input::ProcessInput;

/// Default z-score threshold for [`DataProcessor::filter_outliers`].
pub const DEFAULT_OUTLIER_THRESHOLD: f64 = 2.0;

/// Numeric transform and statistics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataProcessor {
    normalize: bool,
}

impl DataProcessor {
    /// Create a processor; with `normalize` set, results are min-max scaled.
    pub fn new(normalize: bool) -> Self {
        Self { normalize }
    }

    /// Whether results of non-normalize operations are min-max scaled.
    pub fn is_normalizing(&self) -> bool {
        self.normalize
    }

    // ========================================================================
    // Processing
    // ========================================================================

    /// Apply `operation` to `data` with default options.
    pub fn process<T, I>(&self, data: &I, operation: Operation) -> Result<Vec<T>, NumkitError>
    where
        T: Float,
        I: ProcessInput<T> + ?Sized,
    {
        self.process_with(data, operation, &ProcessOptions::default())
    }

    /// Apply the operation named `name` to `data`.
    ///
    /// Empty data is reported before an unknown name.
    pub fn process_named<T, I>(
        &self,
        data: &I,
        name: &str,
        options: &ProcessOptions,
    ) -> Result<Vec<T>, NumkitError>
    where
        T: Float,
        I: ProcessInput<T> + ?Sized,
    {
        Validator::validate_non_empty(data.as_process_slice()?)?;
        let operation = name.parse::<Operation>()?;
        self.process_with(data, operation, options)
    }

    /// Apply `operation` to `data` with explicit options.
    pub fn process_with<T, I>(
        &self,
        data: &I,
        operation: Operation,
        _options: &ProcessOptions,
    ) -> Result<Vec<T>, NumkitError>
    where
        T: Float,
        I: ProcessInput<T> + ?Sized,
    {
        let vals = data.as_process_slice()?;
        Validator::validate_non_empty(vals)?;

        let mut result = operation.apply(vals);
        if self.normalize && operation != Operation::Normalize {
            scaling::min_max_in_place(&mut result);
        }

        trace!(
            operation = operation.name(),
            len = result.len(),
            normalized = self.normalize,
            "processed data"
        );
        Ok(result)
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Mean, population standard deviation, minimum and maximum of `data`.
    pub fn statistics<T, I>(&self, data: &I) -> Result<Statistics<T>, NumkitError>
    where
        T: Float,
        I: ProcessInput<T> + ?Sized,
    {
        let vals = data.as_process_slice()?;
        Validator::validate_non_empty(vals)?;

        let mean = moments::mean(vals);
        Ok(Statistics {
            mean,
            std: moments::population_std(vals, mean),
            min: moments::min(vals),
            max: moments::max(vals),
        })
    }

    // ========================================================================
    // Outlier Filtering
    // ========================================================================

    /// Drop values with a z-score of [`DEFAULT_OUTLIER_THRESHOLD`] or more.
    pub fn filter_outliers<T, I>(&self, data: &I) -> Result<Vec<T>, NumkitError>
    where
        T: Float,
        I: ProcessInput<T> + ?Sized,
    {
        let threshold = T::from(DEFAULT_OUTLIER_THRESHOLD).unwrap_or(T::one() + T::one());
        self.filter_outliers_with(data, threshold)
    }

    /// Drop values whose z-score is `threshold` or more.
    ///
    /// # Notes
    ///
    /// * Fewer than three values, or zero deviation, returns the input unchanged.
    /// * `threshold` is not validated; a negative threshold returns nothing.
    pub fn filter_outliers_with<T, I>(&self, data: &I, threshold: T) -> Result<Vec<T>, NumkitError>
    where
        T: Float,
        I: ProcessInput<T> + ?Sized,
    {
        let vals = data.as_process_slice()?;
        Validator::validate_non_empty(vals)?;

        let kept = outliers::retain_inliers(vals, threshold);
        trace!(
            len = vals.len(),
            kept = kept.len(),
            threshold = threshold.to_f64().unwrap_or(f64::NAN),
            "filtered outliers"
        );
        Ok(kept)
    }
}
