//! Input validation for calculator and processor calls.
//!
//! ## Purpose
//!
//! This module provides the validation checks both components run before
//! doing any work: non-empty data, non-zero divisors, and builder
//! parameters configured at most once.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Side-effect free**: Checks never touch component state, so a failed
//!   call leaves history and configuration unchanged.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not reject non-finite values; they follow IEEE arithmetic.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::NumkitError;
use crate::primitives::number::Number;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for numkit inputs.
///
/// All methods return `Result<(), NumkitError>` and fail fast upon the first
/// violation.
pub struct Validator;

impl Validator {
    /// Validate that a data sequence has at least one element.
    pub fn validate_non_empty<T: Float>(data: &[T]) -> Result<(), NumkitError> {
        if data.is_empty() {
            return Err(NumkitError::EmptyInput);
        }
        Ok(())
    }

    /// Validate that a divisor is not zero.
    pub fn validate_divisor(divisor: Number) -> Result<(), NumkitError> {
        if divisor.is_zero() {
            return Err(NumkitError::DivisionByZero);
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in a builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), NumkitError> {
        if let Some(param) = duplicate_param {
            return Err(NumkitError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
