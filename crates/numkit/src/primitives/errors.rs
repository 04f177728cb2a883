//! Error types for numkit operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions reported by the calculator and
//! the data processor. Every variant describes a caller-input problem.
//!
//! ## Design notes
//!
//! * **Synchronous**: Errors are returned directly to the caller; nothing is retried.
//! * **Stateless failure**: A failed call leaves calculator history untouched.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Arithmetic**: Division by a zero divisor.
//! 2. **Input validation**: Empty sequences, non-contiguous array views.
//! 3. **Operation lookup**: Unknown operation names.
//! 4. **Builder validation**: Parameters configured more than once.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for numkit operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumkitError {
    /// The divisor of a division was zero.
    DivisionByZero,

    /// Input sequence is empty; every processor operation needs data.
    EmptyInput,

    /// The requested operation name is not recognized.
    InvalidOperation(String),

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for NumkitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DivisionByZero => write!(f, "Cannot divide by zero"),
            Self::EmptyInput => write!(f, "Data cannot be empty"),
            Self::InvalidOperation(name) => write!(f, "Invalid operation: {name}"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for NumkitError {}
