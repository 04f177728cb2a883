//! Layer 3: Calculator
//!
//! # Purpose
//!
//! This layer provides [`Calculator`], a four-operation arithmetic evaluator
//! that records every successful operation as a text history entry.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Calculator ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```
//!
//! ## Invariants
//!
//! * History length equals the number of successful operations since the last clear.
//! * A failed division leaves the history unchanged.
//! * Entries render numbers deterministically, so identical calls give identical entries.

/// Operation log.
pub mod history;

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use tracing::debug;

// Internal dependencies
use crate::calculator::history::History;
use crate::engine::validator::Validator;
use crate::primitives::errors::NumkitError;
use crate::primitives::number::Number;

/// Arithmetic evaluator with an append-only history.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    history: History,
}

impl Calculator {
    /// Create a calculator with an empty history.
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// `a + b`.
    pub fn add(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        let result = a + b;
        self.history.record(a, '+', b, result);
        result
    }

    /// `a - b`.
    pub fn subtract(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        let result = a - b;
        self.history.record(a, '-', b, result);
        result
    }

    /// `a * b`.
    pub fn multiply(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        let result = a * b;
        self.history.record(a, '*', b, result);
        result
    }

    /// `a / b` as a float.
    ///
    /// # Errors
    ///
    /// Returns [`NumkitError::DivisionByZero`] when `b` is zero; nothing is
    /// recorded in that case.
    pub fn divide(
        &mut self,
        a: impl Into<Number>,
        b: impl Into<Number>,
    ) -> Result<f64, NumkitError> {
        let (a, b) = (a.into(), b.into());
        if let Err(err) = Validator::validate_divisor(b) {
            debug!(numerator = %a, "rejected division by zero");
            return Err(err);
        }

        let result = a.as_f64() / b.as_f64();
        self.history.record(a, '/', b, Number::Float(result));
        Ok(result)
    }

    /// Copy of the history, in call order.
    pub fn history(&self) -> Vec<String> {
        self.history.entries().to_vec()
    }

    /// Number of recorded operations.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Check if no operation has been recorded since creation or the last clear.
    pub fn is_history_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Remove all recorded operations.
    pub fn clear_history(&mut self) {
        if !self.history.is_empty() {
            debug!(entries = self.history.len(), "clearing history");
        }
        self.history.clear();
    }
}
