//! Append-only operation log.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use tracing::trace;

// Internal dependencies
use crate::primitives::number::Number;

/// Ordered record of successful calculator operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `"{a} {symbol} {b} = {result}"`.
    pub fn record(&mut self, a: Number, symbol: char, b: Number, result: Number) {
        let entry = format!("{a} {symbol} {b} = {result}");
        trace!(entry = entry.as_str(), "recorded calculation");
        self.entries.push(entry);
    }

    /// Entries in call order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
