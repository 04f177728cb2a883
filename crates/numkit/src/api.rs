//! High-level API for numkit.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the fluent
//! [`DataProcessorBuilder`] and re-exports of the public types of the
//! engine, calculator and primitives layers.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DataProcessorBuilder`] via `DataProcessor::builder()`.
//! 2. Chain configuration methods (`.normalize()`).
//! 3. Call `.build()` to obtain a [`DataProcessor`].

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::calculator::Calculator;
pub use crate::engine::operation::Operation;
pub use crate::engine::options::ProcessOptions;
pub use crate::engine::output::Statistics;
pub use crate::engine::processor::{DEFAULT_OUTLIER_THRESHOLD, DataProcessor};
pub use crate::primitives::errors::NumkitError;
pub use crate::primitives::input::ProcessInput;
pub use crate::primitives::number::Number;

/// Fluent builder for configuring a [`DataProcessor`].
#[derive(Debug, Clone, Default)]
pub struct DataProcessorBuilder {
    /// Min-max scale the result of every non-normalize operation.
    pub normalize: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl DataProcessorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable post-normalization (default: disabled).
    pub fn normalize(mut self, enabled: bool) -> Self {
        if self.normalize.is_some() {
            self.duplicate_param = Some("normalize");
        }
        self.normalize = Some(enabled);
        self
    }

    /// Validate the configuration and build the processor.
    pub fn build(self) -> Result<DataProcessor, NumkitError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Ok(DataProcessor::new(self.normalize.unwrap_or(false)))
    }
}

impl DataProcessor {
    /// Start configuring a processor.
    pub fn builder() -> DataProcessorBuilder {
        DataProcessorBuilder::new()
    }
}
