//! # numkit — arithmetic history and numeric sequence processing
//!
//! Two small, independent components:
//!
//! - [`Calculator`](prelude::Calculator): four arithmetic operations on
//!   integers and floats, recording each successful operation as a text
//!   history entry.
//! - [`DataProcessor`](prelude::DataProcessor): elementwise transforms,
//!   summary statistics and z-score outlier filtering over a one-dimensional
//!   sequence of floats.
//!
//! ## Quick Start
//!
//! ### Calculator
//!
//! ```rust
//! use numkit::prelude::*;
//!
//! let mut calc = Calculator::new();
//! assert_eq!(calc.add(2, 3), 5);
//! assert_eq!(calc.multiply(4, 5), 20);
//! assert_eq!(calc.divide(6, 2)?, 3.0);
//!
//! assert_eq!(calc.history(), ["2 + 3 = 5", "4 * 5 = 20", "6 / 2 = 3.0"]);
//!
//! // Failed calls are reported and not recorded.
//! assert_eq!(calc.divide(1, 0), Err(NumkitError::DivisionByZero));
//! assert_eq!(calc.history_len(), 3);
//! # Result::<(), NumkitError>::Ok(())
//! ```
//!
//! ### Data Processing
//!
//! ```rust
//! use numkit::prelude::*;
//!
//! let processor = DataProcessor::builder().normalize(false).build()?;
//!
//! let squared = processor.process(&[1.0, 2.0, 3.0], Square)?;
//! assert_eq!(squared, vec![1.0, 4.0, 9.0]);
//!
//! let scaled = processor.process_named(&[0.0, 5.0, 10.0], "normalize", &ProcessOptions::new())?;
//! assert_eq!(scaled, vec![0.0, 0.5, 1.0]);
//!
//! let stats = processor.statistics(&[1.0, 2.0, 3.0, 4.0, 5.0])?;
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.get("max"), Some(5.0));
//!
//! let kept = processor.filter_outliers(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0])?;
//! assert_eq!(kept, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! # Result::<(), NumkitError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Fallible methods return `Result<_, NumkitError>`:
//!
//! - **`DivisionByZero`**: `Calculator::divide` with a zero divisor.
//! - **`EmptyInput`**: any `DataProcessor` method given an empty sequence.
//! - **`InvalidOperation`**: an unrecognized operation name.
//!
//! ```rust
//! use numkit::prelude::*;
//!
//! let processor = DataProcessor::default();
//! let empty: [f64; 0] = [];
//!
//! match processor.statistics(&empty) {
//!     Ok(stats) => println!("{}", stats),
//!     Err(e) => eprintln!("Statistics failed: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! Diagnostics are emitted through [`tracing`](https://docs.rs/tracing)
//! (`trace` for each operation, `debug` for fallback paths). The crate never
//! installs a subscriber.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to remove the standard library dependency; an
//! allocator is still required:
//!
//! ```toml
//! [dependencies]
//! numkit = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors, numbers and input containers.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Engine - data processing orchestration.
mod engine;

// Layer 3: Calculator - arithmetic with history.
mod calculator;

// High-level API and builder.
mod api;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Standard numkit prelude.
pub mod prelude {
    pub use crate::api::{
        Calculator, DEFAULT_OUTLIER_THRESHOLD, DataProcessor, DataProcessorBuilder, Number,
        NumkitError, Operation,
        Operation::{Identity, Normalize, Sqrt, Square},
        ProcessInput, ProcessOptions, Statistics,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod calculator {
        pub use crate::calculator::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
