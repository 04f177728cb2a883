//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the processor:
//! - Summary moments (mean, population standard deviation, extremes)
//! - Min-max normalization
//! - Z-score outlier filtering
//!
//! These are reusable building blocks with no knowledge of operations or
//! processor configuration.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine / Calculator
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Mean, standard deviation and extremes.
pub mod moments;

/// Min-max normalization.
pub mod scaling;

/// Z-score outlier filtering.
pub mod outliers;
