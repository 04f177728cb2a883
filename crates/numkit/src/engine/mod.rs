//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates data processing: it validates input, dispatches
//! the requested operation, applies post-normalization and assembles
//! statistics output.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// The data processor.
pub mod processor;

/// Processing operations.
pub mod operation;

/// Per-call options.
pub mod options;

/// Statistics output.
pub mod output;

/// Validation logic.
pub mod validator;
