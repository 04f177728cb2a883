//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive types shared by both components: the
//! error enum, the calculator's number type and the processor's input
//! abstraction. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine / Calculator
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Integer-or-float numbers.
pub mod number;

/// Input containers accepted by the processor.
pub mod input;
