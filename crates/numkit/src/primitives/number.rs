//! Real numbers for the calculator.
//!
//! ## Purpose
//!
//! This module provides [`Number`], a real value that is either an integer
//! or a float, together with the arithmetic and string rendering the
//! calculator relies on.
//!
//! ## Design notes
//!
//! * **Promotion**: Integer op integer stays integer; anything involving a float is a float.
//! * **Overflow**: Integers are `i128`; only overflow past that falls back to float arithmetic.
//! * **Rendering**: Integers print without a decimal point, integral floats print with one.
//!
//! ## Invariants
//!
//! * Rendering is deterministic: equal values always produce equal strings.
//! * Floats render as their shortest round-trip representation.
//!
//! ## Non-goals
//!
//! * This module does not provide arbitrary precision integers.
//! * This module does not parse numbers from strings.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use core::ops::{Add, Mul, Sub};
use num_traits::Float;

/// Magnitude below which non-zero floats render in scientific notation.
const SCIENTIFIC_LOWER: f64 = 1e-4;

/// Magnitude at or above which floats render in scientific notation.
const SCIENTIFIC_UPPER: f64 = 1e16;

// ============================================================================
// Number
// ============================================================================

/// A real number: an integer or a floating-point value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integer value.
    Int(i128),

    /// Floating-point value.
    Float(f64),
}

impl Number {
    /// Value as `f64`.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(x) => x,
        }
    }

    /// Check if the value is zero (`0`, `0.0` or `-0.0`).
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(i) => i == 0,
            Self::Float(x) => x == 0.0,
        }
    }

    /// Check if this is the integer variant.
    pub fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }

    // Apply a binary operation, keeping integers exact unless they overflow.
    #[inline]
    fn combine(
        self,
        rhs: Self,
        int_op: fn(i128, i128) -> Option<i128>,
        float_op: fn(f64, f64) -> f64,
    ) -> Self {
        if let (Self::Int(a), Self::Int(b)) = (self, rhs) {
            if let Some(exact) = int_op(a, b) {
                return Self::Int(exact);
            }
        }
        Self::Float(float_op(self.as_f64(), rhs.as_f64()))
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(rhs, i128::checked_add, |a, b| a + b)
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.combine(rhs, i128::checked_sub, |a, b| a - b)
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.combine(rhs, i128::checked_mul, |a, b| a * b)
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Self::Int(i128::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

// Pointer-sized integers are at most 64 bits on every supported target.
impl From<isize> for Number {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: isize) -> Self {
        i128::try_from(value).map_or(Self::Float(value as f64), Self::Int)
    }
}

impl From<usize> for Number {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: usize) -> Self {
        i128::try_from(value).map_or(Self::Float(value as f64), Self::Int)
    }
}

// Values above `i128::MAX` keep their magnitude as a float.
impl From<u128> for Number {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: u128) -> Self {
        i128::try_from(value).map_or(Self::Float(value as f64), Self::Int)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Number> for f64 {
    fn from(value: Number) -> Self {
        value.as_f64()
    }
}

// Numeric equality across variants, so `Number::Int(5) == 5.0`.
impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == *other
    }
}

macro_rules! impl_eq_int {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for Number {
                fn eq(&self, other: &$t) -> bool {
                    let other = i128::from(*other);
                    match self {
                        Self::Int(i) => *i == other,
                        Self::Float(x) => *x == Self::Int(other).as_f64(),
                    }
                }
            }
        )*
    };
}

impl_eq_int!(i32, i64, i128, u64);

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write_float(f, *x),
        }
    }
}

// Shortest round-trip rendering, always with a decimal point or an exponent.
fn write_float(f: &mut Formatter<'_>, value: f64) -> Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_infinite() {
        return f.write_str(if value.is_sign_negative() { "-inf" } else { "inf" });
    }

    let magnitude = Float::abs(value);
    if magnitude != 0.0 && !(SCIENTIFIC_LOWER..SCIENTIFIC_UPPER).contains(&magnitude) {
        // `{:e}` yields e.g. "1.5e-5"; the exponent is rewritten as "e-05".
        let repr = format!("{value:e}");
        let (mantissa, exponent) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    } else if Float::fract(value) == 0.0 {
        write!(f, "{value:.1}")
    } else {
        write!(f, "{value}")
    }
}
