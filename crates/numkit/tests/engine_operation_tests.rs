#![cfg(feature = "dev")]
//! Tests for processing operations.
//!
//! ## Test Organization
//!
//! 1. **Name Lookup** - Parsing and canonical names
//! 2. **Application** - Each operation's transform

use approx::assert_relative_eq;

use numkit::internals::engine::operation::Operation;
use numkit::internals::primitives::errors::NumkitError;

// ============================================================================
// Name Lookup Tests
// ============================================================================

/// Test every canonical name parses back to its operation.
#[test]
fn test_parse_canonical_names() {
    for op in Operation::ALL {
        assert_eq!(op.name().parse::<Operation>(), Ok(op));
        assert_eq!(op.to_string(), op.name());
    }
}

/// Test unknown names are rejected with the offending name.
#[test]
fn test_parse_unknown_name() {
    let res = "bogus".parse::<Operation>();

    assert_eq!(res, Err(NumkitError::InvalidOperation("bogus".to_string())));
}

/// Test lookup is exact: case and whitespace variants are rejected.
#[test]
fn test_parse_is_exact() {
    assert!("Square".parse::<Operation>().is_err());
    assert!(" sqrt".parse::<Operation>().is_err());
    assert!("".parse::<Operation>().is_err());
}

/// Test the default operation is identity.
#[test]
fn test_default_is_identity() {
    assert_eq!(Operation::default(), Operation::Identity);
}

// ============================================================================
// Application Tests
// ============================================================================

/// Test identity returns the values unchanged.
#[test]
fn test_apply_identity() {
    let vals = [1.0f64, -2.5, 3.0];

    assert_eq!(Operation::Identity.apply(&vals), vals.to_vec());
}

/// Test square.
#[test]
fn test_apply_square() {
    assert_eq!(
        Operation::Square.apply(&[1.0f64, 2.0, 3.0, -4.0]),
        vec![1.0, 4.0, 9.0, 16.0]
    );
}

/// Test sqrt takes the absolute value first.
///
/// Verifies negative inputs never produce NaN.
#[test]
fn test_apply_sqrt_of_absolute() {
    let out = Operation::Sqrt.apply(&[1.0f64, 4.0, -9.0, 16.0]);

    assert_eq!(out, vec![1.0, 2.0, 3.0, 4.0]);
    assert!(out.iter().all(|x| !x.is_nan()));
}

/// Test normalize applies min-max scaling.
#[test]
fn test_apply_normalize() {
    let out = Operation::Normalize.apply(&[10.0f64, 20.0, 30.0]);

    assert_relative_eq!(out[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(out[1], 0.5, epsilon = 1e-12);
    assert_relative_eq!(out[2], 1.0, epsilon = 1e-12);
}
