#![cfg(feature = "dev")]
//! Tests for mean, standard deviation and extremes.
//!
//! ## Test Organization
//!
//! 1. **Basic Computation** - Known values
//! 2. **Edge Cases** - Single value, empty input, NaN propagation

use approx::assert_relative_eq;

use numkit::internals::math::moments;

// ============================================================================
// Basic Computation Tests
// ============================================================================

/// Test mean of a simple sequence.
#[test]
fn test_mean_basic() {
    let vals = [1.0f64, 2.0, 3.0, 4.0, 5.0];

    assert_relative_eq!(moments::mean(&vals), 3.0, epsilon = 1e-12);
}

/// Test population standard deviation divides by N.
///
/// [2, 4, 4, 4, 5, 5, 7, 9] has mean 5 and population std exactly 2
/// (the sample std would be about 2.138).
#[test]
fn test_population_std_divides_by_n() {
    let vals = [2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let mean = moments::mean(&vals);

    assert_relative_eq!(mean, 5.0, epsilon = 1e-12);
    assert_relative_eq!(moments::population_variance(&vals, mean), 4.0, epsilon = 1e-12);
    assert_relative_eq!(moments::population_std(&vals, mean), 2.0, epsilon = 1e-12);
}

/// Test min, max and extent agree.
#[test]
fn test_extremes() {
    let vals = [3.0f64, -1.5, 8.0, 0.0];

    assert_eq!(moments::min(&vals), -1.5);
    assert_eq!(moments::max(&vals), 8.0);
    assert_eq!(moments::extent(&vals), (-1.5, 8.0));
}

/// Test computation with f32.
#[test]
fn test_moments_f32() {
    let vals = [1.0f32, 2.0, 3.0];
    let mean = moments::mean(&vals);

    assert_relative_eq!(mean, 2.0f32, epsilon = 1e-6);
    assert_relative_eq!(
        moments::population_std(&vals, mean),
        (2.0f32 / 3.0).sqrt(),
        epsilon = 1e-6
    );
}

// ============================================================================
// Edge Cases Tests
// ============================================================================

/// Test a single value has zero deviation.
#[test]
fn test_single_value() {
    let vals = [42.0f64];
    let mean = moments::mean(&vals);

    assert_eq!(mean, 42.0);
    assert_eq!(moments::population_std(&vals, mean), 0.0);
    assert_eq!(moments::extent(&vals), (42.0, 42.0));
}

/// Test empty input yields zero rather than panicking.
#[test]
fn test_empty_yields_zero() {
    let vals: [f64; 0] = [];

    assert_eq!(moments::mean(&vals), 0.0);
    assert_eq!(moments::population_std(&vals, 0.0), 0.0);
    assert_eq!(moments::min(&vals), 0.0);
    assert_eq!(moments::extent(&vals), (0.0, 0.0));
}

/// Test NaN propagates through the extremes wherever it appears.
#[test]
fn test_nan_propagates_to_extremes() {
    let leading = [f64::NAN, 1.0, 2.0];
    let trailing = [1.0, 2.0, f64::NAN];

    assert!(moments::min(&leading).is_nan());
    assert!(moments::max(&trailing).is_nan());

    let (lo, hi) = moments::extent(&trailing);
    assert!(lo.is_nan() && hi.is_nan());
}
