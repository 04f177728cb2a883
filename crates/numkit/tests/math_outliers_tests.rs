#![cfg(feature = "dev")]
//! Tests for z-score outlier filtering.
//!
//! ## Test Organization
//!
//! 1. **Z-Scores** - Score computation
//! 2. **Filtering** - Threshold behavior and ordering
//! 3. **Undefined Scores** - Small and constant data

use approx::assert_relative_eq;

use numkit::internals::math::outliers;

// ============================================================================
// Z-Score Tests
// ============================================================================

/// Test z-scores of a symmetric sequence.
///
/// [-1, 0, 1] has mean 0 and population std sqrt(2/3).
#[test]
fn test_z_scores_symmetric() {
    let scores = outliers::z_scores(&[-1.0f64, 0.0, 1.0]).unwrap();
    let std = (2.0f64 / 3.0).sqrt();

    assert_relative_eq!(scores[0], 1.0 / std, epsilon = 1e-12);
    assert_relative_eq!(scores[1], 0.0, epsilon = 1e-12);
    assert_relative_eq!(scores[2], 1.0 / std, epsilon = 1e-12);
}

/// Test z-scores are undefined for small or constant data.
#[test]
fn test_z_scores_undefined() {
    assert!(outliers::z_scores(&[1.0f64, 2.0]).is_none());
    assert!(outliers::z_scores(&[3.0f64, 3.0, 3.0]).is_none());
}

// ============================================================================
// Filtering Tests
// ============================================================================

/// Test the clear outlier is removed and order is preserved.
#[test]
fn test_retain_inliers_removes_outlier() {
    let kept = outliers::retain_inliers(&[1.0f64, 2.0, 3.0, 4.0, 5.0, 100.0], 2.0);

    assert_eq!(kept, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
}

/// Test order is preserved when the outlier is in the middle.
#[test]
fn test_retain_inliers_preserves_order() {
    let kept = outliers::retain_inliers(&[5.0f64, 1.0, 100.0, 4.0, 2.0, 3.0], 2.0);

    assert_eq!(kept, vec![5.0, 1.0, 4.0, 2.0, 3.0]);
}

/// Test the comparison is strict: a score equal to the threshold is dropped.
///
/// [0, 0, 3, 3] has mean 1.5 and std 1.5, so every score is exactly 1.
#[test]
fn test_retain_inliers_strict_threshold() {
    let vals = [0.0f64, 0.0, 3.0, 3.0];

    assert!(outliers::retain_inliers(&vals, 1.0).is_empty());
    assert_eq!(outliers::retain_inliers(&vals, 1.5), vals.to_vec());
}

/// Test a negative threshold keeps nothing.
#[test]
fn test_retain_inliers_negative_threshold() {
    let kept = outliers::retain_inliers(&[1.0f64, 2.0, 3.0], -1.0);

    assert!(kept.is_empty());
}

/// Test filtering keeps exactly the values whose z-score is below the threshold.
#[test]
fn test_retain_inliers_matches_z_scores() {
    let vals = [2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let scores = outliers::z_scores(&vals).unwrap();
    let expected: Vec<f64> = vals
        .iter()
        .zip(&scores)
        .filter(|&(_, &z)| z < 1.0)
        .map(|(&x, _)| x)
        .collect();

    // Mean 5, std 2; 7.0 scores exactly 1 and is dropped with 2.0 and 9.0.
    assert_eq!(expected, vec![4.0, 4.0, 4.0, 5.0, 5.0]);
    assert_eq!(outliers::retain_inliers(&vals, 1.0), expected);
}

// ============================================================================
// Undefined Scores Tests
// ============================================================================

/// Test fewer than MIN_POINTS values are returned unchanged.
#[test]
fn test_retain_inliers_too_few_points() {
    assert_eq!(outliers::MIN_POINTS, 3);
    assert_eq!(outliers::retain_inliers(&[1.0f64, 1000.0], 0.1), vec![1.0, 1000.0]);
}

/// Test zero deviation returns the input unchanged, even with a negative threshold.
#[test]
fn test_retain_inliers_zero_std() {
    let kept = outliers::retain_inliers(&[4.0f64, 4.0, 4.0, 4.0], -1.0);

    assert_eq!(kept, vec![4.0, 4.0, 4.0, 4.0]);
}
