#![cfg(feature = "dev")]
//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports everything needed for
//! everyday use of both components.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Workflows** - Complete calls work with prelude imports only

use numkit::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test both components construct from the prelude.
#[test]
fn test_prelude_components() {
    let _calc = Calculator::new();
    let _processor = DataProcessor::new(false);
    let _builder: DataProcessorBuilder = DataProcessor::builder();
}

/// Test operation variants are exported unqualified.
#[test]
fn test_prelude_operation_variants() {
    assert_eq!(
        [Identity, Square, Sqrt, Normalize],
        Operation::ALL,
        "Variants should match Operation::ALL"
    );
}

/// Test supporting types are exported.
#[test]
fn test_prelude_supporting_types() {
    let _opts = ProcessOptions::new();
    let _n: Number = 3.into();
    let _err: NumkitError = NumkitError::EmptyInput;
    assert_eq!(DEFAULT_OUTLIER_THRESHOLD, 2.0);
    assert!(!numkit::VERSION.is_empty());
}

// ============================================================================
// Workflow Tests
// ============================================================================

/// Test a full processing workflow.
#[test]
fn test_prelude_workflow() {
    let processor = DataProcessor::default();
    let data = vec![1.0, 2.0, 3.0];

    let squared = processor.process(&data, Square).unwrap();
    let stats: Statistics<f64> = processor.statistics(&squared).unwrap();

    assert_eq!(squared.len(), data.len());
    assert_eq!(stats.max, 9.0);
}

/// Test generic code can accept any processor input.
#[test]
fn test_prelude_process_input() {
    fn total<I: ProcessInput<f64> + ?Sized>(input: &I) -> f64 {
        input.as_process_slice().unwrap().iter().sum()
    }

    assert_eq!(total(&[1.0, 2.0]), 3.0);
    assert_eq!(total(&vec![1.0, 2.0, 3.0]), 6.0);
    assert_eq!(total([4.0, 5.0].as_slice()), 9.0);
}
