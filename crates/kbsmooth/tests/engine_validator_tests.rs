#![cfg(feature = "dev")]
//! Tests for input validation.
//!
//! These tests verify that malformed input is rejected before smoothing:
//! - Empty, ragged and non-finite sample sets
//! - Query dimensionality
//! - Value counts and finiteness
//! - Bandwidth and builder parameter checks
//!
//! ## Test Organization
//!
//! 1. **Sample Validation**
//! 2. **Query Validation**
//! 3. **Value Validation**
//! 4. **Parameter Validation**

use kbsmooth::internals::engine::validator::Validator;
use kbsmooth::internals::primitives::errors::SmoothingError;
use kbsmooth::internals::primitives::point::Sample;

// ============================================================================
// Sample Validation Tests
// ============================================================================

/// Test that an empty sample set is rejected.
#[test]
fn test_validate_samples_empty() {
    let samples: Vec<f64> = Vec::new();
    assert_eq!(
        Validator::validate_samples(&samples),
        Err(SmoothingError::EmptyInput)
    );
}

/// Test that the dimensionality of the first sample is returned.
#[test]
fn test_validate_samples_dimensions() {
    assert_eq!(Validator::validate_samples(&[0.0_f64, 1.0, 2.0]), Ok(1));
    assert_eq!(Validator::validate_samples(&[[0.0_f64, 1.0, 2.0]]), Ok(3));
}

/// Test that ragged sample sets are rejected.
#[test]
fn test_validate_samples_ragged() {
    let samples = vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![1.0]];
    assert_eq!(
        Validator::validate_samples(&samples),
        Err(SmoothingError::ShapeMismatch {
            expected: 2,
            got: 1
        })
    );

    let mixed = vec![Sample::scalar(0.0_f64), Sample::vector(vec![1.0, 2.0])];
    assert_eq!(
        Validator::validate_samples(&mixed),
        Err(SmoothingError::ShapeMismatch {
            expected: 1,
            got: 2
        })
    );
}

/// Test that zero-dimensional points are rejected.
#[test]
fn test_validate_samples_zero_dimensions() {
    let samples = vec![Vec::<f64>::new()];
    assert!(matches!(
        Validator::validate_samples(&samples),
        Err(SmoothingError::InvalidInput(_))
    ));
}

/// Test that non-finite coordinates are rejected with their position.
#[test]
fn test_validate_samples_non_finite() {
    let samples = vec![0.0, f64::NAN, 1.0];
    match Validator::validate_samples(&samples) {
        Err(SmoothingError::InvalidNumericValue(msg)) => assert!(msg.contains("sample[1]")),
        other => panic!("expected InvalidNumericValue, got {:?}", other),
    }

    let samples = vec![[0.0, f64::INFINITY]];
    assert!(Validator::validate_samples(&samples).is_err());
}

// ============================================================================
// Query Validation Tests
// ============================================================================

/// Test query shape and finiteness checks.
#[test]
fn test_validate_queries() {
    assert_eq!(Validator::validate_queries(&[[0.0_f64, 1.0]], 2), Ok(()));
    assert_eq!(
        Validator::validate_queries(&[[0.0_f64, 1.0, 2.0]], 2),
        Err(SmoothingError::ShapeMismatch {
            expected: 2,
            got: 3
        })
    );

    match Validator::validate_queries(&[0.5, f64::NEG_INFINITY], 1) {
        Err(SmoothingError::InvalidNumericValue(msg)) => assert!(msg.contains("query[1]")),
        other => panic!("expected InvalidNumericValue, got {:?}", other),
    }
}

/// Test that an empty query set is valid.
#[test]
fn test_validate_queries_empty() {
    let queries: Vec<f64> = Vec::new();
    assert_eq!(Validator::validate_queries(&queries, 1), Ok(()));
}

/// Test sample dimensionality against a metric bound to a fixed one.
#[test]
fn test_validate_metric_dimensions() {
    assert!(Validator::validate_metric_dimensions(None, 3).is_ok());
    assert!(Validator::validate_metric_dimensions(Some(2), 2).is_ok());
    assert_eq!(
        Validator::validate_metric_dimensions(Some(2), 1),
        Err(SmoothingError::ShapeMismatch {
            expected: 2,
            got: 1
        })
    );
}

// ============================================================================
// Value Validation Tests
// ============================================================================

/// Test value count and finiteness checks.
#[test]
fn test_validate_values() {
    assert_eq!(Validator::validate_values(&[1.0_f64, 2.0, 3.0], 3), Ok(()));
    assert_eq!(
        Validator::validate_values(&[1.0_f64, 2.0], 3),
        Err(SmoothingError::MismatchedInputs {
            samples: 3,
            values: 2
        })
    );

    match Validator::validate_values(&[1.0, f64::NAN], 2) {
        Err(SmoothingError::InvalidNumericValue(msg)) => assert!(msg.contains("value[1]")),
        other => panic!("expected InvalidNumericValue, got {:?}", other),
    }
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test bandwidth validation.
#[test]
fn test_validate_bandwidth() {
    assert_eq!(Validator::validate_bandwidth(0.5_f64), Ok(()));
    assert_eq!(Validator::validate_bandwidth(1e-9_f32), Ok(()));

    assert_eq!(
        Validator::validate_bandwidth(0.0_f64),
        Err(SmoothingError::InvalidBandwidth(0.0))
    );
    assert_eq!(
        Validator::validate_bandwidth(-1.0_f64),
        Err(SmoothingError::InvalidBandwidth(-1.0))
    );
    assert!(Validator::validate_bandwidth(f64::NAN).is_err());
    assert!(Validator::validate_bandwidth(f64::INFINITY).is_err());
}

/// Test duplicate parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert_eq!(Validator::validate_no_duplicates(None), Ok(()));
    assert_eq!(
        Validator::validate_no_duplicates(Some("bandwidth")),
        Err(SmoothingError::DuplicateParameter {
            parameter: "bandwidth"
        })
    );
}
