#![cfg(feature = "dev")]
//! Tests for the Nadaraya-Watson regression core.
//!
//! These tests verify:
//! - Weight computation and the normalizer
//! - Weighted averages at single query points
//! - Zero-normalizer detection and the fallback policies
//! - Batch evaluation and error positions
//!
//! ## Test Organization
//!
//! 1. **Weights** - Per-sample weights and their sum
//! 2. **Point Fits** - Weighted averages
//! 3. **Zero Normalizer** - Error and fallbacks
//! 4. **Batches** - Ordering and first-failure semantics

use approx::assert_relative_eq;

use kbsmooth::internals::algorithms::regression::{RegressionContext, ZeroWeightFallback};
use kbsmooth::internals::math::distance::DistanceMetric;
use kbsmooth::internals::math::kernel::WeightFunction;
use kbsmooth::internals::primitives::errors::SmoothingError;

fn context<'a>(
    kernel: &'a WeightFunction,
    metric: &'a DistanceMetric,
    bandwidth: f64,
    zero_weight_fallback: ZeroWeightFallback,
) -> RegressionContext<'a, f64, WeightFunction, DistanceMetric> {
    RegressionContext {
        kernel,
        metric,
        bandwidth,
        zero_weight_fallback,
    }
}

// ============================================================================
// Weight Tests
// ============================================================================

/// Test Gaussian weights and their sum.
#[test]
fn test_compute_weights() {
    let (k, m) = (WeightFunction::Gaussian, DistanceMetric::Euclidean);
    let ctx = context(&k, &m, 1.0, ZeroWeightFallback::Error);
    let samples = vec![0.0, 1.0, 2.0];
    let mut weights = Vec::new();

    let normalizer = ctx.compute_weights(&samples, &[1.0], &mut weights).unwrap();

    let e = (-1.0_f64).exp();
    assert_eq!(weights.len(), 3);
    assert_relative_eq!(weights[0], e, epsilon = 1e-15);
    assert_relative_eq!(weights[1], 1.0, epsilon = 1e-15);
    assert_relative_eq!(weights[2], e, epsilon = 1e-15);
    assert_relative_eq!(normalizer, 1.0 + 2.0 * e, epsilon = 1e-15);
}

/// Test that the weight buffer is reset between queries.
#[test]
fn test_compute_weights_reuses_buffer() {
    let (k, m) = (WeightFunction::Uniform, DistanceMetric::Euclidean);
    let ctx = context(&k, &m, 1.0, ZeroWeightFallback::Error);
    let samples = vec![0.0, 5.0];
    let mut weights = vec![9.0; 10];

    let normalizer = ctx.compute_weights(&samples, &[0.0], &mut weights).unwrap();
    assert_eq!(weights, vec![1.0, 0.0]);
    assert_eq!(normalizer, 1.0);
}

/// Test that a kernel producing a negative weight is rejected.
#[test]
fn test_negative_kernel_rejected() {
    let kernel = |_d: f64, _b: f64| -1.0;
    let metric = DistanceMetric::Euclidean;
    let ctx = RegressionContext {
        kernel: &kernel,
        metric: &metric,
        bandwidth: 1.0,
        zero_weight_fallback: ZeroWeightFallback::Error,
    };
    let mut weights = Vec::new();
    let result = ctx.fit_point(&[0.0, 1.0], &[0.0, 1.0], &[0.5], 0, &mut weights);
    assert!(matches!(result, Err(SmoothingError::InvalidNumericValue(_))));
}

// ============================================================================
// Point Fit Tests
// ============================================================================

/// Test the weighted average against a hand-computed value.
#[test]
fn test_fit_point_weighted_average() {
    let (k, m) = (WeightFunction::Gaussian, DistanceMetric::Euclidean);
    let ctx = context(&k, &m, 1.0, ZeroWeightFallback::Error);
    let samples = vec![0.0, 1.0, 2.0];
    let values = vec![0.0, 1.0, 2.0];
    let mut weights = Vec::new();

    let fit = ctx.fit_point(&samples, &values, &[0.0], 0, &mut weights).unwrap();

    let (w1, w2) = ((-1.0_f64).exp(), (-4.0_f64).exp());
    let expected = (w1 + 2.0 * w2) / (1.0 + w1 + w2);
    assert_relative_eq!(fit, expected, epsilon = 1e-12);
}

/// Test that a single sample is reproduced wherever its weight is positive.
#[test]
fn test_fit_point_single_sample() {
    let (k, m) = (WeightFunction::Epanechnikov, DistanceMetric::Euclidean);
    let ctx = context(&k, &m, 0.1, ZeroWeightFallback::Error);
    let mut weights = Vec::new();

    let fit = ctx.fit_point(&[0.3], &[4.2], &[100.0], 0, &mut weights).unwrap();
    assert_relative_eq!(fit, 4.2, epsilon = 1e-12);
}

// ============================================================================
// Zero Normalizer Tests
// ============================================================================

/// Test that vanishing weights raise ZeroNormalizer with the query index.
#[test]
fn test_zero_normalizer_error() {
    let (k, m) = (WeightFunction::Tricube, DistanceMetric::Euclidean);
    let ctx = context(&k, &m, 0.5, ZeroWeightFallback::Error);
    let mut weights = Vec::new();

    let result = ctx.fit_point(&[0.0, 1.0], &[1.0, 2.0], &[10.0], 7, &mut weights);
    assert_eq!(result, Err(SmoothingError::ZeroNormalizer { index: 7 }));
}

/// Test the mean fallback.
#[test]
fn test_zero_normalizer_use_mean() {
    let (k, m) = (WeightFunction::Tricube, DistanceMetric::Euclidean);
    let ctx = context(&k, &m, 0.5, ZeroWeightFallback::UseMean);
    let mut weights = Vec::new();

    let fit = ctx
        .fit_point(&[0.0, 1.0, 2.0], &[1.0, 2.0, 6.0], &[10.0], 0, &mut weights)
        .unwrap();
    assert_relative_eq!(fit, 3.0, epsilon = 1e-12);
}

/// Test the nearest-sample fallback.
#[test]
fn test_zero_normalizer_use_nearest() {
    let (k, m) = (WeightFunction::Uniform, DistanceMetric::Euclidean);
    let ctx = context(&k, &m, 0.5, ZeroWeightFallback::UseNearest);
    let mut weights = Vec::new();

    let fit = ctx
        .fit_point(&[0.0, 1.0, 2.0], &[1.0, 2.0, 6.0], &[-4.0], 0, &mut weights)
        .unwrap();
    assert_eq!(fit, 1.0);

    let fit = ctx
        .fit_point(&[0.0, 1.0, 2.0], &[1.0, 2.0, 6.0], &[9.0], 0, &mut weights)
        .unwrap();
    assert_eq!(fit, 6.0);
}

/// Test that the default policy is to fail.
#[test]
fn test_zero_weight_fallback_default() {
    assert_eq!(ZeroWeightFallback::default(), ZeroWeightFallback::Error);
}

// ============================================================================
// Batch Tests
// ============================================================================

/// Test that batch results follow query order.
#[test]
fn test_fit_batch_order() {
    let (k, m) = (WeightFunction::Uniform, DistanceMetric::Euclidean);
    let ctx = context(&k, &m, 0.5, ZeroWeightFallback::Error);

    let fits = ctx
        .fit_batch(&[0.0, 1.0, 2.0], &[10.0, 20.0, 30.0], &[2.0, 0.0, 1.0])
        .unwrap();
    assert_eq!(fits, vec![30.0, 10.0, 20.0]);
}

/// Test that the first failing query aborts the batch and is reported.
#[test]
fn test_fit_batch_first_failure() {
    let (k, m) = (WeightFunction::Tricube, DistanceMetric::Euclidean);
    let ctx = context(&k, &m, 0.5, ZeroWeightFallback::Error);

    let result = ctx.fit_batch(&[0.0, 1.0], &[1.0, 2.0], &[0.0, 10.0, 20.0]);
    assert_eq!(result, Err(SmoothingError::ZeroNormalizer { index: 1 }));
}
