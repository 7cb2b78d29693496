#![cfg(feature = "dev")]
//! Tests for kernel weight functions.
//!
//! These tests verify the kernels that turn distances into weights:
//! - Gaussian shape (peak, symmetry, monotone decay)
//! - The clamped Epanechnikov floor
//! - Compact support of the bounded kernels
//! - Closures used as custom kernels
//!
//! ## Test Organization
//!
//! 1. **Gaussian Kernel** - Values, symmetry, decay
//! 2. **Epanechnikov Kernel** - Interior values and the clamp floor
//! 3. **Bounded Kernels** - Support and interior values
//! 4. **Kernel Trait** - Bandwidth scaling and closures

use approx::assert_relative_eq;

use kbsmooth::internals::math::kernel::{Kernel, WeightFunction, EPANECHNIKOV_CLAMP};

// ============================================================================
// Gaussian Kernel Tests
// ============================================================================

/// Test Gaussian weight at zero distance and one bandwidth.
#[test]
fn test_gaussian_values() {
    let k = WeightFunction::Gaussian;

    assert_relative_eq!(k.compute_weight(0.0_f64), 1.0, epsilon = 1e-15);
    assert_relative_eq!(k.compute_weight(1.0_f64), (-1.0_f64).exp(), epsilon = 1e-15);
    assert_relative_eq!(k.compute_weight(2.0_f64), (-4.0_f64).exp(), epsilon = 1e-15);
}

/// Test that the Gaussian kernel depends only on |u|.
#[test]
fn test_gaussian_symmetric() {
    let k = WeightFunction::Gaussian;
    for i in 0..50 {
        let u = i as f64 * 0.1;
        assert_eq!(k.compute_weight(u), k.compute_weight(-u));
    }
}

/// Test that the Gaussian kernel strictly decreases with distance.
#[test]
fn test_gaussian_strictly_decreasing() {
    let k = WeightFunction::Gaussian;
    let mut previous = k.weight(0.0_f64, 2.0);
    for i in 1..100 {
        let w = k.weight(i as f64 * 0.1, 2.0);
        assert!(w < previous, "weight did not decrease at d = {}", i as f64 * 0.1);
        assert!(w > 0.0);
        previous = w;
    }
}

// ============================================================================
// Epanechnikov Kernel Tests
// ============================================================================

/// Test Epanechnikov weights inside the clamp.
#[test]
fn test_epanechnikov_interior() {
    let k = WeightFunction::Epanechnikov;

    assert_relative_eq!(k.compute_weight(0.0_f64), 1.0, epsilon = 1e-15);
    assert_relative_eq!(k.compute_weight(0.5_f64), 0.75, epsilon = 1e-15);
    assert_relative_eq!(k.weight(1.0_f64, 2.0), 0.75, epsilon = 1e-15);
}

/// Test that far samples keep the floor weight 1 - 0.9999^2.
///
/// Verifies the kernel never reaches zero or goes negative.
#[test]
fn test_epanechnikov_clamp_floor() {
    let k = WeightFunction::Epanechnikov;
    let floor = 1.0 - EPANECHNIKOV_CLAMP * EPANECHNIKOV_CLAMP;

    assert_relative_eq!(floor, 0.00019999, epsilon = 1e-12);
    for &u in &[0.9999, 1.0, 1.5, 10.0, 1e6, -3.0] {
        assert_relative_eq!(k.compute_weight(u), floor, epsilon = 1e-15);
        assert!(k.compute_weight(u) > 0.0);
    }
}

/// Test that Epanechnikov is reported as unbounded.
#[test]
fn test_epanechnikov_unbounded() {
    assert!(!WeightFunction::Epanechnikov.is_bounded());
    assert!(!WeightFunction::Gaussian.is_bounded());
    assert_eq!(WeightFunction::Gaussian.support(), None);
}

// ============================================================================
// Bounded Kernel Tests
// ============================================================================

/// Test that bounded kernels vanish for |u| >= 1.
#[test]
fn test_bounded_kernels_support() {
    for k in [
        WeightFunction::Tricube,
        WeightFunction::Triangle,
        WeightFunction::Uniform,
    ] {
        assert!(k.is_bounded(), "{} should be bounded", k.name());
        assert_eq!(k.support(), Some((-1.0, 1.0)));
        assert_eq!(k.compute_weight(1.0_f64), 0.0);
        assert_eq!(k.compute_weight(-1.0_f64), 0.0);
        assert_eq!(k.compute_weight(2.5_f64), 0.0);
        assert_eq!(k.compute_weight(0.0_f64), 1.0);
    }
}

/// Test bounded kernel values at u = 0.5.
#[test]
fn test_bounded_kernels_interior() {
    assert_relative_eq!(
        WeightFunction::Tricube.compute_weight(0.5_f64),
        0.669921875,
        epsilon = 1e-15
    );
    assert_relative_eq!(
        WeightFunction::Triangle.compute_weight(0.5_f64),
        0.5,
        epsilon = 1e-15
    );
    assert_eq!(WeightFunction::Uniform.compute_weight(0.5_f64), 1.0);
}

/// Test kernel names.
#[test]
fn test_kernel_names() {
    assert_eq!(WeightFunction::Gaussian.name(), "Gaussian");
    assert_eq!(WeightFunction::Epanechnikov.name(), "Epanechnikov");
    assert_eq!(WeightFunction::Tricube.name(), "Tricube");
    assert_eq!(WeightFunction::Triangle.name(), "Triangle");
    assert_eq!(WeightFunction::Uniform.name(), "Uniform");
    assert_eq!(WeightFunction::default(), WeightFunction::Gaussian);
}

// ============================================================================
// Kernel Trait Tests
// ============================================================================

/// Test that `weight` normalizes the distance by the bandwidth.
#[test]
fn test_weight_scales_with_bandwidth() {
    let k = WeightFunction::Gaussian;
    assert_relative_eq!(k.weight(2.0_f64, 2.0), k.weight(1.0, 1.0), epsilon = 1e-15);
    assert_relative_eq!(k.weight(0.3_f64, 0.1), (-9.0_f64).exp(), epsilon = 1e-12);
}

/// Test that closures act as kernels.
#[test]
fn test_closure_kernel() {
    let k = |d: f64, b: f64| 1.0 / (1.0 + d / b);
    assert_relative_eq!(k.weight(1.0, 1.0), 0.5, epsilon = 1e-15);
    assert_relative_eq!(k.weight(0.0, 1.0), 1.0, epsilon = 1e-15);
}

/// Test kernels in single precision.
#[test]
fn test_f32_kernels() {
    let w = WeightFunction::Gaussian.weight(1.0_f32, 1.0);
    assert_relative_eq!(w, (-1.0_f32).exp(), epsilon = 1e-6);
    let w = WeightFunction::Epanechnikov.weight(5.0_f32, 1.0);
    assert!(w > 0.0);
}
