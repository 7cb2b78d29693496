//! Distance metrics between sample points.
//!
//! ## Purpose
//!
//! This module provides the distance computation that feeds the kernels.
//! For scalar samples the distance is simply |x - x_i|; for tuples it is a
//! norm of the elementwise differences.
//!
//! ## Design notes
//!
//! * **Decoupling**: Distance calculation is separated from kernel evaluation.
//! * **Polymorphism**: The [`Metric`] trait is implemented by [`DistanceMetric`]
//!   and by any `Fn(&[T], &[T]) -> T` closure.
//! * **Unchecked hot path**: `Metric::distance` assumes equal lengths; shapes are
//!   validated once per call by the engine. [`DistanceMetric::try_distance`] checks.
//!
//! ## Invariants
//!
//! * Distance is always non-negative.
//! * Distance is zero if points are identical.
//!
//! ## Non-goals
//!
//! * This module does not handle the kernel weighting (bandwidth/smoothing).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothingError;

// ============================================================================
// Metric Trait
// ============================================================================

/// A distance function over coordinate slices of equal length.
pub trait Metric<T: Float> {
    /// Distance between `a` and `b`.
    fn distance(&self, a: &[T], b: &[T]) -> T;

    /// Dimensionality the metric is bound to, if any.
    ///
    /// Metrics built over a fixed set of points (such as a graph's basis)
    /// only accept points of that dimensionality.
    fn dimensions(&self) -> Option<usize> {
        None
    }
}

impl<T: Float, F> Metric<T> for F
where
    F: Fn(&[T], &[T]) -> T,
{
    #[inline]
    fn distance(&self, a: &[T], b: &[T]) -> T {
        self(a, b)
    }
}

// ============================================================================
// Distance Metric Enum
// ============================================================================

/// Built-in distance metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceMetric {
    /// Standard Euclidean distance: √(Σ(xᵢ - yᵢ)²); |x - y| for scalars.
    #[default]
    Euclidean,

    /// Manhattan distance (L1 norm): Σ|xᵢ - yᵢ|
    Manhattan,

    /// Chebyshev distance (L∞ norm): max|xᵢ - yᵢ|
    Chebyshev,
}

// ============================================================================
// Distance Computation Functions
// ============================================================================

impl DistanceMetric {
    /// Get the name of the metric.
    pub const fn name(&self) -> &'static str {
        match self {
            DistanceMetric::Euclidean => "Euclidean",
            DistanceMetric::Manhattan => "Manhattan",
            DistanceMetric::Chebyshev => "Chebyshev",
        }
    }

    /// Compute Euclidean distance between two points.
    #[inline]
    pub fn euclidean<T: Float>(a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len(), "Points must have same dimension");
        if a.len() == 1 {
            return (a[0] - b[0]).abs();
        }
        a.iter()
            .zip(b.iter())
            .map(|(&ai, &bi)| {
                let diff = ai - bi;
                diff * diff
            })
            .fold(T::zero(), |acc, x| acc + x)
            .sqrt()
    }

    /// Compute Manhattan distance (L1 norm).
    #[inline]
    pub fn manhattan<T: Float>(a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .map(|(&ai, &bi)| (ai - bi).abs())
            .fold(T::zero(), |acc, x| acc + x)
    }

    /// Compute Chebyshev distance (L-inf norm).
    #[inline]
    pub fn chebyshev<T: Float>(a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .map(|(&ai, &bi)| (ai - bi).abs())
            .fold(T::zero(), T::max)
    }

    /// Compute the distance after checking that both points have the same shape.
    pub fn try_distance<T: Float>(&self, a: &[T], b: &[T]) -> Result<T, SmoothingError> {
        if a.len() != b.len() {
            return Err(SmoothingError::ShapeMismatch {
                expected: a.len(),
                got: b.len(),
            });
        }
        Ok(Metric::distance(self, a, b))
    }
}

impl<T: Float> Metric<T> for DistanceMetric {
    #[inline]
    fn distance(&self, a: &[T], b: &[T]) -> T {
        match self {
            DistanceMetric::Euclidean => Self::euclidean(a, b),
            DistanceMetric::Manhattan => Self::manhattan(a, b),
            DistanceMetric::Chebyshev => Self::chebyshev(a, b),
        }
    }
}
