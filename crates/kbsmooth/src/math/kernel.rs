//! Kernel (weight) functions for kernel smoothing.
//!
//! ## Purpose
//!
//! This module provides the kernel functions that turn a distance and a
//! bandwidth into a non-negative weight. It controls how strongly each
//! sample influences an estimate.
//!
//! ## Design notes
//!
//! * **Normalization**: Maps distances to weights through u = d / bandwidth.
//! * **Polymorphism**: The [`Kernel`] trait is implemented by [`WeightFunction`]
//!   and by any `Fn(distance, bandwidth) -> weight` closure.
//! * **Support**: Tricube, Triangle and Uniform vanish for u >= 1; Gaussian and
//!   the clamped Epanechnikov kernel are strictly positive.
//!
//! ## Key concepts
//!
//! * **Gaussian**: K = exp(-d^2 / b^2), symmetric and strictly decreasing in d.
//! * **Clamped Epanechnikov**: K = 1 - min(d / b, 0.9999)^2, floored just above zero.
//!
//! ## Invariants
//!
//! * Kernels are non-negative and depend only on |d|.
//! * Bounded kernels return exactly zero outside their support.
//!
//! ## Non-goals
//!
//! * This module does not perform weight normalization.
//! * This module does not handle bandwidth selection.

// External dependencies
use num_traits::Float;

// ============================================================================
// Constants
// ============================================================================

/// Largest normalized distance fed to the Epanechnikov kernel.
///
/// Clamping keeps the weight at 1 - 0.9999^2 (about 2e-4) for far samples
/// instead of letting it reach zero or go negative.
pub const EPANECHNIKOV_CLAMP: f64 = 0.9999;

// ============================================================================
// Kernel Trait
// ============================================================================

/// A kernel mapping a non-negative distance and a bandwidth to a weight.
pub trait Kernel<T: Float> {
    /// Weight of a sample at `distance` under `bandwidth`.
    fn weight(&self, distance: T, bandwidth: T) -> T;
}

impl<T: Float, F> Kernel<T> for F
where
    F: Fn(T, T) -> T,
{
    #[inline]
    fn weight(&self, distance: T, bandwidth: T) -> T {
        self(distance, bandwidth)
    }
}

// ============================================================================
// Weight Function Enum
// ============================================================================

/// Built-in kernel functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeightFunction {
    /// Gaussian kernel: K(u) = exp(-u^2).
    ///
    /// This is the default kernel.
    #[default]
    Gaussian,

    /// Clamped Epanechnikov kernel: K(u) = 1 - min(|u|, 0.9999)^2.
    Epanechnikov,

    /// Tricube kernel: K(u) = (1 - |u|^3)^3 for |u| < 1.
    Tricube,

    /// Triangular (linear) kernel: K(u) = (1 - |u|) for |u| < 1.
    Triangle,

    /// Uniform (rectangular) kernel: K(u) = 1 for |u| < 1.
    Uniform,
}

impl WeightFunction {
    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the name of the weight function.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            WeightFunction::Gaussian => "Gaussian",
            WeightFunction::Epanechnikov => "Epanechnikov",
            WeightFunction::Tricube => "Tricube",
            WeightFunction::Triangle => "Triangle",
            WeightFunction::Uniform => "Uniform",
        }
    }

    /// Returns the support interval for bounded kernels.
    #[inline]
    pub fn support(&self) -> Option<(f64, f64)> {
        match self {
            WeightFunction::Gaussian | WeightFunction::Epanechnikov => None,
            _ => Some((-1.0, 1.0)),
        }
    }

    /// Returns `true` if the kernel vanishes outside [-1, 1].
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.support().is_some()
    }

    // ========================================================================
    // Weight Computation
    // ========================================================================

    /// Compute the unnormalized weight K(u) for a normalized distance u = d / b.
    #[inline]
    pub fn compute_weight<T: Float>(&self, u: T) -> T {
        let abs_u = u.abs();

        if self.is_bounded() && abs_u >= T::one() {
            return T::zero();
        }

        match self {
            WeightFunction::Gaussian => (-(abs_u * abs_u)).exp(),

            WeightFunction::Epanechnikov => {
                let clamp = T::from(EPANECHNIKOV_CLAMP).unwrap_or_else(T::one);
                let u = abs_u.min(clamp);
                T::one() - u * u
            }

            WeightFunction::Tricube => {
                let tmp = T::one() - abs_u * abs_u * abs_u;
                tmp * tmp * tmp
            }

            WeightFunction::Triangle => T::one() - abs_u,

            WeightFunction::Uniform => T::one(),
        }
    }
}

impl<T: Float> Kernel<T> for WeightFunction {
    #[inline]
    fn weight(&self, distance: T, bandwidth: T) -> T {
        self.compute_weight(distance / bandwidth)
    }
}
