//! Nadaraya-Watson kernel regression.
//!
//! ## Purpose
//!
//! This module computes kernel-weighted averages: for a query point q,
//!
//! ```text
//! m(q) = Σ_i K(d(x_i, q), b) * y_i / Σ_i K(d(x_i, q), b)
//! ```
//!
//! It is the shared core of in-sample smoothing, extrapolation and the
//! memoizing point estimator.
//!
//! ## Design notes
//!
//! * **Buffer reuse**: Weight buffers are passed in and reused across queries.
//! * **Fail-loud**: A zero normalizer is an error unless a fallback is configured.
//! * **Generics**: Generic over `Float`, [`Kernel`] and [`Metric`].
//!
//! ## Invariants
//!
//! * Each estimate is a convex combination of the values, so it lies within
//!   [min(y), max(y)].
//! * Kernel weights must be non-negative and finite.
//!
//! ## Non-goals
//!
//! * This module does not validate shapes or lengths (see the engine validator).
//! * This module does not choose the bandwidth.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::warn;
use num_traits::Float;

// Internal dependencies
use crate::math::distance::Metric;
use crate::math::kernel::Kernel;
use crate::primitives::errors::SmoothingError;
use crate::primitives::point::Point;

// ============================================================================
// Zero-Weight Fallback
// ============================================================================

/// Behavior when every kernel weight vanishes for a query point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZeroWeightFallback {
    /// Fail with [`SmoothingError::ZeroNormalizer`] (default).
    #[default]
    Error,

    /// Use the unweighted mean of all sample values.
    UseMean,

    /// Use the value of the nearest sample.
    UseNearest,
}

// ============================================================================
// Regression Context
// ============================================================================

/// Everything needed to turn sample values into an estimate at a query point.
pub struct RegressionContext<'a, T, K, M> {
    /// Kernel mapping distances to weights.
    pub kernel: &'a K,

    /// Distance between sample and query coordinates.
    pub metric: &'a M,

    /// Kernel bandwidth.
    pub bandwidth: T,

    /// Policy for queries whose weights all vanish.
    pub zero_weight_fallback: ZeroWeightFallback,
}

impl<'a, T, K, M> RegressionContext<'a, T, K, M>
where
    T: Float,
    K: Kernel<T>,
    M: Metric<T>,
{
    /// Fill `weights` with K(d(x_i, query), b) and return their sum.
    pub fn compute_weights<P: Point<T>>(
        &self,
        samples: &[P],
        query: &[T],
        weights: &mut Vec<T>,
    ) -> Result<T, SmoothingError> {
        weights.clear();
        let mut normalizer = T::zero();
        for sample in samples {
            let d = self.metric.distance(sample.coords(), query);
            let w = self.kernel.weight(d, self.bandwidth);
            if !w.is_finite() || w < T::zero() {
                return Err(SmoothingError::InvalidNumericValue(format!(
                    "kernel weight {} at distance {}",
                    w.to_f64().unwrap_or(f64::NAN),
                    d.to_f64().unwrap_or(f64::NAN)
                )));
            }
            weights.push(w);
            normalizer = normalizer + w;
        }
        Ok(normalizer)
    }

    /// Estimate the value at `query`; `index` identifies the query in errors.
    pub fn fit_point<P: Point<T>>(
        &self,
        samples: &[P],
        values: &[T],
        query: &[T],
        index: usize,
        weights: &mut Vec<T>,
    ) -> Result<T, SmoothingError> {
        let normalizer = self.compute_weights(samples, query, weights)?;

        if normalizer > T::zero() {
            let weighted = weights
                .iter()
                .zip(values.iter())
                .fold(T::zero(), |acc, (&w, &y)| acc + w * y);
            return Ok(weighted / normalizer);
        }

        match self.zero_weight_fallback {
            ZeroWeightFallback::Error => Err(SmoothingError::ZeroNormalizer { index }),
            ZeroWeightFallback::UseMean => {
                warn!("all kernel weights vanish at query {index}, using the sample mean");
                Ok(mean(values))
            }
            ZeroWeightFallback::UseNearest => {
                warn!("all kernel weights vanish at query {index}, using the nearest sample");
                Ok(self.nearest_value(samples, values, query))
            }
        }
    }

    /// Estimate the value at every query point, failing on the first error.
    pub fn fit_batch<P: Point<T>, Q: Point<T>>(
        &self,
        samples: &[P],
        values: &[T],
        queries: &[Q],
    ) -> Result<Vec<T>, SmoothingError> {
        let mut weights = Vec::with_capacity(samples.len());
        queries
            .iter()
            .enumerate()
            .map(|(i, q)| self.fit_point(samples, values, q.coords(), i, &mut weights))
            .collect()
    }

    fn nearest_value<P: Point<T>>(&self, samples: &[P], values: &[T], query: &[T]) -> T {
        let mut best = values.first().copied().unwrap_or_else(T::zero);
        let mut best_dist = T::infinity();
        for (sample, &y) in samples.iter().zip(values.iter()) {
            let d = self.metric.distance(sample.coords(), query);
            if d < best_dist {
                best_dist = d;
                best = y;
            }
        }
        best
    }
}

/// Unweighted mean; zero for an empty slice.
fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / T::from(values.len()).unwrap_or_else(T::one)
}
