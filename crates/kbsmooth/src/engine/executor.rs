//! Execution of the batch smoothing operations.
//!
//! ## Purpose
//!
//! This module runs the three batch operations (in-sample smoothing,
//! extrapolation, and smoothing followed by extrapolation) on a validated
//! configuration: it validates the data, evaluates the value function and
//! hands the work to the regression core.
//!
//! ## Design notes
//!
//! * **Validate first**: Samples and queries are checked before any evaluation.
//! * **One evaluation per sample**: The value function runs once per sample per call.
//! * **Whole-batch failure**: The first failing query aborts the batch; its
//!   position is reported in the error.
//!
//! ## Non-goals
//!
//! * This module does not parallelize; execution is single-threaded.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::{RegressionContext, ZeroWeightFallback};
use crate::engine::validator::Validator;
use crate::math::distance::Metric;
use crate::math::kernel::Kernel;
use crate::primitives::errors::SmoothingError;
use crate::primitives::point::Point;

// ============================================================================
// Configuration
// ============================================================================

/// Validated smoothing parameters shared by all operations.
#[derive(Debug, Clone)]
pub struct SmoothingConfig<T, K, M> {
    /// Kernel mapping distances to weights.
    pub kernel: K,

    /// Distance metric between points.
    pub metric: M,

    /// Kernel bandwidth (> 0).
    pub bandwidth: T,

    /// Policy for queries whose weights all vanish.
    pub zero_weight_fallback: ZeroWeightFallback,
}

impl<T, K, M> SmoothingConfig<T, K, M>
where
    T: Float,
    K: Kernel<T>,
    M: Metric<T>,
{
    /// Borrow the configuration as a regression context.
    pub fn context(&self) -> RegressionContext<'_, T, K, M> {
        RegressionContext {
            kernel: &self.kernel,
            metric: &self.metric,
            bandwidth: self.bandwidth,
            zero_weight_fallback: self.zero_weight_fallback,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs batch operations against a [`SmoothingConfig`].
pub struct Executor;

impl Executor {
    /// Re-estimate `value_fn` at every sample from all samples.
    pub fn smooth<T, K, M, P, F>(
        config: &SmoothingConfig<T, K, M>,
        samples: &[P],
        value_fn: F,
    ) -> Result<Vec<T>, SmoothingError>
    where
        T: Float,
        K: Kernel<T>,
        M: Metric<T>,
        P: Point<T>,
        F: FnMut(&P) -> T,
    {
        let dims = Validator::validate_samples(samples)?;
        Validator::validate_metric_dimensions(config.metric.dimensions(), dims)?;
        debug!("smoothing {} samples", samples.len());

        let values = Self::evaluate(samples, value_fn)?;
        config.context().fit_batch(samples, &values, samples)
    }

    /// Estimate at `queries` from known `values` at `samples`.
    pub fn extrapolate<T, K, M, P, Q>(
        config: &SmoothingConfig<T, K, M>,
        samples: &[P],
        values: &[T],
        queries: &[Q],
    ) -> Result<Vec<T>, SmoothingError>
    where
        T: Float,
        K: Kernel<T>,
        M: Metric<T>,
        P: Point<T>,
        Q: Point<T>,
    {
        let dims = Validator::validate_samples(samples)?;
        Validator::validate_metric_dimensions(config.metric.dimensions(), dims)?;
        Validator::validate_values(values, samples.len())?;
        Validator::validate_queries(queries, dims)?;
        debug!(
            "extrapolating {} samples onto {} queries",
            samples.len(),
            queries.len()
        );

        config.context().fit_batch(samples, values, queries)
    }

    /// Smooth the samples against themselves, then extrapolate the smoothed
    /// values onto `queries`.
    pub fn smooth_then_extrapolate<T, K, M, P, Q, F>(
        config: &SmoothingConfig<T, K, M>,
        samples: &[P],
        value_fn: F,
        queries: &[Q],
    ) -> Result<Vec<T>, SmoothingError>
    where
        T: Float,
        K: Kernel<T>,
        M: Metric<T>,
        P: Point<T>,
        Q: Point<T>,
        F: FnMut(&P) -> T,
    {
        let dims = Validator::validate_samples(samples)?;
        Validator::validate_metric_dimensions(config.metric.dimensions(), dims)?;
        Validator::validate_queries(queries, dims)?;
        debug!(
            "two-stage smoothing of {} samples onto {} queries",
            samples.len(),
            queries.len()
        );

        let values = Self::evaluate(samples, value_fn)?;
        let context = config.context();
        let smoothed = context.fit_batch(samples, &values, samples)?;
        context.fit_batch(samples, &smoothed, queries)
    }

    /// Evaluate `value_fn` once per sample.
    pub fn evaluate<T, P, F>(samples: &[P], mut value_fn: F) -> Result<Vec<T>, SmoothingError>
    where
        T: Float,
        P: Point<T>,
        F: FnMut(&P) -> T,
    {
        let values: Vec<T> = samples.iter().map(&mut value_fn).collect();
        Validator::validate_values(&values, samples.len())?;
        Ok(values)
    }
}
