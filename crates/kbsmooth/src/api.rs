//! High-level API for kernel smoothing.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder for
//! configuring a [`KernelSmoother`], and free functions running the four
//! operations with the Euclidean metric.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for everything but the bandwidth.
//! * **Polymorphic**: `.kernel()` and `.metric()` accept any [`Kernel`] / [`Metric`],
//!   including closures, and change the builder's type accordingly.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KernelSmootherBuilder`] via `Smoother::new()`.
//! 2. Chain configuration methods (`.bandwidth()`, `.kernel()`, `.metric()`, ...).
//! 3. Call `.build()` to obtain a [`KernelSmoother`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{Executor, SmoothingConfig};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::regression::ZeroWeightFallback;
pub use crate::engine::estimator::PointEstimator;
pub use crate::math::augmented::ValueAugmentedMetric;
pub use crate::math::distance::{DistanceMetric, Metric};
pub use crate::math::graph::GraphMetric;
pub use crate::math::kernel::{Kernel, WeightFunction};
pub use crate::primitives::errors::SmoothingError;
pub use crate::primitives::point::{Point, Sample};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`KernelSmoother`].
#[derive(Debug, Clone)]
pub struct KernelSmootherBuilder<T, K = WeightFunction, M = DistanceMetric> {
    /// Kernel bandwidth; required.
    pub bandwidth: Option<T>,

    /// Kernel weight function (default: Gaussian).
    pub kernel: K,

    /// Distance metric (default: Euclidean).
    pub metric: M,

    /// Behavior when every kernel weight vanishes (default: Error).
    pub zero_weight_fallback: Option<ZeroWeightFallback>,

    kernel_set: bool,
    metric_set: bool,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for KernelSmootherBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> KernelSmootherBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bandwidth: None,
            kernel: WeightFunction::default(),
            metric: DistanceMetric::default(),
            zero_weight_fallback: None,
            kernel_set: false,
            metric_set: false,
            duplicate_param: None,
        }
    }
}

impl<T: Float, K, M> KernelSmootherBuilder<T, K, M> {
    /// Set the kernel bandwidth.
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        if self.bandwidth.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Set the kernel, built-in or custom.
    pub fn kernel<K2: Kernel<T>>(self, kernel: K2) -> KernelSmootherBuilder<T, K2, M> {
        let duplicate_param = if self.kernel_set {
            Some("kernel")
        } else {
            self.duplicate_param
        };
        KernelSmootherBuilder {
            bandwidth: self.bandwidth,
            kernel,
            metric: self.metric,
            zero_weight_fallback: self.zero_weight_fallback,
            kernel_set: true,
            metric_set: self.metric_set,
            duplicate_param,
        }
    }

    /// Set one of the built-in kernel weight functions.
    pub fn weight_function(self, wf: WeightFunction) -> KernelSmootherBuilder<T, WeightFunction, M> {
        self.kernel(wf)
    }

    /// Set the distance metric, built-in or custom.
    pub fn metric<M2: Metric<T>>(self, metric: M2) -> KernelSmootherBuilder<T, K, M2> {
        let duplicate_param = if self.metric_set {
            Some("metric")
        } else {
            self.duplicate_param
        };
        KernelSmootherBuilder {
            bandwidth: self.bandwidth,
            kernel: self.kernel,
            metric,
            zero_weight_fallback: self.zero_weight_fallback,
            kernel_set: self.kernel_set,
            metric_set: true,
            duplicate_param,
        }
    }

    /// Set behavior for query points whose kernel weights all vanish.
    pub fn zero_weight_fallback(mut self, policy: ZeroWeightFallback) -> Self {
        if self.zero_weight_fallback.is_some() {
            self.duplicate_param = Some("zero_weight_fallback");
        }
        self.zero_weight_fallback = Some(policy);
        self
    }

    /// Validate the configuration and build the smoother.
    pub fn build(self) -> Result<KernelSmoother<T, K, M>, SmoothingError>
    where
        K: Kernel<T>,
        M: Metric<T>,
    {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let bandwidth = self.bandwidth.ok_or(SmoothingError::MissingParameter {
            parameter: "bandwidth",
        })?;
        Validator::validate_bandwidth(bandwidth)?;

        Ok(KernelSmoother {
            config: SmoothingConfig {
                kernel: self.kernel,
                metric: self.metric,
                bandwidth,
                zero_weight_fallback: self.zero_weight_fallback.unwrap_or_default(),
            },
        })
    }
}

// ============================================================================
// Configured Smoother
// ============================================================================

/// A validated kernel smoother.
#[derive(Debug, Clone)]
pub struct KernelSmoother<T, K = WeightFunction, M = DistanceMetric> {
    config: SmoothingConfig<T, K, M>,
}

impl<T: Float> KernelSmoother<T> {
    /// Start configuring a smoother.
    pub fn builder() -> KernelSmootherBuilder<T> {
        KernelSmootherBuilder::new()
    }
}

impl<T, K, M> KernelSmoother<T, K, M>
where
    T: Float,
    K: Kernel<T>,
    M: Metric<T>,
{
    /// Kernel-weighted average of `value_fn` over the samples, at each sample.
    pub fn smooth<P, F>(&self, samples: &[P], value_fn: F) -> Result<Vec<T>, SmoothingError>
    where
        P: Point<T>,
        F: FnMut(&P) -> T,
    {
        Executor::smooth(&self.config, samples, value_fn)
    }

    /// Kernel-weighted average of `values` at each query point.
    pub fn extrapolate<P, Q>(
        &self,
        samples: &[P],
        values: &[T],
        queries: &[Q],
    ) -> Result<Vec<T>, SmoothingError>
    where
        P: Point<T>,
        Q: Point<T>,
    {
        Executor::extrapolate(&self.config, samples, values, queries)
    }

    /// Smooth the samples, then extrapolate the smoothed values to `queries`.
    pub fn smooth_then_extrapolate<P, Q, F>(
        &self,
        samples: &[P],
        value_fn: F,
        queries: &[Q],
    ) -> Result<Vec<T>, SmoothingError>
    where
        P: Point<T>,
        Q: Point<T>,
        F: FnMut(&P) -> T,
    {
        Executor::smooth_then_extrapolate(&self.config, samples, value_fn, queries)
    }

    /// Memoizing estimator over a copy of `samples`.
    pub fn point_estimator<P, F>(
        &self,
        samples: &[P],
        value_fn: F,
    ) -> Result<PointEstimator<T, P, F, K, M>, SmoothingError>
    where
        P: Point<T> + Clone,
        F: FnMut(&P) -> T,
        K: Clone,
        M: Clone,
    {
        PointEstimator::new(self.config.clone(), samples.to_vec(), value_fn)
    }

    /// Memoizing estimator that takes over this smoother's configuration.
    pub fn into_point_estimator<P, F>(
        self,
        samples: Vec<P>,
        value_fn: F,
    ) -> Result<PointEstimator<T, P, F, K, M>, SmoothingError>
    where
        P: Point<T>,
        F: FnMut(&P) -> T,
    {
        PointEstimator::new(self.config, samples, value_fn)
    }

    /// The kernel bandwidth.
    pub fn bandwidth(&self) -> T {
        self.config.bandwidth
    }

    /// The kernel.
    pub fn kernel(&self) -> &K {
        &self.config.kernel
    }

    /// The distance metric.
    pub fn metric(&self) -> &M {
        &self.config.metric
    }

    /// The zero-weight policy.
    pub fn zero_weight_fallback(&self) -> ZeroWeightFallback {
        self.config.zero_weight_fallback
    }
}

// ============================================================================
// Free Functions
// ============================================================================

fn euclidean_config<T: Float, K: Kernel<T>>(
    kernel: K,
    bandwidth: T,
) -> Result<SmoothingConfig<T, K, DistanceMetric>, SmoothingError> {
    Validator::validate_bandwidth(bandwidth)?;
    Ok(SmoothingConfig {
        kernel,
        metric: DistanceMetric::Euclidean,
        bandwidth,
        zero_weight_fallback: ZeroWeightFallback::Error,
    })
}

/// Smooth `value_fn` over `samples` with the Euclidean metric.
///
/// ```
/// use kbsmooth::prelude::*;
///
/// let smoothed = smooth(&[0.0, 1.0, 2.0], |x: &f64| *x, Gaussian, 1.0)?;
/// assert!((smoothed[1] - 1.0).abs() < 1e-12);
/// # Result::<(), SmoothingError>::Ok(())
/// ```
pub fn smooth<T, K, P, F>(
    samples: &[P],
    value_fn: F,
    kernel: K,
    bandwidth: T,
) -> Result<Vec<T>, SmoothingError>
where
    T: Float,
    K: Kernel<T>,
    P: Point<T>,
    F: FnMut(&P) -> T,
{
    let config = euclidean_config(kernel, bandwidth)?;
    Executor::smooth(&config, samples, value_fn)
}

/// Extrapolate known `values` at `samples` onto `queries` with the Euclidean metric.
pub fn extrapolate<T, K, P, Q>(
    samples: &[P],
    values: &[T],
    queries: &[Q],
    kernel: K,
    bandwidth: T,
) -> Result<Vec<T>, SmoothingError>
where
    T: Float,
    K: Kernel<T>,
    P: Point<T>,
    Q: Point<T>,
{
    let config = euclidean_config(kernel, bandwidth)?;
    Executor::extrapolate(&config, samples, values, queries)
}

/// Smooth `value_fn` over `samples`, then extrapolate onto `queries`.
pub fn smooth_then_extrapolate<T, K, P, Q, F>(
    samples: &[P],
    value_fn: F,
    queries: &[Q],
    kernel: K,
    bandwidth: T,
) -> Result<Vec<T>, SmoothingError>
where
    T: Float,
    K: Kernel<T>,
    P: Point<T>,
    Q: Point<T>,
    F: FnMut(&P) -> T,
{
    let config = euclidean_config(kernel, bandwidth)?;
    Executor::smooth_then_extrapolate(&config, samples, value_fn, queries)
}

/// Memoizing Nadaraya-Watson estimator over `samples` with the Euclidean metric.
pub fn point_estimator<T, K, P, F>(
    samples: &[P],
    value_fn: F,
    kernel: K,
    bandwidth: T,
) -> Result<PointEstimator<T, P, F, K>, SmoothingError>
where
    T: Float,
    K: Kernel<T>,
    P: Point<T> + Clone,
    F: FnMut(&P) -> T,
{
    let config = euclidean_config(kernel, bandwidth)?;
    PointEstimator::new(config, samples.to_vec(), value_fn)
}
