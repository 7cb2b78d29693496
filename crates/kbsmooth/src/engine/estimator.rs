//! Memoizing point estimator.
//!
//! ## Purpose
//!
//! This module provides [`PointEstimator`], a stateful Nadaraya-Watson
//! estimator that answers one query at a time and remembers every answer.
//! It suits value functions that are expensive to evaluate, such as nested
//! estimators or simulations, queried repeatedly at the same coordinates.
//!
//! ## Design notes
//!
//! * **Exact keys**: Answers are cached by exact coordinate equality.
//! * **Lazy samples**: The value function runs once per sample, on the first
//!   uncached query, and the sample values are kept for later queries.
//! * **Exclusive state**: `evaluate` takes `&mut self`; the cache is private to
//!   the instance and lives as long as it does.
//!
//! ## Invariants
//!
//! * Repeated queries return bit-identical results.
//! * Failed queries are not cached.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::BTreeMap, vec::Vec};

// External dependencies
use log::{debug, trace};
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{Executor, SmoothingConfig};
use crate::engine::validator::Validator;
use crate::math::distance::{DistanceMetric, Metric};
use crate::math::kernel::{Kernel, WeightFunction};
use crate::primitives::errors::SmoothingError;
use crate::primitives::point::{coordinate_key, CoordinateKey, Point};

// ============================================================================
// Point Estimator
// ============================================================================

/// Nadaraya-Watson estimator with a per-instance memo of its answers.
pub struct PointEstimator<T, P, F, K = WeightFunction, M = DistanceMetric> {
    config: SmoothingConfig<T, K, M>,
    samples: Vec<P>,
    dims: usize,
    value_fn: F,
    sample_values: Option<Vec<T>>,
    cache: BTreeMap<CoordinateKey, T>,
    weights: Vec<T>,
}

impl<T, P, F, K, M> PointEstimator<T, P, F, K, M>
where
    T: Float,
    P: Point<T>,
    F: FnMut(&P) -> T,
    K: Kernel<T>,
    M: Metric<T>,
{
    /// Create an estimator over `samples` without evaluating anything yet.
    pub fn new(
        config: SmoothingConfig<T, K, M>,
        samples: Vec<P>,
        value_fn: F,
    ) -> Result<Self, SmoothingError> {
        let dims = Validator::validate_samples(&samples)?;
        Validator::validate_metric_dimensions(config.metric.dimensions(), dims)?;
        let n = samples.len();
        Ok(Self {
            config,
            samples,
            dims,
            value_fn,
            sample_values: None,
            cache: BTreeMap::new(),
            weights: Vec::with_capacity(n),
        })
    }

    /// Estimate the value at `x`, reusing the cached answer if `x` was seen before.
    ///
    /// A zero normalizer is reported as `ZeroNormalizer { index: 0 }`.
    pub fn evaluate<Q: Point<T> + ?Sized>(&mut self, x: &Q) -> Result<T, SmoothingError> {
        let coords = x.coords();
        Validator::validate_point(coords, self.dims, "query", 0)?;

        let key = coordinate_key(coords);
        if let Some(&cached) = self.cache.get(&key) {
            trace!("estimator cache hit");
            return Ok(cached);
        }
        trace!("estimator cache miss, {} entries cached", self.cache.len());

        let values = match self.sample_values.take() {
            Some(values) => values,
            None => {
                debug!("evaluating value function at {} samples", self.samples.len());
                Executor::evaluate(&self.samples, &mut self.value_fn)?
            }
        };

        let result =
            self.config
                .context()
                .fit_point(&self.samples, &values, coords, 0, &mut self.weights);
        self.sample_values = Some(values);

        let estimate = result?;
        self.cache.insert(key, estimate);
        Ok(estimate)
    }

    /// Number of distinct coordinates answered so far.
    pub fn cached_queries(&self) -> usize {
        self.cache.len()
    }

    /// The reference samples.
    pub fn samples(&self) -> &[P] {
        &self.samples
    }

    /// The configuration the estimator runs with.
    pub fn config(&self) -> &SmoothingConfig<T, K, M> {
        &self.config
    }
}
