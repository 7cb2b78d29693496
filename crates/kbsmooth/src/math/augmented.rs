//! Value-augmented distance metric.
//!
//! ## Purpose
//!
//! This module lifts a base metric into the value dimension of a function f:
//! two points are far apart when they are far in input space or when f
//! differs a lot between them. Smoothing under this metric blurs less across
//! steep value changes.
//!
//! ## Key concepts
//!
//! With base distance dx = d(a, b) and dy = |f(a) - f(b)|:
//!
//! ```text
//! d'(a, b) = sqrt((dx^2 + c1 * dy^2) / (1 + alpha^2)),   c1 = alpha^2 / slope^2
//! ```
//!
//! `slope` is the expected (y_max - y_min) / diam(X) of f and `alpha` the
//! relaxation rate; alpha = 0 recovers the base metric.
//!
//! ## Invariants
//!
//! * f is evaluated at most once per distinct coordinate for the lifetime of the metric.
//!
//! ## Non-goals
//!
//! * The cache is not thread-safe; the metric is `!Sync`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::BTreeMap;

// External dependencies
use core::cell::RefCell;
use num_traits::Float;

// Internal dependencies
use crate::math::distance::Metric;
use crate::primitives::errors::SmoothingError;
use crate::primitives::point::{coordinate_key, CoordinateKey};

// ============================================================================
// Value-Augmented Metric
// ============================================================================

/// A metric that adds the value difference of a function to a base metric.
pub struct ValueAugmentedMetric<T, M, F> {
    base: M,
    value_fn: F,
    alpha_sq: T,
    c1: T,
    cache: RefCell<BTreeMap<CoordinateKey, T>>,
}

impl<T, M, F> ValueAugmentedMetric<T, M, F>
where
    T: Float,
    M: Metric<T>,
    F: Fn(&[T]) -> T,
{
    /// Create a value-augmented metric over `base`.
    pub fn new(base: M, value_fn: F, target_slope: T, alpha: T) -> Result<Self, SmoothingError> {
        if !target_slope.is_finite() || target_slope <= T::zero() {
            return Err(SmoothingError::InvalidParameter {
                parameter: "target_slope",
                value: target_slope.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !alpha.is_finite() || alpha < T::zero() {
            return Err(SmoothingError::InvalidParameter {
                parameter: "alpha",
                value: alpha.to_f64().unwrap_or(f64::NAN),
            });
        }

        let alpha_sq = alpha * alpha;
        Ok(Self {
            base,
            value_fn,
            alpha_sq,
            c1: alpha_sq / (target_slope * target_slope),
            cache: RefCell::new(BTreeMap::new()),
        })
    }

    /// Evaluate f at `coords` ahead of time.
    pub fn memoize(&self, coords: &[T]) {
        self.value(coords);
    }

    /// Number of coordinates whose value is cached.
    pub fn cached_values(&self) -> usize {
        self.cache.borrow().len()
    }

    fn value(&self, coords: &[T]) -> T {
        let key = coordinate_key(coords);
        let cached = self.cache.borrow().get(&key).copied();
        if let Some(v) = cached {
            return v;
        }
        let v = (self.value_fn)(coords);
        self.cache.borrow_mut().insert(key, v);
        v
    }
}

impl<T, M, F> Metric<T> for ValueAugmentedMetric<T, M, F>
where
    T: Float,
    M: Metric<T>,
    F: Fn(&[T]) -> T,
{
    fn dimensions(&self) -> Option<usize> {
        self.base.dimensions()
    }

    fn distance(&self, a: &[T], b: &[T]) -> T {
        let dx = self.base.distance(a, b);
        let dy = (self.value(a) - self.value(b)).abs();
        ((dx * dx + dy * dy * self.c1) / (T::one() + self.alpha_sq)).sqrt()
    }
}
