//! # kbsmooth — Nadaraya-Watson kernel smoothing
//!
//! Kernel-weighted local averaging for kernel-based reinforcement learning
//! experiments: estimate a function at its own sample points (smoothing), at
//! new points (extrapolation), or on demand through a memoizing estimator.
//!
//! ## What is kernel smoothing?
//!
//! Given samples x_i with values y_i, the Nadaraya-Watson estimate at q is
//!
//! ```text
//! m(q) = Σ_i K(d(x_i, q), b) * y_i / Σ_i K(d(x_i, q), b)
//! ```
//!
//! a weighted average whose weights decay with the distance d under a kernel
//! K of bandwidth b. A smaller bandwidth gives a more local (less smooth) fit.
//!
//! ## Quick Start
//!
//! ```rust
//! use kbsmooth::prelude::*;
//!
//! let xs = vec![0.0, 0.25, 0.5, 0.75, 1.0];
//!
//! // In-sample smoothing of a tent function
//! let smoothed = smooth(&xs, |&x: &f64| x.min(1.0 - x), Gaussian, 0.25)?;
//! assert_eq!(smoothed.len(), xs.len());
//!
//! // Extrapolation of known values to new points
//! let ys = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let at = extrapolate(&xs, &ys, &[0.1, 0.6], Epanechnikov, 0.5)?;
//! assert_eq!(at.len(), 2);
//! # Result::<(), SmoothingError>::Ok(())
//! ```
//!
//! ## Configured smoothers
//!
//! ```rust
//! use kbsmooth::prelude::*;
//!
//! let model = Smoother::new()
//!     .bandwidth(0.5)
//!     .weight_function(Tricube)
//!     .metric(Manhattan)
//!     .zero_weight_fallback(UseNearest)
//!     .build()?;
//!
//! let samples = vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
//! let values = model.smooth(&samples, |p: &[f64; 2]| p[0] + p[1])?;
//!
//! // Memoized point queries
//! let mut estimator = model.point_estimator(&samples, |p: &[f64; 2]| p[0] * p[1])?;
//! let a = estimator.evaluate(&[0.5, 0.5])?;
//! let b = estimator.evaluate(&[0.5, 0.5])?;
//! assert_eq!(a.to_bits(), b.to_bits());
//! # let _ = values;
//! # Result::<(), SmoothingError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result<_, SmoothingError>`. Empty sample sets,
//! points of different dimensionality, non-finite data and non-positive
//! bandwidths are rejected before any weight is computed. A query whose
//! kernel weights all vanish fails with `SmoothingError::ZeroNormalizer`
//! unless a [`ZeroWeightFallback`](prelude::ZeroWeightFallback) is configured;
//! the first such query aborts the whole batch.
//!
//! ## Logging
//!
//! The crate logs through the `log` facade (batch sizes at `debug`, estimator
//! cache traffic at `trace`, masked zero normalizers at `warn`). No logger is
//! installed by the library.
//!
//! ## Minimal Usage (no_std)
//!
//! ```toml
//! [dependencies]
//! kbsmooth = { version = "0.3", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors and sample points.
mod primitives;

// Layer 2: Math - kernels, metrics and graphs.
mod math;

// Layer 3: Algorithms - Nadaraya-Watson regression.
mod algorithms;

// Layer 4: Engine - validation, execution and the point estimator.
mod engine;

// High-level fluent API and free functions.
mod api;

/// Ground-truth test functions.
pub mod functions;

/// Graph generators and shortest paths.
pub mod graphs {
    pub use crate::math::graph::{
        complete_graph, epsilon_graph, grid_graph, linear_graph, shortest_paths, star_graph,
        Adjacency, GraphMetric,
    };
}

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        extrapolate, point_estimator, smooth, smooth_then_extrapolate,
        DistanceMetric::Chebyshev,
        DistanceMetric::Euclidean,
        DistanceMetric::Manhattan,
        GraphMetric, Kernel, KernelSmoother, KernelSmootherBuilder as Smoother, Metric, Point,
        PointEstimator, Sample, SmoothingError, ValueAugmentedMetric,
        WeightFunction::Epanechnikov,
        WeightFunction::Gaussian,
        WeightFunction::Triangle,
        WeightFunction::Tricube,
        WeightFunction::Uniform,
        ZeroWeightFallback,
        ZeroWeightFallback::UseMean,
        ZeroWeightFallback::UseNearest,
    };
    pub use crate::api::{DistanceMetric, WeightFunction};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
