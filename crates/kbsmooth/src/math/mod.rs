//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical building blocks of kernel
//! smoothing:
//! - Kernel functions mapping distances to weights
//! - Distance metrics between sample points
//! - Sample graphs and geodesic distances
//!
//! These carry no regression-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Kernel (weight) functions for distance-based weighting.
pub mod kernel;

/// Distance metrics between sample points.
pub mod distance;

/// Distance lifted into the value dimension of a function.
pub mod augmented;

/// Graph generators, shortest paths and the geodesic metric.
pub mod graph;
