//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the kernel regression itself: weighting samples
//! around a query point and averaging their values.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Nadaraya-Watson weighting and fitting.
pub mod regression;
