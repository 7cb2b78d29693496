//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates inputs and drives the regression core: batch
//! execution of the smoothing operations and the memoizing point estimator.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and parameter validation.
pub mod validator;

/// Batch execution of smoothing operations.
pub mod executor;

/// Memoizing single-point estimator.
pub mod estimator;
