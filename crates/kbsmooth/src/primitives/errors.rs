//! Error types for kernel smoothing operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while smoothing,
//! extrapolating or building a smoother: malformed sample sets, invalid
//! parameters, and queries whose kernel weights all vanish.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, indices, parameters).
//! * **Fail-loud**: A zero normalizer is reported, never divided through.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty sample sets, mismatched lengths, non-finite values.
//! 2. **Shape validation**: Points of different dimensionality within one call.
//! 3. **Parameter validation**: Bandwidth and metric parameters.
//! 4. **Numerical failure**: All kernel weights zero for a query point.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery; see `ZeroWeightFallback` for that.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for kernel smoothing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SmoothingError {
    /// The sample set is empty; every estimate needs at least one sample.
    EmptyInput,

    /// Two points of different dimensionality were combined.
    ShapeMismatch {
        /// Dimensionality established by the first sample.
        expected: usize,
        /// Dimensionality of the offending point.
        got: usize,
    },

    /// Every kernel weight vanished for a query point.
    ZeroNormalizer {
        /// Position of the query point within its batch.
        index: usize,
    },

    /// `samples` and `values` must have the same number of elements.
    MismatchedInputs {
        /// Number of sample points.
        samples: usize,
        /// Number of values (or adjacency rows).
        values: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Bandwidth must be positive and finite.
    InvalidBandwidth(f64),

    /// A named numeric parameter is out of its valid range.
    InvalidParameter {
        /// Name of the parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// A parameter without a default was never set in the builder.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SmoothingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Sample set is empty"),
            Self::ShapeMismatch { expected, got } => {
                write!(
                    f,
                    "Shape mismatch: expected {expected}-dimensional point, got {got} dimensions"
                )
            }
            Self::ZeroNormalizer { index } => {
                write!(
                    f,
                    "Division by zero: all kernel weights vanish for query point {index}"
                )
            }
            Self::MismatchedInputs { samples, values } => {
                write!(
                    f,
                    "Length mismatch: {samples} samples but {values} values"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidBandwidth(b) => {
                write!(f, "Invalid bandwidth: {b} (must be > 0 and finite)")
            }
            Self::InvalidParameter { parameter, value } => {
                write!(f, "Invalid {parameter}: {value}")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::MissingParameter { parameter } => {
                write!(f, "Parameter '{parameter}' is required but was not set")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SmoothingError {}
