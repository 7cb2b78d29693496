//! Input validation for smoothing configuration and data.
//!
//! ## Purpose
//!
//! This module checks sample sets, query sets, values and parameters before
//! any kernel weight is computed, so the regression core can assume
//! well-formed input.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types and [`Point`] shapes.
//!
//! ## Invariants
//!
//! * A validated sample set is non-empty and all points share one dimensionality.
//! * All validated coordinates and values are finite.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not perform the smoothing itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothingError;
use crate::primitives::point::Point;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoothing configuration and input data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate a sample set and return its dimensionality.
    pub fn validate_samples<T: Float, P: Point<T>>(samples: &[P]) -> Result<usize, SmoothingError> {
        let first = samples.first().ok_or(SmoothingError::EmptyInput)?;
        let dims = first.dimensions();
        if dims == 0 {
            return Err(SmoothingError::InvalidInput(
                "sample points must have at least one coordinate".into(),
            ));
        }

        for (i, sample) in samples.iter().enumerate() {
            Self::validate_point(sample.coords(), dims, "sample", i)?;
        }

        Ok(dims)
    }

    /// Validate query points against the sample dimensionality.
    pub fn validate_queries<T: Float, Q: Point<T>>(
        queries: &[Q],
        dims: usize,
    ) -> Result<(), SmoothingError> {
        for (i, query) in queries.iter().enumerate() {
            Self::validate_point(query.coords(), dims, "query", i)?;
        }
        Ok(())
    }

    /// Validate one point's shape and finiteness.
    pub fn validate_point<T: Float>(
        coords: &[T],
        dims: usize,
        name: &str,
        index: usize,
    ) -> Result<(), SmoothingError> {
        if coords.len() != dims {
            return Err(SmoothingError::ShapeMismatch {
                expected: dims,
                got: coords.len(),
            });
        }
        if let Some(c) = coords.iter().find(|c| !c.is_finite()) {
            return Err(SmoothingError::InvalidNumericValue(format!(
                "{}[{}]={}",
                name,
                index,
                c.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate the sample dimensionality against the metric's, if it has one.
    pub fn validate_metric_dimensions(
        metric_dims: Option<usize>,
        dims: usize,
    ) -> Result<(), SmoothingError> {
        match metric_dims {
            Some(expected) if expected != dims => Err(SmoothingError::ShapeMismatch {
                expected,
                got: dims,
            }),
            _ => Ok(()),
        }
    }

    /// Validate sample values: one finite value per sample.
    pub fn validate_values<T: Float>(values: &[T], samples: usize) -> Result<(), SmoothingError> {
        if values.len() != samples {
            return Err(SmoothingError::MismatchedInputs {
                samples,
                values: values.len(),
            });
        }
        for (i, v) in values.iter().enumerate() {
            if !v.is_finite() {
                return Err(SmoothingError::InvalidNumericValue(format!(
                    "value[{}]={}",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the kernel bandwidth.
    pub fn validate_bandwidth<T: Float>(bandwidth: T) -> Result<(), SmoothingError> {
        if !bandwidth.is_finite() || bandwidth <= T::zero() {
            return Err(SmoothingError::InvalidBandwidth(
                bandwidth.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Reject a builder in which some parameter was set twice.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SmoothingError> {
        if let Some(parameter) = duplicate_param {
            return Err(SmoothingError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
