//! Sample point abstraction.
//!
//! ## Purpose
//!
//! This module defines what a sample point is: a scalar or a fixed-length
//! tuple of reals, seen by the rest of the crate as a coordinate slice.
//! Scalars are treated as one-dimensional points, so a single distance
//! implementation covers both shapes.
//!
//! ## Design notes
//!
//! * **Static shapes**: `[T; N]` points carry their dimensionality in the type.
//! * **Dynamic shapes**: `Vec<T>` and [`Sample`] are checked at run time by the validator.
//! * **Exact keys**: [`CoordinateKey`] identifies a coordinate bit-for-bit (with `-0.0 == 0.0`).
//!
//! ## Invariants
//!
//! * `coords()` of a scalar always has length 1.
//! * Two coordinates compare equal as keys iff they compare equal as floats
//!   (for finite values).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::slice;
use num_traits::Float;

// ============================================================================
// Point Trait
// ============================================================================

/// A sample point viewed as a slice of coordinates.
pub trait Point<T: Float> {
    /// Coordinates of the point.
    fn coords(&self) -> &[T];

    /// Number of coordinates.
    #[inline]
    fn dimensions(&self) -> usize {
        self.coords().len()
    }
}

impl Point<f64> for f64 {
    #[inline]
    fn coords(&self) -> &[f64] {
        slice::from_ref(self)
    }
}

impl Point<f32> for f32 {
    #[inline]
    fn coords(&self) -> &[f32] {
        slice::from_ref(self)
    }
}

impl<T: Float, const N: usize> Point<T> for [T; N] {
    #[inline]
    fn coords(&self) -> &[T] {
        self
    }
}

impl<T: Float> Point<T> for [T] {
    #[inline]
    fn coords(&self) -> &[T] {
        self
    }
}

impl<T: Float> Point<T> for Vec<T> {
    #[inline]
    fn coords(&self) -> &[T] {
        self
    }
}

// ============================================================================
// Tagged Sample
// ============================================================================

/// A sample point whose shape is decided at run time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sample<T> {
    /// A single real coordinate.
    Scalar(T),

    /// An ordered tuple of real coordinates.
    Vector(Vec<T>),
}

impl<T> Sample<T> {
    /// Create a scalar sample.
    pub fn scalar(value: T) -> Self {
        Sample::Scalar(value)
    }

    /// Create a vector sample.
    pub fn vector(coords: Vec<T>) -> Self {
        Sample::Vector(coords)
    }
}

impl<T: Float> Point<T> for Sample<T> {
    #[inline]
    fn coords(&self) -> &[T] {
        match self {
            Sample::Scalar(v) => slice::from_ref(v),
            Sample::Vector(v) => v,
        }
    }
}

// ============================================================================
// Coordinate Keys
// ============================================================================

/// Totally ordered identity of a coordinate, used to key memoization caches.
pub type CoordinateKey = Vec<(u64, i16, i8)>;

/// Build the cache key of a coordinate slice.
pub fn coordinate_key<T: Float>(coords: &[T]) -> CoordinateKey {
    coords
        .iter()
        .map(|&c| {
            // -0.0 and 0.0 compare equal and must share a key
            let c = if c == T::zero() { T::zero() } else { c };
            c.integer_decode()
        })
        .collect()
}
