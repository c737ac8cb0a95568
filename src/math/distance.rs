//! Distance between a query point and training rows.
//!
//! ## Purpose
//!
//! LWLR weights each training row by its proximity to the query point. This
//! module computes that proximity as the squared Euclidean distance, the
//! inner product `diff · diffᵀ` of the difference row vector with itself.
//!
//! ## Design notes
//!
//! * **Decoupling**: Distance calculation is separated from kernel evaluation.
//! * **Squared**: The Gaussian kernel consumes `‖d‖²` directly, so no square root is taken.
//!
//! ## Invariants
//!
//! * Distance is always non-negative.
//! * Distance is zero if and only if the points are identical.
//!
//! ## Non-goals
//!
//! * This module does not handle the kernel weighting (bandwidth).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::DesignMatrix;

/// Squared Euclidean distance: Σ(aᵢ - bᵢ)²
#[inline]
pub fn squared_euclidean<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len(), "Points must have same dimension");
    a.iter()
        .zip(b.iter())
        .map(|(&ai, &bi)| {
            let diff = ai - bi;
            diff * diff
        })
        .fold(T::zero(), |acc, x| acc + x)
}

/// Squared distance from `query` to every row of `x`, in row order.
pub fn squared_distances<T: Float>(query: &[T], x: &DesignMatrix<T>) -> Vec<T> {
    x.rows().map(|row| squared_euclidean(query, row)).collect()
}
