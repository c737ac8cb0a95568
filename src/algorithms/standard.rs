//! Ordinary least-squares (standard) linear regression.
//!
//! ## Purpose
//!
//! Solves the normal equations `(XᵀX) w = Xᵀy` for a single global weight
//! vector.
//!
//! ## Design notes
//!
//! * **Algorithm**: `w = (XᵀX)⁻¹ · Xᵀy` after an exact-zero determinant check.
//! * **No fallback**: A singular `XᵀX` is reported, never regularized.
//! * **Cost**: `O(n²·m + n³)` for an `m × n` design matrix.
//!
//! ## Invariants
//!
//! * The returned vector has one weight per column of X.
//! * Identical inputs produce bit-identical weights.
//!
//! ## Non-goals
//!
//! * This module does not validate input shapes (handled by `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::DesignMatrix;

/// Fit global least-squares weights for `y ≈ X·w`.
pub fn standard_regression<T: FloatLinalg>(
    x: &DesignMatrix<T>,
    y: &[T],
) -> Result<Vec<T>, RegressionError> {
    debug_assert_eq!(x.nrows(), y.len());
    T::normal_equations(x, y, None).solve()
}
