//! Linear algebra backend abstraction for regression.
//!
//! ## Purpose
//!
//! This module provides the matrix algebra capability both regression
//! methods depend on: forming the (optionally weighted) normal equations,
//! the determinant-based singularity test, and explicit inversion.
//!
//! ## Design notes
//!
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.
//! * Determinant and inverse both come from an LU decomposition with partial pivoting.
//! * A diagonal weight matrix is applied as a row scaling of X. Every skipped
//!   off-diagonal term is an exact zero, so the result equals the dense product.
//! * No pseudo-inverse or SVD fallback: a singular system is an error.
//!
//! ## Invariants
//!
//! * Square matrices crossing the trait boundary are column-major `n × n` slices.
//! * `NormalEquations::solve` fails iff the determinant is exactly zero
//!   (or the LU inverse does not exist, which implies the same).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::DesignMatrix;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Debug + Send + Sync + 'static {
    /// Form `XᵀWX` (column-major) and `XᵀWy`. `weights = None` means `W = I`.
    fn normal_equations(
        x: &DesignMatrix<Self>,
        y: &[Self],
        weights: Option<&[Self]>,
    ) -> NormalEquations<Self>;

    /// Determinant of a column-major square matrix.
    fn determinant(a: &[Self], n: usize) -> Self;

    /// Inverse of a column-major square matrix, `None` if it does not exist.
    fn invert(a: &[Self], n: usize) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn normal_equations(
        x: &DesignMatrix<Self>,
        y: &[Self],
        weights: Option<&[Self]>,
    ) -> NormalEquations<Self> {
        nalgebra_backend::normal_equations(x, y, weights)
    }
    #[inline]
    fn determinant(a: &[Self], n: usize) -> Self {
        nalgebra_backend::determinant(a, n)
    }
    #[inline]
    fn invert(a: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::invert(a, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn normal_equations(
        x: &DesignMatrix<Self>,
        y: &[Self],
        weights: Option<&[Self]>,
    ) -> NormalEquations<Self> {
        nalgebra_backend::normal_equations(x, y, weights)
    }
    #[inline]
    fn determinant(a: &[Self], n: usize) -> Self {
        nalgebra_backend::determinant(a, n)
    }
    #[inline]
    fn invert(a: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::invert(a, n)
    }
}

// ============================================================================
// Normal Equations
// ============================================================================

/// The linear system `(XᵀWX) w = XᵀWy`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalEquations<T> {
    /// `XᵀWX`, column-major `n × n`.
    pub gram: Vec<T>,
    /// `XᵀWy`, length `n`.
    pub rhs: Vec<T>,
    /// Number of coefficients.
    pub n: usize,
}

impl<T: FloatLinalg> NormalEquations<T> {
    /// Determinant of the normal matrix.
    #[inline]
    pub fn determinant(&self) -> T {
        T::determinant(&self.gram, self.n)
    }

    /// Solve for the coefficients as `(XᵀWX)⁻¹ · XᵀWy`.
    pub fn solve(&self) -> Result<Vec<T>, RegressionError> {
        if self.determinant() == T::zero() {
            log::warn!("normal matrix ({}x{}) is singular", self.n, self.n);
            return Err(RegressionError::SingularMatrix);
        }
        let inverse = T::invert(&self.gram, self.n).ok_or(RegressionError::SingularMatrix)?;

        let n = self.n;
        let coefficients = (0..n)
            .map(|i| {
                (0..n).fold(T::zero(), |acc, j| acc + inverse[j * n + i] * self.rhs[j])
            })
            .collect();
        Ok(coefficients)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector, RealField};

    /// Form `XᵀWX` and `XᵀWy` from a row-major design matrix.
    pub fn normal_equations<T: RealField + Float>(
        x: &DesignMatrix<T>,
        y: &[T],
        weights: Option<&[T]>,
    ) -> NormalEquations<T> {
        let (rows, cols) = (x.nrows(), x.ncols());
        let xm = DMatrix::from_row_slice(rows, cols, x.as_slice());
        let ym = DVector::from_column_slice(y);
        let xt = xm.transpose();

        let (gram, rhs) = match weights {
            None => (&xt * &xm, &xt * &ym),
            Some(w) => {
                // W·X and W·y with W = diag(w)
                let wx = DMatrix::from_fn(rows, cols, |r, c| w[r] * xm[(r, c)]);
                let wy = DVector::from_fn(rows, |r, _| w[r] * ym[r]);
                (&xt * wx, &xt * wy)
            }
        };

        NormalEquations {
            gram: gram.as_slice().to_vec(),
            rhs: rhs.as_slice().to_vec(),
            n: cols,
        }
    }

    /// Determinant via LU decomposition.
    pub fn determinant<T: RealField + Copy>(a: &[T], n: usize) -> T {
        DMatrix::from_column_slice(n, n, a).lu().determinant()
    }

    /// Inverse via LU decomposition.
    pub fn invert<T: RealField + Copy>(a: &[T], n: usize) -> Option<Vec<T>> {
        let lu = DMatrix::from_column_slice(n, n, a).lu();
        if lu.determinant().is_zero() {
            return None;
        }
        lu.try_inverse().map(|inv| inv.as_slice().to_vec())
    }
}
