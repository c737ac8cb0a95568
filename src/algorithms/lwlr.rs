//! Locally weighted linear regression at a single query point.
//!
//! ## Purpose
//!
//! This module provides the per-point LWLR fit: every training row is
//! weighted by a Gaussian kernel of its distance to the query, the weighted
//! normal equations are solved, and the local model is evaluated at the query.
//!
//! ## Design notes
//!
//! * **Weights**: `W = diag(exp(‖q - xᵣ‖² / (-2k²)))`, rebuilt for every query.
//! * **Solve**: `w = (XᵀWX)⁻¹ · XᵀWy`, with the same singularity check as the
//!   standard fit.
//! * **No special cases**: Tiny bandwidths that zero out all but a few rows
//!   surface as `SingularMatrix` through the ordinary check.
//!
//! ## Key concepts
//!
//! * **Locality**: Small `k` lets only nearby rows influence the fit.
//! * **Global limit**: As `k → ∞` every weight tends to 1 and the prediction
//!   tends to the standard regression prediction.
//!
//! ## Non-goals
//!
//! * This module does not iterate over query rows (handled by `engine::executor`).
//! * This module does not validate input shapes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::distance::squared_distances;
use crate::math::kernel::GaussianKernel;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::{dot, DesignMatrix};

/// Diagonal of the local weight matrix `W` for one query point.
pub fn local_weights<T: FloatLinalg>(query: &[T], x: &DesignMatrix<T>, k: T) -> Vec<T> {
    let kernel = GaussianKernel::new(k);
    kernel.weights(&squared_distances(query, x))
}

/// Coefficients of the local model fitted around `query`.
pub fn local_coefficients<T: FloatLinalg>(
    query: &[T],
    x: &DesignMatrix<T>,
    y: &[T],
    k: T,
) -> Result<Vec<T>, RegressionError> {
    debug_assert_eq!(query.len(), x.ncols());
    debug_assert_eq!(x.nrows(), y.len());

    let weights = local_weights(query, x, k);
    T::normal_equations(x, y, Some(&weights)).solve()
}

/// Predict the output at `query` with a locally weighted fit of bandwidth `k`.
pub fn lwlr<T: FloatLinalg>(
    query: &[T],
    x: &DesignMatrix<T>,
    y: &[T],
    k: T,
) -> Result<T, RegressionError> {
    let coefficients = local_coefficients(query, x, y, k)?;
    Ok(dot(query, &coefficients))
}
