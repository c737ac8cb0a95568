//! Input validation for regression configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for regression parameters and
//! input data. It checks requirements such as matching shapes, finite
//! values, and a positive bandwidth before any algebra is attempted.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Shape Checks**: `rows(X) == len(y)` and query width equals `cols(X)`.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Parameter Bounds**: Bandwidth must be finite and strictly positive, and
//!   `2k²` must not underflow.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not detect singular systems (handled by `math::linalg`).
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::DesignMatrix;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for regression configuration and input data.
///
/// All methods return `Result<(), RegressionError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a training design matrix and its output vector.
    pub fn validate_inputs<T: Float>(x: &DesignMatrix<T>, y: &[T]) -> Result<(), RegressionError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(RegressionError::EmptyInput);
        }

        // Check 2: One output per sample row
        if x.nrows() != y.len() {
            return Err(RegressionError::MismatchedInputs {
                x_rows: x.nrows(),
                y_len: y.len(),
            });
        }

        // Check 3: All values finite
        Self::validate_finite(x.as_slice(), "x")?;
        Self::validate_finite(y, "y")
    }

    /// Validate a matrix of query rows against the training width.
    pub fn validate_queries<T: Float>(
        queries: &DesignMatrix<T>,
        expected_cols: usize,
    ) -> Result<(), RegressionError> {
        if queries.is_empty() {
            return Err(RegressionError::EmptyInput);
        }
        if queries.ncols() != expected_cols {
            return Err(RegressionError::DimensionMismatch {
                expected: expected_cols,
                got: queries.ncols(),
            });
        }
        Self::validate_finite(queries.as_slice(), "query")
    }

    /// Validate a single query point against the training width.
    pub fn validate_query_point<T: Float>(
        point: &[T],
        expected_cols: usize,
    ) -> Result<(), RegressionError> {
        if point.len() != expected_cols {
            return Err(RegressionError::DimensionMismatch {
                expected: expected_cols,
                got: point.len(),
            });
        }
        Self::validate_finite(point, "query")
    }

    /// Validate that every value in `values` is finite.
    pub fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), RegressionError> {
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(RegressionError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the kernel bandwidth.
    pub fn validate_bandwidth<T: Float>(k: T) -> Result<(), RegressionError> {
        if !k.is_finite() || k <= T::zero() {
            return Err(RegressionError::InvalidBandwidth(
                k.to_f64().unwrap_or(f64::NAN),
            ));
        }

        // 2k² must stay normal, otherwise a coincident row weighs 0 / 0
        let two = T::one() + T::one();
        if !(two * k * k).is_normal() {
            return Err(RegressionError::InvalidBandwidth(
                k.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Report a parameter that was configured more than once.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RegressionError> {
        if let Some(parameter) = duplicate_param {
            return Err(RegressionError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
