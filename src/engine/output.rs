//! Result types returned by the regression processors.
//!
//! ## Purpose
//!
//! Holds fitted weights, fitted values and optional extras for a standard
//! fit, and the per-query predictions of a locally weighted run. Both types
//! print a short summary through `Display`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::DesignMatrix;

/// Rows shown by the `Display` implementations before truncating.
const DISPLAY_ROWS: usize = 10;

// ============================================================================
// Standard Regression Result
// ============================================================================

/// Output of a standard least-squares fit.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardResult<T> {
    /// Fitted weight vector, one entry per feature column.
    pub weights: Vec<T>,

    /// Fitted values `X·w` for the training rows.
    pub fitted: Vec<T>,

    /// `y - X·w`, if requested.
    pub residuals: Option<Vec<T>>,

    /// Goodness-of-fit statistics, if requested.
    pub diagnostics: Option<Diagnostics<T>>,

    /// Number of training rows.
    pub n_samples: usize,
}

impl<T: Float> StandardResult<T> {
    /// Predict outputs for new rows as `Q·w`.
    pub fn predict(&self, queries: &DesignMatrix<T>) -> Result<Vec<T>, RegressionError> {
        Validator::validate_queries(queries, self.weights.len())?;
        queries.mul_vec(&self.weights)
    }

    /// Number of feature columns.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }
}

impl<T: Float + Display> Display for StandardResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.n_samples)?;
        writeln!(f, "  Features: {}", self.n_features())?;
        writeln!(f)?;
        writeln!(f, "Weights:")?;
        for (i, w) in self.weights.iter().enumerate() {
            writeln!(f, "  w[{}] = {:.6}", i, w)?;
        }
        writeln!(f)?;
        writeln!(f, "Fitted Values:")?;
        writeln!(f, "  {:>6}  {:>12}", "Row", "Y_fit")?;
        writeln!(f, "  {}", "-".repeat(20))?;
        for (i, v) in self.fitted.iter().take(DISPLAY_ROWS).enumerate() {
            writeln!(f, "  {:>6}  {:>12.5}", i, v)?;
        }
        if self.fitted.len() > DISPLAY_ROWS {
            writeln!(f, "  ... {} more rows", self.fitted.len() - DISPLAY_ROWS)?;
        }
        if let Some(diag) = &self.diagnostics {
            writeln!(f)?;
            writeln!(f, "{}", diag)?;
        }
        Ok(())
    }
}

// ============================================================================
// Locally Weighted Result
// ============================================================================

/// Output of a locally weighted batch prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct LwlrResult<T> {
    /// One prediction per query row, in query order.
    pub predictions: Vec<T>,

    /// Kernel bandwidth used for every local fit.
    pub bandwidth: T,
}

impl<T> LwlrResult<T> {
    /// Number of query rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    /// True when there are no predictions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}

impl<T: Float + Display> Display for LwlrResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Query points: {}", self.predictions.len())?;
        writeln!(f, "  Bandwidth: {}", self.bandwidth)?;
        writeln!(f)?;
        writeln!(f, "Predictions:")?;
        writeln!(f, "  {:>6}  {:>12}", "Row", "Y_hat")?;
        writeln!(f, "  {}", "-".repeat(20))?;
        for (i, v) in self.predictions.iter().take(DISPLAY_ROWS).enumerate() {
            writeln!(f, "  {:>6}  {:>12.5}", i, v)?;
        }
        if self.predictions.len() > DISPLAY_ROWS {
            writeln!(f, "  ... {} more rows", self.predictions.len() - DISPLAY_ROWS)?;
        }
        Ok(())
    }
}
