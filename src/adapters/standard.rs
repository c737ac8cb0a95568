//! Standard adapter for ordinary least-squares regression.
//!
//! ## Purpose
//!
//! This module provides the execution builder and processor for the global
//! least-squares fit. It validates the training data, delegates the solve to
//! the execution engine and returns the weights with fitted values.
//!
//! ## Invariants
//!
//! * `rows(X) == len(y)` and all values are finite, or `fit` fails before any algebra.
//! * The weight vector has one entry per column of X.
//!
//! ## Non-goals
//!
//! * This adapter does not regularize or fall back to a pseudo-inverse.

// External dependencies
use core::fmt::Debug;
use core::marker::PhantomData;

// Internal dependencies
use crate::engine::executor::{RegressionExecutor, StandardConfig};
use crate::engine::output::StandardResult;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::DesignMatrix;

// ============================================================================
// Standard Regression Builder
// ============================================================================

/// Builder for the standard regression processor.
#[derive(Debug, Clone)]
pub struct StandardRegressionBuilder<T: FloatLinalg> {
    /// Whether to return residuals
    pub compute_residuals: bool,

    /// Whether to compute diagnostic statistics
    pub return_diagnostics: bool,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<RegressionError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: FloatLinalg> Default for StandardRegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> StandardRegressionBuilder<T> {
    /// Create a new standard regression builder with default parameters.
    fn new() -> Self {
        Self {
            compute_residuals: false,
            return_diagnostics: false,
            deferred_error: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Enable returning residuals in the result.
    pub fn compute_residuals(mut self, enabled: bool) -> Self {
        self.compute_residuals = enabled;
        self
    }

    /// Enable returning diagnostics in the result.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.return_diagnostics = enabled;
        self
    }

    /// Build the standard regression processor.
    pub fn build(self) -> Result<StandardRegression<T>, RegressionError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(StandardRegression {
            config: StandardConfig {
                compute_residuals: self.compute_residuals,
                return_diagnostics: self.return_diagnostics,
            },
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// Standard Regression Processor
// ============================================================================

/// Ordinary least-squares processor.
#[derive(Debug, Clone)]
pub struct StandardRegression<T: FloatLinalg> {
    config: StandardConfig,
    _marker: PhantomData<T>,
}

impl<T: FloatLinalg + Debug> StandardRegression<T> {
    /// Fit global weights `w` minimizing `‖y - X·w‖²`.
    pub fn fit(&self, x: &DesignMatrix<T>, y: &[T]) -> Result<StandardResult<T>, RegressionError> {
        Validator::validate_inputs(x, y)?;
        RegressionExecutor::run_standard(x, y, self.config)
    }
}
