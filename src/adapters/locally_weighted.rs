//! Locally weighted adapter for LWLR predictions.
//!
//! ## Purpose
//!
//! This module provides the execution builder and processor for locally
//! weighted linear regression. A processor carries the kernel bandwidth and
//! answers single-point (`predict_point`) and batch (`predict`) queries
//! against a training set.
//!
//! ## Design notes
//!
//! * **Required bandwidth**: There is no default `k`; `build` fails without one.
//! * **Batch semantics**: One failing query row aborts the whole batch.
//! * **Parallelism**: Opt-in via `.parallel(true)` and the `parallel` feature.
//!
//! ## Invariants
//!
//! * Query width equals the training width, or the call fails before any algebra.
//! * Predictions come back in query row order.
//!
//! ## Non-goals
//!
//! * This adapter does not cache local fits between calls.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;

// Internal dependencies
use crate::algorithms::lwlr::{local_coefficients, local_weights, lwlr};
use crate::engine::executor::{LwlrConfig, RegressionExecutor};
use crate::engine::output::LwlrResult;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::DesignMatrix;

// ============================================================================
// Locally Weighted Builder
// ============================================================================

/// Builder for the locally weighted regression processor.
#[derive(Debug, Clone)]
pub struct LwlrRegressionBuilder<T: FloatLinalg> {
    /// Gaussian kernel bandwidth `k`
    pub bandwidth: Option<T>,

    /// Parallel execution across query rows
    pub parallel: bool,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<RegressionError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for LwlrRegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> LwlrRegressionBuilder<T> {
    /// Create a new builder with no bandwidth set.
    fn new() -> Self {
        Self {
            bandwidth: None,
            parallel: false,
            deferred_error: None,
            duplicate_param: None,
        }
    }

    /// Set the kernel bandwidth.
    pub fn bandwidth(mut self, k: T) -> Self {
        self.bandwidth = Some(k);
        self
    }

    /// Set the parallel execution hint.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build the locally weighted processor.
    pub fn build(self) -> Result<LwlrRegression<T>, RegressionError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_no_duplicates(self.duplicate_param)?;

        let bandwidth = self.bandwidth.ok_or(RegressionError::MissingParameter {
            parameter: "bandwidth",
        })?;
        Validator::validate_bandwidth(bandwidth)?;

        #[cfg(not(feature = "parallel"))]
        if self.parallel {
            log::debug!("parallel hint ignored: crate built without the `parallel` feature");
        }

        Ok(LwlrRegression {
            config: LwlrConfig {
                bandwidth,
                parallel: self.parallel,
            },
        })
    }
}

// ============================================================================
// Locally Weighted Processor
// ============================================================================

/// Locally weighted linear regression processor.
#[derive(Debug, Clone)]
pub struct LwlrRegression<T: FloatLinalg> {
    config: LwlrConfig<T>,
}

impl<T: FloatLinalg + Debug> LwlrRegression<T> {
    /// Kernel bandwidth used by every local fit.
    #[inline]
    pub fn bandwidth(&self) -> T {
        self.config.bandwidth
    }

    /// Predict the output at a single query point.
    pub fn predict_point(
        &self,
        query: &[T],
        x: &DesignMatrix<T>,
        y: &[T],
    ) -> Result<T, RegressionError> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_query_point(query, x.ncols())?;
        lwlr(query, x, y, self.config.bandwidth)
    }

    /// Predict every row of `queries`.
    pub fn predict(
        &self,
        queries: &DesignMatrix<T>,
        x: &DesignMatrix<T>,
        y: &[T],
    ) -> Result<LwlrResult<T>, RegressionError> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_queries(queries, x.ncols())?;
        RegressionExecutor::run_lwlr_batch(queries, x, y, self.config)
    }

    /// Diagonal of the local weight matrix for `query`.
    pub fn local_weights(&self, query: &[T], x: &DesignMatrix<T>) -> Result<Vec<T>, RegressionError> {
        if x.is_empty() {
            return Err(RegressionError::EmptyInput);
        }
        Validator::validate_query_point(query, x.ncols())?;
        Ok(local_weights(query, x, self.config.bandwidth))
    }

    /// Coefficients of the local linear model fitted around `query`.
    pub fn local_coefficients(
        &self,
        query: &[T],
        x: &DesignMatrix<T>,
        y: &[T],
    ) -> Result<Vec<T>, RegressionError> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_query_point(query, x.ncols())?;
        local_coefficients(query, x, y, self.config.bandwidth)
    }
}
