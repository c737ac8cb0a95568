//! Execution engine for regression runs.
//!
//! ## Purpose
//!
//! This module orchestrates complete runs on validated inputs: the standard
//! fit with its optional residuals and diagnostics, and the LWLR-Test batch
//! driver that performs one locally weighted fit per query row.
//!
//! ## Design notes
//!
//! * Query rows are independent; with the `parallel` feature they are
//!   distributed over the rayon pool and collected back in row order.
//! * The first failing row aborts the batch; no partial results are returned.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Output length of a batch equals the number of query rows.
//! * Sequential and parallel execution produce identical predictions.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::lwlr::lwlr;
use crate::algorithms::standard::standard_regression;
use crate::engine::output::{LwlrResult, StandardResult};
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::DesignMatrix;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// ============================================================================
// Configuration
// ============================================================================

/// Options for a standard fit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardConfig {
    /// Return `y - X·w` alongside the weights.
    pub compute_residuals: bool,

    /// Return RMSE/MAE/R² for the training rows.
    pub return_diagnostics: bool,
}

/// Options for a locally weighted batch run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LwlrConfig<T> {
    /// Gaussian kernel bandwidth.
    pub bandwidth: T,

    /// Distribute query rows across threads (requires the `parallel` feature).
    pub parallel: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs regressions on inputs that have already passed validation.
pub struct RegressionExecutor;

impl RegressionExecutor {
    /// Fit standard regression weights and assemble the result.
    pub fn run_standard<T: FloatLinalg>(
        x: &DesignMatrix<T>,
        y: &[T],
        config: StandardConfig,
    ) -> Result<StandardResult<T>, RegressionError> {
        log::debug!(
            "standard regression on {} rows x {} columns",
            x.nrows(),
            x.ncols()
        );

        let weights = standard_regression(x, y)?;
        let fitted = x.mul_vec(&weights)?;

        let diagnostics = if config.return_diagnostics {
            Some(Diagnostics::compute(y, &fitted))
        } else {
            None
        };
        let residuals = if config.compute_residuals {
            Some(
                y.iter()
                    .zip(fitted.iter())
                    .map(|(&obs, &fit)| obs - fit)
                    .collect(),
            )
        } else {
            None
        };

        Ok(StandardResult {
            weights,
            fitted,
            residuals,
            diagnostics,
            n_samples: x.nrows(),
        })
    }

    /// Predict every row of `queries` with a locally weighted fit.
    pub fn run_lwlr_batch<T: FloatLinalg>(
        queries: &DesignMatrix<T>,
        x: &DesignMatrix<T>,
        y: &[T],
        config: LwlrConfig<T>,
    ) -> Result<LwlrResult<T>, RegressionError> {
        log::debug!(
            "lwlr batch: {} query rows against {} training rows (k = {:?}, parallel = {})",
            queries.nrows(),
            x.nrows(),
            config.bandwidth,
            config.parallel
        );

        let predictions = if config.parallel {
            Self::lwlr_rows_parallel(queries, x, y, config.bandwidth)?
        } else {
            Self::lwlr_rows_sequential(queries, x, y, config.bandwidth)?
        };

        Ok(LwlrResult {
            predictions,
            bandwidth: config.bandwidth,
        })
    }

    /// One `lwlr` call per query row, in order.
    pub fn lwlr_rows_sequential<T: FloatLinalg>(
        queries: &DesignMatrix<T>,
        x: &DesignMatrix<T>,
        y: &[T],
        k: T,
    ) -> Result<Vec<T>, RegressionError> {
        queries
            .rows()
            .enumerate()
            .map(|(i, query)| Self::predict_row(i, query, x, y, k))
            .collect()
    }

    /// Parallel variant of [`Self::lwlr_rows_sequential`].
    #[cfg(feature = "parallel")]
    pub fn lwlr_rows_parallel<T: FloatLinalg>(
        queries: &DesignMatrix<T>,
        x: &DesignMatrix<T>,
        y: &[T],
        k: T,
    ) -> Result<Vec<T>, RegressionError> {
        (0..queries.nrows())
            .into_par_iter()
            .map(|i| Self::predict_row(i, queries.row(i), x, y, k))
            .collect()
    }

    /// Without the `parallel` feature the hint falls back to sequential execution.
    #[cfg(not(feature = "parallel"))]
    pub fn lwlr_rows_parallel<T: FloatLinalg>(
        queries: &DesignMatrix<T>,
        x: &DesignMatrix<T>,
        y: &[T],
        k: T,
    ) -> Result<Vec<T>, RegressionError> {
        Self::lwlr_rows_sequential(queries, x, y, k)
    }

    #[inline]
    fn predict_row<T: FloatLinalg>(
        i: usize,
        query: &[T],
        x: &DesignMatrix<T>,
        y: &[T],
        k: T,
    ) -> Result<T, RegressionError> {
        let prediction = lwlr(query, x, y, k).map_err(|e| {
            log::warn!("lwlr row {} failed: {}", i, e);
            e
        })?;
        log::trace!("lwlr row {}: {:?}", i, prediction);
        Ok(prediction)
    }
}
