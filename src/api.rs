//! High-level API for standard and locally weighted regression.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points. It implements
//! a fluent builder for configuring a regression and choosing a method
//! (Standard or LocallyWeighted), plus plain functions for one-off calls.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; only the bandwidth of LWLR is mandatory.
//! * **Polymorphic**: Marker types transition to method-specific builders.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RegressionBuilder`] via `Regression::new()`.
//! 2. Chain configuration methods (`.bandwidth()`, `.return_diagnostics()`, etc.).
//! 3. Select a method via `.adapter(Adapter::Standard)` to get an execution builder.
//! 4. Call `.build()` and run the processor.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::adapters::locally_weighted::LwlrRegressionBuilder;
use crate::adapters::standard::StandardRegressionBuilder;
use crate::engine::executor::RegressionExecutor;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::adapters::locally_weighted::LwlrRegression;
pub use crate::adapters::standard::StandardRegression;
pub use crate::engine::output::{LwlrResult, StandardResult};
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::dataset::Dataset;
pub use crate::primitives::errors::RegressionError;
pub use crate::primitives::matrix::DesignMatrix;

/// Marker types for selecting the regression method.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{LocallyWeighted, Standard};
}

/// Fluent builder for configuring a regression.
#[derive(Debug, Clone)]
pub struct RegressionBuilder<T: FloatLinalg> {
    /// Gaussian kernel bandwidth (LocallyWeighted only).
    pub bandwidth: Option<T>,

    /// Parallel execution across query rows (LocallyWeighted only).
    pub parallel: Option<bool>,

    /// Include fit statistics in the result (Standard only).
    pub return_diagnostics: Option<bool>,

    /// Include residuals in the result (Standard only).
    pub compute_residuals: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for RegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> RegressionBuilder<T> {
    /// Select a regression method to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: RegressionAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bandwidth: None,
            parallel: None,
            return_diagnostics: None,
            compute_residuals: None,
            duplicate_param: None,
        }
    }

    /// Set the Gaussian kernel bandwidth `k`.
    ///
    /// Small values give sharp locality; large values approach the
    /// standard (global) fit.
    pub fn bandwidth(mut self, k: T) -> Self {
        if self.bandwidth.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth = Some(k);
        self
    }

    /// Distribute query rows over the rayon pool (`parallel` feature).
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Include RMSE, MAE and R² of the training fit in the output.
    pub fn return_diagnostics(mut self) -> Self {
        if self.return_diagnostics.is_some() {
            self.duplicate_param = Some("return_diagnostics");
        }
        self.return_diagnostics = Some(true);
        self
    }

    /// Include residuals in the output.
    pub fn return_residuals(mut self) -> Self {
        if self.compute_residuals.is_some() {
            self.duplicate_param = Some("return_residuals");
        }
        self.compute_residuals = Some(true);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait RegressionAdapter<T: FloatLinalg> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`RegressionBuilder`] into a specialized execution builder.
    fn convert(builder: RegressionBuilder<T>) -> Self::Output;
}

/// Marker for ordinary least-squares regression.
#[derive(Debug, Clone, Copy)]
pub struct Standard;

impl<T: FloatLinalg> RegressionAdapter<T> for Standard {
    type Output = StandardRegressionBuilder<T>;

    fn convert(builder: RegressionBuilder<T>) -> Self::Output {
        let mut result = StandardRegressionBuilder::default();

        if let Some(rd) = builder.return_diagnostics {
            result.return_diagnostics = rd;
        }
        if let Some(cr) = builder.compute_residuals {
            result.compute_residuals = cr;
        }

        if builder.bandwidth.is_some() {
            result.deferred_error = Some(RegressionError::UnsupportedFeature {
                adapter: "Standard",
                feature: "bandwidth",
            });
        } else if builder.parallel.is_some() {
            result.deferred_error = Some(RegressionError::UnsupportedFeature {
                adapter: "Standard",
                feature: "parallel",
            });
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for locally weighted linear regression.
#[derive(Debug, Clone, Copy)]
pub struct LocallyWeighted;

impl<T: FloatLinalg> RegressionAdapter<T> for LocallyWeighted {
    type Output = LwlrRegressionBuilder<T>;

    fn convert(builder: RegressionBuilder<T>) -> Self::Output {
        let mut result = LwlrRegressionBuilder::default();

        if let Some(k) = builder.bandwidth {
            result.bandwidth = Some(k);
        }
        if let Some(p) = builder.parallel {
            result.parallel = p;
        }

        if builder.return_diagnostics.is_some() {
            result.deferred_error = Some(RegressionError::UnsupportedFeature {
                adapter: "LocallyWeighted",
                feature: "return_diagnostics",
            });
        } else if builder.compute_residuals.is_some() {
            result.deferred_error = Some(RegressionError::UnsupportedFeature {
                adapter: "LocallyWeighted",
                feature: "return_residuals",
            });
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

// ============================================================================
// Function API
// ============================================================================

/// Global least-squares weights `w = (XᵀX)⁻¹ · Xᵀy`.
pub fn standard_regression<T: FloatLinalg>(
    x: &DesignMatrix<T>,
    y: &[T],
) -> Result<Vec<T>, RegressionError> {
    Validator::validate_inputs(x, y)?;
    crate::algorithms::standard::standard_regression(x, y)
}

/// Locally weighted prediction at a single query point with bandwidth `k`.
pub fn lwlr<T: FloatLinalg>(
    query: &[T],
    x: &DesignMatrix<T>,
    y: &[T],
    k: T,
) -> Result<T, RegressionError> {
    Validator::validate_bandwidth(k)?;
    Validator::validate_inputs(x, y)?;
    Validator::validate_query_point(query, x.ncols())?;
    crate::algorithms::lwlr::lwlr(query, x, y, k)
}

/// Locally weighted predictions for every row of `queries`, in order.
pub fn lwlr_test<T: FloatLinalg>(
    queries: &DesignMatrix<T>,
    x: &DesignMatrix<T>,
    y: &[T],
    k: T,
) -> Result<Vec<T>, RegressionError> {
    Validator::validate_bandwidth(k)?;
    Validator::validate_inputs(x, y)?;
    Validator::validate_queries(queries, x.ncols())?;
    RegressionExecutor::lwlr_rows_sequential(queries, x, y, k)
}
