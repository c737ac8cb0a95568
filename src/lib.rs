//! # lwlr-rs: Standard and Locally Weighted Linear Regression for Rust
//!
//! Ordinary least-squares regression and locally weighted linear regression
//! (LWLR) over dense, in-memory design matrices.
//!
//! ## What is LWLR?
//!
//! Standard regression fits one global weight vector `w` by solving the
//! normal equations `(XᵀX) w = Xᵀy`. Locally weighted regression instead
//! fits a separate model for every query point `q`, weighting each training
//! row by a Gaussian kernel of its distance to `q`:
//!
//! ```text
//! W[r][r] = exp(‖q - X[r]‖² / (-2·k²))
//! w(q)    = (XᵀWX)⁻¹ · XᵀWy
//! ŷ(q)    = q · w(q)
//! ```
//!
//! The bandwidth `k` controls locality: small values let only nearby rows
//! influence the prediction, large values approach the global fit.
//!
//! **How a run works:**
//!
//! 1. Validate shapes (`rows(X) == len(y)`, query width `== cols(X)`) and finiteness
//! 2. Build the (weighted) normal equations
//! 3. Reject an exactly singular normal matrix with [`RegressionError::SingularMatrix`](prelude::RegressionError)
//! 4. Solve by explicit inversion and evaluate
//!
//! ## Quick Start
//!
//! ### Standard Regression
//!
//! ```rust
//! use lwlr_rs::prelude::*;
//!
//! // Intercept column of ones plus one feature, y = 2x + 1
//! let x = DesignMatrix::from_rows(&[[1.0, 0.0], [1.0, 1.0], [1.0, 2.0]])?;
//! let y = vec![1.0, 3.0, 5.0];
//!
//! let model = Regression::<f64>::new()
//!     .return_diagnostics()
//!     .adapter(Standard)
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//! assert!((result.weights[0] - 1.0).abs() < 1e-9);
//! assert!((result.weights[1] - 2.0).abs() < 1e-9);
//!
//! println!("{}", result);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Locally Weighted Regression
//!
//! ```rust
//! use lwlr_rs::prelude::*;
//!
//! let x = DesignMatrix::from_rows(&[
//!     [1.0, 0.0],
//!     [1.0, 1.0],
//!     [1.0, 2.0],
//!     [1.0, 3.0],
//!     [1.0, 4.0],
//! ])?;
//! let y = vec![0.0, 1.0, 4.0, 9.0, 16.0];
//!
//! let model = Regression::new()
//!     .bandwidth(1.0)
//!     .adapter(LocallyWeighted)
//!     .build()?;
//!
//! // Predict at every training row
//! let result = model.predict(&x, &x, &y)?;
//! assert_eq!(result.len(), 5);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Function API
//!
//! ```rust
//! use lwlr_rs::prelude::*;
//!
//! let x = DesignMatrix::from_rows(&[[1.0, 0.0], [1.0, 1.0], [1.0, 2.0]])?;
//! let y = vec![1.0, 3.0, 5.0];
//!
//! let w = standard_regression(&x, &y)?;
//! let y_hat = lwlr(&[1.0, 1.5], &x, &y, 10.0)?;
//! let batch = lwlr_test(&x, &x, &y, 10.0)?;
//! # let _ = (w, y_hat, batch);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ## Error handling
//!
//! The only numerical failure is a singular normal matrix (exact-zero
//! determinant). It is never regularized away: a standard fit, a single
//! LWLR prediction or a whole LWLR batch fails with
//! `RegressionError::SingularMatrix`. Shape and parameter problems are
//! reported before any algebra.
//!
//! ## Cargo features
//!
//! - `std` (default): reader/path dataset loading and `std::error::Error`.
//! - `parallel`: distribute LWLR query rows over rayon with `.parallel(true)`.
//! - `dev`: expose the internal layers under [`internals`] for white-box testing.
//!
//! ## Logging
//!
//! Diagnostic messages go through the [`log`](https://docs.rs/log) facade
//! (`debug!` per run, `trace!` per LWLR query row, `warn!` on singular
//! systems). No logger is installed by the library.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error enum, the row-major `DesignMatrix`, and the
// delimited-text `Dataset` loader.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the nalgebra-backed matrix algebra capability, squared
// Euclidean distance, and the Gaussian kernel.
mod math;

// Layer 3: Algorithms - the two regression methods.
//
// Contains standard regression and single-point LWLR.
mod algorithms;

// Layer 4: Evaluation - post-processing and diagnostics.
//
// Contains goodness-of-fit statistics (RMSE, MAE, R^2).
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains validation, the LWLR-Test batch driver, and result assembly.
mod engine;

// Layer 6: Adapters - method-specific builders and processors.
mod adapters;

// High-level fluent API.
//
// Provides the `Regression` builder and the function API.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use lwlr_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        lwlr, lwlr_test, standard_regression,
        Adapter::{LocallyWeighted, Standard},
        Dataset, DesignMatrix, Diagnostics, LwlrRegression, LwlrResult,
        RegressionBuilder as Regression, RegressionError, StandardRegression, StandardResult,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
