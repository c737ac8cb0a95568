//! Error types for regression operations.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate, from builder validation down to the normal
//! equation solver.
//!
//! ## Design notes
//!
//! * **Single enum**: Callers match on one type regardless of the layer that failed.
//! * **Cloneable**: Errors derive `Clone` and `PartialEq` so tests can compare them.
//! * **no_std**: Messages are produced by `thiserror` without requiring `std`.
//!
//! ## Key concepts
//!
//! * **Validation errors**: Raised before any algebra is attempted.
//! * **Numerical errors**: `SingularMatrix` is the only error the solvers raise.
//!
//! ## Non-goals
//!
//! * This module does not recover from errors; every variant propagates to the caller.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use thiserror::Error;

/// Errors produced while configuring or running a regression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    /// The design matrix or output vector has no elements.
    #[error("Input arrays are empty")]
    EmptyInput,

    /// Generic malformed input (ragged rows, bad flat length, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Row count of the design matrix differs from the output length.
    #[error("Length mismatch: x has {x_rows} rows, y has {y_len}")]
    MismatchedInputs {
        /// Rows in the design matrix.
        x_rows: usize,
        /// Length of the output vector.
        y_len: usize,
    },

    /// A query point or query matrix has the wrong number of features.
    #[error("Dimension mismatch: expected {expected} columns, got {got}")]
    DimensionMismatch {
        /// Columns in the training design matrix.
        expected: usize,
        /// Columns supplied by the caller.
        got: usize,
    },

    /// NaN or infinite value in the inputs.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Kernel bandwidth is not a positive finite number.
    #[error("Invalid bandwidth: {0} (must be > 0 and finite)")]
    InvalidBandwidth(f64),

    /// A parameter required by the selected adapter was never set.
    #[error("Required parameter '{parameter}' was not set")]
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// A parameter was set that the selected adapter cannot honor.
    #[error("Adapter '{adapter}' does not support feature: {feature}")]
    UnsupportedFeature {
        /// Adapter name.
        adapter: &'static str,
        /// Parameter name.
        feature: &'static str,
    },

    /// A builder parameter was configured more than once.
    #[error(
        "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
    )]
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },

    /// The normal matrix has an exactly zero determinant.
    #[error("This matrix is singular, cannot do inverse")]
    SingularMatrix,

    /// A line of a delimited data file could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },
}
