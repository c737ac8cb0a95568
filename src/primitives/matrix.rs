//! Dense row-major design matrix.
//!
//! ## Purpose
//!
//! This module provides `DesignMatrix`, the container for training features
//! and query points. Rows are samples, columns are features.
//!
//! ## Design notes
//!
//! * **Row-major**: Rows are contiguous so a query row can be borrowed as a slice.
//! * **Immutable**: Regression routines only borrow the matrix.
//! * **Shape-checked**: Constructors reject ragged or truncated data.
//!
//! ## Invariants
//!
//! * `data.len() == rows * cols`.
//!
//! ## Non-goals
//!
//! * This module does not implement any algebra (see `math::linalg`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;

/// Dense row-major matrix of samples (rows) by features (columns).
#[derive(Debug, Clone, PartialEq)]
pub struct DesignMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Float> DesignMatrix<T> {
    /// Build a matrix from a flat row-major buffer.
    pub fn from_row_slice(data: &[T], cols: usize) -> Result<Self, RegressionError> {
        Self::from_row_vec(data.to_vec(), cols)
    }

    /// Build a matrix from an owned flat row-major buffer.
    pub fn from_row_vec(data: Vec<T>, cols: usize) -> Result<Self, RegressionError> {
        if cols == 0 {
            return Err(RegressionError::InvalidInput(
                "column count must be at least 1".into(),
            ));
        }
        if data.len() % cols != 0 {
            return Err(RegressionError::InvalidInput(format!(
                "buffer of length {} is not a multiple of {} columns",
                data.len(),
                cols
            )));
        }
        let rows = data.len() / cols;
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from nested rows. All rows must have the same length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, RegressionError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(RegressionError::InvalidInput(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            data.extend_from_slice(row);
        }
        if rows.is_empty() {
            return Ok(Self {
                data,
                rows: 0,
                cols: 0,
            });
        }
        Self::from_row_vec(data, cols)
    }

    /// Number of rows (samples).
    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns (features).
    #[inline]
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// True when the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow row `i`.
    ///
    /// Panics if `i >= nrows()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        // chunks_exact panics on 0, an empty matrix has no rows anyway
        self.data.chunks_exact(self.cols.max(1))
    }

    /// Element at (`row`, `col`).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// The flat row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Matrix-vector product `self · w`.
    pub fn mul_vec(&self, w: &[T]) -> Result<Vec<T>, RegressionError> {
        if w.len() != self.cols {
            return Err(RegressionError::DimensionMismatch {
                expected: self.cols,
                got: w.len(),
            });
        }
        Ok(self.rows().map(|row| dot(row, w)).collect())
    }
}

/// Inner product of two equal-length slices.
#[inline]
pub fn dot<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&ai, &bi)| acc + ai * bi)
}
