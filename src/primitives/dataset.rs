//! Delimited-text loader for regression datasets.
//!
//! ## Purpose
//!
//! Turns whitespace- or tab-delimited numeric text into a design matrix and
//! an output vector. The last column of every line is the target, all
//! preceding columns are features.
//!
//! ## Design notes
//!
//! * Blank lines and lines starting with `#` are skipped.
//! * Line numbers in errors are 1-based and refer to the raw input.
//! * Reader and path entry points are only available with `std`.
//!
//! ## Invariants
//!
//! * `x.nrows() == y.len()` for every successfully parsed dataset.
//!
//! ## Non-goals
//!
//! * No missing-value handling, quoting, headers or categorical columns.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::ToString, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

use core::str::FromStr;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::DesignMatrix;

/// Features and targets parsed from delimited text.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    /// Feature rows.
    pub x: DesignMatrix<T>,
    /// Target value per row.
    pub y: Vec<T>,
}

impl<T: Float + FromStr> Dataset<T> {
    /// Parse an in-memory block of delimited text.
    pub fn from_str_data(text: &str) -> Result<Self, RegressionError> {
        let mut features = Vec::new();
        let mut targets = Vec::new();
        let mut width: Option<usize> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut values = Vec::new();
            for token in line.split_whitespace() {
                let value = token.parse::<T>().map_err(|_| RegressionError::Parse {
                    line: line_no,
                    message: format!("'{}' is not a number", token),
                })?;
                values.push(value);
            }

            if values.len() < 2 {
                return Err(RegressionError::Parse {
                    line: line_no,
                    message: "need at least one feature column and a target column".to_string(),
                });
            }
            match width {
                None => width = Some(values.len()),
                Some(w) if w != values.len() => {
                    return Err(RegressionError::Parse {
                        line: line_no,
                        message: format!("expected {} columns, found {}", w, values.len()),
                    });
                }
                Some(_) => {}
            }

            if let Some(target) = values.pop() {
                targets.push(target);
            }
            features.extend(values);
        }

        let cols = match width {
            Some(w) => w - 1,
            None => return Err(RegressionError::EmptyInput),
        };
        log::debug!(
            "parsed dataset with {} rows and {} feature columns",
            targets.len(),
            cols
        );

        Ok(Self {
            x: DesignMatrix::from_row_vec(features, cols)?,
            y: targets,
        })
    }

    /// Read and parse a dataset from any buffered reader.
    #[cfg(feature = "std")]
    pub fn from_reader<R: std::io::Read>(mut reader: R) -> Result<Self, RegressionError> {
        let mut text = std::string::String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| RegressionError::InvalidInput(format!("failed to read data: {}", e)))?;
        Self::from_str_data(&text)
    }

    /// Read and parse a dataset file.
    #[cfg(feature = "std")]
    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, RegressionError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            RegressionError::InvalidInput(format!("cannot open {}: {}", path.display(), e))
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// True when no samples were parsed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}
