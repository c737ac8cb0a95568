//! Goodness-of-fit statistics.
//!
//! ## Purpose
//!
//! Summarizes how well fitted values track the observed outputs: RMSE,
//! MAE, R² and the residual sum of squares.
//!
//! ## Design notes
//!
//! * **Post-hoc**: Works on any pair of observed/fitted slices, from either method.
//! * **Degenerate targets**: When y is constant (SST = 0), R² is 1 for an
//!   exact fit and 0 otherwise.
//!
//! ## Invariants
//!
//! * RMSE, MAE and RSS are non-negative.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

/// Fit statistics for a set of predictions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Root mean squared error.
    pub rmse: T,
    /// Mean absolute error.
    pub mae: T,
    /// Coefficient of determination.
    pub r_squared: T,
    /// Residual sum of squares.
    pub rss: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute statistics for observed `y` and `fitted` values of equal length.
    pub fn compute(y: &[T], fitted: &[T]) -> Self {
        debug_assert_eq!(y.len(), fitted.len());
        let n = T::from(y.len()).unwrap_or_else(T::one).max(T::one());

        let mean = y.iter().fold(T::zero(), |acc, &v| acc + v) / n;

        let (rss, abs_sum, sst) = y.iter().zip(fitted.iter()).fold(
            (T::zero(), T::zero(), T::zero()),
            |(rss, abs_sum, sst), (&obs, &fit)| {
                let r = obs - fit;
                let c = obs - mean;
                (rss + r * r, abs_sum + r.abs(), sst + c * c)
            },
        );

        let r_squared = if sst > T::zero() {
            T::one() - rss / sst
        } else if rss == T::zero() {
            T::one()
        } else {
            T::zero()
        };

        Self {
            rmse: (rss / n).sqrt(),
            mae: abs_sum / n,
            r_squared,
            rss,
        }
    }
}

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Fit quality:")?;
        writeln!(f, "  RMSE: {:.6}", self.rmse)?;
        writeln!(f, "  MAE:  {:.6}", self.mae)?;
        writeln!(f, "  R^2:  {:.6}", self.r_squared)?;
        write!(f, "  RSS:  {:.6}", self.rss)
    }
}
