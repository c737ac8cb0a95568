//! Gaussian kernel for locally weighted regression.
//!
//! ## Purpose
//!
//! Converts squared distances into sample weights:
//!
//! ```text
//! w = exp(‖d‖² / (-2·k²))
//! ```
//!
//! A training row coincident with the query gets weight 1; the weight decays
//! toward 0 as the distance grows. Small `k` gives sharp locality, large `k`
//! approaches uniform (global) weighting.
//!
//! ## Invariants
//!
//! * For a validated `k` (positive, with `2k²` normal) and finite distances,
//!   every weight lies in `[0, 1]`.
//! * Weights may underflow to exactly zero for distant rows and small `k`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Gaussian weighting kernel with bandwidth `k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel<T> {
    bandwidth: T,
    denominator: T,
}

impl<T: Float> GaussianKernel<T> {
    /// Create a kernel with bandwidth `k`.
    pub fn new(bandwidth: T) -> Self {
        let two = T::one() + T::one();
        Self {
            bandwidth,
            denominator: -two * bandwidth * bandwidth,
        }
    }

    /// Bandwidth this kernel was built with.
    #[inline]
    pub fn bandwidth(&self) -> T {
        self.bandwidth
    }

    /// Weight for a squared distance.
    #[inline]
    pub fn weight(&self, squared_distance: T) -> T {
        (squared_distance / self.denominator).exp()
    }

    /// Weights for a batch of squared distances, in order.
    pub fn weights(&self, squared_distances: &[T]) -> Vec<T> {
        squared_distances.iter().map(|&d| self.weight(d)).collect()
    }
}
