//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by both regressions:
//! - The matrix algebra capability (normal equations, determinant, inverse)
//! - Squared Euclidean distance
//! - The Gaussian weighting kernel
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear algebra backend (nalgebra).
pub mod linalg;

/// Distance between query points and training rows.
pub mod distance;

/// Gaussian kernel.
pub mod kernel;
