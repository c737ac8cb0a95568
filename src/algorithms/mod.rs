//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! The two regression methods:
//! - Standard (ordinary least-squares) regression
//! - Locally weighted linear regression at one query point
//!
//! Both reduce to solving normal equations through `math::linalg`.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Ordinary least-squares regression.
pub mod standard;

/// Locally weighted linear regression.
pub mod lwlr;
