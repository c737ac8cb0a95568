//! Layer 6: Adapters
//!
//! # Purpose
//!
//! Execution builders and processors for each regression method:
//! - Standard (global least squares)
//! - Locally weighted (per-query local fits)
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Standard regression adapter.
pub mod standard;

/// Locally weighted regression adapter.
pub mod locally_weighted;
