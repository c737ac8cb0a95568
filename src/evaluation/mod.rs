//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! Post-processing of fitted values: goodness-of-fit diagnostics.
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// RMSE, MAE, R² and RSS.
pub mod diagnostics;
