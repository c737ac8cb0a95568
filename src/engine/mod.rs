//! Layer 5: Engine
//!
//! # Purpose
//!
//! Orchestration of complete runs:
//! - Input and parameter validation
//! - Standard fit and LWLR-Test batch execution
//! - Result assembly
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation of inputs and parameters.
pub mod validator;

/// Standard fit and batch LWLR execution.
pub mod executor;

/// Result types.
pub mod output;
