//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer holds the validated configuration and drives the algorithm
//! layer:
//! - Input and parameter validation (`Validator`)
//! - Orchestration over multi-entity collections (`MotionAnalyzer`)
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Orchestration over validated analysis settings.
pub mod analyzer;

/// Fail-fast input validation.
pub mod validator;
