//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the algorithm
//! layer:
//! - Dense linear system solving (Gaussian elimination)
//! - The shared forward/backward finite-difference policy
//! - Nice tick and padded-domain generation
//!
//! These are reusable numeric building blocks with no domain-specific
//! logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Forward/backward finite-difference policy.
pub mod difference;

/// Dense linear system solver.
pub mod linalg;

/// Nice tick and padded-domain generation.
pub mod ticks;
