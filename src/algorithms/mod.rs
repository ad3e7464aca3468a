//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the core analysis algorithms:
//! - Kinematics derivation (velocity and acceleration series)
//! - Statistics aggregation (scalar motion summaries)
//! - Least-squares regression over parametric model families
//!
//! Each algorithm is a pure function of its inputs, built on the math
//! layer's numeric primitives.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Velocity and acceleration derivation.
pub mod kinematics;

/// Least-squares model fitting.
pub mod regression;

/// Scalar motion summaries.
pub mod statistics;
