//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental building blocks used by every other
//! layer:
//! - Error types (`AnalysisError`)
//! - Sample and point record types
//! - Entity partitioning
//!
//! These carry no algorithmic logic of their own.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for analysis and fitting.
pub mod errors;

/// Entity partitioning for multi-entity collections.
pub mod partition;

/// Position samples, derived samples, and regression points.
pub mod sample;
