//! Core data types for position samples and derived quantities.
//!
//! ## Purpose
//!
//! This module defines the immutable record types that flow through the
//! crate: observed position samples, ephemeral derived samples, generic
//! regression points, and the axis selector.
//!
//! ## Design notes
//!
//! * **Immutable**: `PositionSample` is produced by the capture layer and
//!   never mutated or persisted here.
//! * **Ephemeral outputs**: `DerivedSample` values are recomputed on every
//!   call; nothing is cached between invocations.
//! * **Generics**: All value fields are generic over `Float` (f32/f64).
//!
//! ## Invariants
//!
//! * `frame` is a non-negative integer; `time = frame / fps`.
//! * Callers need not order samples by frame; derivation sorts internally.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use num_traits::Float;

// ============================================================================
// Axis Selector
// ============================================================================

/// Selects which spatial axis of a position sample to derive along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Horizontal pixel coordinate.
    #[default]
    X,

    /// Vertical pixel coordinate.
    Y,
}

// ============================================================================
// Records
// ============================================================================

/// One observed 2D position at a discrete frame index for one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSample<T: Float> {
    /// Frame index the sample was captured at.
    pub frame: u32,

    /// Horizontal position in pixels.
    pub x: T,

    /// Vertical position in pixels.
    pub y: T,

    /// Identifier of the tracked entity this sample belongs to.
    pub entity_id: String,
}

impl<T: Float> PositionSample<T> {
    /// Position along the selected axis.
    #[inline]
    pub fn along(&self, axis: Axis) -> T {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// One derived (time, value) pair, e.g. a velocity or acceleration sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedSample<T: Float> {
    /// Time in seconds (`frame / fps`).
    pub time: T,

    /// Derived value (px/s, px/s², or meter units when a scale is set).
    pub value: T,
}

/// A generic, unit-agnostic regression input point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointXY<T: Float> {
    /// Independent variable.
    pub x: T,

    /// Dependent variable.
    pub y: T,
}

impl<T: Float> PointXY<T> {
    /// Construct a point.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}
