//! Orchestration of kinematics and statistics over validated settings.
//!
//! ## Purpose
//!
//! This module holds the validated analysis configuration (frame rate and
//! optional pixels-per-meter scale) and drives the algorithm layer with
//! it, including per-entity fan-out for multi-entity collections.
//!
//! ## Design notes
//!
//! * **Stateless computation**: The analyzer stores only configuration.
//!   Every method is a pure function of its arguments; nothing is cached
//!   between invocations, so repeated and concurrent calls with the same
//!   inputs yield bit-identical results.
//! * **Single FPS**: All entities analyzed through one analyzer share one
//!   frame-rate constant (`time = frame / fps`).
//!
//! ## Key concepts
//!
//! * **Per-entity methods** operate on a slice holding one entity's
//!   samples, in any order.
//! * **`*_by_entity` methods** partition a mixed collection first and
//!   return deterministic `BTreeMap`s keyed by entity id.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, string::String, string::ToString, vec::Vec};
#[cfg(feature = "std")]
use std::collections::BTreeMap;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::kinematics::{acceleration_sorted, velocity_sorted};
use crate::algorithms::statistics::{aggregate, MotionSummary};
use crate::engine::validator::Validator;
use crate::primitives::errors::AnalysisError;
use crate::primitives::partition::by_entity;
use crate::primitives::sample::{Axis, DerivedSample, PositionSample};

// ============================================================================
// MotionAnalyzer
// ============================================================================

/// Validated kinematics configuration and entry point for derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionAnalyzer<T: Float> {
    frame_rate: T,
    pixels_per_meter: Option<T>,
}

impl<T: Float> MotionAnalyzer<T> {
    /// Construct an analyzer, validating frame rate and scale.
    pub fn new(frame_rate: T, pixels_per_meter: Option<T>) -> Result<Self, AnalysisError> {
        Validator::validate_frame_rate(frame_rate)?;
        if let Some(ppm) = pixels_per_meter {
            Validator::validate_scale(ppm)?;
        }
        Ok(Self {
            frame_rate,
            pixels_per_meter,
        })
    }

    /// The frame-rate constant shared by all computations.
    #[inline]
    pub fn frame_rate(&self) -> T {
        self.frame_rate
    }

    /// The pixels-per-meter scale, when configured.
    #[inline]
    pub fn pixels_per_meter(&self) -> Option<T> {
        self.pixels_per_meter
    }

    // ========================================================================
    // Per-Entity Derivation
    // ========================================================================

    /// Velocity series for one entity's samples along `axis`.
    pub fn velocity(
        &self,
        samples: &[PositionSample<T>],
        axis: Axis,
    ) -> Vec<DerivedSample<T>> {
        crate::algorithms::kinematics::velocity_series(
            samples,
            axis,
            self.frame_rate,
            self.pixels_per_meter,
        )
    }

    /// Acceleration series for one entity's samples along `axis`.
    pub fn acceleration(
        &self,
        samples: &[PositionSample<T>],
        axis: Axis,
    ) -> Vec<DerivedSample<T>> {
        crate::algorithms::kinematics::acceleration_series(
            samples,
            axis,
            self.frame_rate,
            self.pixels_per_meter,
        )
    }

    // ========================================================================
    // Multi-Entity Fan-Out
    // ========================================================================

    /// Velocity series per entity, keyed by entity id.
    pub fn velocity_by_entity(
        &self,
        samples: &[PositionSample<T>],
        axis: Axis,
    ) -> BTreeMap<String, Vec<DerivedSample<T>>> {
        by_entity(samples)
            .into_iter()
            .map(|(id, group)| {
                (
                    id.to_string(),
                    velocity_sorted(&group, axis, self.frame_rate, self.pixels_per_meter),
                )
            })
            .collect()
    }

    /// Acceleration series per entity, keyed by entity id.
    pub fn acceleration_by_entity(
        &self,
        samples: &[PositionSample<T>],
        axis: Axis,
    ) -> BTreeMap<String, Vec<DerivedSample<T>>> {
        by_entity(samples)
            .into_iter()
            .map(|(id, group)| {
                (
                    id.to_string(),
                    acceleration_sorted(&group, axis, self.frame_rate, self.pixels_per_meter),
                )
            })
            .collect()
    }

    // ========================================================================
    // Aggregation
    // ========================================================================

    /// Scalar motion summary across all entities in `samples`.
    pub fn summarize(&self, samples: &[PositionSample<T>]) -> MotionSummary<T> {
        aggregate(samples, self.frame_rate, self.pixels_per_meter)
    }
}
