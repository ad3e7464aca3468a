//! Velocity and acceleration derivation from position samples.
//!
//! ## Purpose
//!
//! This module converts one entity's position samples into velocity and
//! acceleration time series along a chosen axis, using the shared
//! forward/backward differencing policy from [`crate::math::difference`].
//!
//! ## Design notes
//!
//! * **Permutation-invariant**: Samples are stably sorted by frame before
//!   derivation, so input order never affects the result.
//! * **Reuse**: Acceleration re-applies the identical differencing policy
//!   to the velocity series, sorted by time rather than frame.
//! * **Units**: With a pixels-per-meter scale, velocity and acceleration
//!   values are each divided once by the scale. Differentiation is linear,
//!   so this matches converting positions to meters before differentiating.
//!
//! ## Edge cases
//!
//! * 0 samples → empty series; 1 sample → a single zero-valued sample at
//!   `frame / fps`.
//! * Duplicate frames produce a zero time step, which yields value 0.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::cmp::Ordering::Equal;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::difference::forward_backward_derivative;
use crate::primitives::sample::{Axis, DerivedSample, PositionSample};

// ============================================================================
// Velocity
// ============================================================================

/// Derive the velocity series for one entity along `axis`.
pub fn velocity_series<T: Float>(
    samples: &[PositionSample<T>],
    axis: Axis,
    fps: T,
    pixels_per_meter: Option<T>,
) -> Vec<DerivedSample<T>> {
    velocity_sorted(&frame_sorted(samples), axis, fps, pixels_per_meter)
}

/// Velocity from pre-sorted sample references (see `primitives::partition`).
pub(crate) fn velocity_sorted<T: Float>(
    sorted: &[&PositionSample<T>],
    axis: Axis,
    fps: T,
    pixels_per_meter: Option<T>,
) -> Vec<DerivedSample<T>> {
    apply_scale(velocity_unscaled(sorted, axis, fps), pixels_per_meter)
}

// ============================================================================
// Acceleration
// ============================================================================

/// Derive the acceleration series for one entity along `axis`.
pub fn acceleration_series<T: Float>(
    samples: &[PositionSample<T>],
    axis: Axis,
    fps: T,
    pixels_per_meter: Option<T>,
) -> Vec<DerivedSample<T>> {
    acceleration_sorted(&frame_sorted(samples), axis, fps, pixels_per_meter)
}

/// Acceleration from pre-sorted sample references.
pub(crate) fn acceleration_sorted<T: Float>(
    sorted: &[&PositionSample<T>],
    axis: Axis,
    fps: T,
    pixels_per_meter: Option<T>,
) -> Vec<DerivedSample<T>> {
    // Differentiate the pixel-unit velocity series; the scale divides the
    // final values exactly once.
    let mut velocity = velocity_unscaled(sorted, axis, fps);
    velocity.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(Equal));

    let times: Vec<T> = velocity.iter().map(|s| s.time).collect();
    let values: Vec<T> = velocity.iter().map(|s| s.value).collect();
    let derived = forward_backward_derivative(&times, &values);

    apply_scale(
        times
            .into_iter()
            .zip(derived)
            .map(|(time, value)| DerivedSample { time, value })
            .collect(),
        pixels_per_meter,
    )
}

// ============================================================================
// Internals
// ============================================================================

/// Stable ascending frame order over borrowed samples.
fn frame_sorted<T: Float>(samples: &[PositionSample<T>]) -> Vec<&PositionSample<T>> {
    let mut refs: Vec<&PositionSample<T>> = samples.iter().collect();
    refs.sort_by_key(|s| s.frame);
    refs
}

/// Pixel-unit velocity series from frame-sorted samples.
fn velocity_unscaled<T: Float>(
    sorted: &[&PositionSample<T>],
    axis: Axis,
    fps: T,
) -> Vec<DerivedSample<T>> {
    let times: Vec<T> = sorted
        .iter()
        .map(|s| T::from(s.frame).unwrap() / fps)
        .collect();
    let positions: Vec<T> = sorted.iter().map(|s| s.along(axis)).collect();
    let derived = forward_backward_derivative(&times, &positions);

    times
        .into_iter()
        .zip(derived)
        .map(|(time, value)| DerivedSample { time, value })
        .collect()
}

/// Divide derived values by the pixels-per-meter scale, when present.
fn apply_scale<T: Float>(
    mut series: Vec<DerivedSample<T>>,
    pixels_per_meter: Option<T>,
) -> Vec<DerivedSample<T>> {
    if let Some(ppm) = pixels_per_meter {
        for sample in series.iter_mut() {
            sample.value = sample.value / ppm;
        }
    }
    series
}
