//! Scalar motion summaries across all tracked entities.
//!
//! ## Purpose
//!
//! This module reduces a multi-entity sample collection to four scalar
//! descriptors: total distance travelled, average and maximum
//! instantaneous speed, and average unsigned acceleration.
//!
//! ## Design notes
//!
//! * **Joint axes**: Speed is the magnitude of the 2D displacement vector
//!   over the time step, not a per-axis quantity, under the same
//!   forward/backward policy as the kinematics deriver.
//! * **Unweighted mean**: Speeds are averaged per sample, not weighted by
//!   interval length; single-point entities contribute to neither the
//!   numerator nor the denominator.
//! * **Units**: With a pixels-per-meter scale every output is divided once
//!   by the scale; by linearity this equals converting positions first.
//!
//! ## Edge cases
//!
//! * Empty input yields a summary with all four fields exactly 0.
//! * Entities with 0 or 1 samples contribute 0 distance and no speeds.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::difference::{forward_backward_derivative, forward_backward_speed};
use crate::primitives::partition::by_entity;
use crate::primitives::sample::PositionSample;

// ============================================================================
// Summary Record
// ============================================================================

/// Scalar summary of all entities' motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSummary<T: Float> {
    /// Sum of consecutive Euclidean displacements across all entities.
    pub total_distance: T,

    /// Mean instantaneous speed across all entities and samples.
    pub average_velocity: T,

    /// Maximum instantaneous speed observed.
    pub max_velocity: T,

    /// Mean unsigned derivative of instantaneous speed.
    pub average_acceleration: T,
}

impl<T: Float> MotionSummary<T> {
    fn zero() -> Self {
        Self {
            total_distance: T::zero(),
            average_velocity: T::zero(),
            max_velocity: T::zero(),
            average_acceleration: T::zero(),
        }
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Aggregate samples from all entities into a [`MotionSummary`].
pub fn aggregate<T: Float>(
    samples: &[PositionSample<T>],
    fps: T,
    pixels_per_meter: Option<T>,
) -> MotionSummary<T> {
    if samples.is_empty() {
        return MotionSummary::zero();
    }

    let mut total_distance = T::zero();
    let mut speed_sum = T::zero();
    let mut speed_count: usize = 0;
    let mut max_speed = T::zero();
    let mut accel_sum = T::zero();
    let mut accel_count: usize = 0;

    for group in by_entity(samples).values() {
        // Distance over consecutive frame-sorted pairs.
        for pair in group.windows(2) {
            let dx = pair[1].x - pair[0].x;
            let dy = pair[1].y - pair[0].y;
            total_distance = total_distance + (dx * dx + dy * dy).sqrt();
        }

        // Single-point entities produce no speeds at all.
        if group.len() < 2 {
            continue;
        }

        let times: Vec<T> = group
            .iter()
            .map(|s| T::from(s.frame).unwrap() / fps)
            .collect();
        let xs: Vec<T> = group.iter().map(|s| s.x).collect();
        let ys: Vec<T> = group.iter().map(|s| s.y).collect();

        let speeds = forward_backward_speed(&times, &xs, &ys);
        for &speed in &speeds {
            speed_sum = speed_sum + speed;
            max_speed = max_speed.max(speed);
        }
        speed_count += speeds.len();

        for accel in forward_backward_derivative(&times, &speeds) {
            accel_sum = accel_sum + accel.abs();
        }
        accel_count += speeds.len();
    }

    let average_velocity = mean(speed_sum, speed_count);
    let average_acceleration = mean(accel_sum, accel_count);

    let summary = MotionSummary {
        total_distance,
        average_velocity,
        max_velocity: max_speed,
        average_acceleration,
    };

    match pixels_per_meter {
        Some(ppm) => MotionSummary {
            total_distance: summary.total_distance / ppm,
            average_velocity: summary.average_velocity / ppm,
            max_velocity: summary.max_velocity / ppm,
            average_acceleration: summary.average_acceleration / ppm,
        },
        None => summary,
    }
}

#[inline]
fn mean<T: Float>(sum: T, count: usize) -> T {
    if count == 0 {
        T::zero()
    } else {
        sum / T::from(count).unwrap()
    }
}
