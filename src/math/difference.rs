//! Finite-difference policy shared by kinematics and statistics.
//!
//! ## Purpose
//!
//! This module implements the one differencing policy used everywhere a
//! series is differentiated with respect to time:
//!
//! * first and middle samples use a **forward** difference against the
//!   next sample,
//! * the last sample uses a **backward** difference against the previous
//!   sample,
//! * a zero time step yields value 0 instead of dividing by zero.
//!
//! ## Design notes
//!
//! * **Contract, not accident**: Middle samples use forward, not central,
//!   differencing. Downstream consumers depend on the exact values this
//!   produces, so the asymmetry must not be "improved".
//! * **Two variants**: a scalar variant for per-axis derivation and a 2D
//!   magnitude variant for instantaneous speed, both applying the same
//!   index policy.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * Empty input yields an empty output; a single sample yields `[0]`.
//! * Inputs are assumed sorted ascending by time; sorting is the caller's
//!   responsibility.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Scalar Derivative
// ============================================================================

/// Differentiate `values` with respect to `times` under the
/// forward/first, forward/middle, backward/last policy.
pub fn forward_backward_derivative<T: Float>(times: &[T], values: &[T]) -> Vec<T> {
    debug_assert_eq!(times.len(), values.len());

    let n = times.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![T::zero()],
        _ => {}
    }

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let value = if i < n - 1 {
            rate(values[i + 1] - values[i], times[i + 1] - times[i])
        } else {
            rate(values[i] - values[i - 1], times[i] - times[i - 1])
        };
        out.push(value);
    }
    out
}

// ============================================================================
// 2D Speed
// ============================================================================

/// Instantaneous 2D speed per sample: displacement magnitude over the
/// time step, under the same forward/backward index policy.
pub fn forward_backward_speed<T: Float>(times: &[T], xs: &[T], ys: &[T]) -> Vec<T> {
    debug_assert_eq!(times.len(), xs.len());
    debug_assert_eq!(times.len(), ys.len());

    let n = times.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![T::zero()],
        _ => {}
    }

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let (dx, dy, dt) = if i < n - 1 {
            (
                xs[i + 1] - xs[i],
                ys[i + 1] - ys[i],
                times[i + 1] - times[i],
            )
        } else {
            (
                xs[i] - xs[i - 1],
                ys[i] - ys[i - 1],
                times[i] - times[i - 1],
            )
        };
        out.push(rate((dx * dx + dy * dy).sqrt(), dt));
    }
    out
}

/// Guarded division: a zero time step yields 0 rather than a fault.
#[inline]
fn rate<T: Float>(delta: T, dt: T) -> T {
    if dt == T::zero() {
        T::zero()
    } else {
        delta / dt
    }
}
