//! Nice tick and padded-domain generation for bounded numeric axes.
//!
//! ## Purpose
//!
//! Given a raw value range, this module produces human-friendly, evenly
//! spaced tick marks together with a padded domain that fully contains the
//! data. It is consumed by external presentation layers wherever a bounded
//! numeric axis is rendered.
//!
//! ## Design notes
//!
//! * **Nice steps**: The tick step is drawn from the ladder
//!   `{1, 2, 5, 10} × 10^k`, choosing the member nearest the raw step
//!   `range / (target - 1)`.
//! * **Tight mode**: Caps the nice step at 1.5× the raw step (falling back
//!   to the largest ladder step not exceeding the raw step) and caps total
//!   expansion beyond the data at `max(15% of range, 2 steps)`.
//! * **Loose mode**: Pads each side by 5% of range first, then takes
//!   step-aligned floor/ceil bounds.
//! * **Jitter control**: Every exposed tick and domain bound is rounded to
//!   10 decimal digits.
//!
//! ## Edge cases
//!
//! * `min == max` or a non-finite bound degenerates to a single tick with
//!   a small padded domain.
//! * Inverted bounds are swapped; a target below 2 is raised to 2.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Types
// ============================================================================

/// How aggressively the planned domain may pad beyond the data range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingMode {
    /// Minimal padding with capped expansion beyond the data.
    Tight,

    /// Straightforward 5% padding before step alignment.
    #[default]
    Loose,
}

/// An evenly spaced tick sequence and the padded domain containing it.
#[derive(Debug, Clone, PartialEq)]
pub struct TickPlan<T: Float> {
    /// Ascending tick values.
    pub ticks: Vec<T>,

    /// Padded `(min, max)` domain; always contains the input range.
    pub domain: (T, T),
}

// ============================================================================
// Planning
// ============================================================================

/// Plan evenly spaced "nice" ticks and a padded domain for `[min, max]`.
pub fn plan_ticks<T: Float>(
    min: T,
    max: T,
    target_tick_count: usize,
    mode: PaddingMode,
) -> TickPlan<T> {
    let value = if min.is_finite() {
        min
    } else if max.is_finite() {
        max
    } else {
        T::zero()
    };
    if !min.is_finite() || !max.is_finite() || min == max {
        return degenerate_plan(value, mode);
    }

    let (lo, hi) = if min > max { (max, min) } else { (min, max) };
    let target = target_tick_count.max(2);

    let range = hi - lo;
    let raw_step = range / T::from(target - 1).unwrap();
    let mut step = nice_step(raw_step);

    let half = T::from(0.5).unwrap();
    let (aligned_lo, aligned_hi, domain_lo, domain_hi) = match mode {
        PaddingMode::Tight => {
            // Ratio cap: fall back to a smaller ladder step rather than
            // over-coarsening the axis.
            let ratio_cap = raw_step * T::from(1.5).unwrap();
            if step > ratio_cap {
                step = ladder_step_at_most(raw_step);
            }

            let aligned_lo = (lo / step).floor() * step;
            let aligned_hi = (hi / step).ceil() * step;

            // Expansion cap: the larger of 15% of range or two steps.
            let allowed = (range * T::from(0.15).unwrap()).max(step + step);
            let domain_lo = aligned_lo.max(lo - allowed);
            let domain_hi = aligned_hi.min(hi + allowed);
            (aligned_lo, aligned_hi, domain_lo, domain_hi)
        }
        PaddingMode::Loose => {
            let pad = range * T::from(0.05).unwrap();
            let aligned_lo = ((lo - pad) / step).floor() * step;
            let aligned_hi = ((hi + pad) / step).ceil() * step;
            (aligned_lo, aligned_hi, aligned_lo, aligned_hi)
        }
    };

    let count = ((aligned_hi - aligned_lo) / step + half)
        .floor()
        .to_usize()
        .unwrap_or(0);

    let slack = step * T::from(1e-6).unwrap();
    let mut ticks = Vec::with_capacity(count + 1);
    for i in 0..=count {
        let tick = aligned_lo + step * T::from(i).unwrap();
        if tick >= domain_lo - slack && tick <= domain_hi + slack {
            ticks.push(round_jitter(tick));
        }
    }

    TickPlan {
        ticks,
        domain: (round_jitter(domain_lo), round_jitter(domain_hi)),
    }
}

/// Single-tick plan for a collapsed or non-finite range.
fn degenerate_plan<T: Float>(value: T, mode: PaddingMode) -> TickPlan<T> {
    let margin = match mode {
        PaddingMode::Tight => (value.abs() * T::from(0.1).unwrap()).max(T::from(1e-6).unwrap()),
        PaddingMode::Loose => T::from(0.1).unwrap(),
    };
    TickPlan {
        ticks: vec![round_jitter(value)],
        domain: (round_jitter(value - margin), round_jitter(value + margin)),
    }
}

// ============================================================================
// Step Selection
// ============================================================================

/// Ladder member of `{1, 2, 5, 10} × 10^floor(log10(raw))` nearest to `raw`.
fn nice_step<T: Float>(raw: T) -> T {
    let base = magnitude_base(raw);
    let mut best = base;
    let mut best_dist = (base - raw).abs();
    for &m in &[2.0, 5.0, 10.0] {
        let candidate = base * T::from(m).unwrap();
        let dist = (candidate - raw).abs();
        if dist < best_dist {
            best = candidate;
            best_dist = dist;
        }
    }
    best
}

/// Largest ladder step that does not exceed `raw`.
fn ladder_step_at_most<T: Float>(raw: T) -> T {
    let base = magnitude_base(raw);
    let mut best = base;
    for &m in &[2.0, 5.0, 10.0] {
        let candidate = base * T::from(m).unwrap();
        if candidate <= raw {
            best = candidate;
        }
    }
    best
}

/// `10^floor(log10(raw))` for a strictly positive raw step.
#[inline]
fn magnitude_base<T: Float>(raw: T) -> T {
    T::from(10.0).unwrap().powf(raw.log10().floor())
}

/// Round to 10 decimal digits to suppress floating-point jitter.
#[inline]
fn round_jitter<T: Float>(value: T) -> T {
    let scale = T::from(1e10).unwrap();
    (value * scale).round() / scale
}
