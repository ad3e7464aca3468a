//! High-level API for motion analysis and curve fitting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder
//! for configuring kinematics analysis, the top-level [`fit`] function for
//! curve fitting, and re-exports of the public types.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (30 FPS, pixel
//!   units).
//! * **Validated**: Parameters are validated when `.build()` is called;
//!   duplicate parameter assignments are rejected.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration flow
//!
//! 1. Create a [`MotionBuilder`] via `Motion::new()`.
//! 2. Chain configuration methods (`.fps()`, `.pixels_per_meter()`).
//! 3. Call `.build()` to obtain a validated [`MotionAnalyzer`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::regression::{FittedModel, ModelFamily};
pub use crate::algorithms::statistics::MotionSummary;
pub use crate::engine::analyzer::MotionAnalyzer;
pub use crate::math::ticks::{plan_ticks, PaddingMode, TickPlan};
pub use crate::primitives::errors::AnalysisError;
pub use crate::primitives::sample::{Axis, DerivedSample, PointXY, PositionSample};

/// Default frame rate when none is configured.
const DEFAULT_FPS: f64 = 30.0;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring motion analysis.
#[derive(Debug, Clone)]
pub struct MotionBuilder<T: Float> {
    /// Frame rate in frames per second.
    pub fps: Option<T>,

    /// Pixels-per-meter conversion factor.
    pub pixels_per_meter: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for MotionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> MotionBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fps: None,
            pixels_per_meter: None,
            duplicate_param: None,
        }
    }

    /// Set the frame rate used to convert frame indices to seconds.
    pub fn fps(mut self, fps: T) -> Self {
        if self.fps.is_some() {
            self.duplicate_param = Some("fps");
        }
        self.fps = Some(fps);
        self
    }

    /// Set the pixels-per-meter scale; derived values become meter units.
    pub fn pixels_per_meter(mut self, pixels_per_meter: T) -> Self {
        if self.pixels_per_meter.is_some() {
            self.duplicate_param = Some("pixels_per_meter");
        }
        self.pixels_per_meter = Some(pixels_per_meter);
        self
    }

    /// Validate the configuration into a [`MotionAnalyzer`].
    pub fn build(self) -> Result<MotionAnalyzer<T>, AnalysisError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let fps = self
            .fps
            .unwrap_or_else(|| T::from(DEFAULT_FPS).unwrap());
        MotionAnalyzer::new(fps, self.pixels_per_meter)
    }
}

// ============================================================================
// Curve Fitting
// ============================================================================

/// Fit a model family to a point set by least squares.
///
/// Validates that all coordinates are finite, then delegates to the
/// regression engine. Insufficient points, family domain violations, and
/// singular normal equations are reported as [`AnalysisError`] values.
pub fn fit<T: Float>(
    points: &[PointXY<T>],
    family: ModelFamily,
) -> Result<FittedModel<T>, AnalysisError> {
    Validator::validate_points(points)?;
    crate::algorithms::regression::fit(points, family)
}
