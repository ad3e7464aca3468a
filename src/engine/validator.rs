//! Input validation for analysis configuration and regression data.
//!
//! ## Purpose
//!
//! This module provides the fail-fast checks applied at the API boundary:
//! frame rate and scale bounds, finite regression inputs, and builder
//! duplicate-parameter detection.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or correct inputs.
//! * Data-semantic fit failures (too few points, domain violations,
//!   singular systems) are reported by the regression engine, not here.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::AnalysisError;
use crate::primitives::sample::PointXY;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for analysis configuration and input data.
///
/// All methods return `Result<(), AnalysisError>` and fail fast upon the
/// first violation.
pub struct Validator;

impl Validator {
    /// Validate the frame rate constant (finite and strictly positive).
    pub fn validate_frame_rate<T: Float>(fps: T) -> Result<(), AnalysisError> {
        if !fps.is_finite() || fps <= T::zero() {
            return Err(AnalysisError::InvalidFrameRate(
                fps.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the pixels-per-meter scale (finite and strictly positive).
    pub fn validate_scale<T: Float>(pixels_per_meter: T) -> Result<(), AnalysisError> {
        if !pixels_per_meter.is_finite() || pixels_per_meter <= T::zero() {
            return Err(AnalysisError::InvalidScale(
                pixels_per_meter.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that every regression point is finite.
    pub fn validate_points<T: Float>(points: &[PointXY<T>]) -> Result<(), AnalysisError> {
        for (i, point) in points.iter().enumerate() {
            if !point.x.is_finite() {
                return Err(AnalysisError::InvalidNumericValue(format!(
                    "points[{}].x={}",
                    i,
                    point.x.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !point.y.is_finite() {
                return Err(AnalysisError::InvalidNumericValue(format!(
                    "points[{}].y={}",
                    i,
                    point.y.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), AnalysisError> {
        if let Some(parameter) = duplicate_param {
            return Err(AnalysisError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
