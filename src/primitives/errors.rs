//! Error types for motion analysis and curve fitting.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate. All failures are ordinary return values; no
//! operation panics or retries.
//!
//! ## Design notes
//!
//! * **Non-fatal**: Every variant describes an expected, recoverable
//!   condition (bad configuration, unfittable data). Callers are expected
//!   to render a "no data" / "could not fit" state.
//! * **Comparable**: Implements `PartialEq` so tests can assert on exact
//!   failure causes.
//! * **no_std**: Implements `core::fmt::Display` always and
//!   `std::error::Error` only under the `std` feature.
//!
//! ## Key concepts
//!
//! * **Configuration errors**: invalid frame rate, scale, or duplicate
//!   builder parameters, caught before any computation runs.
//! * **Fit failures**: too few points, family domain violations, and
//!   singular normal equations, all surfaced without a fault.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

// ============================================================================
// AnalysisError
// ============================================================================

/// Errors produced by motion analysis and curve fitting.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Frame rate is not finite or not strictly positive.
    InvalidFrameRate(f64),

    /// Pixels-per-meter scale is not finite or not strictly positive.
    InvalidScale(f64),

    /// A non-finite value (NaN or infinity) was found in the input.
    InvalidNumericValue(String),

    /// Fewer points were supplied than the operation requires.
    TooFewPoints {
        /// Number of points supplied.
        got: usize,
        /// Minimum number of points required.
        min: usize,
    },

    /// A point set violates the domain precondition of the chosen family.
    DomainViolation {
        /// Name of the model family whose precondition failed.
        family: &'static str,
        /// The precondition that was violated.
        requirement: &'static str,
    },

    /// The normal-equations matrix is singular within the pivot tolerance.
    SingularSystem,

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidFrameRate(fps) => {
                write!(f, "Invalid frame rate: {} (must be finite and > 0)", fps)
            }
            AnalysisError::InvalidScale(scale) => {
                write!(
                    f,
                    "Invalid scale: {} pixels per meter (must be finite and > 0)",
                    scale
                )
            }
            AnalysisError::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            AnalysisError::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            AnalysisError::DomainViolation {
                family,
                requirement,
            } => {
                write!(
                    f,
                    "Domain violation for family '{}': {}",
                    family, requirement
                )
            }
            AnalysisError::SingularSystem => {
                write!(f, "Normal equations are singular (no unique fit)")
            }
            AnalysisError::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                    parameter
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AnalysisError {}
