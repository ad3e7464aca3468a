//! # kinefit — Kinematics Derivation and Curve Fitting for Tracked Motion
//!
//! A deterministic numerical-analysis engine that turns discrete, noisy 2D
//! position samples (points placed on video frames) into physical motion
//! descriptors and best-fit analytical models.
//!
//! ## What does it do?
//!
//! Four tightly related things, all pure and synchronous:
//!
//! - **Kinematics derivation** — velocity and acceleration time series
//!   from per-entity position samples, using a fixed forward/backward
//!   finite-difference policy.
//! - **Statistics aggregation** — scalar summaries across all entities:
//!   total distance, average/maximum speed, average acceleration.
//! - **Curve fitting** — least-squares fits of six parametric model
//!   families over a dense Gaussian-elimination solver, with R² and a
//!   human-readable equation.
//! - **Tick planning** — human-friendly tick marks and padded domains for
//!   bounded numeric axes.
//!
//! The crate performs no I/O, no persistence, and no rendering; video
//! ingestion, point capture, and chart drawing are external collaborators
//! that feed samples in and consume series, summaries, and fits.
//!
//! ## Quick Start
//!
//! ### Kinematics
//!
//! ```rust
//! use kinefit_rs::prelude::*;
//!
//! let samples = vec![
//!     PositionSample { frame: 0, x: 0.0_f64, y: 0.0, entity_id: "ball".to_string() },
//!     PositionSample { frame: 30, x: 100.0, y: 0.0, entity_id: "ball".to_string() },
//! ];
//!
//! // Build the analyzer
//! let analyzer = Motion::new()
//!     .fps(30.0)      // frame 30 with fps 30 is t = 1 s
//!     .build()?;
//!
//! // Velocity along x: forward difference over the only pair
//! let velocity = analyzer.velocity(&samples, Axis::X);
//! assert_eq!(velocity.len(), 2);
//! assert!((velocity[0].value - 100.0).abs() < 1e-9);
//! # Result::<(), AnalysisError>::Ok(())
//! ```
//!
//! ### Motion summary
//!
//! ```rust
//! use kinefit_rs::prelude::*;
//!
//! let samples = vec![
//!     PositionSample { frame: 0, x: 0.0_f64, y: 0.0, entity_id: "a".to_string() },
//!     PositionSample { frame: 30, x: 100.0, y: 0.0, entity_id: "a".to_string() },
//!     PositionSample { frame: 60, x: 100.0, y: 0.0, entity_id: "a".to_string() },
//! ];
//!
//! // With a scale of 10 px/m, distances come back in meters
//! let analyzer = Motion::new().fps(30.0).pixels_per_meter(10.0).build()?;
//! let summary = analyzer.summarize(&samples);
//! assert!((summary.total_distance - 10.0).abs() < 1e-9);
//! # Result::<(), AnalysisError>::Ok(())
//! ```
//!
//! ### Curve fitting
//!
//! ```rust
//! use kinefit_rs::prelude::*;
//!
//! let points = vec![
//!     PointXY::new(1.0_f64, 2.0),
//!     PointXY::new(2.0, 4.0),
//!     PointXY::new(3.0, 6.0),
//! ];
//!
//! let model = fit(&points, Linear)?;
//! assert_eq!(model.equation, "y = 0.00000 + 2.00000x");
//! assert!((model.evaluate(4.0) - 8.0).abs() < 1e-9);
//! # Result::<(), AnalysisError>::Ok(())
//! ```
//!
//! ### Tick planning
//!
//! ```rust
//! use kinefit_rs::prelude::*;
//!
//! let plan = plan_ticks(0.0_f64, 1.0, 6, Loose);
//! assert!(plan.domain.0 <= 0.0 && plan.domain.1 >= 1.0);
//! assert!(plan.ticks.windows(2).all(|w| w[0] < w[1]));
//! ```
//!
//! ## Model Families
//!
//! | Family          | Equation              | Basis        | Domain requirement |
//! |-----------------|-----------------------|--------------|--------------------|
//! | `Linear`        | `y = a + bx`          | `1, x`       | —                  |
//! | `Quadratic`     | `y = a + bx + cx²`    | `1, x, x²`   | —                  |
//! | `Cubic`         | `y = a + bx + cx² + dx³` | `1, x, x², x³` | —            |
//! | `SquareRoot`    | `y = a + b√x`         | `1, √x`      | all `x >= 0`       |
//! | `InverseSquare` | `y = a + b/x²`        | `1, 1/x²`    | all `x != 0`       |
//! | `Exponential`   | `y = a·e^(bx)`        | `1, x` on `(x, ln y)` | all `y > 0` |
//!
//! The exponential family is fit linearly in log-space and its R² is
//! recomputed in the original y-space.
//!
//! ## Result and Error Handling
//!
//! Fallible operations return `Result<_, AnalysisError>`. Every variant
//! describes an expected, recoverable condition: bad configuration, too
//! few points, a violated family domain, or a singular system. Nothing in
//! this crate panics or retries; the presentation layer is expected to
//! render an explicit "no data" / "could not fit" state.
//!
//! ```rust
//! use kinefit_rs::prelude::*;
//!
//! // Two colinear points cannot determine a quadratic: singular system.
//! let points = vec![PointXY::new(0.0, 0.0), PointXY::new(1.0, 1.0)];
//! assert_eq!(fit(&points, Quadratic), Err(AnalysisError::SingularSystem));
//! ```
//!
//! Degenerate data that has a well-defined answer is handled in-band
//! instead: duplicate frames yield a zero derivative value, a collapsed
//! tick range yields a single-tick plan, and an all-identical y set yields
//! `r_squared: None` rather than NaN.
//!
//! ## Differencing Policy
//!
//! First and middle samples use a **forward** difference against the next
//! sample; the last sample uses a **backward** difference. Middle samples
//! deliberately do not use central differencing — downstream consumers
//! depend on the exact values this policy produces, and acceleration is
//! obtained by re-applying the identical policy to the velocity series.
//!
//! ## Determinism and Concurrency
//!
//! All operations are pure functions of their explicit inputs with no
//! shared or interior state, so independent invocations (per entity, or
//! concurrent fits of several candidate families) may run in parallel
//! with no coordination, and repeated calls yield bit-identical results.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! kinefit-rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error enum, sample/point record types, and entity
// partitioning.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the dense linear solver (Gaussian elimination with partial
// pivoting), the shared finite-difference policy, and tick planning.
mod math;

// Layer 3: Algorithms - core analysis algorithms.
//
// Contains kinematics derivation, statistics aggregation, and
// least-squares regression over the model families.
mod algorithms;

// Layer 4: Engine - validation and orchestration.
//
// Contains fail-fast input validation and the analyzer that drives the
// algorithm layer with validated settings.
mod engine;

// High-level fluent API.
//
// Provides the `Motion` builder, the top-level `fit` function, and the
// public type re-exports.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use kinefit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        fit, plan_ticks, AnalysisError, Axis, DerivedSample, FittedModel, ModelFamily,
        ModelFamily::{Cubic, Exponential, InverseSquare, Linear, Quadratic, SquareRoot},
        MotionAnalyzer, MotionBuilder as Motion, MotionSummary,
        PaddingMode::{Loose, Tight},
        PointXY, PositionSample, TickPlan,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal validation and orchestration.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
