//! Least-squares fitting of parametric model families.
//!
//! ## Purpose
//!
//! This module fits one of six closed model families to an arbitrary
//! (x, y) point set by solving the normal equations `(ΦᵗΦ)·coef = Φᵗy`
//! over family-specific basis functions.
//!
//! ## Design notes
//!
//! * **Closed dispatch**: Each family pairs an enum variant with its basis
//!   term construction, domain predicate, and equation template. No open
//!   extension point is offered.
//! * **Exponential transform**: The exponential family is fit linearly on
//!   `(x, ln y)` and `a = exp(intercept)` is recovered; R² is recomputed
//!   in the original y-space, not log-space.
//! * **Evaluation**: A fitted model is a stored coefficient vector plus
//!   stateless per-family evaluation; no closures are captured.
//! * **Graceful failure**: Insufficient points, domain violations, and
//!   singular systems are returned as [`AnalysisError`] values, never
//!   panics.
//!
//! ## Invariants
//!
//! * Basis counts never exceed 4, bounding the solve at O(p³), p ≤ 4.
//! * `r_squared` is `None` exactly when all y values are identical
//!   (zero total variance), never NaN.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linalg;
use crate::primitives::errors::AnalysisError;
use crate::primitives::sample::PointXY;

// ============================================================================
// Model Families
// ============================================================================

/// The closed set of parametric model families available for fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelFamily {
    /// `y = a + b·x`
    #[default]
    Linear,

    /// `y = a + b·x + c·x²`
    Quadratic,

    /// `y = a + b·x + c·x² + d·x³`
    Cubic,

    /// `y = a + b·√x`; requires all `x >= 0`.
    SquareRoot,

    /// `y = a + b/x²`; requires all `x != 0`.
    InverseSquare,

    /// `y = a·e^(b·x)`, fit on `(x, ln y)`; requires all `y > 0`.
    Exponential,
}

impl ModelFamily {
    /// Stable family name used in error reporting.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            ModelFamily::Linear => "linear",
            ModelFamily::Quadratic => "quadratic",
            ModelFamily::Cubic => "cubic",
            ModelFamily::SquareRoot => "squareRoot",
            ModelFamily::InverseSquare => "inverseSquare",
            ModelFamily::Exponential => "exponential",
        }
    }

    /// Number of basis functions (columns of the design matrix).
    #[inline]
    pub const fn basis_count(&self) -> usize {
        match self {
            ModelFamily::Linear => 2,
            ModelFamily::Quadratic => 3,
            ModelFamily::Cubic => 4,
            ModelFamily::SquareRoot => 2,
            ModelFamily::InverseSquare => 2,
            ModelFamily::Exponential => 2,
        }
    }

    /// Build the basis terms for `x` into `terms` (cleared first).
    ///
    /// For the exponential family these are the terms of the transformed
    /// linear fit, not of the recovered model.
    pub fn build_terms<T: Float>(&self, x: T, terms: &mut Vec<T>) {
        terms.clear();
        terms.push(T::one());

        match self {
            ModelFamily::Linear | ModelFamily::Exponential => {
                terms.push(x);
            }
            ModelFamily::Quadratic => {
                terms.push(x);
                terms.push(x * x);
            }
            ModelFamily::Cubic => {
                terms.push(x);
                terms.push(x * x);
                terms.push(x * x * x);
            }
            ModelFamily::SquareRoot => {
                terms.push(x.sqrt());
            }
            ModelFamily::InverseSquare => {
                terms.push(T::one() / (x * x));
            }
        }
    }

    /// Domain precondition violated by `points`, if any.
    fn violated_requirement<T: Float>(&self, points: &[PointXY<T>]) -> Option<&'static str> {
        match self {
            ModelFamily::SquareRoot => points
                .iter()
                .any(|p| p.x < T::zero())
                .then_some("all x must be >= 0"),
            ModelFamily::InverseSquare => points
                .iter()
                .any(|p| p.x == T::zero())
                .then_some("all x must be nonzero"),
            ModelFamily::Exponential => points
                .iter()
                .any(|p| p.y <= T::zero())
                .then_some("all y must be > 0"),
            _ => None,
        }
    }
}

// ============================================================================
// Fitted Model
// ============================================================================

/// Result of a successful least-squares fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedModel<T: Float> {
    /// The family that was fit.
    pub family: ModelFamily,

    /// Fitted coefficients, ordered per the family's equation template.
    pub coefficients: Vec<T>,

    /// Coefficient of determination; `None` when all y are identical.
    pub r_squared: Option<T>,

    /// Human-readable equation with coefficients at 5 decimal places.
    pub equation: String,
}

impl<T: Float> FittedModel<T> {
    /// Evaluate the fitted model at `x`.
    pub fn evaluate(&self, x: T) -> T {
        match self.family {
            ModelFamily::Exponential => {
                self.coefficients[0] * (self.coefficients[1] * x).exp()
            }
            family => {
                let mut terms = Vec::with_capacity(family.basis_count());
                family.build_terms(x, &mut terms);
                terms
                    .iter()
                    .zip(self.coefficients.iter())
                    .fold(T::zero(), |acc, (&t, &c)| acc + c * t)
            }
        }
    }
}

// ============================================================================
// Fitting
// ============================================================================

/// Fit `family` to `points` by least squares.
pub fn fit<T: Float>(
    points: &[PointXY<T>],
    family: ModelFamily,
) -> Result<FittedModel<T>, AnalysisError> {
    if points.len() < 2 {
        return Err(AnalysisError::TooFewPoints {
            got: points.len(),
            min: 2,
        });
    }

    if let Some(requirement) = family.violated_requirement(points) {
        return Err(AnalysisError::DomainViolation {
            family: family.name(),
            requirement,
        });
    }

    let coefficients = match family {
        ModelFamily::Exponential => {
            let logged: Vec<PointXY<T>> = points
                .iter()
                .map(|p| PointXY::new(p.x, p.y.ln()))
                .collect();
            let transformed = solve_normal_equations(&logged, family)?;
            vec![transformed[0].exp(), transformed[1]]
        }
        _ => solve_normal_equations(points, family)?,
    };

    let mut model = FittedModel {
        family,
        coefficients,
        r_squared: None,
        equation: String::new(),
    };
    // R² always in the original y-space, including for the exponential fit.
    model.r_squared = r_squared(points, &model);
    model.equation = equation_text(&model);

    Ok(model)
}

/// Assemble and solve the normal equations `(ΦᵗΦ)·coef = Φᵗy`.
fn solve_normal_equations<T: Float>(
    points: &[PointXY<T>],
    family: ModelFamily,
) -> Result<Vec<T>, AnalysisError> {
    let p = family.basis_count();
    let mut a = vec![T::zero(); p * p];
    let mut b = vec![T::zero(); p];
    let mut terms = Vec::with_capacity(p);

    for point in points {
        family.build_terms(point.x, &mut terms);
        for j in 0..p {
            for k in 0..p {
                a[j * p + k] = a[j * p + k] + terms[j] * terms[k];
            }
            b[j] = b[j] + terms[j] * point.y;
        }
    }

    linalg::solve(&a, &b, p).ok_or(AnalysisError::SingularSystem)
}

/// `R² = 1 − SSres/SStot`, or `None` when SStot is zero.
fn r_squared<T: Float>(points: &[PointXY<T>], model: &FittedModel<T>) -> Option<T> {
    let n = T::from(points.len()).unwrap();
    let mean = points.iter().fold(T::zero(), |acc, p| acc + p.y) / n;

    let ss_tot = points
        .iter()
        .fold(T::zero(), |acc, p| acc + (p.y - mean) * (p.y - mean));
    if ss_tot == T::zero() {
        return None;
    }

    let ss_res = points.iter().fold(T::zero(), |acc, p| {
        let residual = p.y - model.evaluate(p.x);
        acc + residual * residual
    });

    Some(T::one() - ss_res / ss_tot)
}

/// Family-specific equation text with coefficients at 5 decimal places.
fn equation_text<T: Float>(model: &FittedModel<T>) -> String {
    // Round to the displayed precision first; adding 0.0 folds the
    // negative zero that sub-epsilon residue would otherwise print as.
    let c = |i: usize| -> f64 {
        let v = model.coefficients[i].to_f64().unwrap_or(f64::NAN);
        (v * 1e5).round() / 1e5 + 0.0
    };

    match model.family {
        ModelFamily::Linear => format!("y = {:.5} + {:.5}x", c(0), c(1)),
        ModelFamily::Quadratic => {
            format!("y = {:.5} + {:.5}x + {:.5}x²", c(0), c(1), c(2))
        }
        ModelFamily::Cubic => format!(
            "y = {:.5} + {:.5}x + {:.5}x² + {:.5}x³",
            c(0),
            c(1),
            c(2),
            c(3)
        ),
        ModelFamily::SquareRoot => format!("y = {:.5} + {:.5}√x", c(0), c(1)),
        ModelFamily::InverseSquare => format!("y = {:.5} + {:.5}/x²", c(0), c(1)),
        ModelFamily::Exponential => format!("y = {:.5}·e^({:.5}x)", c(0), c(1)),
    }
}
