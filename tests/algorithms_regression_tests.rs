#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use kinefit_rs::internals::algorithms::regression::{fit, ModelFamily};
use kinefit_rs::internals::primitives::errors::AnalysisError;
use kinefit_rs::internals::primitives::sample::PointXY;

fn points(pairs: &[(f64, f64)]) -> Vec<PointXY<f64>> {
    pairs.iter().map(|&(x, y)| PointXY::new(x, y)).collect()
}

#[test]
fn test_fit_linear_exact() {
    let pts = points(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
    let model = fit(&pts, ModelFamily::Linear).unwrap();

    assert_eq!(model.family, ModelFamily::Linear);
    assert_relative_eq!(model.coefficients[0], 0.0, epsilon = 1e-9);
    assert_relative_eq!(model.coefficients[1], 2.0, epsilon = 1e-9);
    assert_relative_eq!(model.r_squared.unwrap(), 1.0, epsilon = 1e-9);
    assert_eq!(model.equation, "y = 0.00000 + 2.00000x");
}

#[test]
fn test_fit_linear_least_squares() {
    // Not colinear: the fit minimizes squared residuals, r² below 1.
    let pts = points(&[(0.0, 0.0), (1.0, 1.2), (2.0, 1.8), (3.0, 3.1)]);
    let model = fit(&pts, ModelFamily::Linear).unwrap();
    let r2 = model.r_squared.unwrap();
    assert!(r2 > 0.9 && r2 < 1.0);

    // Residuals of the fitted line are orthogonal to the inputs, so the
    // mean residual is zero.
    let mean_residual: f64 = pts
        .iter()
        .map(|p| p.y - model.evaluate(p.x))
        .sum::<f64>()
        / pts.len() as f64;
    assert_relative_eq!(mean_residual, 0.0, epsilon = 1e-9);
}

#[test]
fn test_fit_quadratic_exact() {
    // y = 1 + 2x + 3x²
    let pts = points(&[(0.0, 1.0), (1.0, 6.0), (2.0, 17.0), (3.0, 34.0)]);
    let model = fit(&pts, ModelFamily::Quadratic).unwrap();
    assert_relative_eq!(model.coefficients[0], 1.0, epsilon = 1e-6);
    assert_relative_eq!(model.coefficients[1], 2.0, epsilon = 1e-6);
    assert_relative_eq!(model.coefficients[2], 3.0, epsilon = 1e-6);
    assert_relative_eq!(model.r_squared.unwrap(), 1.0, epsilon = 1e-9);
    assert_eq!(model.equation, "y = 1.00000 + 2.00000x + 3.00000x²");
}

#[test]
fn test_fit_cubic_exact() {
    // y = x³
    let pts = points(&[
        (0.0, 0.0),
        (1.0, 1.0),
        (2.0, 8.0),
        (3.0, 27.0),
        (4.0, 64.0),
    ]);
    let model = fit(&pts, ModelFamily::Cubic).unwrap();
    assert_relative_eq!(model.coefficients[0], 0.0, epsilon = 1e-6);
    assert_relative_eq!(model.coefficients[1], 0.0, epsilon = 1e-6);
    assert_relative_eq!(model.coefficients[2], 0.0, epsilon = 1e-6);
    assert_relative_eq!(model.coefficients[3], 1.0, epsilon = 1e-6);
    assert_relative_eq!(model.evaluate(5.0), 125.0, epsilon = 1e-4);
}

#[test]
fn test_fit_square_root_exact() {
    // y = 2 + 3√x
    let pts = points(&[(0.0, 2.0), (1.0, 5.0), (4.0, 8.0), (9.0, 11.0)]);
    let model = fit(&pts, ModelFamily::SquareRoot).unwrap();
    assert_relative_eq!(model.coefficients[0], 2.0, epsilon = 1e-9);
    assert_relative_eq!(model.coefficients[1], 3.0, epsilon = 1e-9);
    assert_eq!(model.equation, "y = 2.00000 + 3.00000√x");
}

#[test]
fn test_fit_inverse_square_exact() {
    // y = 1 + 4/x²
    let pts = points(&[(1.0, 5.0), (2.0, 2.0), (4.0, 1.25)]);
    let model = fit(&pts, ModelFamily::InverseSquare).unwrap();
    assert_relative_eq!(model.coefficients[0], 1.0, epsilon = 1e-9);
    assert_relative_eq!(model.coefficients[1], 4.0, epsilon = 1e-9);
    assert_eq!(model.equation, "y = 1.00000 + 4.00000/x²");
}

#[test]
fn test_fit_exponential_recovers_parameters() {
    // y = 2·e^(0.5x); the log-space fit is exact on exact data.
    let pts: Vec<PointXY<f64>> = (0..5)
        .map(|i| {
            let x = i as f64;
            PointXY::new(x, 2.0 * (0.5 * x).exp())
        })
        .collect();
    let model = fit(&pts, ModelFamily::Exponential).unwrap();
    assert_relative_eq!(model.coefficients[0], 2.0, epsilon = 1e-9);
    assert_relative_eq!(model.coefficients[1], 0.5, epsilon = 1e-9);
    assert_relative_eq!(model.r_squared.unwrap(), 1.0, epsilon = 1e-9);
    assert_eq!(model.equation, "y = 2.00000·e^(0.50000x)");
    assert_relative_eq!(model.evaluate(6.0), 2.0 * 3.0_f64.exp(), epsilon = 1e-6);
}

#[test]
fn test_fit_too_few_points() {
    let pts = points(&[(1.0, 1.0)]);
    assert_eq!(
        fit(&pts, ModelFamily::Linear),
        Err(AnalysisError::TooFewPoints { got: 1, min: 2 })
    );
}

#[test]
fn test_fit_domain_violations() {
    let pts = points(&[(-1.0, 1.0), (1.0, 2.0)]);
    assert_eq!(
        fit(&pts, ModelFamily::SquareRoot),
        Err(AnalysisError::DomainViolation {
            family: "squareRoot",
            requirement: "all x must be >= 0",
        })
    );

    let pts = points(&[(0.0, 1.0), (1.0, 2.0)]);
    assert_eq!(
        fit(&pts, ModelFamily::InverseSquare),
        Err(AnalysisError::DomainViolation {
            family: "inverseSquare",
            requirement: "all x must be nonzero",
        })
    );

    let pts = points(&[(0.0, 0.0), (1.0, 2.0)]);
    assert_eq!(
        fit(&pts, ModelFamily::Exponential),
        Err(AnalysisError::DomainViolation {
            family: "exponential",
            requirement: "all y must be > 0",
        })
    );
}

#[test]
fn test_fit_singular_system() {
    // Two points cannot determine a quadratic.
    let pts = points(&[(0.0, 0.0), (1.0, 1.0)]);
    assert_eq!(
        fit(&pts, ModelFamily::Quadratic),
        Err(AnalysisError::SingularSystem)
    );

    // Repeated x values collapse the normal equations for a line.
    let pts = points(&[(2.0, 1.0), (2.0, 3.0), (2.0, 5.0)]);
    assert_eq!(
        fit(&pts, ModelFamily::Linear),
        Err(AnalysisError::SingularSystem)
    );
}

#[test]
fn test_fit_constant_data_has_no_r_squared() {
    let pts = points(&[(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)]);
    let model = fit(&pts, ModelFamily::Linear).unwrap();
    assert_relative_eq!(model.coefficients[0], 5.0, epsilon = 1e-9);
    assert_relative_eq!(model.coefficients[1], 0.0, epsilon = 1e-9);
    assert_eq!(model.r_squared, None);
}

#[test]
fn test_model_family_metadata() {
    assert_eq!(ModelFamily::default(), ModelFamily::Linear);
    assert_eq!(ModelFamily::Linear.name(), "linear");
    assert_eq!(ModelFamily::SquareRoot.name(), "squareRoot");
    assert_eq!(ModelFamily::InverseSquare.name(), "inverseSquare");
    assert_eq!(ModelFamily::Linear.basis_count(), 2);
    assert_eq!(ModelFamily::Quadratic.basis_count(), 3);
    assert_eq!(ModelFamily::Cubic.basis_count(), 4);
    assert_eq!(ModelFamily::Exponential.basis_count(), 2);
}
