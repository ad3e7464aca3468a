#![cfg(feature = "dev")]

use kinefit_rs::internals::primitives::errors::AnalysisError;

#[test]
fn test_analysis_error_display() {
    // InvalidFrameRate
    let err = AnalysisError::InvalidFrameRate(0.0);
    assert_eq!(
        format!("{}", err),
        "Invalid frame rate: 0 (must be finite and > 0)"
    );

    // InvalidScale
    let err = AnalysisError::InvalidScale(-2.5);
    assert_eq!(
        format!("{}", err),
        "Invalid scale: -2.5 pixels per meter (must be finite and > 0)"
    );

    // InvalidNumericValue
    let err = AnalysisError::InvalidNumericValue("points[1].x=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: points[1].x=NaN");

    // TooFewPoints
    let err = AnalysisError::TooFewPoints { got: 1, min: 2 };
    assert_eq!(format!("{}", err), "Too few points: got 1, need at least 2");

    // DomainViolation
    let err = AnalysisError::DomainViolation {
        family: "squareRoot",
        requirement: "all x must be >= 0",
    };
    assert_eq!(
        format!("{}", err),
        "Domain violation for family 'squareRoot': all x must be >= 0"
    );

    // SingularSystem
    let err = AnalysisError::SingularSystem;
    assert_eq!(
        format!("{}", err),
        "Normal equations are singular (no unique fit)"
    );

    // DuplicateParameter
    let err = AnalysisError::DuplicateParameter { parameter: "fps" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'fps' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_analysis_error_properties() {
    let err1 = AnalysisError::SingularSystem;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, AnalysisError::TooFewPoints { got: 0, min: 2 });
}

#[cfg(feature = "std")]
#[test]
fn test_analysis_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<AnalysisError>();
}
