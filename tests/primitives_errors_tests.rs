#![cfg(feature = "dev")]

use lwlr_rs::internals::primitives::errors::RegressionError;

#[test]
fn test_regression_error_display() {
    // EmptyInput
    let err = RegressionError::EmptyInput;
    assert_eq!(format!("{}", err), "Input arrays are empty");

    // InvalidInput
    let err = RegressionError::InvalidInput("test error".to_string());
    assert_eq!(format!("{}", err), "Invalid input: test error");

    // MismatchedInputs
    let err = RegressionError::MismatchedInputs {
        x_rows: 10,
        y_len: 5,
    };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: x has 10 rows, y has 5"
    );

    // DimensionMismatch
    let err = RegressionError::DimensionMismatch {
        expected: 3,
        got: 2,
    };
    assert_eq!(
        format!("{}", err),
        "Dimension mismatch: expected 3 columns, got 2"
    );

    // InvalidNumericValue
    let err = RegressionError::InvalidNumericValue("NaN detected".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: NaN detected");

    // InvalidBandwidth
    let err = RegressionError::InvalidBandwidth(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid bandwidth: -1 (must be > 0 and finite)"
    );

    // MissingParameter
    let err = RegressionError::MissingParameter {
        parameter: "bandwidth",
    };
    assert_eq!(
        format!("{}", err),
        "Required parameter 'bandwidth' was not set"
    );

    // UnsupportedFeature
    let err = RegressionError::UnsupportedFeature {
        adapter: "Standard",
        feature: "bandwidth",
    };
    assert_eq!(
        format!("{}", err),
        "Adapter 'Standard' does not support feature: bandwidth"
    );

    // DuplicateParameter
    let err = RegressionError::DuplicateParameter { parameter: "foo" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'foo' was set multiple times. Each parameter can only be configured once."
    );

    // SingularMatrix
    let err = RegressionError::SingularMatrix;
    assert_eq!(
        format!("{}", err),
        "This matrix is singular, cannot do inverse"
    );

    // Parse
    let err = RegressionError::Parse {
        line: 4,
        message: "'abc' is not a number".to_string(),
    };
    assert_eq!(
        format!("{}", err),
        "Parse error on line 4: 'abc' is not a number"
    );
}

#[test]
fn test_regression_error_properties() {
    let err1 = RegressionError::SingularMatrix;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, RegressionError::EmptyInput);
}

#[cfg(feature = "std")]
#[test]
fn test_regression_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<RegressionError>();
}
