#![cfg(feature = "dev")]
//! Tests for the matrix algebra backend.
//!
//! These tests verify the nalgebra-backed capability used by both
//! regressions:
//! - Determinant and inverse of small square matrices
//! - Formation of plain and weighted normal equations
//! - The exact-zero singularity check
//!
//! ## Test Organization
//!
//! 1. **Determinant / Inverse** - known closed-form results
//! 2. **Normal Equations** - agreement with a dense diagonal weight matrix
//! 3. **Solve** - coefficients and singular systems

use approx::assert_relative_eq;
use nalgebra::{DMatrix, DVector};

use lwlr_rs::internals::math::linalg::{FloatLinalg, NormalEquations};
use lwlr_rs::internals::primitives::errors::RegressionError;
use lwlr_rs::internals::primitives::matrix::DesignMatrix;

// ============================================================================
// Determinant / Inverse Tests
// ============================================================================

#[test]
fn test_determinant_diagonal() {
    // column-major [[2, 0], [0, 3]]
    let a = [2.0, 0.0, 0.0, 3.0];
    assert_relative_eq!(f64::determinant(&a, 2), 6.0);
}

#[test]
fn test_determinant_singular_is_exact_zero() {
    // [[14, 14], [14, 14]]
    let a = [14.0, 14.0, 14.0, 14.0];
    assert_eq!(f64::determinant(&a, 2), 0.0);
}

#[test]
fn test_invert_2x2() {
    // [[4, 7], [2, 6]] stored column-major; inverse = 1/10 [[6, -7], [-2, 4]]
    let a = [4.0, 2.0, 7.0, 6.0];
    let inv = f64::invert(&a, 2).unwrap();
    let expected = [0.6, -0.2, -0.7, 0.4];
    for (got, want) in inv.iter().zip(expected.iter()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-12);
    }
}

#[test]
fn test_invert_singular_returns_none() {
    let a = [1.0, 2.0, 2.0, 4.0];
    assert!(f64::invert(&a, 2).is_none());
}

#[test]
fn test_f32_backend() {
    let a = [2.0f32, 0.0, 0.0, 4.0];
    assert_relative_eq!(f32::determinant(&a, 2), 8.0f32);
    let inv = f32::invert(&a, 2).unwrap();
    assert_relative_eq!(inv[0], 0.5f32);
    assert_relative_eq!(inv[3], 0.25f32);
}

// ============================================================================
// Normal Equations Tests
// ============================================================================

fn sample_design() -> (DesignMatrix<f64>, Vec<f64>) {
    let x = DesignMatrix::from_rows(&[
        [1.0, 0.5, -1.0],
        [1.0, 1.5, 2.0],
        [1.0, -0.5, 0.25],
        [1.0, 3.0, 1.0],
        [1.0, 2.0, -2.0],
    ])
    .unwrap();
    let y = vec![1.0, 2.5, -0.5, 4.0, 0.75];
    (x, y)
}

#[test]
fn test_unweighted_normal_equations() {
    let (x, y) = sample_design();
    let eq = f64::normal_equations(&x, &y, None);

    let xm = DMatrix::from_row_slice(5, 3, x.as_slice());
    let ym = DVector::from_column_slice(&y);
    let gram = xm.transpose() * &xm;
    let rhs = xm.transpose() * &ym;

    assert_eq!(eq.n, 3);
    for (got, want) in eq.gram.iter().zip(gram.as_slice()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-12);
    }
    for (got, want) in eq.rhs.iter().zip(rhs.as_slice()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-12);
    }
}

#[test]
fn test_weighted_matches_dense_diagonal() {
    let (x, y) = sample_design();
    let w = [1.0, 0.25, 0.5, 0.125, 0.75];
    let eq = f64::normal_equations(&x, &y, Some(&w));

    // Xᵀ · W · X with an explicit m×m diagonal matrix
    let xm = DMatrix::from_row_slice(5, 3, x.as_slice());
    let ym = DVector::from_column_slice(&y);
    let wm = DMatrix::from_diagonal(&DVector::from_column_slice(&w));
    let gram = xm.transpose() * (&wm * &xm);
    let rhs = xm.transpose() * (&wm * &ym);

    for (got, want) in eq.gram.iter().zip(gram.as_slice()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-12);
    }
    for (got, want) in eq.rhs.iter().zip(rhs.as_slice()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-12);
    }
}

#[test]
fn test_unit_weights_equal_unweighted() {
    let (x, y) = sample_design();
    let ones = vec![1.0; 5];
    let plain = f64::normal_equations(&x, &y, None);
    let weighted = f64::normal_equations(&x, &y, Some(&ones));
    assert_eq!(plain, weighted);
}

// ============================================================================
// Solve Tests
// ============================================================================

#[test]
fn test_solve_known_system() {
    // [[3, 3], [3, 5]] w = [9, 13] -> w = [1, 2]
    let eq = NormalEquations {
        gram: vec![3.0, 3.0, 3.0, 5.0],
        rhs: vec![9.0, 13.0],
        n: 2,
    };
    let w = eq.solve().unwrap();
    assert_relative_eq!(w[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(w[1], 2.0, epsilon = 1e-12);
}

#[test]
fn test_solve_singular() {
    let eq = NormalEquations {
        gram: vec![14.0, 14.0, 14.0, 14.0],
        rhs: vec![1.0, 1.0],
        n: 2,
    };
    assert_relative_eq!(eq.determinant(), 0.0);
    assert_eq!(eq.solve(), Err(RegressionError::SingularMatrix));
}

#[test]
fn test_solve_all_zero_weights_is_singular() {
    let (x, y) = sample_design();
    let zeros = vec![0.0; 5];
    let eq = f64::normal_equations(&x, &y, Some(&zeros));
    assert_eq!(eq.solve(), Err(RegressionError::SingularMatrix));
}
