#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use lwlr_rs::internals::math::distance::{squared_distances, squared_euclidean};
use lwlr_rs::internals::math::kernel::GaussianKernel;
use lwlr_rs::internals::primitives::matrix::DesignMatrix;

// ============================================================================
// Squared Euclidean Distance Tests
// ============================================================================

#[test]
fn test_squared_euclidean_1d() {
    let a = [1.0];
    let b = [4.0];
    assert_relative_eq!(squared_euclidean(&a, &b), 9.0);
}

#[test]
fn test_squared_euclidean_3d() {
    let a = [1.0, 2.0, 3.0];
    let b = [4.0, 6.0, 8.0];
    // diffs: 3, 4, 5. sum_sq: 9+16+25=50
    assert_relative_eq!(squared_euclidean(&a, &b), 50.0);
}

#[test]
fn test_squared_euclidean_identical_points() {
    let a = [1.5, -2.0];
    assert_eq!(squared_euclidean(&a, &a), 0.0);
}

#[test]
fn test_squared_distances_row_order() {
    let x = DesignMatrix::from_rows(&[[0.0, 0.0], [3.0, 4.0], [1.0, 0.0]]).unwrap();
    let d = squared_distances(&[0.0, 0.0], &x);
    assert_eq!(d, vec![0.0, 25.0, 1.0]);
}

// ============================================================================
// Gaussian Kernel Tests
// ============================================================================

#[test]
fn test_kernel_zero_distance_is_one() {
    let kernel = GaussianKernel::new(0.5);
    assert_eq!(kernel.weight(0.0), 1.0);
}

#[test]
fn test_kernel_known_value() {
    // exp(-1 / (2 * 1^2)) = exp(-0.5)
    let kernel = GaussianKernel::new(1.0);
    assert_relative_eq!(kernel.weight(1.0), (-0.5f64).exp());

    // exp(-4 / (2 * 0.5^2)) = exp(-8)
    let kernel = GaussianKernel::new(0.5);
    assert_relative_eq!(kernel.weight(4.0), (-8.0f64).exp());
}

#[test]
fn test_kernel_monotone_decay() {
    let kernel = GaussianKernel::new(1.0);
    let w = kernel.weights(&[0.0, 0.5, 1.0, 4.0, 100.0]);
    for pair in w.windows(2) {
        assert!(pair[0] > pair[1]);
    }
    assert!(w.iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn test_kernel_bandwidth_controls_decay() {
    let narrow = GaussianKernel::new(0.1);
    let wide = GaussianKernel::new(10.0);
    assert!(narrow.weight(1.0) < wide.weight(1.0));
    assert_relative_eq!(wide.weight(1.0), 1.0, epsilon = 1e-2);
    assert_eq!(narrow.bandwidth(), 0.1);
}

#[test]
fn test_kernel_underflows_to_zero() {
    let kernel = GaussianKernel::new(1e-3);
    assert_eq!(kernel.weight(1.0), 0.0);
}
