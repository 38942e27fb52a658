//! Determinant, cofactor and inverse tests, cross-checked against faer.
//!
//! Exact scenarios use integer-valued inputs where every step is exact. Random
//! invertible matrices are compared against a faer full-pivot LU solve, which
//! gives an independent reference for the adjoint/determinant inverse.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use faer::Mat;
use faer::linalg::solvers::{FullPivLu, SolveCore};
use linmat::{LinalgError, Matrix, Vector};
use rand::Rng;

/// Random diagonally dominant (hence invertible) matrix.
fn random_invertible(rng: &mut impl Rng, n: usize) -> Matrix<f64> {
    let mut a = Matrix::<f64>::from_fn(n, n, |_, _| rng.gen_range(-1.0..1.0));
    for i in 0..n {
        a[(i, i)] += n as f64;
    }
    a
}

/// Solve `a x = b` with faer's full-pivot LU.
fn faer_solve(a: &Matrix<f64>, b: &[f64]) -> Vec<f64> {
    let n = a.height();
    let a_f = Mat::from_fn(n, n, |i, j| a[(i, j)]);
    let factor = FullPivLu::new(a_f.as_ref());
    let mut y = b.to_vec();
    let y_mat = faer::MatMut::from_column_major_slice_mut(&mut y, n, 1);
    factor.solve_in_place_with_conj(faer::Conj::No, y_mat);
    y
}

/// `det(I_n) == 1` for every size, including the 0x0 convention.
#[test]
fn identity_determinant_is_one() {
    for n in 0..7 {
        assert_eq!(Matrix::<f64>::identity(n).determinant().unwrap(), 1.0);
        assert_eq!(Matrix::<i64>::identity(n).determinant().unwrap(), 1);
    }
}

/// Closed-form 3x3 determinant on a fixed matrix.
#[test]
fn determinant_scenario() {
    let a = Matrix::<f64>::from_rows(&[[8.0, 5.0, -2.0], [4.0, 7.0, 20.0], [7.0, 6.0, 1.0]]).unwrap();
    assert_eq!(a.determinant().unwrap(), -174.0);
}

/// `det(A^T) == det(A)` and `det(AB) == det(A) det(B)`, exact over the integers.
#[test]
fn determinant_of_transpose_and_product() {
    let mut rng = rand::thread_rng();
    for _ in 0..10 {
        let n = rng.gen_range(1..6);
        let a = Matrix::<i64>::from_fn(n, n, |_, _| rng.gen_range(-5..=5));
        let b = Matrix::<i64>::from_fn(n, n, |_, _| rng.gen_range(-5..=5));
        let det_a = a.determinant().unwrap();
        assert_eq!(a.transpose().determinant().unwrap(), det_a);
        assert_eq!((&a * &b).determinant().unwrap(), det_a * b.determinant().unwrap());
    }
}

/// `A * adj(A) == det(A) * I` for random integer matrices.
#[test]
fn adjoint_times_matrix_is_scaled_identity() {
    let mut rng = rand::thread_rng();
    for _ in 0..10 {
        let n = rng.gen_range(1..6);
        let a = Matrix::<i64>::from_fn(n, n, |_, _| rng.gen_range(-5..=5));
        let det = a.determinant().unwrap();
        assert_eq!(&a * &a.adjoint().unwrap(), Matrix::identity(n) * det);
    }
}

/// The inverse multiplies to the identity from both sides within tolerance.
#[test]
fn inverse_is_two_sided() {
    let mut rng = rand::thread_rng();
    for _ in 0..10 {
        let n = rng.gen_range(1..6);
        let a = random_invertible(&mut rng, n);
        let inv = a.inverse().unwrap();
        assert_relative_eq!(&a * &inv, Matrix::identity(n), epsilon = 1e-9);
        assert_relative_eq!(&inv * &a, Matrix::identity(n), epsilon = 1e-9);
    }
}

/// Solutions through `inverse` and `solve` agree with a faer full-pivot LU solve.
#[test]
fn inverse_agrees_with_faer_lu() {
    let mut rng = rand::thread_rng();
    for _ in 0..10 {
        let n = rng.gen_range(1..6);
        let a = random_invertible(&mut rng, n);
        let b: Vec<f64> = (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect();
        let expected = faer_solve(&a, &b);

        let via_inverse = &a.inverse().unwrap() * &Vector::from(b.clone());
        let via_solve = a.solve(&Vector::from(b)).unwrap();
        assert_abs_diff_eq!(via_inverse.as_slice(), expected.as_slice(), epsilon = 1e-9);
        assert_abs_diff_eq!(via_solve.as_slice(), expected.as_slice(), epsilon = 1e-9);
    }
}

/// A singular matrix has a zero determinant, no inverse and deficient rank.
#[test]
fn singular_inverse_fails() {
    let a = Matrix::<f64>::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
    assert_eq!(a.determinant().unwrap(), 0.0);
    assert_eq!(a.inverse(), Err(LinalgError::Singular));
    assert_eq!(a.rank(), 2);
}
