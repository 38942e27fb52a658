//! Free helper scenarios: interpolation, truncation, combinations, angles and cross products.

use approx::assert_relative_eq;
use linmat::{Matrix, Vector, angle_cos, cross_product, lerp, linear_combination, round_n};

#[test]
fn lerp_then_truncate() {
    assert_eq!(round_n(lerp(&21.0f64, &42.0, 0.3).unwrap(), 2), 27.3);
    assert_eq!(round_n(lerp(&42.0f64, &21.0, 0.7).unwrap(), 2), 27.3);
}

#[test]
fn round_n_is_truncation_not_rounding() {
    // nearest-rounding would give 0.67
    assert_eq!(round_n(2.0f64 / 3.0, 2), 0.66);
    assert_eq!(round_n(-0.999f32, 1), -0.9);
}

#[test]
fn lerp_is_generic_over_shapes() {
    let c = Matrix::<f64>::from_rows(&[[2.0, 1.0], [3.0, 4.0]]).unwrap();
    let d = Matrix::<f64>::from_rows(&[[20.0, 10.0], [30.0, 40.0]]).unwrap();
    assert_eq!(lerp(&c, &d, 0.0).unwrap(), c);
    assert_eq!(lerp(&c, &d, 1.0).unwrap(), d);

    let u = Vector::from(vec![0.0f64, 10.0]);
    let v = Vector::from(vec![10.0f64, 0.0]);
    assert_relative_eq!(lerp(&u, &v, 0.25).unwrap(), Vector::from(vec![2.5, 7.5]));
}

#[test]
fn cross_product_scenario() {
    let u = Vector::from(vec![1, 2, 3]);
    let v = Vector::from(vec![4, 5, 6]);
    let w = cross_product(&u, &v).unwrap();
    assert_eq!(w, Vector::from(vec![-3, 6, -3]));
    // orthogonal to both inputs
    assert_eq!(w.dot(&u).unwrap(), 0);
    assert_eq!(w.dot(&v).unwrap(), 0);
}

#[test]
fn angle_of_parallel_and_orthogonal_vectors() {
    let x = Vector::from(vec![3.0f64, 0.0, 0.0]);
    let y = Vector::from(vec![0.0f64, -2.0, 0.0]);
    assert_eq!(angle_cos(&x, &y).unwrap(), 0.0);
    assert_relative_eq!(angle_cos(&x, &x.scale(4.0)).unwrap(), 1.0);
    assert!(angle_cos(&x, &Vector::from(vec![1.0, 2.0])).is_err());
}

#[test]
fn combination_matches_manual_sum() {
    let vs = vec![
        Vector::from(vec![1i64, 2, 3]),
        Vector::from(vec![0i64, 10, -100]),
        Vector::from(vec![5i64, 5, 5]),
    ];
    let ks = [10i64, -2, 3];
    let manual = &(&vs[0].scale(10) + &vs[1].scale(-2)) + &vs[2].scale(3);
    assert_eq!(linear_combination(&vs, &ks).unwrap(), manual);
    assert_eq!(linear_combination::<i64>(&[], &[]).unwrap().len(), 0);
}
