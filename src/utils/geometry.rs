//! Angle and cross product between vectors.

use crate::core::traits::Scalar;
use crate::error::LinalgError;
use crate::matrix::vector::Vector;

/// Cosine of the angle between `u` and `v`: `dot(u, v) / (‖u‖₂ ‖v‖₂)`.
///
/// Both vectors must have the same, nonzero length and a nonzero norm.
pub fn angle_cos<K: Scalar>(u: &Vector<K>, v: &Vector<K>) -> Result<f64, LinalgError> {
    if u.is_empty() || v.is_empty() {
        return Err(LinalgError::DimensionMismatch("angle of a zero-length vector".into()));
    }
    let dot = u.dot(v)?;
    let norms = u.norm_2() * v.norm_2();
    if norms == 0.0 {
        return Err(LinalgError::DimensionMismatch("angle with a zero vector is undefined".into()));
    }
    Ok(dot.as_f64() / norms)
}

/// Cross product of two 3-dimensional vectors.
pub fn cross_product<K: Scalar>(u: &Vector<K>, v: &Vector<K>) -> Result<Vector<K>, LinalgError> {
    if u.len() != 3 || v.len() != 3 {
        return Err(LinalgError::DimensionMismatch(format!(
            "cross product needs 3-dimensional vectors, got {} and {}",
            u.len(),
            v.len()
        )));
    }
    Ok(Vector::from(vec![
        K::cross(u[1], u[2], v[1], v[2]),
        K::cross(u[2], u[0], v[2], v[0]),
        K::cross(u[0], u[1], v[0], v[1]),
    ]))
}
