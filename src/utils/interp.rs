//! Linear combination, interpolation and decimal truncation helpers.

use crate::core::traits::{Lerp, Scalar};
use crate::error::LinalgError;
use crate::matrix::vector::Vector;
use num_traits::Float;

/// Σ `vectors[i] * coefficients[i]`.
///
/// Both lists must have the same length and every vector the same dimension.
/// Empty input yields a zero-length vector.
pub fn linear_combination<K: Scalar>(vectors: &[Vector<K>], coefficients: &[K]) -> Result<Vector<K>, LinalgError> {
    if vectors.len() != coefficients.len() {
        return Err(LinalgError::DimensionMismatch(format!(
            "{} vectors but {} coefficients",
            vectors.len(),
            coefficients.len()
        )));
    }
    let Some(first) = vectors.first() else {
        return Ok(Vector::zeros(0));
    };
    let dim = first.len();
    let mut acc = vec![K::zero(); dim];
    for (v, &k) in vectors.iter().zip(coefficients) {
        if v.len() != dim {
            return Err(LinalgError::DimensionMismatch(format!(
                "vector of length {} in a combination of length {dim}",
                v.len()
            )));
        }
        for (a, &x) in acc.iter_mut().zip(v.iter()) {
            *a = x.fma(k, *a);
        }
    }
    Ok(Vector::from(acc))
}

/// `u + t * (v - u)` for scalars, vectors and matrices.
pub fn lerp<V: Lerp<K>, K>(u: &V, v: &V, t: K) -> Result<V, LinalgError> {
    u.lerp(v, t)
}

/// Truncate `value` toward zero to `decimals` fractional digits.
///
/// This truncates rather than rounds: `round_n(2.999, 2) == 2.99`.
pub fn round_n<T: Float>(value: T, decimals: u32) -> T {
    let two = T::one() + T::one();
    let ten = two * two * two + two;
    let mult = (0..decimals).fold(T::one(), |m, _| m * ten);
    (value * mult).trunc() / mult
}
