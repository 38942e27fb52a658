//! Column vector facade over [`Matrix`].
//!
//! A `Vector<K>` owns a single `len × 1` matrix. Shape handling and
//! arithmetic delegate to the inner matrix; this type adds 1-D indexing,
//! the dot product and the three classic norms.

use crate::core::traits::{Lerp, Scalar};
use crate::error::LinalgError;
use crate::matrix::dense::Matrix;

/// Column vector (an `N × 1` matrix).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector<K> {
    matrix: Matrix<K>,
}

impl<K: Scalar> Vector<K> {
    /// Zero vector of length `len`.
    pub fn zeros(len: usize) -> Self {
        Vector { matrix: Matrix::zeros(len, 1) }
    }

    pub fn filled(len: usize, value: K) -> Self {
        Vector { matrix: Matrix::filled(len, 1, value) }
    }

    /// First `len` values of `data`; fails when `data` is shorter.
    pub fn from_slice(len: usize, data: &[K]) -> Result<Self, LinalgError> {
        Ok(Vector { matrix: Matrix::from_slice(len, 1, data)? })
    }

    /// Wrap a one-column matrix. Any other width is a
    /// [`LinalgError::DimensionMismatch`].
    pub fn from_matrix(matrix: Matrix<K>) -> Result<Self, LinalgError> {
        if matrix.width() != 1 {
            return Err(LinalgError::DimensionMismatch(format!(
                "a {}x{} matrix is not a column vector",
                matrix.height(),
                matrix.width()
            )));
        }
        Ok(Vector { matrix })
    }

    /// Keep column 0 of `matrix`, dropping the rest.
    pub fn from_matrix_lossy(matrix: &Matrix<K>) -> Self {
        let mut matrix = matrix.clone();
        matrix.resize(matrix.height(), 1, K::zero());
        Vector { matrix }
    }

    /// Checked element access.
    pub fn at(&self, i: usize) -> Result<&K, LinalgError> {
        self.matrix.at(i, 0)
    }

    pub fn at_mut(&mut self, i: usize) -> Result<&mut K, LinalgError> {
        self.matrix.at_mut(i, 0)
    }

    /// Resize to `len`, filling new entries with `value`.
    pub fn resize(&mut self, len: usize, value: K) {
        self.matrix.resize(len, 1, value);
    }

    /// Copy of the underlying `len × 1` matrix.
    pub fn to_matrix(&self) -> Matrix<K> {
        self.matrix.clone()
    }

    pub fn try_add(&self, rhs: &Vector<K>) -> Result<Self, LinalgError> {
        Ok(Vector { matrix: self.matrix.try_add(&rhs.matrix)? })
    }

    pub fn try_sub(&self, rhs: &Vector<K>) -> Result<Self, LinalgError> {
        Ok(Vector { matrix: self.matrix.try_sub(&rhs.matrix)? })
    }

    pub fn add_in_place(&mut self, rhs: &Vector<K>) -> Result<(), LinalgError> {
        self.matrix.add_in_place(&rhs.matrix)
    }

    pub fn sub_in_place(&mut self, rhs: &Vector<K>) -> Result<(), LinalgError> {
        self.matrix.sub_in_place(&rhs.matrix)
    }

    pub fn scale(&self, k: K) -> Self {
        Vector { matrix: self.matrix.scale(k) }
    }

    pub fn scale_in_place(&mut self, k: K) {
        self.matrix.scale_in_place(k);
    }

    /// Dot product, accumulated with fused multiply-add.
    pub fn dot(&self, other: &Vector<K>) -> Result<K, LinalgError> {
        if self.len() != other.len() {
            return Err(LinalgError::DimensionMismatch(format!(
                "dot product of vectors of length {} and {}",
                self.len(),
                other.len()
            )));
        }
        Ok(self.iter().zip(other.iter()).fold(K::zero(), |acc, (&a, &b)| a.fma(b, acc)))
    }

    /// Manhattan norm: sum of absolute values.
    ///
    /// # Panics
    /// Panics on an integer `MIN` entry when overflow checks are enabled,
    /// see [`Scalar::absolute`].
    pub fn norm_1(&self) -> K {
        self.iter().fold(K::zero(), |acc, &x| acc + x.absolute())
    }

    /// Euclidean norm, always computed in `f64`.
    pub fn norm_2(&self) -> f64 {
        self.iter()
            .map(|&x| x.as_f64())
            .fold(0.0, |acc: f64, x| x.mul_add(x, acc))
            .sqrt()
    }

    /// Supremum norm: largest absolute value.
    ///
    /// # Panics
    /// Panics on an integer `MIN` entry when overflow checks are enabled,
    /// see [`Scalar::absolute`].
    pub fn norm_inf(&self) -> K {
        self.iter().fold(K::zero(), |acc, &x| {
            let mag = x.absolute();
            if mag > acc { mag } else { acc }
        })
    }
}

impl<K> Vector<K> {
    pub fn len(&self) -> usize {
        self.matrix.height()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(len, 1)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.matrix.height(), 1)
    }

    pub fn has(&self, i: usize) -> bool {
        self.matrix.has(i, 0)
    }

    pub fn as_slice(&self) -> &[K] {
        self.matrix.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [K] {
        self.matrix.as_mut_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.as_slice().iter()
    }

    /// Borrow the underlying `len × 1` matrix.
    pub fn as_matrix(&self) -> &Matrix<K> {
        &self.matrix
    }

    pub fn into_matrix(self) -> Matrix<K> {
        self.matrix
    }
}

impl<K> std::ops::Index<usize> for Vector<K> {
    type Output = K;

    fn index(&self, i: usize) -> &K {
        &self.as_slice()[i]
    }
}

impl<K> std::ops::IndexMut<usize> for Vector<K> {
    fn index_mut(&mut self, i: usize) -> &mut K {
        &mut self.as_mut_slice()[i]
    }
}

impl<K: Scalar> From<Vec<K>> for Vector<K> {
    fn from(data: Vec<K>) -> Self {
        let len = data.len();
        Vector { matrix: Matrix { height: len, width: 1, data } }
    }
}

impl<K: Scalar> TryFrom<Matrix<K>> for Vector<K> {
    type Error = LinalgError;

    fn try_from(matrix: Matrix<K>) -> Result<Self, LinalgError> {
        Vector::from_matrix(matrix)
    }
}

impl<K: Scalar> Lerp<K> for Vector<K> {
    fn lerp(&self, to: &Self, t: K) -> Result<Self, LinalgError> {
        Ok(Vector { matrix: self.matrix.lerp(&to.matrix, t)? })
    }
}
