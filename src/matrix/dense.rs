//! Dense row-major matrix storage.
//!
//! This module provides `Matrix<K>`, an owned `height × width` buffer of scalars
//! laid out row by row (`index = row * width + col`), together with its
//! constructors, element access, shape queries, structural operations and the
//! shape-checked arithmetic the rest of the crate composes from.
//!
//! The reduction, rank and solve kernels live in [`echelon`](super::echelon);
//! the determinant family lives in [`determinant`](super::determinant).

use crate::core::traits::Scalar;
use crate::error::LinalgError;
use crate::matrix::vector::Vector;

/// Dense matrix over a scalar `K`.
///
/// The buffer length always equals `height * width`. A matrix with a zero
/// dimension is empty but still valid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<K> {
    pub(crate) height: usize,
    pub(crate) width: usize,
    pub(crate) data: Vec<K>,
}

impl<K: Scalar> Matrix<K> {
    /// `height × width` matrix filled with zero.
    pub fn zeros(height: usize, width: usize) -> Self {
        Self::filled(height, width, K::zero())
    }

    /// `height × width` matrix filled with `value`.
    ///
    /// # Panics
    /// Panics if `height * width` overflows `usize`.
    pub fn filled(height: usize, width: usize, value: K) -> Self {
        let size = checked_size(height, width).unwrap_or_else(|e| panic!("{e}"));
        Matrix { height, width, data: vec![value; size] }
    }

    /// `n × n` identity.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { K::one() } else { K::zero() })
    }

    /// Build from a generator called once per cell, row by row.
    ///
    /// # Panics
    /// Panics if `height * width` overflows `usize`.
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> K) -> Self {
        let size = checked_size(height, width).unwrap_or_else(|e| panic!("{e}"));
        let mut data = Vec::with_capacity(size);
        for i in 0..height {
            for j in 0..width {
                data.push(f(i, j));
            }
        }
        Matrix { height, width, data }
    }

    /// Build from row-major values.
    ///
    /// Fails with [`LinalgError::MalformedInput`] when fewer than
    /// `height * width` values are given or when `height * width` overflows;
    /// surplus values are dropped.
    pub fn from_vec(height: usize, width: usize, mut data: Vec<K>) -> Result<Self, LinalgError> {
        let size = checked_size(height, width)?;
        if data.len() < size {
            return Err(LinalgError::MalformedInput(format!(
                "expected {size} values for a {height}x{width} matrix, got {}",
                data.len()
            )));
        }
        data.truncate(size);
        Ok(Matrix { height, width, data })
    }

    /// Build from row-major values, copying.
    pub fn from_slice(height: usize, width: usize, data: &[K]) -> Result<Self, LinalgError> {
        Self::from_vec(height, width, data.to_vec())
    }

    /// Build from nested rows. Height is `rows.len()`, width the first row's length.
    ///
    /// Every row must have the same length, else [`LinalgError::MalformedInput`].
    pub fn from_rows<R: AsRef<[K]>>(rows: &[R]) -> Result<Self, LinalgError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(height * width);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(LinalgError::MalformedInput(format!(
                    "row {i} has {} values, expected {width}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix { height, width, data })
    }

    /// Checked element access.
    pub fn at(&self, row: usize, col: usize) -> Result<&K, LinalgError> {
        let pos = self.position(row, col)?;
        Ok(&self.data[pos])
    }

    /// Checked mutable element access.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut K, LinalgError> {
        let pos = self.position(row, col)?;
        Ok(&mut self.data[pos])
    }

    /// Unchecked element access.
    ///
    /// # Safety
    /// `row < height` and `col < width` must hold.
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &K {
        debug_assert!(self.has(row, col));
        unsafe { self.data.get_unchecked(row * self.width + col) }
    }

    /// Unchecked mutable element access.
    ///
    /// # Safety
    /// `row < height` and `col < width` must hold.
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut K {
        debug_assert!(self.has(row, col));
        let width = self.width;
        unsafe { self.data.get_unchecked_mut(row * width + col) }
    }

    /// Resize to `height × width`, keeping the overlapping region and filling
    /// new cells with `value`.
    pub fn resize(&mut self, height: usize, width: usize, value: K) {
        let resized = Self::from_fn(height, width, |i, j| {
            if self.has(i, j) { self[(i, j)] } else { value }
        });
        *self = resized;
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.width, self.height, |i, j| self[(j, i)])
    }

    /// Sum of the main diagonal. Square matrices only.
    pub fn trace(&self) -> Result<K, LinalgError> {
        self.check_square()?;
        Ok((0..self.width).fold(K::zero(), |acc, i| acc + self[(i, i)]))
    }

    /// Copy with every entry replaced by its absolute value.
    pub fn absolute(&self) -> Self {
        self.map(K::absolute)
    }

    /// Horizontal concatenation `[self | other]`.
    pub fn augment(&self, other: &Matrix<K>) -> Result<Self, LinalgError> {
        if self.height != other.height {
            return Err(LinalgError::ShapeMismatch { lhs: self.shape(), rhs: other.shape() });
        }
        let width = self.width + other.width;
        Ok(Self::from_fn(self.height, width, |i, j| {
            if j < self.width { self[(i, j)] } else { other[(i, j - self.width)] }
        }))
    }

    /// Elementwise sum. Shapes must match.
    pub fn try_add(&self, rhs: &Matrix<K>) -> Result<Self, LinalgError> {
        let mut out = self.clone();
        out.add_in_place(rhs)?;
        Ok(out)
    }

    /// Elementwise difference. Shapes must match.
    pub fn try_sub(&self, rhs: &Matrix<K>) -> Result<Self, LinalgError> {
        let mut out = self.clone();
        out.sub_in_place(rhs)?;
        Ok(out)
    }

    pub fn add_in_place(&mut self, rhs: &Matrix<K>) -> Result<(), LinalgError> {
        self.check_same_shape(rhs)?;
        for (a, &b) in self.data.iter_mut().zip(&rhs.data) {
            *a = *a + b;
        }
        Ok(())
    }

    pub fn sub_in_place(&mut self, rhs: &Matrix<K>) -> Result<(), LinalgError> {
        self.check_same_shape(rhs)?;
        for (a, &b) in self.data.iter_mut().zip(&rhs.data) {
            *a = *a - b;
        }
        Ok(())
    }

    /// Scalar multiple.
    pub fn scale(&self, k: K) -> Self {
        self.map(|x| x * k)
    }

    pub fn scale_in_place(&mut self, k: K) {
        for x in &mut self.data {
            *x = *x * k;
        }
    }

    /// Matrix product, accumulated with fused multiply-add.
    ///
    /// Requires `self.width() == rhs.height()`.
    pub fn try_mul(&self, rhs: &Matrix<K>) -> Result<Self, LinalgError> {
        if self.width != rhs.height {
            return Err(LinalgError::IncompatibleShape { lhs: self.shape(), rhs: rhs.shape() });
        }
        Ok(Self::from_fn(self.height, rhs.width, |i, j| {
            (0..self.width).fold(K::zero(), |acc, p| self[(i, p)].fma(rhs[(p, j)], acc))
        }))
    }

    /// Matrix-vector product. Requires `self.width() == v.len()`.
    pub fn try_mul_vector(&self, v: &Vector<K>) -> Result<Vector<K>, LinalgError> {
        if self.width != v.len() {
            return Err(LinalgError::IncompatibleShape { lhs: self.shape(), rhs: v.shape() });
        }
        let column = self.try_mul(v.as_matrix())?;
        Vector::from_matrix(column)
    }

    /// Convert to a vector by copy. Width must be exactly one.
    pub fn to_vector(&self) -> Result<Vector<K>, LinalgError> {
        Vector::from_matrix(self.clone())
    }

    /// Convert to a vector, consuming the matrix. Width must be exactly one.
    pub fn into_vector(self) -> Result<Vector<K>, LinalgError> {
        Vector::from_matrix(self)
    }

    pub(crate) fn map(&self, f: impl Fn(K) -> K) -> Self {
        Matrix { height: self.height, width: self.width, data: self.data.iter().map(|&x| f(x)).collect() }
    }

    pub(crate) fn check_square(&self) -> Result<(), LinalgError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(LinalgError::NotSquare { height: self.height, width: self.width })
        }
    }

    pub(crate) fn check_same_shape(&self, other: &Matrix<K>) -> Result<(), LinalgError> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(LinalgError::ShapeMismatch { lhs: self.shape(), rhs: other.shape() })
        }
    }

    fn position(&self, row: usize, col: usize) -> Result<usize, LinalgError> {
        if self.has(row, col) {
            Ok(row * self.width + col)
        } else {
            Err(LinalgError::OutOfRange { row, col, shape: self.shape() })
        }
    }
}

impl<K> Matrix<K> {
    /// `(height, width)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of stored values.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    pub fn is_square(&self) -> bool {
        self.height == self.width
    }

    /// Whether `(row, col)` lies inside the matrix.
    pub fn has(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Row-major view of the buffer.
    pub fn as_slice(&self) -> &[K] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [K] {
        &mut self.data
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    /// Panics if `i >= height`.
    pub fn row(&self, i: usize) -> &[K] {
        &self.data[i * self.width..(i + 1) * self.width]
    }

    pub fn into_vec(self) -> Vec<K> {
        self.data
    }
}

/// Buffer length of a `height × width` matrix.
fn checked_size(height: usize, width: usize) -> Result<usize, LinalgError> {
    height
        .checked_mul(width)
        .ok_or_else(|| LinalgError::MalformedInput(format!("{height}x{width} matrix is too large to allocate")))
}

impl<K> std::ops::Index<(usize, usize)> for Matrix<K> {
    type Output = K;

    fn index(&self, (row, col): (usize, usize)) -> &K {
        debug_assert!(col < self.width, "column {col} out of range for width {}", self.width);
        &self.data[row * self.width + col]
    }
}

impl<K> std::ops::IndexMut<(usize, usize)> for Matrix<K> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut K {
        debug_assert!(col < self.width, "column {col} out of range for width {}", self.width);
        &mut self.data[row * self.width + col]
    }
}

impl<K> From<Vector<K>> for Matrix<K> {
    fn from(v: Vector<K>) -> Self {
        v.into_matrix()
    }
}

impl<K: Clone> From<&Vector<K>> for Matrix<K> {
    fn from(v: &Vector<K>) -> Self {
        v.as_matrix().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[f64]]) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn constructors_agree() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let c = Matrix::from_fn(2, 2, |i, j| (i * 2 + j + 1) as f64);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(Matrix::filled(2, 3, 7i32).as_slice(), &[7; 6]);
        assert_eq!(Matrix::<i32>::zeros(1, 2).as_slice(), &[0, 0]);
    }

    #[test]
    fn short_flat_data_is_malformed() {
        let err = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, LinalgError::MalformedInput(_)));
        let long = Matrix::from_vec(1, 2, vec![1, 2, 3]).unwrap();
        assert_eq!(long.as_slice(), &[1, 2]);
    }

    #[test]
    fn oversized_shapes_are_rejected() {
        let err = Matrix::<i32>::from_vec(usize::MAX / 2 + 1, 2, vec![]).unwrap_err();
        assert!(matches!(err, LinalgError::MalformedInput(_)));
        assert!(Matrix::<i32>::from_slice(usize::MAX, usize::MAX, &[]).is_err());
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn oversized_fill_panics() {
        let _ = Matrix::<i32>::zeros(usize::MAX / 2 + 1, 2);
    }

    #[test]
    fn ragged_rows_are_malformed() {
        let rows: Vec<Vec<i32>> = vec![vec![1, 2], vec![3]];
        assert!(matches!(Matrix::from_rows(&rows), Err(LinalgError::MalformedInput(_))));
    }

    #[test]
    fn empty_matrices_are_valid() {
        let rows: Vec<Vec<f64>> = Vec::new();
        let e = Matrix::from_rows(&rows).unwrap();
        assert_eq!(e.shape(), (0, 0));
        assert!(e.is_empty());
        assert!(Matrix::<f64>::zeros(3, 0).is_empty());
        assert_eq!(e.transpose(), e);
    }

    #[test]
    fn checked_access_rejects_one_past_end() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(*a.at(1, 1).unwrap(), 4.0);
        assert!(matches!(a.at(2, 0), Err(LinalgError::OutOfRange { row: 2, col: 0, .. })));
        assert!(a.at(0, 2).is_err());
        assert!(a.at(1, 2).is_err());
    }

    #[test]
    fn at_mut_writes_through() {
        let mut a = Matrix::<i32>::zeros(2, 3);
        *a.at_mut(1, 2).unwrap() = 9;
        assert_eq!(a[(1, 2)], 9);
        assert_eq!(unsafe { *a.get_unchecked(1, 2) }, 9);
    }

    #[test]
    fn resize_keeps_overlap() {
        let mut a = Matrix::<i32>::from_rows(&[[1, 2], [3, 4]]).unwrap();
        a.resize(3, 1, -1);
        assert_eq!(a, Matrix::from_rows(&[[1], [3], [-1]]).unwrap());
        a.resize(2, 2, 0);
        assert_eq!(a, Matrix::from_rows(&[[1, 0], [3, 0]]).unwrap());
    }

    #[test]
    fn transpose_and_trace() {
        let d = m(&[&[0.0, 3.0, 6.0, 9.0], &[1.0, 2.0, 4.0, 8.0]]);
        let dt = m(&[&[0.0, 1.0], &[3.0, 2.0], &[6.0, 4.0], &[9.0, 8.0]]);
        assert_eq!(d.transpose(), dt);
        assert_eq!(d.transpose().transpose(), d);

        let b = m(&[&[2.0, -5.0, 0.0], &[4.0, 3.0, 7.0], &[-2.0, 3.0, 4.0]]);
        assert_eq!(b.trace().unwrap(), 9.0);
        assert!(matches!(d.trace(), Err(LinalgError::NotSquare { height: 2, width: 4 })));
    }

    #[test]
    fn shape_checked_arithmetic() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[7.0, 4.0], &[-2.0, 2.0]]);
        assert_eq!(a.try_add(&b).unwrap(), m(&[&[8.0, 6.0], &[1.0, 6.0]]));
        assert_eq!(a.try_sub(&b).unwrap(), m(&[&[-6.0, -2.0], &[5.0, 2.0]]));
        assert_eq!(b.scale(0.5), m(&[&[3.5, 2.0], &[-1.0, 1.0]]));

        let wide = Matrix::<f64>::zeros(2, 3);
        assert!(matches!(a.try_add(&wide), Err(LinalgError::ShapeMismatch { .. })));
        let mut untouched = a.clone();
        assert!(untouched.sub_in_place(&wide).is_err());
        assert_eq!(untouched, a);
    }

    #[test]
    fn products() {
        let c = m(&[&[3.0, -5.0], &[6.0, 8.0]]);
        let d = m(&[&[4.0, 1.0, 6.0, 0.5], &[8.0, 3.0, 20.0, 100.0]]);
        let e = m(&[&[3.0, 2.0], &[2.0, 6.0], &[6.0, 2.0], &[2.0, 3.0]]);
        assert_eq!(c.try_mul(&d).unwrap(), m(&[&[-28.0, -12.0, -82.0, -498.5], &[88.0, 30.0, 196.0, 803.0]]));
        assert_eq!(d.try_mul(&e).unwrap(), m(&[&[51.0, 27.5], &[350.0, 374.0]]));
        assert!(matches!(c.try_mul(&e), Err(LinalgError::IncompatibleShape { lhs: (2, 2), rhs: (4, 2) })));
    }

    #[test]
    fn matrix_vector_product_has_height_rows() {
        let a = m(&[&[1.0, 0.0, 2.0], &[0.0, 1.0, 1.0]]);
        let v = Vector::from(vec![1.0, 2.0, 3.0]);
        assert_eq!(a.try_mul_vector(&v).unwrap(), Vector::from(vec![7.0, 5.0]));
        assert!(a.try_mul_vector(&Vector::from(vec![1.0, 2.0])).is_err());
    }

    #[test]
    fn augment_and_absolute() {
        let a = Matrix::<i32>::from_rows(&[[1, -2], [-3, 4]]).unwrap();
        let b = Matrix::from_rows(&[[5], [6]]).unwrap();
        assert_eq!(a.augment(&b).unwrap(), Matrix::from_rows(&[[1, -2, 5], [-3, 4, 6]]).unwrap());
        assert_eq!(a.absolute(), Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap());
        assert!(a.augment(&Matrix::zeros(1, 1)).is_err());
    }

    #[test]
    fn vector_conversions() {
        let col = Matrix::<i32>::from_rows(&[[1], [2]]).unwrap();
        let v = col.to_vector().unwrap();
        assert_eq!(Matrix::from(&v), col);
        assert!(Matrix::<i32>::zeros(2, 2).into_vector().is_err());
    }
}
