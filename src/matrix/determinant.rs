//! Determinant, minors, cofactors, adjoint and inverse.
//!
//! Determinants up to 3×3 use closed forms built on [`Scalar::cross`].
//! Larger matrices use recursive cofactor expansion along the first row,
//! which costs O(n!) and is only practical for small inputs. An LU-based
//! determinant would scale, but the expansion keeps exact results for
//! integer-valued inputs.

use crate::core::traits::Scalar;
use crate::error::LinalgError;
use crate::matrix::dense::Matrix;

impl<K: Scalar> Matrix<K> {
    /// Determinant of a square matrix. The 0×0 determinant is one.
    pub fn determinant(&self) -> Result<K, LinalgError> {
        self.check_square()?;
        Ok(self.det_square())
    }

    /// Copy with row `row` and column `col` removed.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self, LinalgError> {
        if !self.has(row, col) {
            return Err(LinalgError::OutOfRange { row, col, shape: self.shape() });
        }
        Ok(self.minor_unchecked(row, col))
    }

    /// Matrix of signed minors: `(-1)^(i+j) · det(minor(i, j))`.
    pub fn cofactor(&self) -> Result<Self, LinalgError> {
        self.check_square()?;
        Ok(Self::from_fn(self.height, self.width, |i, j| {
            let det = self.minor_unchecked(i, j).det_square();
            if (i + j) % 2 == 0 { det } else { -det }
        }))
    }

    /// Transpose of the cofactor matrix.
    pub fn adjoint(&self) -> Result<Self, LinalgError> {
        Ok(self.cofactor()?.transpose())
    }

    /// Adjoint divided by the determinant.
    ///
    /// Fails with [`LinalgError::Singular`] when the determinant is zero.
    /// For integer scalars each entry is truncated by integer division.
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        self.check_square()?;
        let det = self.det_square();
        if det == K::zero() {
            log::debug!("refusing to invert singular {}x{} matrix", self.height, self.width);
            return Err(LinalgError::Singular);
        }
        Ok(self.adjoint()?.map(|x| x / det))
    }

    fn det_square(&self) -> K {
        let at = |i: usize, j: usize| self[(i, j)];
        match self.width {
            0 => K::one(),
            1 => at(0, 0),
            2 => K::cross(at(0, 0), at(0, 1), at(1, 0), at(1, 1)),
            3 => {
                at(0, 0) * K::cross(at(1, 1), at(1, 2), at(2, 1), at(2, 2))
                    - at(1, 0) * K::cross(at(0, 1), at(0, 2), at(2, 1), at(2, 2))
                    + at(2, 0) * K::cross(at(0, 1), at(0, 2), at(1, 1), at(1, 2))
            }
            n => {
                log::debug!("cofactor expansion of a {n}x{n} determinant");
                (0..n).fold(K::zero(), |acc, j| {
                    let sub = self.minor_unchecked(0, j).det_square();
                    let signed = if j % 2 == 0 { sub } else { -sub };
                    signed.fma(at(0, j), acc)
                })
            }
        }
    }

    fn minor_unchecked(&self, row: usize, col: usize) -> Self {
        Self::from_fn(self.height - 1, self.width - 1, |i, j| {
            let si = if i < row { i } else { i + 1 };
            let sj = if j < col { j } else { j + 1 };
            self[(si, sj)]
        })
    }
}
