//! Row/column utilities and Gauss-Jordan elimination.
//!
//! The reduction follows the textbook procedure: for each column, take the
//! first row at or below the current pivot row with a nonzero entry, swap it
//! into place, normalize it so the pivot is one, then clear the column from
//! every other row. Pivots are chosen top-down with no partial pivoting, so
//! floating-point inputs can accumulate rounding error.
//!
//! Normalizing a pivot row uses `K`'s own division. For integer scalars that
//! division truncates, so the reduced form, `rank` and `solve` are only exact
//! over the integers when every pivot divides its row. Use a float scalar for
//! general input.
//!
//! # References
//! - Strang, G. (2016). Introduction to Linear Algebra, ch. 2-3.

use crate::config::options::ReduceOptions;
use crate::core::traits::Scalar;
use crate::error::LinalgError;
use crate::matrix::dense::Matrix;
use crate::matrix::vector::Vector;

impl<K: Scalar> Matrix<K> {
    /// Swap rows `a` and `b`.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<(), LinalgError> {
        self.check_row(a)?;
        self.check_row(b)?;
        self.swap_rows_unchecked(a, b);
        Ok(())
    }

    /// Swap columns `a` and `b`.
    pub fn swap_columns(&mut self, a: usize, b: usize) -> Result<(), LinalgError> {
        self.check_col(a)?;
        self.check_col(b)?;
        for i in 0..self.height {
            let row = i * self.width;
            self.data.swap(row + a, row + b);
        }
        Ok(())
    }

    /// Divide row `m` by `divisor`.
    ///
    /// A zero divisor follows `K`'s own division semantics (infinities for
    /// floats, a panic for integers).
    pub fn divide_row(&mut self, m: usize, divisor: K) -> Result<(), LinalgError> {
        self.check_row(m)?;
        self.divide_row_unchecked(m, divisor);
        Ok(())
    }

    /// Divide column `n` by `divisor`.
    pub fn divide_column(&mut self, n: usize, divisor: K) -> Result<(), LinalgError> {
        self.check_col(n)?;
        for i in 0..self.height {
            let x = &mut self.data[i * self.width + n];
            *x = *x / divisor;
        }
        Ok(())
    }

    /// `row[target] += factor * row[source]`, fused.
    pub fn fma_row(&mut self, target: usize, source: usize, factor: K) -> Result<(), LinalgError> {
        self.check_row(target)?;
        self.check_row(source)?;
        self.fma_row_unchecked(target, source, factor);
        Ok(())
    }

    /// `col[target] += factor * col[source]`, fused.
    pub fn fma_column(&mut self, target: usize, source: usize, factor: K) -> Result<(), LinalgError> {
        self.check_col(target)?;
        self.check_col(source)?;
        for i in 0..self.height {
            let row = i * self.width;
            self.data[row + target] = factor.fma(self.data[row + source], self.data[row + target]);
        }
        Ok(())
    }

    /// Reduce to reduced row-echelon form in place, exact zero test.
    pub fn row_echelon_in_place(&mut self) {
        self.row_echelon_in_place_with(&ReduceOptions::default());
    }

    /// Reduce to reduced row-echelon form in place.
    pub fn row_echelon_in_place_with(&mut self, opts: &ReduceOptions) {
        let mut col = 0;
        for row in 0..self.height {
            // first usable pivot at or below `row`, skipping all-zero columns
            let pivot = loop {
                if col >= self.width {
                    return;
                }
                match (row..self.height).find(|&i| !opts.is_zero(self[(i, col)])) {
                    Some(i) => break i,
                    None => col += 1,
                }
            };
            log::trace!("pivot at ({pivot}, {col}) for row {row}");

            self.swap_rows_unchecked(pivot, row);
            let lead = self[(row, col)];
            self.divide_row_unchecked(row, lead);
            for i in 0..self.height {
                if i != row {
                    let factor = -self[(i, col)];
                    self.fma_row_unchecked(i, row, factor);
                }
            }
            col += 1;
        }
    }

    /// Reduced row-echelon form as a new matrix.
    pub fn row_echelon(&self) -> Self {
        self.row_echelon_with(&ReduceOptions::default())
    }

    pub fn row_echelon_with(&self, opts: &ReduceOptions) -> Self {
        let mut out = self.clone();
        out.row_echelon_in_place_with(opts);
        out
    }

    /// Number of nonzero rows of the reduced row-echelon form.
    ///
    /// Integer scalars reduce with truncating division and can overstate the
    /// rank: `[[2, 1], [4, 2]]` has rank 2 as `i32` but rank 1 as `f64`.
    pub fn rank(&self) -> usize {
        self.rank_with(&ReduceOptions::default())
    }

    pub fn rank_with(&self, opts: &ReduceOptions) -> usize {
        let reduced = self.row_echelon_with(opts);
        (0..reduced.height)
            .filter(|&i| reduced.row(i).iter().any(|&x| !opts.is_zero(x)))
            .count()
    }

    /// Solve `self · x = b` by reducing the augmented matrix `[self | b]`.
    ///
    /// `self` must be square and non-singular. With integer scalars the
    /// reduction truncates, so the result is exact only for integral solutions
    /// reachable without remainders.
    pub fn solve(&self, b: &Vector<K>) -> Result<Vector<K>, LinalgError> {
        self.check_square()?;
        if b.len() != self.height {
            return Err(LinalgError::IncompatibleShape { lhs: self.shape(), rhs: b.shape() });
        }
        let n = self.height;
        let reduced = self.augment(b.as_matrix())?.row_echelon();
        // full rank means the left block reduced to the identity
        if (0..n).any(|i| reduced[(i, i)] != K::one()) {
            return Err(LinalgError::Singular);
        }
        Ok(Vector::from((0..n).map(|i| reduced[(i, n)]).collect::<Vec<_>>()))
    }

    fn swap_rows_unchecked(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let w = self.width;
        let (head, tail) = self.data.split_at_mut(hi * w);
        head[lo * w..(lo + 1) * w].swap_with_slice(&mut tail[..w]);
    }

    fn divide_row_unchecked(&mut self, m: usize, divisor: K) {
        let w = self.width;
        for x in &mut self.data[m * w..(m + 1) * w] {
            *x = *x / divisor;
        }
    }

    fn fma_row_unchecked(&mut self, target: usize, source: usize, factor: K) {
        let w = self.width;
        for j in 0..w {
            let s = self.data[source * w + j];
            let t = &mut self.data[target * w + j];
            *t = factor.fma(s, *t);
        }
    }

    fn check_row(&self, row: usize) -> Result<(), LinalgError> {
        if row < self.height {
            Ok(())
        } else {
            Err(LinalgError::OutOfRange { row, col: 0, shape: self.shape() })
        }
    }

    fn check_col(&self, col: usize) -> Result<(), LinalgError> {
        if col < self.width {
            Ok(())
        } else {
            Err(LinalgError::OutOfRange { row: 0, col, shape: self.shape() })
        }
    }
}
