//! Options for row reduction.
//!
//! This module provides the `ReduceOptions` struct, which controls what the
//! Gauss-Jordan reduction treats as a zero entry when it searches for pivots
//! and when rank counts nonzero rows.

use crate::core::traits::Scalar;

/// Row-reduction parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReduceOptions {
    /// Entries with `|x| <= pivot_tol` count as zero. `0.0` means exact comparison.
    pub pivot_tol: f64,
}

impl ReduceOptions {
    pub fn with_pivot_tol(mut self, pivot_tol: f64) -> Self {
        self.pivot_tol = pivot_tol;
        self
    }

    /// Whether `x` is zero under these options.
    pub fn is_zero<K: Scalar>(&self, x: K) -> bool {
        x == K::zero() || (self.pivot_tol > 0.0 && x.as_f64().abs() <= self.pivot_tol)
    }
}

impl Default for ReduceOptions {
    fn default() -> Self {
        ReduceOptions { pivot_tol: 0.0 }
    }
}
