//! `std::ops` overloads for [`Matrix`] and [`Vector`].
//!
//! Operators delegate to the shape-checked `try_*` methods and panic on a
//! shape contract violation, the same way slice indexing panics out of
//! bounds. Use the `try_*` methods to handle mismatches as values.

use crate::core::traits::{Lerp, Scalar};
use crate::error::LinalgError;
use crate::matrix::dense::Matrix;
use crate::matrix::vector::Vector;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

fn checked<T>(result: Result<T, LinalgError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

macro_rules! impl_binary {
    ($ty:ident, $trait:ident, $method:ident, $try:ident) => {
        impl<K: Scalar> $trait<&$ty<K>> for &$ty<K> {
            type Output = $ty<K>;

            /// # Panics
            /// Panics when the shapes differ.
            fn $method(self, rhs: &$ty<K>) -> $ty<K> {
                checked(self.$try(rhs))
            }
        }

        impl<K: Scalar> $trait<$ty<K>> for $ty<K> {
            type Output = $ty<K>;

            fn $method(self, rhs: $ty<K>) -> $ty<K> {
                (&self).$method(&rhs)
            }
        }

        impl<K: Scalar> $trait<&$ty<K>> for $ty<K> {
            type Output = $ty<K>;

            fn $method(self, rhs: &$ty<K>) -> $ty<K> {
                (&self).$method(rhs)
            }
        }
    };
}

macro_rules! impl_assign {
    ($ty:ident, $trait:ident, $method:ident, $inplace:ident) => {
        impl<K: Scalar> $trait<&$ty<K>> for $ty<K> {
            fn $method(&mut self, rhs: &$ty<K>) {
                checked(self.$inplace(rhs))
            }
        }

        impl<K: Scalar> $trait<$ty<K>> for $ty<K> {
            fn $method(&mut self, rhs: $ty<K>) {
                checked(self.$inplace(&rhs))
            }
        }
    };
}

macro_rules! impl_scalar_ops {
    ($ty:ident) => {
        impl<K: Scalar> Mul<K> for &$ty<K> {
            type Output = $ty<K>;

            fn mul(self, k: K) -> $ty<K> {
                self.scale(k)
            }
        }

        impl<K: Scalar> Mul<K> for $ty<K> {
            type Output = $ty<K>;

            fn mul(mut self, k: K) -> $ty<K> {
                self.scale_in_place(k);
                self
            }
        }

        impl<K: Scalar> MulAssign<K> for $ty<K> {
            fn mul_assign(&mut self, k: K) {
                self.scale_in_place(k);
            }
        }

        impl<K: Scalar> Neg for &$ty<K> {
            type Output = $ty<K>;

            fn neg(self) -> $ty<K> {
                self.scale(-K::one())
            }
        }

        impl<K: Scalar> Neg for $ty<K> {
            type Output = $ty<K>;

            fn neg(self) -> $ty<K> {
                -&self
            }
        }
    };
}

// scalar on the left only works for concrete scalar types
macro_rules! impl_left_scalar_mul {
    ($($t:ty),*) => {$(
        impl Mul<Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                rhs * self
            }
        }

        impl Mul<&Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                rhs.scale(self)
            }
        }

        impl Mul<Vector<$t>> for $t {
            type Output = Vector<$t>;

            fn mul(self, rhs: Vector<$t>) -> Vector<$t> {
                rhs * self
            }
        }

        impl Mul<&Vector<$t>> for $t {
            type Output = Vector<$t>;

            fn mul(self, rhs: &Vector<$t>) -> Vector<$t> {
                rhs.scale(self)
            }
        }
    )*};
}

impl_binary!(Matrix, Add, add, try_add);
impl_binary!(Matrix, Sub, sub, try_sub);
impl_binary!(Matrix, Mul, mul, try_mul);
impl_binary!(Vector, Add, add, try_add);
impl_binary!(Vector, Sub, sub, try_sub);
impl_assign!(Matrix, AddAssign, add_assign, add_in_place);
impl_assign!(Matrix, SubAssign, sub_assign, sub_in_place);
impl_assign!(Vector, AddAssign, add_assign, add_in_place);
impl_assign!(Vector, SubAssign, sub_assign, sub_in_place);
impl_scalar_ops!(Matrix);
impl_scalar_ops!(Vector);
impl_left_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, isize);

impl<K: Scalar> Mul<&Vector<K>> for &Matrix<K> {
    type Output = Vector<K>;

    /// # Panics
    /// Panics when `self.width() != rhs.len()`.
    fn mul(self, rhs: &Vector<K>) -> Vector<K> {
        checked(self.try_mul_vector(rhs))
    }
}

impl<K: Scalar> Mul<Vector<K>> for Matrix<K> {
    type Output = Vector<K>;

    fn mul(self, rhs: Vector<K>) -> Vector<K> {
        &self * &rhs
    }
}

impl<K: Scalar> Lerp<K> for Matrix<K> {
    /// `self + t * (to - self)`, one fused multiply-add per entry.
    fn lerp(&self, to: &Self, t: K) -> Result<Self, LinalgError> {
        self.check_same_shape(to)?;
        let data = self.data.iter().zip(&to.data).map(|(&u, &v)| t.fma(v - u, u)).collect();
        Ok(Matrix { height: self.height, width: self.width, data })
    }
}
