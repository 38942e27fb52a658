//! `Scalar` and `Lerp` implementations for the primitive numeric types.
//!
//! Floating types dispatch [`Scalar::fma`] to `mul_add`, which lowers to a
//! single hardware instruction where the target supports it. Signed integers
//! keep the composed `a * b + c` default; unsigned integers are excluded since
//! the reduction and cofactor signs need negation.

use crate::core::traits::{Lerp, Scalar};
use crate::error::LinalgError;

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn fma(self, mul: Self, add: Self) -> Self {
                self.mul_add(mul, add)
            }
        }
    )*};
}

macro_rules! impl_int_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {}
    )*};
}

macro_rules! impl_scalar_lerp {
    ($($t:ty),*) => {$(
        impl Lerp<$t> for $t {
            #[inline]
            fn lerp(&self, to: &Self, t: $t) -> Result<Self, LinalgError> {
                Ok(Scalar::fma(t, *to - *self, *self))
            }
        }
    )*};
}

impl_float_scalar!(f32, f64);
impl_int_scalar!(i8, i16, i32, i64, i128, isize);
impl_scalar_lerp!(f32, f64, i8, i16, i32, i64, i128, isize);
