//! Core numeric traits for linmat.

use crate::error::LinalgError;
use num_traits::{Num, ToPrimitive};
use std::ops::Neg;

/// Scalar capability required by [`Matrix`](crate::Matrix) and [`Vector`](crate::Vector).
///
/// The default methods compose plain arithmetic. Primitive floating types
/// override [`Scalar::fma`] with the hardware fused multiply-add so every
/// accumulation in the crate rounds once per step.
pub trait Scalar: Copy + PartialOrd + Num + Neg<Output = Self> + ToPrimitive {
    /// Compute `self * mul + add`.
    fn fma(self, mul: Self, add: Self) -> Self {
        self * mul + add
    }

    /// 2×2 cross primitive: `a * d - b * c`.
    fn cross(a: Self, b: Self, c: Self, d: Self) -> Self {
        a * d - b * c
    }

    /// Absolute value through ordering and negation.
    ///
    /// # Panics
    /// For signed integers, negating `MIN` overflows: this panics when overflow
    /// checks are enabled and wraps back to `MIN` otherwise, like `i32::abs`.
    fn absolute(self) -> Self {
        if self < Self::zero() { -self } else { self }
    }

    /// Widen to `f64`; `NaN` when the value has no `f64` representation.
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

/// Linear interpolation `self + t * (to - self)`.
///
/// Fails only when `self` and `to` are shaped differently.
pub trait Lerp<K>: Sized {
    fn lerp(&self, to: &Self, t: K) -> Result<Self, LinalgError>;
}
