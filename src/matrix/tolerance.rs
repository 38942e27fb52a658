//! Tolerance comparisons through the `approx` traits.
//!
//! Shapes must match exactly; entries are then compared pairwise with the
//! scalar's own `AbsDiffEq`/`RelativeEq`.

use crate::matrix::dense::Matrix;
use crate::matrix::vector::Vector;
use approx::{AbsDiffEq, RelativeEq};

impl<K: AbsDiffEq> AbsDiffEq for Matrix<K>
where
    K::Epsilon: Copy,
{
    type Epsilon = K::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        K::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.shape() == other.shape()
            && self.as_slice().iter().zip(other.as_slice()).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<K: RelativeEq> RelativeEq for Matrix<K>
where
    K::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        K::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.shape() == other.shape()
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<K: AbsDiffEq> AbsDiffEq for Vector<K>
where
    K::Epsilon: Copy,
{
    type Epsilon = K::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        K::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_matrix().abs_diff_eq(other.as_matrix(), epsilon)
    }
}

impl<K: RelativeEq> RelativeEq for Vector<K>
where
    K::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        K::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.as_matrix().relative_eq(other.as_matrix(), epsilon, max_relative)
    }
}
