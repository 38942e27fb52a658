//! Matrix module: dense matrix and column vector types.

pub mod dense;
pub use dense::Matrix;
pub mod vector;
pub use vector::Vector;

pub mod determinant;
pub mod display;
pub mod echelon;
pub mod ops;
pub mod tolerance;
