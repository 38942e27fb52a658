//! linmat: generic dense matrices and vectors.
//!
//! This crate provides a row-major `Matrix<K>` and a column `Vector<K>` over any
//! [`Scalar`], with shape-checked arithmetic, Gauss-Jordan reduction to reduced
//! row-echelon form, rank, determinants, cofactors, adjoints and inverses, plus
//! norms, dot/cross products and interpolation helpers.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use crate::core::*;
pub use error::*;
pub use matrix::*;
pub use utils::*;
