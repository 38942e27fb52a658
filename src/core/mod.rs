//! Scalar capability traits and their primitive implementations.

pub mod traits;
pub mod wrappers;

pub use traits::{Lerp, Scalar};
