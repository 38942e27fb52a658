//! Tunable parameters for the numeric kernels.

pub mod options;

pub use options::ReduceOptions;
