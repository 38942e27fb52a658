//! Free numeric helpers composed from `Matrix`/`Vector` primitives.

pub mod geometry;
pub mod interp;

pub use geometry::{angle_cos, cross_product};
pub use interp::{lerp, linear_combination, round_n};
