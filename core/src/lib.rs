mod sample;
mod save_data;
extern crate nalgebra as na;
extern crate serde;

pub use sample::VelocitySample;
pub use sample::VelocityTrace;
pub use save_data::*;

/// Boltzmann constant in program units (a.m.u., nm, ps, K)
pub const K_B: f64 = 0.0083144626;
