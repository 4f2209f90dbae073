extern crate nalgebra as na;
extern crate rand_distr;
extern crate rayon;
extern crate veltherm_core;
pub mod estimator;
pub mod generator;
pub mod register;
