mod velocity;

pub use velocity::*;
