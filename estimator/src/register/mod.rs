mod moment;

pub use moment::*;
