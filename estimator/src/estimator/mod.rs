mod error;
mod parameters;
mod source;
mod temperature;

pub use error::*;
pub use parameters::*;
pub use source::*;
pub use temperature::*;
