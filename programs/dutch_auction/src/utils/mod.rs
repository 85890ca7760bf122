pub mod math;
pub mod validation;

pub use math::*;
pub use validation::*;
