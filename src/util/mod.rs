mod duration;
mod round;

pub use num_traits::Float;

pub use duration::*;
pub use round::*;

/// Points, sizes and centers in simulation space.
pub type Vec3 = nalgebra::Vector3<f64>;
