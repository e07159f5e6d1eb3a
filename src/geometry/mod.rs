mod face;
mod fit;
mod flux_box;
mod layers;

pub use face::*;
pub use fit::*;
pub use flux_box::*;
pub use layers::*;

pub use crate::util::Vec3;

/// A planar measurement surface handed to a simulation's flux monitor.
///
/// `size` is zero along the surface normal. `weight` is the sign applied to
/// the flux through the surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FluxRegion {
    pub center: Vec3,
    pub size: Vec3,
    pub weight: f64,
}

impl FluxRegion {
    pub fn new(center: Vec3, size: Vec3, weight: f64) -> Self {
        FluxRegion {
            center,
            size,
            weight,
        }
    }
}

impl std::fmt::Display for FluxRegion {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "center: ({}, {}, {}), size: ({}, {}, {}), weight: {}",
            self.center.x,
            self.center.y,
            self.center.z,
            self.size.x,
            self.size.y,
            self.size.z,
            self.weight
        )
    }
}
