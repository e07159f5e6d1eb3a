//! Sizing of flux boxes around a source.
//!
//! A flux box should enclose the source at the requested edge length, but
//! it has to stay inside the simulation cell (or away from PML, other
//! objects, ...). Each axis is solved on its own and the shared edge length
//! is the most restrictive of the per-axis results.

use crate::geometry::*;

/// A missing bound sits this many desired sizes away from the source.
const DEFAULT_WINDOW: f64 = 10.0;

/// Optional placement bounds along one axis.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Interval {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Interval {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Interval { min, max }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn closed(min: f64, max: f64) -> Self {
        Interval {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Fill missing ends with a window of `DEFAULT_WINDOW * size` around
    /// `source`.
    pub fn resolve(&self, size: f64, source: f64) -> (f64, f64) {
        (
            self.min.unwrap_or(source - DEFAULT_WINDOW * size),
            self.max.unwrap_or(source + DEFAULT_WINDOW * size),
        )
    }
}

/// Edge length and center along one axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisFit {
    pub edge: f64,
    pub center: f64,
}

/// Shared edge length and per-axis center of a square or cube box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoxFit {
    pub edge: f64,
    pub center: Vec3,
}

impl BoxFit {
    pub fn flux_box(&self) -> FluxBox {
        FluxBox::cube(self.edge, self.center)
    }
}

/// Fit a box of at most `size` covering `source` inside `bounds`.
///
/// If the bounds are narrower than `2 * size` the edge becomes half the
/// span and the center is pulled toward the middle of the bounds
/// (`source/2 + min/4 + max/4`). Otherwise the edge is `size` and the box is
/// centered on the source unless that would push it past a bound, in which
/// case it is shifted to sit between the source and that bound.
///
/// Non-positive sizes and inverted bounds are not checked.
pub fn fit_1d(size: f64, source: f64, bounds: Interval) -> AxisFit {
    let (min, max) = bounds.resolve(size, source);

    if max - min < 2.0 * size {
        return AxisFit {
            edge: (max - min) / 2.0,
            center: source / 2.0 + min / 4.0 + max / 4.0,
        };
    }

    let edge = size;
    let center = if source - min < edge {
        (source + min) / 2.0 + edge / 2.0
    } else if max - source < edge {
        (source + max) / 2.0 - edge / 2.0
    } else {
        source
    };
    AxisFit { edge, center }
}

/// Square box in the z = 0 plane. The edge is the smaller of the x and y
/// fits; each center comes from its own axis fit.
pub fn fit_2d(size: f64, source: Vec3, bounds: [Interval; 2]) -> BoxFit {
    let x = fit_1d(size, source.x, bounds[0]);
    let y = fit_1d(size, source.y, bounds[1]);
    let result = BoxFit {
        edge: x.edge.min(y.edge),
        center: Vec3::new(x.center, y.center, 0.0),
    };
    log::debug!("fit_2d: {result:?}");
    result
}

/// Cube box. The edge is the smallest of the three axis fits; each center
/// comes from its own axis fit.
pub fn fit_3d(size: f64, source: Vec3, bounds: [Interval; 3]) -> BoxFit {
    let fits: [AxisFit; 3] =
        std::array::from_fn(|d| fit_1d(size, source[d], bounds[d]));
    let result = BoxFit {
        edge: fits.iter().map(|f| f.edge).fold(f64::INFINITY, f64::min),
        center: Vec3::from_fn(|d, _| fits[d].center),
    };
    log::debug!("fit_3d: {result:?}");
    result
}
