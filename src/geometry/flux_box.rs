use crate::geometry::*;

type Bounds = nalgebra::Matrix3x2<f64>;

/// Axis aligned box whose faces become flux regions.
/// Column 0 holds the min corner, column 1 the max corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FluxBox {
    pub bounds: Bounds,
}

impl std::fmt::Display for FluxBox {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(f, "{:?}", self.bounds)
    }
}

impl FluxBox {
    /// Create box from min and max corners.
    pub fn from_mm(min: Vec3, max: Vec3) -> Self {
        let result = FluxBox {
            bounds: Bounds::from_columns(&[min, max]),
        };
        debug_assert!(result.check_validity());
        result
    }

    /// Create box from the two ends of a space diagonal, in any order.
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self::from_mm(a.inf(&b), a.sup(&b))
    }

    /// Create box from its extent and center. Negative extents count
    /// by magnitude.
    pub fn from_center(size: Vec3, center: Vec3) -> Self {
        let half = size.abs() / 2.0;
        Self::from_mm(center - half, center + half)
    }

    /// Create cube from edge length and center.
    pub fn cube(edge: f64, center: Vec3) -> Self {
        Self::from_center(Vec3::repeat(edge), center)
    }

    /// Return min corner.
    pub fn min(&self) -> Vec3 {
        self.bounds.column(0).into()
    }

    /// Return max corner.
    pub fn max(&self) -> Vec3 {
        self.bounds.column(1).into()
    }

    pub fn center(&self) -> Vec3 {
        (self.min() + self.max()) / 2.0
    }

    pub fn size(&self) -> Vec3 {
        self.max() - self.min()
    }

    /// Check that max >= min
    pub fn check_validity(&self) -> bool {
        for d in 0..3 {
            if self.bounds[(d, 0)] > self.bounds[(d, 1)] {
                return false;
            }
        }
        true
    }

    /// Flux region covering one face, weighted by the face's sign.
    pub fn face_region(&self, face: Face) -> FluxRegion {
        let d = face.axis();
        let mut center = self.center();
        center[d] = if face.is_plus() {
            self.bounds[(d, 1)]
        } else {
            self.bounds[(d, 0)]
        };
        let mut size = self.size();
        size[d] = 0.0;
        FluxRegion::new(center, size, face.weight())
    }

    /// Flux regions of all six faces, in `Face::ALL` order.
    pub fn flux_regions(&self) -> [FluxRegion; 6] {
        Face::ALL.map(|face| self.face_region(face))
    }

    /// Flux regions of the four sides of the box's footprint in the z = 0
    /// plane: min x, max x, min y, max y. Every side has weight +1.
    pub fn flux_regions_2d(&self) -> [FluxRegion; 4] {
        let (min, max) = (self.min(), self.max());
        let c = self.center();
        let s = self.size();
        [
            FluxRegion::new(
                Vec3::new(min.x, c.y, 0.0),
                Vec3::new(0.0, s.y, 0.0),
                1.0,
            ),
            FluxRegion::new(
                Vec3::new(max.x, c.y, 0.0),
                Vec3::new(0.0, s.y, 0.0),
                1.0,
            ),
            FluxRegion::new(
                Vec3::new(c.x, min.y, 0.0),
                Vec3::new(s.x, 0.0, 0.0),
                1.0,
            ),
            FluxRegion::new(
                Vec3::new(c.x, max.y, 0.0),
                Vec3::new(s.x, 0.0, 0.0),
                1.0,
            ),
        ]
    }
}

/// Flux region of one face of the box spanned by two corners.
pub fn flux_region_from_corners(a: Vec3, b: Vec3, face: Face) -> FluxRegion {
    FluxBox::from_corners(a, b).face_region(face)
}

/// Flux region of one face of the box with the given extent and center.
pub fn flux_region_from_center(
    size: Vec3,
    center: Vec3,
    face: Face,
) -> FluxRegion {
    FluxBox::from_center(size, center).face_region(face)
}

/// Six flux regions of the box spanned by two corners.
pub fn flux_regions_from_corners(a: Vec3, b: Vec3) -> [FluxRegion; 6] {
    FluxBox::from_corners(a, b).flux_regions()
}

/// Six flux regions of the box with the given extent and center.
pub fn flux_regions_from_center(size: Vec3, center: Vec3) -> [FluxRegion; 6] {
    FluxBox::from_center(size, center).flux_regions()
}

/// Six flux regions of a cube.
pub fn cube_flux_regions(edge: f64, center: Vec3) -> [FluxRegion; 6] {
    FluxBox::cube(edge, center).flux_regions()
}

/// Four flux regions around a `lx` by `ly` rectangle in the z = 0 plane.
/// Only the x and y of `center` are used.
pub fn box2d_flux_regions(lx: f64, ly: f64, center: Vec3) -> [FluxRegion; 4] {
    FluxBox::from_center(Vec3::new(lx, ly, 0.0), center).flux_regions_2d()
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use nalgebra::vector;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        for d in 0..3 {
            assert_approx_eq!(f64, a[d], b[d], epsilon = 1e-12);
        }
    }

    #[test]
    fn corners_any_order_test() {
        let a = FluxBox::from_corners(
            vector![1.0, -2.0, 3.0],
            vector![-1.0, 2.0, 0.0],
        );
        assert_eq!(a.min(), vector![-1.0, -2.0, 0.0]);
        assert_eq!(a.max(), vector![1.0, 2.0, 3.0]);
        assert_vec_eq(a.center(), vector![0.0, 0.0, 1.5]);
        assert_vec_eq(a.size(), vector![2.0, 4.0, 3.0]);
    }

    #[test]
    fn from_center_abs_size_test() {
        let a = FluxBox::from_center(
            vector![-2.0, 4.0, 0.0],
            vector![1.0, 1.0, 1.0],
        );
        assert_vec_eq(a.min(), vector![0.0, -1.0, 1.0]);
        assert_vec_eq(a.max(), vector![2.0, 3.0, 1.0]);
        assert!(a.check_validity());
    }

    #[test]
    fn face_region_test() {
        let a = FluxBox::from_corners(Vec3::zeros(), vector![2.0, 4.0, 6.0]);

        let r = a.face_region(Face::XPlus);
        assert_vec_eq(r.center, vector![2.0, 2.0, 3.0]);
        assert_vec_eq(r.size, vector![0.0, 4.0, 6.0]);
        assert_eq!(r.weight, 1.0);

        let r = a.face_region(Face::YMinus);
        assert_vec_eq(r.center, vector![1.0, 0.0, 3.0]);
        assert_vec_eq(r.size, vector![2.0, 0.0, 6.0]);
        assert_eq!(r.weight, -1.0);

        let r = a.face_region(Face::ZPlus);
        assert_vec_eq(r.center, vector![1.0, 2.0, 6.0]);
        assert_vec_eq(r.size, vector![2.0, 4.0, 0.0]);
    }

    #[test]
    fn six_regions_order_test() {
        let regions =
            flux_regions_from_center(vector![2.0, 2.0, 2.0], Vec3::zeros());
        let expected_centers = [
            vector![1.0, 0.0, 0.0],
            vector![-1.0, 0.0, 0.0],
            vector![0.0, 1.0, 0.0],
            vector![0.0, -1.0, 0.0],
            vector![0.0, 0.0, 1.0],
            vector![0.0, 0.0, -1.0],
        ];
        for ((r, c), face) in
            regions.iter().zip(expected_centers).zip(Face::ALL)
        {
            assert_vec_eq(r.center, c);
            assert_eq!(r.weight, face.weight());
            assert_eq!(r.size[face.axis()], 0.0);
        }
        // Outward flux of the opposite faces cancels.
        let total: f64 = regions.iter().map(|r| r.weight).sum();
        assert_eq!(total, 0.0);
    }

    #[test]
    fn cube_matches_box_test() {
        let c = vector![0.5, -0.5, 2.0];
        assert_eq!(
            cube_flux_regions(3.0, c),
            flux_regions_from_center(vector![3.0, 3.0, 3.0], c)
        );
        assert_eq!(
            flux_region_from_center(vector![3.0, 3.0, 3.0], c, Face::YPlus),
            cube_flux_regions(3.0, c)[2]
        );
        let one = Vec3::repeat(1.0);
        assert_eq!(
            flux_region_from_corners(Vec3::zeros(), one, Face::XMinus),
            flux_regions_from_corners(one, Vec3::zeros())[1]
        );
    }

    #[test]
    fn box2d_test() {
        let regions = box2d_flux_regions(2.0, 4.0, vector![1.0, 1.0, 5.0]);
        assert_vec_eq(regions[0].center, vector![0.0, 1.0, 0.0]);
        assert_vec_eq(regions[0].size, vector![0.0, 4.0, 0.0]);
        assert_vec_eq(regions[1].center, vector![2.0, 1.0, 0.0]);
        assert_vec_eq(regions[2].center, vector![1.0, -1.0, 0.0]);
        assert_vec_eq(regions[2].size, vector![2.0, 0.0, 0.0]);
        assert_vec_eq(regions[3].center, vector![1.0, 3.0, 0.0]);
        for r in regions {
            assert_eq!(r.weight, 1.0);
        }
    }
}
