/// Cube geometry and the six-face point cloud
use nalgebra::Point3;

use crate::color::Rgb;
use crate::error::{positive, Error, Result};

/// Fixed parameters of the cube and the camera looking at it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeGeometry {
    /// Half the edge length of the cube
    pub cube_width: f32,
    /// Offset added to rotated depth before the perspective divide
    pub distance_from_cam: f32,
    /// Projection scale
    pub k1: f32,
    /// Spacing between neighbouring grid points on a face
    pub grid_step: f32,
}

impl CubeGeometry {
    pub const DEFAULT_CUBE_WIDTH: f32 = 50.0;
    pub const DEFAULT_DISTANCE: f32 = 150.0;
    pub const DEFAULT_K1: f32 = 50.0;
    pub const DEFAULT_GRID_STEP: f32 = 5.0;
    /// Upper bound on grid coordinates along one axis of a face
    pub const MAX_GRID_LEN: usize = 10_000;

    pub fn new(cube_width: f32, distance_from_cam: f32, k1: f32, grid_step: f32) -> Result<Self> {
        let geometry = Self {
            cube_width: positive("cube width", cube_width)?,
            distance_from_cam: positive("camera distance", distance_from_cam)?,
            k1: positive("projection scale", k1)?,
            grid_step: positive("grid step", grid_step)?,
        };

        let per_axis = 2.0 * geometry.cube_width as f64 / geometry.grid_step as f64;
        if !per_axis.is_finite() || per_axis >= Self::MAX_GRID_LEN as f64 {
            return Err(Error::GridTooDense {
                per_axis,
                max: Self::MAX_GRID_LEN,
            });
        }

        if geometry.distance_from_cam <= geometry.bounding_radius() {
            tracing::warn!(
                distance = geometry.distance_from_cam,
                radius = geometry.bounding_radius(),
                "camera sits inside the cube's bounding sphere; some points may be skipped"
            );
        }

        Ok(geometry)
    }

    /// Distance from the cube centre to a corner
    pub fn bounding_radius(&self) -> f32 {
        self.cube_width * 3f32.sqrt()
    }

    /// Number of grid coordinates along one axis of a face
    pub fn grid_len(&self) -> usize {
        // Small slack so that widths which are exact multiples of the step
        // keep their last coordinate despite rounding in the division.
        // Saturating so geometry built from raw fields cannot overflow.
        let steps = ((2.0 * self.cube_width / self.grid_step) + 1e-4).floor() as usize;
        steps.saturating_add(1)
    }

    /// Grid coordinates along one axis, from `-cube_width` upwards
    pub fn grid_coords(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.grid_len()).map(move |i| -self.cube_width + i as f32 * self.grid_step)
    }

    pub fn points_per_face(&self) -> usize {
        self.grid_len().saturating_mul(self.grid_len())
    }

    pub fn points_per_frame(&self) -> usize {
        self.points_per_face().saturating_mul(Face::ALL.len())
    }

    /// Every face point of a frame, in paint order
    ///
    /// The outer loops walk the shared `(cube_x, cube_y)` grid and the six
    /// faces are emitted for each grid cell, so later faces overdraw earlier
    /// ones where they overlap on screen.
    pub fn points(&self) -> impl Iterator<Item = FacePoint> + '_ {
        self.grid_coords().flat_map(move |cube_x| {
            self.grid_coords().flat_map(move |cube_y| {
                Face::ALL
                    .into_iter()
                    .map(move |face| face.point(cube_x, cube_y, self.cube_width))
            })
        })
    }
}

impl Default for CubeGeometry {
    fn default() -> Self {
        Self {
            cube_width: Self::DEFAULT_CUBE_WIDTH,
            distance_from_cam: Self::DEFAULT_DISTANCE,
            k1: Self::DEFAULT_K1,
            grid_step: Self::DEFAULT_GRID_STEP,
        }
    }
}

/// One of the six faces of the cube, named by its colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
}

impl Face {
    /// Faces in paint order
    pub const ALL: [Face; 6] = [
        Face::Red,
        Face::Green,
        Face::Blue,
        Face::Yellow,
        Face::Cyan,
        Face::Magenta,
    ];

    pub fn color(self) -> Rgb {
        match self {
            Face::Red => Rgb::RED,
            Face::Green => Rgb::GREEN,
            Face::Blue => Rgb::BLUE,
            Face::Yellow => Rgb::YELLOW,
            Face::Cyan => Rgb::CYAN,
            Face::Magenta => Rgb::MAGENTA,
        }
    }

    /// Place grid coordinate `(cube_x, cube_y)` on this face.
    ///
    /// The axis permutations and sign flips are deliberately literal; they
    /// are not derived from a face normal.
    pub fn point(self, cube_x: f32, cube_y: f32, cube_width: f32) -> FacePoint {
        let w = cube_width;
        let position = match self {
            Face::Red => Point3::new(cube_x, cube_y, -w),
            Face::Green => Point3::new(w, cube_y, cube_x),
            Face::Blue => Point3::new(-w, cube_y, -cube_x),
            Face::Yellow => Point3::new(-cube_x, cube_y, w),
            Face::Cyan => Point3::new(cube_x, -w, -cube_y),
            Face::Magenta => Point3::new(cube_x, w, cube_y),
        };
        FacePoint { position, face: self }
    }
}

/// A generated cube-local point and the face it belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePoint {
    pub position: Point3<f32>,
    pub face: Face,
}

impl FacePoint {
    pub fn color(&self) -> Rgb {
        self.face.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_default_grid() {
        let geometry = CubeGeometry::default();
        assert_eq!(geometry.grid_len(), 21);
        assert_eq!(geometry.points_per_face(), 441);
        assert_eq!(geometry.points_per_frame(), 2646);

        let coords: Vec<f32> = geometry.grid_coords().collect();
        assert_eq!(coords.first(), Some(&-50.0));
        assert_eq!(coords.last(), Some(&50.0));
    }

    #[test]
    fn test_every_face_gets_the_same_count() {
        let geometry = CubeGeometry::default();
        let mut counts: HashMap<Face, usize> = HashMap::new();
        for point in geometry.points() {
            *counts.entry(point.face).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&n| n == 441));
    }

    #[test]
    fn test_points_lie_on_cube_surface() {
        let geometry = CubeGeometry::default();
        for point in geometry.points() {
            let p = point.position;
            let max = p.x.abs().max(p.y.abs()).max(p.z.abs());
            assert_eq!(max, geometry.cube_width, "{point:?} is off the surface");
        }
    }

    #[test]
    fn test_face_placement() {
        let w = 50.0;
        assert_eq!(Face::Red.point(5.0, 10.0, w).position, Point3::new(5.0, 10.0, -50.0));
        assert_eq!(Face::Green.point(5.0, 10.0, w).position, Point3::new(50.0, 10.0, 5.0));
        assert_eq!(Face::Blue.point(5.0, 10.0, w).position, Point3::new(-50.0, 10.0, -5.0));
        assert_eq!(Face::Yellow.point(5.0, 10.0, w).position, Point3::new(-5.0, 10.0, 50.0));
        assert_eq!(Face::Cyan.point(5.0, 10.0, w).position, Point3::new(5.0, -50.0, -10.0));
        assert_eq!(Face::Magenta.point(5.0, 10.0, w).position, Point3::new(5.0, 50.0, 10.0));
    }

    #[test]
    fn test_paint_order_cycles_faces() {
        let geometry = CubeGeometry::default();
        let faces: Vec<Face> = geometry.points().take(12).map(|p| p.face).collect();
        assert_eq!(&faces[..6], &Face::ALL);
        assert_eq!(&faces[6..], &Face::ALL);
    }

    #[test]
    fn test_face_colors_are_distinct() {
        let colors: HashSet<Rgb> = Face::ALL.iter().map(|f| f.color()).collect();
        assert_eq!(colors.len(), 6);
    }

    #[test]
    fn test_uneven_step_stays_inside() {
        let geometry = CubeGeometry::new(10.0, 150.0, 50.0, 3.0).unwrap();
        // -10, -7, -4, -1, 2, 5, 8
        assert_eq!(geometry.grid_len(), 7);
        assert!(geometry.grid_coords().all(|c| c <= geometry.cube_width));
    }

    #[test]
    fn test_invalid_geometry_is_rejected() {
        assert!(CubeGeometry::new(0.0, 150.0, 50.0, 5.0).is_err());
        assert!(CubeGeometry::new(50.0, -1.0, 50.0, 5.0).is_err());
        assert!(CubeGeometry::new(50.0, 150.0, f32::NAN, 5.0).is_err());
        assert!(CubeGeometry::new(50.0, 150.0, 50.0, 0.0).is_err());
    }

    #[test]
    fn test_overly_dense_grid_is_rejected() {
        for (width, distance, step) in [(1e30, 1e31, 1e-10), (1e12, 1e13, 1.0), (50.0, 150.0, 1e-6)] {
            assert!(
                matches!(
                    CubeGeometry::new(width, distance, 50.0, step),
                    Err(Error::GridTooDense { .. })
                ),
                "width {width} step {step} should be rejected"
            );
        }

        // 2 * 5000 / 1 = 10_000 coordinates is already past the limit
        assert!(CubeGeometry::new(5000.0, 1e5, 50.0, 1.0).is_err());
        let largest = CubeGeometry::new(4999.0, 1e5, 50.0, 1.0).unwrap();
        assert_eq!(largest.grid_len(), 9999);
    }

    #[test]
    fn test_raw_geometry_counts_saturate() {
        let geometry = CubeGeometry {
            cube_width: 1e30,
            distance_from_cam: 1e31,
            k1: 50.0,
            grid_step: 1e-10,
        };
        assert_eq!(geometry.grid_len(), usize::MAX);
        assert_eq!(geometry.points_per_frame(), usize::MAX);
    }
}
