/// Perspective projection of rotated cube points onto the view
use nalgebra::{Point2, Point3};

use crate::geometry::CubeGeometry;
use crate::transform::RotationState;

/// Depths closer to zero than this are not divided by
const MIN_DEPTH: f32 = 1e-6;

/// Size of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Centre of the view, using integer halves of the extents
    pub fn center(&self) -> Point2<f32> {
        Point2::new((self.width / 2) as f32, (self.height / 2) as f32)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// A projected point before it is snapped to a pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Point after rotation, still in cube space
    pub rotated: Point3<f32>,
    /// Rotated depth shifted by the camera distance
    pub depth: f32,
    /// Screen position in fractional pixels
    pub screen: Point2<f32>,
}

impl Projected {
    /// Pixel coordinates, truncated toward zero
    pub fn pixel(&self) -> (i32, i32) {
        (self.screen.x as i32, self.screen.y as i32)
    }
}

/// Rotate `point`, push it away from the camera and divide by depth.
///
/// Returns `None` when the camera-relative depth is zero or the result is not
/// finite; such a point is dropped for the frame.
pub fn project(
    point: &Point3<f32>,
    rotation: &RotationState,
    geometry: &CubeGeometry,
    viewport: Viewport,
) -> Option<Projected> {
    let rotated = rotation.rotate_point(point);
    let depth = rotated.z + geometry.distance_from_cam;

    if depth.abs() < MIN_DEPTH {
        return None;
    }

    let ooz = 1.0 / depth;
    let center = viewport.center();
    let screen = Point2::new(
        center.x + geometry.k1 * ooz * rotated.x,
        center.y + geometry.k1 * ooz * rotated.y,
    );

    if !screen.x.is_finite() || !screen.y.is_finite() {
        return None;
    }

    Some(Projected {
        rotated,
        depth,
        screen,
    })
}
