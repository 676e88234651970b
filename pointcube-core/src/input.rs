/// Pointer input shared by every frontend
use nalgebra::{Point2, Vector2};

/// Mouse button reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Tracks a primary-button drag between press and release
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragSession {
    last: Option<Point2<f32>>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }

    pub fn begin(&mut self, pos: Point2<f32>) {
        self.last = Some(pos);
    }

    /// Movement since the previous pointer position, if a drag is active.
    ///
    /// The session remembers `pos` as the new reference point.
    pub fn drag_to(&mut self, pos: Point2<f32>) -> Option<Vector2<f32>> {
        let last = self.last.as_mut()?;
        let delta = pos - *last;
        *last = pos;
        Some(delta)
    }

    pub fn end(&mut self) {
        self.last = None;
    }
}
