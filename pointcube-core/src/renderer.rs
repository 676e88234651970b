/// The cube renderer: rotation state, input handling and frame painting
use std::time::Duration;

use nalgebra::Point2;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::CubeGeometry;
use crate::input::{DragSession, PointerButton};
use crate::projection::project;
use crate::transform::RotationState;

/// Behaviour and geometry of a renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererConfig {
    pub geometry: CubeGeometry,
    /// Radians added to C on every tick
    pub spin_per_tick: f32,
    /// Radians per pixel of pointer movement while dragging
    pub drag_sensitivity: f32,
    pub tick_interval: Duration,
    /// Edge length of the square plotted for each point
    pub point_size: u32,
    pub background: Rgb,
}

impl RendererConfig {
    pub const DEFAULT_SPIN_PER_TICK: f32 = 0.01;
    pub const DEFAULT_DRAG_SENSITIVITY: f32 = 0.01;
    pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(16);
    pub const DEFAULT_POINT_SIZE: u32 = 4;

    pub fn validate(self) -> Result<Self> {
        if !self.spin_per_tick.is_finite() {
            return Err(Error::NonFinite {
                name: "spin per tick",
                value: self.spin_per_tick,
            });
        }
        if !self.drag_sensitivity.is_finite() {
            return Err(Error::NonFinite {
                name: "drag sensitivity",
                value: self.drag_sensitivity,
            });
        }
        if self.tick_interval.is_zero() {
            return Err(Error::Zero {
                name: "tick interval",
            });
        }
        if self.point_size == 0 {
            return Err(Error::Zero { name: "point size" });
        }
        Ok(self)
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            geometry: CubeGeometry::default(),
            spin_per_tick: Self::DEFAULT_SPIN_PER_TICK,
            drag_sensitivity: Self::DEFAULT_DRAG_SENSITIVITY,
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
            point_size: Self::DEFAULT_POINT_SIZE,
            background: Rgb::BLACK,
        }
    }
}

/// Outcome of painting one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub plotted: usize,
    /// Points dropped because their depth could not be divided by
    pub skipped: usize,
}

/// Owns the rotation state and turns ticks, pointer events and paint
/// requests into frames.
///
/// Hosts drive it from a single thread: call [`CubeRenderer::tick`] on every
/// timer period, forward pointer events, and repaint whenever
/// [`CubeRenderer::take_dirty`] returns `true`.
#[derive(Debug, Clone)]
pub struct CubeRenderer {
    config: RendererConfig,
    rotation: RotationState,
    drag: DragSession,
    dirty: bool,
}

impl CubeRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            rotation: RotationState::zero(),
            drag: DragSession::new(),
            dirty: true,
        }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the view for repaint, e.g. after the surface was resized
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a repaint is due and clears the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Timer period elapsed: spin around C
    pub fn tick(&mut self) {
        self.rotation.advance(self.config.spin_per_tick);
        self.dirty = true;
    }

    pub fn pointer_down(&mut self, button: PointerButton, pos: Point2<f32>) {
        if button == PointerButton::Primary {
            self.drag.begin(pos);
            tracing::debug!(x = pos.x, y = pos.y, "drag started");
        }
    }

    /// Vertical movement pitches (A), horizontal movement yaws (B)
    pub fn pointer_move(&mut self, pos: Point2<f32>) {
        if let Some(delta) = self.drag.drag_to(pos) {
            let s = self.config.drag_sensitivity;
            self.rotation.rotate(delta.y * s, delta.x * s, 0.0);
            self.dirty = true;
        }
    }

    pub fn pointer_up(&mut self, button: PointerButton) {
        if button == PointerButton::Primary && self.drag.is_active() {
            self.drag.end();
            tracing::debug!(
                a = self.rotation.a,
                b = self.rotation.b,
                "drag ended"
            );
        }
    }

    /// Paint the current frame onto `canvas`
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) -> FrameStats {
        let viewport = canvas.viewport();
        let geometry = &self.config.geometry;
        let size = self.config.point_size;
        let mut stats = FrameStats::default();

        canvas.clear(self.config.background);

        for point in geometry.points() {
            match project(&point.position, &self.rotation, geometry, viewport) {
                Some(projected) => {
                    let (x, y) = projected.pixel();
                    canvas.fill_rect(x, y, size, size, point.color());
                    stats.plotted += 1;
                }
                None => stats.skipped += 1,
            }
        }

        if stats.skipped > 0 {
            tracing::trace!(skipped = stats.skipped, "points dropped at zero depth");
        }

        stats
    }
}

impl Default for CubeRenderer {
    fn default() -> Self {
        Self::new(RendererConfig::default())
    }
}
