/// pointcube core library - rotation, projection and painting of a point-cloud cube
///
/// This library holds everything that does not depend on a host: the rotation
/// state, the six-face point grid, the perspective projection and the
/// `CubeRenderer` that ties them to ticks, pointer drags and a `Canvas`.

pub mod canvas;
pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
pub mod projection;
pub mod renderer;
pub mod transform;

// Re-export commonly used types
pub use canvas::{Canvas, PixelBuffer};
pub use color::Rgb;
pub use error::{Error, Result};
pub use geometry::{CubeGeometry, Face, FacePoint};
pub use input::{DragSession, PointerButton};
pub use projection::{project, Projected, Viewport};
pub use renderer::{CubeRenderer, FrameStats, RendererConfig};
pub use transform::RotationState;
