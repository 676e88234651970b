/// pointcube web - the point-cloud cube on an HTML canvas
///
/// Build with wasm-bindgen and call `new WebRenderer().init("canvas-id")` from
/// the page. The canvas is sized to 800×600, ticked every 16 ms and rotated
/// by dragging with the primary mouse button.
use pointcube_core::{CubeRenderer, RendererConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod events;

pub use canvas::ContextCanvas;

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 600;

#[wasm_bindgen]
pub struct WebRenderer {
    renderer: Rc<RefCell<CubeRenderer>>,
    surface: Option<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)>,
    interval: Option<i32>,
}

#[wasm_bindgen]
impl WebRenderer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebRenderer {
        WebRenderer {
            renderer: Rc::new(RefCell::new(CubeRenderer::new(RendererConfig::default()))),
            surface: None,
            interval: None,
        }
    }

    /// Attach to a canvas element, wire mouse input and start the timer
    pub fn init(&mut self, canvas_id: &str) -> Result<(), JsValue> {
        if self.surface.is_some() {
            return Err(JsValue::from_str("WebRenderer is already attached to a canvas"));
        }

        let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{canvas_id}'")))?
            .dyn_into()?;

        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let context: web::CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        events::wire_mouse_handlers(&window, &canvas, &self.renderer)?;
        let interval = events::start_timer(&window, &canvas, &context, &self.renderer)?;
        log::info!(
            "[init] attached to #{} ({}x{}), interval {}",
            canvas_id,
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            interval
        );

        self.renderer.borrow_mut().invalidate();
        events::paint(&self.renderer, &canvas, &context);

        self.surface = Some((canvas, context));
        self.interval = Some(interval);
        Ok(())
    }

    /// Paint immediately if anything changed since the last frame
    pub fn render(&mut self) -> Result<(), JsValue> {
        let (canvas, context) = self
            .surface
            .as_ref()
            .ok_or_else(|| JsValue::from_str("WebRenderer is not attached; call init first"))?;
        events::paint(&self.renderer, canvas, context);
        Ok(())
    }

    /// Stop the timer; input still updates the angles
    pub fn stop(&mut self) {
        if let (Some(handle), Some(window)) = (self.interval.take(), web::window()) {
            window.clear_interval_with_handle(handle);
            log::info!("[timer] stopped");
        }
    }

    /// Current angles as `[a, b, c]`
    pub fn rotation(&self) -> Vec<f32> {
        let rotation = self.renderer.borrow().rotation();
        vec![rotation.a, rotation.b, rotation.c]
    }
}

impl Default for WebRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second init (e.g. hot reload) leaves the first logger in place
    _ = console_log::init_with_level(log::Level::Info);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_renderer_is_detached() {
        let renderer = WebRenderer::new();
        assert!(renderer.surface.is_none());
        assert_eq!(renderer.rotation(), vec![0.0, 0.0, 0.0]);
    }
}
