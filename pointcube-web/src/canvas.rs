/// `Canvas` implementation over a browser 2D context
use pointcube_core::{Canvas, Rgb, Viewport};
use web_sys as web;

/// Borrowed 2D context sized to its `<canvas>` at paint time
pub struct ContextCanvas<'a> {
    context: &'a web::CanvasRenderingContext2d,
    viewport: Viewport,
    fill: Option<Rgb>,
}

impl<'a> ContextCanvas<'a> {
    pub fn new(canvas: &web::HtmlCanvasElement, context: &'a web::CanvasRenderingContext2d) -> Self {
        Self {
            context,
            viewport: Viewport::new(canvas.width(), canvas.height()),
            fill: None,
        }
    }

    fn set_fill(&mut self, color: Rgb) {
        // Most consecutive points share a face colour
        if self.fill != Some(color) {
            self.context.set_fill_style_str(&color.to_css());
            self.fill = Some(color);
        }
    }
}

impl Canvas for ContextCanvas<'_> {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self, color: Rgb) {
        self.set_fill(color);
        self.context.fill_rect(
            0.0,
            0.0,
            self.viewport.width as f64,
            self.viewport.height as f64,
        );
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        self.set_fill(color);
        self.context
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }
}
