/// Drawing surfaces the renderer can paint on
use crate::color::Rgb;
use crate::projection::Viewport;

/// Minimal surface a frame is painted onto
pub trait Canvas {
    /// Current size in pixels; the view centre is derived from it
    fn viewport(&self) -> Viewport;

    fn clear(&mut self, color: Rgb);

    /// Fill a `width`×`height` rectangle whose top-left corner is `(x, y)`.
    /// Parts outside the surface are ignored.
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb);
}

/// In-memory RGB surface
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Resize, discarding the current contents
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width * height, Rgb::BLACK);
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    pub fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}

impl Canvas for PixelBuffer {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.width as u32, self.height as u32)
    }

    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        let x0 = (x as i64).clamp(0, self.width as i64) as usize;
        let y0 = (y as i64).clamp(0, self.height as i64) as usize;
        let x1 = (x as i64 + width as i64).clamp(0, self.width as i64) as usize;
        let y1 = (y as i64 + height as i64).clamp(0, self.height as i64) as usize;

        for row in y0..y1 {
            let start = row * self.width;
            self.pixels[start + x0..start + x1].fill(color);
        }
    }
}
