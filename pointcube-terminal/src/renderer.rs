/// Half-block rasterizer: two vertical pixels per terminal cell
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point2;
use pointcube_core::{PixelBuffer, Rgb};
use std::io::Write;

/// Upper half block; foreground paints the top pixel, background the bottom one
const HALF_BLOCK: char = '▀';

/// Pixel surface sized to the terminal, drawn with one glyph per cell
pub struct HalfBlockRenderer {
    columns: u16,
    rows: u16,
    buffer: PixelBuffer,
}

impl HalfBlockRenderer {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            buffer: PixelBuffer::new(columns as usize, rows as usize * 2),
        }
    }

    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;
        self.buffer.resize(columns as usize, rows as usize * 2);
    }

    pub fn size(&self) -> (u16, u16) {
        (self.columns, self.rows)
    }

    pub fn canvas(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn canvas_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// Pixel under the upper half of a terminal cell
    pub fn cell_to_pixel(column: u16, row: u16) -> Point2<f32> {
        Point2::new(column as f32, row as f32 * 2.0)
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current: Option<(Rgb, Rgb)> = None;

        for row in 0..self.rows {
            writer.queue(cursor::MoveTo(0, row))?;

            let top = self.buffer.row(row as usize * 2);
            let bottom = self.buffer.row(row as usize * 2 + 1);

            for (&upper, &lower) in top.iter().zip(bottom) {
                if current != Some((upper, lower)) {
                    writer.queue(SetForegroundColor(to_color(upper)))?;
                    writer.queue(SetBackgroundColor(to_color(lower)))?;
                    current = Some((upper, lower));
                }
                writer.queue(Print(HALF_BLOCK))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointcube_core::Canvas;

    fn draw_to_string(renderer: &HalfBlockRenderer) -> String {
        let mut out = Vec::new();
        renderer.draw(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_buffer_has_two_pixels_per_row() {
        let renderer = HalfBlockRenderer::new(80, 24);
        assert_eq!(renderer.canvas().width(), 80);
        assert_eq!(renderer.canvas().height(), 48);
    }

    #[test]
    fn test_one_glyph_per_cell() {
        let renderer = HalfBlockRenderer::new(7, 3);
        let output = draw_to_string(&renderer);
        assert_eq!(output.matches(HALF_BLOCK).count(), 21);
    }

    #[test]
    fn test_colors_follow_pixels() {
        let mut renderer = HalfBlockRenderer::new(2, 1);
        renderer.canvas_mut().fill_rect(0, 0, 1, 1, Rgb::RED);
        renderer.canvas_mut().fill_rect(0, 1, 1, 1, Rgb::BLUE);

        let output = draw_to_string(&renderer);
        assert!(output.contains("38;2;255;0;0"));
        assert!(output.contains("48;2;0;0;255"));
    }

    #[test]
    fn test_unchanged_colors_are_not_repeated() {
        let renderer = HalfBlockRenderer::new(10, 1);
        let output = draw_to_string(&renderer);
        assert_eq!(output.matches("38;2;0;0;0").count(), 1);
    }

    #[test]
    fn test_resize() {
        let mut renderer = HalfBlockRenderer::new(10, 10);
        renderer.resize(4, 2);
        assert_eq!(renderer.size(), (4, 2));
        assert_eq!(renderer.canvas().height(), 4);
    }

    #[test]
    fn test_cell_to_pixel() {
        assert_eq!(HalfBlockRenderer::cell_to_pixel(3, 5), Point2::new(3.0, 10.0));
    }
}
