//! Off-screen RGBA8 pixel buffer backing a surface.

use glam::Vec2;
use panelray_core::{Color, Rect};

/// The off-screen pixel buffer backing a surface's appearance.
///
/// Owned by the surface for its lifetime and mutated only by the
/// painter. `needs_upload` is set exactly when a repaint occurred and
/// cleared by the GPU upload path.
pub struct RasterTarget {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    /// Whether the GPU copy of this raster is stale.
    pub needs_upload: bool,
}

impl RasterTarget {
    /// Allocate a raster target cleared to transparent.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
            needs_upload: false,
        }
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA8 pixel data, row-major from the top-left.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Read one pixel. Out-of-bounds reads return transparent.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        if x >= self.width || y >= self.height {
            return Color::TRANSPARENT;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Color([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Write one pixel; out-of-bounds writes are clipped.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.pixels[i..i + 4].copy_from_slice(&color.0);
    }

    /// Fill the whole raster with `color`.
    pub fn fill(&mut self, color: Color) {
        for px in bytemuck::cast_slice_mut::<u8, [u8; 4]>(&mut self.pixels) {
            *px = color.0;
        }
    }

    /// Fill an axis-aligned rectangle, clipped to the raster bounds.
    /// Degenerate rectangles (negative size) draw nothing.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.width < 0.0 || rect.height < 0.0 {
            return;
        }
        let x0 = rect.x.max(0.0) as u32;
        let y0 = rect.y.max(0.0) as u32;
        let x1 = ((rect.x + rect.width).min(self.width as f32)).max(0.0) as u32;
        let y1 = ((rect.y + rect.height).min(self.height as f32)).max(0.0) as u32;
        for y in y0..y1 {
            let row = (y * self.width) as usize * 4;
            for x in x0..x1 {
                let i = row + x as usize * 4;
                self.pixels[i..i + 4].copy_from_slice(&color.0);
            }
        }
    }

    /// Stroke a circular ring centered at `center` with the given radius
    /// and stroke width, clipped to the raster bounds.
    pub fn stroke_ring(&mut self, center: Vec2, radius: f32, stroke: f32, color: Color) {
        let outer = radius + stroke * 0.5;
        let inner = radius - stroke * 0.5;
        let x0 = (center.x - outer).floor() as i32;
        let y0 = (center.y - outer).floor() as i32;
        let x1 = (center.x + outer).ceil() as i32;
        let y1 = (center.y + outer).ceil() as i32;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = Vec2::new(x as f32 - center.x, y as f32 - center.y).length();
                if d >= inner && d <= outer {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_clips() {
        let mut raster = RasterTarget::new(16, 16);
        raster.fill_rect(Rect::new(-4.0, -4.0, 8.0, 8.0), Color::WHITE);
        assert_eq!(raster.pixel(0, 0), Color::WHITE);
        assert_eq!(raster.pixel(3, 3), Color::WHITE);
        assert_eq!(raster.pixel(4, 4), Color::TRANSPARENT);
    }

    #[test]
    fn test_fill_rect_degenerate() {
        let mut raster = RasterTarget::new(16, 16);
        raster.fill_rect(Rect::new(0.0, 0.0, -8.0, 8.0), Color::WHITE);
        assert_eq!(raster.pixel(0, 0), Color::TRANSPARENT);
    }

    #[test]
    fn test_stroke_ring_hits_radius_not_center() {
        let mut raster = RasterTarget::new(64, 64);
        raster.stroke_ring(Vec2::new(32.0, 32.0), 10.0, 2.0, Color::BLACK);
        assert_eq!(raster.pixel(32, 32), Color::TRANSPARENT);
        // A point on the circle itself is painted.
        assert_eq!(raster.pixel(42, 32), Color::BLACK);
    }

    #[test]
    fn test_put_pixel_out_of_bounds() {
        let mut raster = RasterTarget::new(4, 4);
        raster.put_pixel(-1, 0, Color::WHITE);
        raster.put_pixel(0, 4, Color::WHITE);
        assert!(raster.pixels().iter().all(|&b| b == 0));
    }
}
