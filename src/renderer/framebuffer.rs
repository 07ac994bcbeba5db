//! Software RGB565 framebuffer
//!
//! Row-major, one `u16` per pixel, sized to the device panel. Rectangles
//! are clipped to the buffer; text is not rasterized.

use super::{Color, RenderSink};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<u16>,
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize)
    }
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `None` outside the buffer
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width + x as usize).copied()
    }

    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    /// Native-endian byte view, ready for a texture upload or SPI transfer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Little-endian RGB565 bytes regardless of host order
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_le_bytes()).collect()
    }
}

impl RenderSink for Framebuffer {
    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let x0 = x.max(0) as usize;
        let y0 = y.max(0) as usize;
        let x1 = (x.saturating_add(w)).clamp(0, self.width as i32) as usize;
        let y1 = (y.saturating_add(h)).clamp(0, self.height as i32) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for row in self.pixels.chunks_exact_mut(self.width).take(y1).skip(y0) {
            row[x0..x1].fill(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::palette;

    #[test]
    fn test_clear_and_fill() {
        let mut fb = Framebuffer::default();
        fb.clear(palette::DARK_BLUE);
        fb.fill_rect(10, 20, 5, 3, palette::WHITE);
        assert_eq!(fb.pixel(10, 20), Some(palette::WHITE));
        assert_eq!(fb.pixel(14, 22), Some(palette::WHITE));
        assert_eq!(fb.pixel(15, 22), Some(palette::DARK_BLUE));
        assert_eq!(fb.pixel(10, 23), Some(palette::DARK_BLUE));
    }

    #[test]
    fn test_fill_clips_to_screen() {
        let mut fb = Framebuffer::default();
        fb.fill_rect(-10, -10, 20, 20, palette::RED);
        assert_eq!(fb.pixel(0, 0), Some(palette::RED));
        assert_eq!(fb.pixel(9, 9), Some(palette::RED));
        assert_eq!(fb.pixel(10, 10), Some(0));

        fb.fill_rect(130, 235, 50, 50, palette::YELLOW);
        assert_eq!(fb.pixel(134, 239), Some(palette::YELLOW));
        assert_eq!(fb.pixel(135, 239), None);

        // Fully off-screen and empty rectangles are ignored
        fb.fill_rect(200, 0, 10, 10, palette::WHITE);
        fb.fill_rect(0, 0, 0, 10, palette::WHITE);
        fb.fill_rect(0, 0, 10, -5, palette::WHITE);
        assert_eq!(fb.pixel(0, 0), Some(palette::RED));
    }

    #[test]
    fn test_byte_views() {
        let mut fb = Framebuffer::new(2, 1);
        fb.clear(0x1234);
        assert_eq!(fb.as_bytes().len(), 4);
        assert_eq!(fb.to_le_bytes(), vec![0x34, 0x12, 0x34, 0x12]);
    }
}
