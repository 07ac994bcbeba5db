//! Rendering module
//!
//! The simulation never touches pixels. A frame is a list of filled
//! rectangles (plus optional text) pushed into a `RenderSink`; the device
//! driver, the desktop preview and the tests each bring their own sink.

pub mod commands;
pub mod framebuffer;
pub mod scene;

pub use commands::{CommandList, DrawCommand};
pub use framebuffer::Framebuffer;
pub use scene::draw_scene;

/// RGB565 colour
pub type Color = u16;

/// Pack 8-bit channels into RGB565
pub const fn rgb565(r: u8, g: u8, b: u8) -> Color {
    ((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3)
}

/// RGB565 palette
pub mod palette {
    use super::{Color, rgb565};

    pub const BLACK: Color = rgb565(0, 0, 0);
    pub const WHITE: Color = rgb565(255, 255, 255);
    pub const RED: Color = rgb565(255, 0, 0);
    pub const YELLOW: Color = rgb565(255, 255, 0);
    pub const DARK_BLUE: Color = rgb565(0, 0, 128);
    pub const ICE_BLUE: Color = rgb565(136, 224, 255);
}

/// Drawing surface for one frame
pub trait RenderSink {
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);

    /// Text is optional; sinks without a font ignore it
    fn draw_text(&mut self, _x: i32, _y: i32, _text: &str, _color: Color) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_matches_panel_values() {
        assert_eq!(palette::BLACK, 0x0000);
        assert_eq!(palette::WHITE, 0xFFFF);
        assert_eq!(palette::RED, 0xF800);
        assert_eq!(palette::YELLOW, 0xFFE0);
        assert_eq!(palette::DARK_BLUE, 0x0010);
        assert_eq!(palette::ICE_BLUE, 0x8F1F);
    }
}
