//! Integer rectangle geometry shared by the penguin, the pillars and the
//! game state.
//!
//! All downstream geometry runs on truncated screen coordinates, so these
//! helpers take `i32` rectangles. Screen-edge tests are strict: touching
//! an edge is legal, crossing it is not.

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Horizontal extents overlap (open intervals)
    #[inline]
    pub fn overlaps_x(&self, x: i32, w: i32) -> bool {
        self.x < x + w && self.right() > x
    }

    /// Full AABB overlap; shared edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_x(other.x, other.w) && self.y < other.bottom() && self.bottom() > other.y
    }

    /// True if any edge lies outside the screen
    #[inline]
    pub fn crosses_screen_edge(&self) -> bool {
        crosses_bounds(self.x as f32, self.y as f32, self.w as f32, self.h as f32)
    }

    /// True if the vertical band is not strictly inside `top..=bottom`
    #[inline]
    pub fn leaves_band(&self, top: i32, bottom: i32) -> bool {
        self.y < top || self.bottom() > bottom
    }
}

/// Strict screen-edge violation for a float pose. The integer predicate
/// above delegates here, so both paths agree on integer poses. A fractional
/// overshoot such as y = -0.5 truncates to 0 in `Rect` and only shows up here.
#[inline]
pub fn crosses_bounds(x: f32, y: f32, w: f32, h: f32) -> bool {
    x < 0.0 || y < 0.0 || x + w > SCREEN_WIDTH as f32 || y + h > SCREEN_HEIGHT as f32
}
