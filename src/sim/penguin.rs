//! Penguin physics
//!
//! One actor, one axis of motion. The button selects between a dive
//! regime (gravity plus a share of the dive force) and a rise regime
//! (buoyancy beating gravity). Velocity impulses fire only on button
//! transitions, so holding the button never re-injects speed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, crosses_bounds};
use crate::consts::{PENGUIN_HEIGHT, PENGUIN_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::tuning::PhysicsTuning;

/// Start pose, a sixth of the way across and half way down
pub const PENGUIN_START: Vec2 = Vec2::new(SCREEN_WIDTH as f32 / 6.0, SCREEN_HEIGHT as f32 / 2.0);

const MAX_X: f32 = (SCREEN_WIDTH - PENGUIN_WIDTH) as f32;
const MAX_Y: f32 = (SCREEN_HEIGHT - PENGUIN_HEIGHT) as f32;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Penguin {
    pub pos: Vec2,
    pub velocity_y: f32,
    pub acceleration_y: f32,
    pub button_pressed: bool,
    pub was_button_pressed: bool,
    /// Consecutive ticks the button has been held
    pub button_press_duration: u32,
    tuning: PhysicsTuning,
}

impl Default for Penguin {
    fn default() -> Self {
        Self::new(PhysicsTuning::default())
    }
}

impl Penguin {
    pub fn new(tuning: PhysicsTuning) -> Self {
        Self {
            pos: PENGUIN_START,
            velocity_y: 0.0,
            acceleration_y: tuning.gravity,
            button_pressed: false,
            was_button_pressed: false,
            button_press_duration: 0,
            tuning,
        }
    }

    pub fn tuning(&self) -> &PhysicsTuning {
        &self.tuning
    }

    /// Return to the start pose, keeping the tuning
    pub fn reset(&mut self) {
        *self = Self::new(self.tuning);
    }

    /// Advance one tick with this tick's button state
    pub fn update(&mut self, button_pressed: bool) {
        self.was_button_pressed = self.button_pressed;
        self.button_pressed = button_pressed;

        if button_pressed {
            self.button_press_duration = self.button_press_duration.saturating_add(1);
            self.apply_dive_force();
        } else {
            self.button_press_duration = 0;
            self.apply_rise_force();
        }

        let t = &self.tuning;
        self.velocity_y += self.acceleration_y;
        self.velocity_y *= t.damping;
        if self.velocity_y > t.max_velocity {
            self.velocity_y = t.max_velocity;
        } else if self.velocity_y < -t.max_velocity {
            self.velocity_y = -t.max_velocity;
        }

        self.pos.y += self.velocity_y;
        self.constrain_to_screen();
    }

    fn apply_dive_force(&mut self) {
        self.acceleration_y = self.tuning.dive_acceleration();
        if self.button_pressed && !self.was_button_pressed {
            self.velocity_y += self.tuning.press_impulse();
        }
    }

    fn apply_rise_force(&mut self) {
        self.acceleration_y = self.tuning.rise_acceleration();
        if self.was_button_pressed && !self.button_pressed {
            self.velocity_y -= self.tuning.release_impulse();
        }
    }

    /// Clamp the pose to the screen; hitting top or bottom kills vertical speed
    pub fn constrain_to_screen(&mut self) {
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.velocity_y = 0.0;
        } else if self.pos.y > MAX_Y {
            self.pos.y = MAX_Y;
            self.velocity_y = 0.0;
        }
        self.pos.x = self.pos.x.clamp(0.0, MAX_X);
    }

    /// Inclusive range check against the clamp bounds
    pub fn is_within_screen_bounds(&self) -> bool {
        (0.0..=MAX_Y).contains(&self.pos.y) && (0.0..=MAX_X).contains(&self.pos.x)
    }

    /// Strict overshoot check; resting exactly on an edge is legal
    pub fn is_at_screen_edge(&self) -> bool {
        crosses_bounds(
            self.pos.x,
            self.pos.y,
            PENGUIN_WIDTH as f32,
            PENGUIN_HEIGHT as f32,
        )
    }

    pub fn screen_x(&self) -> i32 {
        self.pos.x as i32
    }

    pub fn screen_y(&self) -> i32 {
        self.pos.y as i32
    }

    /// Truncated bounding box used for all collision queries
    pub fn rect(&self) -> Rect {
        Rect::new(self.screen_x(), self.screen_y(), PENGUIN_WIDTH, PENGUIN_HEIGHT)
    }
}
