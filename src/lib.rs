//! Penguin Dive - a one-button arcade game for a 135x240 portrait display
//!
//! Core modules:
//! - `sim`: Deterministic simulation (penguin physics, ice pillars, game state)
//! - `renderer`: Render-sink contract and scene composition
//! - `platform`: Input sources and fixed-step pacing
//! - `tuning`: Data-driven game balance
//! - `settings`: Runner settings loaded from JSON

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Settings, SettingsError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical screen size (portrait)
    pub const SCREEN_WIDTH: i32 = 135;
    pub const SCREEN_HEIGHT: i32 = 240;

    /// Penguin sprite bounds
    pub const PENGUIN_WIDTH: i32 = 20;
    pub const PENGUIN_HEIGHT: i32 = 20;

    /// Ice pillar pool
    pub const MAX_PILLARS: usize = 4;
    pub const PILLAR_WIDTH: i32 = 30;
    pub const MIN_GAP_SIZE: i32 = 80;
    pub const MAX_GAP_SIZE: i32 = 100;

    /// Fixed simulation rate (one tick per frame)
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Seed the pillar generator is reset to on every `init`
    pub const PILLAR_SEED: u32 = 12345;
}
