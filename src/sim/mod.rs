//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, one update per tick
//! - Seeded generator owned by the pillar field, rewound on `init`
//! - Fixed-size slot storage, no allocation per tick
//! - No rendering or platform dependencies

pub mod collision;
pub mod penguin;
pub mod pillars;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use penguin::{PENGUIN_START, Penguin};
pub use pillars::{Pillar, PillarField};
pub use rng::Lcg;
pub use state::{GamePhase, GameState};
pub use tick::{GameEvent, TickInput, TickReport, World, tick};
