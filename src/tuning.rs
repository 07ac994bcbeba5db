//! Data-driven game balance
//!
//! Every number that shapes how the game feels lives here. Defaults match
//! the shipped device build; `validate` guards the invariants the
//! simulation relies on (gaps fit on screen, damping shrinks velocity).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MAX_GAP_SIZE, MIN_GAP_SIZE, SCREEN_HEIGHT, TICKS_PER_SECOND};

/// Rejected balance values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("{field} is out of range, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("damping must be in (0, 1], got {0}")]
    Damping(f32),
    #[error("gap range {min}..={max} is empty")]
    GapRange { min: i32, max: i32 },
    #[error("gap of {gap} px plus {margin} px margins does not fit the screen height")]
    GapTooLarge { gap: i32, margin: i32 },
    #[error("minimum gap {0} must exceed the penguin height")]
    GapTooSmall(i32),
    #[error("ticks_per_second must be non-zero")]
    ZeroTickRate,
}

/// Penguin force model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    pub gravity: f32,
    pub dive_force: f32,
    /// Share of `dive_force` added to gravity while the button is held
    pub dive_accel_factor: f32,
    /// Share of `dive_force` injected on the press edge
    pub press_impulse_factor: f32,
    pub rise_force: f32,
    /// Multiple of `rise_force` removed on the release edge
    pub release_impulse_factor: f32,
    /// Per-tick velocity damping (< 1 bleeds speed)
    pub damping: f32,
    pub max_velocity: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: 0.12,
            dive_force: 6.0,
            dive_accel_factor: 0.05,
            press_impulse_factor: 0.5,
            rise_force: 1.5,
            release_impulse_factor: 4.0,
            damping: 0.92,
            max_velocity: 3.5,
        }
    }
}

impl PhysicsTuning {
    /// Acceleration while the button is held
    pub fn dive_acceleration(&self) -> f32 {
        self.gravity + self.dive_force * self.dive_accel_factor
    }

    /// Acceleration while the button is released (negative = upward)
    pub fn rise_acceleration(&self) -> f32 {
        -(self.rise_force - self.gravity)
    }

    pub fn press_impulse(&self) -> f32 {
        self.dive_force * self.press_impulse_factor
    }

    pub fn release_impulse(&self) -> f32 {
        self.rise_force * self.release_impulse_factor
    }
}

/// Ice pillar spawning and scrolling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PillarTuning {
    /// Pixels per tick at difficulty 1.0
    pub base_scroll_speed: f32,
    /// Ticks between spawns at difficulty 1.0
    pub base_spawn_interval: u32,
    pub min_gap: i32,
    pub max_gap: i32,
    /// Gap shrink in pixels per unit of difficulty
    pub gap_shrink_per_difficulty: f32,
    /// Clearance kept above and below every gap
    pub gap_margin: i32,
}

impl Default for PillarTuning {
    fn default() -> Self {
        Self {
            base_scroll_speed: 2.0,
            base_spawn_interval: 120,
            min_gap: MIN_GAP_SIZE,
            max_gap: MAX_GAP_SIZE,
            gap_shrink_per_difficulty: 5.0,
            gap_margin: 20,
        }
    }
}

/// Score and difficulty curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTuning {
    /// Ticks that make up one point (one second survived)
    pub ticks_per_second: u32,
    /// Difficulty added per point of score
    pub difficulty_per_point: f32,
}

impl Default for ScoringTuning {
    fn default() -> Self {
        Self {
            ticks_per_second: TICKS_PER_SECOND,
            difficulty_per_point: 0.1,
        }
    }
}

/// Complete balance sheet
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub physics: PhysicsTuning,
    pub pillars: PillarTuning,
    pub scoring: ScoringTuning,
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::NotPositive { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::NotPositive { field, value })
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        let p = &self.physics;
        positive("gravity", p.gravity)?;
        positive("dive_force", p.dive_force)?;
        positive("rise_force", p.rise_force)?;
        positive("max_velocity", p.max_velocity)?;
        non_negative("dive_accel_factor", p.dive_accel_factor)?;
        non_negative("press_impulse_factor", p.press_impulse_factor)?;
        non_negative("release_impulse_factor", p.release_impulse_factor)?;
        if !(p.damping > 0.0 && p.damping <= 1.0) {
            return Err(TuningError::Damping(p.damping));
        }

        let q = &self.pillars;
        positive("base_scroll_speed", q.base_scroll_speed)?;
        positive("base_spawn_interval", q.base_spawn_interval as f32)?;
        non_negative("gap_shrink_per_difficulty", q.gap_shrink_per_difficulty)?;
        if q.min_gap > q.max_gap {
            return Err(TuningError::GapRange {
                min: q.min_gap,
                max: q.max_gap,
            });
        }
        if q.min_gap <= crate::consts::PENGUIN_HEIGHT {
            return Err(TuningError::GapTooSmall(q.min_gap));
        }
        if q.gap_margin < 0 || q.max_gap + 2 * q.gap_margin > SCREEN_HEIGHT {
            return Err(TuningError::GapTooLarge {
                gap: q.max_gap,
                margin: q.gap_margin,
            });
        }

        let s = &self.scoring;
        if s.ticks_per_second == 0 {
            return Err(TuningError::ZeroTickRate);
        }
        non_negative("difficulty_per_point", s.difficulty_per_point)
    }
}
