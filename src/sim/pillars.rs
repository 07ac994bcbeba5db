//! Ice pillar field
//!
//! A fixed pool of `MAX_PILLARS` slots. Each slot is a top+bottom pillar
//! pair sharing one x position, with a vertical gap the penguin must slip
//! through. Slots are claimed by the spawner and released once they scroll
//! off the left edge; nothing is ever compacted or reallocated.
//!
//! Scroll speed, spawn cadence and gap size all follow the difficulty
//! multiplier handed in each tick. Gap layout comes from a seeded LCG that
//! `init` rewinds, so a fresh field always produces the same course.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::rng::Lcg;
use crate::consts::{MAX_PILLARS, PILLAR_SEED, PILLAR_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::tuning::PillarTuning;

/// One pillar pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pillar {
    /// Left edge, shared by both halves
    pub x: f32,
    /// Extent of the top half from y = 0
    pub top_height: i32,
    /// First row of the bottom half (`top_height + gap_size`)
    pub bottom_y: i32,
    /// Extent of the bottom half (`SCREEN_HEIGHT - bottom_y`)
    pub bottom_height: i32,
    pub gap_size: i32,
    pub active: bool,
    /// Latched once the penguin is past the right edge
    pub passed: bool,
}

impl Pillar {
    /// Truncated screen column
    #[inline]
    pub fn column(&self) -> i32 {
        self.x as i32
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.column(), 0, PILLAR_WIDTH, self.top_height)
    }

    pub fn bottom_rect(&self) -> Rect {
        Rect::new(self.column(), self.bottom_y, PILLAR_WIDTH, self.bottom_height)
    }

    /// Does `rect` touch either half of this pillar?
    pub fn blocks(&self, rect: &Rect) -> bool {
        rect.overlaps_x(self.column(), PILLAR_WIDTH) && rect.leaves_band(self.top_height, self.bottom_y)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "PillarFieldSnapshot")]
pub struct PillarField {
    pillars: [Pillar; MAX_PILLARS],
    active_count: usize,
    scroll_speed: f32,
    spawn_timer: u32,
    spawn_interval: u32,
    difficulty_multiplier: f32,
    rng: Lcg,
    tuning: PillarTuning,
}

/// Wire form of a `PillarField`. The stored active count is ignored and
/// rebuilt from the slot flags on load.
#[derive(Deserialize)]
struct PillarFieldSnapshot {
    pillars: [Pillar; MAX_PILLARS],
    scroll_speed: f32,
    spawn_timer: u32,
    spawn_interval: u32,
    difficulty_multiplier: f32,
    rng: Lcg,
    tuning: PillarTuning,
}

impl From<PillarFieldSnapshot> for PillarField {
    fn from(snapshot: PillarFieldSnapshot) -> Self {
        let active_count = snapshot.pillars.iter().filter(|p| p.active).count();
        Self {
            pillars: snapshot.pillars,
            active_count,
            scroll_speed: snapshot.scroll_speed,
            spawn_timer: snapshot.spawn_timer,
            spawn_interval: snapshot.spawn_interval,
            difficulty_multiplier: snapshot.difficulty_multiplier,
            rng: snapshot.rng,
            tuning: snapshot.tuning,
        }
    }
}

impl Default for PillarField {
    fn default() -> Self {
        Self::new(PillarTuning::default())
    }
}

/// Difficulty below or at zero (or NaN) would stall or invert the field
fn sanitize_difficulty(difficulty: f32) -> f32 {
    if difficulty.is_finite() && difficulty > 0.0 {
        difficulty
    } else {
        1.0
    }
}

impl PillarField {
    pub fn new(tuning: PillarTuning) -> Self {
        let mut field = Self {
            pillars: [Pillar::default(); MAX_PILLARS],
            active_count: 0,
            scroll_speed: 0.0,
            spawn_timer: 0,
            spawn_interval: 0,
            difficulty_multiplier: 1.0,
            rng: Lcg::new(PILLAR_SEED),
            tuning,
        };
        field.init();
        field
    }

    /// Clear every slot, restore base speeds and rewind the generator
    pub fn init(&mut self) {
        self.reset();
        self.scroll_speed = self.tuning.base_scroll_speed;
        self.spawn_interval = self.tuning.base_spawn_interval;
        self.difficulty_multiplier = 1.0;
        self.rng.reseed(PILLAR_SEED);
    }

    /// Clear every slot and the spawn timer. The generator keeps its
    /// position, so the course after a reset differs from a fresh field.
    pub fn reset(&mut self) {
        self.pillars = [Pillar::default(); MAX_PILLARS];
        self.active_count = 0;
        self.spawn_timer = 0;
    }

    /// Advance one tick at the given difficulty
    pub fn update(&mut self, difficulty_multiplier: f32) {
        let difficulty = sanitize_difficulty(difficulty_multiplier);
        self.difficulty_multiplier = difficulty;
        self.scroll_speed = self.tuning.base_scroll_speed * difficulty;
        self.spawn_interval = (self.tuning.base_spawn_interval as f32 / difficulty) as u32;

        self.spawn_timer = self.spawn_timer.saturating_add(1);

        // A full pool leaves the timer running so the next free slot fills at once
        if self.spawn_timer >= self.spawn_interval && self.active_count < MAX_PILLARS {
            self.spawn_pillar();
            self.spawn_timer = 0;
        }

        let speed = self.scroll_speed;
        for pillar in self.pillars.iter_mut().filter(|p| p.active) {
            pillar.x -= speed;
        }

        self.remove_offscreen();
    }

    /// Claim the first free slot at the right edge. Returns the slot index,
    /// or `None` when the pool is full (the spawn is dropped).
    pub fn spawn_pillar(&mut self) -> Option<usize> {
        let index = self.pillars.iter().position(|p| !p.active)?;

        let t = self.tuning;
        let shrink = (self.difficulty_multiplier * t.gap_shrink_per_difficulty) as i32;
        let gap_size = (self.rng.next_inclusive(t.min_gap, t.max_gap) - shrink).max(t.min_gap);

        let min_y = t.gap_margin;
        let max_y = SCREEN_HEIGHT - gap_size - t.gap_margin;
        let top_height = self.rng.next_inclusive(min_y, max_y);
        let bottom_y = top_height + gap_size;

        self.pillars[index] = Pillar {
            x: SCREEN_WIDTH as f32,
            top_height,
            bottom_y,
            bottom_height: SCREEN_HEIGHT - bottom_y,
            gap_size,
            active: true,
            passed: false,
        };
        self.active_count += 1;
        debug_assert!(self.is_consistent());

        log::debug!(
            "Pillar spawned in slot {}: gap={} top={} bottom_y={}",
            index,
            gap_size,
            top_height,
            bottom_y
        );
        Some(index)
    }

    /// True if `rect` overlaps the solid part of any active pillar
    pub fn check_collision(&self, rect: &Rect) -> bool {
        self.active().any(|p| p.blocks(rect))
    }

    /// Latch every active pillar whose right edge is behind `x`.
    /// Returns true if at least one was newly passed.
    pub fn check_passed(&mut self, x: i32) -> bool {
        let mut any_passed = false;
        for pillar in self.pillars.iter_mut().filter(|p| p.active && !p.passed) {
            if x > pillar.column() + PILLAR_WIDTH {
                pillar.passed = true;
                any_passed = true;
            }
        }
        any_passed
    }

    /// Release slots that have scrolled fully past the left edge
    pub fn remove_offscreen(&mut self) {
        for pillar in self.pillars.iter_mut() {
            if pillar.active && pillar.x < -(PILLAR_WIDTH as f32) {
                pillar.active = false;
                pillar.passed = false;
                self.active_count -= 1;
            }
        }
        debug_assert!(self.is_consistent());
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Slot lookup; out-of-range indices yield `None`
    pub fn pillar(&self, index: usize) -> Option<&Pillar> {
        self.pillars.get(index)
    }

    pub fn pillars(&self) -> &[Pillar; MAX_PILLARS] {
        &self.pillars
    }

    pub fn active(&self) -> impl Iterator<Item = &Pillar> {
        self.pillars.iter().filter(|p| p.active)
    }

    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }

    pub fn spawn_interval(&self) -> u32 {
        self.spawn_interval
    }

    pub fn spawn_timer(&self) -> u32 {
        self.spawn_timer
    }

    pub fn difficulty_multiplier(&self) -> f32 {
        self.difficulty_multiplier
    }

    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }

    pub fn tuning(&self) -> &PillarTuning {
        &self.tuning
    }

    /// The cached active count matches the slot flags
    pub fn is_consistent(&self) -> bool {
        self.active_count == self.pillars.iter().filter(|p| p.active).count()
    }
}
