//! Fixed timestep simulation tick
//!
//! Drives the state machine, the penguin and the pillar field in the one
//! order the game relies on: phase transitions, physics, pillars, passage,
//! collision, then the score.

use serde::{Deserialize, Serialize};

use super::penguin::Penguin;
use super::pillars::PillarField;
use super::state::{GamePhase, GameState};
use crate::tuning::Tuning;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Primary button held this tick
    pub pressed: bool,
}

impl From<bool> for TickInput {
    fn from(pressed: bool) -> Self {
        Self { pressed }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Restarted { high_score: u32 },
    PillarPassed { score: u32 },
    Crashed { final_score: u32 },
}

/// Events produced by one tick. At most one of each kind can fire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    events: [Option<GameEvent>; 3],
    len: usize,
}

impl TickReport {
    fn push(&mut self, event: GameEvent) {
        if let Some(slot) = self.events.get_mut(self.len) {
            *slot = Some(event);
            self.len += 1;
        }
    }

    pub fn events(&self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events[..self.len].iter().flatten().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn crashed(&self) -> bool {
        self.events()
            .any(|e| matches!(e, GameEvent::Crashed { .. }))
    }

    pub fn passed_pillar(&self) -> bool {
        self.events()
            .any(|e| matches!(e, GameEvent::PillarPassed { .. }))
    }
}

/// Everything the game loop owns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub state: GameState,
    pub penguin: Penguin,
    pub pillars: PillarField,
    /// Ticks since the world was created, in any phase
    pub time_ticks: u64,
}

impl Default for World {
    fn default() -> Self {
        Self::new(&Tuning::default())
    }
}

impl World {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            state: GameState::new(tuning.scoring),
            penguin: Penguin::new(tuning.physics),
            pillars: PillarField::new(tuning.pillars),
            time_ticks: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }
}

/// Advance the world by one fixed tick
pub fn tick(world: &mut World, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();
    world.time_ticks += 1;

    match world.state.phase {
        GamePhase::Start if input.pressed => {
            world.state.start_game();
            log::info!("Game started");
            report.push(GameEvent::Started);
        }
        GamePhase::GameOver if input.pressed => {
            world.state.restart_game();
            world.penguin.reset();
            // Slots only; the pillar generator carries on from where it was
            world.pillars.reset();
            let high_score = world.state.high_score();
            log::info!("Game restarted (high score {})", high_score);
            report.push(GameEvent::Restarted { high_score });
        }
        _ => {}
    }

    if !world.state.is_playing() {
        return report;
    }

    world.penguin.update(input.pressed);
    world
        .pillars
        .update(world.state.difficulty_multiplier());

    let penguin_rect = world.penguin.rect();
    if world.pillars.check_passed(penguin_rect.x) {
        let score = world.state.score();
        log::debug!("Pillar passed! Score: {}", score);
        report.push(GameEvent::PillarPassed { score });
    }

    if world.pillars.check_collision(&penguin_rect) {
        let final_score = world.state.score();
        log::info!("Collision detected! Final score: {}", final_score);
        world.state.end_game();
        report.push(GameEvent::Crashed { final_score });
    }

    world.state.update();
    report
}
