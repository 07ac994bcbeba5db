//! Game state machine, score and difficulty
//!
//! Transitions only happen through explicit calls; `update` never changes
//! the phase on its own.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::ScoringTuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first press
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for a press to restart
    GameOver,
    /// Reserved. `restart_game` goes straight to `Playing`.
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Whole seconds survived in the current run
    score: u32,
    /// Best score since the process started
    high_score: u32,
    /// Ticks spent in `Playing` this run
    frame_count: u32,
    difficulty_multiplier: f32,
    tuning: ScoringTuning,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(ScoringTuning::default())
    }
}

impl GameState {
    pub fn new(tuning: ScoringTuning) -> Self {
        Self {
            phase: GamePhase::Start,
            score: 0,
            high_score: 0,
            frame_count: 0,
            difficulty_multiplier: 1.0,
            tuning,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn difficulty_multiplier(&self) -> f32 {
        self.difficulty_multiplier
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Advance one tick. Only counts while `Playing`.
    pub fn update(&mut self) {
        if self.phase == GamePhase::Playing {
            self.frame_count = self.frame_count.saturating_add(1);
            self.update_score();
        }
    }

    /// Score is whole seconds survived; difficulty follows score
    pub fn update_score(&mut self) {
        let ticks = self.tuning.ticks_per_second.max(1);
        self.score = self.frame_count / ticks;
        self.difficulty_multiplier = 1.0 + self.score as f32 * self.tuning.difficulty_per_point;
    }

    /// Enter `Playing` with a fresh score
    pub fn start_game(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.frame_count = 0;
        self.difficulty_multiplier = 1.0;
    }

    /// Enter `GameOver`, folding the run into the high score
    pub fn end_game(&mut self) {
        self.phase = GamePhase::GameOver;
        self.high_score = self.high_score.max(self.score);
    }

    /// Start over, keeping only the high score
    pub fn restart_game(&mut self) {
        let high_score = self.high_score;
        *self = Self::new(self.tuning);
        self.high_score = high_score;
        self.start_game();
    }

    /// Plain AABB overlap between the penguin and one pillar half
    pub fn is_collision(&self, penguin: &Rect, pillar: &Rect) -> bool {
        penguin.overlaps(pillar)
    }

    /// Strict screen-edge violation; matches `Penguin::is_at_screen_edge`
    pub fn is_screen_edge_collision(&self, penguin: &Rect) -> bool {
        penguin.crosses_screen_edge()
    }
}
