//! Button input sources
//!
//! The game polls exactly once per tick, before physics. Debouncing is the
//! source's business; the penguin's edge detection works on a raw boolean.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

pub trait InputSource {
    /// Is the primary button held this tick?
    fn poll(&mut self) -> bool;
}

impl<F: FnMut() -> bool> InputSource for F {
    fn poll(&mut self) -> bool {
        self()
    }
}

/// Replays a fixed button sequence, then stays released
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: Vec<bool>,
    cursor: usize,
    looping: bool,
}

impl ScriptedInput {
    pub fn new(script: Vec<bool>) -> Self {
        Self {
            script,
            cursor: 0,
            looping: false,
        }
    }

    /// Replay the script forever instead of releasing at the end
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Parse `1`/`#` as pressed and `0`/`.`/`_` as released. Whitespace is
    /// skipped; any other character makes the pattern invalid.
    pub fn parse(pattern: &str) -> Option<Self> {
        let mut script = Vec::with_capacity(pattern.len());
        for c in pattern.chars().filter(|c| !c.is_whitespace()) {
            match c {
                '1' | '#' => script.push(true),
                '0' | '.' | '_' => script.push(false),
                _ => return None,
            }
        }
        Some(Self::new(script))
    }

    /// Hold for `held` ticks, then release for `released` ticks
    pub fn hold_release(held: usize, released: usize) -> Self {
        let mut script = vec![true; held];
        script.resize(held + released, false);
        Self::new(script)
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        !self.looping && self.cursor >= self.script.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> bool {
        if self.script.is_empty() {
            return false;
        }
        if self.looping && self.cursor >= self.script.len() {
            self.cursor = 0;
        }
        let pressed = self.script.get(self.cursor).copied().unwrap_or(false);
        self.cursor = self.cursor.saturating_add(1);
        pressed
    }
}

/// Seeded button masher: alternating held and released runs of random
/// length. Same seed, same stream.
#[derive(Debug, Clone)]
pub struct RandomInput {
    rng: Pcg32,
    pressed: bool,
    remaining: u32,
    max_run: u32,
}

impl RandomInput {
    pub fn new(seed: u64) -> Self {
        Self::with_max_run(seed, 30)
    }

    /// Runs last between 1 and `max_run` ticks
    pub fn with_max_run(seed: u64, max_run: u32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            pressed: false,
            remaining: 0,
            max_run: max_run.max(1),
        }
    }
}

impl InputSource for RandomInput {
    fn poll(&mut self) -> bool {
        if self.remaining == 0 {
            self.pressed = self.rng.random_bool(0.5);
            self.remaining = self.rng.random_range(1..=self.max_run);
        }
        self.remaining -= 1;
        self.pressed
    }
}
