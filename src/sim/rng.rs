//! Linear-congruential generator used for pillar layout
//!
//! Owned by the pillar field instead of living in global state, so two
//! fields never disturb each other's sequence.

use serde::{Deserialize, Serialize};

const MULTIPLIER: u32 = 1_103_515_245;
const INCREMENT: u32 = 12_345;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn reseed(&mut self, seed: u32) {
        self.state = seed;
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }

    /// Draw from `min..=max`. Empty ranges collapse to `min`.
    pub fn next_inclusive(&mut self, min: i32, max: i32) -> i32 {
        let raw = self.next_u32();
        if max <= min {
            return min;
        }
        let span = (max - min) as u32 + 1;
        min + (raw % span) as i32
    }
}
