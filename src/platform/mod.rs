//! Platform abstraction layer
//!
//! Handles the collaborators the simulation only sees through narrow seams:
//! - Input: one boolean per tick
//! - Time: wall-clock deltas folded into fixed ticks

pub mod clock;
pub mod input;

pub use clock::FixedStep;
pub use input::{InputSource, RandomInput, ScriptedInput};
