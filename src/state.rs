//! Decoder snapshot shared with other tasks.

use crate::decoder::Direction;

/// Latest decoder output, published by the polling loop.
///
/// Kept separate from the decoder so that readers only need a short lock on
/// a small `Copy` value, never on the pins or the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecoderState {
    /// Position after the last accepted step.
    pub position: i32,
    /// Direction of the last accepted step.
    pub direction: Direction,
    /// Accepted steps since start-up, including saturated ones. Wraps.
    pub steps: u32,
}

impl DecoderState {
    pub const fn new() -> Self {
        Self {
            position: 0,
            direction: Direction::None,
            steps: 0,
        }
    }

    /// Record one accepted step.
    pub fn record(&mut self, position: i32, direction: Direction) {
        self.position = position;
        self.direction = direction;
        self.steps = self.steps.wrapping_add(1);
    }

    /// Number of steps recorded since `earlier` was taken.
    pub fn steps_since(&self, earlier: &DecoderState) -> u32 {
        self.steps.wrapping_sub(earlier.steps)
    }
}
