//! Transition table and default constants for the quadrature decoder.
//!
//! Each `update()` appends the current two-bit channel sample to the history
//! register. The low nibble of the history is then the pair
//! `[previous_sample, current_sample]`, which indexes [`DIRECTION_TABLE`]:
//!
//! ```text
//! index = (previous << 2) | current      sample = (A << 1) | B
//!
//! forward (up):    00 -> 01 -> 11 -> 10 -> 00
//! reverse (down):  00 -> 10 -> 11 -> 01 -> 00
//! ```
//!
//! Unchanged samples and two-bit jumps (noise or a missed edge) map to 0.

use crate::decoder::Direction;

// ---------------------------------------------------------------------------
// History register
// ---------------------------------------------------------------------------

/// History reset pattern for channels that rest HIGH (`A = 1, B = 1`).
pub const HISTORY_IDLE_HIGH: u8 = 0b11;

/// History reset pattern for channels that rest LOW (`A = 0, B = 0`).
pub const HISTORY_IDLE_LOW: u8 = 0b00;

/// Mask selecting the current sample in the history register.
pub const SAMPLE_MASK: u8 = 0b11;

/// Mask selecting the `[previous, current]` transition nibble.
pub const TRANSITION_MASK: u8 = 0x0F;

/// Step for every `[previous, current]` sample pair.
pub static DIRECTION_TABLE: [i8; 16] = [
    0, 1, -1, 0, //
    -1, 0, 0, 1, //
    1, 0, 0, -1, //
    0, -1, 1, 0, //
];

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default minimum time between two accepted steps, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u32 = 85;

/// Default lower position bound (inclusive).
pub const DEFAULT_POSITION_MIN: i32 = 0;

/// Default upper position bound (inclusive).
pub const DEFAULT_POSITION_MAX: i32 = 255;

/// Classify the most recent transition held in `history`.
pub(crate) fn classify(history: u8) -> Direction {
    Direction::from_step(DIRECTION_TABLE[(history & TRANSITION_MASK) as usize])
}
