//! The polled quadrature decoder.
//!
//! [`QuadratureDecoder`] samples both channels on every
//! [`update()`](QuadratureDecoder::update), classifies the transition from
//! the previous sample, and moves a bounded virtual position by one step per
//! accepted transition.

use embedded_hal::digital::InputPin;

use crate::clock::MillisClock;
use crate::config::{DecoderConfig, IdleLevel};
use crate::error::DecoderError;
use crate::table::{classify, SAMPLE_MASK};

// ── Direction ────────────────────────────────────────────────────────────

/// Direction of the most recent accepted step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// No step accepted since the last reset.
    #[default]
    None,
    /// Position counting up.
    Up,
    /// Position counting down.
    Down,
}

impl Direction {
    /// Map a table step (`-1`, `0`, `1`) to a direction.
    pub fn from_step(step: i8) -> Self {
        match step {
            s if s > 0 => Direction::Up,
            s if s < 0 => Direction::Down,
            _ => Direction::None,
        }
    }

    /// Signed step value: `1`, `-1` or `0`.
    pub fn as_step(self) -> i8 {
        match self {
            Direction::None => 0,
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}

// ── QuadratureDecoder ────────────────────────────────────────────────────

/// Debounced, bounded quadrature decoder over two GPIO inputs.
///
/// The decoder owns its channel pins once [`attach()`](Self::attach)ed and
/// reads time from a [`MillisClock`]. It does no work on its own: the caller
/// must call [`update()`](Self::update) from a polling loop or periodic timer
/// at least ~4× faster than the fastest expected edge rate.
///
/// # Debouncing
///
/// After a step is accepted, further steps are ignored until
/// `debounce_ms` have elapsed. The window throttles accepted steps only;
/// every `update()` still shifts a fresh sample into the history.
///
/// # Direction after idle updates
///
/// [`direction()`](Self::direction) reports the direction of the last
/// `update()` that returned `true`. Idle or debounced updates do **not**
/// reset it to [`Direction::None`]; only [`reset()`](Self::reset) does.
/// Check the return value of `update()` to know whether a step just happened.
///
/// # Position bounds
///
/// `min_position <= position <= max_position` holds after every call as
/// long as the bounds themselves are ordered. The bounds are not validated
/// against each other: with `min > max`, [`set_position()`](Self::set_position)
/// rejects every value and steps stop moving the position.
///
/// # Example
///
/// ```ignore
/// let mut decoder = QuadratureDecoder::new(EmbassyClock);
/// decoder.attach(pin_a, pin_b);
/// decoder.set_debounce_window(2);
///
/// if decoder.update()? && decoder.increased() {
///     volume_up();
/// }
/// ```
pub struct QuadratureDecoder<A, B, C> {
    channels: Option<(A, B)>,
    clock: C,
    idle_level: IdleLevel,
    history: u8,
    last_direction: Direction,
    min_position: i32,
    max_position: i32,
    position: i32,
    debounce_ms: u32,
    debouncing: bool,
    last_accepted_ms: u32,
}

impl<A, B, C> QuadratureDecoder<A, B, C>
where
    C: MillisClock,
{
    /// Create an unattached decoder with the default configuration
    /// (idle HIGH, 85 ms debounce, position range `0..=255`).
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, DecoderConfig::default())
    }

    /// Create an unattached decoder from `config`, then [`reset()`](Self::reset) it.
    pub fn with_config(clock: C, config: DecoderConfig) -> Self {
        let mut decoder = Self {
            channels: None,
            clock,
            idle_level: config.idle_level,
            history: 0,
            last_direction: Direction::None,
            min_position: config.min_position,
            max_position: config.max_position,
            position: config.min_position,
            debounce_ms: config.debounce_ms,
            debouncing: false,
            last_accepted_ms: 0,
        };
        decoder.reset();
        decoder
    }

    // -----------------------------------------------------------------------
    // Channel assignment
    // -----------------------------------------------------------------------

    /// Use `channel_a` and `channel_b` for all subsequent updates.
    ///
    /// Returns the previously attached pair, if any. History, position and
    /// timing state are left as they are.
    pub fn attach(&mut self, channel_a: A, channel_b: B) -> Option<(A, B)> {
        self.channels.replace((channel_a, channel_b))
    }

    /// Release the channel pins. Updates fail with
    /// [`DecoderError::NotAttached`] until the next [`attach()`](Self::attach).
    pub fn detach(&mut self) -> Option<(A, B)> {
        self.channels.take()
    }

    /// Returns `true` if channel pins are attached.
    pub fn is_attached(&self) -> bool {
        self.channels.is_some()
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Channels rest HIGH. Takes effect at the next [`reset()`](Self::reset).
    pub fn set_idle_high(&mut self) {
        self.idle_level = IdleLevel::HighWhenIdle;
    }

    /// Channels rest LOW. Takes effect at the next [`reset()`](Self::reset).
    pub fn set_idle_low(&mut self) {
        self.idle_level = IdleLevel::LowWhenIdle;
    }

    pub fn idle_level(&self) -> IdleLevel {
        self.idle_level
    }

    /// Set the minimum time between accepted steps. Zero disables rate limiting.
    pub fn set_debounce_window(&mut self, debounce_ms: u32) {
        self.debounce_ms = debounce_ms;
    }

    pub fn debounce_window(&self) -> u32 {
        self.debounce_ms
    }

    /// Returns `true` while the debounce window of the last accepted step is open.
    ///
    /// The window is only closed lazily by the next `update()`.
    pub fn is_debouncing(&self) -> bool {
        self.debouncing
    }

    /// Set the lower bound, raising the position to it if necessary.
    pub fn set_position_min(&mut self, min: i32) {
        self.min_position = min;
        if self.position < min {
            self.position = min;
        }
    }

    /// Set the upper bound, lowering the position to it if necessary.
    pub fn set_position_max(&mut self, max: i32) {
        self.max_position = max;
        if self.position > max {
            self.position = max;
        }
    }

    pub fn position_min(&self) -> i32 {
        self.min_position
    }

    pub fn position_max(&self) -> i32 {
        self.max_position
    }

    /// Set the position. Values outside `[min, max]` are silently ignored.
    pub fn set_position(&mut self, position: i32) {
        if position >= self.min_position && position <= self.max_position {
            self.position = position;
        }
    }

    /// Current virtual position.
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Return to start-up state: idle history, no debounce, no direction,
    /// position at the lower bound.
    pub fn reset(&mut self) {
        self.history = self.idle_level.history_pattern();
        self.debouncing = false;
        self.last_direction = Direction::None;
        self.position = self.min_position;

        #[cfg(feature = "defmt")]
        defmt::debug!("decoder reset: idle={}, position={}", self.idle_level, self.position);
    }

    /// Restart the debounce clock from now without touching position or
    /// the debouncing flag. Useful after a long pause in polling.
    pub fn retime(&mut self) {
        self.last_accepted_ms = self.clock.now_ms();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Direction of the last accepted step, or [`Direction::None`] if none
    /// since the last reset.
    pub fn direction(&self) -> Direction {
        self.last_direction
    }

    /// Returns `true` if the last accepted step counted up.
    pub fn increased(&self) -> bool {
        self.last_direction == Direction::Up
    }

    /// Returns `true` if the last accepted step counted down.
    pub fn decreased(&self) -> bool {
        self.last_direction == Direction::Down
    }
}

impl<A, B, C> QuadratureDecoder<A, B, C>
where
    A: InputPin,
    B: InputPin,
    C: MillisClock,
{
    /// Sample both channels and apply any accepted step.
    ///
    /// Returns `Ok(true)` when a step was accepted (even if the position was
    /// already at a bound and did not move), `Ok(false)` when the encoder is
    /// idle, the transition was invalid, or the debounce window is still
    /// open.
    ///
    /// # Errors
    /// * [`DecoderError::NotAttached`] if no pins are attached
    /// * [`DecoderError::ChannelA`] / [`DecoderError::ChannelB`] if a pin
    ///   read fails; the history is left unchanged
    pub fn update(&mut self) -> Result<bool, DecoderError<A::Error, B::Error>> {
        let sample = self.sample()?;

        self.history = (self.history << 2) | sample;
        let direction = classify(self.history);

        let now = self.clock.now_ms();
        if self.debouncing && now.wrapping_sub(self.last_accepted_ms) >= self.debounce_ms {
            self.debouncing = false;
        }

        if direction == Direction::None || self.debouncing {
            return Ok(false);
        }

        self.debouncing = true;
        match direction {
            Direction::Up if self.position < self.max_position => self.position += 1,
            Direction::Down if self.position > self.min_position => self.position -= 1,
            // At a bound: saturate, but the step still counts as accepted.
            _ => {}
        }
        self.last_accepted_ms = now;
        self.last_direction = direction;

        #[cfg(feature = "defmt")]
        defmt::trace!("step {} -> position {}", direction, self.position);

        Ok(true)
    }

    /// Read both channels as `(A << 1) | B`.
    fn sample(&mut self) -> Result<u8, DecoderError<A::Error, B::Error>> {
        let (channel_a, channel_b) = self
            .channels
            .as_mut()
            .ok_or(DecoderError::NotAttached)?;

        let a = channel_a.is_high().map_err(DecoderError::ChannelA)?;
        let b = channel_b.is_high().map_err(DecoderError::ChannelB)?;

        Ok((((a as u8) << 1) | b as u8) & SAMPLE_MASK)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────────
