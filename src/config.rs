//! Decoder and polling configuration.

use crate::table::{
    DEFAULT_DEBOUNCE_MS, DEFAULT_POSITION_MAX, DEFAULT_POSITION_MIN, HISTORY_IDLE_HIGH,
    HISTORY_IDLE_LOW,
};

// ── IdleLevel ────────────────────────────────────────────────────────────

/// Logic level both channels rest at while the encoder is stationary.
///
/// Encoders wired to pulled-up inputs with common-to-ground idle HIGH; the
/// level only seeds the history register on [`reset()`].
///
/// [`reset()`]: crate::QuadratureDecoder::reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IdleLevel {
    /// Both channels read HIGH at rest.
    #[default]
    HighWhenIdle,
    /// Both channels read LOW at rest.
    LowWhenIdle,
}

impl IdleLevel {
    /// The two-bit sample the channels produce at rest.
    pub fn history_pattern(self) -> u8 {
        match self {
            IdleLevel::HighWhenIdle => HISTORY_IDLE_HIGH,
            IdleLevel::LowWhenIdle => HISTORY_IDLE_LOW,
        }
    }
}

// ── DecoderConfig ────────────────────────────────────────────────────────

/// Start-up settings for a [`QuadratureDecoder`](crate::QuadratureDecoder).
///
/// [`DecoderConfig::default()`] matches what
/// [`QuadratureDecoder::new()`](crate::QuadratureDecoder::new) uses. Every
/// field can still be changed later through the decoder's setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecoderConfig {
    /// Channel rest level. Default: [`IdleLevel::HighWhenIdle`].
    pub idle_level: IdleLevel,
    /// Minimum time between two accepted steps in ms. Default: 85. Zero
    /// disables rate limiting.
    pub debounce_ms: u32,
    /// Lower position bound (inclusive). Default: 0.
    pub min_position: i32,
    /// Upper position bound (inclusive). Default: 255.
    pub max_position: i32,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            idle_level: IdleLevel::HighWhenIdle,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_position: DEFAULT_POSITION_MIN,
            max_position: DEFAULT_POSITION_MAX,
        }
    }
}

// ── PollConfig ───────────────────────────────────────────────────────────

/// Configuration for the async polling task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollConfig {
    /// How often `update()` is called, in Hz. Default: 1000.
    ///
    /// Must be at least ~4× the fastest expected edge rate of the encoder.
    pub poll_frequency_hz: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            poll_frequency_hz: 1000,
        }
    }
}

impl PollConfig {
    /// Convert the configured frequency to a ticker period in microseconds.
    ///
    /// Formula: `1_000_000 / poll_frequency_hz`, with 0 Hz treated as 1 Hz.
    pub fn poll_period_us(&self) -> u64 {
        1_000_000 / self.poll_frequency_hz.max(1) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_patterns() {
        assert_eq!(IdleLevel::HighWhenIdle.history_pattern(), 0b11);
        assert_eq!(IdleLevel::LowWhenIdle.history_pattern(), 0b00);
        assert_eq!(IdleLevel::default(), IdleLevel::HighWhenIdle);
    }

    #[test]
    fn decoder_config_defaults() {
        let cfg = DecoderConfig::default();
        assert_eq!(cfg.idle_level, IdleLevel::HighWhenIdle);
        assert_eq!(cfg.debounce_ms, 85);
        assert_eq!(cfg.min_position, 0);
        assert_eq!(cfg.max_position, 255);
    }

    #[test]
    fn poll_period() {
        assert_eq!(PollConfig::default().poll_period_us(), 1000);
        let cfg = PollConfig { poll_frequency_hz: 4000 };
        assert_eq!(cfg.poll_period_us(), 250);
        let cfg = PollConfig { poll_frequency_hz: 0 };
        assert_eq!(cfg.poll_period_us(), 1_000_000);
    }
}
