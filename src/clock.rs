//! Millisecond time sources for the debounce gate.

/// A free-running millisecond counter.
///
/// The counter must never go backwards, but it may wrap around at
/// `u32::MAX`. The decoder only ever looks at `now.wrapping_sub(then)`, so
/// a wrap between two accepted steps is harmless as long as the real
/// interval is shorter than ~49.7 days.
///
/// Any `Fn() -> u32` closure is a clock:
///
/// ```
/// use quadrature_decoder::MillisClock;
///
/// let clock = || 42u32;
/// assert_eq!(clock.now_ms(), 42);
/// ```
pub trait MillisClock {
    /// Current time in milliseconds.
    fn now_ms(&self) -> u32;
}

impl<F> MillisClock for F
where
    F: Fn() -> u32,
{
    fn now_ms(&self) -> u32 {
        self()
    }
}

/// Clock backed by the Embassy time driver.
///
/// The 64-bit [`embassy_time::Instant`] tick count is truncated to 32 bits,
/// which is exactly the wrapping behaviour [`MillisClock`] allows.
#[cfg(feature = "embassy")]
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmbassyClock;

#[cfg(feature = "embassy")]
impl MillisClock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}
