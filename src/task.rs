//! Periodic polling task for Embassy firmware.
//!
//! [`decoder_poll_task`] drives [`QuadratureDecoder::update()`] from an
//! [`embassy_time::Ticker`] and publishes every accepted step into a shared
//! [`DecoderState`] for other tasks to read.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Ticker};
use embedded_hal::digital::InputPin;

use crate::clock::MillisClock;
use crate::config::PollConfig;
use crate::decoder::QuadratureDecoder;
use crate::state::DecoderState;

/// Periodic decoder polling loop.
///
/// This is a regular `async fn`, **not** an Embassy `#[task]`. Callers
/// create a thin, concrete task wrapper that calls it, since Embassy tasks
/// cannot be generic:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn encoder_task(
///     decoder: QuadratureDecoder<Input<'static>, Input<'static>, EmbassyClock>,
///     state: &'static Mutex<CriticalSectionRawMutex, DecoderState>,
/// ) {
///     decoder_poll_task(decoder, state, PollConfig::default()).await;
/// }
/// ```
///
/// # Control flow
///
/// 1. Tick at `config.poll_frequency_hz`.
/// 2. Call `update()`. The mutex is not held while sampling.
/// 3. On an accepted step, lock `state` just long enough to record it.
///
/// # Errors
///
/// Read errors are logged once per run of consecutive failures and the
/// loop keeps polling. The task never returns.
pub async fn decoder_poll_task<A, B, C>(
    mut decoder: QuadratureDecoder<A, B, C>,
    state: &'static Mutex<CriticalSectionRawMutex, DecoderState>,
    config: PollConfig,
) where
    A: InputPin,
    B: InputPin,
    C: MillisClock,
{
    #[cfg(feature = "defmt")]
    defmt::info!(
        "decoder polling at {} Hz, position {}",
        config.poll_frequency_hz,
        decoder.position()
    );

    {
        let mut shared = state.lock().await;
        shared.position = decoder.position();
    }

    let mut ticker = Ticker::every(Duration::from_micros(config.poll_period_us()));
    let mut failing = false;

    loop {
        ticker.next().await;

        match decoder.update() {
            Ok(true) => {
                failing = false;
                let mut shared = state.lock().await;
                shared.record(decoder.position(), decoder.direction());
            }
            Ok(false) => failing = false,
            Err(_e) => {
                if !failing {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("decoder read failed: {}", _e);
                    failing = true;
                }
            }
        }
    }
}
