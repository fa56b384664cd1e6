//! Simple decoder example
//!
//! Demonstrates basic usage of the quadrature-decoder crate on the Raspberry
//! Pi Pico 2. A polling task samples a bare rotary encoder every millisecond
//! and publishes its position; the main task logs every change via defmt.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                        |
//! |-----------|------------|------------------------------|
//! | ENC A     | GP14       | Pull-up enabled, idles HIGH  |
//! | ENC B     | GP15       | Pull-up enabled, idles HIGH  |
//! | ENC C     | GND        | Common pin                   |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use quadrature_decoder::{
    decoder_poll_task, DecoderConfig, DecoderState, EmbassyClock, PollConfig, QuadratureDecoder,
};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

type Decoder = QuadratureDecoder<Input<'static>, Input<'static>, EmbassyClock>;

/// Latest decoder output, written by the polling task and read by main.
static DECODER_STATE: StaticCell<Mutex<CriticalSectionRawMutex, DecoderState>> = StaticCell::new();

/// Concrete wrapper around the generic polling loop.
#[embassy_executor::task]
async fn decoder_task(
    decoder: Decoder,
    state: &'static Mutex<CriticalSectionRawMutex, DecoderState>,
) {
    decoder_poll_task(decoder, state, PollConfig::default()).await;
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- Encoder channels (GP14 = A, GP15 = B, common to GND) ---
    let channel_a = Input::new(p.PIN_14, Pull::Up);
    let channel_b = Input::new(p.PIN_15, Pull::Up);

    // --- Decoder: 0..=100, light rate limiting for a detented knob ---
    let config = DecoderConfig {
        debounce_ms: 2,
        max_position: 100,
        ..DecoderConfig::default()
    };
    let mut decoder = QuadratureDecoder::with_config(EmbassyClock, config);
    decoder.attach(channel_a, channel_b);
    decoder.set_position(50);

    info!("Decoder example started at position {}", decoder.position());

    let state = DECODER_STATE.init(Mutex::new(DecoderState::new()));
    spawner.spawn(decoder_task(decoder, state)).unwrap();

    // Main loop: sample the shared state and log anything new.
    let mut last = DecoderState::new();
    loop {
        Timer::after(Duration::from_millis(50)).await;

        let current = *state.lock().await;
        if current.steps != last.steps {
            info!(
                "Position: {} ({}, {} steps)",
                current.position,
                current.direction,
                current.steps_since(&last),
            );
            last = current;
        }
    }
}
