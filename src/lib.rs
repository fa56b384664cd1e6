//! Polled quadrature rotary encoder decoder for `embedded-hal` GPIO inputs.
//!
//! This crate turns the two raw channel signals of a mechanical or optical
//! rotary encoder into a debounced, bounded position counter. It talks to the
//! hardware only through [`embedded_hal::digital::InputPin`] and a
//! millisecond clock ([`MillisClock`]), so it runs on any HAL and on the host
//! under test.
//!
//! # Architecture
//!
//! - **`table`** (crate-private): The 16-entry transition lookup table and
//!   the default constants.
//! - **[`QuadratureDecoder`]** (public): Owns the channel pins, the sample
//!   history, the debounce gate and the virtual position.
//! - **[`DecoderState`]** (public): Snapshot published to other tasks.
//! - **[`decoder_poll_task`]** (feature `task`): Periodic Embassy loop that
//!   drives [`QuadratureDecoder::update()`] and publishes a [`DecoderState`].
//!
//! # Quick start
//!
//! ```ignore
//! use quadrature_decoder::QuadratureDecoder;
//!
//! let mut decoder = QuadratureDecoder::new(|| millis());
//! decoder.attach(pin_a, pin_b);
//! decoder.set_position_max(100);
//!
//! loop {
//!     if decoder.update()? {
//!         println!("position: {}", decoder.position());
//!     }
//! }
//! ```
//!
//! `update()` must be called at least ~4× faster than the fastest expected
//! edge rate of the encoder; the decoder cannot detect missed samples.
//!
//! # Concurrency
//!
//! [`QuadratureDecoder`] is a plain mutable struct with no internal locking.
//! If it (or its published state) is shared between an interrupt handler and
//! other code, wrap it in an external mutex such as
//! `embassy_sync::mutex::Mutex<CriticalSectionRawMutex, _>`.
//!
//! # Features
//!
//! - **`defmt`**: [`defmt::Format`] implementations and trace logging.
//! - **`embassy`**: [`EmbassyClock`] backed by `embassy_time::Instant`.
//! - **`task`**: The async [`decoder_poll_task`] (implies `embassy`).

#![no_std]

pub mod clock;
pub mod config;
pub mod decoder;
pub mod error;
pub mod state;
mod table;
#[cfg(feature = "task")]
pub mod task;

// ── Re-exports for convenience ───────────────────────────────────────────

#[cfg(feature = "embassy")]
pub use clock::EmbassyClock;
pub use clock::MillisClock;
pub use config::{DecoderConfig, IdleLevel, PollConfig};
pub use decoder::{Direction, QuadratureDecoder};
pub use error::DecoderError;
pub use state::DecoderState;
pub use table::{DEFAULT_DEBOUNCE_MS, DEFAULT_POSITION_MAX, DEFAULT_POSITION_MIN};
#[cfg(feature = "task")]
pub use task::decoder_poll_task;
