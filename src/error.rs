//! Error types for the quadrature decoder.

use core::fmt;

/// Errors that can occur while sampling the encoder channels.
///
/// The decoding itself never fails: noise, skipped steps and out-of-range
/// configuration are absorbed silently. Only the HAL read of a channel pin
/// can fail, and sampling an unattached decoder is reported instead of
/// being left undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderError<EA, EB> {
    /// Reading channel A failed.
    ChannelA(EA),

    /// Reading channel B failed.
    ChannelB(EB),

    /// [`update()`](crate::QuadratureDecoder::update) was called before
    /// [`attach()`](crate::QuadratureDecoder::attach).
    NotAttached,
}

impl<EA: fmt::Debug, EB: fmt::Debug> fmt::Display for DecoderError<EA, EB> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecoderError::ChannelA(e) => write!(f, "Channel A read error: {:?}", e),
            DecoderError::ChannelB(e) => write!(f, "Channel B read error: {:?}", e),
            DecoderError::NotAttached => write!(f, "Encoder channels not attached"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<EA, EB> defmt::Format for DecoderError<EA, EB> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DecoderError::ChannelA(_e) => defmt::write!(f, "Channel A read error"),
            DecoderError::ChannelB(_e) => defmt::write!(f, "Channel B read error"),
            DecoderError::NotAttached => defmt::write!(f, "Not attached"),
        }
    }
}
