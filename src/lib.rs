//! Microchip MCP4822 dual 12 bit SPI DAC driver.
//!
//! The device is write-only. Each write is a single two byte frame carrying
//! the channel, its gain and power state, and the 12 bit code. The driver keeps
//! the per-channel configuration and sends it along with every code.
//!
//! ```ignore
//! let mut dac = Mcp4822::new(SpiTransport::new(spi, cs));
//! dac.set_gain(Channel::B, Gain::Two);
//! dac.write_volts(Channel::A, 1.0)?;
//! dac.write_volts(Channel::B, 3.3)?;
//! dac.shutdown(Channel::A)?;
//! ```
#![cfg_attr(not(test), no_std)]

use embedded_hal::spi;

mod config;
pub use config::*;
mod convert;
pub use convert::*;
mod dac;
pub use dac::*;
mod frame;
pub use frame::*;
mod transport;
pub use transport::*;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("Transfer failed: {0}")]
    TransferFailed(spi::ErrorKind),
}

impl<E: spi::Error> From<E> for Error {
    fn from(value: E) -> Self {
        Self::TransferFailed(value.kind())
    }
}

/// Failure of a both-channel operation.
///
/// The operation stops at the first failing channel.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("Channel {channel:?}: {error}")]
pub struct ChannelError {
    pub channel: Channel,
    #[source]
    pub error: Error,
}
