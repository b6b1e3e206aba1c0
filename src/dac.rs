use arbitrary_int::{u12, Number};
use log::{debug, warn};

use crate::config::{Channel, ChannelConfig, Config, Gain, PowerState};
use crate::convert::volts_to_code;
use crate::frame::Frame;
use crate::transport::{Transport, TRANSFER_TIMEOUT};
use crate::{ChannelError, Error};

/// Check that a code fits the 12 bit DAC range.
fn sample(code: i32) -> Result<u12, Error> {
    u16::try_from(code)
        .ok()
        .filter(|c| *c <= u12::MAX.value())
        .map(u12::new)
        .ok_or(Error::InvalidArgument("code out of range"))
}

/// MCP4822 driver.
///
/// Owns the transport and the configuration of both channels. The device
/// only latches gain and power state together with a code, so configuration
/// changes are stored until the next write unless sent explicitly
/// ([`Mcp4822::shutdown`], [`Mcp4822::activate`], [`Mcp4822::apply`]).
pub struct Mcp4822<T> {
    transport: T,
    config: Config,
}

impl<T: Transport> Mcp4822<T> {
    /// Both channels start at gain 1x and active. Nothing is sent.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, Config::default())
    }

    pub fn with_config(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    pub fn release(self) -> T {
        self.transport
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn channel_config(&self, channel: Channel) -> &ChannelConfig {
        self.config.channel(channel)
    }

    /// Change the gain of a channel. Takes effect with the next write.
    pub fn set_gain(&mut self, channel: Channel, gain: Gain) {
        debug!("DAC {channel:?} gain {gain:?}");
        self.config.channel_mut(channel).gain = gain;
    }

    /// Change the power state of a channel and send it with a zero code.
    pub fn set_power(
        &mut self,
        channel: Channel,
        power: PowerState,
    ) -> Result<(), Error> {
        debug!("DAC {channel:?} power {power:?}");
        self.config.channel_mut(channel).power = power;
        self.write_raw(channel, 0)
    }

    pub fn shutdown(&mut self, channel: Channel) -> Result<(), Error> {
        self.set_power(channel, PowerState::Shutdown)
    }

    pub fn activate(&mut self, channel: Channel) -> Result<(), Error> {
        self.set_power(channel, PowerState::Active)
    }

    /// Store a configuration for both channels and send it with zero codes.
    pub fn apply(&mut self, config: Config) -> Result<(), ChannelError> {
        self.config = config;
        self.for_both(|dac, channel| dac.write_raw(channel, 0))
    }

    fn send(&mut self, channel: Channel, code: i32) -> Result<(), Error> {
        let frame = Frame::from_config(
            channel,
            self.config.channel(channel),
            sample(code)?,
        );
        let bytes = frame.encode();
        debug!("DAC {channel:?} frame {bytes:02x?}");

        let res = self.transport.assert_select().and_then(|()| {
            self.transport.blocking_transfer(&bytes, TRANSFER_TIMEOUT)
        });
        let release = self.transport.deassert_select();
        res.and(release).map_err(|e| {
            let e = Error::from(e);
            warn!("DAC {channel:?} write failed: {e}");
            e
        })
    }

    /// Send a single frame for `channel` with its current configuration.
    ///
    /// Chip-select is released after the transfer, also on failure.
    pub fn write_raw(
        &mut self,
        channel: Channel,
        sample: u16,
    ) -> Result<(), Error> {
        self.send(channel, i32::from(sample))
    }

    /// Write the same code to A and then B.
    pub fn write_raw_both(
        &mut self,
        sample: u16,
    ) -> Result<(), ChannelError> {
        self.for_both(|dac, channel| dac.write_raw(channel, sample))
    }

    /// Convert `volts` with the channel's current gain and write it.
    ///
    /// See [`volts_to_code`] for the truncation behavior.
    pub fn write_volts(
        &mut self,
        channel: Channel,
        volts: f32,
    ) -> Result<(), Error> {
        if volts.is_nan() {
            return Err(Error::InvalidArgument("volts is NaN"));
        }
        let code = volts_to_code(volts, self.config.channel(channel).gain);
        self.send(channel, code)
    }

    /// Write the same voltage to A and then B, each with its own gain.
    pub fn write_volts_both(
        &mut self,
        volts: f32,
    ) -> Result<(), ChannelError> {
        self.for_both(|dac, channel| dac.write_volts(channel, volts))
    }

    fn for_both(
        &mut self,
        mut op: impl FnMut(&mut Self, Channel) -> Result<(), Error>,
    ) -> Result<(), ChannelError> {
        for channel in Channel::ALL {
            op(self, channel)
                .map_err(|error| ChannelError { channel, error })?;
        }
        Ok(())
    }
}
