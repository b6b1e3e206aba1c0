//! Per-channel output configuration.

use bitbybit::bitenum;
use serde::{Deserialize, Serialize};

use crate::Error;

/// DAC output channel.
#[bitenum(u1, exhaustive = true)]
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Channel {
    A = 0,
    B = 1,
}

impl Channel {
    pub const ALL: [Self; 2] = [Self::A, Self::B];
}

impl TryFrom<u8> for Channel {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::A),
            1 => Ok(Self::B),
            _ => Err(Error::InvalidArgument("channel index")),
        }
    }
}

/// Output amplifier gain.
///
/// The device encodes the gain select bit active-low for 2x.
#[bitenum(u1, exhaustive = true)]
#[derive(PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Gain {
    Two = 0,
    #[default]
    One = 1,
}

impl Gain {
    /// Full scale multiplier relative to the reference voltage.
    pub fn multiplier(&self) -> f32 {
        match self {
            Self::One => 1.0,
            Self::Two => 2.0,
        }
    }
}

/// Output stage power state.
///
/// In shutdown the output is high impedance.
#[bitenum(u1, exhaustive = true)]
#[derive(PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum PowerState {
    Shutdown = 0,
    #[default]
    Active = 1,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelConfig {
    pub gain: Gain,
    pub power: PowerState,
}

/// Configuration of both channels.
///
/// The default is gain 1x and active for both, so that the device is usable
/// without an explicit activation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub a: ChannelConfig,
    pub b: ChannelConfig,
}

impl Config {
    pub fn channel(&self, channel: Channel) -> &ChannelConfig {
        match channel {
            Channel::A => &self.a,
            Channel::B => &self.b,
        }
    }

    pub fn channel_mut(&mut self, channel: Channel) -> &mut ChannelConfig {
        match channel {
            Channel::A => &mut self.a,
            Channel::B => &mut self.b,
        }
    }
}
