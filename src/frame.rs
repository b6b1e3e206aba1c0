use arbitrary_int::u12;
use bitbybit::bitfield;

use crate::config::{Channel, ChannelConfig, Gain, PowerState};

/// Two byte write command, sent most significant byte first.
///
/// ```text
/// Byte0: [CH][G][SHDN][-][S11 S10 S9 S8]
/// Byte1: [S7 S6 S5 S4 S3 S2 S1 S0]
/// ```
#[bitfield(u16, default = 0x0000)]
#[derive(Debug, PartialEq)]
pub struct Frame {
    #[bits(0..=11, rw)]
    pub sample: u12,
    #[bits(13..=13, rw)]
    pub power: PowerState,
    #[bits(14..=14, rw)]
    pub gain: Gain,
    #[bits(15..=15, rw)]
    pub channel: Channel,
}

impl Frame {
    pub fn from_config(
        channel: Channel,
        config: &ChannelConfig,
        sample: u12,
    ) -> Self {
        Self::default()
            .with_channel(channel)
            .with_gain(config.gain)
            .with_power(config.power)
            .with_sample(sample)
    }

    pub fn encode(&self) -> [u8; 2] {
        self.raw_value().to_be_bytes()
    }

    pub fn decode(bytes: [u8; 2]) -> Self {
        Self::new_with_raw_value(u16::from_be_bytes(bytes))
    }

    pub fn config(&self) -> ChannelConfig {
        ChannelConfig {
            gain: self.gain(),
            power: self.power(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use arbitrary_int::Number;

    #[test]
    fn layout() {
        let cfg = ChannelConfig {
            gain: Gain::One,
            power: PowerState::Active,
        };
        assert_eq!(
            Frame::from_config(Channel::A, &cfg, u12::new(0x000)).encode(),
            [0x60, 0x00]
        );
        assert_eq!(
            Frame::from_config(Channel::B, &cfg, u12::new(0xabc)).encode(),
            [0xea, 0xbc]
        );
        let cfg = ChannelConfig {
            gain: Gain::Two,
            power: PowerState::Shutdown,
        };
        assert_eq!(
            Frame::from_config(Channel::B, &cfg, u12::new(0xfff)).encode(),
            [0x8f, 0xff]
        );
        assert_eq!(
            Frame::from_config(Channel::A, &cfg, u12::new(0x123)).encode(),
            [0x01, 0x23]
        );
    }

    #[test]
    fn decode_recovers_fields() {
        for channel in Channel::ALL {
            for gain in [Gain::One, Gain::Two] {
                for power in [PowerState::Active, PowerState::Shutdown] {
                    let cfg = ChannelConfig { gain, power };
                    for s in 0..=u12::MAX.value() {
                        let bytes =
                            Frame::from_config(channel, &cfg, u12::new(s))
                                .encode();
                        // unused bit
                        assert_eq!(bytes[0] & 0x10, 0);
                        let frame = Frame::decode(bytes);
                        assert_eq!(frame.channel(), channel);
                        assert_eq!(frame.config(), cfg);
                        assert_eq!(frame.sample().value(), s);
                    }
                }
            }
        }
    }
}
