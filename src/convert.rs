//! Conversion between output voltage and DAC code.
use crate::config::Gain;

/// Internal reference voltage.
pub const VREF: f32 = 2.048;

/// Number of DAC codes (12 bit).
pub const CODES: u32 = 1 << 12;

/// Convert a voltage to a DAC code for the given gain.
///
/// The result is truncated toward zero, not rounded, and not clamped.
/// Out-of-range codes (including negative ones) are rejected when the code is
/// written.
pub fn volts_to_code(volts: f32, gain: Gain) -> i32 {
    (volts * CODES as f32 / (VREF * gain.multiplier())) as i32
}

/// Nominal output voltage of a DAC code for the given gain.
pub fn code_to_volts(code: u16, gain: Gain) -> f32 {
    code as f32 * VREF * gain.multiplier() / CODES as f32
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exact() {
        assert_eq!(volts_to_code(1.024, Gain::One), 2048);
        assert_eq!(volts_to_code(1.024, Gain::Two), 1024);
        assert_eq!(volts_to_code(0.0, Gain::One), 0);
        // Full scale is one past the last code
        assert_eq!(volts_to_code(2.048, Gain::One), 4096);
        assert_eq!(volts_to_code(4.096, Gain::Two), 4096);
    }

    #[test]
    fn truncates() {
        // 1.5 LSB
        assert_eq!(volts_to_code(0.00075, Gain::One), 1);
        // 0.9 LSB
        assert_eq!(volts_to_code(0.00045, Gain::One), 0);
        // -0.8 LSB
        assert_eq!(volts_to_code(-0.0004, Gain::One), 0);
        assert_eq!(volts_to_code(-0.00125, Gain::One), -2);
        assert!(volts_to_code(-1.0, Gain::One) < 0);
    }

    #[test]
    fn inverse() {
        assert_eq!(code_to_volts(2048, Gain::One), 1.024);
        assert_eq!(code_to_volts(2048, Gain::Two), 2.048);
        assert!((code_to_volts(4095, Gain::One) - 2.0475).abs() < 1e-6);
        assert!((code_to_volts(1, Gain::Two) - 0.001).abs() < 1e-9);
    }
}
