// src/temperature.rs

use crate::packet::RawPacket;

/// Temperature scale for values returned by the public read API.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Scale {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Scale {
    /// Unit suffix for display.
    pub const fn unit_label(self) -> &'static str {
        match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
        }
    }

    /// Converts a Celsius reading into this scale. Celsius values pass
    /// through unchanged.
    pub fn from_celsius(self, celsius: f32) -> f32 {
        match self {
            Scale::Celsius => celsius,
            Scale::Fahrenheit => celsius_to_fahrenheit(celsius),
        }
    }
}

/// Decodes the two data bytes of a validated packet into Celsius.
///
/// The sensor reports sixteenths of a Kelvin: `raw16 / 16 - 273.15`.
/// The division must stay in floating point to keep the fractional
/// part of the degree.
pub fn decode_celsius(packet: &RawPacket) -> f32 {
    let raw16 = u16::from_be_bytes([packet.msb(), packet.lsb()]);
    f32::from(raw16) / 16.0 - 273.15
}

/// `celsius * 9 / 5 + 32`.
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::{PacketType, TERMINATOR};

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn decodes_fixed_point_kelvin() {
        // raw16 = 0x1234 = 4660 -> 4660 / 16 - 273.15 = 18.10 °C
        let packet = RawPacket([PacketType::Ambient.tag(), 0x12, 0x34, 0xAC, TERMINATOR]);
        assert_close(decode_celsius(&packet), 18.10);
    }

    #[test]
    fn decodes_absolute_zero() {
        let packet = RawPacket([PacketType::Infrared.tag(), 0x00, 0x00, 0x4C, TERMINATOR]);
        assert_close(decode_celsius(&packet), -273.15);
    }

    #[test]
    fn converts_celsius_to_fahrenheit() {
        assert_close(celsius_to_fahrenheit(18.10), 64.58);
        assert_close(celsius_to_fahrenheit(0.0), 32.0);
        assert_close(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn scale_applies_conversion_only_for_fahrenheit() {
        assert_close(Scale::Celsius.from_celsius(18.10), 18.10);
        assert_close(Scale::Fahrenheit.from_celsius(18.10), 64.58);
    }

    #[test]
    fn unit_labels() {
        assert_eq!(Scale::Celsius.unit_label(), "°C");
        assert_eq!(Scale::Fahrenheit.unit_label(), "°F");
    }
}
