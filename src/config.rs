// src/config.rs

use crate::temperature::Scale;

/// Pin assignment and output scale for one driver instance.
///
/// Pin numbers follow the scheme of the [`GpioPort`](crate::gpio::GpioPort)
/// implementation they are handed to. The configured pins are owned
/// exclusively by one driver for its whole lifetime; sharing them with
/// another reader gives undefined protocol behaviour.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// Active-low acquire/enable line. `None` means the sensor transmits
    /// continuously and enable control is a no-op.
    pub acquire: Option<u8>,
    /// Clock line; idles high, one falling/rising pair per bit.
    pub clock: u8,
    /// Data line, sampled on the clock's rising edge.
    pub data: u8,
    /// Scale applied to decoded readings.
    pub scale: Scale,
}

impl PinConfig {
    /// Clock/data-only configuration reporting Celsius.
    pub const fn new(clock: u8, data: u8) -> Self {
        Self {
            acquire: None,
            clock,
            data,
            scale: Scale::Celsius,
        }
    }

    pub const fn with_acquire(mut self, pin: u8) -> Self {
        self.acquire = Some(pin);
        self
    }

    pub const fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_celsius_without_acquire() {
        let config = PinConfig::new(27, 17);
        assert_eq!(config.acquire, None);
        assert_eq!(config.scale, Scale::Celsius);

        let config = config.with_acquire(22).with_scale(Scale::Fahrenheit);
        assert_eq!(config.acquire, Some(22));
        assert_eq!(config.scale, Scale::Fahrenheit);
    }
}
