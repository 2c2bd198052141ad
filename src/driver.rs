// src/driver.rs

use crate::config::PinConfig;
use crate::error::Tn9Error;
use crate::gpio::{GpioPort, PinMode};
use crate::packet::{PacketType, RawPacket, PACKET_SIZE};
use crate::temperature;
use crate::timing;

/// Driver for one TN9 sensor. Owns the GPIO port, and with it the
/// protocol pins, for its whole lifetime.
///
/// Reads are synchronous and blocking: every edge wait is a busy-poll
/// spin with a per-iteration deadline check, because the bit timing is
/// faster than typical OS sleep granularity.
#[derive(Debug)]
pub struct Tn9<P: GpioPort> {
    port: P,
    config: PinConfig,
}

impl<P: GpioPort> Tn9<P> {
    /// Claims the pins and leaves the sensor disabled.
    ///
    /// Clock and data become inputs; the acquire line, when configured,
    /// becomes an output driven high (enable is active-low). No other
    /// GPIO setup is performed.
    pub fn new(mut port: P, config: PinConfig) -> Self {
        port.set_pin_mode(config.clock, PinMode::Input);
        port.set_pin_mode(config.data, PinMode::Input);
        if let Some(acquire) = config.acquire {
            port.set_pin_mode(acquire, PinMode::Output);
            port.digital_write(acquire, true);
        }
        Tn9 { port, config }
    }

    /// Releases the GPIO port, giving the pins back to the caller.
    pub fn free(self) -> P {
        self.port
    }

    /// Ambient (sensor die) temperature in the configured scale, or NaN
    /// if no valid packet arrived within the read window.
    pub fn ambient_temperature(&mut self) -> f32 {
        self.read(PacketType::Ambient)
    }

    /// Infrared (object) temperature in the configured scale, or NaN if
    /// no valid packet arrived within the read window.
    pub fn infrared_temperature(&mut self) -> f32 {
        self.read(PacketType::Infrared)
    }

    /// Drives the sensor's transmitter on or off by writing the inverse
    /// of `active` to the acquire line (active-low convention). No-op
    /// without an acquire pin.
    pub fn set_enabled(&mut self, active: bool) {
        if let Some(acquire) = self.config.acquire {
            self.port.digital_write(acquire, !active);
        }
    }

    /// Timeout is the only failure mode the public API surfaces: the
    /// link is lossy and callers are expected to poll again, so a miss
    /// maps to NaN rather than an error.
    fn read(&mut self, kind: PacketType) -> f32 {
        match self.read_temperature(kind) {
            Ok(value) => value,
            Err(_) => f32::NAN,
        }
    }

    /// Runs the acquire/read/validate loop for one measurement.
    ///
    /// The deadline is fixed on entry; rejected packets retry against
    /// the same deadline, so a noisy line can only fail by running the
    /// window out. The sensor is disabled again on every exit path.
    fn read_temperature(&mut self, kind: PacketType) -> Result<f32, Tn9Error> {
        let deadline = self.port.millis() + timing::READ_TIMEOUT.as_millis() as u64;
        self.set_enabled(true);

        let result = loop {
            let packet = match self.read_packet(deadline) {
                Ok(packet) => packet,
                Err(e) => break Err(e),
            };
            match packet.validate(kind) {
                Ok(()) => break Ok(packet),
                Err(_rejection) => {
                    #[cfg(feature = "defmt")]
                    defmt::trace!("packet rejected: {}", _rejection);
                }
            }
        };

        self.set_enabled(false);

        let packet = result?;
        let celsius = temperature::decode_celsius(&packet);
        Ok(self.config.scale.from_celsius(celsius))
    }

    /// Assembles one 5-byte packet off the wire without validating it.
    ///
    /// The clock idles high; the sensor shifts data out on the falling
    /// edge and we sample on the rising edge, MSB first within each
    /// byte. Hitting the deadline anywhere in the 40-bit assembly aborts
    /// with [`Tn9Error::Timeout`]; a partial packet is never returned.
    fn read_packet(&mut self, deadline: u64) -> Result<RawPacket, Tn9Error> {
        let mut bytes = [0u8; PACKET_SIZE];
        for byte in bytes.iter_mut() {
            for bit in (0..8).rev() {
                self.wait_for_clock(false, deadline)?;
                self.wait_for_clock(true, deadline)?;
                if self.port.digital_read(self.config.data) {
                    *byte |= 1 << bit;
                }
            }
        }
        Ok(RawPacket(bytes))
    }

    /// Busy-polls until the clock line reads `level`, checking the
    /// deadline on every iteration.
    fn wait_for_clock(&mut self, level: bool, deadline: u64) -> Result<(), Tn9Error> {
        while self.port.digital_read(self.config.clock) != level {
            if self.port.millis() >= deadline {
                #[cfg(feature = "defmt")]
                defmt::debug!("clock edge wait timed out");
                return Err(Tn9Error::Timeout);
            }
        }
        Ok(())
    }
}
