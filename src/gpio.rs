// src/gpio.rs

/// Direction of a GPIO pin.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    Input,
    Output,
}

/// Abstraction for the digital I/O and millisecond clock required by the
/// TN9 protocol.
///
/// Pins are addressed by number in whatever scheme the implementation
/// uses (BCM numbering on a Raspberry Pi, for example). The contract is
/// infallible: reads and writes take effect immediately and cannot report
/// an I/O error, matching the memory-mapped GPIO ports this driver is
/// written against.
///
/// The port is an explicit injected value with no process-global setup
/// step behind it, which is what keeps the protocol state machine
/// testable against a scripted fake.
pub trait GpioPort {
    /// Configures a pin as input or output.
    fn set_pin_mode(&mut self, pin: u8, mode: PinMode);

    /// Reads the current level of a pin; `true` is high.
    fn digital_read(&mut self, pin: u8) -> bool;

    /// Drives an output pin; `true` is high.
    fn digital_write(&mut self, pin: u8, level: bool);

    /// Milliseconds elapsed on a monotonic clock. Only differences
    /// matter; the epoch is implementation-defined.
    fn millis(&self) -> u64;
}
