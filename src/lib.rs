// src/lib.rs

#![no_std] // Specify no_std at the crate root

#[cfg(test)]
extern crate std;

pub mod config;
pub mod driver;
pub mod error;
pub mod gpio;
pub mod packet;
pub mod temperature;
pub mod timing;

// Re-export key types for convenience
pub use config::PinConfig;
pub use driver::Tn9;
pub use error::Tn9Error;
pub use gpio::{GpioPort, PinMode};
pub use packet::{PacketType, RawPacket};
pub use temperature::Scale;
