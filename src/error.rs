// src/error.rs

/// Protocol-level failures raised while acquiring a packet.
///
/// Only [`Timeout`](Tn9Error::Timeout) ever reaches a caller of the
/// public read API; the sensor link is lossy, so the driver retries past
/// every rejected packet until the read window runs out. The validation
/// variants name the rejection reason for the retry loop, logging, and
/// tests.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tn9Error {
    /// The read window elapsed before a packet was accepted.
    #[error("read timed out")]
    Timeout,

    /// Well-formed packet carrying a different measurement tag.
    #[error("wrong packet type: expected {expected:#04x}, got {got:#04x}")]
    WrongPacketType { expected: u8, got: u8 },

    /// Fourth byte does not match the mod-256 sum of the first three.
    #[error("checksum mismatch: expected {expected:#04x}, calculated {calculated:#04x}")]
    ChecksumMismatch { expected: u8, calculated: u8 },

    /// Fifth byte is not the fixed 0x0D terminator.
    #[error("bad terminator byte: {0:#04x}")]
    BadTerminator(u8),
}
