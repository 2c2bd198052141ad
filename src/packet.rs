// src/packet.rs

use crate::error::Tn9Error;

/// Number of bytes in one measurement packet.
pub const PACKET_SIZE: usize = 5;

/// Fixed terminator carried in the last byte of every packet.
pub const TERMINATOR: u8 = 0x0D;

/// Tag seen on the wire but never requested; possibly version info.
/// Packets carrying it are skipped like any other non-matching packet.
pub const RESERVED_TAG: u8 = 0x53;

/// Measurement kind a packet carries, identified by its first byte.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PacketType {
    /// Ambient (sensor die) temperature.
    Ambient = 0x66,
    /// Infrared (object) temperature.
    Infrared = 0x4C,
}

impl PacketType {
    /// Returns the on-wire tag byte.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

/// One 5-byte frame as assembled off the wire:
/// `[type, msb, lsb, checksum, terminator]`.
///
/// A packet is never valid in isolation; validity is judged against the
/// measurement type the caller asked for, see [`RawPacket::validate`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawPacket(pub [u8; PACKET_SIZE]);

impl RawPacket {
    #[inline]
    pub const fn type_tag(&self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub const fn msb(&self) -> u8 {
        self.0[1]
    }

    #[inline]
    pub const fn lsb(&self) -> u8 {
        self.0[2]
    }

    #[inline]
    pub const fn checksum(&self) -> u8 {
        self.0[3]
    }

    #[inline]
    pub const fn terminator(&self) -> u8 {
        self.0[4]
    }

    /// Sum of the tag and both data bytes, truncated to 8 bits. This is
    /// the value the sensor places in the fourth byte.
    #[inline]
    pub const fn computed_checksum(&self) -> u8 {
        self.0[0].wrapping_add(self.0[1]).wrapping_add(self.0[2])
    }

    /// Checks this packet against the measurement type the caller
    /// requested.
    ///
    /// All three rules must hold: the tag matches `requested`, the
    /// fourth byte equals the mod-256 sum of the first three, and the
    /// fifth byte is the fixed terminator. A failure here is a signal to
    /// keep reading, not to give up the read.
    pub fn validate(&self, requested: PacketType) -> Result<(), Tn9Error> {
        if self.type_tag() != requested.tag() {
            return Err(Tn9Error::WrongPacketType {
                expected: requested.tag(),
                got: self.type_tag(),
            });
        }
        let calculated = self.computed_checksum();
        if self.checksum() != calculated {
            return Err(Tn9Error::ChecksumMismatch {
                expected: self.checksum(),
                calculated,
            });
        }
        if self.terminator() != TERMINATOR {
            return Err(Tn9Error::BadTerminator(self.terminator()));
        }
        Ok(())
    }
}
