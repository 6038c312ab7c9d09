//! Implements the 16-bit CRC-CCITT checksum used to validate frames before or after
//! error correction.
//!
//! Each byte is shifted MSB-first through a 16-bit accumulator, the way a hardware shift
//! register computes the checksum, so no table or augmentation step is needed.

/// Generator polynomial x<sup>16</sup> + x<sup>12</sup> + x<sup>5</sup> + 1, with the
/// implicit x<sup>16</sup> term dropped.
pub const CCITT_GEN: u16 = 0x1021;

/// Streaming CRC-CCITT calculator with a zero initial value and no final inversion.
#[derive(Copy, Clone, Debug, Default)]
pub struct CrcCcitt {
    /// Current remainder.
    accum: u16,
}

impl CrcCcitt {
    /// Construct a new `CrcCcitt` with empty output.
    pub fn new() -> CrcCcitt {
        CrcCcitt { accum: 0 }
    }

    /// Feed in a single byte.
    pub fn feed_byte(&mut self, byte: u8) -> &mut Self {
        let mut data = (byte as u16) << 8;

        for _ in 0..8 {
            // Feedback is taken when the incoming bit differs from the register's MSB.
            self.accum = if (data ^ self.accum) & 0x8000 != 0 {
                (self.accum << 1) ^ CCITT_GEN
            } else {
                self.accum << 1
            };

            data <<= 1;
        }

        self
    }

    /// Feed in the given byte stream.
    pub fn feed_bytes<T: IntoIterator<Item = u8>>(&mut self, bytes: T) -> &mut Self {
        for byte in bytes {
            self.feed_byte(byte);
        }

        self
    }

    /// Retrieve the CRC of all bytes fed so far.
    pub fn finish(&self) -> u16 { self.accum }
}

/// Compute the CRC-CCITT checksum of the given bytes.
pub fn crc_ccitt(data: &[u8]) -> u16 {
    CrcCcitt::new().feed_bytes(data.iter().cloned()).finish()
}
