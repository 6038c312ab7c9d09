//! Reed-Solomon forward error correction over GF(2<sup>8</sup>) for small, fixed memory
//! footprints.
//!
//! A codec is built once for a parity count and then encodes messages into systematic
//! codewords and corrects received codewords in place:
//!
//! ```
//! use rsecc::{Decoded, ReedSolomon10};
//!
//! let rs = ReedSolomon10::new().unwrap();
//! let mut word = rs.encode(b"hello").unwrap();
//!
//! word[1] ^= 0x20;
//! word[12] = 0;
//!
//! assert_eq!(rs.decode(&mut word, &[12]).unwrap(), Decoded::Corrected(2));
//! assert_eq!(rs.message(&word), b"hello");
//! ```

pub mod coding;
pub mod crc;
pub mod error;

pub use coding::reed_solomon::{
    Decoded,
    ReedSolomon,
    ReedSolomon8,
    ReedSolomon10,
    ReedSolomon16,
    ReedSolomon32,
};
pub use crc::crc_ccitt;
pub use error::{CodecError, Result};
