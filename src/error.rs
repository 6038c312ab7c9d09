//! Standard errors that may occur when encoding and decoding codewords.

use thiserror::Error;

/// Codec runtime errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum CodecError {
    /// The message doesn't fit in a codeword alongside the parity symbols.
    #[error("message of {len} bytes exceeds the {max}-byte limit")]
    MessageTooLong { len: usize, max: usize },
    /// A codeword is shorter than its parity or longer than the field allows.
    #[error("codeword of {len} bytes outside the {min}..={max} byte range")]
    CodewordLength { len: usize, min: usize, max: usize },
    /// A caller-provided buffer has the wrong size for the operation.
    #[error("buffer holds {len} bytes, expected {expected}")]
    BufferLength { len: usize, expected: usize },
    /// An erasure index lies outside the codeword.
    #[error("erasure at {pos} lies outside a {len}-byte codeword")]
    ErasureOutOfRange { pos: usize, len: usize },
    /// The same erasure index was given more than once.
    #[error("erasure at {0} given more than once")]
    DuplicateErasure(usize),
    /// More erasures were given than there are parity symbols.
    #[error("{count} erasures exceed the {max} parity symbols")]
    TooManyErasures { count: usize, max: usize },
    /// The code has an odd number of parity symbols, which gives it an even distance.
    #[error("parity count {0} must be even")]
    ParityCount(usize),
    /// A polynomial product would overflow the fixed coefficient storage.
    #[error("polynomial of degree {degree} exceeds storage for degree {max}")]
    CapacityExceeded { degree: usize, max: usize },
    /// Attempted to invert the zero field element.
    #[error("zero has no multiplicative inverse")]
    ZeroInverse,
    /// Too many errors and erasures were detected to correct the codeword.
    #[error("codeword is uncorrectable")]
    Uncorrectable,
}

impl CodecError {
    /// Check if the error stems from misuse of the codec (bad sizes, bad erasure lists)
    /// rather than from the received data.
    pub fn is_configuration(&self) -> bool {
        use self::CodecError::*;

        match *self {
            MessageTooLong { .. } | CodewordLength { .. } | BufferLength { .. } |
                ErasureOutOfRange { .. } | DuplicateErasure(_) | TooManyErasures { .. } |
                ParityCount(_) | CapacityExceeded { .. } => true,
            ZeroInverse | Uncorrectable => false,
        }
    }
}

/// Standard result using `CodecError`.
pub type Result<T> = std::result::Result<T, CodecError>;
