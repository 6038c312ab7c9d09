//! Systematic encoding and errors-and-erasures decoding of shortened Reed-Solomon codes
//! over GF(2<sup>8</sup>).
//!
//! A codeword is the message bytes followed by the parity bytes. As a polynomial, the
//! first message byte is the coefficient of highest degree and the last parity byte is
//! the degree-0 coefficient, so a codeword of n bytes holds the terms x<sup>n-1</sup>
//! down to x<sup>0</sup>. The generator polynomial has the roots α<sup>0</sup>, ...,
//! α<sup>2t-1</sup>.
//!
//! These algorithms follow *Coding Theory and Cryptography: The Essentials*, Hankerson,
//! Hoffman, et al, 2000, and *Algebraic Codes for Data Transmission*, Blahut, 2003.

use collect_slice::CollectSlice;
use log::{debug, trace};

use crate::coding::bmcf::{erasure_locator, ErrorDescriptions, ErrorLocator, PolynomialRoots};
use crate::coding::galois::{Gf256, Polynomial, PolynomialCoefs, FIELD_SIZE};
use crate::error::{CodecError, Result};

/// Maximum number of bytes in a codeword.
pub const MAX_CODEWORD: usize = FIELD_SIZE;

crate::impl_polynomial_coefs!(
    /// Polynomial coefficients for the code with 8 parity bytes.
    Npar8, 8
);

crate::impl_polynomial_coefs!(
    /// Polynomial coefficients for the code with 10 parity bytes.
    Npar10, 10
);

crate::impl_polynomial_coefs!(
    /// Polynomial coefficients for the code with 16 parity bytes.
    Npar16, 16
);

crate::impl_polynomial_coefs!(
    /// Polynomial coefficients for the code with 32 parity bytes.
    Npar32, 32
);

/// Codec correcting up to 4 errors or 8 erasures.
pub type ReedSolomon8 = ReedSolomon<Npar8>;

/// Codec correcting up to 5 errors or 10 erasures.
pub type ReedSolomon10 = ReedSolomon<Npar10>;

/// Codec correcting up to 8 errors or 16 erasures.
pub type ReedSolomon16 = ReedSolomon<Npar16>;

/// Codec correcting up to 16 errors or 32 erasures.
pub type ReedSolomon32 = ReedSolomon<Npar32>;

/// Successful outcome of decoding a codeword.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Decoded {
    /// All syndromes were zero and the codeword was left untouched.
    NoError,
    /// The given number of errata positions (errors plus erasures) were located and
    /// corrected in place.
    Corrected(usize),
}

impl Decoded {
    /// Number of corrected positions.
    pub fn corrected(&self) -> usize {
        match *self {
            Decoded::NoError => 0,
            Decoded::Corrected(n) => n,
        }
    }
}

/// Errata found in a received word, ready to be applied.
#[derive(Copy, Clone)]
struct Errata<P: PolynomialCoefs> {
    /// Errata locations X<sub>i</sub> = α<sup>m<sub>i</sub></sup>.
    ///
    /// Like the other fields, this isn't interpreted as a polynomial. The coefficient
    /// storage is just a conveniently sized buffer.
    locs: P,
    /// Errata patterns b<sub>i</sub>.
    pats: P,
    /// Number of valid entries.
    count: usize,
}

/// Decoder states. Each transition is performed by a method of `ReedSolomon`.
enum Stage<P: PolynomialCoefs> {
    /// Evaluate the received word at each generator root.
    Syndromes,
    /// Build the errata locator Λ(x) from the syndromes and known erasures.
    LocatorSolving(Polynomial<P>),
    /// Find the roots of Λ(x).
    RootSearch {
        syn: Polynomial<P>,
        loc: Polynomial<P>,
    },
    /// Compute the pattern at each root.
    MagnitudeCompute {
        syn: Polynomial<P>,
        loc: Polynomial<P>,
        roots: P,
    },
    /// Correct the word in place and verify the result.
    Apply(Errata<P>),
    /// Decoding finished.
    Done(Decoded),
}

/// Log the reason a word can't be corrected and return the corresponding error.
fn uncorrectable(reason: std::fmt::Arguments) -> CodecError {
    debug!("uncorrectable: {}", reason);
    CodecError::Uncorrectable
}

/// Reed-Solomon encoder/decoder with the parity count given by the coefficient storage.
///
/// Constructing the codec builds the generator polynomial once; every encode and decode
/// then borrows it immutably, so one codec can serve any number of independent buffers.
#[derive(Copy, Clone)]
pub struct ReedSolomon<P: PolynomialCoefs> {
    /// Generator polynomial g(x) = (x + α<sup>0</sup>) ··· (x + α<sup>2t-1</sup>).
    gen: Polynomial<P>,
}

impl<P: PolynomialCoefs> ReedSolomon<P> {
    /// Construct a new `ReedSolomon` codec, building its generator polynomial.
    ///
    /// Fails if the parity count is odd, the coefficient storage can't hold the decoder's
    /// polynomials, or there are more parity symbols than the field has distinct roots.
    pub fn new() -> Result<Self> {
        if P::distance() % 2 == 0 {
            return Err(CodecError::ParityCount(P::distance().saturating_sub(1)));
        }

        let coefs = P::default();

        if coefs.len() <= P::max_degree() || P::syndromes() >= FIELD_SIZE {
            return Err(CodecError::CapacityExceeded {
                degree: P::max_degree(),
                max: std::cmp::min(coefs.len(), FIELD_SIZE) - 1,
            });
        }

        let gen = (0..P::syndromes()).try_fold(Polynomial::unit_power(0), |gen, pow| {
            let factor = Polynomial::new([
                Gf256::for_power(pow),
                Gf256::for_power(0),
            ].iter().cloned());

            gen.checked_mul(factor).ok_or(CodecError::CapacityExceeded {
                degree: pow + 1,
                max: gen.max_degree(),
            })
        })?;

        debug!("built generator {:?}", gen);

        Ok(ReedSolomon { gen })
    }

    /// Number of parity bytes appended to each message: 2t.
    pub fn parity_len(&self) -> usize { P::syndromes() }

    /// Maximum number of message bytes in a codeword.
    pub fn max_message_len(&self) -> usize { MAX_CODEWORD - P::syndromes() }

    /// Retrieve the generator polynomial g(x).
    pub fn generator(&self) -> &Polynomial<P> { &self.gen }

    /// Encode the given message, returning the message followed by its parity bytes.
    pub fn encode(&self, msg: &[u8]) -> Result<Vec<u8>> {
        let mut word = vec![0; msg.len() + P::syndromes()];
        self.encode_into(msg, &mut word)?;

        Ok(word)
    }

    /// Encode the given message into the given buffer, which must be exactly as long as
    /// the message plus parity.
    pub fn encode_into(&self, msg: &[u8], word: &mut [u8]) -> Result<()> {
        if msg.len() > self.max_message_len() {
            return Err(CodecError::MessageTooLong {
                len: msg.len(),
                max: self.max_message_len(),
            });
        }

        if word.len() != msg.len() + P::syndromes() {
            return Err(CodecError::BufferLength {
                len: word.len(),
                expected: msg.len() + P::syndromes(),
            });
        }

        word[..msg.len()].copy_from_slice(msg);
        self.write_parity(word);

        Ok(())
    }

    /// Calculate the parity bytes for the message at the start of the given buffer,
    /// overwriting the last 2t bytes.
    pub fn encode_in_place(&self, word: &mut [u8]) -> Result<()> {
        self.check_codeword(word.len())?;
        self.write_parity(word);

        Ok(())
    }

    /// Divide m(x)x<sup>2t</sup> by g(x) and place the remainder in the parity bytes.
    ///
    /// This runs the division as a shift register of 2t symbols, so the message itself
    /// never needs to be stored as a polynomial.
    fn write_parity(&self, word: &mut [u8]) {
        let npar = P::syndromes();

        if npar == 0 {
            return;
        }

        let (data, parity) = word.split_at_mut(word.len() - npar);
        let mut reg = P::default();

        for &byte in data.iter() {
            let feedback = Gf256::new(byte) + reg[npar - 1];

            for j in (1..npar).rev() {
                reg[j] = reg[j - 1] + self.gen.coef(j) * feedback;
            }

            reg[0] = self.gen.coef(0) * feedback;
        }

        // The highest-degree remainder term comes first.
        reg[..npar].iter().rev().map(|c| c.bits()).collect_slice_checked(parity);
    }

    /// Calculate the syndrome polynomial s(x) for the given word, where s<sub>i</sub> =
    /// r(α<sup>i</sup>).
    pub fn syndromes(&self, word: &[u8]) -> Result<Polynomial<P>> {
        self.check_codeword(word.len())?;

        Ok(Polynomial::new((0..P::syndromes()).map(|pow| {
            let root = Gf256::for_power(pow);

            word.iter().fold(Gf256::default(), |acc, &byte| acc * root + Gf256::new(byte))
        })))
    }

    /// Check if the given word has any nonzero syndrome, meaning it isn't a codeword.
    pub fn has_errors(&self, word: &[u8]) -> Result<bool> {
        Ok(!self.syndromes(word)?.is_zero())
    }

    /// Retrieve the message bytes of the given codeword.
    pub fn message<'a>(&self, word: &'a [u8]) -> &'a [u8] {
        &word[..word.len().saturating_sub(P::syndromes())]
    }

    /// Try to correct the given word in place, with no known erasures.
    pub fn correct(&self, word: &mut [u8]) -> Result<Decoded> {
        self.decode(word, &[])
    }

    /// Try to correct the given word in place, using the given byte indices as known
    /// erasures.
    ///
    /// Succeeds as long as 2e + ρ ≤ 2t for e errors and ρ erasures. Otherwise,
    /// `Uncorrectable` is returned and the word is left untouched.
    pub fn decode(&self, word: &mut [u8], erasures: &[usize]) -> Result<Decoded> {
        self.check_codeword(word.len())?;
        self.check_erasures(word.len(), erasures)?;

        let mut stage = Stage::Syndromes;

        loop {
            stage = match stage {
                Stage::Syndromes => self.compute_syndromes(word)?,
                Stage::LocatorSolving(syn) => self.solve_locator(word.len(), syn, erasures)?,
                Stage::RootSearch { syn, loc } => self.search_roots(syn, loc)?,
                Stage::MagnitudeCompute { syn, loc, roots } =>
                    self.compute_magnitudes(word.len(), syn, loc, roots)?,
                Stage::Apply(errata) => self.apply(word, errata)?,
                Stage::Done(decoded) => return Ok(decoded),
            };
        }
    }

    /// Verify the word length is within the code's limits.
    fn check_codeword(&self, len: usize) -> Result<()> {
        if len < P::syndromes() || len > MAX_CODEWORD {
            return Err(CodecError::CodewordLength {
                len,
                min: P::syndromes(),
                max: MAX_CODEWORD,
            });
        }

        Ok(())
    }

    /// Verify the erasure indices are distinct, in range, and few enough to correct.
    fn check_erasures(&self, len: usize, erasures: &[usize]) -> Result<()> {
        if erasures.len() > P::syndromes() {
            return Err(CodecError::TooManyErasures {
                count: erasures.len(),
                max: P::syndromes(),
            });
        }

        for (i, &pos) in erasures.iter().enumerate() {
            if pos >= len {
                return Err(CodecError::ErasureOutOfRange { pos, len });
            }

            if erasures[..i].contains(&pos) {
                return Err(CodecError::DuplicateErasure(pos));
            }
        }

        Ok(())
    }

    fn compute_syndromes(&self, word: &[u8]) -> Result<Stage<P>> {
        let syn = self.syndromes(word)?;
        trace!("syndromes {:?}", syn);

        Ok(if syn.is_zero() {
            Stage::Done(Decoded::NoError)
        } else {
            Stage::LocatorSolving(syn)
        })
    }

    fn solve_locator(&self, len: usize, syn: Polynomial<P>, erasures: &[usize])
        -> Result<Stage<P>>
    {
        // The byte at index i holds the x^{n-1-i} term.
        let gamma = erasure_locator(erasures.iter().map(|&pos| {
            Gf256::for_power(len - 1 - pos)
        }))?;

        let loc = ErrorLocator::new(syn, gamma).build()
            .map_err(|_| uncorrectable(format_args!("degenerate locator")))?;

        trace!("errata locator {:?}", loc);

        let errata = loc.degree().unwrap_or(0);

        if errata == 0 {
            return Err(uncorrectable(format_args!("no errata located")));
        }

        // With e = deg(Λ) - ρ errors, require 2e + ρ ≤ 2t.
        if 2 * errata > P::syndromes() + erasures.len() {
            return Err(uncorrectable(format_args!(
                "{} errata with {} erasures exceed capacity", errata, erasures.len())));
        }

        Ok(Stage::RootSearch { syn, loc })
    }

    fn search_roots(&self, syn: Polynomial<P>, loc: Polynomial<P>) -> Result<Stage<P>> {
        let mut roots = P::default();
        let count = PolynomialRoots::new(loc).collect_slice(&mut roots[..]);

        // If the number of roots is different than deg(Λ), then the roots are invalid and
        // the word is unrecoverable.
        if Some(count) != loc.degree() {
            return Err(uncorrectable(format_args!(
                "found {} roots for locator of degree {:?}", count, loc.degree())));
        }

        Ok(Stage::MagnitudeCompute { syn, loc, roots })
    }

    fn compute_magnitudes(&self, len: usize, syn: Polynomial<P>, loc: Polynomial<P>,
                          roots: P)
        -> Result<Stage<P>>
    {
        let descs = ErrorDescriptions::new(syn, loc);
        let count = loc.degree().unwrap_or(0);

        let mut errata = Errata {
            locs: P::default(),
            pats: P::default(),
            count,
        };

        for i in 0..count {
            let (pow, pat) = descs.for_root(roots[i])
                .map_err(|_| uncorrectable(format_args!("locator derivative vanished")))?;

            // Roots past the shortened word's length point at nonexistent bytes.
            if pow >= len {
                return Err(uncorrectable(format_args!(
                    "errata at x^{} outside {}-byte word", pow, len)));
            }

            errata.locs[i] = Gf256::for_power(pow);
            errata.pats[i] = pat;
        }

        Ok(Stage::Apply(errata))
    }

    fn apply(&self, word: &mut [u8], errata: Errata<P>) -> Result<Stage<P>> {
        let flip = |word: &mut [u8]| {
            let len = word.len();

            for i in 0..errata.count {
                if let Some(pow) = errata.locs[i].power() {
                    word[len - 1 - pow] ^= errata.pats[i].bits();
                }
            }
        };

        flip(word);

        // A pattern beyond the code's capacity can produce a locator that passes every
        // other check, so make sure the result is actually a codeword.
        if self.has_errors(word)? {
            flip(word);
            return Err(uncorrectable(format_args!("corrected word has nonzero syndromes")));
        }

        Ok(Stage::Done(Decoded::Corrected(errata.count)))
    }
}

impl<P: PolynomialCoefs> std::fmt::Debug for ReedSolomon<P> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "ReedSolomon({:?})", self.gen)
    }
}
