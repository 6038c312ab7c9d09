//! Decodes Reed-Solomon codes with errors and erasures using the Berlekamp-Massey, Chien
//! Search, and Forney algorithms.
//!
//! # Decoding Procedure
//!
//! The standard procedure for Reed-Solomon errors-and-erasures correction has the
//! following steps:
//!
//! 1. Generate the syndrome polynomial s(x) = s<sub>0</sub> + s<sub>1</sub>x + ··· +
//!    s<sub>2t-1</sub>x<sup>2t-1</sup>, where s<sub>i</sub> = r(α<sup>i</sup>) using the
//!    received word polynomial r(x).
//! 2. From the ρ known erasure locations X<sub>1</sub>, ..., X<sub>ρ</sub>, build the
//!    erasure locator Γ(x) = (1 + X<sub>1</sub>x) ··· (1 + X<sub>ρ</sub>x).
//! 3. Use s(x), seeded with Γ(x), to build the errata locator polynomial Λ(x), where
//!    deg(Λ(x)) = ρ + e is the number of erasures plus detected errors and 2e + ρ ≤ 2t.
//! 4. Find the roots X<sub>1</sub><sup>-1</sup>, ..., X<sub>E</sub><sup>-1</sup> of Λ(x).
//!    If X<sub>i</sub> = α<sup>m<sub>i</sub></sup>, the errata sits at the x<sup>m<sub>i</sub></sup>
//!    term of the received word.
//! 5. Verify that deg(Λ(x)) = E.
//! 6. Construct the errata evaluator polynomial Ω(x) = Λ(x)s(x) mod x<sup>2t</sup> and
//!    compute each errata pattern b<sub>i</sub> = X<sub>i</sub>Ω(X<sub>i</sub><sup>-1</sup>)
//!    / Λ'(X<sub>i</sub><sup>-1</sup>).
//!
//! This module implements steps 2 through 4 and 6. The leading X<sub>i</sub> factor in
//! step 6 comes from the generator's first root being α<sup>0</sup>.
//!
//! # Berlekamp-Massey Algorithm
//!
//! Λ(x) is viewed as the connection polynomial of the shortest linear feedback shift
//! register that generates the syndromes. Erasures are folded in by starting the
//! register at Γ(x) with length ρ and skipping the first ρ syndromes, which Γ(x) already
//! accounts for.
//!
//! # Chien Search
//!
//! With Λ(x) = Λ<sub>0</sub> + Λ<sub>1</sub>x + ··· + Λ<sub>e</sub>x<sup>e</sup>, keep
//! the terms P<sub>i</sub>[k] = Λ<sub>k</sub>α<sup>ik</sup> so that Λ(α<sup>i</sup>) =
//! sum(P<sub>i</sub>), and step to the next power with P<sub>i+1</sub>[k] =
//! P<sub>i</sub>[k]⋅α<sup>k</sup>.
//!
//! # Forney Algorithm
//!
//! The Forney algorithm reduces computing errata patterns to evaluating Ω(x) / Λ'(x),
//! which needs no polynomial long division.

use crate::coding::galois::{Gf256, Polynomial, PolynomialCoefs, FIELD_SIZE};
use crate::error::{CodecError, Result};

/// Build the erasure locator Γ(x) = ∏(1 + X<sub>i</sub>x) from the given erasure
/// locations X<sub>i</sub>.
pub fn erasure_locator<P, T>(locs: T) -> Result<Polynomial<P>>
    where P: PolynomialCoefs, T: IntoIterator<Item = Gf256>
{
    locs.into_iter().try_fold(Polynomial::unit_power(0), |gamma, x| {
        gamma.checked_mul(Polynomial::new([Gf256::for_power(0), x].iter().cloned()))
            .ok_or_else(|| CodecError::CapacityExceeded {
                degree: gamma.degree().map_or(1, |d| d + 1),
                max: gamma.max_degree(),
            })
    })
}

/// Finds the errata locator polynomial Λ(x) from the syndrome polynomial s(x) and the
/// erasure locator Γ(x).
pub struct ErrorLocator<P: PolynomialCoefs> {
    /// Syndrome polynomial: s(x).
    syn: Polynomial<P>,
    /// Current connection polynomial: Λ(x).
    loc: Polynomial<P>,
    /// Correction polynomial from the last length change: B(x).
    prev: Polynomial<P>,
    /// Current register length: L.
    len: usize,
    /// Number of erasures folded into the initial register: ρ.
    erasures: usize,
}

impl<P: PolynomialCoefs> ErrorLocator<P> {
    /// Construct a new `ErrorLocator` from the given syndrome polynomial s(x) and erasure
    /// locator Γ(x), which is 1 when there are no erasures.
    pub fn new(syn: Polynomial<P>, gamma: Polynomial<P>) -> ErrorLocator<P> {
        let erasures = gamma.degree().unwrap_or(0);

        ErrorLocator {
            syn,
            loc: gamma,
            prev: gamma,
            len: erasures,
            erasures,
        }
    }

    /// Construct the errata locator polynomial Λ(x).
    pub fn build(mut self) -> Result<Polynomial<P>> {
        for k in self.erasures..P::syndromes() {
            self.step(k)?;
        }

        Ok(self.loc)
    }

    /// Compute the discrepancy between syndrome s<sub>k</sub> and the value predicted by
    /// the current register.
    fn discrepancy(&self, k: usize) -> Gf256 {
        (0..=k).fold(Gf256::default(), |sum, j| {
            sum + self.loc.coef(j) * self.syn.coef(k - j)
        })
    }

    /// Perform one iterative step of the algorithm for syndrome s<sub>k</sub>, updating
    /// the register polynomials and length.
    fn step(&mut self, k: usize) -> Result<()> {
        let delta = self.discrepancy(k);
        let shifted = self.prev.shift_up();

        if delta.zero() {
            self.prev = shifted;
            return Ok(());
        }

        let next = self.loc + shifted * delta;

        if 2 * self.len <= k + self.erasures {
            self.prev = self.loc * delta.invert()?;
            self.len = k + 1 + self.erasures - self.len;
        } else {
            self.prev = shifted;
        }

        self.loc = next;

        Ok(())
    }
}

/// Finds the roots of the given errata locator polynomial Λ(x).
///
/// This performs the standard brute force method, evaluating each Λ(α<sup>i</sup>) for 0
/// ≤ i < 2<sup>8</sup> - 1, with the Chien Search optimization.
pub struct PolynomialRoots<P: PolynomialCoefs> {
    /// Terms A = [Λ<sub>0</sub>α<sup>0</sup>, ..., Λ<sub>e</sub>α<sup>ie</sup>] such that
    /// Λ(α<sup>i</sup>) = sum(A) for the current power i.
    terms: P,
    /// Current power the polynomial is being evaluated with.
    pow: std::ops::Range<usize>,
}

impl<P: PolynomialCoefs> PolynomialRoots<P> {
    /// Construct a new `PolynomialRoots` from the given errata locator polynomial Λ(x).
    pub fn new(loc: Polynomial<P>) -> Self {
        let mut terms = P::default();
        terms.copy_from_slice(&loc[..]);

        PolynomialRoots {
            terms,
            pow: 0..FIELD_SIZE,
        }
    }

    /// Update each term's coefficient to its value when evaluated for the next power.
    fn update_terms(&mut self) {
        for (pow, term) in self.terms.iter_mut().enumerate() {
            *term = *term * Gf256::for_power(pow);
        }
    }

    /// Compute Λ(α<sup>i</sup>), where i is the current power.
    fn eval(&self) -> Gf256 {
        self.terms.iter().fold(Gf256::default(), |sum, &x| sum + x)
    }
}

/// Iterate over all roots α<sup>i</sup> of Λ(x).
impl<P: PolynomialCoefs> Iterator for PolynomialRoots<P> {
    type Item = Gf256;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let pow = self.pow.next()?;

            // Compute Λ(α^i), then update to Λ(α^{i+1}).
            let eval = self.eval();
            self.update_terms();

            if eval.zero() {
                return Some(Gf256::for_power(pow));
            }
        }
    }
}

/// Computes errata locations and patterns from the roots of the errata locator
/// polynomial Λ(x).
pub struct ErrorDescriptions<P: PolynomialCoefs> {
    /// Derivative of errata locator polynomial: Λ'(x).
    deriv: Polynomial<P>,
    /// Errata evaluator polynomial: Ω(x) = Λ(x)s(x) mod x<sup>2t</sup>.
    vals: Polynomial<P>,
}

impl<P: PolynomialCoefs> ErrorDescriptions<P> {
    /// Create a new `ErrorDescriptions` from the given syndrome polynomial s(x) and
    /// errata locator polynomial Λ(x).
    pub fn new(syn: Polynomial<P>, loc: Polynomial<P>) -> Self {
        ErrorDescriptions {
            deriv: loc.deriv(),
            // Terms past the storage are dropped by the product, but only terms below
            // x^{2t} are kept anyway.
            vals: (loc * syn).truncate(P::syndromes() - 1),
        }
    }

    /// Compute the errata location and pattern for the given root
    /// X<sub>i</sub><sup>-1</sup> of Λ(x).
    ///
    /// The location is returned as the power m in X<sub>i</sub> = α<sup>m</sup>, which is
    /// the degree of the corrupted term. Fails with `ZeroInverse` if Λ'(x) vanishes at the
    /// root, which happens only for repeated roots of an invalid locator.
    pub fn for_root(&self, root: Gf256) -> Result<(usize, Gf256)> {
        let loc = root.invert()?;
        let pow = loc.power().ok_or(CodecError::ZeroInverse)?;

        Ok((pow, loc * self.vals.eval(root) * self.deriv.eval(root).invert()?))
    }
}
