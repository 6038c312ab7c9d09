//! Galois field arithmetic for codeword symbols and polynomials.

use collect_slice::CollectSlice;

use crate::error::{CodecError, Result};

/// Number of nonzero elements in GF(2<sup>8</sup>), which is also the order of α.
pub const FIELD_SIZE: usize = 255;

/// Primitive polynomial characterizing the field: x<sup>8</sup> + x<sup>4</sup> +
/// x<sup>3</sup> + x<sup>2</sup> + 1.
pub const PRIMITIVE_POLY: u16 = 0x11D;

/// Length of the exponent table. Doubling the period lets a product of two elements be
/// looked up at the sum of their logarithms (at most 2·254) without a modulo.
const EXP_LEN: usize = 2 * FIELD_SIZE + 2;

/// Exponent and logarithm tables for GF(2<sup>8</sup>).
pub struct GaloisField {
    /// Maps power i to α<sup>i</sup>, repeated over two periods.
    exp: [u8; EXP_LEN],
    /// Maps nonzero α<sup>i</sup> to i. Entry 0 is unused.
    log: [u8; 256],
}

impl GaloisField {
    /// Build the tables by repeatedly multiplying by α = x and reducing modulo the
    /// primitive polynomial.
    pub const fn new() -> GaloisField {
        let mut exp = [0u8; EXP_LEN];
        let mut log = [0u8; 256];

        let mut x: u16 = 1;
        let mut i = 0;

        while i < FIELD_SIZE {
            exp[i] = x as u8;
            exp[i + FIELD_SIZE] = x as u8;
            log[x as usize] = i as u8;

            x <<= 1;

            if x & 0x100 != 0 {
                x ^= PRIMITIVE_POLY;
            }

            i += 1;
        }

        exp[2 * FIELD_SIZE] = exp[0];
        exp[2 * FIELD_SIZE + 1] = exp[1];

        GaloisField { exp, log }
    }

    /// Map the given power i to α<sup>m</sup> ≡ α<sup>i</sup> (modulo the field.)
    pub fn exp(&self, pow: usize) -> u8 {
        self.exp[pow % FIELD_SIZE]
    }

    /// Map the given element α<sup>i</sup> to its power i, or `None` for zero.
    pub fn log(&self, elt: u8) -> Option<usize> {
        match elt {
            0 => None,
            _ => Some(self.log[elt as usize] as usize),
        }
    }

    /// Multiply two elements.
    pub fn multiply(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }

        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }

    /// Find the multiplicative inverse of the given element, failing for zero.
    pub fn invert(&self, a: u8) -> Result<u8> {
        match a {
            0 => Err(CodecError::ZeroInverse),
            _ => Ok(self.exp[FIELD_SIZE - self.log[a as usize] as usize]),
        }
    }
}

/// The field tables, evaluated at compile time and never mutated.
pub static FIELD: GaloisField = GaloisField::new();

/// Element of GF(2<sup>8</sup>).
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Gf256 {
    bits: u8,
}

impl Gf256 {
    /// Construct a new `Gf256` from the given bit pattern.
    pub const fn new(bits: u8) -> Gf256 {
        Gf256 { bits }
    }

    /// Construct a new `Gf256` α<sup>m</sup> ≡ α<sup>i</sup> (modulo the field) for the
    /// given power i.
    pub fn for_power(power: usize) -> Gf256 {
        Gf256::new(FIELD.exp(power))
    }

    /// Retrieve the bit pattern of the element.
    pub fn bits(&self) -> u8 { self.bits }

    /// Check if the element is zero.
    pub fn zero(&self) -> bool { self.bits == 0 }

    /// Retrieve the power i of the current element α<sup>i</sup>. Return `Some(i)` if
    /// the power is defined and `None` if the element is zero.
    pub fn power(&self) -> Option<usize> {
        FIELD.log(self.bits)
    }

    /// Find 1/α<sup>i</sup> for the current element α<sup>i</sup>.
    pub fn invert(self) -> Result<Gf256> {
        FIELD.invert(self.bits).map(Gf256::new)
    }
}

/// Add elements using Galois addition, which is XOR in characteristic 2.
impl std::ops::Add for Gf256 {
    type Output = Gf256;

    fn add(self, rhs: Gf256) -> Self::Output {
        Gf256::new(self.bits ^ rhs.bits)
    }
}

impl std::ops::AddAssign for Gf256 {
    fn add_assign(&mut self, rhs: Gf256) {
        self.bits ^= rhs.bits;
    }
}

/// "Subtract" elements, which is equivalent to addition.
impl std::ops::Sub for Gf256 {
    type Output = Gf256;

    fn sub(self, rhs: Gf256) -> Self::Output {
        self + rhs
    }
}

/// Multiply elements using Galois multiplication.
impl std::ops::Mul for Gf256 {
    type Output = Gf256;

    fn mul(self, rhs: Gf256) -> Self::Output {
        Gf256::new(FIELD.multiply(self.bits, rhs.bits))
    }
}

impl std::fmt::Debug for Gf256 {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.power() {
            Some(p) => write!(fmt, "Gf256::for_power({})", p),
            None => write!(fmt, "Gf256::default()"),
        }
    }
}

/// Coefficient storage for a bounded-degree polynomial of a particular code.
pub trait PolynomialCoefs: Default + Copy + Clone +
    std::ops::Deref<Target = [Gf256]> + std::ops::DerefMut
{
    /// The minimum Hamming distance, d, in (n,k,d), which is one more than the number of
    /// parity symbols.
    fn distance() -> usize;

    /// Maximum number of correctable errors with no erasures: t.
    fn errors() -> usize {
        // Since d is odd, d = 2t+1 ⇒ t = (d-1)/2 = floor(d / 2)
        Self::distance() / 2
    }

    /// Number of syndromes, which equals the number of parity symbols: 2t.
    fn syndromes() -> usize { 2 * Self::errors() }

    /// Maximum polynomial degree the decoder works with: 4t.
    fn max_degree() -> usize { 2 * Self::syndromes() }

    /// Verify the implementer is well-formed.
    fn validate(&self) {
        // Distance must be odd, so the parity count is even.
        assert!(Self::distance() % 2 == 1);
        // Storage must hold every polynomial the decoder builds.
        assert!(self.len() > Self::max_degree());
        // Every parity symbol needs a distinct generator root.
        assert!(Self::syndromes() < FIELD_SIZE);
    }
}

/// Create a coefficient storage buffer for a code with the given number of parity
/// symbols. The buffer holds 2·npar + 1 coefficients, enough for every intermediate
/// polynomial of the decoder.
#[macro_export]
macro_rules! impl_polynomial_coefs {
    ($(#[$meta:meta])* $name:ident, $npar:expr) => {
        $(#[$meta])*
        #[derive(Copy, Clone)]
        pub struct $name([$crate::coding::galois::Gf256; 2 * $npar + 1]);

        impl $crate::coding::galois::PolynomialCoefs for $name {
            fn distance() -> usize { $npar + 1 }
        }

        impl Default for $name {
            fn default() -> Self {
                $name([$crate::coding::galois::Gf256::default(); 2 * $npar + 1])
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = [$crate::coding::galois::Gf256];
            fn deref(&self) -> &Self::Target { &self.0[..] }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0[..] }
        }
    };
}

/// Polynomial with GF(2<sup>8</sup>) elements as coefficients.
#[derive(Copy, Clone)]
pub struct Polynomial<P: PolynomialCoefs> {
    /// Coefficients of the polynomial, with the degree-0 term first.
    coefs: P,
    /// Number of coefficients up to and including the highest nonzero term, so 0 for
    /// p(x) = 0. Every operation keeps this in sync with `coefs`.
    len: usize,
}

impl<P: PolynomialCoefs> Polynomial<P> {
    /// Construct a new `Polynomial` from the given coefficients c<sub>0</sub>, ...,
    /// c<sub>k</sub>.
    ///
    /// The resulting polynomial has the form p(x) = c<sub>0</sub> + c<sub>1</sub>x + ···
    /// + c<sub>k</sub>x<sup>k</sup>. Panic if there are more coefficients than storage.
    pub fn new<T: Iterator<Item = Gf256>>(mut init: T) -> Self {
        // Start with all zero coefficients and add in the given ones.
        let mut coefs = P::default();
        init.collect_slice_exhaust(&mut coefs[..]);

        Self::with_coefs(coefs)
    }

    /// Construct a new `Polynomial` with the single term p(x) = x<sup>n</sup>.
    pub fn unit_power(n: usize) -> Self {
        let mut coefs = P::default();
        coefs[n] = Gf256::for_power(0);

        Self::with_coefs(coefs)
    }

    /// Construct a new `Polynomial` with the given coefficients.
    fn with_coefs(coefs: P) -> Self {
        let mut poly = Polynomial { coefs, len: 0 };
        poly.recount();
        poly
    }

    /// Recompute the significant length after the coefficients change.
    fn recount(&mut self) {
        self.len = self.coefs.iter().rposition(|c| !c.zero()).map_or(0, |deg| deg + 1);
    }

    /// Reset every coefficient so that p(x) = 0.
    pub fn zero(&mut self) {
        *self = Self::default();
    }

    /// Check if p(x) = 0.
    pub fn is_zero(&self) -> bool { self.len == 0 }

    /// Highest degree the storage can hold.
    pub fn max_degree(&self) -> usize { self.coefs.len() - 1 }

    /// Compute deg(p(x)), returned as `Some(deg)` if the polynomial is nonzero, or
    /// `None` if p(x) = 0.
    pub fn degree(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    /// Retrieve the coefficient c<sub>i</sub> associated with the x<sup>i</sup> term.
    ///
    /// If i is beyond the storage, 0 is returned.
    pub fn coef(&self, i: usize) -> Gf256 {
        match self.coefs.get(i) {
            Some(&c) => c,
            None => Gf256::default(),
        }
    }

    /// Evaluate p(x), substituting in the given x.
    pub fn eval(&self, x: Gf256) -> Gf256 {
        // This uses Horner's method which, unlike the naive method, doesn't require a
        // separate power of x at each term.
        self.coefs[..self.len].iter().rev().fold(Gf256::default(), |s, &coef| s * x + coef)
    }

    /// Truncate the polynomial so that deg(p(x)) ≤ d, where d is the given degree.
    pub fn truncate(mut self, deg: usize) -> Polynomial<P> {
        for i in (deg + 1)..self.coefs.len() {
            self.coefs[i] = Gf256::default();
        }

        self.recount();
        self
    }

    /// Compute the formal derivative p'(x).
    ///
    /// In characteristic 2 the even-degree terms vanish and each odd-degree term
    /// c<sub>k</sub>x<sup>k</sup> becomes c<sub>k</sub>x<sup>k-1</sup>.
    pub fn deriv(mut self) -> Polynomial<P> {
        for i in 0..self.coefs.len() {
            self.coefs[i] = if i % 2 == 0 {
                self.coef(i + 1)
            } else {
                Gf256::default()
            };
        }

        self.recount();
        self
    }

    /// Multiply by x, shifting every coefficient up one degree. A term at the highest
    /// storable degree is discarded.
    pub fn shift_up(mut self) -> Polynomial<P> {
        for i in (1..self.coefs.len()).rev() {
            self.coefs[i] = self.coefs[i - 1];
        }

        self.coefs[0] = Gf256::default();
        self.recount();
        self
    }

    /// Multiply polynomials, returning `None` instead of silently discarding terms when
    /// the product's degree exceeds the storage.
    pub fn checked_mul(self, rhs: Polynomial<P>) -> Option<Polynomial<P>> {
        match (self.degree(), rhs.degree()) {
            (Some(p), Some(q)) if p + q > self.max_degree() => None,
            _ => Some(self * rhs),
        }
    }
}

impl<P: PolynomialCoefs> Default for Polynomial<P> {
    /// Construct an empty polynomial, p(x) = 0.
    fn default() -> Self {
        Polynomial {
            coefs: P::default(),
            len: 0,
        }
    }
}

/// Provides a slice of all stored coefficients starting at the degree-0 term,
/// [c<sub>0</sub>, c<sub>1</sub>, ...].
impl<P: PolynomialCoefs> std::ops::Deref for Polynomial<P> {
    type Target = [Gf256];
    fn deref(&self) -> &Self::Target { &self.coefs[..] }
}

/// Add polynomials using Galois addition for coefficients.
impl<P: PolynomialCoefs> std::ops::Add for Polynomial<P> {
    type Output = Polynomial<P>;

    fn add(mut self, rhs: Polynomial<P>) -> Self::Output {
        for (coef, &other) in self.coefs.iter_mut().zip(rhs.coefs.iter()) {
            *coef += other;
        }

        self.recount();
        self
    }
}

/// Scale polynomial by a field element.
impl<P: PolynomialCoefs> std::ops::Mul<Gf256> for Polynomial<P> {
    type Output = Polynomial<P>;

    fn mul(mut self, rhs: Gf256) -> Self::Output {
        for coef in self.coefs.iter_mut() {
            *coef = *coef * rhs;
        }

        self.recount();
        self
    }
}

/// Multiply polynomials using Galois multiplication for coefficients.
///
/// Note that resulting terms outside the bounds of the polynomial are silently discarded,
/// effectively computing p(x)q(x) mod x<sup>n+1</sup>, where n is the maximum degree
/// supported by the polynomial. Use `checked_mul` to detect this.
impl<P: PolynomialCoefs> std::ops::Mul<Polynomial<P>> for Polynomial<P> {
    type Output = Polynomial<P>;

    fn mul(self, rhs: Polynomial<P>) -> Self::Output {
        let mut out = Polynomial::<P>::default();

        for (i, &coef) in self.coefs[..self.len].iter().enumerate() {
            for (j, &mult) in rhs.coefs[..rhs.len].iter().enumerate() {
                if let Some(c) = out.coefs.get_mut(i + j) {
                    *c += coef * mult;
                }
            }
        }

        out.recount();
        out
    }
}

impl<P: PolynomialCoefs> std::fmt::Debug for Polynomial<P> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "Polynomial({:?})", &self.coefs[..self.len])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    crate::impl_polynomial_coefs!(TestCoefs, 10);
    type TestPolynomial = Polynomial<TestCoefs>;

    crate::impl_polynomial_coefs!(ShortCoefs, 2);
    type ShortPolynomial = Polynomial<ShortCoefs>;

    #[test]
    fn test_coefs() {
        assert_eq!(TestCoefs::distance(), 11);
        assert_eq!(TestCoefs::errors(), 5);
        assert_eq!(TestCoefs::syndromes(), 10);
        assert_eq!(TestCoefs::max_degree(), 20);
        TestCoefs::default().validate();
        ShortCoefs::default().validate();
    }

    #[test]
    fn test_tables() {
        for e in 1..=255u8 {
            let p = FIELD.log(e).unwrap();
            assert!(p < FIELD_SIZE);
            assert_eq!(FIELD.exp(p), e);
        }

        assert!(FIELD.log(0).is_none());
        assert_eq!(FIELD.exp(0), 1);
        assert_eq!(FIELD.exp(8), 0x1D);
        assert_eq!(FIELD.exp(255), 1);
    }

    #[test]
    fn test_for_power() {
        assert_eq!(Gf256::for_power(0), Gf256::new(0b00000001));
        assert_eq!(Gf256::for_power(1), Gf256::new(0b00000010));
        assert_eq!(Gf256::for_power(7), Gf256::new(0b10000000));
        assert_eq!(Gf256::for_power(8), Gf256::new(0b00011101));
        assert_eq!(Gf256::for_power(255), Gf256::new(0b00000001));
        assert_eq!(Gf256::for_power(256), Gf256::new(0b00000010));
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(Gf256::new(0b10000000) + Gf256::new(0b01000000), Gf256::new(0b11000000));
        assert_eq!(Gf256::new(0b10000000) - Gf256::new(0b01000000), Gf256::new(0b11000000));
        assert_eq!(Gf256::new(0b10000001) + Gf256::new(0b10000001), Gf256::new(0));
        assert_eq!(Gf256::new(0b10000001) - Gf256::new(0b10110100), Gf256::new(0b00110101));
    }

    #[test]
    fn test_mul() {
        assert_eq!(Gf256::new(3) * Gf256::new(7), Gf256::new(9));
        assert_eq!(Gf256::new(2) * Gf256::new(0x80), Gf256::new(0x1D));
        assert_eq!(Gf256::new(0) * Gf256::new(0x45), Gf256::new(0));
        assert_eq!(Gf256::new(0x45) * Gf256::new(0), Gf256::new(0));
        assert_eq!(Gf256::new(0x45) * Gf256::new(1), Gf256::new(0x45));

        for a in 0..=255u8 {
            assert_eq!(FIELD.multiply(a, 0), 0);
            assert_eq!(FIELD.multiply(0, a), 0);
        }
    }

    #[test]
    fn test_invert() {
        for a in 1..=255u8 {
            let inv = FIELD.invert(a).unwrap();
            assert_eq!(FIELD.multiply(a, inv), 1);
            assert_eq!(Gf256::new(a) * Gf256::new(a).invert().unwrap(), Gf256::for_power(0));
        }

        assert_eq!(FIELD.invert(0), Err(CodecError::ZeroInverse));
        assert!(Gf256::default().invert().is_err());
    }

    #[test]
    fn test_eval() {
        let p = TestPolynomial::new((0..3).map(|_| Gf256::for_power(0)));
        assert_eq!(p.eval(Gf256::for_power(1)), Gf256::new(0b111));

        let p = TestPolynomial::new((0..2).map(|_| Gf256::for_power(0)));
        assert_eq!(p.eval(Gf256::for_power(1)), Gf256::new(0b11));

        let p = TestPolynomial::new([
            Gf256::default(),
            Gf256::default(),
            Gf256::default(),
            Gf256::for_power(0),
        ].iter().cloned());
        assert_eq!(p.eval(Gf256::for_power(3)), Gf256::for_power(9));

        let p = TestPolynomial::new((0..21).map(|_| Gf256::for_power(0)));
        assert_eq!(p.eval(Gf256::for_power(0)), Gf256::for_power(0));

        assert!(TestPolynomial::default().eval(Gf256::for_power(17)).zero());
    }

    #[test]
    fn test_degree() {
        let p = TestPolynomial::new((0..5).map(|_| Gf256::for_power(0)));
        assert_eq!(p.degree().unwrap(), 4);
        assert_eq!(p.max_degree(), 20);

        let p = TestPolynomial::new([
            Gf256::for_power(3),
            Gf256::default(),
            Gf256::default(),
        ].iter().cloned());
        assert_eq!(p.degree().unwrap(), 0);

        let mut p = TestPolynomial::unit_power(20);
        assert_eq!(p.degree().unwrap(), 20);

        p.zero();
        assert!(p.is_zero());
        assert!(p.degree().is_none());
    }

    #[test]
    fn test_truncate() {
        let p = TestPolynomial::new((0..5).map(|_| Gf256::for_power(0)));

        assert_eq!(p.degree().unwrap(), 4);
        assert_eq!(p.coefs[4].power().unwrap(), 0);
        assert!(p.coefs[5].power().is_none());

        let p = p.truncate(2);
        assert_eq!(p.degree().unwrap(), 2);
        assert_eq!(p.coefs[2].power().unwrap(), 0);
        assert!(p.coefs[3].power().is_none());
    }

    #[test]
    fn test_polynomial() {
        let p = TestPolynomial::new((0..21).map(Gf256::for_power));

        assert!(p.degree().unwrap() == 20);
        assert!(p.coef(0) == Gf256::for_power(0));

        let p = TestPolynomial::new((1..21).map(Gf256::for_power));
        assert!(p.degree().unwrap() == 19);
        assert!(p.coef(0) == Gf256::for_power(1));

        let q = p * Gf256::for_power(0);
        assert!(q.degree().unwrap() == 19);
        assert!(q.coef(0) == Gf256::for_power(1));

        let q = p * Gf256::for_power(2);
        assert!(q.degree().unwrap() == 19);
        assert!(q.coef(0) == Gf256::for_power(3));

        let q = p * Gf256::default();
        assert!(q.is_zero());

        let q = p + p;
        assert!(q.is_zero());

        for coef in q.iter() {
            assert!(coef.zero());
        }

        let p = TestPolynomial::new((0..2).map(|_| Gf256::for_power(0)));
        let q = TestPolynomial::new((0..4).map(|_| Gf256::for_power(1)));
        let r = p + q;

        assert_eq!(r.coef(0), Gf256::new(0b11));
        assert_eq!(r.coef(2), Gf256::for_power(1));
        assert_eq!(r.degree().unwrap(), 3);

        // Cancelling the leading term lowers the degree.
        let p = TestPolynomial::new((0..4).map(Gf256::for_power));
        let q = TestPolynomial::unit_power(3) * Gf256::for_power(3);
        assert_eq!((p + q).degree().unwrap(), 2);
    }

    #[test]
    fn test_poly_mul() {
        let p = TestPolynomial::new((0..2).map(|_| Gf256::for_power(0)));

        let q = p;
        let r = p * q;

        // (1 + x)^2 = 1 + x^2 in characteristic 2.
        assert_eq!(r.coef(0).power().unwrap(), 0);
        assert!(r.coef(1).power().is_none());
        assert_eq!(r.coef(2).power().unwrap(), 0);
        assert_eq!(r.degree().unwrap(), 2);

        let p = TestPolynomial::new((0..3).map(Gf256::for_power));
        let q = TestPolynomial::new([
            Gf256::default(),
            Gf256::for_power(0),
        ].iter().cloned());
        let r = p * q;

        assert!(r.coef(0).power().is_none());
        assert_eq!(r.coef(1).power().unwrap(), 0);
        assert_eq!(r.coef(2).power().unwrap(), 1);
        assert_eq!(r.coef(3).power().unwrap(), 2);
    }

    #[test]
    fn test_checked_mul() {
        let p = ShortPolynomial::unit_power(2);
        let q = ShortPolynomial::unit_power(2);
        assert_eq!(p.checked_mul(q).unwrap().degree().unwrap(), 4);

        let q = ShortPolynomial::unit_power(3);
        assert!(p.checked_mul(q).is_none());

        // The unchecked product silently drops the x^5 term.
        assert!((p * q).is_zero());

        assert!(p.checked_mul(ShortPolynomial::default()).unwrap().is_zero());
    }

    #[test]
    fn test_shift_up() {
        let p = ShortPolynomial::new((1..4).map(Gf256::for_power)).shift_up();

        assert!(p.coef(0).zero());
        assert_eq!(p.coef(1), Gf256::for_power(1));
        assert_eq!(p.coef(3), Gf256::for_power(3));
        assert_eq!(p.degree().unwrap(), 3);

        let p = ShortPolynomial::unit_power(4).shift_up();
        assert!(p.is_zero());
    }

    #[test]
    fn test_deriv() {
        let p = TestPolynomial::new([
            Gf256::for_power(0),
            Gf256::for_power(3),
            Gf256::for_power(58),
        ].iter().cloned());

        let q = p.deriv();

        assert!(q.coefs[0] == Gf256::for_power(3));
        assert!(q.coefs[1] == Gf256::default());
        assert!(q.coefs[2] == Gf256::default());
        assert_eq!(q.degree().unwrap(), 0);

        let p = TestPolynomial::new([
            Gf256::for_power(0),
            Gf256::for_power(5),
            Gf256::for_power(3),
            Gf256::for_power(58),
            Gf256::for_power(43),
            Gf256::for_power(15),
        ].iter().cloned()).deriv();

        assert!(p.coef(0) == Gf256::for_power(5));
        assert!(p.coef(1) == Gf256::default());
        assert!(p.coef(2) == Gf256::for_power(58));
        assert!(p.coef(3) == Gf256::default());
        assert!(p.coef(4) == Gf256::for_power(15));
        assert!(p.coef(5) == Gf256::default());
        assert_eq!(p.degree().unwrap(), 4);

        let p = ShortPolynomial::new([
            Gf256::for_power(0),
            Gf256::for_power(5),
            Gf256::for_power(3),
            Gf256::for_power(58),
            Gf256::for_power(43),
        ].iter().cloned()).deriv();

        assert!(p.coef(0) == Gf256::for_power(5));
        assert!(p.coef(1) == Gf256::default());
        assert!(p.coef(2) == Gf256::for_power(58));
        assert!(p.coef(3) == Gf256::default());
        assert!(p.coef(4) == Gf256::default());
    }

    #[test]
    fn test_unit_power() {
        let p = TestPolynomial::unit_power(0);
        assert_eq!(p[0], Gf256::for_power(0));
        assert_eq!(p.degree().unwrap(), 0);

        let p = TestPolynomial::unit_power(2);
        assert_eq!(p[0], Gf256::default());
        assert_eq!(p[1], Gf256::default());
        assert_eq!(p[2], Gf256::for_power(0));
        assert_eq!(p.degree().unwrap(), 2);
    }
}
