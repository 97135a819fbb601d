use zeroize::Zeroize;

use crate::digit::{Digit, DIGIT_BITS};

mod signed;
mod trait_implementations;

pub use signed::Signed;

/// Unsigned integer with `L` digits (L for length).
///
/// Internal representation is little-endian: digit `0` is the least significant.
/// This ordering is part of the contract of [`Self::from_words`] and [`Self::words`].
///
/// The value ranges over $[0, 2^{L \cdot w})$, where $w$ is `Digit::BITS`.
#[derive(Clone, Copy, Eq, Hash, PartialEq, Zeroize)]
#[repr(transparent)]
pub struct Unsigned<const L: usize>(pub(crate) [Digit; L]);

/// The full result of multiplying two `L`-digit numbers, `hi * 2^BITS + lo`.
///
/// Full division takes one of these as dividend. `H` is `Unsigned<L>` for the
/// unsigned case and `Signed<L>` for the signed case, the low half is always unsigned.
///
/// Not a storage type: const generics on stable can't express `Unsigned<2 * L>`,
/// this is the workaround.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Zeroize)]
pub struct Product<const L: usize, H = Unsigned<L>> {
    pub hi: H,
    pub lo: Unsigned<L>,
}

/// Double-width product of two [`Signed`].
pub type SignedProduct<const L: usize> = Product<L, Signed<L>>;

impl<const L: usize, H> Product<L, H> {
    pub const fn new(hi: H, lo: Unsigned<L>) -> Self {
        Self { hi, lo }
    }
}

/// One step of the two's complement: `!digit + carry`, with carry out.
///
/// Chained from the least significant digit with an initial carry of `true`,
/// this negates a number modulo $2^{\text{BITS}}$.
#[inline]
pub const fn twos_complement_subsequence(digit: Digit, carry: bool) -> (Digit, bool) {
    (!digit).overflowing_add(carry as Digit)
}

/// In-place two's complement of a little-endian digit slice.
#[inline]
pub(crate) fn twos_complement_assign(digits: &mut [Digit]) {
    let mut carry = true;
    for digit in digits.iter_mut() {
        (*digit, carry) = twos_complement_subsequence(*digit, carry);
    }
}

/// Number of significant digits: 0 if zero, else index + 1 of last non-zero digit.
#[inline]
pub(crate) fn significant_len(digits: &[Digit]) -> usize {
    digits.iter()
        .rposition(|&digit| digit != 0)
        .map(|i| i + 1)
        .unwrap_or(0)
}

const DIGIT_BYTES: usize = DIGIT_BITS / 8;

// c'tors and such
impl<const L: usize> Unsigned<L> {
    const NONEMPTY: () = assert!(L > 0, "a number needs at least one digit");

    pub const BITS: u32 = { let () = Self::NONEMPTY; L as u32 * Digit::BITS };
    pub const ZERO: Self = { let () = Self::NONEMPTY; Self([0; L]) };
    pub const ONE: Self = {
        let mut digits = [0; L];
        digits[0] = 1;
        Self(digits)
    };
    pub const MIN: Self = Self::ZERO;
    pub const MAX: Self = { let () = Self::NONEMPTY; Self([Digit::MAX; L]) };

    /// Construct from digits, least significant first.
    pub const fn from_words(words: [Digit; L]) -> Self {
        let () = Self::NONEMPTY;
        Self(words)
    }

    /// Like [`Self::from_words`], for a slice that must have exactly `L` digits.
    ///
    /// Panics otherwise.
    pub fn from_slice(words: &[Digit]) -> Self {
        assert_eq!(words.len(), L, "expected {} digits, got {}", L, words.len());
        Self::from_prefix(words)
    }

    /// Zero-extends up to `L` digits.
    pub(crate) fn from_prefix(words: &[Digit]) -> Self {
        debug_assert!(words.len() <= L);
        let mut x = Self::ZERO;
        x.0[..words.len()].copy_from_slice(words);
        x
    }

    /// The digits, least significant first.
    pub const fn words(&self) -> &[Digit; L] {
        &self.0
    }

    pub const fn into_words(self) -> [Digit; L] {
        self.0
    }

    /// The digits up to and including the most significant non-zero one.
    pub fn significant_digits(&self) -> &[Digit] {
        &self.0[..significant_len(&self.0)]
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&digit| digit == 0)
    }

    pub fn is_one(&self) -> bool {
        *self == Self::ONE
    }

    /// Is this a single digit number (including zero)?
    pub fn is_digit(&self) -> bool {
        self.0[1..].iter().all(|&digit| digit == 0)
    }

    /// The lowest digit.
    pub fn digit(&self) -> Digit {
        self.0[0]
    }

    /// Returns `None` if the value does not fit in `L` digits.
    pub const fn from_u128(value: u128) -> Option<Self> {
        let () = Self::NONEMPTY;
        let mut digits = [0; L];
        let mut rest = value;
        let mut i = 0;
        while i < L && rest != 0 {
            digits[i] = rest as Digit;
            rest >>= Digit::BITS;
            i += 1;
        }
        if rest == 0 { Some(Self(digits)) } else { None }
    }

    pub fn leading_zeros(&self) -> u32 {
        match self.0.iter().rposition(|&digit| digit != 0) {
            Some(i) => (L - 1 - i) as u32 * Digit::BITS + self.0[i].leading_zeros(),
            None => Self::BITS,
        }
    }

    pub fn trailing_zeros(&self) -> u32 {
        match self.0.iter().position(|&digit| digit != 0) {
            Some(i) => i as u32 * Digit::BITS + self.0[i].trailing_zeros(),
            None => Self::BITS,
        }
    }

    pub fn count_ones(&self) -> u32 {
        self.0.iter().map(|digit| digit.count_ones()).sum()
    }

    /// Bit `i`, counting from the least significant. Panics if `i >= BITS`.
    pub fn bit(&self, i: u32) -> bool {
        let i = i as usize;
        (self.0[i / DIGIT_BITS] >> (i % DIGIT_BITS)) & 1 == 1
    }

    /// Negation modulo $2^{\text{BITS}}$: flip all bits, add one.
    pub fn twos_complement(mut self) -> Self {
        twos_complement_assign(&mut self.0);
        self
    }

    /// Reverses the byte order of the whole number.
    pub fn swap_bytes(self) -> Self {
        let mut swapped = Self::ZERO;
        for (to, from) in swapped.0.iter_mut().zip(self.0.iter().rev()) {
            *to = from.swap_bytes();
        }
        swapped
    }

    /// Interpret big-endian bytes, zero-extending on the left.
    ///
    /// Panics if there are more than `BITS / 8` bytes.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        assert!(bytes.len() <= L * DIGIT_BYTES, "too many bytes for {} digits", L);
        let mut x = Self::ZERO;
        for (i, &byte) in bytes.iter().rev().enumerate() {
            x.0[i / DIGIT_BYTES] |= (byte as Digit) << (8 * (i % DIGIT_BYTES));
        }
        x
    }

    /// Interpret little-endian bytes, zero-extending on the right.
    ///
    /// Panics if there are more than `BITS / 8` bytes.
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        assert!(bytes.len() <= L * DIGIT_BYTES, "too many bytes for {} digits", L);
        let mut x = Self::ZERO;
        for (i, &byte) in bytes.iter().enumerate() {
            x.0[i / DIGIT_BYTES] |= (byte as Digit) << (8 * (i % DIGIT_BYTES));
        }
        x
    }

    /// All `BITS / 8` bytes, most significant first.
    pub fn to_be_bytes(&self) -> alloc::vec::Vec<u8> {
        self.0.iter().rev().flat_map(|digit| digit.to_be_bytes()).collect()
    }

    /// All `BITS / 8` bytes, least significant first.
    pub fn to_le_bytes(&self) -> alloc::vec::Vec<u8> {
        self.0.iter().flat_map(|digit| digit.to_le_bytes()).collect()
    }
}
