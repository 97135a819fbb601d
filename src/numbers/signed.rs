use core::mem::size_of;

use ref_cast::RefCast;
use zeroize::Zeroize;

use super::Unsigned;
use crate::digit::Digit;

/// Two's complement signed integer with `L` digits.
///
/// The value ranges over $[-2^{L \cdot w - 1}, 2^{L \cdot w - 1})$.
///
/// Every `Signed<L>` shares its digits with exactly one [`Unsigned<L>`], its *bit pattern*.
/// Converting between the two is a reinterpretation, there is no arithmetic involved,
/// and there is intentionally no `From` in either direction. Use
/// - [`Signed::from_bit_pattern`] / [`Signed::bit_pattern`] by value,
/// - [`RefCast::ref_cast`] / [`Signed::as_bit_pattern`] by reference.
///
/// Signed algorithms (division, text conversion) run on the magnitude and reuse the
/// unsigned implementation.
#[derive(Clone, Copy, Eq, Hash, PartialEq, RefCast, Zeroize)]
#[repr(transparent)]
pub struct Signed<const L: usize>(pub(crate) Unsigned<L>);

const SIGN_BIT: Digit = 1 << (Digit::BITS - 1);

impl<const L: usize> Signed<L> {
    /// Reinterpretation is only sound if both sides have the same digits.
    const SAME_WIDTH: () = assert!(size_of::<Signed<L>>() == size_of::<Unsigned<L>>());

    pub const BITS: u32 = Unsigned::<L>::BITS;
    pub const ZERO: Self = Self(Unsigned::ZERO);
    pub const ONE: Self = Self(Unsigned::ONE);
    pub const MINUS_ONE: Self = Self(Unsigned::MAX);
    pub const MIN: Self = {
        let mut digits = [0; L];
        digits[L - 1] = SIGN_BIT;
        Self(Unsigned(digits))
    };
    pub const MAX: Self = {
        let mut digits = [Digit::MAX; L];
        digits[L - 1] = !SIGN_BIT;
        Self(Unsigned(digits))
    };

    /// Construct from the two's complement digits, least significant first.
    pub const fn from_words(words: [Digit; L]) -> Self {
        Self(Unsigned::from_words(words))
    }

    pub const fn words(&self) -> &[Digit; L] {
        self.0.words()
    }

    pub const fn into_words(self) -> [Digit; L] {
        self.0.into_words()
    }

    /// The signed number with the same digits.
    pub const fn from_bit_pattern(bits: Unsigned<L>) -> Self {
        let () = Self::SAME_WIDTH;
        Self(bits)
    }

    /// The unsigned number with the same digits.
    pub const fn bit_pattern(self) -> Unsigned<L> {
        let () = Self::SAME_WIDTH;
        self.0
    }

    pub fn as_bit_pattern(&self) -> &Unsigned<L> {
        &self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.0[L - 1] & SIGN_BIT != 0
    }

    pub fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> Self {
        if self.is_negative() {
            Self::MINUS_ONE
        } else if self.is_zero() {
            Self::ZERO
        } else {
            Self::ONE
        }
    }

    /// The magnitude. Never overflows, `MIN.unsigned_abs()` is $2^{\text{BITS} - 1}$.
    pub fn unsigned_abs(self) -> Unsigned<L> {
        if self.is_negative() {
            self.0.twos_complement()
        } else {
            self.0
        }
    }

    /// Negation modulo $2^{\text{BITS}}$; fixes `0` and `MIN`.
    pub fn twos_complement(self) -> Self {
        Self(self.0.twos_complement())
    }

    /// Signed number with the given magnitude and sign, if representable.
    pub(crate) fn from_magnitude(magnitude: Unsigned<L>, negative: bool) -> Option<Self> {
        let candidate = Self(magnitude);
        if negative {
            let negated = candidate.twos_complement();
            (negated.is_negative() || negated.is_zero()).then(|| negated)
        } else {
            (!candidate.is_negative()).then(|| candidate)
        }
    }

    /// Returns `None` if the value does not fit in `L` digits.
    pub fn from_i128(value: i128) -> Option<Self> {
        let magnitude = Unsigned::from_u128(value.unsigned_abs())?;
        Self::from_magnitude(magnitude, value < 0)
    }

    pub fn leading_zeros(&self) -> u32 {
        self.0.leading_zeros()
    }

    pub fn trailing_zeros(&self) -> u32 {
        self.0.trailing_zeros()
    }

    pub fn count_ones(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn swap_bytes(self) -> Self {
        Self(self.0.swap_bytes())
    }
}

impl<const L: usize> Unsigned<L> {
    /// The unsigned number with the same digits.
    pub const fn from_bit_pattern(bits: Signed<L>) -> Self {
        bits.bit_pattern()
    }

    /// The signed number with the same digits.
    pub const fn bit_pattern(self) -> Signed<L> {
        Signed::from_bit_pattern(self)
    }
}
