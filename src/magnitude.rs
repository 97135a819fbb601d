//! Sign-magnitude numbers over an unsigned magnitude type.
//!
//! The sign is independent of the magnitude's overflow: adding `-255` and `-1` as
//! `SignMagnitude<u8>` reports overflow and stays negative.
//!
//! Negative zero is representable. It compares and hashes equal to positive zero,
//! but the stored sign is kept; see [`SignMagnitude::is_normal`].

use alloc::string::ToString;
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, Div, Mul, Neg, Rem, Sub},
};

use zeroize::Zeroize;

use crate::arithmetic::checked_and_wrapping;
use crate::{Error, Signed, Unsigned};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub const fn flipped(self) -> Self {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }

    /// Sign of a product or quotient.
    pub const fn times(self, other: Self) -> Self {
        match (self, other) {
            (Sign::Plus, Sign::Plus) | (Sign::Minus, Sign::Minus) => Sign::Plus,
            _ => Sign::Minus,
        }
    }
}

/// The magnitude arithmetic a [`SignMagnitude`] needs.
pub trait Magnitude: Copy + Ord + Hash + fmt::Display {
    const ZERO: Self;

    fn overflowing_add(self, rhs: Self) -> (Self, bool);
    fn overflowing_sub(self, rhs: Self) -> (Self, bool);
    fn overflowing_mul(self, rhs: Self) -> (Self, bool);
    fn checked_div(self, rhs: Self) -> Option<Self>;
    fn checked_rem(self, rhs: Self) -> Option<Self>;

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

macro_rules! forward_magnitude {
    ($zero:expr; $($t:ty),*) => {$(
        impl Magnitude for $t {
            const ZERO: Self = $zero;

            fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_add(self, rhs)
            }

            fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_sub(self, rhs)
            }

            fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_mul(self, rhs)
            }

            fn checked_div(self, rhs: Self) -> Option<Self> {
                <$t>::checked_div(self, rhs)
            }

            fn checked_rem(self, rhs: Self) -> Option<Self> {
                <$t>::checked_rem(self, rhs)
            }
        }
    )*};
}

forward_magnitude!(0; u8, u16, u32, u64, u128);

impl<const L: usize> Magnitude for Unsigned<L> {
    const ZERO: Self = Unsigned::ZERO;

    fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        Unsigned::overflowing_add(self, rhs)
    }

    fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        Unsigned::overflowing_sub(self, rhs)
    }

    fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        Unsigned::overflowing_mul(self, rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        Unsigned::checked_div(self, rhs)
    }

    fn checked_rem(self, rhs: Self) -> Option<Self> {
        Unsigned::checked_rem(self, rhs)
    }

    fn is_zero(&self) -> bool {
        Unsigned::is_zero(self)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SignMagnitude<M> {
    pub sign: Sign,
    pub magnitude: M,
}

impl<M: Magnitude> SignMagnitude<M> {
    pub const ZERO: Self = Self::new(Sign::Plus, M::ZERO);

    pub const fn new(sign: Sign, magnitude: M) -> Self {
        Self { sign, magnitude }
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// False only for negative zero.
    pub fn is_normal(&self) -> bool {
        !(self.sign == Sign::Minus && self.is_zero())
    }

    /// The sign, with negative zero counted as positive.
    pub fn normalized_sign(&self) -> Sign {
        if self.is_zero() {
            Sign::Plus
        } else {
            self.sign
        }
    }

    /// Flips the sign, also of zero.
    pub fn negate(self) -> Self {
        Self::new(self.sign.flipped(), self.magnitude)
    }

    /// Equal signs add magnitudes, keeping the sign even if the magnitude overflows.
    /// Opposite signs subtract the smaller magnitude from the larger, which never overflows.
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        if self.sign == rhs.sign {
            let (magnitude, overflow) = self.magnitude.overflowing_add(rhs.magnitude);
            return (Self::new(self.sign, magnitude), overflow);
        }

        let sum = match self.magnitude.cmp(&rhs.magnitude) {
            Ordering::Greater => Self::new(self.sign, self.magnitude.overflowing_sub(rhs.magnitude).0),
            Ordering::Less => Self::new(rhs.sign, rhs.magnitude.overflowing_sub(self.magnitude).0),
            Ordering::Equal => Self::ZERO,
        };
        (sum, false)
    }

    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        self.overflowing_add(rhs.negate())
    }

    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        let (magnitude, overflow) = self.magnitude.overflowing_mul(rhs.magnitude);
        (Self::new(self.sign.times(rhs.sign), magnitude), overflow)
    }

    checked_and_wrapping!(overflowing_add, checked_add, wrapping_add);
    checked_and_wrapping!(overflowing_sub, checked_sub, wrapping_sub);
    checked_and_wrapping!(overflowing_mul, checked_mul, wrapping_mul);

    /// Truncating division, `None` when dividing by zero.
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        let magnitude = self.magnitude.checked_div(rhs.magnitude)?;
        Some(Self::new(self.sign.times(rhs.sign), magnitude))
    }

    /// The remainder takes the sign of the dividend; `None` when dividing by zero.
    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        let magnitude = self.magnitude.checked_rem(rhs.magnitude)?;
        Some(Self::new(self.sign, magnitude))
    }
}

impl<M: Magnitude> PartialEq for SignMagnitude<M> {
    fn eq(&self, other: &Self) -> bool {
        self.normalized_sign() == other.normalized_sign() && self.magnitude == other.magnitude
    }
}

impl<M: Magnitude> Eq for SignMagnitude<M> {}

impl<M: Magnitude> Hash for SignMagnitude<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized_sign().hash(state);
        self.magnitude.hash(state);
    }
}

impl<M: Magnitude> Ord for SignMagnitude<M> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.normalized_sign(), other.normalized_sign()) {
            (Sign::Plus, Sign::Plus) => self.magnitude.cmp(&other.magnitude),
            (Sign::Minus, Sign::Minus) => other.magnitude.cmp(&self.magnitude),
            (Sign::Minus, Sign::Plus) => Ordering::Less,
            (Sign::Plus, Sign::Minus) => Ordering::Greater,
        }
    }
}

impl<M: Magnitude> PartialOrd for SignMagnitude<M> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<M: Zeroize> Zeroize for SignMagnitude<M> {
    fn zeroize(&mut self) {
        self.magnitude.zeroize();
        self.sign = Sign::Plus;
    }
}

/// The stored sign is shown, so negative zero prints as `-0`.
impl<M: Magnitude> fmt::Display for SignMagnitude<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.sign == Sign::Plus, "", &self.magnitude.to_string())
    }
}

macro_rules! trapping_op {
    ($trait:ident, $method:ident, $checked:ident, $message:literal) => {
        impl<M: Magnitude> $trait for SignMagnitude<M> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                match self.$checked(rhs) {
                    Some(result) => result,
                    None => panic!($message),
                }
            }
        }
    };
}

trapping_op!(Add, add, checked_add, "attempt to add with overflow");
trapping_op!(Sub, sub, checked_sub, "attempt to subtract with overflow");
trapping_op!(Mul, mul, checked_mul, "attempt to multiply with overflow");
trapping_op!(Div, div, checked_div, "attempt to divide by zero");
trapping_op!(Rem, rem, checked_rem, "attempt to calculate the remainder with a divisor of zero");

impl<M: Magnitude> Neg for SignMagnitude<M> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<const L: usize> From<Signed<L>> for SignMagnitude<Unsigned<L>> {
    fn from(signed: Signed<L>) -> Self {
        let sign = if signed.is_negative() { Sign::Minus } else { Sign::Plus };
        Self::new(sign, signed.unsigned_abs())
    }
}

impl<const L: usize> TryFrom<SignMagnitude<Unsigned<L>>> for Signed<L> {
    type Error = Error;

    /// Fails for magnitudes outside the signed range; negative zero becomes zero.
    fn try_from(value: SignMagnitude<Unsigned<L>>) -> Result<Self, Error> {
        Signed::from_magnitude(value.magnitude, value.sign == Sign::Minus).ok_or(Error::Overflow)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn sm(value: i64) -> SignMagnitude<u128> {
        let sign = if value < 0 { Sign::Minus } else { Sign::Plus };
        SignMagnitude::new(sign, value.unsigned_abs() as u128)
    }

    #[test]
    fn sign_survives_magnitude_overflow() {
        let a = SignMagnitude::new(Sign::Minus, 255u8);
        let b = SignMagnitude::new(Sign::Minus, 1u8);
        let (sum, overflow) = a.overflowing_add(b);
        assert!(overflow);
        assert_eq!(sum.sign, Sign::Minus);
        assert_eq!(sum.magnitude, 0);
        assert_eq!(a.checked_add(b), None);
        assert_eq!(a.wrapping_add(b).sign, Sign::Minus);
    }

    #[test]
    fn opposite_signs() {
        assert_eq!(sm(3) + sm(-5), sm(-2));
        assert_eq!(sm(-3) + sm(5), sm(2));
        assert_eq!(sm(-3) - sm(-5), sm(2));

        let zero = sm(5) + sm(-5);
        assert_eq!(zero.sign, Sign::Plus);
        assert!(zero.is_zero());
        let zero = sm(-5) - sm(-5);
        assert_eq!(zero.sign, Sign::Plus);
    }

    #[test]
    fn negative_zero() {
        let plus = SignMagnitude::new(Sign::Plus, U256::ZERO);
        let minus = SignMagnitude::new(Sign::Minus, U256::ZERO);
        assert_eq!(plus, minus);
        assert_eq!(hash(&plus), hash(&minus));
        assert!(plus.is_normal());
        assert!(!minus.is_normal());
        assert_eq!(minus.normalized_sign(), Sign::Plus);
        assert_eq!(minus.sign, Sign::Minus);
        assert_eq!(plus.cmp(&minus), Ordering::Equal);
        assert_eq!(format!("{}", minus), "-0");
    }

    #[test]
    fn ordering() {
        let mut values = [sm(2), sm(-3), SignMagnitude::new(Sign::Minus, 0), sm(-5), sm(0)];
        values.sort();
        assert_eq!(values, [sm(-5), sm(-3), sm(0), sm(0), sm(2)]);
    }

    #[test]
    fn multiply_and_divide() {
        assert_eq!(sm(-6) * sm(7), sm(-42));
        assert_eq!(sm(-6) * sm(-7), sm(42));
        assert_eq!(sm(-7) / sm(2), sm(-3));
        assert_eq!((sm(-7) % sm(2)).sign, Sign::Minus);
        assert_eq!(sm(7) % sm(-2), sm(1));
        assert_eq!(sm(7).checked_div(sm(0)), None);

        let (product, overflow) = SignMagnitude::new(Sign::Plus, 16u8).overflowing_mul(SignMagnitude::new(Sign::Minus, 16u8));
        assert!(overflow);
        assert_eq!((product.sign, product.magnitude), (Sign::Minus, 0));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn division_by_zero_traps() {
        let _ = sm(1) / sm(0);
    }

    #[test]
    fn agrees_with_native() {
        let mut rng = XorShift::new(37);
        for _ in 0..SWEEP {
            let (a, b) = (rng.next_u64() as i64 >> 2, rng.next_u64() as i64 >> 2);
            assert_eq!(sm(a) + sm(b), sm(a + b));
            assert_eq!(sm(a) - sm(b), sm(a - b));
            assert_eq!((sm(a) * sm(b)).magnitude, (a as i128 * b as i128).unsigned_abs());
            if b != 0 {
                assert_eq!(sm(a) / sm(b), sm(a / b));
                assert_eq!(sm(a) % sm(b), sm(a % b));
            }
            assert_eq!(sm(a).cmp(&sm(b)), a.cmp(&b));
        }
    }

    #[test]
    fn signed_conversions() {
        let mut rng = XorShift::new(41);
        for _ in 0..SWEEP {
            let x: I256 = rng.signed();
            let value = SignMagnitude::from(x);
            assert_eq!(value.sign == Sign::Minus, x.is_negative());
            assert_eq!(I256::try_from(value), Ok(x));
        }

        let min = SignMagnitude::from(I256::MIN);
        assert_eq!(I256::try_from(min), Ok(I256::MIN));
        assert_eq!(I256::try_from(min.negate()), Err(Error::Overflow));
        assert_eq!(I256::try_from(SignMagnitude::new(Sign::Minus, U256::ZERO)), Ok(I256::ZERO));
        assert_eq!(format!("{:>5}", SignMagnitude::from(I256::from(-42i8))), "  -42");
    }
}
