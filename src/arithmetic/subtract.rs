use crate::digit::{Digit, SignedDoubleDigit};
use crate::{Signed, Unsigned};

/// Subtract with borrow:
#[inline]
pub fn sbb(a: Digit, b: Digit, acc: &mut SignedDoubleDigit) -> Digit {
    *acc += a as SignedDoubleDigit;
    *acc -= b as SignedDoubleDigit;
    let lo = *acc as Digit;
    *acc >>= Digit::BITS;
    lo
}

// A non-zero borrow (if a.len() == b.len()) is -1, which as unsigned is
// the same as "all bits set", i.e., 0xFFFF_FFFF for Digit = u32
pub(crate) fn sub_assign_borrow(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());
    let mut borrow = 0;

    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = sbb(*a, *b, &mut borrow);
    }

    if borrow != 0 {
        for a in a_hi {
            *a = sbb(*a, 0, &mut borrow);
            if borrow == 0 {
                break;
            }
        }
    }

    borrow as Digit
}

impl<const L: usize> Unsigned<L> {
    /// `self - subtrahend`, and whether a borrow fell out of the top digit.
    pub fn overflowing_sub(mut self, subtrahend: Self) -> (Self, bool) {
        let borrow = sub_assign_borrow(&mut self.0, &subtrahend.0);
        (self, borrow != 0)
    }

    checked_and_wrapping!(overflowing_sub, checked_sub, wrapping_sub);

    /// `0 - self`; overflows for anything but zero.
    pub fn overflowing_neg(self) -> (Self, bool) {
        (self.twos_complement(), !self.is_zero())
    }

    pub fn wrapping_neg(self) -> Self {
        self.twos_complement()
    }
}

impl<const L: usize> Signed<L> {
    /// `self - subtrahend`; overflow happens iff the operands have different signs,
    /// and the difference's sign differs from the minuend's.
    pub fn overflowing_sub(self, subtrahend: Self) -> (Self, bool) {
        let difference = Self(self.0.wrapping_sub(subtrahend.0));
        let overflow = self.is_negative() != subtrahend.is_negative()
            && difference.is_negative() != self.is_negative();
        (difference, overflow)
    }

    checked_and_wrapping!(overflowing_sub, checked_sub, wrapping_sub);

    /// `-self`; overflows only for `MIN`.
    pub fn overflowing_neg(self) -> (Self, bool) {
        (self.twos_complement(), self == Self::MIN)
    }

    pub fn checked_neg(self) -> Option<Self> {
        match self.overflowing_neg() {
            (negated, false) => Some(negated),
            (_, true) => None,
        }
    }

    pub fn wrapping_neg(self) -> Self {
        self.twos_complement()
    }

    /// `|self|`; overflows only for `MIN`, which is its own absolute value.
    pub fn overflowing_abs(self) -> (Self, bool) {
        if self.is_negative() {
            self.overflowing_neg()
        } else {
            (self, false)
        }
    }
}
