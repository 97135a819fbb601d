use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::digit::{Digit, DIGIT_BITS};
use crate::{Signed, Unsigned};

/// In-place left shift by less than a digit, returning the bits shifted out at the top.
#[inline]
pub(crate) fn shl_assign_digits(digits: &mut [Digit], bits: u32) -> Digit {
    debug_assert!(bits < Digit::BITS);
    if bits == 0 {
        return 0;
    }
    let mut carry = 0;
    for digit in digits.iter_mut() {
        let new_carry = *digit >> (Digit::BITS - bits);
        *digit = (*digit << bits) | carry;
        carry = new_carry;
    }
    carry
}

/// In-place right shift by less than a digit, returning the bits shifted out at the bottom
/// (in the top bits of the returned digit).
#[inline]
pub(crate) fn shr_assign_digits(digits: &mut [Digit], bits: u32) -> Digit {
    debug_assert!(bits < Digit::BITS);
    if bits == 0 {
        return 0;
    }
    let mut borrow = 0;
    for digit in digits.iter_mut().rev() {
        let new_borrow = *digit << (Digit::BITS - bits);
        *digit = (*digit >> bits) | borrow;
        borrow = new_borrow;
    }
    borrow
}

impl<const L: usize> ShlAssign<usize> for Unsigned<L> {
    /// Compared to `num-bigint{,-dig}`, this is a truncating shift.
    ///
    /// Note that "left" means "higher number". Shifting by `BITS` or more gives zero.
    #[inline]
    fn shl_assign(&mut self, bits: usize) {
        let n_digits = bits / DIGIT_BITS;
        if n_digits >= L {
            *self = Self::ZERO;
            return;
        }

        let data = &mut self.0;

        // shift back by n_digits
        data.copy_within(..(L - n_digits), n_digits);
        data[..n_digits].fill(0);

        // shift back sub-digit amount of bits
        shl_assign_digits(&mut data[n_digits..], (bits % DIGIT_BITS) as u32);
    }
}

impl<const L: usize> ShrAssign<usize> for Unsigned<L> {
    /// Note that "right" means "lower number". Shifting by `BITS` or more gives zero.
    #[inline]
    fn shr_assign(&mut self, bits: usize) {
        let n_digits = bits / DIGIT_BITS;
        if n_digits >= L {
            *self = Self::ZERO;
            return;
        }

        let data = &mut self.0;

        // shift by n_digits
        data.copy_within(n_digits.., 0);
        data[(L - n_digits)..].fill(0);

        shr_assign_digits(&mut data[..(L - n_digits)], (bits % DIGIT_BITS) as u32);
    }
}

impl<const L: usize> ShlAssign<usize> for Signed<L> {
    /// Same as for the bit pattern.
    fn shl_assign(&mut self, bits: usize) {
        self.0 <<= bits;
    }
}

impl<const L: usize> ShrAssign<usize> for Signed<L> {
    /// Arithmetic shift: the sign bit is copied in from the left.
    fn shr_assign(&mut self, bits: usize) {
        if self.is_negative() {
            self.0 = !(!self.0 >> bits);
        } else {
            self.0 >>= bits;
        }
    }
}

macro_rules! shift_ops {
    ($($t:ident),*) => {$(
        impl<const L: usize> Shl<usize> for $t<L> {
            type Output = Self;

            #[inline]
            fn shl(mut self, bits: usize) -> Self::Output {
                self <<= bits;
                self
            }
        }

        impl<const L: usize> Shl<usize> for &$t<L> {
            type Output = $t<L>;

            #[inline]
            fn shl(self, bits: usize) -> Self::Output {
                *self << bits
            }
        }

        impl<const L: usize> Shr<usize> for $t<L> {
            type Output = Self;

            #[inline]
            fn shr(mut self, bits: usize) -> Self::Output {
                self >>= bits;
                self
            }
        }

        impl<const L: usize> Shr<usize> for &$t<L> {
            type Output = $t<L>;

            #[inline]
            fn shr(self, bits: usize) -> Self::Output {
                *self >> bits
            }
        }
    )*};
}

shift_ops!(Unsigned, Signed);
