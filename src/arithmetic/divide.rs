use crate::digit::{join, Digit, DoubleDigit};
use crate::numbers::{significant_len, twos_complement_assign, Product, SignedProduct};
use crate::{Signed, Unsigned};

use super::add::add_assign_carry;
use super::multiply::mul_assign_digit;
use super::shift::{shl_assign_digits, shr_assign_digits};
use super::subtract::sub_assign_borrow;

/// Divide a two digit numerator by a one digit divisor, returns quotient and remainder:
///
/// Note: the caller must ensure that both the quotient and remainder will fit into a single digit,
/// i.e., `hi < divisor`. This is _not_ true for an arbitrary numerator/denominator.
///
/// (This function also matches what the x86 divide instruction does).
///
/// REMARK: This is Knuth's operation c0), "memorizing the multiplication table in reverse."
#[inline]
pub fn div_digits(hi: Digit, lo: Digit, divisor: Digit) -> (Digit, Digit) {
    debug_assert!(hi < divisor);

    let x = join(hi, lo);
    let divisor = divisor as DoubleDigit;

    let q = x / divisor;
    debug_assert!(q <= Digit::MAX as _);
    let r = x % divisor;

    (q as Digit, r as Digit)
}

/// Divides `digits` in-place by `divisor`, returning the remainder.
pub fn div_rem_assign_digit(digits: &mut [Digit], divisor: Digit) -> Digit {
    debug_assert!(divisor != 0);
    let mut remainder = 0;

    // run down the digits, dividing each by the divisor, while carrying along the remainder
    for digit in digits.iter_mut().rev() {
        (*digit, remainder) = div_digits(remainder, *digit, divisor);
    }

    remainder
}

/// Knuth, TAOCP vol 2 section 4.3.1, algorithm D(ivision).
///
/// - `v` is the normalized divisor: at least one digit, top bit of the top digit set.
/// - `u` is the dividend shifted by the same amount, with one extra top digit for the bits
///   shifted out; it is overwritten with the (normalized) remainder in `u[..v.len()]`.
/// - `q` receives `u.len() - v.len()` quotient digits.
/// - `scratch` holds at least `v.len() + 1` digits.
pub(crate) fn knuth_div_rem(u: &mut [Digit], v: &[Digit], q: &mut [Digit], scratch: &mut [Digit]) {
    let n = v.len();
    debug_assert!(n >= 1 && u.len() > n);
    debug_assert!(v[n - 1].leading_zeros() == 0);
    debug_assert!(q.len() >= u.len() - n);

    let top = v[n - 1] as DoubleDigit;
    let max = Digit::MAX as DoubleDigit;

    for j in (0..u.len() - n).rev() {
        let (hi, lo) = (u[j + n], u[j + n - 1]);

        // the window is below the divisor
        if hi == 0 && (lo as DoubleDigit) < top {
            q[j] = 0;
            continue;
        }

        // estimate from the top two digits, then refine with the second divisor digit;
        // afterwards q̂ is the true quotient digit or one too large
        let numerator = join(hi, lo);
        let mut qhat = numerator / top;
        let mut rhat = numerator % top;
        while qhat > max
            || (n >= 2 && qhat * v[n - 2] as DoubleDigit > join(rhat as Digit, u[j + n - 2]))
        {
            qhat -= 1;
            rhat += top;
            if rhat > max {
                break;
            }
        }

        // multiply and subtract
        let product = &mut scratch[..=n];
        product[..n].copy_from_slice(v);
        product[n] = mul_assign_digit(&mut product[..n], qhat as Digit);
        let borrow = sub_assign_borrow(&mut u[j..=j + n], product);

        // add back; the carry out cancels the borrow
        if borrow != 0 {
            qhat -= 1;
            add_assign_carry(&mut u[j..=j + n], v);
        }

        q[j] = qhat as Digit;
    }
}

/// `dividend = quotient * divisor + remainder`, for a dividend of up to `2L` digits.
///
/// The divisor must be non-zero, `quotient` must be zeroed and at least as long as
/// the significant part of the dividend.
pub(crate) fn div_rem_digits<const L: usize>(dividend: &[Digit], divisor: &Unsigned<L>, quotient: &mut [Digit]) -> Unsigned<L> {
    debug_assert!(dividend.len() <= 2 * L);
    let m = significant_len(dividend);
    let n = divisor.significant_digits().len();
    debug_assert!(n > 0);

    if m < n {
        log::trace!("trivial division: {} < {} digits", m, n);
        return Unsigned::from_prefix(&dividend[..m]);
    }

    if n == 1 {
        log::trace!("single digit division of {} digits", m);
        quotient[..m].copy_from_slice(&dividend[..m]);
        let remainder = div_rem_assign_digit(&mut quotient[..m], divisor.0[0]);
        return Unsigned::from_prefix(&[remainder]);
    }

    log::trace!("long division of {} by {} digits", m, n);

    // This shift has no influence on `q`, and will be reverted for `r` at the end.
    let shift = divisor.0[n - 1].leading_zeros();

    let mut v = divisor.0;
    shl_assign_digits(&mut v[..n], shift);

    let mut u_buffer = [[0; L]; 3];
    let u = &mut u_buffer.as_flattened_mut()[..=m];
    u[..m].copy_from_slice(&dividend[..m]);
    u[m] = shl_assign_digits(&mut u[..m], shift);

    let mut scratch = [[0; L]; 2];
    knuth_div_rem(u, &v[..n], &mut quotient[..=m - n], scratch.as_flattened_mut());

    shr_assign_digits(&mut u[..n], shift);
    Unsigned::from_prefix(&u[..n])
}

/// `magnitude` with the given sign, modulo $2^{\text{BITS}}$.
fn with_sign<const L: usize>(magnitude: Unsigned<L>, negative: bool) -> Signed<L> {
    let signed = Signed(magnitude);
    if negative {
        signed.twos_complement()
    } else {
        signed
    }
}

impl<const L: usize> Unsigned<L> {
    /// Quotient and remainder, or `None` when dividing by zero.
    pub fn checked_div_rem(self, divisor: Self) -> Option<(Self, Self)> {
        if divisor.is_zero() {
            return None;
        }
        let mut quotient = Self::ZERO;
        let remainder = div_rem_digits(&self.0, &divisor, &mut quotient.0);
        Some((quotient, remainder))
    }

    /// Quotient and remainder.
    ///
    /// Panics when dividing by zero.
    pub fn div_rem(self, divisor: Self) -> (Self, Self) {
        match self.checked_div_rem(divisor) {
            Some(pair) => pair,
            None => panic!("attempt to divide by zero"),
        }
    }

    pub fn checked_div(self, divisor: Self) -> Option<Self> {
        self.checked_div_rem(divisor).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(self, divisor: Self) -> Option<Self> {
        self.checked_div_rem(divisor).map(|(_, remainder)| remainder)
    }

    /// The quotient; dividing by zero reports overflow and returns `self`.
    pub fn overflowing_div(self, divisor: Self) -> (Self, bool) {
        match self.checked_div(divisor) {
            Some(quotient) => (quotient, false),
            None => (self, true),
        }
    }

    /// The remainder; dividing by zero reports overflow and returns `self`.
    pub fn overflowing_rem(self, divisor: Self) -> (Self, bool) {
        match self.checked_rem(divisor) {
            Some(remainder) => (remainder, false),
            None => (self, true),
        }
    }

    /// Divides the double-width `dividend` by `self`.
    ///
    /// Overflow is reported when `self` is zero (the low half of the dividend is returned for
    /// both values) or when the quotient does not fit, i.e., `self <= dividend.hi`; in the latter
    /// case the quotient is truncated and the remainder is exact.
    pub fn dividing_full_width_reporting_overflow(self, dividend: Product<L>) -> (Self, Self, bool) {
        if self.is_zero() {
            return (dividend.lo, dividend.lo, true);
        }
        let overflow = self <= dividend.hi;

        let digits = [dividend.lo.0, dividend.hi.0];
        let mut quotient = [[0; L]; 2];
        let remainder = div_rem_digits(digits.as_flattened(), &self, quotient.as_flattened_mut());

        (Unsigned(quotient[0]), remainder, overflow)
    }

    /// Divides the double-width `dividend` by `self`.
    ///
    /// Panics when dividing by zero or when the quotient does not fit.
    pub fn dividing_full_width(self, dividend: Product<L>) -> (Self, Self) {
        if self.is_zero() {
            panic!("attempt to divide by zero");
        }
        match self.dividing_full_width_reporting_overflow(dividend) {
            (quotient, remainder, false) => (quotient, remainder),
            (_, _, true) => panic!("attempt to divide with overflow"),
        }
    }
}

impl<const L: usize> Signed<L> {
    /// Rounds toward zero: the remainder takes the sign of the dividend.
    fn wrapping_div_rem_nonzero(self, divisor: Self) -> (Self, Self) {
        debug_assert!(!divisor.is_zero());
        let mut quotient = Unsigned::ZERO;
        let remainder = div_rem_digits(&self.unsigned_abs().0, &divisor.unsigned_abs(), &mut quotient.0);
        (
            with_sign(quotient, self.is_negative() != divisor.is_negative()),
            with_sign(remainder, self.is_negative()),
        )
    }

    fn overflows_division(self, divisor: Self) -> bool {
        self == Self::MIN && divisor == Self::MINUS_ONE
    }

    /// Quotient and remainder, or `None` when dividing by zero or `MIN / -1`.
    pub fn checked_div_rem(self, divisor: Self) -> Option<(Self, Self)> {
        if divisor.is_zero() || self.overflows_division(divisor) {
            return None;
        }
        Some(self.wrapping_div_rem_nonzero(divisor))
    }

    /// Quotient and remainder.
    ///
    /// Panics when dividing by zero or `MIN / -1`.
    pub fn div_rem(self, divisor: Self) -> (Self, Self) {
        if divisor.is_zero() {
            panic!("attempt to divide by zero");
        }
        if self.overflows_division(divisor) {
            panic!("attempt to divide with overflow");
        }
        self.wrapping_div_rem_nonzero(divisor)
    }

    pub fn checked_div(self, divisor: Self) -> Option<Self> {
        self.checked_div_rem(divisor).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(self, divisor: Self) -> Option<Self> {
        self.checked_div_rem(divisor).map(|(_, remainder)| remainder)
    }

    /// The quotient; `MIN / -1` wraps to `MIN`, dividing by zero returns `self`.
    pub fn overflowing_div(self, divisor: Self) -> (Self, bool) {
        if divisor.is_zero() {
            return (self, true);
        }
        (self.wrapping_div_rem_nonzero(divisor).0, self.overflows_division(divisor))
    }

    /// The remainder; `MIN % -1` is zero, dividing by zero returns `self`.
    pub fn overflowing_rem(self, divisor: Self) -> (Self, bool) {
        if divisor.is_zero() {
            return (self, true);
        }
        (self.wrapping_div_rem_nonzero(divisor).1, self.overflows_division(divisor))
    }

    /// Divides the double-width `dividend` by `self`, rounding toward zero.
    ///
    /// Overflow is reported when `self` is zero (the low half of the dividend is returned for
    /// both values) or when the quotient leaves the signed range; then the quotient is
    /// truncated and the remainder is exact.
    pub fn dividing_full_width_reporting_overflow(self, dividend: SignedProduct<L>) -> (Self, Self, bool) {
        if self.is_zero() {
            let lo = Signed(dividend.lo);
            return (lo, lo, true);
        }

        let dividend_negative = dividend.hi.is_negative();
        let mut magnitude = [dividend.lo.0, dividend.hi.0 .0];
        if dividend_negative {
            twos_complement_assign(magnitude.as_flattened_mut());
        }

        let mut quotient = [[0; L]; 2];
        let remainder = div_rem_digits(magnitude.as_flattened(), &self.unsigned_abs(), quotient.as_flattened_mut());

        let quotient_negative = dividend_negative != self.is_negative();
        let [quotient_lo, quotient_hi] = quotient;
        let overflow = quotient_hi != [0; L]
            || Signed::from_magnitude(Unsigned(quotient_lo), quotient_negative).is_none();

        (
            with_sign(Unsigned(quotient_lo), quotient_negative),
            with_sign(remainder, dividend_negative),
            overflow,
        )
    }

    /// Divides the double-width `dividend` by `self`, rounding toward zero.
    ///
    /// Panics when dividing by zero or when the quotient does not fit.
    pub fn dividing_full_width(self, dividend: SignedProduct<L>) -> (Self, Self) {
        if self.is_zero() {
            panic!("attempt to divide by zero");
        }
        match self.dividing_full_width_reporting_overflow(dividend) {
            (quotient, remainder, false) => (quotient, remainder),
            (_, _, true) => panic!("attempt to divide with overflow"),
        }
    }
}
