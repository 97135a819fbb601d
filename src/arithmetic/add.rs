use ref_cast::RefCast;

use crate::digit::{Digit, DoubleDigit};
use crate::{Signed, Unsigned, Wrapping};

// Add with carry:
#[inline]
pub fn adc(a: Digit, b: Digit, acc: &mut DoubleDigit) -> Digit {
    *acc += a as DoubleDigit;
    *acc += b as DoubleDigit;
    let lo = *acc as Digit;
    *acc >>= Digit::BITS;
    lo
}

/// Two argument addition of raw slices:
/// a += b
///
/// The carry ripples from the least significant digit up through all of `a`;
/// the carry out of the top digit (0 or 1) is returned.
#[inline]
pub(crate) fn add_assign_carry(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry as Digit
}

impl<const L: usize> Unsigned<L> {
    /// `self + summand`, and whether a carry fell out of the top digit.
    pub fn overflowing_add(mut self, summand: Self) -> (Self, bool) {
        let carry = add_assign_carry(&mut self.0, &summand.0);
        (self, carry != 0)
    }

    checked_and_wrapping!(overflowing_add, checked_add, wrapping_add);

    pub fn wrapping_add_assign(&mut self, summand: Self) {
        *Wrapping::ref_cast_mut(self) += Wrapping(summand);
    }
}

impl<const L: usize> Signed<L> {
    /// `self + summand`; overflow happens iff both summands have the same sign,
    /// and the sum's sign differs from it.
    pub fn overflowing_add(self, summand: Self) -> (Self, bool) {
        let sum = Self(self.0.wrapping_add(summand.0));
        let overflow = self.is_negative() == summand.is_negative()
            && sum.is_negative() != self.is_negative();
        (sum, overflow)
    }

    checked_and_wrapping!(overflowing_add, checked_add, wrapping_add);

    pub fn wrapping_add_assign(&mut self, summand: Self) {
        *Wrapping::ref_cast_mut(self) += Wrapping(summand);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::*;

    const M: Digit = Digit::MAX;

    #[test]
    fn adc_kernel() {
        let mut carry = 1;
        assert_eq!(adc(M, M, &mut carry), M);
        assert_eq!(carry, 1);
        assert_eq!(adc(1, 2, &mut carry), 4);
        assert_eq!(carry, 0);
    }

    #[test]
    fn carry_ripples() {
        // x64:(w, w, w, 0) + x64:(3, 0, 0, 0) == x64:(2, 0, 0, 1)
        let a: U256 = x64(&[u64::MAX, u64::MAX, u64::MAX, 0]);
        let b: U256 = x64(&[3, 0, 0, 0]);
        assert_eq!(a.overflowing_add(b), (x64(&[2, 0, 0, 1]), false));
        assert_eq!(a + b, x64(&[2, 0, 0, 1]));
    }

    #[test]
    fn add_assign_carry_partial() {
        let mut a = [M, M, 5];
        assert_eq!(add_assign_carry(&mut a, &[1]), 0);
        assert_eq!(a, [0, 0, 6]);

        let mut a = [M, M];
        assert_eq!(add_assign_carry(&mut a, &[1]), 1);
        assert_eq!(a, [0, 0]);
    }

    #[test]
    fn overflow_boundary() {
        assert_eq!(U256::MAX.overflowing_add(U256::ONE), (U256::MIN, true));
        assert_eq!(U256::MAX.checked_add(U256::ONE), None);
        assert_eq!(U256::MAX.wrapping_add(U256::ONE), U256::ZERO);

        assert_eq!(I256::MAX.overflowing_add(I256::ONE), (I256::MIN, true));
        assert_eq!(I256::MIN.overflowing_add(I256::MINUS_ONE), (I256::MAX, true));
        assert_eq!(I256::MIN.overflowing_add(I256::ONE), (I256::MIN.wrapping_add(I256::ONE), false));
        assert_eq!(I256::MINUS_ONE.overflowing_add(I256::ONE), (I256::ZERO, false));
    }

    #[test]
    #[should_panic(expected = "attempt to add with overflow")]
    fn operator_traps() {
        let _ = U128::MAX + U128::ONE;
    }

    #[test]
    fn wrapping_add_assign() {
        let mut x = U128::MAX;
        x.wrapping_add_assign(U128::from(2u8));
        assert_eq!(x, U128::ONE);

        let mut y = I128::MAX;
        y.wrapping_add_assign(I128::ONE);
        assert_eq!(y, I128::MIN);
    }

    #[test]
    fn agrees_with_native() {
        let mut rng = XorShift::new(11);
        for _ in 0..SWEEP {
            let (a, b) = (rng.next_u128(), rng.next_u128());
            let (x, y) = (U128::from_u128(a).unwrap(), U128::from_u128(b).unwrap());
            let (sum, overflow) = a.overflowing_add(b);
            assert_eq!(x.overflowing_add(y), (U128::from_u128(sum).unwrap(), overflow));

            let (a, b) = (a as i128, b as i128);
            let (x, y) = (I128::from_i128(a).unwrap(), I128::from_i128(b).unwrap());
            let (sum, overflow) = a.overflowing_add(b);
            assert_eq!(x.overflowing_add(y), (I128::from_i128(sum).unwrap(), overflow));
        }
    }
}
