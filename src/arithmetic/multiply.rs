use crate::digit::{split, Digit, DoubleDigit};
use crate::numbers::{twos_complement_assign, Product, SignedProduct};
use crate::{Signed, Unsigned};

/// Multiply-accumulate: `acc + a * b + carry` as a double digit.
///
/// Returns the low digit; the high digit becomes the new carry.
/// This can't overflow: $(w - 1) + (w - 1)^2 + (w - 1) = w^2 - 1$.
#[inline]
pub fn mac(acc: Digit, a: Digit, b: Digit, carry: &mut Digit) -> Digit {
    let (hi, lo) = split(acc as DoubleDigit + (a as DoubleDigit) * (b as DoubleDigit) + *carry as DoubleDigit);
    *carry = hi;
    lo
}

/// Schoolbook multiplication, `product = a * b`.
///
/// `product` must start out zero and hold `a.len() + b.len()` digits.
pub(crate) fn mul_full(product: &mut [Digit], a: &[Digit], b: &[Digit]) {
    debug_assert!(product.len() >= a.len() + b.len());

    for (i, &a_i) in a.iter().enumerate() {
        if a_i == 0 {
            continue;
        }
        let mut carry = 0;
        for (j, &b_j) in b.iter().enumerate() {
            product[i + j] = mac(product[i + j], a_i, b_j, &mut carry);
        }
        // previous rows stopped one digit short of this one
        product[i + b.len()] = carry;
    }
}

/// `digits *= factor`, returning the carry out of the top digit.
pub(crate) fn mul_assign_digit(digits: &mut [Digit], factor: Digit) -> Digit {
    let mut carry = 0;
    for digit in digits.iter_mut() {
        *digit = mac(0, *digit, factor, &mut carry);
    }
    carry
}

impl<const L: usize> Unsigned<L> {
    /// The double-width product, which always fits.
    pub fn multiplied_full_width(self, factor: Self) -> Product<L> {
        let mut product = [[0; L]; 2];
        mul_full(product.as_flattened_mut(), &self.0, &factor.0);
        let [lo, hi] = product;
        Product::new(Unsigned(hi), Unsigned(lo))
    }

    /// The low half of the product, and whether the high half was non-zero.
    pub fn overflowing_mul(self, factor: Self) -> (Self, bool) {
        let Product { hi, lo } = self.multiplied_full_width(factor);
        (lo, !hi.is_zero())
    }

    checked_and_wrapping!(overflowing_mul, checked_mul, wrapping_mul);

    /// `self * digit`, and whether anything was carried out of the top digit.
    pub fn overflowing_mul_digit(mut self, digit: Digit) -> (Self, bool) {
        let carry = mul_assign_digit(&mut self.0, digit);
        (self, carry != 0)
    }
}

impl<const L: usize> Signed<L> {
    /// The double-width product, which always fits.
    ///
    /// Multiplies the magnitudes, then negates all `2L` digits if the signs differ.
    pub fn multiplied_full_width(self, factor: Self) -> SignedProduct<L> {
        let negative = self.is_negative() != factor.is_negative();

        let mut product = [[0; L]; 2];
        mul_full(product.as_flattened_mut(), &self.unsigned_abs().0, &factor.unsigned_abs().0);
        if negative {
            twos_complement_assign(product.as_flattened_mut());
        }

        let [lo, hi] = product;
        Product::new(Signed(Unsigned(hi)), Unsigned(lo))
    }

    /// The low half of the product, and whether the high half is anything
    /// but the sign extension of the low half.
    pub fn overflowing_mul(self, factor: Self) -> (Self, bool) {
        let Product { hi, lo } = self.multiplied_full_width(factor);
        let lo = Signed(lo);
        let extension = if lo.is_negative() { Self::MINUS_ONE } else { Self::ZERO };
        (lo, hi != extension)
    }

    checked_and_wrapping!(overflowing_mul, checked_mul, wrapping_mul);
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::fixtures::*;

    pub const N1: Digit = -1i64 as Digit;
    pub const N2: Digit = -2i64 as Digit;
    pub const M: Digit = Digit::MAX;

    pub const MUL_TRIPLES: &'static [(&'static [Digit], &'static [Digit], &'static [Digit])] = &[
        (&[], &[], &[]),
        (&[], &[1], &[]),
        (&[2], &[], &[]),
        (&[1], &[1], &[1]),
        (&[2], &[3], &[6]),
        (&[1], &[1, 1, 1], &[1, 1, 1]),
        (&[1, 2, 3], &[3], &[3, 6, 9]),
        (&[1, 1, 1], &[N1], &[N1, N1, N1]),
        (&[1, 2, 3], &[N1], &[N1, N2, N2, 2]),
        (&[1, 2, 3, 4], &[N1], &[N1, N2, N2, N2, 3]),
        (&[N1], &[N1], &[1, N2]),
        (&[N1, N1], &[N1], &[1, N1, N2]),
        (&[N1, N1, N1], &[N1], &[1, N1, N1, N2]),
        (&[N1, N1, N1, N1], &[N1], &[1, N1, N1, N1, N2]),
        (&[M / 2 + 1], &[2], &[0, 1]),
        (&[0, M / 2 + 1], &[2], &[0, 0, 1]),
        (&[1, 2], &[1, 2, 3], &[1, 4, 7, 6]),
        (&[N1, N1], &[N1, N1, N1], &[1, 0, N1, N2, N1]),
        (&[N1, N1, N1], &[N1, N1, N1, N1], &[1, 0, 0, N1, N2, N1, N1]),
        (&[0, 0, 1], &[1, 2, 3], &[0, 0, 1, 2, 3]),
        (&[0, 0, 1], &[0, 0, 0, 1], &[0, 0, 0, 0, 0, 1]),
    ];

    #[test]
    fn mac_kernel() {
        let mut carry = M;
        assert_eq!(mac(M, M, M, &mut carry), M);
        assert_eq!(carry, M);
    }

    #[test]
    fn test_mul() {
        for &(a, b, c) in MUL_TRIPLES.iter() {
            let a = Unsigned::<7>::from_prefix(a);
            let b = Unsigned::<7>::from_prefix(b);
            let c = Unsigned::<7>::from_prefix(c);

            assert_op!(a * b == c);
            assert_op!(b * a == c);
            assert_eq!(a.multiplied_full_width(b), Product::new(Unsigned::ZERO, c));
        }
    }

    #[test]
    fn full_width() {
        let product = U256::MAX.multiplied_full_width(U256::MAX);
        // (2^n - 1)^2 = (2^n - 2) * 2^n + 1
        assert_eq!(product, Product::new(U256::MAX - U256::ONE, U256::ONE));
        assert_eq!(U256::MAX.overflowing_mul(U256::MAX), (U256::ONE, true));

        let product = I256::MIN.multiplied_full_width(I256::MIN);
        // (-2^(n-1))^2 = 2^(2n-2): the high half is 2^(n-2)
        assert_eq!(product.hi, I256::ONE << (I256::BITS as usize - 2));
        assert!(product.lo.is_zero());

        let product = I256::MINUS_ONE.multiplied_full_width(I256::from(5i8));
        assert_eq!(product, Product::new(I256::MINUS_ONE, I256::from(-5i8).bit_pattern()));
    }

    #[test]
    fn signed_overflow() {
        assert_eq!(I256::MIN.overflowing_mul(I256::MINUS_ONE), (I256::MIN, true));
        assert_eq!(I256::MIN.overflowing_mul(I256::ONE), (I256::MIN, false));
        assert_eq!(I256::MAX.overflowing_mul(I256::MINUS_ONE), (I256::MIN + I256::ONE, false));
        assert_eq!(I256::MAX.checked_mul(I256::from(2i8)), None);
        assert_eq!(I256::from(-3i8).wrapping_mul(I256::from(4i8)), I256::from(-12i8));
    }

    #[test]
    fn mul_digit() {
        let (x, overflow) = U256::MAX.overflowing_mul_digit(2);
        assert_eq!(x, U256::MAX - U256::ONE);
        assert!(overflow);
        assert_eq!(U256::from(21u8).overflowing_mul_digit(2), (U256::from(42u8), false));
    }

    #[test]
    fn agrees_with_native() {
        let mut rng = XorShift::new(17);
        for _ in 0..SWEEP {
            // half-width operands half the time, so non-overflowing products show up
            let (a, b) = (rng.next_u128() >> (rng.next_u128() % 2 * 64), rng.next_u128() >> 64);
            let (x, y) = (U128::from_u128(a).unwrap(), U128::from_u128(b).unwrap());
            let (product, overflow) = a.overflowing_mul(b);
            assert_eq!(x.overflowing_mul(y), (U128::from_u128(product).unwrap(), overflow));

            let (a, b) = (a as i128, -(b as i128));
            let (x, y) = (I128::from_i128(a).unwrap(), I128::from_i128(b).unwrap());
            let (product, overflow) = a.overflowing_mul(b);
            assert_eq!(x.overflowing_mul(y), (I128::from_i128(product).unwrap(), overflow));
        }
    }
}
