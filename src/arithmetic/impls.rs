use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign,
};

use super::add::add_assign_carry;
use super::subtract::sub_assign_borrow;
use super::Wrapping;
use crate::{Signed, Unsigned};

/// Trapping operator `$trait` (with its `$assign_trait`) via `$checked`,
/// for all val/ref combinations.
macro_rules! trapping_op {
    ($t:ident, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $checked:ident, $message:literal) => {
        impl<const L: usize> $trait for $t<L> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                match self.$checked(rhs) {
                    Some(result) => result,
                    None => panic!($message),
                }
            }
        }

        impl<'a, const L: usize> $trait<&'a $t<L>> for $t<L> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: &'a $t<L>) -> Self::Output {
                self.$method(*rhs)
            }
        }

        impl<'a, const L: usize> $trait<$t<L>> for &'a $t<L> {
            type Output = $t<L>;

            #[inline]
            fn $method(self, rhs: $t<L>) -> Self::Output {
                (*self).$method(rhs)
            }
        }

        impl<'a, 'b, const L: usize> $trait<&'b $t<L>> for &'a $t<L> {
            type Output = $t<L>;

            #[inline]
            fn $method(self, rhs: &'b $t<L>) -> Self::Output {
                (*self).$method(*rhs)
            }
        }

        impl<const L: usize> $assign_trait for $t<L> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = (*self).$method(rhs);
            }
        }

        impl<'a, const L: usize> $assign_trait<&'a $t<L>> for $t<L> {
            #[inline]
            fn $assign_method(&mut self, rhs: &'a $t<L>) {
                *self = (*self).$method(*rhs);
            }
        }
    };
}

macro_rules! trapping_ops {
    ($($t:ident),*) => {$(
        trapping_op!($t, Add, add, AddAssign, add_assign, checked_add, "attempt to add with overflow");
        trapping_op!($t, Sub, sub, SubAssign, sub_assign, checked_sub, "attempt to subtract with overflow");
        trapping_op!($t, Mul, mul, MulAssign, mul_assign, checked_mul, "attempt to multiply with overflow");
    )*};
}

trapping_ops!(Unsigned, Signed);

// Division distinguishes the two failure modes in its panic message, see `div_rem`.
macro_rules! division_ops {
    ($($t:ident),*) => {$(
        impl<const L: usize> Div for $t<L> {
            type Output = Self;

            #[inline]
            fn div(self, divisor: Self) -> Self::Output {
                self.div_rem(divisor).0
            }
        }

        impl<const L: usize> Rem for $t<L> {
            type Output = Self;

            #[inline]
            fn rem(self, divisor: Self) -> Self::Output {
                self.div_rem(divisor).1
            }
        }

        forward_ref_binop!($t, Div, div, DivAssign, div_assign);
        forward_ref_binop!($t, Rem, rem, RemAssign, rem_assign);
    )*};
}

/// The reference and assigning variants of an implemented by-value operator.
macro_rules! forward_ref_binop {
    ($t:ident, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl<'a, const L: usize> $trait<&'a $t<L>> for $t<L> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: &'a $t<L>) -> Self::Output {
                self.$method(*rhs)
            }
        }

        impl<'a, const L: usize> $trait<$t<L>> for &'a $t<L> {
            type Output = $t<L>;

            #[inline]
            fn $method(self, rhs: $t<L>) -> Self::Output {
                (*self).$method(rhs)
            }
        }

        impl<'a, 'b, const L: usize> $trait<&'b $t<L>> for &'a $t<L> {
            type Output = $t<L>;

            #[inline]
            fn $method(self, rhs: &'b $t<L>) -> Self::Output {
                (*self).$method(*rhs)
            }
        }

        impl<const L: usize> $assign_trait for $t<L> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = (*self).$method(rhs);
            }
        }

        impl<'a, const L: usize> $assign_trait<&'a $t<L>> for $t<L> {
            #[inline]
            fn $assign_method(&mut self, rhs: &'a $t<L>) {
                *self = (*self).$method(*rhs);
            }
        }
    };
}

division_ops!(Unsigned, Signed);

impl<const L: usize> Neg for Signed<L> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        match self.checked_neg() {
            Some(negated) => negated,
            None => panic!("attempt to negate with overflow"),
        }
    }
}

impl<const L: usize> Neg for &Signed<L> {
    type Output = Signed<L>;

    #[inline]
    fn neg(self) -> Self::Output {
        -*self
    }
}

//
// Bitwise operations, digit by digit
//

impl<const L: usize> Not for Unsigned<L> {
    type Output = Self;

    #[inline]
    fn not(mut self) -> Self::Output {
        self.0.iter_mut().for_each(|digit| *digit = !*digit);
        self
    }
}

impl<const L: usize> Not for Signed<L> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

macro_rules! bitwise_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<const L: usize> $assign_trait for Unsigned<L> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                for (a, b) in self.0.iter_mut().zip(rhs.0.iter()) {
                    *a = *a $op *b;
                }
            }
        }

        impl<const L: usize> $assign_trait for Signed<L> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                self.0.$assign_method(rhs.0);
            }
        }

        impl<const L: usize> $trait for Unsigned<L> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: Self) -> Self::Output {
                self.$assign_method(rhs);
                self
            }
        }

        impl<const L: usize> $trait for Signed<L> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: Self) -> Self::Output {
                self.$assign_method(rhs);
                self
            }
        }
    };
}

bitwise_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
bitwise_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
bitwise_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

//
// Wrapping arithmetic, modulo 2^BITS
//

impl<const L: usize> AddAssign for Wrapping<Unsigned<L>> {
    #[inline]
    fn add_assign(&mut self, summand: Self) {
        add_assign_carry(&mut self.0 .0, &summand.0 .0);
    }
}

impl<const L: usize> SubAssign for Wrapping<Unsigned<L>> {
    #[inline]
    fn sub_assign(&mut self, subtrahend: Self) {
        sub_assign_borrow(&mut self.0 .0, &subtrahend.0 .0);
    }
}

impl<const L: usize> MulAssign for Wrapping<Unsigned<L>> {
    #[inline]
    fn mul_assign(&mut self, factor: Self) {
        self.0 = self.0.wrapping_mul(factor.0);
    }
}

impl<const L: usize> Neg for Wrapping<Unsigned<L>> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Wrapping(self.0.twos_complement())
    }
}

// Two's complement makes signed wrapping arithmetic that of the bit pattern.
impl<const L: usize> AddAssign for Wrapping<Signed<L>> {
    #[inline]
    fn add_assign(&mut self, summand: Self) {
        add_assign_carry(&mut self.0 .0 .0, &summand.0 .0 .0);
    }
}

impl<const L: usize> SubAssign for Wrapping<Signed<L>> {
    #[inline]
    fn sub_assign(&mut self, subtrahend: Self) {
        sub_assign_borrow(&mut self.0 .0 .0, &subtrahend.0 .0 .0);
    }
}

impl<const L: usize> MulAssign for Wrapping<Signed<L>> {
    #[inline]
    fn mul_assign(&mut self, factor: Self) {
        self.0 = self.0.wrapping_mul(factor.0);
    }
}

impl<const L: usize> Neg for Wrapping<Signed<L>> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Wrapping(self.0.twos_complement())
    }
}

macro_rules! wrapping_binops {
    ($($t:ident),*) => {$(
        impl<const L: usize> Add for Wrapping<$t<L>> {
            type Output = Self;

            #[inline]
            fn add(mut self, summand: Self) -> Self::Output {
                self += summand;
                self
            }
        }

        impl<const L: usize> Sub for Wrapping<$t<L>> {
            type Output = Self;

            #[inline]
            fn sub(mut self, subtrahend: Self) -> Self::Output {
                self -= subtrahend;
                self
            }
        }

        impl<const L: usize> Mul for Wrapping<$t<L>> {
            type Output = Self;

            #[inline]
            fn mul(mut self, factor: Self) -> Self::Output {
                self *= factor;
                self
            }
        }
    )*};
}

wrapping_binops!(Unsigned, Signed);
