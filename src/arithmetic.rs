//! Arithmetic on [`Unsigned`][crate::Unsigned] and [`Signed`][crate::Signed].
//!
//! Operations come in the flavours of the native integers:
//! - `overflowing_*` returns the wrapped result together with an overflow flag,
//! - `checked_*` returns `None` on overflow,
//! - `wrapping_*` silently drops the overflow,
//! - the operators (`+`, `-`, `*`, `/`, `%`, unary `-`) panic on overflow,
//!   in release builds as well.
//!
//! For `Wrapping<T>`, we implement operations "$\text{mod } 2^{\text{BITS}}$",
//! that is, dropping all carries and borrows.
//!
//! Underneath are word-level kernels (`adc`, `sbb`, `mac`, `div_digits`) and
//! slice-level algorithms built on them, so the division engine can run them
//! on windows of its working buffers.

use ref_cast::RefCast;

/// `checked_$op` and `wrapping_$op` in terms of `overflowing_$op`.
macro_rules! checked_and_wrapping {
    ($overflowing:ident, $checked:ident, $wrapping:ident) => {
        pub fn $checked(self, rhs: Self) -> Option<Self> {
            match self.$overflowing(rhs) {
                (result, false) => Some(result),
                (_, true) => None,
            }
        }

        pub fn $wrapping(self, rhs: Self) -> Self {
            self.$overflowing(rhs).0
        }
    };
}
pub(crate) use checked_and_wrapping;

mod add;
mod subtract;
mod multiply;
pub(crate) mod divide;
pub(crate) mod shift;
mod impls;

pub(crate) use add::add_assign_carry;

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, RefCast)]
/// Intentionally-wrapped arithmetic.
///
/// We can't use `core::num::Wrapping` due to type coherence clashing
/// with our usage requirements.
///
/// The idea is that `T` is [`Unsigned`][crate::Unsigned] or [`Signed`][crate::Signed],
/// and we wrap around $2^N$ where `N = T::BITS`.
pub struct Wrapping<T>(pub T);
