use core::{cmp::Ordering, convert::TryFrom, fmt, ops::{Deref, DerefMut}};

use super::{Signed, Unsigned};
use crate::{Digit, Error, Result};

impl<const L: usize> Deref for Unsigned<L> {
    type Target = [Digit];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const L: usize> DerefMut for Unsigned<L> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const L: usize> Default for Unsigned<L> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const L: usize> Default for Signed<L> {
    fn default() -> Self {
        Self::ZERO
    }
}

// Since we store little-endian, comparison needs to start at the last
// digit, instead of at the first as the derived / default implementation would.
impl<const L: usize> Ord for Unsigned<L> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl<const L: usize> PartialOrd for Unsigned<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Same digits compare like unsigned, unless exactly one side is negative.
impl<const L: usize> Ord for Signed<L> {
    fn cmp(&self, other: &Self) -> Ordering {
        let ordering = self.0.cmp(&other.0);
        if self.is_negative() != other.is_negative() {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

impl<const L: usize> PartialOrd for Signed<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! from_unsigned_primitive {
    ($($t:ty),*) => {$(
        /// Panics if `L` digits can't hold the value (only possible for a single `u32` digit).
        impl<const L: usize> From<$t> for Unsigned<L> {
            fn from(value: $t) -> Self {
                match Self::from_u128(value as u128) {
                    Some(x) => x,
                    None => panic!("{} does not fit in {} bits", value, Self::BITS),
                }
            }
        }
    )*};
}

from_unsigned_primitive!(u8, u16, u32, u64);

macro_rules! from_signed_primitive {
    ($($t:ty),*) => {$(
        /// Panics if `L` digits can't hold the value (only possible for a single `u32` digit).
        impl<const L: usize> From<$t> for Signed<L> {
            fn from(value: $t) -> Self {
                match Self::from_i128(value as i128) {
                    Some(x) => x,
                    None => panic!("{} does not fit in {} bits", value, Self::BITS),
                }
            }
        }
    )*};
}

from_signed_primitive!(i8, i16, i32, i64);

impl<const L: usize> TryFrom<Unsigned<L>> for u128 {
    type Error = Error;
    fn try_from(x: Unsigned<L>) -> Result<Self> {
        let mut value = 0u128;
        for (i, &digit) in x.significant_digits().iter().enumerate() {
            let shift = i as u32 * Digit::BITS;
            // digits divide 128 bits, so a digit either fits entirely or not at all
            if shift >= u128::BITS {
                return Err(Error::Overflow);
            }
            value |= (digit as u128) << shift;
        }
        Ok(value)
    }
}

impl<const L: usize> TryFrom<Signed<L>> for i128 {
    type Error = Error;
    fn try_from(x: Signed<L>) -> Result<Self> {
        let magnitude = u128::try_from(x.unsigned_abs())?;
        if x.is_negative() {
            match magnitude {
                m if m <= i128::MIN.unsigned_abs() => Ok((m as i128).wrapping_neg()),
                _ => Err(Error::Overflow),
            }
        } else {
            i128::try_from(magnitude).map_err(|_| Error::Overflow)
        }
    }
}

#[cfg(feature = "hex-debug")]
impl<const L: usize> fmt::Debug for Unsigned<L> {
    /// Big-endian bytes, grouped by four.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_be_bytes();
        write!(f, "Unsigned<{}>({})", L, delog::hex_str!(bytes.as_slice(), 4))
    }
}

#[cfg(not(feature = "hex-debug"))]
impl<const L: usize> fmt::Debug for Unsigned<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsigned<{}>({:#x})", L, self)
    }
}

impl<const L: usize> fmt::Debug for Signed<L> {
    /// The bit pattern, like `Unsigned`, followed by the decimal value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signed")
            .field(&self.0)
            .field(&format_args!("{}", self))
            .finish()
    }
}
