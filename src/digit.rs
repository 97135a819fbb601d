/// A word on the machine. [`Unsigned`][crate::Unsigned] and [`Signed`][crate::Signed]
/// are composed of `L` digits each.
///
/// Feature `u32` forces the digit to be 32-bit even on 64-bit architectures,
/// feature `u64` forces the digit to be 64-bit even on 32-bit architectures.
///
/// This is done only for easier testing (typically embedded targets are 32 bit,
/// while desktop/server targets as 64 bit).
pub type Digit = digit::Digit;

/// Multiple [`Digit`]s, least significant first.
pub type Digits = [Digit];

/// Unsigned type with twice as many bits as [`Digit`].
///
/// This is where the word-level full-width multiply (digit × digit) and
/// full-width divide (two digits ÷ digit) happen.
pub(crate) type DoubleDigit = digit::DoubleDigit;
/// Signed type with twice as many bits as [`Digit`].
pub(crate) type SignedDoubleDigit = digit::SignedDoubleDigit;

/// `Digit::BITS`, as the type we index and shift with.
pub(crate) const DIGIT_BITS: usize = Digit::BITS as usize;

#[cfg(not(any(feature = "u32", feature = "u64")))]
compile_error!("Either feature u32 or feature u64!");

#[cfg(all(feature = "u32", feature = "u64"))]
compile_error!("Either feature u32 or feature u64, not both!");

#[cfg(feature = "u32")]
mod digit {
    pub type Digit = u32;
    pub type DoubleDigit = u64;
    pub type SignedDoubleDigit = i64;
}

#[cfg(feature = "u64")]
mod digit {
    pub type Digit = u64;
    pub type DoubleDigit = u128;
    pub type SignedDoubleDigit = i128;
}

/// Split a double digit into `(hi, lo)`.
#[inline]
pub(crate) const fn split(x: DoubleDigit) -> (Digit, Digit) {
    ((x >> Digit::BITS) as Digit, x as Digit)
}

/// Join `(hi, lo)` into a double digit.
#[inline]
pub(crate) const fn join(hi: Digit, lo: Digit) -> DoubleDigit {
    ((hi as DoubleDigit) << Digit::BITS) | lo as DoubleDigit
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn split_join() {
        let x = join(Digit::MAX, 7);
        assert_eq!(split(x), (Digit::MAX, 7));
        assert_eq!(split(DoubleDigit::MAX), (Digit::MAX, Digit::MAX));
        assert_eq!(DIGIT_BITS * 2, DoubleDigit::BITS as usize);
    }
}
