//! Text in radix 2 to 36.
//!
//! Decoding accepts `['+' | '-'] [prefix] digit+`, where the prefix (`0x`, `0o` or `0b`)
//! is only recognized when no radix is given, and digits are case-insensitive.
//! Digits are folded in chunks of [`RadixChunk::exponent`] characters, so there is one
//! multi-digit multiplication per chunk rather than per character.
//!
//! Encoding peels off chunks by single digit division, most significant last.

use alloc::string::String;
use alloc::vec::Vec;
use core::{fmt, str::FromStr};

use crate::arithmetic::add_assign_carry;
use crate::arithmetic::divide::div_rem_assign_digit;
use crate::digit::{Digit, DIGIT_BITS};
use crate::numbers::significant_len;
use crate::radix::{decode_digit, encode_digit, RadixChunk};
use crate::{Error, Result, Signed, Unsigned};

/// Sign and magnitude as read, before fitting them into the target type.
struct Parsed<const L: usize> {
    negative: bool,
    magnitude: Unsigned<L>,
    overflow: bool,
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

fn split_prefix(text: &str) -> (u32, &str) {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        let radix = match bytes[1] {
            b'x' => 16,
            b'o' => 8,
            b'b' => 2,
            _ => return (10, text),
        };
        return (radix, &text[2..]);
    }
    (10, text)
}

/// Folds `digits` into a magnitude modulo $2^{\text{BITS}}$, noting whether anything was lost.
fn decode_magnitude<const L: usize>(digits: &[u8], radix: u32) -> Result<(Unsigned<L>, bool)> {
    let chunk = RadixChunk::of(radix);
    if digits.is_empty() {
        return Err(Error::Empty);
    }

    let mut magnitude = Unsigned::<L>::ZERO;
    let mut overflow = false;

    // the leading chunk is short, so all later ones are full
    let exponent = chunk.exponent as usize;
    let leading = match digits.len() % exponent {
        0 => exponent,
        short => short,
    };

    let mut start = 0;
    let mut end = leading;
    while start < digits.len() {
        let mut value: Digit = 0;
        for &byte in &digits[start..end] {
            let digit = decode_digit(byte, radix).ok_or(Error::InvalidDigit(byte))?;
            value = value * radix as Digit + digit;
        }

        if start > 0 {
            if chunk.is_digit_sized() {
                overflow |= magnitude.0[L - 1] != 0;
                magnitude <<= DIGIT_BITS;
            } else {
                let (product, carry) = magnitude.overflowing_mul_digit(chunk.base);
                overflow |= carry;
                magnitude = product;
            }
        }
        overflow |= add_assign_carry(&mut magnitude.0, &[value]) != 0;

        start = end;
        end += exponent;
    }

    Ok((magnitude, overflow))
}

fn parse_parts<const L: usize>(text: &str, radix: Option<u32>) -> Result<Parsed<L>> {
    let (negative, rest) = split_sign(text);
    let (radix, digits) = match radix {
        Some(radix) => (radix, rest),
        None => split_prefix(rest),
    };
    let (magnitude, overflow) = decode_magnitude(digits.as_bytes(), radix)?;
    Ok(Parsed { negative, magnitude, overflow })
}

fn rejected<T>(text: &str, error: Error) -> Result<T> {
    log::debug!("rejected {:?}: {}", text, error);
    Err(error)
}

/// Digits of `magnitude` in `radix`, without sign or leading zeros.
fn encode_magnitude<const L: usize>(mut magnitude: Unsigned<L>, radix: u32, uppercase: bool) -> String {
    let chunk = RadixChunk::of(radix);

    // least significant first
    let mut digits = Vec::new();
    loop {
        let len = significant_len(&magnitude.0);
        if len == 0 {
            break;
        }

        let mut remainder = if chunk.is_digit_sized() {
            let lowest = magnitude.0[0];
            magnitude >>= DIGIT_BITS;
            lowest
        } else {
            div_rem_assign_digit(&mut magnitude.0[..len], chunk.base)
        };

        for _ in 0..chunk.exponent {
            digits.push(encode_digit((remainder % radix as Digit) as u8, uppercase));
            remainder /= radix as Digit;
        }
    }

    while digits.last() == Some(&b'0') {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(b'0');
    }

    digits.iter().rev().map(|&byte| byte as char).collect()
}

impl<const L: usize> Unsigned<L> {
    fn try_from_text(text: &str, radix: Option<u32>) -> Result<Self> {
        let parsed = parse_parts::<L>(text, radix).or_else(|error| rejected(text, error))?;
        if parsed.overflow {
            return rejected(text, Error::Overflow);
        }
        if parsed.negative && !parsed.magnitude.is_zero() {
            return rejected(text, Error::Negative);
        }
        Ok(parsed.magnitude)
    }

    /// Reads `text` in the given radix; there is no prefix detection.
    ///
    /// Returns `None` for an empty digit region, invalid digits, a minus sign on a non-zero
    /// value, or values that don't fit.
    ///
    /// Panics unless `2 <= radix <= 36`.
    pub fn from_str_radix(text: &str, radix: u32) -> Option<Self> {
        Self::try_from_text(text, Some(radix)).ok()
    }

    /// Reads `text` in the radix given by its prefix (`0x`, `0o` or `0b`), or in decimal.
    pub fn parse(text: &str) -> Option<Self> {
        Self::try_from_text(text, None).ok()
    }

    /// Reads `text` in the given radix, modulo $2^{\text{BITS}}$; a minus sign negates.
    ///
    /// Returns `None` only for an empty digit region or invalid digits.
    pub fn wrapping_from_str_radix(text: &str, radix: u32) -> Option<Self> {
        let parsed = parse_parts::<L>(text, Some(radix)).ok()?;
        Some(if parsed.negative { parsed.magnitude.wrapping_neg() } else { parsed.magnitude })
    }

    /// The digits in `radix`, without prefix.
    ///
    /// Panics unless `2 <= radix <= 36`.
    pub fn to_str_radix(&self, radix: u32, uppercase: bool) -> String {
        encode_magnitude(*self, radix, uppercase)
    }
}

impl<const L: usize> Signed<L> {
    fn try_from_text(text: &str, radix: Option<u32>) -> Result<Self> {
        let parsed = parse_parts::<L>(text, radix).or_else(|error| rejected(text, error))?;
        if parsed.overflow {
            return rejected(text, Error::Overflow);
        }
        match Self::from_magnitude(parsed.magnitude, parsed.negative) {
            Some(value) => Ok(value),
            None => rejected(text, Error::Overflow),
        }
    }

    /// Reads `text` in the given radix; there is no prefix detection.
    ///
    /// Accepts exactly the values in `MIN..=MAX`.
    ///
    /// Panics unless `2 <= radix <= 36`.
    pub fn from_str_radix(text: &str, radix: u32) -> Option<Self> {
        Self::try_from_text(text, Some(radix)).ok()
    }

    /// Reads `text` in the radix given by its prefix (`0x`, `0o` or `0b`), or in decimal.
    pub fn parse(text: &str) -> Option<Self> {
        Self::try_from_text(text, None).ok()
    }

    /// Reads `text` in the given radix, modulo $2^{\text{BITS}}$.
    pub fn wrapping_from_str_radix(text: &str, radix: u32) -> Option<Self> {
        Unsigned::wrapping_from_str_radix(text, radix).map(Self)
    }

    /// The digits of the absolute value in `radix`, after a `-` for negative values.
    pub fn to_str_radix(&self, radix: u32, uppercase: bool) -> String {
        let digits = encode_magnitude(self.unsigned_abs(), radix, uppercase);
        if self.is_negative() {
            let mut text = String::with_capacity(digits.len() + 1);
            text.push('-');
            text.push_str(&digits);
            text
        } else {
            digits
        }
    }
}

impl<const L: usize> FromStr for Unsigned<L> {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::try_from_text(text, None)
    }
}

impl<const L: usize> FromStr for Signed<L> {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::try_from_text(text, None)
    }
}

impl<const L: usize> fmt::Display for Unsigned<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_str_radix(10, false))
    }
}

impl<const L: usize> fmt::Display for Signed<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &encode_magnitude(self.unsigned_abs(), 10, false))
    }
}

// Like the native signed integers, these format the bit pattern.
macro_rules! radix_fmt {
    ($trait:ident, $radix:expr, $prefix:expr, $uppercase:expr) => {
        impl<const L: usize> fmt::$trait for Unsigned<L> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad_integral(true, $prefix, &self.to_str_radix($radix, $uppercase))
            }
        }

        impl<const L: usize> fmt::$trait for Signed<L> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::$trait::fmt(&self.0, f)
            }
        }
    };
}

radix_fmt!(LowerHex, 16, "0x", false);
radix_fmt!(UpperHex, 16, "0x", true);
radix_fmt!(Octal, 8, "0o", false);
radix_fmt!(Binary, 2, "0b", false);

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::*;

    #[test]
    fn explicit_radix_has_no_prefix() {
        assert_eq!(U256::from_str_radix("0x", 36), Some(U256::from(33u8)));
        assert_eq!(U256::parse("0x"), None);
        assert_eq!(U256::parse("0x1f"), Some(U256::from(31u8)));
        assert_eq!(U256::parse("0o17"), Some(U256::from(15u8)));
        assert_eq!(I256::parse("-0b101"), Some(I256::from(-5i8)));
        assert_eq!(U256::from_str_radix("0b1", 16), Some(U256::from(0xb1u8)));
    }

    #[test]
    fn radix_36_and_12_agree() {
        let base36 = "-zyxwvutsrqponmlkjihgfedcba9876543210";
        let base12 = "-989845357808467761b337462360bba70a5664a6599aa166a630";

        let x = I256::from_str_radix(base36, 36).unwrap();
        let y = I256::from_str_radix(base12, 12).unwrap();
        assert_eq!(x, y);
        assert_eq!(x.to_str_radix(36, false), base36);
        assert_eq!(y.to_str_radix(12, false), base12);
        assert_eq!(x.to_str_radix(36, true), base36.to_uppercase());
    }

    #[test]
    fn rejects() {
        assert_eq!("".parse::<U256>(), Err(Error::Empty));
        assert_eq!("-".parse::<I256>(), Err(Error::Empty));
        assert_eq!("12a".parse::<U256>(), Err(Error::InvalidDigit(b'a')));
        assert_eq!(" 1".parse::<U256>(), Err(Error::InvalidDigit(b' ')));
        assert_eq!("-5".parse::<U256>(), Err(Error::Negative));
        assert_eq!("-0".parse::<U256>(), Ok(U256::ZERO));
        assert_eq!("+7".parse::<U256>(), Ok(U256::from(7u8)));
        assert_eq!(U256::from_str_radix("z", 35), None);
    }

    #[test]
    #[should_panic]
    fn radix_out_of_range() {
        U256::from_str_radix("1", 1);
    }

    #[test]
    fn range_boundaries() {
        let max = "340282366920938463463374607431768211455";
        let too_large = "340282366920938463463374607431768211456";
        assert_eq!(U128::parse(max), Some(U128::MAX));
        assert_eq!(too_large.parse::<U128>(), Err(Error::Overflow));
        assert_eq!(U128::from_str_radix(&"f".repeat(32), 16), Some(U128::MAX));
        assert_eq!(U128::from_str_radix(&"1".repeat(129), 2), None);
        assert_eq!(U128::from_str_radix(&"0".repeat(300), 2), Some(U128::ZERO));

        let min = "-170141183460469231731687303715884105728";
        assert_eq!(I128::parse(min), Some(I128::MIN));
        assert_eq!("170141183460469231731687303715884105728".parse::<I128>(), Err(Error::Overflow));
        assert_eq!(I128::parse("170141183460469231731687303715884105727"), Some(I128::MAX));
    }

    #[test]
    fn wrapping() {
        assert_eq!(U128::wrapping_from_str_radix("340282366920938463463374607431768211457", 10), Some(U128::ONE));
        assert_eq!(U128::wrapping_from_str_radix("-1", 10), Some(U128::MAX));
        assert_eq!(I128::wrapping_from_str_radix("170141183460469231731687303715884105728", 10), Some(I128::MIN));
        assert_eq!(U128::wrapping_from_str_radix("", 10), None);
    }

    #[test]
    fn bytes_and_text() {
        let x = U256::from_be_bytes(&hex!("0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20"));
        assert_eq!(U256::parse("0x0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20"), Some(x));
        assert_eq!(x.to_str_radix(16, false), "102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20");
    }

    #[test]
    fn round_trip() {
        let mut rng = XorShift::new(13);
        for _ in 0..SWEEP / 8 {
            let x: U256 = rng.unsigned();
            let y: I256 = rng.signed();
            for radix in 2..=36 {
                let uppercase = radix % 2 == 0;
                assert_eq!(U256::from_str_radix(&x.to_str_radix(radix, uppercase), radix), Some(x));
                assert_eq!(I256::from_str_radix(&y.to_str_radix(radix, uppercase), radix), Some(y));
            }
        }

        for radix in 2..=36 {
            assert_eq!(U256::ZERO.to_str_radix(radix, false), "0");
            assert_eq!(I256::from_str_radix(&I256::MIN.to_str_radix(radix, false), radix), Some(I256::MIN));
        }
    }

    #[test]
    fn agrees_with_native() {
        let mut rng = XorShift::new(17);
        for _ in 0..SWEEP {
            let a = rng.next_u128() >> (rng.next_u64() % 128);
            let x = U128::from_u128(a).unwrap();
            assert_eq!(format!("{}", x), format!("{}", a));
            assert_eq!(format!("{:x}", x), format!("{:x}", a));
            assert_eq!(format!("{:#X}", x), format!("{:#X}", a));
            assert_eq!(format!("{:o}", x), format!("{:o}", a));
            assert_eq!(format!("{:#b}", x), format!("{:#b}", a));

            let b = a as i128;
            let y = I128::from_i128(b).unwrap();
            assert_eq!(format!("{}", y), format!("{}", b));
            assert_eq!(format!("{:+}", y), format!("{:+}", b));
            assert_eq!(format!("{:x}", y), format!("{:x}", b));
            assert_eq!(i128::from_str_radix(&y.to_str_radix(7, false), 7), Ok(b));
        }
    }

    #[test]
    fn padding() {
        let x = I256::from(-42i8);
        assert_eq!(format!("{:>6}", x), "   -42");
        assert_eq!(format!("{:06}", x), "-00042");
        assert_eq!(format!("{:<4}|", U256::ONE), "1   |");
        assert_eq!(format!("{:#010x}", U256::from(255u8)), "0x000000ff");
    }
}
