//! Radix chunking for the text codec.
//!
//! Instead of one multiplication (or division) per text digit, the codec works on
//! chunks of `exponent` text digits at once: `base = radix^exponent` is the largest
//! power of the radix that still fits into a [`Digit`].
//!
//! For power-of-two radices dividing the digit size, `radix^exponent` is exactly
//! $2^{\text{Digit::BITS}}$, which doesn't fit; `base` is then stored as `0`, and
//! the codec shifts by whole digits instead.

use crate::digit::{Digit, DoubleDigit};

/// A chunk of `exponent` text digits, worth up to `base` (with `0` meaning $2^{\text{Digit::BITS}}$).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RadixChunk {
    pub exponent: u32,
    pub base: Digit,
}

const fn compute(radix: u32) -> RadixChunk {
    let radix = radix as DoubleDigit;
    let limit = 1 << Digit::BITS;

    let mut power = radix;
    let mut exponent = 1;
    while power * radix <= limit {
        power *= radix;
        exponent += 1;
    }

    // truncation maps 2^BITS to 0
    RadixChunk { exponent, base: power as Digit }
}

const fn table() -> [RadixChunk; 37] {
    let mut table = [RadixChunk { exponent: 0, base: 0 }; 37];
    let mut radix = 2;
    while radix <= 36 {
        table[radix] = compute(radix as u32);
        radix += 1;
    }
    table
}

static CHUNKS: [RadixChunk; 37] = table();

impl RadixChunk {
    /// The chunk for `radix`.
    ///
    /// Panics unless `2 <= radix <= 36`.
    pub fn of(radix: u32) -> Self {
        assert!((2..=36).contains(&radix), "radix must be in 2..=36, got {}", radix);
        CHUNKS[radix as usize]
    }

    /// Whether `base` stands for $2^{\text{Digit::BITS}}$.
    pub const fn is_digit_sized(&self) -> bool {
        self.base == 0
    }
}

/// The value of an ASCII digit (`0-9`, `a-z`, case-insensitive), if it is valid in `radix`.
#[inline]
pub(crate) fn decode_digit(byte: u8, radix: u32) -> Option<Digit> {
    (byte as char).to_digit(radix).map(|value| value as Digit)
}

/// The ASCII character for `value < 36`.
#[inline]
pub(crate) fn encode_digit(value: u8, uppercase: bool) -> u8 {
    debug_assert!(value < 36);
    match value {
        0..=9 => b'0' + value,
        _ if uppercase => b'A' + value - 10,
        _ => b'a' + value - 10,
    }
}
