//! Test helpers: width aliases, word-size independent literals, and a seeded generator.

pub use crate::aliases::*;
pub use hex_literal::hex;

use crate::{Signed, Unsigned};

/// Iterations of the randomized comparisons.
#[cfg(not(feature = "extended-testing"))]
pub const SWEEP: usize = 256;
#[cfg(feature = "extended-testing")]
pub const SWEEP: usize = 1 << 16;

/// Assert that an op works for all val/ref combinations
macro_rules! assert_op {
    ($left:ident $op:tt $right:ident == $expected:expr) => {
        assert_eq!((&$left) $op (&$right), $expected);
        assert_eq!((&$left) $op $right.clone(), $expected);
        assert_eq!($left.clone() $op (&$right), $expected);
        assert_eq!($left.clone() $op $right.clone(), $expected);
    };
}
pub(crate) use assert_op;

/// A number given by 64-bit words, least significant first, whatever the digit size.
pub fn x64<const L: usize>(words: &[u64]) -> Unsigned<L> {
    let bytes: Vec<u8> = words.iter().flat_map(|word| word.to_le_bytes()).collect();
    Unsigned::from_le_bytes(&bytes)
}

/// Marsaglia's xorshift64*, good enough to sweep through operand space reproducibly.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        // the state must not be zero
        Self(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1)
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    pub fn next_u128(&mut self) -> u128 {
        ((self.next_u64() as u128) << 64) | self.next_u64() as u128
    }

    pub fn unsigned<const L: usize>(&mut self) -> Unsigned<L> {
        let mut x = Unsigned::ZERO;
        for digit in x.0.iter_mut() {
            *digit = self.next_u64() as _;
        }
        x
    }

    pub fn signed<const L: usize>(&mut self) -> Signed<L> {
        Signed(self.unsigned())
    }
}

#[test]
fn x64_is_word_size_independent() {
    let x: U128 = x64(&[1, 2]);
    assert_eq!(u128::try_from(x), Ok((2 << 64) | 1));
}
