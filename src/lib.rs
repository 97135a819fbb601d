#![cfg_attr(not(test), no_std)]
//! Fixed-width signed and unsigned integers of `L` machine words.
//!
//! [`Unsigned<L>`] is an array of `L` [`Digit`]s, least significant first, and
//! [`Signed<L>`] is its two's complement reinterpretation. Both come with the
//! arithmetic of the native integers (`overflowing_*`, `checked_*`, `wrapping_*`
//! and trapping operators), full-width multiplication and division, and text
//! conversion in radix 2 to 36.
//!
//! The digit size follows the target's pointer width, unless one of the
//! features `u32` or `u64` is selected.
//!
//! ```
//! use wordwide::{I256, U256};
//!
//! let x: U256 = "0xffffffffffffffffffffffffffffffff".parse().unwrap();
//! let square = x.multiplied_full_width(x);
//! assert!(square.hi.is_zero());
//! assert_eq!(square.lo / x, x);
//!
//! let y = I256::from(-7i8);
//! assert_eq!(y.div_rem(I256::from(2i8)), (I256::from(-3i8), I256::from(-1i8)));
//! assert_eq!(y.to_string(), "-7");
//! ```

extern crate alloc;

mod digit;
pub use digit::{Digit, Digits};
mod error;
pub use error::{Error, Result};
mod numbers;
pub use numbers::{twos_complement_subsequence, Product, Signed, SignedProduct, Unsigned};
mod arithmetic;
pub use arithmetic::Wrapping;
mod radix;
pub use radix::RadixChunk;
mod text;
mod magnitude;
pub use magnitude::{Magnitude, Sign, SignMagnitude};
mod aliases;
pub use aliases::*;

#[cfg(test)]
mod fixtures;
