//! Type aliases by bit-size, independent of architecture/features.

use crate::{Signed, Unsigned};
pub use aliases::*;

// 32-bit
#[cfg(feature = "u32")]
mod aliases {
    use super::*;

    pub type U128 = Unsigned<4>;
    pub type U192 = Unsigned<6>;
    pub type U256 = Unsigned<8>;
    pub type U384 = Unsigned<12>;
    pub type U512 = Unsigned<16>;

    pub type I128 = Signed<4>;
    pub type I192 = Signed<6>;
    pub type I256 = Signed<8>;
    pub type I384 = Signed<12>;
    pub type I512 = Signed<16>;
}

// 64-bit
#[cfg(feature = "u64")]
mod aliases {
    use super::*;

    pub type U128 = Unsigned<2>;
    pub type U192 = Unsigned<3>;
    pub type U256 = Unsigned<4>;
    pub type U384 = Unsigned<6>;
    pub type U512 = Unsigned<8>;

    pub type I128 = Signed<2>;
    pub type I192 = Signed<3>;
    pub type I256 = Signed<4>;
    pub type I384 = Signed<6>;
    pub type I512 = Signed<8>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn widths() {
        assert_eq!(U128::BITS, 128);
        assert_eq!(U192::BITS, 192);
        assert_eq!(U384::BITS, 384);
        assert_eq!(I512::BITS, 512);
        assert_eq!(core::mem::size_of::<I256>(), 32);
    }
}
