use core::fmt;

/// Why a conversion failed.
///
/// Arithmetic never fails through this type; overflow is reported with
/// `overflowing_*` flags and `checked_*` options instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// no digits where digits were expected
    Empty,
    /// byte that is not a digit of the radix in use
    InvalidDigit(u8),
    /// value does not fit the destination type
    Overflow,
    /// negative value for an unsigned destination
    Negative,
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => f.write_str("cannot parse integer from empty string"),
            Error::InvalidDigit(byte) => write!(f, "invalid digit found in string: {:?}", *byte as char),
            Error::Overflow => f.write_str("number too large to fit in target type"),
            Error::Negative => f.write_str("negative number for unsigned target type"),
        }
    }
}
