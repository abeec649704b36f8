use core::fmt;

/// Error type for the library.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The mathematically correct result does not fit the storage width of the target type.
    Overflow,
    /// A raw discriminant did not name any known [`RoundingStrategy`](crate::RoundingStrategy).
    InvalidRoundingStrategy(u8),
    /// The text could not be parsed as a decimal number.
    Parse(rust_decimal::Error),
}

impl From<rust_decimal::Error> for Error {
    #[inline]
    fn from(from: rust_decimal::Error) -> Self {
        Self::Parse(from)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Overflow => f.pad("Number exceeds the range that can be represented by the target type"),
            Self::InvalidRoundingStrategy(ref value) => {
                write!(f, "Value {} is not a valid rounding strategy", value)
            }
            Self::Parse(ref err) => write!(f, "Invalid decimal: {}", err),
        }
    }
}
