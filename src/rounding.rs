use crate::constants::{POWERS_10, WIDE_ROUNDING_DIGITS};
use crate::ops::{magic, wide::U128};
use crate::Error;

/// `RoundingStrategy` represents the different rounding strategies that can be used when a result
/// carries more fractional digits than the target scale can hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RoundingStrategy {
    /// When a number is halfway between two others, it is rounded toward the nearest even number.
    /// Also known as "Bankers Rounding".
    /// e.g.
    /// 6.5 -> 6, 7.5 -> 8
    /// -6.5 -> -6, -7.5 -> -8
    #[default]
    MidpointNearestEven = 0,
    /// When a number is halfway between two others, it is rounded toward the nearest number that
    /// is away from zero. e.g. 6.4 -> 6, 6.5 -> 7, -6.5 -> -7
    MidpointAwayFromZero = 1,
    /// The number is always rounded toward zero. e.g. -6.8 -> -6, 6.8 -> 6
    ToZero = 2,
    /// The number is always rounded toward negative infinity. e.g. 6.8 -> 6, -6.8 -> -7
    ToNegativeInfinity = 3,
    /// The number is always rounded toward positive infinity. e.g. 6.8 -> 7, -6.8 -> -6
    ToPositiveInfinity = 4,
}

impl TryFrom<u8> for RoundingStrategy {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => RoundingStrategy::MidpointNearestEven,
            1 => RoundingStrategy::MidpointAwayFromZero,
            2 => RoundingStrategy::ToZero,
            3 => RoundingStrategy::ToNegativeInfinity,
            4 => RoundingStrategy::ToPositiveInfinity,
            other => return Err(Error::InvalidRoundingStrategy(other)),
        })
    }
}

impl From<RoundingStrategy> for u8 {
    fn from(strategy: RoundingStrategy) -> Self {
        strategy as u8
    }
}

impl RoundingStrategy {
    /// Decides whether the truncated quotient `quotient` must be bumped one unit away from zero.
    ///
    /// `remainder` is what was left over after dividing the magnitude by `divisor` and
    /// `negative` is the sign of the exact result.
    #[inline]
    pub(crate) const fn round_up(self, quotient: u64, remainder: u64, divisor: u64, negative: bool) -> bool {
        match self {
            RoundingStrategy::MidpointNearestEven => {
                // Doubling cannot overflow: remainder < divisor <= 2^63.
                (remainder << 1) + (quotient & 1) > divisor
            }
            RoundingStrategy::MidpointAwayFromZero => (remainder << 1) >= divisor,
            RoundingStrategy::ToZero => false,
            RoundingStrategy::ToNegativeInfinity => negative && remainder > 0,
            RoundingStrategy::ToPositiveInfinity => !negative && remainder > 0,
        }
    }

    /// The same decision as [`round_up`](Self::round_up) for divisors whose doubled remainder no
    /// longer fits 64 bits.
    #[inline]
    pub(crate) fn round_up_wide(self, quotient: u64, remainder: U128, divisor: U128, negative: bool) -> bool {
        match self {
            RoundingStrategy::MidpointNearestEven => (remainder << 1) + U128::from_u64(quotient & 1) > divisor,
            RoundingStrategy::MidpointAwayFromZero => (remainder << 1) >= divisor,
            RoundingStrategy::ToZero => false,
            RoundingStrategy::ToNegativeInfinity => negative && !remainder.is_zero(),
            RoundingStrategy::ToPositiveInfinity => !negative && !remainder.is_zero(),
        }
    }

    /// Rounding decision after a division by `10^digits`.
    ///
    /// Only the low bit of the quotient matters, so callers may pass a truncated quotient.
    #[inline]
    pub(crate) fn round_up_pow10(self, quotient: u64, remainder: U128, digits: u32, negative: bool) -> bool {
        if digits < WIDE_ROUNDING_DIGITS {
            self.round_up(quotient, remainder.lo, POWERS_10[digits as usize], negative)
        } else {
            self.round_up_wide(quotient, remainder, magic::pow10(digits), negative)
        }
    }
}
