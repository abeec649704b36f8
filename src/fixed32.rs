use crate::constants::{MAX_I32_SCALE, POWERS_10};
use crate::interchange::UnpackedDecimal;
use crate::ops::{self, magic, wide::U128};
use crate::{Error, FastDecimal64, RoundingStrategy};

use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use core::str::FromStr;
use rust_decimal::Decimal;

/// A fixed point decimal number stored in an `i32`, holding `SCALE` fractional digits.
///
/// This is the compact sibling of [`FastDecimal64`] and offers the same operations. `SCALE` may
/// be anything from 0 to 9 inclusive; larger scales fail to build:
///
/// ```compile_fail
/// use fast_decimal::FastDecimal32;
///
/// let value = FastDecimal32::<10>::from_raw(1);
/// ```
///
/// Products and scaled dividends of two 32 bit values always fit 64 bits, so multiplication and
/// division never leave native arithmetic.
///
/// ```
/// use fast_decimal::FastDecimal32;
///
/// let a = FastDecimal32::<4>::from_raw(47_0000);
/// let b = FastDecimal32::<4>::from_raw(2_0000);
/// assert_eq!((a / b).to_string(), "23.5000");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FastDecimal32<const SCALE: u32> {
    raw: i32,
}

impl<const SCALE: u32> FastDecimal32<SCALE> {
    const SCALE_IS_SUPPORTED: () = assert!(SCALE <= MAX_I32_SCALE, "FastDecimal32 supports at most 9 fractional digits");

    const UNIT: i32 = POWERS_10[SCALE as usize] as i32;

    /// The number of fractional digits held by this type.
    pub const SCALE: u32 = SCALE;
    /// The largest scale a 32 bit fixed point decimal supports.
    pub const MAX_SCALE: u32 = MAX_I32_SCALE;

    pub const ZERO: Self = Self::from_raw(0);
    pub const ONE: Self = Self::from_raw(Self::UNIT);
    pub const NEGATIVE_ONE: Self = Self::from_raw(-Self::UNIT);
    pub const MAX: Self = Self::from_raw(i32::MAX);
    pub const MIN: Self = Self::from_raw(i32::MIN);

    /// Creates a value from its scaled integer representation.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        let () = Self::SCALE_IS_SUPPORTED;
        FastDecimal32 { raw }
    }

    /// Returns the scaled integer representation, `value * 10^SCALE`.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.raw
    }

    #[inline]
    const fn from_checked_raw(raw: Option<i32>) -> Option<Self> {
        match raw {
            Some(raw) => Some(Self::from_raw(raw)),
            None => None,
        }
    }

    /// Converts a whole number, wrapping when `value * 10^SCALE` does not fit an `i32`.
    #[inline]
    #[must_use]
    pub const fn wrapping_from_int(value: i64) -> Self {
        Self::from_raw((value as i32).wrapping_mul(Self::UNIT))
    }

    #[inline]
    #[must_use]
    pub const fn checked_from_int(value: i64) -> Option<Self> {
        match value.checked_mul(Self::UNIT as i64) {
            Some(raw) if raw >= i32::MIN as i64 && raw <= i32::MAX as i64 => Some(Self::from_raw(raw as i32)),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn wrapping_add(self, other: Self) -> Self {
        Self::from_raw(self.raw.wrapping_add(other.raw))
    }

    #[inline]
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        Self::from_checked_raw(self.raw.checked_add(other.raw))
    }

    #[inline]
    #[must_use]
    pub const fn wrapping_sub(self, other: Self) -> Self {
        Self::from_raw(self.raw.wrapping_sub(other.raw))
    }

    #[inline]
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        Self::from_checked_raw(self.raw.checked_sub(other.raw))
    }

    #[inline]
    #[must_use]
    pub const fn wrapping_neg(self) -> Self {
        Self::from_raw(self.raw.wrapping_neg())
    }

    #[inline]
    #[must_use]
    pub const fn checked_neg(self) -> Option<Self> {
        Self::from_checked_raw(self.raw.checked_neg())
    }

    #[inline]
    #[must_use]
    pub const fn wrapping_abs(self) -> Self {
        Self::from_raw(self.raw.wrapping_abs())
    }

    #[inline]
    #[must_use]
    pub const fn checked_abs(self) -> Option<Self> {
        Self::from_checked_raw(self.raw.checked_abs())
    }

    /// # Panics
    ///
    /// Panics when called on [`MIN`](Self::MIN).
    #[inline]
    #[must_use]
    pub const fn abs(self) -> Self {
        match self.checked_abs() {
            Some(result) => result,
            None => panic!("attempt to negate with overflow"),
        }
    }

    #[inline]
    #[must_use]
    pub const fn wrapping_inc(self) -> Self {
        self.wrapping_add(Self::ONE)
    }

    #[inline]
    #[must_use]
    pub const fn checked_inc(self) -> Option<Self> {
        self.checked_add(Self::ONE)
    }

    #[inline]
    #[must_use]
    pub const fn wrapping_dec(self) -> Self {
        self.wrapping_sub(Self::ONE)
    }

    #[inline]
    #[must_use]
    pub const fn checked_dec(self) -> Option<Self> {
        self.checked_sub(Self::ONE)
    }

    #[inline]
    #[must_use]
    pub fn wrapping_mul(self, other: Self) -> Self {
        self.wrapping_mul_with_strategy(other, RoundingStrategy::MidpointNearestEven)
    }

    #[inline]
    #[must_use]
    pub fn checked_mul(self, other: Self) -> Option<Self> {
        self.checked_mul_with_strategy(other, RoundingStrategy::MidpointNearestEven)
    }

    #[must_use]
    pub fn wrapping_mul_with_strategy(self, other: Self, strategy: RoundingStrategy) -> Self {
        let negative = (self.raw < 0) != (other.raw < 0);
        let magnitude = self.mul_magnitude(other, strategy, negative);
        Self::from_raw(ops::wrap_i32(magnitude, negative))
    }

    #[must_use]
    pub fn checked_mul_with_strategy(self, other: Self, strategy: RoundingStrategy) -> Option<Self> {
        let negative = (self.raw < 0) != (other.raw < 0);
        let magnitude = self.mul_magnitude(other, strategy, negative);
        ops::narrow_i32(magnitude, negative).map(Self::from_raw)
    }

    #[inline]
    fn mul_magnitude(self, other: Self, strategy: RoundingStrategy, negative: bool) -> U128 {
        ops::mul_magnitude(
            self.raw.unsigned_abs() as u64,
            other.raw.unsigned_abs() as u64,
            SCALE,
            strategy,
            negative,
        )
    }

    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[inline]
    #[must_use]
    pub fn wrapping_div(self, other: Self) -> Self {
        self.wrapping_div_with_strategy(other, RoundingStrategy::MidpointNearestEven)
    }

    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[inline]
    #[must_use]
    pub fn checked_div(self, other: Self) -> Option<Self> {
        self.checked_div_with_strategy(other, RoundingStrategy::MidpointNearestEven)
    }

    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[must_use]
    pub fn wrapping_div_with_strategy(self, other: Self, strategy: RoundingStrategy) -> Self {
        let negative = (self.raw < 0) != (other.raw < 0);
        let magnitude = self.div_magnitude(other, strategy, negative);
        Self::from_raw(ops::wrap_i32(magnitude, negative))
    }

    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[must_use]
    pub fn checked_div_with_strategy(self, other: Self, strategy: RoundingStrategy) -> Option<Self> {
        let negative = (self.raw < 0) != (other.raw < 0);
        let magnitude = self.div_magnitude(other, strategy, negative);
        ops::narrow_i32(magnitude, negative).map(Self::from_raw)
    }

    #[inline]
    fn div_magnitude(self, other: Self, strategy: RoundingStrategy, negative: bool) -> U128 {
        ops::div_magnitude(
            self.raw.unsigned_abs() as u64,
            other.raw.unsigned_abs() as u64,
            SCALE,
            strategy,
            negative,
        )
    }

    #[inline]
    #[must_use]
    pub const fn wrapping_mul_int(self, value: i32) -> Self {
        Self::from_raw(self.raw.wrapping_mul(value))
    }

    #[inline]
    #[must_use]
    pub const fn checked_mul_int(self, value: i32) -> Option<Self> {
        Self::from_checked_raw(self.raw.checked_mul(value))
    }

    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[inline]
    #[must_use]
    pub const fn wrapping_rem(self, other: Self) -> Self {
        Self::from_raw(self.raw.wrapping_rem(other.raw))
    }

    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[inline]
    #[must_use]
    pub const fn checked_rem(self, other: Self) -> Option<Self> {
        if other.raw == 0 {
            panic!("attempt to calculate the remainder with a divisor of zero");
        }
        Self::from_checked_raw(self.raw.checked_rem(other.raw))
    }

    #[must_use]
    pub const fn max_magnitude(self, other: Self) -> Self {
        let (left, right) = (self.raw.unsigned_abs(), other.raw.unsigned_abs());
        if left > right || (left == right && self.raw >= 0) {
            self
        } else {
            other
        }
    }

    #[must_use]
    pub const fn min_magnitude(self, other: Self) -> Self {
        let (left, right) = (self.raw.unsigned_abs(), other.raw.unsigned_abs());
        if left < right || (left == right && self.raw < 0) {
            self
        } else {
            other
        }
    }

    /// Converts to a different number of fractional digits, rounding half to even when digits
    /// are dropped.
    pub fn rescale<const TARGET: u32>(self) -> Result<FastDecimal32<TARGET>, Error> {
        self.rescale_with_strategy(RoundingStrategy::MidpointNearestEven)
    }

    /// Converts to a different number of fractional digits, rounding with `strategy` when
    /// digits are dropped.
    ///
    /// ```
    /// use fast_decimal::{FastDecimal32, RoundingStrategy};
    ///
    /// let value = FastDecimal32::<4>::from_raw(-2_5550);
    /// let floor = value.rescale_with_strategy::<2>(RoundingStrategy::ToNegativeInfinity).unwrap();
    /// assert_eq!(floor.to_string(), "-2.56");
    /// assert!(value.rescale::<9>().is_err());
    /// ```
    pub fn rescale_with_strategy<const TARGET: u32>(
        self,
        strategy: RoundingStrategy,
    ) -> Result<FastDecimal32<TARGET>, Error> {
        if TARGET >= SCALE {
            let factor = POWERS_10[(TARGET - SCALE) as usize] as i32;
            return self
                .raw
                .checked_mul(factor)
                .map(FastDecimal32::from_raw)
                .ok_or(Error::Overflow);
        }
        let negative = self.raw < 0;
        let magnitude = magic::div_pow10_rounded(
            U128::from_u64(self.raw.unsigned_abs() as u64),
            SCALE - TARGET,
            strategy,
            negative,
        );
        ops::narrow_i32(magnitude, negative)
            .map(FastDecimal32::from_raw)
            .ok_or(Error::Overflow)
    }

    /// Converts to a [`Decimal`] holding the same digits and scale.
    #[inline]
    #[must_use]
    pub const fn to_decimal(self) -> Decimal {
        UnpackedDecimal::pack(self.raw as i64, SCALE)
    }

    /// Converts from a [`Decimal`], returning `None` when the value does not fit.
    #[must_use]
    pub fn checked_from_decimal(value: &Decimal) -> Option<Self> {
        let unpacked = UnpackedDecimal::from_decimal(value);
        let magnitude = unpacked.checked_magnitude(SCALE)?;
        ops::narrow_i32(magnitude, unpacked.negative).map(Self::from_raw)
    }

    /// Converts from a [`Decimal`], keeping the low 32 bits of the scaled value when it does not
    /// fit.
    #[must_use]
    pub fn wrapping_from_decimal(value: Decimal) -> Self {
        let unpacked = UnpackedDecimal::from_decimal(&value);
        let magnitude = unpacked.wrapping_magnitude(SCALE);
        Self::from_raw(ops::wrap_i32(magnitude, unpacked.negative))
    }

    #[inline]
    pub const fn is_integer(self) -> bool {
        self.raw % Self::UNIT == 0
    }

    #[inline]
    pub const fn is_even_integer(self) -> bool {
        // Twice the unit overflows an i32 at nine digits.
        self.raw as i64 % (2 * Self::UNIT as i64) == 0
    }

    #[inline]
    pub const fn is_odd_integer(self) -> bool {
        self.raw % Self::UNIT == 0 && (self.raw / Self::UNIT) & 1 != 0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.raw == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.raw < 0
    }

    /// Returns `true` if the value is strictly greater than zero.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.raw > 0
    }
}

impl<const SCALE: u32> TryFrom<FastDecimal64<SCALE>> for FastDecimal32<SCALE> {
    type Error = Error;

    fn try_from(value: FastDecimal64<SCALE>) -> Result<Self, Self::Error> {
        i32::try_from(value.raw())
            .map(FastDecimal32::from_raw)
            .map_err(|_| Error::Overflow)
    }
}

impl_fixed_decimal!(FastDecimal32);
