use crate::constants::{MAX_I64_SCALE, POWERS_10};
use crate::interchange::UnpackedDecimal;
use crate::ops::{self, magic, wide::U128};
use crate::{Error, FastDecimal32, RoundingStrategy};

use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use core::str::FromStr;
use rust_decimal::Decimal;

/// A fixed point decimal number stored in an `i64`, holding `SCALE` fractional digits.
///
/// The represented value is `raw / 10^SCALE`. Because every value of a given type shares the
/// same scale, equality, ordering and hashing are those of the underlying integer.
///
/// `SCALE` may be anything from 0 to 18 inclusive. Any other scale is rejected when the type is
/// first used:
///
/// ```compile_fail
/// use fast_decimal::FastDecimal64;
///
/// let value = FastDecimal64::<19>::from_raw(1);
/// ```
///
/// Arithmetic comes in two flavours. `checked_*` methods return `None` when the rounded result
/// does not fit an `i64`, while `wrapping_*` methods keep the low 64 bits of the two's complement
/// result like the primitive integer methods of the same name. The operators panic on overflow.
///
/// ```
/// use fast_decimal::FastDecimal64;
///
/// type Money = FastDecimal64<4>;
///
/// let price: Money = "234.8945".parse().unwrap();
/// let tax: Money = "3289.9832".parse().unwrap();
/// assert_eq!((price + tax).to_string(), "3524.8777");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FastDecimal64<const SCALE: u32> {
    raw: i64,
}

impl<const SCALE: u32> FastDecimal64<SCALE> {
    const SCALE_IS_SUPPORTED: () = assert!(SCALE <= MAX_I64_SCALE, "FastDecimal64 supports at most 18 fractional digits");

    // One whole unit at this scale.
    const UNIT: i64 = POWERS_10[SCALE as usize] as i64;

    /// The number of fractional digits held by this type.
    pub const SCALE: u32 = SCALE;
    /// The largest scale a 64 bit fixed point decimal supports.
    pub const MAX_SCALE: u32 = MAX_I64_SCALE;

    pub const ZERO: Self = Self::from_raw(0);
    pub const ONE: Self = Self::from_raw(Self::UNIT);
    pub const NEGATIVE_ONE: Self = Self::from_raw(-Self::UNIT);
    /// The largest value, `i64::MAX / 10^SCALE`.
    pub const MAX: Self = Self::from_raw(i64::MAX);
    /// The smallest value, `i64::MIN / 10^SCALE`.
    pub const MIN: Self = Self::from_raw(i64::MIN);

    /// Creates a value from its scaled integer representation.
    ///
    /// # Example
    ///
    /// ```
    /// use fast_decimal::FastDecimal64;
    ///
    /// let value = FastDecimal64::<4>::from_raw(12_3456);
    /// assert_eq!(value.to_string(), "12.3456");
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        let () = Self::SCALE_IS_SUPPORTED;
        FastDecimal64 { raw }
    }

    /// Returns the scaled integer representation, `value * 10^SCALE`.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.raw
    }

    #[inline]
    const fn from_checked_raw(raw: Option<i64>) -> Option<Self> {
        match raw {
            Some(raw) => Some(Self::from_raw(raw)),
            None => None,
        }
    }

    /// Converts a whole number, wrapping when `value * 10^SCALE` does not fit.
    #[inline]
    #[must_use]
    pub const fn wrapping_from_int(value: i64) -> Self {
        Self::from_raw(value.wrapping_mul(Self::UNIT))
    }

    /// Converts a whole number, returning `None` when `value * 10^SCALE` does not fit.
    #[inline]
    #[must_use]
    pub const fn checked_from_int(value: i64) -> Option<Self> {
        Self::from_checked_raw(value.checked_mul(Self::UNIT))
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

    /// Negates the value. Negating [`MIN`](Self::MIN) returns `MIN` unchanged.
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

    /// The absolute value. [`MIN`](Self::MIN) has no positive counterpart and is returned
    /// unchanged.
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

    /// The absolute value.
    ///
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

    /// Adds one whole unit.
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

    /// Subtracts one whole unit.
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

    /// Multiplies two values, rounding the product half to even.
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

    /// Multiplies two values, rounding the product with `strategy`.
    ///
    /// The full 128 bit product of the raw values is rescaled back to `SCALE` digits before
    /// being truncated to 64 bits.
    #[must_use]
    pub fn wrapping_mul_with_strategy(self, other: Self, strategy: RoundingStrategy) -> Self {
        let negative = (self.raw < 0) != (other.raw < 0);
        let magnitude = ops::mul_magnitude(self.raw.unsigned_abs(), other.raw.unsigned_abs(), SCALE, strategy, negative);
        Self::from_raw(ops::wrap_i64(magnitude, negative))
    }

    /// Multiplies two values, rounding the product with `strategy`. Returns `None` when the
    /// rounded product does not fit.
    ///
    /// # Example
    ///
    /// ```
    /// use fast_decimal::{FastDecimal64, RoundingStrategy};
    ///
    /// let a = FastDecimal64::<4>::from_raw(2_5000);
    /// let b = FastDecimal64::<4>::from_raw(0_0001);
    /// let even = a.checked_mul_with_strategy(b, RoundingStrategy::MidpointNearestEven);
    /// let away = a.checked_mul_with_strategy(b, RoundingStrategy::MidpointAwayFromZero);
    /// assert_eq!(even, Some(FastDecimal64::from_raw(2)));
    /// assert_eq!(away, Some(FastDecimal64::from_raw(3)));
    /// ```
    #[must_use]
    pub fn checked_mul_with_strategy(self, other: Self, strategy: RoundingStrategy) -> Option<Self> {
        let negative = (self.raw < 0) != (other.raw < 0);
        let magnitude = ops::mul_magnitude(self.raw.unsigned_abs(), other.raw.unsigned_abs(), SCALE, strategy, negative);
        ops::narrow_i64(magnitude, negative).map(Self::from_raw)
    }

    /// Divides two values, rounding the quotient half to even.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[inline]
    #[must_use]
    pub fn wrapping_div(self, other: Self) -> Self {
        self.wrapping_div_with_strategy(other, RoundingStrategy::MidpointNearestEven)
    }

    /// Divides two values, rounding the quotient half to even. Returns `None` when the quotient
    /// does not fit.
    ///
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
        let magnitude = ops::div_magnitude(self.raw.unsigned_abs(), other.raw.unsigned_abs(), SCALE, strategy, negative);
        Self::from_raw(ops::wrap_i64(magnitude, negative))
    }

    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[must_use]
    pub fn checked_div_with_strategy(self, other: Self, strategy: RoundingStrategy) -> Option<Self> {
        let negative = (self.raw < 0) != (other.raw < 0);
        let magnitude =
            ops::checked_div_magnitude(self.raw.unsigned_abs(), other.raw.unsigned_abs(), SCALE, strategy, negative)?;
        ops::narrow_i64(magnitude, negative).map(Self::from_raw)
    }

    /// Multiplies by a whole number. No rescaling is involved, so the result is exact.
    #[inline]
    #[must_use]
    pub const fn wrapping_mul_int(self, value: i64) -> Self {
        Self::from_raw(self.raw.wrapping_mul(value))
    }

    #[inline]
    #[must_use]
    pub const fn checked_mul_int(self, value: i64) -> Option<Self> {
        Self::from_checked_raw(self.raw.checked_mul(value))
    }

    /// The remainder of dividing by `other`. Both sides share a scale, so this is the remainder
    /// of the raw values.
    ///
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

    /// Returns whichever value has the larger magnitude, preferring the positive one on a tie.
    #[must_use]
    pub const fn max_magnitude(self, other: Self) -> Self {
        let (left, right) = (self.raw.unsigned_abs(), other.raw.unsigned_abs());
        if left > right || (left == right && self.raw >= 0) {
            self
        } else {
            other
        }
    }

    /// Returns whichever value has the smaller magnitude, preferring the negative one on a tie.
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
    ///
    /// ```
    /// use fast_decimal::FastDecimal64;
    ///
    /// let value: FastDecimal64<7> = "4324.4357500".parse().unwrap();
    /// let rounded = value.rescale::<4>().unwrap();
    /// assert_eq!(rounded.to_string(), "4324.4358");
    /// ```
    pub fn rescale<const TARGET: u32>(self) -> Result<FastDecimal64<TARGET>, Error> {
        self.rescale_with_strategy(RoundingStrategy::MidpointNearestEven)
    }

    /// Converts to a different number of fractional digits, rounding with `strategy` when
    /// digits are dropped. Adding digits fails with [`Error::Overflow`] when the scaled value
    /// no longer fits.
    pub fn rescale_with_strategy<const TARGET: u32>(
        self,
        strategy: RoundingStrategy,
    ) -> Result<FastDecimal64<TARGET>, Error> {
        if TARGET >= SCALE {
            let factor = POWERS_10[(TARGET - SCALE) as usize] as i64;
            return self
                .raw
                .checked_mul(factor)
                .map(FastDecimal64::from_raw)
                .ok_or(Error::Overflow);
        }
        let negative = self.raw < 0;
        let magnitude = magic::div_pow10_rounded(
            U128::from_u64(self.raw.unsigned_abs()),
            SCALE - TARGET,
            strategy,
            negative,
        );
        ops::narrow_i64(magnitude, negative)
            .map(FastDecimal64::from_raw)
            .ok_or(Error::Overflow)
    }

    /// Converts to a [`Decimal`] holding the same digits and scale. This never loses precision.
    #[inline]
    #[must_use]
    pub const fn to_decimal(self) -> Decimal {
        UnpackedDecimal::pack(self.raw, SCALE)
    }

    /// Converts from a [`Decimal`], returning `None` when the value does not fit.
    ///
    /// Excess fractional digits are rounded half to even before the range check.
    #[must_use]
    pub fn checked_from_decimal(value: &Decimal) -> Option<Self> {
        let unpacked = UnpackedDecimal::from_decimal(value);
        let magnitude = unpacked.checked_magnitude(SCALE)?;
        ops::narrow_i64(magnitude, unpacked.negative).map(Self::from_raw)
    }

    /// Converts from a [`Decimal`], keeping the low 64 bits of the scaled value when it does not
    /// fit. Excess fractional digits are rounded half to even.
    #[must_use]
    pub fn wrapping_from_decimal(value: Decimal) -> Self {
        let unpacked = UnpackedDecimal::from_decimal(&value);
        let magnitude = unpacked.wrapping_magnitude(SCALE);
        Self::from_raw(ops::wrap_i64(magnitude, unpacked.negative))
    }

    /// Converts to a 32 bit fixed point decimal at the same scale, keeping the low 32 bits of the
    /// raw value.
    #[inline]
    #[must_use]
    pub const fn wrapping_narrow(self) -> FastDecimal32<SCALE> {
        FastDecimal32::from_raw(self.raw as i32)
    }

    /// Returns `true` if the value has no fractional part.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.raw % Self::UNIT == 0
    }

    #[inline]
    pub const fn is_even_integer(self) -> bool {
        self.raw % (2 * Self::UNIT) == 0
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

impl<const SCALE: u32> From<FastDecimal32<SCALE>> for FastDecimal64<SCALE> {
    #[inline]
    fn from(value: FastDecimal32<SCALE>) -> Self {
        FastDecimal64::from_raw(value.raw() as i64)
    }
}

impl_fixed_decimal!(FastDecimal64);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type Fd4 = FastDecimal64<4>;

    #[test]
    fn it_exposes_scale_constants() {
        assert_eq!(Fd4::SCALE, 4);
        assert_eq!(Fd4::MAX_SCALE, 18);
        assert_eq!(Fd4::ONE.raw(), 10_000);
        assert_eq!(Fd4::NEGATIVE_ONE.raw(), -10_000);
        assert_eq!(FastDecimal64::<0>::ONE.raw(), 1);
        assert_eq!(FastDecimal64::<18>::ONE.raw(), 1_000_000_000_000_000_000);
        assert_eq!(Fd4::default(), Fd4::ZERO);
    }

    #[test]
    fn it_compares_by_raw_value() {
        assert!(Fd4::from_raw(-1) < Fd4::ZERO);
        assert!(Fd4::MAX > Fd4::ONE);
        assert_eq!(Fd4::from_raw(5), Fd4::from_raw(5));
    }

    #[test]
    fn it_picks_values_by_magnitude() {
        let positive = Fd4::from_raw(3);
        let negative = Fd4::from_raw(-3);
        assert_eq!(positive.max_magnitude(negative), positive);
        assert_eq!(negative.max_magnitude(positive), positive);
        assert_eq!(positive.min_magnitude(negative), negative);
        assert_eq!(Fd4::MIN.max_magnitude(Fd4::MAX), Fd4::MIN);
        assert_eq!(Fd4::from_raw(7).min_magnitude(Fd4::from_raw(-2)), Fd4::from_raw(-2));
    }

    #[test]
    fn it_classifies_integers() {
        assert!(Fd4::from_raw(20_000).is_even_integer());
        assert!(!Fd4::from_raw(20_000).is_odd_integer());
        assert!(Fd4::from_raw(-30_000).is_odd_integer());
        assert!(!Fd4::from_raw(30_001).is_integer());
        assert!(!Fd4::from_raw(30_001).is_odd_integer());
        assert!(Fd4::ZERO.is_even_integer());
        assert!(!Fd4::ZERO.is_positive());
        assert!(!Fd4::ZERO.is_negative());
        // 2 * 10^18 still fits an i64.
        assert!(FastDecimal64::<18>::from_raw(4_000_000_000_000_000_000).is_even_integer());
    }

    proptest! {
        #[test]
        fn checked_results_agree_with_wrapping_results(a in any::<i64>(), b in any::<i64>(), strategy in 0u8..5) {
            let strategy = RoundingStrategy::try_from(strategy).unwrap();
            let (a, b) = (FastDecimal64::<6>::from_raw(a), FastDecimal64::<6>::from_raw(b));
            if let Some(sum) = a.checked_add(b) {
                prop_assert_eq!(sum, a.wrapping_add(b));
            }
            if let Some(product) = a.checked_mul_with_strategy(b, strategy) {
                prop_assert_eq!(product, a.wrapping_mul_with_strategy(b, strategy));
            }
            if !b.is_zero() {
                if let Some(quotient) = a.checked_div_with_strategy(b, strategy) {
                    prop_assert_eq!(quotient, a.wrapping_div_with_strategy(b, strategy));
                }
            }
        }

        #[test]
        fn it_round_trips_through_decimal(raw in any::<i64>()) {
            let value = FastDecimal64::<11>::from_raw(raw);
            let decimal = value.to_decimal();
            prop_assert_eq!(FastDecimal64::<11>::checked_from_decimal(&decimal), Some(value));
            prop_assert_eq!(FastDecimal64::<11>::wrapping_from_decimal(decimal), value);
        }

        #[test]
        fn it_round_trips_through_a_wider_scale(raw in -922_337_203_685_477i64..=922_337_203_685_477) {
            let value = Fd4::from_raw(raw);
            let wider = value.rescale::<8>();
            prop_assert_eq!(wider.and_then(|wider| wider.rescale::<4>()), Ok(value));
        }
    }
}
