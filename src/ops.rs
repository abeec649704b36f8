// Kernels shared by both storage widths. Everything here works on unsigned magnitudes; the value
// types strip the sign before calling in and reattach it while narrowing the result.

pub(crate) mod magic;
pub(crate) mod wide;

use crate::constants::POWERS_10;
use crate::RoundingStrategy;
use wide::U128;

/// Multiplies two magnitudes held at `scale` digits and rounds the product back to `scale`.
#[inline]
pub(crate) fn mul_magnitude(left: u64, right: u64, scale: u32, strategy: RoundingStrategy, negative: bool) -> U128 {
    let product = U128::widening_mul(left, right);
    magic::div_pow10_rounded(product, scale, strategy, negative)
}

/// Divides `dividend` by `divisor`, both held at `scale` digits, returning the rounded quotient
/// at `scale` digits.
///
/// # Panics
///
/// Panics if `divisor` is zero.
#[inline]
pub(crate) fn div_magnitude(dividend: u64, divisor: u64, scale: u32, strategy: RoundingStrategy, negative: bool) -> U128 {
    let scaled = U128::widening_mul(dividend, POWERS_10[scale as usize]);
    div_scaled(scaled, divisor, strategy, negative)
}

/// As [`div_magnitude`], but gives up early once the quotient is known to exceed 64 bits.
#[inline]
pub(crate) fn checked_div_magnitude(
    dividend: u64,
    divisor: u64,
    scale: u32,
    strategy: RoundingStrategy,
    negative: bool,
) -> Option<U128> {
    if divisor == 0 {
        panic!("attempt to divide by zero");
    }
    let scaled = U128::widening_mul(dividend, POWERS_10[scale as usize]);
    if scaled.hi >= divisor {
        return None;
    }
    Some(div_scaled(scaled, divisor, strategy, negative))
}

fn div_scaled(scaled: U128, divisor: u64, strategy: RoundingStrategy, negative: bool) -> U128 {
    let (quotient, remainder) = if scaled.hi == 0 {
        (U128::from_u64(scaled.lo / divisor), scaled.lo % divisor)
    } else {
        scaled.div_rem_u64(divisor)
    };
    if strategy.round_up(quotient.lo, remainder, divisor, negative) {
        quotient + U128::from_u64(1)
    } else {
        quotient
    }
}

/// Applies `negative` to `magnitude`, returning `None` when the result does not fit an `i64`.
#[inline]
pub(crate) const fn narrow_i64(magnitude: U128, negative: bool) -> Option<i64> {
    if magnitude.hi != 0 {
        return None;
    }
    let value = magnitude.lo;
    if negative {
        if value > i64::MIN.unsigned_abs() {
            None
        } else {
            Some((value as i64).wrapping_neg())
        }
    } else if value > i64::MAX as u64 {
        None
    } else {
        Some(value as i64)
    }
}

/// Applies `negative` to `magnitude`, keeping the low 64 bits of the two's complement result.
#[inline]
pub(crate) const fn wrap_i64(magnitude: U128, negative: bool) -> i64 {
    let value = magnitude.lo as i64;
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

/// Applies `negative` to `magnitude`, returning `None` when the result does not fit an `i32`.
#[inline]
pub(crate) const fn narrow_i32(magnitude: U128, negative: bool) -> Option<i32> {
    if magnitude.hi != 0 {
        return None;
    }
    let value = magnitude.lo;
    if negative {
        if value > i32::MIN.unsigned_abs() as u64 {
            None
        } else {
            Some((value as i32).wrapping_neg())
        }
    } else if value > i32::MAX as u64 {
        None
    } else {
        Some(value as i32)
    }
}

/// Applies `negative` to `magnitude`, keeping the low 32 bits of the two's complement result.
#[inline]
pub(crate) const fn wrap_i32(magnitude: U128, negative: bool) -> i32 {
    let value = magnitude.lo as i32;
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}
