use arrayvec::ArrayVec;
use core::ops::{Add, Mul, Shl, Shr, Sub};

/// An unsigned 128 bit integer held as two 64 bit halves.
///
/// Field order matters: the derived ordering compares `hi` before `lo`, which is the numeric
/// ordering of the full value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct U128 {
    pub hi: u64,
    pub lo: u64,
}

const U32_MASK: u64 = 0xFFFF_FFFF;

impl U128 {
    pub const ZERO: U128 = U128 { hi: 0, lo: 0 };

    pub const fn new(hi: u64, lo: u64) -> Self {
        U128 { hi, lo }
    }

    pub const fn from_u64(value: u64) -> Self {
        U128 { hi: 0, lo: value }
    }

    /// The full 128 bit product of two 64 bit values.
    #[inline]
    pub const fn widening_mul(left: u64, right: u64) -> Self {
        let product = left as u128 * right as u128;
        U128 {
            hi: (product >> 64) as u64,
            lo: product as u64,
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.hi == 0 && self.lo == 0
    }

    pub const fn leading_zeros(&self) -> u32 {
        if self.hi == 0 {
            64 + self.lo.leading_zeros()
        } else {
            self.hi.leading_zeros()
        }
    }

    /// Addition modulo 2^128.
    #[inline]
    pub const fn wrapping_add(self, other: U128) -> U128 {
        let (lo, carry) = self.lo.overflowing_add(other.lo);
        let hi = self.hi.wrapping_add(other.hi).wrapping_add(carry as u64);
        U128 { hi, lo }
    }

    /// Subtraction modulo 2^128.
    #[inline]
    pub const fn wrapping_sub(self, other: U128) -> U128 {
        let (lo, borrow) = self.lo.overflowing_sub(other.lo);
        let hi = self.hi.wrapping_sub(other.hi).wrapping_sub(borrow as u64);
        U128 { hi, lo }
    }

    /// Multiplication modulo 2^128. The upper half of the 256 bit product is discarded, so this
    /// is only meaningful where the result is known to fit.
    #[inline]
    pub const fn wrapping_mul(self, other: U128) -> U128 {
        let low = U128::widening_mul(self.lo, other.lo);
        let cross = self
            .hi
            .wrapping_mul(other.lo)
            .wrapping_add(self.lo.wrapping_mul(other.hi));
        U128 {
            hi: low.hi.wrapping_add(cross),
            lo: low.lo,
        }
    }

    /// Multiplication by a 64 bit value modulo 2^128.
    #[inline]
    pub const fn wrapping_mul_u64(self, other: u64) -> U128 {
        let low = U128::widening_mul(self.lo, other);
        U128 {
            hi: low.hi.wrapping_add(self.hi.wrapping_mul(other)),
            lo: low.lo,
        }
    }

    /// Logical left shift. Shift amounts are masked to 0..=127.
    #[inline]
    pub const fn shl(self, shift: u32) -> U128 {
        let shift = shift & 0x7F;
        if shift & 0x40 != 0 {
            U128 {
                hi: self.lo << (shift & 0x3F),
                lo: 0,
            }
        } else if shift != 0 {
            U128 {
                hi: (self.hi << shift) | (self.lo >> (64 - shift)),
                lo: self.lo << shift,
            }
        } else {
            self
        }
    }

    /// Logical right shift. Shift amounts are masked to 0..=127.
    #[inline]
    pub const fn shr(self, shift: u32) -> U128 {
        let shift = shift & 0x7F;
        if shift & 0x40 != 0 {
            U128 {
                hi: 0,
                lo: self.hi >> (shift & 0x3F),
            }
        } else if shift != 0 {
            U128 {
                hi: self.hi >> shift,
                lo: (self.lo >> shift) | (self.hi << (64 - shift)),
            }
        } else {
            self
        }
    }

    /// Divides by a 64 bit divisor, returning the 128 bit quotient and the 64 bit remainder.
    ///
    /// This never reaches for a 128 bit hardware divide: values whose upper half is empty use a
    /// native 64 bit division, divisors that fit 32 bits use short division, and everything else
    /// runs Knuth's algorithm D over 32 bit limbs.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn div_rem_u64(self, divisor: u64) -> (U128, u64) {
        if divisor == 0 {
            panic!("attempt to divide by zero");
        }
        if self.hi == 0 {
            return (U128::from_u64(self.lo / divisor), self.lo % divisor);
        }

        let dividend = self.to_limbs();
        if divisor <= U32_MASK {
            short_division(&dividend, divisor)
        } else {
            long_division(&dividend, divisor)
        }
    }

    // Little endian 32 bit limbs with leading zero limbs trimmed.
    fn to_limbs(self) -> ArrayVec<u32, 4> {
        let mut limbs: ArrayVec<u32, 4> = [
            self.lo as u32,
            (self.lo >> 32) as u32,
            self.hi as u32,
            (self.hi >> 32) as u32,
        ]
        .into();
        while limbs.len() > 1 && limbs.last() == Some(&0) {
            limbs.pop();
        }
        limbs
    }

    fn from_limbs(limbs: &[u32]) -> U128 {
        let limb = |index: usize| limbs.get(index).copied().unwrap_or(0) as u64;
        U128 {
            hi: (limb(3) << 32) | limb(2),
            lo: (limb(1) << 32) | limb(0),
        }
    }
}

// Single limb divisor: one native 64 by 32 division per dividend limb.
fn short_division(dividend: &[u32], divisor: u64) -> (U128, u64) {
    let mut quotient = [0u32; 4];
    let mut remainder = 0u64;
    for (index, limb) in dividend.iter().enumerate().rev() {
        let current = (remainder << 32) | *limb as u64;
        quotient[index] = (current / divisor) as u32;
        remainder = current % divisor;
    }
    (U128::from_limbs(&quotient), remainder)
}

// Knuth, TAOCP vol. 2, 4.3.1 algorithm D, specialised to a two limb divisor.
fn long_division(dividend: &[u32], divisor: u64) -> (U128, u64) {
    const BASE: u64 = 1 << 32;

    // Normalize so the top bit of the divisor is set. This keeps each quotient digit estimate
    // within two of the true digit.
    let shift = divisor.leading_zeros();
    let normalized = divisor << shift;
    let divisor_hi = normalized >> 32;
    let divisor_lo = normalized & U32_MASK;

    // One extra limb to hold the bits shifted out of the top of the dividend.
    let mut un: ArrayVec<u32, 5> = ArrayVec::new();
    for (index, limb) in dividend.iter().enumerate() {
        let carried = if index == 0 {
            0
        } else {
            ((dividend[index - 1] as u64) << shift >> 32) as u32
        };
        un.push((((*limb as u64) << shift) as u32) | carried);
    }
    let top = dividend[dividend.len() - 1];
    un.push(((top as u64) << shift >> 32) as u32);

    let mut quotient = [0u32; 4];
    for j in (0..=dividend.len() - 2).rev() {
        let numerator = ((un[j + 2] as u64) << 32) | un[j + 1] as u64;
        let mut qhat = numerator / divisor_hi;
        let mut rhat = numerator % divisor_hi;
        while qhat >= BASE || qhat * divisor_lo > ((rhat << 32) | un[j] as u64) {
            qhat -= 1;
            rhat += divisor_hi;
            if rhat >= BASE {
                break;
            }
        }

        // Multiply and subtract qhat * divisor from the current window.
        let mut borrow: i64 = 0;
        for (offset, d) in [divisor_lo, divisor_hi].iter().enumerate() {
            let product = qhat * d;
            let t = un[j + offset] as i64 - borrow - (product & U32_MASK) as i64;
            un[j + offset] = t as u32;
            borrow = (product >> 32) as i64 - (t >> 32);
        }
        let t = un[j + 2] as i64 - borrow;
        un[j + 2] = t as u32;

        if t < 0 {
            // The estimate was one too large, add the divisor back.
            qhat -= 1;
            let mut carry = 0u64;
            for (offset, d) in [divisor_lo, divisor_hi].iter().enumerate() {
                let sum = un[j + offset] as u64 + d + carry;
                un[j + offset] = sum as u32;
                carry = sum >> 32;
            }
            un[j + 2] = un[j + 2].wrapping_add(carry as u32);
        }
        quotient[j] = qhat as u32;
    }

    let remainder = (((un[1] as u64) << 32) | un[0] as u64) >> shift;
    (U128::from_limbs(&quotient), remainder)
}

impl Add for U128 {
    type Output = U128;

    #[inline]
    fn add(self, other: U128) -> U128 {
        self.wrapping_add(other)
    }
}

impl Sub for U128 {
    type Output = U128;

    #[inline]
    fn sub(self, other: U128) -> U128 {
        self.wrapping_sub(other)
    }
}

impl Mul for U128 {
    type Output = U128;

    #[inline]
    fn mul(self, other: U128) -> U128 {
        self.wrapping_mul(other)
    }
}

impl Mul<u64> for U128 {
    type Output = U128;

    #[inline]
    fn mul(self, other: u64) -> U128 {
        self.wrapping_mul_u64(other)
    }
}

impl Shl<u32> for U128 {
    type Output = U128;

    #[inline]
    fn shl(self, shift: u32) -> U128 {
        U128::shl(self, shift)
    }
}

impl Shr<u32> for U128 {
    type Output = U128;

    #[inline]
    fn shr(self, shift: u32) -> U128 {
        U128::shr(self, shift)
    }
}

impl From<u64> for U128 {
    #[inline]
    fn from(value: u64) -> Self {
        U128::from_u64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn native(value: U128) -> u128 {
        ((value.hi as u128) << 64) | value.lo as u128
    }

    fn wide(value: u128) -> U128 {
        U128::new((value >> 64) as u64, value as u64)
    }

    #[test]
    fn it_carries_into_the_upper_half() {
        let sum = U128::new(0, u64::MAX) + U128::from_u64(1);
        assert_eq!(sum, U128::new(1, 0));
    }

    #[test]
    fn it_borrows_from_the_upper_half() {
        let difference = U128::new(1, 0) - U128::from_u64(1);
        assert_eq!(difference, U128::new(0, u64::MAX));
        assert_eq!(U128::ZERO - U128::from_u64(1), U128::new(u64::MAX, u64::MAX));
    }

    #[test]
    fn it_compares_upper_half_first() {
        assert!(U128::new(1, 0) > U128::new(0, u64::MAX));
        assert!(U128::new(2, 1) < U128::new(2, 3));
        assert_eq!(U128::new(5, 5).cmp(&U128::new(5, 5)), core::cmp::Ordering::Equal);
    }

    #[test]
    fn it_shifts_across_the_halves() {
        let value = U128::new(0x1234, 0x8000_0000_0000_0001);
        assert_eq!(value << 1, U128::new(0x2469, 2));
        assert_eq!(value >> 64, U128::from_u64(0x1234));
        assert_eq!(value << 64, U128::new(0x8000_0000_0000_0001, 0));
        assert_eq!(value >> 0, value);
        assert_eq!(U128::from_u64(1) << 127, U128::new(1 << 63, 0));
    }

    #[test]
    fn it_counts_leading_zeros() {
        assert_eq!(U128::ZERO.leading_zeros(), 128);
        assert_eq!(U128::from_u64(1).leading_zeros(), 127);
        assert_eq!(U128::new(1, 0).leading_zeros(), 63);
    }

    #[test]
    fn it_divides_by_a_two_limb_divisor() {
        let dividend = U128::new(0x8000_0000_0000_0000, 0x0000_0000_0000_0000);
        let divisor = 0x8000_0000_0000_0001u64;
        let (quotient, remainder) = dividend.div_rem_u64(divisor);
        let expected = native(dividend) / divisor as u128;
        assert_eq!(native(quotient), expected);
        assert_eq!(remainder as u128, native(dividend) % divisor as u128);
    }

    #[test]
    fn it_divides_by_small_divisors() {
        let dividend = U128::new(u64::MAX, u64::MAX);
        let (quotient, remainder) = dividend.div_rem_u64(10);
        assert_eq!(native(quotient), u128::MAX / 10);
        assert_eq!(remainder, 5);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn it_panics_when_dividing_by_zero() {
        let _ = U128::new(1, 1).div_rem_u64(0);
    }

    proptest! {
        #[test]
        fn it_matches_native_arithmetic(a in any::<u128>(), b in any::<u128>(), shift in 0u32..128) {
            prop_assert_eq!(native(wide(a) + wide(b)), a.wrapping_add(b));
            prop_assert_eq!(native(wide(a) - wide(b)), a.wrapping_sub(b));
            prop_assert_eq!(native(wide(a) * wide(b)), a.wrapping_mul(b));
            prop_assert_eq!(native(wide(a) * (b as u64)), a.wrapping_mul(b as u64 as u128));
            prop_assert_eq!(native(wide(a) << shift), a << shift);
            prop_assert_eq!(native(wide(a) >> shift), a >> shift);
            prop_assert_eq!(wide(a).cmp(&wide(b)), a.cmp(&b));
        }

        #[test]
        fn it_divides_like_native_division(a in any::<u128>(), divisor in 1u64..) {
            let (quotient, remainder) = wide(a).div_rem_u64(divisor);
            prop_assert_eq!(native(quotient), a / divisor as u128);
            prop_assert_eq!(remainder as u128, a % divisor as u128);
        }

        #[test]
        fn it_divides_by_divisors_with_a_high_limb(a in any::<u128>(), hi in 1u32.., lo in any::<u32>()) {
            let divisor = ((hi as u64) << 32) | lo as u64;
            let (quotient, remainder) = wide(a).div_rem_u64(divisor);
            prop_assert_eq!(native(quotient), a / divisor as u128);
            prop_assert_eq!(remainder as u128, a % divisor as u128);
        }
    }
}
