use crate::constants::{POWERS_10, SCALE_MASK, SCALE_SHIFT, SIGN_MASK};
use crate::ops::{magic, wide::U128};
use crate::RoundingStrategy;
use rust_decimal::Decimal;

/// The sign, scale and 96 bit magnitude of a [`Decimal`], read straight from its bit layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct UnpackedDecimal {
    pub negative: bool,
    pub scale: u32,
    // Upper 32 bits of the magnitude.
    pub hi: u32,
    // Lower 64 bits of the magnitude.
    pub lo: u64,
}

impl UnpackedDecimal {
    pub(crate) fn from_decimal(value: &Decimal) -> Self {
        // Serialized layout: flags, lo, mid, hi as little endian 32 bit words.
        let bytes = value.serialize();
        let word = |index: usize| {
            u32::from_le_bytes([bytes[index], bytes[index + 1], bytes[index + 2], bytes[index + 3]])
        };
        let flags = word(0);
        UnpackedDecimal {
            negative: flags & SIGN_MASK != 0,
            scale: (flags & SCALE_MASK) >> SCALE_SHIFT,
            hi: word(12),
            lo: (word(4) as u64) | ((word(8) as u64) << 32),
        }
    }

    /// Packs a signed scaled integer back into a [`Decimal`]. The scale is stored as is, so the
    /// result keeps every trailing zero of the fixed point value.
    pub(crate) const fn pack(raw: i64, scale: u32) -> Decimal {
        let magnitude = raw.unsigned_abs();
        Decimal::from_parts(magnitude as u32, (magnitude >> 32) as u32, 0, raw < 0, scale)
    }

    #[inline]
    pub(crate) const fn magnitude(&self) -> U128 {
        U128::new(self.hi as u64, self.lo)
    }

    /// The magnitude brought to `scale` digits, or `None` when scaling up would not fit in
    /// 128 bits of intermediate. Dropped digits always round half to even; the caller
    /// range checks the result afterwards.
    pub(crate) fn checked_magnitude(&self, scale: u32) -> Option<U128> {
        if self.scale == scale {
            Some(self.magnitude())
        } else if self.scale < scale {
            if self.hi != 0 {
                return None;
            }
            Some(U128::widening_mul(self.lo, POWERS_10[(scale - self.scale) as usize]))
        } else {
            Some(self.rounded_down(scale))
        }
    }

    /// The magnitude brought to `scale` digits, keeping only the low 64 bits whenever the
    /// conversion does not narrow precision.
    pub(crate) fn wrapping_magnitude(&self, scale: u32) -> U128 {
        if self.scale == scale {
            U128::from_u64(self.lo)
        } else if self.scale < scale {
            U128::from_u64(self.lo.wrapping_mul(POWERS_10[(scale - self.scale) as usize]))
        } else {
            self.rounded_down(scale)
        }
    }

    fn rounded_down(&self, scale: u32) -> U128 {
        magic::div_pow10_rounded(
            self.magnitude(),
            self.scale - scale,
            RoundingStrategy::MidpointNearestEven,
            self.negative,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    fn unpack(text: &str) -> UnpackedDecimal {
        UnpackedDecimal::from_decimal(&Decimal::from_str(text).unwrap())
    }

    #[test]
    fn it_reads_sign_scale_and_magnitude() {
        let unpacked = unpack("-1234.5678");
        assert_eq!(
            unpacked,
            UnpackedDecimal {
                negative: true,
                scale: 4,
                hi: 0,
                lo: 12_345_678
            }
        );
    }

    #[test]
    fn it_reads_the_full_96_bit_magnitude() {
        let unpacked = unpack("79228162514264337593543950335");
        assert_eq!(unpacked.hi, u32::MAX);
        assert_eq!(unpacked.lo, u64::MAX);
        assert_eq!(unpacked.scale, 0);
        assert!(!unpacked.negative);
    }

    #[test]
    fn it_packs_scaled_integers() {
        assert_eq!(UnpackedDecimal::pack(-23_5000, 4).to_string(), "-23.5000");
        assert_eq!(UnpackedDecimal::pack(i64::MIN, 18).to_string(), "-9.223372036854775808");
        assert_eq!(UnpackedDecimal::pack(0, 2).to_string(), "0.00");
    }

    #[test]
    fn it_keeps_the_magnitude_when_scales_match() {
        assert_eq!(unpack("1.2345").checked_magnitude(4), Some(U128::from_u64(12345)));
        assert_eq!(unpack("1.2345").wrapping_magnitude(4), U128::from_u64(12345));
    }

    #[test]
    fn it_scales_up_by_powers_of_ten() {
        assert_eq!(unpack("1.23").checked_magnitude(6), Some(U128::from_u64(1_230_000)));
        // Too wide to scale up without a 96 bit by 64 bit product.
        assert_eq!(unpack("79228162514264337593543950335").checked_magnitude(2), None);
        assert_eq!(
            unpack("18446744073709551615").wrapping_magnitude(1),
            U128::from_u64(u64::MAX.wrapping_mul(10))
        );
    }

    #[test]
    fn it_scales_down_rounding_half_to_even() {
        assert_eq!(unpack("2.345").checked_magnitude(2), Some(U128::from_u64(234)));
        assert_eq!(unpack("2.355").checked_magnitude(2), Some(U128::from_u64(236)));
        assert_eq!(unpack("-2.3451").wrapping_magnitude(2), U128::from_u64(235));
        // 28 dropped digits go through the wide rounding path.
        assert_eq!(
            unpack("0.5000000000000000000000000000").checked_magnitude(0),
            Some(U128::ZERO)
        );
        assert_eq!(
            unpack("1.5000000000000000000000000000").checked_magnitude(0),
            Some(U128::from_u64(2))
        );
    }
}
