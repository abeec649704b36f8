use crate::constants::POWERS_10;
use crate::ops::wide::U128;
use crate::RoundingStrategy;

/// The largest power of ten the table can divide by.
pub(crate) const MAX_DIGITS: u32 = 38;

// Reciprocal constants for dividing by 10^d, one entry per digit count.
//
// The quotient of any 128 bit value n is `((n >> pre_shift) * magic) >> (128 + post_shift)`
// where the multiplication is the full 256 bit product. A non zero `pre_shift` strips trailing
// zero bits of the divisor (10^d = 5^d * 2^d) so the magic factor stays within 128 bits.
struct MagicDivisor {
    divisor: U128,
    magic_hi: u64,
    magic_lo: u64,
    pre_shift: u32,
    post_shift: u32,
}

impl MagicDivisor {
    const fn new(divisor_hi: u64, divisor_lo: u64, magic_hi: u64, magic_lo: u64, pre_shift: u32, post_shift: u32) -> Self {
        MagicDivisor {
            divisor: U128::new(divisor_hi, divisor_lo),
            magic_hi,
            magic_lo,
            pre_shift,
            post_shift,
        }
    }
}

#[rustfmt::skip]
static MAGIC_DIVISORS: [MagicDivisor; MAX_DIGITS as usize + 1] = [
    // Division by one is handled before the table is consulted.
    MagicDivisor::new(0x0, 0x1, 0x0, 0x0, 0, 0),
    MagicDivisor::new(0x0, 0xa, 0xcccccccccccccccc, 0xcccccccccccccccd, 0, 3),
    MagicDivisor::new(0x0, 0x64, 0x28f5c28f5c28f5c2, 0x8f5c28f5c28f5c29, 0, 4),
    MagicDivisor::new(0x0, 0x3e8, 0x20c49ba5e353f7ce, 0xd916872b020c49bb, 3, 4),
    MagicDivisor::new(0x0, 0x2710, 0xd1b71758e219652b, 0xd3c36113404ea4a9, 0, 13),
    MagicDivisor::new(0x0, 0x186a0, 0x29f16b11c6d1e108, 0xc3f3e0370cdc8755, 0, 14),
    MagicDivisor::new(0x0, 0xf4240, 0x8637bd05af6c69b, 0x5a63f9a49c2c1b11, 0, 15),
    MagicDivisor::new(0x0, 0x989680, 0xd6bf94d5e57a42bc, 0x3d32907604691b4d, 0, 23),
    MagicDivisor::new(0x0, 0x5f5e100, 0x15798ee2308c39d, 0xf9fb841a566d74f9, 8, 11),
    MagicDivisor::new(0x0, 0x3b9aca00, 0x89705f4136b4a597, 0x31680a88f8953031, 0, 29),
    MagicDivisor::new(0x0, 0x2540be400, 0x36f9bfb3af7b756f, 0xad5cd10396a21347, 0, 31),
    MagicDivisor::new(0x0, 0x174876e800, 0xafebff0bcb24aafe, 0xf78f69a51539d749, 0, 36),
    MagicDivisor::new(0x0, 0xe8d4a51000, 0x232f33025bd42232, 0xfe4fe1edd10b9175, 0, 37),
    MagicDivisor::new(0x0, 0x9184e72a000, 0x709709a125da0709, 0x9432d2f9035837dd, 0, 42),
    MagicDivisor::new(0x0, 0x5af3107a4000, 0xb424dc35095cd80f, 0x538484c19ef38c95, 0, 46),
    MagicDivisor::new(0x0, 0x38d7ea4c68000, 0x24075f3dceac2, 0xb3643e74dc052fd9, 15, 20),
    MagicDivisor::new(0x0, 0x2386f26fc10000, 0x39a5652fb1137856, 0xd30baf9a1e626a6d, 0, 51),
    MagicDivisor::new(0x0, 0x16345785d8a0000, 0xb877aa3236a4b449, 0x9befeb9fad487c3, 0, 56),
    MagicDivisor::new(0x0, 0xde0b6b3a7640000, 0x24e4bba3a487, 0x5741cebfcc8b9891, 18, 23),
    MagicDivisor::new(0x0, 0x8ac7230489e80000, 0x760f253edb4ab0d2, 0x9598f4f1e8361973, 0, 62),
    MagicDivisor::new(0x5, 0x6bc75e2d63100000, 0x2f394219248, 0x446baa23d2ec729b, 20, 24),
    MagicDivisor::new(0x36, 0x35c9adc5dea00000, 0x971da05074d, 0xa7beed3f6fc16ebd, 21, 28),
    MagicDivisor::new(0x21e, 0x19e0c9bab2400000, 0xf1c90080baf72cb1, 0x5324c68b12dd6339, 0, 73),
    MagicDivisor::new(0x152d, 0x2c7e14af6800000, 0x305b66802564a289, 0xdd6dc14f03c5e0a5, 0, 74),
    MagicDivisor::new(0xd3c2, 0x1bcecceda1000000, 0x9abe14cd44753b52, 0xc4926a9672793543, 0, 79),
    MagicDivisor::new(0x84595, 0x161401484a000000, 0xf79687aed3eec551, 0x3a83ddbd83f52205, 0, 83),
    MagicDivisor::new(0x52b7d2, 0xdcc80cd2e4000000, 0x63090312bb2c4eed, 0x4a9b257f019540cf, 0, 85),
    MagicDivisor::new(0x33b2e3c, 0x9fd0803ce8000000, 0x4f3a68dbc8f03f24, 0x3baf513267aa9a3f, 0, 88),
    MagicDivisor::new(0x204fce5e, 0x3e25026110000000, 0xfd87b5f28300ca0d, 0x8bca9d6e188853fd, 0, 93),
    MagicDivisor::new(0x1431e0fae, 0x6d7217caa0000000, 0xcad2f7f5359a3b3e, 0x96ee45813a04331, 0, 96),
    MagicDivisor::new(0xc9f2c9cd0, 0x4674edea40000000, 0x289097fdd, 0x7853f0c684960de7, 30, 39),
    MagicDivisor::new(0x7e37be2022, 0xc0914b2680000000, 0x2073accb1, 0x2d0ff3d203ab3e53, 31, 41),
    MagicDivisor::new(0x4ee2d6d415b, 0x85acef8100000000, 0x67d88f56, 0xa29cca5d33ef0c77, 32, 41),
    MagicDivisor::new(0x314dc6448d93, 0x38c15b0a00000000, 0xa6274bbdd0fadd61, 0xecb1ad8aeacdd58f, 0, 109),
    MagicDivisor::new(0x1ed09bead87c0, 0x378d8e6400000000, 0x84ec3c97da624ab4, 0xbd5af13bef0b113f, 0, 112),
    MagicDivisor::new(0x13426172c74d82, 0x2b878fe800000000, 0xd4ad2dbfc3d07787, 0x955e4ec64b44e865, 0, 116),
    MagicDivisor::new(0xc097ce7bc90715, 0xb34b9f1000000000, 0x5512124cb4b9c969, 0x6ef285e8eae85cf5, 0, 118),
    MagicDivisor::new(0x785ee10d5da46d9, 0xf436a000000000, 0x881cea14545c7575, 0x7e50d64177da2e55, 0, 122),
    MagicDivisor::new(0x4b3b4ca85a86c47a, 0x98a224000000000, 0x6ce3ee76a9e3912a, 0xcb73de9ac6482511, 0, 125),
];

/// Returns `10^digits` as a wide integer.
#[inline]
pub(crate) fn pow10(digits: u32) -> U128 {
    MAGIC_DIVISORS[digits as usize].divisor
}

/// Divides `value` by `10^digits`, returning the exact quotient and remainder.
///
/// `digits` must be at most [`MAX_DIGITS`].
pub(crate) fn div_rem_pow10(value: U128, digits: u32) -> (U128, U128) {
    if digits == 0 {
        return (value, U128::ZERO);
    }
    let entry = &MAGIC_DIVISORS[digits as usize];
    let shifted = value >> entry.pre_shift;

    // The four partial products of the 256 bit product. Only the upper 128 bits are needed,
    // so the lowest column contributes nothing but its carry.
    let p0 = U128::widening_mul(shifted.lo, entry.magic_lo);
    let p1 = U128::widening_mul(shifted.lo, entry.magic_hi);
    let p2 = U128::widening_mul(shifted.hi, entry.magic_lo);
    let p3 = U128::widening_mul(shifted.hi, entry.magic_hi);

    let middle = U128::from_u64(p0.hi) + U128::from_u64(p1.lo) + U128::from_u64(p2.lo);
    let upper = p3 + U128::from_u64(p1.hi) + U128::from_u64(p2.hi) + U128::from_u64(middle.hi);

    let quotient = upper >> entry.post_shift;
    let remainder = value - quotient * entry.divisor;
    (quotient, remainder)
}

/// Divides `value` by `10^digits` and rounds the quotient with `strategy`.
///
/// `negative` is the sign of the exact result, needed by the directed strategies. Values that
/// fit 64 bits are divided natively; anything wider goes through the reciprocal table.
pub(crate) fn div_pow10_rounded(value: U128, digits: u32, strategy: RoundingStrategy, negative: bool) -> U128 {
    if digits == 0 {
        return value;
    }
    let (quotient, remainder) = if value.hi == 0 && (digits as usize) < POWERS_10.len() {
        let divisor = POWERS_10[digits as usize];
        (U128::from_u64(value.lo / divisor), U128::from_u64(value.lo % divisor))
    } else {
        div_rem_pow10(value, digits)
    };
    if strategy.round_up_pow10(quotient.lo, remainder, digits, negative) {
        quotient + U128::from_u64(1)
    } else {
        quotient
    }
}
