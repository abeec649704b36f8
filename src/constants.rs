// Sign mask for the flags field of the interchange decimal. A value of zero in this bit
// indicates a positive value, and a value of one indicates a negative value.
pub const SIGN_MASK: u32 = 0x8000_0000;

// Scale mask for the flags field. This byte in the flags field contains the power of 10 to
// divide the 96 bit magnitude by.
pub const SCALE_MASK: u32 = 0x00FF_0000;

// Number of bits scale is shifted by.
pub const SCALE_SHIFT: u32 = 16;

// The largest scale a 32 bit storage type can hold while still representing one whole unit.
pub const MAX_I32_SCALE: u32 = 9;
// The largest scale a 64 bit storage type can hold while still representing one whole unit.
pub const MAX_I64_SCALE: u32 = 18;

// Digit counts at or above this need more than 64 bits to hold twice the remainder.
pub const WIDE_ROUNDING_DIGITS: u32 = 19;

// Fast access for 10^n where n is 0-19
pub const POWERS_10: [u64; 20] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];
