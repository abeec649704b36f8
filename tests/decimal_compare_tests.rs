// Checks the fixed point arithmetic against the same operations carried out on `Decimal`, which
// holds every intermediate exactly and rounds once at the end.

use fast_decimal::{Decimal, FastDecimal32, FastDecimal64, RoundingStrategy};
use rand::{rngs::StdRng, Rng, SeedableRng};

const ITERATIONS: usize = 10_000;

const STRATEGIES: [RoundingStrategy; 5] = [
    RoundingStrategy::MidpointNearestEven,
    RoundingStrategy::MidpointAwayFromZero,
    RoundingStrategy::ToZero,
    RoundingStrategy::ToNegativeInfinity,
    RoundingStrategy::ToPositiveInfinity,
];

fn decimal_strategy(strategy: RoundingStrategy) -> rust_decimal::RoundingStrategy {
    match strategy {
        RoundingStrategy::MidpointNearestEven => rust_decimal::RoundingStrategy::MidpointNearestEven,
        RoundingStrategy::MidpointAwayFromZero => rust_decimal::RoundingStrategy::MidpointAwayFromZero,
        RoundingStrategy::ToZero => rust_decimal::RoundingStrategy::ToZero,
        RoundingStrategy::ToNegativeInfinity => rust_decimal::RoundingStrategy::ToNegativeInfinity,
        RoundingStrategy::ToPositiveInfinity => rust_decimal::RoundingStrategy::ToPositiveInfinity,
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_dec1)
}

#[test]
fn it_rescales_like_decimal() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let raw: i64 = rng.gen();
        let value = FastDecimal64::<4>::from_raw(raw);
        for strategy in STRATEGIES {
            let expected = Decimal::new(raw, 4).round_dp_with_strategy(2, decimal_strategy(strategy));
            let actual = value.rescale_with_strategy::<2>(strategy).unwrap();
            assert_eq!(actual.to_decimal(), expected, "{} {:?}", value, strategy);
        }
    }
}

#[test]
fn it_rescales_32_bit_values_like_decimal() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let raw: i32 = rng.gen();
        let value = FastDecimal32::<9>::from_raw(raw);
        for strategy in STRATEGIES {
            let expected = Decimal::new(raw.into(), 9).round_dp_with_strategy(3, decimal_strategy(strategy));
            let actual = value.rescale_with_strategy::<3>(strategy).unwrap();
            assert_eq!(actual.to_decimal(), expected, "{} {:?}", value, strategy);
        }
    }
}

#[test]
fn it_multiplies_like_decimal() {
    let mut rng = rng();
    let bound = i64::MAX / 100_000_000;
    for _ in 0..ITERATIONS {
        let left = FastDecimal64::<4>::from_raw(rng.gen_range(-bound..=bound));
        let right = FastDecimal64::<4>::from_raw(rng.gen_range(-bound..=bound));
        let exact = left.to_decimal() * right.to_decimal();
        for strategy in STRATEGIES {
            let expected = exact.round_dp_with_strategy(4, decimal_strategy(strategy));
            let actual = left.checked_mul_with_strategy(right, strategy).unwrap();
            assert_eq!(actual.to_decimal(), expected, "{} * {} {:?}", left, right, strategy);
        }
    }
}

#[test]
fn it_multiplies_with_wide_products_like_decimal() {
    let mut rng = rng();
    let bound = 10_000_000_000_000i64;
    for _ in 0..ITERATIONS {
        let left = FastDecimal64::<9>::from_raw(rng.gen_range(-bound..=bound));
        let right = FastDecimal64::<9>::from_raw(rng.gen_range(-bound..=bound));
        let exact = left.to_decimal() * right.to_decimal();
        for strategy in STRATEGIES {
            let expected = exact.round_dp_with_strategy(9, decimal_strategy(strategy));
            let actual = left.checked_mul_with_strategy(right, strategy).unwrap();
            assert_eq!(actual.to_decimal(), expected, "{} * {} {:?}", left, right, strategy);
        }
    }
}

#[test]
fn it_divides_like_decimal() {
    let mut rng = rng();
    let bound = i64::MAX / 10_000;
    for _ in 0..ITERATIONS {
        let dividend = FastDecimal64::<4>::from_raw(rng.gen_range(-bound..=bound));
        let divisor = loop {
            let raw = rng.gen_range(-9_999..10_000);
            if raw != 0 {
                break FastDecimal64::<4>::from_raw(raw);
            }
        };
        let expected = (dividend.to_decimal() / divisor.to_decimal())
            .round_dp_with_strategy(4, rust_decimal::RoundingStrategy::MidpointNearestEven);
        let actual = dividend.checked_div(divisor).unwrap();
        assert_eq!(actual.to_decimal(), expected, "{} / {}", dividend, divisor);
    }
}

#[test]
fn it_converts_from_decimal_like_rounding_decimal() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let raw: i64 = rng.gen();
        let decimal = Decimal::new(raw, 10);
        let expected = decimal.round_dp_with_strategy(4, rust_decimal::RoundingStrategy::MidpointNearestEven);
        let actual = FastDecimal64::<4>::try_from(decimal).unwrap();
        assert_eq!(actual.to_decimal(), expected, "{}", decimal);
    }
}
