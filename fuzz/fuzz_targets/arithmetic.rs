#![no_main]

use fast_decimal::{FastDecimal32, FastDecimal64, RoundingStrategy};

#[derive(Debug, arbitrary::Arbitrary)]
struct Data {
    a: FastDecimal64<6>,
    b: FastDecimal64<6>,
    c: FastDecimal32<4>,
    d: FastDecimal32<4>,
    strategy: u8,
}

// A checked result, whenever there is one, must agree with the wrapping result.
macro_rules! agree {
    ($checked:expr, $wrapping:expr) => {
        if let Some(result) = $checked {
            assert_eq!(result, $wrapping);
        }
    };
}

libfuzzer_sys::fuzz_target!(|data: Data| {
    let strategy = RoundingStrategy::try_from(data.strategy % 5).unwrap_or_default();
    let (a, b, c, d) = (data.a, data.b, data.c, data.d);

    agree!(a.checked_add(b), a.wrapping_add(b));
    agree!(a.checked_sub(b), a.wrapping_sub(b));
    agree!(a.checked_mul_with_strategy(b, strategy), a.wrapping_mul_with_strategy(b, strategy));
    agree!(c.checked_add(d), c.wrapping_add(d));
    agree!(c.checked_mul_with_strategy(d, strategy), c.wrapping_mul_with_strategy(d, strategy));
    if !b.is_zero() {
        agree!(a.checked_div_with_strategy(b, strategy), a.wrapping_div_with_strategy(b, strategy));
        agree!(a.checked_rem(b), a.wrapping_rem(b));
    }
    if !d.is_zero() {
        agree!(c.checked_div_with_strategy(d, strategy), c.wrapping_div_with_strategy(d, strategy));
    }

    if let Ok(rescaled) = a.rescale_with_strategy::<2>(strategy) {
        assert!((rescaled.to_decimal() - a.to_decimal()).abs() < fast_decimal::Decimal::new(1, 2));
    }
    assert_eq!(FastDecimal64::<6>::try_from(a.to_decimal()), Ok(a));
    assert_eq!(FastDecimal64::<4>::from(c).wrapping_narrow(), c);
});
