#![no_main]

use fast_decimal::{Decimal, FastDecimal32, FastDecimal64};

#[derive(Debug, arbitrary::Arbitrary)]
struct Data<'a> {
    generic_str: &'a str,
    decimal: Decimal,
    int: i64,
}

libfuzzer_sys::fuzz_target!(|data: Data<'_>| {
    let _ = serde_json::from_str::<FastDecimal64<4>>(data.generic_str);
    let _ = data.generic_str.parse::<FastDecimal32<2>>();

    let wrapped = FastDecimal64::<8>::wrapping_from_decimal(data.decimal);
    if let Ok(value) = FastDecimal64::<8>::try_from(data.decimal) {
        assert_eq!(value, wrapped);
    }
    let wrapped = FastDecimal32::<3>::wrapping_from_decimal(data.decimal);
    if let Ok(value) = FastDecimal32::<3>::try_from(&data.decimal) {
        assert_eq!(value, wrapped);
    }

    if let Some(value) = FastDecimal64::<4>::checked_from_int(data.int) {
        assert_eq!(value, FastDecimal64::wrapping_from_int(data.int));
        assert_eq!(value.to_decimal(), Decimal::from(data.int));
    }
});
