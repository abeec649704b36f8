use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fast_decimal::{Decimal, FastDecimal32, FastDecimal64, RoundingStrategy};
use std::str::FromStr;

type Fd4 = FastDecimal64<4>;

const BASE: &str = "2.0100";
const OPERANDS: [&str; 5] = ["1", "100", "0.0100", "-0.5000", "3.1416"];

macro_rules! bench_compare_op {
    ($name:ident, $op:tt) => {
        fn $name(c: &mut Criterion) {
            let mut group = c.benchmark_group(stringify!($name));
            let base_fixed = Fd4::from_str(BASE).unwrap();
            let base_decimal = Decimal::from_str(BASE).unwrap();
            for operand in OPERANDS {
                let fixed = Fd4::from_str(operand).unwrap();
                let decimal = Decimal::from_str(operand).unwrap();
                group.bench_function(format!("FastDecimal64/{}", operand), |b| {
                    b.iter(|| black_box(base_fixed) $op black_box(fixed))
                });
                group.bench_function(format!("Decimal/{}", operand), |b| {
                    b.iter(|| black_box(base_decimal) $op black_box(decimal))
                });
            }
            group.finish();
        }
    };
}

bench_compare_op!(add, +);
bench_compare_op!(sub, -);
bench_compare_op!(mul, *);
bench_compare_op!(div, /);

fn sum_10k(c: &mut Criterion) {
    let fixed: Vec<Fd4> = (0..10_000).map(|i| Fd4::checked_from_int(i).unwrap()).collect();
    let decimal: Vec<Decimal> = (0..10_000).map(Decimal::from).collect();
    let mut group = c.benchmark_group("sum_10k");
    group.bench_function("FastDecimal64", |b| b.iter(|| black_box(&fixed).iter().sum::<Fd4>()));
    group.bench_function("Decimal", |b| b.iter(|| black_box(&decimal).iter().sum::<Decimal>()));
    group.finish();
}

fn wide_mul(c: &mut Criterion) {
    // Products that spill past 64 bits go through the magic number division.
    let left = FastDecimal64::<9>::from_raw(123_456_789_012_345);
    let right = FastDecimal64::<9>::from_raw(-98_765_432_109);
    let mut group = c.benchmark_group("wide_mul");
    for strategy in [RoundingStrategy::MidpointNearestEven, RoundingStrategy::ToPositiveInfinity] {
        group.bench_function(format!("{:?}", strategy), |b| {
            b.iter(|| black_box(left).wrapping_mul_with_strategy(black_box(right), strategy))
        });
    }
    group.finish();
}

fn rescale(c: &mut Criterion) {
    let wide = FastDecimal64::<18>::from_raw(4_324_435_750_012_345_678);
    let narrow = FastDecimal32::<9>::from_raw(2_143_575_001);
    c.bench_function("rescale/FastDecimal64", |b| b.iter(|| black_box(wide).rescale::<4>()));
    c.bench_function("rescale/FastDecimal32", |b| b.iter(|| black_box(narrow).rescale::<2>()));
}

fn convert(c: &mut Criterion) {
    let value = Fd4::from_raw(-123_456_7890);
    let decimal = Decimal::from_str("-12345.678912345").unwrap();
    c.bench_function("to_decimal", |b| b.iter(|| black_box(value).to_decimal()));
    c.bench_function("from_decimal", |b| b.iter(|| Fd4::try_from(black_box(decimal))));
}

criterion_group!(benches, add, sub, mul, div, sum_10k, wide_mul, rescale, convert);
criterion_main!(benches);
