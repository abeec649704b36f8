use crate::{FastDecimal32, FastDecimal64};

use proptest::arbitrary::{Arbitrary, StrategyFor};
use proptest::prelude::*;
use proptest::strategy::Map;

macro_rules! impl_arbitrary {
    ($res:ident, $raw:ty) => {
        impl<const SCALE: u32> Arbitrary for $res<SCALE> {
            type Parameters = ();
            type Strategy = Map<StrategyFor<$raw>, fn($raw) -> Self>;

            fn arbitrary_with(_parameters: Self::Parameters) -> Self::Strategy {
                // Every raw integer is a valid value at every scale.
                any::<$raw>().prop_map(Self::from_raw as fn($raw) -> Self)
            }
        }
    };
}

impl_arbitrary!(FastDecimal32, i32);
impl_arbitrary!(FastDecimal64, i64);
