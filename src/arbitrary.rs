use crate::{FastDecimal32, FastDecimal64};
use arbitrary::{Arbitrary, Result as ArbitraryResult, Unstructured};

macro_rules! impl_arbitrary {
    ($res:ident, $raw:ty) => {
        impl<'a, const SCALE: u32> Arbitrary<'a> for $res<SCALE> {
            fn arbitrary(u: &mut Unstructured<'a>) -> ArbitraryResult<Self> {
                <$raw>::arbitrary(u).map(Self::from_raw)
            }

            #[inline]
            fn size_hint(depth: usize) -> (usize, Option<usize>) {
                <$raw as Arbitrary<'a>>::size_hint(depth)
            }
        }
    };
}

impl_arbitrary!(FastDecimal32, i32);
impl_arbitrary!(FastDecimal64, i64);
