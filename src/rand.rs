use crate::{FastDecimal32, FastDecimal64};
use rand::{
    distributions::{
        uniform::{SampleBorrow, SampleUniform, UniformInt, UniformSampler},
        Distribution, Standard,
    },
    Rng,
};

macro_rules! impl_rand {
    ($res:ident, $sampler:ident, $raw:ty) => {
        impl<const SCALE: u32> Distribution<$res<SCALE>> for Standard {
            fn sample<R>(&self, rng: &mut R) -> $res<SCALE>
            where
                R: Rng + ?Sized,
            {
                $res::from_raw(rng.gen())
            }
        }

        impl<const SCALE: u32> SampleUniform for $res<SCALE> {
            type Sampler = $sampler<SCALE>;
        }

        /// Samples values uniformly between two bounds. Every raw integer in the range is equally
        /// likely, so the result always carries the full scale of the type.
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct $sampler<const SCALE: u32> {
            raw_sampler: UniformInt<$raw>,
        }

        impl<const SCALE: u32> UniformSampler for $sampler<SCALE> {
            type X = $res<SCALE>;

            #[inline]
            fn new<B1, B2>(low: B1, high: B2) -> Self
            where
                B1: SampleBorrow<Self::X> + Sized,
                B2: SampleBorrow<Self::X> + Sized,
            {
                $sampler {
                    raw_sampler: UniformInt::<$raw>::new(low.borrow().raw(), high.borrow().raw()),
                }
            }

            #[inline]
            fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
            where
                B1: SampleBorrow<Self::X> + Sized,
                B2: SampleBorrow<Self::X> + Sized,
            {
                $sampler {
                    raw_sampler: UniformInt::<$raw>::new_inclusive(low.borrow().raw(), high.borrow().raw()),
                }
            }

            #[inline]
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
                $res::from_raw(self.raw_sampler.sample(rng))
            }
        }
    };
}

impl_rand!(FastDecimal32, FastDecimal32Sampler, i32);
impl_rand!(FastDecimal64, FastDecimal64Sampler, i64);
