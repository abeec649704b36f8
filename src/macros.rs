// Trait plumbing shared by the fixed point types. Each type provides the inherent checked and
// wrapping methods; these macros wire them into the operator, num-traits, formatting and
// conversion traits.

macro_rules! forward_val_val_binop {
    (impl $imp:ident for $res:ident, $method:ident) => {
        impl<const SCALE: u32> $imp<$res<SCALE>> for $res<SCALE> {
            type Output = $res<SCALE>;

            #[inline]
            fn $method(self, other: $res<SCALE>) -> $res<SCALE> {
                (&self).$method(&other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident for $res:ident, $method:ident) => {
        impl<'a, const SCALE: u32> $imp<$res<SCALE>> for &'a $res<SCALE> {
            type Output = $res<SCALE>;

            #[inline]
            fn $method(self, other: $res<SCALE>) -> $res<SCALE> {
                self.$method(&other)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident for $res:ident, $method:ident) => {
        impl<'a, const SCALE: u32> $imp<&'a $res<SCALE>> for $res<SCALE> {
            type Output = $res<SCALE>;

            #[inline]
            fn $method(self, other: &$res<SCALE>) -> $res<SCALE> {
                (&self).$method(other)
            }
        }
    };
}

macro_rules! forward_all_binop {
    (impl $imp:ident for $res:ident, $method:ident) => {
        forward_val_val_binop!(impl $imp for $res, $method);
        forward_ref_val_binop!(impl $imp for $res, $method);
        forward_val_ref_binop!(impl $imp for $res, $method);
    };
}

// The borrowed/borrowed implementation every other operand combination forwards to. Overflow
// panics the same way the primitive integer operators do in debug builds.
macro_rules! impl_checked_binop {
    (impl $imp:ident for $res:ident, $method:ident, $checked:ident, $message:expr) => {
        forward_all_binop!(impl $imp for $res, $method);

        impl<'a, 'b, const SCALE: u32> $imp<&'b $res<SCALE>> for &'a $res<SCALE> {
            type Output = $res<SCALE>;

            #[inline(always)]
            fn $method(self, other: &$res<SCALE>) -> $res<SCALE> {
                match $res::$checked(*self, *other) {
                    Some(result) => result,
                    None => panic!($message),
                }
            }
        }
    };
}

macro_rules! impl_assign_op {
    (impl $imp:ident for $res:ident, $method:ident, $op:tt) => {
        impl<const SCALE: u32> $imp<$res<SCALE>> for $res<SCALE> {
            #[inline]
            fn $method(&mut self, other: $res<SCALE>) {
                *self = *self $op other;
            }
        }

        impl<'a, const SCALE: u32> $imp<&'a $res<SCALE>> for $res<SCALE> {
            #[inline]
            fn $method(&mut self, other: &'a $res<SCALE>) {
                *self = *self $op *other;
            }
        }
    };
}

macro_rules! impl_num_traits {
    ($res:ident) => {
        impl<const SCALE: u32> num_traits::Zero for $res<SCALE> {
            #[inline]
            fn zero() -> Self {
                Self::ZERO
            }

            #[inline]
            fn is_zero(&self) -> bool {
                $res::is_zero(*self)
            }
        }

        impl<const SCALE: u32> num_traits::One for $res<SCALE> {
            #[inline]
            fn one() -> Self {
                Self::ONE
            }
        }

        impl<const SCALE: u32> num_traits::Bounded for $res<SCALE> {
            #[inline]
            fn min_value() -> Self {
                Self::MIN
            }

            #[inline]
            fn max_value() -> Self {
                Self::MAX
            }
        }

        impl<const SCALE: u32> num_traits::CheckedAdd for $res<SCALE> {
            #[inline]
            fn checked_add(&self, v: &Self) -> Option<Self> {
                $res::checked_add(*self, *v)
            }
        }

        impl<const SCALE: u32> num_traits::CheckedSub for $res<SCALE> {
            #[inline]
            fn checked_sub(&self, v: &Self) -> Option<Self> {
                $res::checked_sub(*self, *v)
            }
        }

        impl<const SCALE: u32> num_traits::CheckedMul for $res<SCALE> {
            #[inline]
            fn checked_mul(&self, v: &Self) -> Option<Self> {
                $res::checked_mul(*self, *v)
            }
        }

        impl<const SCALE: u32> num_traits::CheckedNeg for $res<SCALE> {
            #[inline]
            fn checked_neg(&self) -> Option<Self> {
                $res::checked_neg(*self)
            }
        }

        impl<const SCALE: u32> num_traits::WrappingAdd for $res<SCALE> {
            #[inline]
            fn wrapping_add(&self, v: &Self) -> Self {
                $res::wrapping_add(*self, *v)
            }
        }

        impl<const SCALE: u32> num_traits::WrappingSub for $res<SCALE> {
            #[inline]
            fn wrapping_sub(&self, v: &Self) -> Self {
                $res::wrapping_sub(*self, *v)
            }
        }

        impl<const SCALE: u32> num_traits::WrappingMul for $res<SCALE> {
            #[inline]
            fn wrapping_mul(&self, v: &Self) -> Self {
                $res::wrapping_mul(*self, *v)
            }
        }

        impl<const SCALE: u32> num_traits::WrappingNeg for $res<SCALE> {
            #[inline]
            fn wrapping_neg(&self) -> Self {
                $res::wrapping_neg(*self)
            }
        }
    };
}

macro_rules! impl_fixed_decimal {
    ($res:ident) => {
        impl_checked_binop!(impl Add for $res, add, checked_add, "attempt to add with overflow");
        impl_checked_binop!(impl Sub for $res, sub, checked_sub, "attempt to subtract with overflow");
        impl_checked_binop!(impl Mul for $res, mul, checked_mul, "attempt to multiply with overflow");
        impl_checked_binop!(impl Div for $res, div, checked_div, "attempt to divide with overflow");
        impl_checked_binop!(impl Rem for $res, rem, checked_rem, "attempt to calculate the remainder with overflow");

        impl_assign_op!(impl AddAssign for $res, add_assign, +);
        impl_assign_op!(impl SubAssign for $res, sub_assign, -);
        impl_assign_op!(impl MulAssign for $res, mul_assign, *);
        impl_assign_op!(impl DivAssign for $res, div_assign, /);
        impl_assign_op!(impl RemAssign for $res, rem_assign, %);

        impl_num_traits!($res);

        impl<const SCALE: u32> Neg for $res<SCALE> {
            type Output = $res<SCALE>;

            fn neg(self) -> $res<SCALE> {
                -&self
            }
        }

        impl<'a, const SCALE: u32> Neg for &'a $res<SCALE> {
            type Output = $res<SCALE>;

            fn neg(self) -> $res<SCALE> {
                match $res::checked_neg(*self) {
                    Some(result) => result,
                    None => panic!("attempt to negate with overflow"),
                }
            }
        }

        impl<const SCALE: u32> Sum for $res<SCALE> {
            fn sum<I: Iterator<Item = $res<SCALE>>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |sum, value| sum + value)
            }
        }

        impl<'a, const SCALE: u32> Sum<&'a $res<SCALE>> for $res<SCALE> {
            fn sum<I: Iterator<Item = &'a $res<SCALE>>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |sum, value| sum + value)
            }
        }

        impl<const SCALE: u32> Product for $res<SCALE> {
            fn product<I: Iterator<Item = $res<SCALE>>>(iter: I) -> Self {
                iter.fold(Self::ONE, |product, value| product * value)
            }
        }

        impl<'a, const SCALE: u32> Product<&'a $res<SCALE>> for $res<SCALE> {
            fn product<I: Iterator<Item = &'a $res<SCALE>>>(iter: I) -> Self {
                iter.fold(Self::ONE, |product, value| product * value)
            }
        }

        impl<const SCALE: u32> Default for $res<SCALE> {
            #[inline]
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl<const SCALE: u32> fmt::Display for $res<SCALE> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.to_decimal(), f)
            }
        }

        impl<const SCALE: u32> fmt::Debug for $res<SCALE> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }

        impl<const SCALE: u32> FromStr for $res<SCALE> {
            type Err = Error;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let decimal = Decimal::from_str(value)?;
                Self::try_from(decimal)
            }
        }

        impl<const SCALE: u32> From<$res<SCALE>> for Decimal {
            #[inline]
            fn from(value: $res<SCALE>) -> Self {
                value.to_decimal()
            }
        }

        impl<const SCALE: u32> TryFrom<Decimal> for $res<SCALE> {
            type Error = Error;

            #[inline]
            fn try_from(value: Decimal) -> Result<Self, Self::Error> {
                Self::checked_from_decimal(&value).ok_or(Error::Overflow)
            }
        }

        impl<'a, const SCALE: u32> TryFrom<&'a Decimal> for $res<SCALE> {
            type Error = Error;

            #[inline]
            fn try_from(value: &'a Decimal) -> Result<Self, Self::Error> {
                Self::checked_from_decimal(value).ok_or(Error::Overflow)
            }
        }

        impl<const SCALE: u32> TryFrom<i64> for $res<SCALE> {
            type Error = Error;

            #[inline]
            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::checked_from_int(value).ok_or(Error::Overflow)
            }
        }
    };
}
