use crate::{Error, FastDecimal32, FastDecimal64};
use arrayvec::ArrayString;
use core::{fmt, fmt::Write, marker::PhantomData, str::FromStr};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::{self, de::Unexpected};

/// Serialize/deserialize fixed point decimals as their raw scaled integer. This is particularly
/// useful for compact binary formats, and for formats that cannot describe their own contents
/// such as `bincode`.
///
/// ```
/// # use serde::{Serialize, Deserialize};
/// use fast_decimal::FastDecimal64;
///
/// #[derive(Serialize, Deserialize)]
/// pub struct RawExample {
///     #[serde(with = "fast_decimal::serde::raw")]
///     value: FastDecimal64<4>,
/// }
///
/// let value = RawExample { value: "123.4".parse().unwrap() };
/// assert_eq!(
///     &serde_json::to_string(&value).unwrap(),
///     r#"{"value":1234000}"#
/// );
/// ```
pub mod raw {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Serialize};

    mod sealed {
        pub trait Sealed {}
    }

    /// A fixed point decimal that can be carried as its scaled integer.
    pub trait RawValue: sealed::Sealed + Sized {
        type Raw: Serialize + DeserializeOwned;

        fn raw_value(&self) -> Self::Raw;

        fn from_raw_value(raw: Self::Raw) -> Self;
    }

    macro_rules! impl_raw_value {
        ($res:ident, $raw:ty) => {
            impl<const SCALE: u32> sealed::Sealed for crate::$res<SCALE> {}

            impl<const SCALE: u32> RawValue for crate::$res<SCALE> {
                type Raw = $raw;

                #[inline]
                fn raw_value(&self) -> $raw {
                    self.raw()
                }

                #[inline]
                fn from_raw_value(raw: $raw) -> Self {
                    Self::from_raw(raw)
                }
            }
        };
    }

    impl_raw_value!(FastDecimal32, i32);
    impl_raw_value!(FastDecimal64, i64);

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: RawValue,
        D: serde::de::Deserializer<'de>,
    {
        <T::Raw as Deserialize>::deserialize(deserializer).map(T::from_raw_value)
    }

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: RawValue,
        S: serde::Serializer,
    {
        value.raw_value().serialize(serializer)
    }
}

// Longest rendering is an i64 extreme with a sign and a decimal point.
const MAX_STR_BUFFER_SIZE: usize = 32;

macro_rules! impl_serde {
    ($res:ident) => {
        impl<const SCALE: u32> serde::Serialize for $res<SCALE> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let mut buffer = ArrayString::<MAX_STR_BUFFER_SIZE>::new();
                write!(buffer, "{}", self).map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&buffer)
            }
        }

        impl<'de, const SCALE: u32> serde::Deserialize<'de> for $res<SCALE> {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::de::Deserializer<'de>,
            {
                deserializer.deserialize_any(FixedDecimalVisitor(PhantomData))
            }
        }
    };
}

impl_serde!(FastDecimal32);
impl_serde!(FastDecimal64);

struct FixedDecimalVisitor<T>(PhantomData<T>);

impl<'de, T> serde::de::Visitor<'de> for FixedDecimalVisitor<T>
where
    T: TryFrom<Decimal, Error = Error>,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a fixed point decimal number within the range of its storage type")
    }

    fn visit_i64<E>(self, value: i64) -> Result<T, E>
    where
        E: serde::de::Error,
    {
        T::try_from(Decimal::from(value)).map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_u64<E>(self, value: u64) -> Result<T, E>
    where
        E: serde::de::Error,
    {
        T::try_from(Decimal::from(value)).map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_f64<E>(self, value: f64) -> Result<T, E>
    where
        E: serde::de::Error,
    {
        Decimal::from_f64(value)
            .ok_or(Error::Overflow)
            .and_then(T::try_from)
            .map_err(|_| E::invalid_value(Unexpected::Float(value), &self))
    }

    fn visit_str<E>(self, value: &str) -> Result<T, E>
    where
        E: serde::de::Error,
    {
        Decimal::from_str(value)
            .or_else(|_| Decimal::from_scientific(value))
            .map_err(Error::from)
            .and_then(T::try_from)
            .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}
