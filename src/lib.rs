#![doc = include_str!(concat!(env!("OUT_DIR"), "/README-lib.md"))]
#![forbid(unsafe_code)]
#![deny(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

mod constants;
mod error;
mod fixed32;
mod fixed64;
mod interchange;
mod ops;
mod rounding;

#[cfg(feature = "rust-fuzz")]
mod arbitrary;
#[cfg(feature = "proptest")]
mod proptest;
#[cfg(feature = "rand")]
mod rand;
#[cfg(feature = "serde")]
pub mod serde;

pub use error::Error;
pub use fixed32::FastDecimal32;
pub use fixed64::FastDecimal64;
pub use rounding::RoundingStrategy;
pub use rust_decimal::Decimal;

/// A convenience module appropriate for glob imports (`use fast_decimal::prelude::*;`).
pub mod prelude {
    pub use crate::{Decimal, FastDecimal32, FastDecimal64, RoundingStrategy};
    pub use core::str::FromStr;
    pub use num_traits::{One, Zero};
}
