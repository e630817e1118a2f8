#![forbid(unsafe_code)]
#![doc = "Arbitrary-precision signed integers that behave like the native integer types."]

mod arith;
mod bigint;
mod bits;
mod convert;
mod ct;
mod float;
mod gcd;
mod magnitude;
mod ops;
mod pow;
mod radix;
mod random;
#[cfg(feature = "serde")]
mod serialize;

pub use bigint::{BigInt, DoubleWord, Sign, Word, WORD_BITS};
pub use convert::PrimitiveInt;
pub use float::BinaryFloat;
pub use numerics_types::NumericsError;
