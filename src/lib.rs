//! Arbitrary-precision integer arithmetic.
//!
//! This crate re-exports the workspace members under one name; see
//! [`numerics_bigint`] for the integer type itself.

pub use numerics_bigint::*;
