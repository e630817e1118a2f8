#![forbid(unsafe_code)]
#![doc = "Common error types shared by the numerics crates."]

pub mod error;

pub use error::*;
