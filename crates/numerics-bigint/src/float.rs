//! Conversions between [`BigInt`] and IEEE 754 binary floating point.

use crate::bigint::{BigInt, Word};
use crate::magnitude;
use numerics_types::NumericsError;

mod private {
    pub trait Sealed {}
}

/// An IEEE 754 binary floating-point type.
pub trait BinaryFloat: Copy + private::Sealed {
    /// Stored (explicit) significand bits.
    const SIGNIFICAND_BITS: u32;
    /// Exponent field bits.
    const EXPONENT_BITS: u32;

    fn to_raw_bits(self) -> u64;
    fn from_raw_bits(bits: u64) -> Self;
}

impl private::Sealed for f32 {}
impl private::Sealed for f64 {}

impl BinaryFloat for f32 {
    const SIGNIFICAND_BITS: u32 = 23;
    const EXPONENT_BITS: u32 = 8;

    fn to_raw_bits(self) -> u64 {
        self.to_bits() as u64
    }

    fn from_raw_bits(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }
}

impl BinaryFloat for f64 {
    const SIGNIFICAND_BITS: u32 = 52;
    const EXPONENT_BITS: u32 = 11;

    fn to_raw_bits(self) -> u64 {
        self.to_bits()
    }

    fn from_raw_bits(bits: u64) -> Self {
        f64::from_bits(bits)
    }
}

fn exponent_bias<F: BinaryFloat>() -> i64 {
    (1i64 << (F::EXPONENT_BITS - 1)) - 1
}

/// Truncate `value` toward zero; the flag reports whether nothing was lost.
fn unpack<F: BinaryFloat>(value: F) -> Result<(BigInt, bool), NumericsError> {
    let bits = value.to_raw_bits();
    let sig_bits = F::SIGNIFICAND_BITS;
    let exp_mask = (1u64 << F::EXPONENT_BITS) - 1;

    let negative = (bits >> (sig_bits + F::EXPONENT_BITS)) & 1 == 1;
    let exp_field = (bits >> sig_bits) & exp_mask;
    let fraction = bits & ((1u64 << sig_bits) - 1);

    if exp_field == exp_mask {
        return Err(NumericsError::NotFinite);
    }
    if exp_field == 0 {
        // Zero or subnormal: |value| < 1.
        return Ok((BigInt::zero(), fraction == 0));
    }

    let significand: Word = (1 << sig_bits) | fraction;
    let shift = exp_field as i64 - exponent_bias::<F>() - sig_bits as i64;
    if shift >= 0 {
        let words = magnitude::shl(&[significand], shift as usize);
        return Ok((BigInt::from_sign_magnitude(negative, words), true));
    }

    let right = shift.unsigned_abs();
    if right >= Word::BITS as u64 {
        return Ok((BigInt::zero(), false));
    }
    let integer = significand >> right;
    let exact = significand & ((1 << right) - 1) == 0;
    Ok((BigInt::from_sign_magnitude(negative, vec![integer]), exact))
}

impl BigInt {
    /// Convert a float, dropping any fractional part.
    ///
    /// # Panics
    ///
    /// Panics if `value` is infinite or NaN.
    ///
    /// ```
    /// use numerics_bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from_float(-2.9f64), BigInt::from(-2));
    /// assert_eq!(BigInt::from_float(f32::MIN_POSITIVE / 2.0), BigInt::zero());
    /// ```
    pub fn from_float<F: BinaryFloat>(value: F) -> BigInt {
        match unpack(value) {
            Ok((n, _)) => n,
            Err(_) => panic!("cannot convert an infinite or NaN value to BigInt"),
        }
    }

    /// Convert a float that holds an integer exactly.
    ///
    /// Infinite and NaN inputs give `NotFinite`; anything with a fractional
    /// part (including every nonzero subnormal) gives `Inexact`.
    pub fn from_float_exact<F: BinaryFloat>(value: F) -> Result<BigInt, NumericsError> {
        match unpack(value)? {
            (n, true) => Ok(n),
            (_, false) => Err(NumericsError::Inexact),
        }
    }

    /// Nearest float, ties to even. Values beyond the float's range become
    /// signed infinity.
    pub fn to_float<F: BinaryFloat>(&self) -> F {
        let sig_bits = F::SIGNIFICAND_BITS;
        let sign = (self.is_negative() as u64) << (sig_bits + F::EXPONENT_BITS);
        if self.is_zero() {
            return F::from_raw_bits(0);
        }

        let precision = sig_bits as usize + 1;
        let bit_len = self.bit_len();
        let mut exponent = bit_len as i64 - 1;

        let mut significand = if bit_len <= precision {
            magnitude::low_u128(self.magnitude()) as u64
        } else {
            let drop = bit_len - precision;
            let mut s = magnitude::shr(self.magnitude(), drop)[0];
            let half = magnitude::bit(self.magnitude(), drop - 1);
            let sticky = magnitude::trailing_zeros(self.magnitude()).is_some_and(|tz| tz < drop - 1);
            if half && (sticky || s & 1 == 1) {
                s += 1;
            }
            s
        };
        if significand >> precision != 0 {
            // Rounding carried into a new bit.
            significand >>= 1;
            exponent += 1;
        }
        // Left-align short values so the implicit bit sits at `sig_bits`.
        significand <<= precision - (64 - significand.leading_zeros() as usize);

        let exp_mask = (1u64 << F::EXPONENT_BITS) - 1;
        if exponent > exponent_bias::<F>() {
            return F::from_raw_bits(sign | (exp_mask << sig_bits));
        }
        let exp_field = (exponent + exponent_bias::<F>()) as u64;
        let fraction = significand & ((1u64 << sig_bits) - 1);
        F::from_raw_bits(sign | (exp_field << sig_bits) | fraction)
    }

    /// Nearest `f64`, ties to even.
    pub fn to_f64(&self) -> f64 {
        self.to_float::<f64>()
    }

    /// Nearest `f32`, ties to even.
    pub fn to_f32(&self) -> f32 {
        self.to_float::<f32>()
    }
}

impl TryFrom<f64> for BigInt {
    type Error = NumericsError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        BigInt::from_float_exact(value)
    }
}

impl TryFrom<f32> for BigInt {
    type Error = NumericsError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        BigInt::from_float_exact(value)
    }
}
