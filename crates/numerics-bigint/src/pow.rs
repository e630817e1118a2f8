//! Exponentiation.

use crate::bigint::BigInt;
use crate::ops;
use numerics_types::NumericsError;

impl BigInt {
    /// self^exp by square-and-multiply. `x.pow(0) == 1` for every x,
    /// zero included.
    ///
    /// ```
    /// use numerics_bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-3).pow(3), BigInt::from(-27));
    /// assert_eq!(BigInt::zero().pow(0), BigInt::one());
    /// ```
    pub fn pow(&self, exp: u32) -> BigInt {
        let mut result = BigInt::one();
        let mut base = self.clone();
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = ops::mul(&result, &base);
            }
            e >>= 1;
            if e > 0 {
                base = ops::mul(&base, &base);
            }
        }
        result
    }

    /// Modular exponentiation: self^exp mod |modulus|, in [0, |modulus|).
    ///
    /// Every intermediate product is reduced, so the working size stays
    /// bounded by the modulus. Returns `ZeroModulus` for a zero modulus and
    /// `NegativeExponent` for exp < 0.
    pub fn mod_pow(&self, exp: &BigInt, modulus: &BigInt) -> Result<BigInt, NumericsError> {
        if modulus.is_zero() {
            return Err(NumericsError::ZeroModulus);
        }
        if exp.is_negative() {
            return Err(NumericsError::NegativeExponent);
        }

        let mut result = BigInt::one().rem_euclid(modulus)?;
        let mut base = self.rem_euclid(modulus)?;
        let exp_bits = exp.bit_len();

        for i in 0..exp_bits {
            if exp.bit(i) {
                result = ops::mul(&result, &base).rem_euclid(modulus)?;
            }
            if i + 1 < exp_bits {
                base = ops::mul(&base, &base).rem_euclid(modulus)?;
            }
        }

        Ok(result)
    }
}
