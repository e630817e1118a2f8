//! GCD and modular inverse operations.

use crate::bigint::BigInt;
use crate::{magnitude, ops};
use numerics_types::NumericsError;

impl BigInt {
    /// Greatest common divisor of |self| and |other| by the Euclidean
    /// algorithm. Always non-negative; `gcd(0, 0) == 0`.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let mut a = self.magnitude().to_vec();
        let mut b = other.magnitude().to_vec();

        // Repeatedly replace (a, b) with (b, a mod b).
        while !b.is_empty() {
            let (_, rem) = magnitude::div_rem(&a, &b);
            a = b;
            b = rem;
        }
        BigInt::from_sign_magnitude(false, a)
    }

    /// The modular inverse: the x in [0, |modulus|) with self * x ≡ 1.
    ///
    /// Modulo ±1 every value is congruent to 0 and the answer is 0. Returns
    /// `NoInverse` when gcd(self, modulus) != 1 and `ZeroModulus` for a zero
    /// modulus.
    ///
    /// ```
    /// use numerics_bigint::BigInt;
    ///
    /// let inv = BigInt::from(3).mod_inverse(&BigInt::from(7)).unwrap();
    /// assert_eq!(inv, BigInt::from(5));
    /// ```
    pub fn mod_inverse(&self, modulus: &BigInt) -> Result<BigInt, NumericsError> {
        if modulus.is_zero() {
            return Err(NumericsError::ZeroModulus);
        }
        let modulus = modulus.abs();
        if modulus.is_one() {
            return Ok(BigInt::zero());
        }

        // Extended Euclidean algorithm, tracking only the coefficient of self:
        // old_r = old_s * self (mod modulus).
        let mut old_r = self.rem_euclid(&modulus)?;
        let mut r = modulus.clone();
        let mut old_s = BigInt::one();
        let mut s = BigInt::zero();

        while !r.is_zero() {
            let (quotient, remainder) = old_r.div_rem(&r)?;
            old_r = r;
            r = remainder;

            // new_s = old_s - quotient * s
            let new_s = ops::sub(&old_s, &ops::mul(&quotient, &s));
            old_s = s;
            s = new_s;
        }

        if !old_r.is_one() {
            tracing::debug!(gcd = %old_r, "no modular inverse");
            return Err(NumericsError::NoInverse);
        }
        old_s.rem_euclid(&modulus)
    }
}
