//! Signed arithmetic on top of the magnitude core.

use std::cmp::Ordering;

use crate::bigint::{BigInt, Word};
use crate::magnitude;
use numerics_types::NumericsError;

/// Signed sum of two (sign, magnitude) pairs.
fn add_signed(x_neg: bool, x: &[Word], y_neg: bool, y: &[Word]) -> BigInt {
    if x_neg == y_neg {
        return BigInt::from_sign_magnitude(x_neg, magnitude::add(x, y));
    }
    // Opposite signs: the larger magnitude wins the sign.
    match magnitude::cmp(x, y) {
        Ordering::Equal => BigInt::zero(),
        Ordering::Greater => BigInt::from_sign_magnitude(x_neg, magnitude::sub(x, y)),
        Ordering::Less => BigInt::from_sign_magnitude(y_neg, magnitude::sub(y, x)),
    }
}

/// x + y.
pub(crate) fn add(x: &BigInt, y: &BigInt) -> BigInt {
    add_signed(x.is_negative(), x.magnitude(), y.is_negative(), y.magnitude())
}

/// x - y, i.e. x + (-y).
pub(crate) fn sub(x: &BigInt, y: &BigInt) -> BigInt {
    add_signed(x.is_negative(), x.magnitude(), !y.is_negative(), y.magnitude())
}

/// x * y.
pub(crate) fn mul(x: &BigInt, y: &BigInt) -> BigInt {
    BigInt::from_sign_magnitude(
        x.is_negative() != y.is_negative(),
        magnitude::mul(x.magnitude(), y.magnitude()),
    )
}

/// -x. Zero stays positive.
pub(crate) fn neg(x: &BigInt) -> BigInt {
    BigInt::from_sign_magnitude(!x.is_negative(), x.magnitude().to_vec())
}

/// x / y for the `/` operator; panics on a zero divisor like native integers.
pub(crate) fn div(x: &BigInt, y: &BigInt) -> BigInt {
    match x.div_rem(y) {
        Ok((q, _)) => q,
        Err(_) => panic!("attempt to divide by zero"),
    }
}

/// x % y for the `%` operator; panics on a zero divisor like native integers.
pub(crate) fn rem(x: &BigInt, y: &BigInt) -> BigInt {
    match x.div_rem(y) {
        Ok((_, r)) => r,
        Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
    }
}

impl BigInt {
    /// Truncating division with remainder: returns (quotient, remainder).
    ///
    /// The quotient rounds toward zero and the remainder takes the sign of
    /// the dividend, matching native integer `/` and `%`.
    ///
    /// ```
    /// use numerics_bigint::BigInt;
    ///
    /// let (q, r) = BigInt::from(-7).div_rem(&BigInt::from(2)).unwrap();
    /// assert_eq!((q, r), (BigInt::from(-3), BigInt::from(-1)));
    /// ```
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), NumericsError> {
        if divisor.is_zero() {
            return Err(NumericsError::DivisionByZero);
        }
        let (q, r) = magnitude::div_rem(self.magnitude(), divisor.magnitude());
        Ok((
            BigInt::from_sign_magnitude(self.is_negative() != divisor.is_negative(), q),
            BigInt::from_sign_magnitude(self.is_negative(), r),
        ))
    }

    /// Truncating division, or `DivisionByZero`.
    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt, NumericsError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Truncating remainder, or `DivisionByZero`.
    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt, NumericsError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Least non-negative residue: self mod |modulus|, always in [0, |modulus|).
    /// A zero modulus gives `ZeroModulus`.
    pub fn rem_euclid(&self, modulus: &BigInt) -> Result<BigInt, NumericsError> {
        if modulus.is_zero() {
            return Err(NumericsError::ZeroModulus);
        }
        let r = rem(self, modulus);
        if r.is_negative() {
            Ok(add(&r, &modulus.abs()))
        } else {
            Ok(r)
        }
    }

    /// Return true if `divisor` divides this value exactly.
    ///
    /// Only zero is a multiple of zero.
    pub fn is_multiple_of(&self, divisor: &BigInt) -> bool {
        if divisor.is_zero() {
            return self.is_zero();
        }
        magnitude::div_rem(self.magnitude(), divisor.magnitude()).1.is_empty()
    }
}
