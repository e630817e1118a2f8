//! Radix 2..=36 parsing and printing.
//!
//! Digits are handled in chunks of `k` digits, where `radix^k` is the largest
//! power of the radix that still fits in one word. Parsing then costs one
//! single-word multiply-add per chunk and printing one short division per
//! chunk, instead of one per digit.

use std::fmt;
use std::str::FromStr;

use crate::bigint::{BigInt, Word};
use crate::magnitude;
use numerics_types::NumericsError;

const DIGITS_LOWER: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const DIGITS_UPPER: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// (k, radix^k) for the largest k with radix^k <= Word::MAX.
fn chunk(radix: u32) -> (usize, Word) {
    let radix = radix as Word;
    let mut k = 1;
    let mut power = radix;
    while let Some(next) = power.checked_mul(radix) {
        power = next;
        k += 1;
    }
    (k, power)
}

impl BigInt {
    /// Parse an optionally signed (`+`/`-`) run of case-insensitive digits.
    ///
    /// Anything else, including surrounding whitespace or an empty digit
    /// run, is an error.
    ///
    /// ```
    /// use numerics_bigint::BigInt;
    ///
    /// let n = BigInt::from_str_radix("-ff", 16).unwrap();
    /// assert_eq!(n, BigInt::from(-255));
    /// assert!(BigInt::from_str_radix(" 12", 10).is_err());
    /// ```
    pub fn from_str_radix(src: &str, radix: u32) -> Result<BigInt, NumericsError> {
        if !(2..=36).contains(&radix) {
            return Err(NumericsError::InvalidRadix(radix));
        }

        let (negative, offset) = match src.as_bytes().first() {
            Some(b'-') => (true, 1),
            Some(b'+') => (false, 1),
            _ => (false, 0),
        };
        let digits = &src.as_bytes()[offset..];
        if digits.is_empty() {
            return Err(NumericsError::EmptyDigits);
        }

        let (k, power) = chunk(radix);
        let mut words = Vec::with_capacity(digits.len() / k + 1);
        let head = match digits.len() % k {
            0 => k,
            n => n,
        };

        let mut start = 0;
        let mut end = head;
        while start < digits.len() {
            let mut value: Word = 0;
            for (i, &b) in digits[start..end].iter().enumerate() {
                let d = (b as char).to_digit(radix).ok_or_else(|| {
                    let index = offset + start + i;
                    NumericsError::InvalidDigit {
                        ch: src[index..].chars().next().unwrap_or(b as char),
                        index,
                    }
                })?;
                value = value * radix as Word + d as Word;
            }
            magnitude::mul_add_word(&mut words, power, value);
            start = end;
            end += k;
        }

        Ok(BigInt::from_sign_magnitude(negative, words))
    }

    /// Render in the given radix, with a leading `-` for negative values.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is outside `2..=36`.
    ///
    /// ```
    /// use numerics_bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-255).to_str_radix(16, true), "-FF");
    /// assert_eq!(BigInt::zero().to_str_radix(2, false), "0");
    /// ```
    pub fn to_str_radix(&self, radix: u32, uppercase: bool) -> String {
        let digits = self.magnitude_to_str_radix(radix, uppercase);
        if self.is_negative() {
            format!("-{digits}")
        } else {
            digits
        }
    }

    /// Digits of the absolute value.
    pub(crate) fn magnitude_to_str_radix(&self, radix: u32, uppercase: bool) -> String {
        assert!((2..=36).contains(&radix), "radix must be in 2..=36, got {radix}");
        if self.is_zero() {
            return "0".to_string();
        }

        let (k, power) = chunk(radix);
        let table = if uppercase { DIGITS_UPPER } else { DIGITS_LOWER };

        // Least significant chunk first.
        let mut chunks = Vec::new();
        let mut rest = self.magnitude().to_vec();
        while !rest.is_empty() {
            let (q, r) = magnitude::div_rem_word(&rest, power);
            chunks.push(r);
            rest = q;
        }

        let mut out = String::with_capacity(chunks.len() * k);
        let mut buf = Vec::with_capacity(k);
        for (i, &c) in chunks.iter().rev().enumerate() {
            buf.clear();
            let mut n = c;
            while n > 0 {
                buf.push(table[(n % radix as Word) as usize]);
                n /= radix as Word;
            }
            if i > 0 {
                buf.resize(k, b'0');
            }
            out.extend(buf.iter().rev().map(|&b| b as char));
        }
        out
    }
}

impl FromStr for BigInt {
    type Err = NumericsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_str_radix(s, 10)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_to_str_radix(10, false))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.magnitude_to_str_radix(16, false))
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.magnitude_to_str_radix(16, true))
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0o", &self.magnitude_to_str_radix(8, false))
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0b", &self.magnitude_to_str_radix(2, false))
    }
}
