//! Big integer type and basic accessors.

use std::cmp::Ordering;

use crate::magnitude;

/// Word type for the magnitude ("digit" of base 2^64).
pub type Word = u64;
/// Double-width type for multiplication and division intermediates.
pub type DoubleWord = u128;

/// Bits per word.
pub const WORD_BITS: usize = Word::BITS as usize;

/// Sign of a [`BigInt`]. Zero is always [`Sign::Positive`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// True for [`Sign::Negative`].
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }
}

impl std::ops::Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// An arbitrary-precision signed integer.
///
/// Stored as a sign and a little-endian magnitude of `u64` words. The
/// representation is always canonical: no most-significant zero words, and
/// zero is the empty magnitude with a positive sign. Derived equality and
/// hashing are therefore equality and hashing of the mathematical value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    /// Little-endian words (magnitude[0] is the least significant).
    magnitude: Vec<Word>,
}

impl BigInt {
    /// Zero.
    pub const fn zero() -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: Vec::new(),
        }
    }

    /// One.
    pub fn one() -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: vec![1],
        }
    }

    /// Build from an explicit sign and little-endian magnitude.
    ///
    /// Most-significant zero words are stripped and a zero magnitude always
    /// ends up positive, whatever `sign` says.
    ///
    /// ```
    /// use numerics_bigint::{BigInt, Sign};
    ///
    /// let z = BigInt::from_words(Sign::Negative, vec![0, 0]);
    /// assert!(z.is_zero());
    /// assert_eq!(z.sign(), Sign::Positive);
    /// ```
    pub fn from_words(sign: Sign, magnitude: Vec<Word>) -> Self {
        Self::from_sign_magnitude(sign.is_negative(), magnitude)
    }

    /// Canonicalizing constructor used by every arithmetic path.
    pub(crate) fn from_sign_magnitude(negative: bool, mut magnitude: Vec<Word>) -> Self {
        magnitude::trim(&mut magnitude);
        let sign = if negative && !magnitude.is_empty() {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self { sign, magnitude }
    }

    /// Build a non-negative value from big-endian bytes.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        let num_words = bytes.len().div_ceil(8);
        let mut words = vec![0 as Word; num_words];

        for (i, &byte) in bytes.iter().rev().enumerate() {
            words[i / 8] |= (byte as Word) << ((i % 8) * 8);
        }
        Self::from_sign_magnitude(false, words)
    }

    /// Export the magnitude as big-endian bytes (`[0]` for zero).
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let bits = self.bit_len();
        if bits == 0 {
            return vec![0];
        }

        let num_bytes = bits.div_ceil(8);
        let mut bytes = vec![0u8; num_bytes];
        for (i, byte) in bytes.iter_mut().rev().enumerate() {
            *byte = (self.magnitude[i / 8] >> ((i % 8) * 8)) as u8;
        }
        bytes
    }

    /// Decompose into sign and magnitude.
    pub fn into_parts(self) -> (Sign, Vec<Word>) {
        (self.sign, self.magnitude)
    }

    /// The sign. Zero reports [`Sign::Positive`].
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The little-endian magnitude words, without most-significant zeros.
    pub fn magnitude(&self) -> &[Word] {
        &self.magnitude
    }

    /// Return true if this number is zero.
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_empty()
    }

    /// Return true if this number is less than zero.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Return true if this number is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive && !self.is_zero()
    }

    /// Return true if this number equals 1.
    pub fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.magnitude.len() == 1 && self.magnitude[0] == 1
    }

    /// Return true if this number is even.
    pub fn is_even(&self) -> bool {
        self.magnitude.first().map_or(true, |&w| w & 1 == 0)
    }

    /// Return true if this number is odd.
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> BigInt {
        match (self.is_zero(), self.sign) {
            (true, _) => BigInt::zero(),
            (false, sign) => BigInt::from_words(sign, vec![1]),
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> BigInt {
        Self {
            sign: Sign::Positive,
            magnitude: self.magnitude.clone(),
        }
    }

    /// Number of significant bits of the absolute value.
    pub fn bit_len(&self) -> usize {
        magnitude::bit_len(&self.magnitude)
    }

    /// Number of trailing zero bits.
    ///
    /// Zero has no set bit; it reports [`WORD_BITS`], the same answer a
    /// single zero word would give.
    pub fn trailing_zeros(&self) -> usize {
        magnitude::trailing_zeros(&self.magnitude).unwrap_or(WORD_BITS)
    }

    /// Compare absolute values.
    pub fn cmp_abs(&self, other: &BigInt) -> Ordering {
        magnitude::cmp(&self.magnitude, &other.magnitude)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

impl std::fmt::Debug for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "BigInt({sign}0x{})", self.magnitude_to_str_radix(16, false))
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Positive, Sign::Positive) => self.cmp_abs(other),
            (Sign::Negative, Sign::Negative) => other.cmp_abs(self),
        }
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for BigInt {
    fn zeroize(&mut self) {
        // Wipes the words and leaves an empty magnitude, i.e. canonical zero.
        self.magnitude.zeroize();
        self.sign = Sign::Positive;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let z = BigInt::zero();
        assert!(z.is_zero());
        assert_eq!(z.bit_len(), 0);
        assert!(z.magnitude().is_empty());
        assert_eq!(z, BigInt::default());
    }

    #[test]
    fn test_canonical_construction() {
        let n = BigInt::from_words(Sign::Negative, vec![5, 0, 0]);
        assert_eq!(n.magnitude(), &[5]);
        assert!(n.is_negative());

        let z = BigInt::from_words(Sign::Negative, vec![]);
        assert_eq!(z.sign(), Sign::Positive);
        assert_eq!(z, BigInt::zero());
    }

    #[test]
    fn test_bytes_roundtrip() {
        let bytes = vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09];
        let n = BigInt::from_bytes_be(&bytes);
        assert_eq!(n.magnitude(), &[0x0203_0405_0607_0809, 0x01]);
        assert_eq!(n.to_bytes_be(), bytes);
        assert_eq!(BigInt::from_bytes_be(&[0, 0]).to_bytes_be(), vec![0]);
    }

    #[test]
    fn test_ordering() {
        let neg_big = BigInt::from_words(Sign::Negative, vec![0, 1]);
        let neg_small = BigInt::from_words(Sign::Negative, vec![1]);
        let pos_small = BigInt::from_words(Sign::Positive, vec![1]);
        let pos_big = BigInt::from_words(Sign::Positive, vec![0, 1]);
        let mut v = vec![
            pos_big.clone(),
            BigInt::zero(),
            neg_small.clone(),
            pos_small.clone(),
            neg_big.clone(),
        ];
        v.sort();
        assert_eq!(v, vec![neg_big, neg_small, BigInt::zero(), pos_small, pos_big]);
    }

    #[test]
    fn test_predicates() {
        let one = BigInt::one();
        assert!(one.is_one() && one.is_odd() && one.is_positive());
        assert!(BigInt::zero().is_even());
        let minus_one = BigInt::from_words(Sign::Negative, vec![1]);
        assert!(!minus_one.is_one());
        assert_eq!(minus_one.signum(), minus_one);
        assert_eq!(minus_one.abs(), one);
        assert_eq!(BigInt::zero().signum(), BigInt::zero());
    }

    #[test]
    fn test_trailing_zeros() {
        assert_eq!(BigInt::zero().trailing_zeros(), WORD_BITS);
        assert_eq!(BigInt::from_words(Sign::Negative, vec![0, 4]).trailing_zeros(), 66);
        assert_eq!(BigInt::one().trailing_zeros(), 0);
    }

    #[test]
    fn test_debug() {
        let n = BigInt::from_words(Sign::Negative, vec![0xff]);
        assert_eq!(format!("{n:?}"), "BigInt(-0xff)");
        assert_eq!(format!("{:?}", BigInt::zero()), "BigInt(0x0)");
    }

    fn hash_of(v: &BigInt) -> u64 {
        use std::hash::{Hash, Hasher};
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        v.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equal_values_hash_equally() {
        let x = BigInt::from_words(Sign::Negative, vec![7, 9]);
        let zeros = [
            BigInt::zero(),
            BigInt::from_words(Sign::Negative, vec![0, 0]),
            "-0".parse::<BigInt>().unwrap(),
            &x - &x,
            BigInt::from_bytes_be(&[0, 0, 0]),
        ];
        for z in &zeros {
            assert_eq!(z, &BigInt::zero());
            assert_eq!(hash_of(z), hash_of(&BigInt::zero()));
        }

        let five = BigInt::from_words(Sign::Positive, vec![5, 0]);
        assert_eq!(hash_of(&five), hash_of(&BigInt::from(5)));
        assert_eq!(hash_of(&five), hash_of(&"5".parse::<BigInt>().unwrap()));

        let set: std::collections::HashSet<BigInt> =
            zeros.into_iter().chain([five, BigInt::from(5u8)]).collect();
        assert_eq!(set.len(), 2);
    }

    #[cfg(feature = "zeroize")]
    #[test]
    fn test_zeroize_leaves_zero() {
        use zeroize::Zeroize;
        let mut n = BigInt::from_words(Sign::Negative, vec![1, 2, 3]);
        n.zeroize();
        assert_eq!(n, BigInt::zero());
    }
}
