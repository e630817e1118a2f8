//! Two's-complement view over the sign-magnitude store.
//!
//! Bitwise operators and shifts behave as if every value were an infinitely
//! sign-extended two's-complement bit pattern: non-negative values continue
//! with zero words forever, negative values with all-ones words. Values are
//! only converted into that form when a bitwise operation asks for it.

use crate::bigint::{BigInt, Word, WORD_BITS};
use crate::magnitude;

/// Negate `words` as a fixed-width two's-complement number, in place.
///
/// Returns the carry out of the top word.
fn negate_words(words: &mut [Word]) -> bool {
    let mut carry = true;
    for w in words.iter_mut() {
        let (v, c) = (!*w).overflowing_add(carry as Word);
        *w = v;
        carry = c;
    }
    carry
}

/// Word the infinite pattern continues with past its magnitude.
fn extension(x: &BigInt) -> Word {
    if x.is_negative() {
        Word::MAX
    } else {
        0
    }
}

/// The first `len` words of `x`'s infinite two's-complement pattern.
///
/// `len` must be at least the magnitude length.
fn pattern(x: &BigInt, len: usize) -> Vec<Word> {
    debug_assert!(len >= x.magnitude().len());
    let mut words = x.magnitude().to_vec();
    words.resize(len, 0);
    if x.is_negative() {
        negate_words(&mut words);
    }
    words
}

/// Rebuild a value from `words` followed by an infinite run of `negative`
/// extension words.
fn from_pattern(mut words: Vec<Word>, negative: bool) -> BigInt {
    if negative && negate_words(&mut words) {
        // Every word was zero: the pattern is -B^len.
        words.push(1);
    }
    BigInt::from_sign_magnitude(negative, words)
}

/// Combine two infinite patterns word by word.
fn bitwise(x: &BigInt, y: &BigInt, op: impl Fn(Word, Word) -> Word) -> BigInt {
    let len = x.magnitude().len().max(y.magnitude().len());
    let a = pattern(x, len);
    let b = pattern(y, len);
    let words = a.iter().zip(&b).map(|(&p, &q)| op(p, q)).collect();
    let negative = op(extension(x), extension(y)) != 0;
    from_pattern(words, negative)
}

pub(crate) fn and(x: &BigInt, y: &BigInt) -> BigInt {
    bitwise(x, y, |a, b| a & b)
}

pub(crate) fn or(x: &BigInt, y: &BigInt) -> BigInt {
    bitwise(x, y, |a, b| a | b)
}

pub(crate) fn xor(x: &BigInt, y: &BigInt) -> BigInt {
    bitwise(x, y, |a, b| a ^ b)
}

/// !x == -x - 1.
pub(crate) fn not(x: &BigInt) -> BigInt {
    if x.is_negative() {
        // -m - 1 complemented is m - 1, never negative.
        BigInt::from_sign_magnitude(false, magnitude::sub(x.magnitude(), &[1]))
    } else {
        BigInt::from_sign_magnitude(true, magnitude::add(x.magnitude(), &[1]))
    }
}

/// x << bits. Multiplication by 2^bits, so the sign is kept as is.
pub(crate) fn shl(x: &BigInt, bits: usize) -> BigInt {
    BigInt::from_sign_magnitude(x.is_negative(), magnitude::shl(x.magnitude(), bits))
}

/// Arithmetic x >> bits, rounding toward negative infinity.
pub(crate) fn shr(x: &BigInt, bits: usize) -> BigInt {
    let shifted = magnitude::shr(x.magnitude(), bits);
    if !x.is_negative() {
        return BigInt::from_sign_magnitude(false, shifted);
    }
    // floor(-m / 2^n) = -ceil(m / 2^n)
    let lost_bits = magnitude::trailing_zeros(x.magnitude()).is_some_and(|tz| tz < bits);
    let shifted = if lost_bits {
        magnitude::add(&shifted, &[1])
    } else {
        shifted
    };
    BigInt::from_sign_magnitude(true, shifted)
}

/// Shift left by a signed amount; negative amounts shift right.
pub(crate) fn shl_signed(x: &BigInt, amount: i128) -> BigInt {
    let bits = usize::try_from(amount.unsigned_abs()).unwrap_or(usize::MAX);
    if amount < 0 {
        shr(x, bits)
    } else {
        shl(x, bits)
    }
}

/// Shift right by a signed amount; negative amounts shift left.
pub(crate) fn shr_signed(x: &BigInt, amount: i128) -> BigInt {
    let bits = usize::try_from(amount.unsigned_abs()).unwrap_or(usize::MAX);
    if amount < 0 {
        shl(x, bits)
    } else {
        shr(x, bits)
    }
}

impl BigInt {
    /// The shortest little-endian two's-complement word sequence of this
    /// value whose top bit is the sign bit.
    ///
    /// A value whose top magnitude bit would be mistaken for the sign gets one
    /// extra all-zeros (positive) or all-ones (negative) word. Zero is `[0]`.
    ///
    /// ```
    /// use numerics_bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-1).twos_complement_words(), vec![u64::MAX]);
    /// assert_eq!(BigInt::from(u64::MAX).twos_complement_words(), vec![u64::MAX, 0]);
    /// ```
    pub fn twos_complement_words(&self) -> Vec<Word> {
        let mut words = pattern(self, self.magnitude().len());
        let top_bit_set = words.last().map_or(false, |&w| w >> (WORD_BITS - 1) == 1);
        if top_bit_set != self.is_negative() || words.is_empty() {
            words.push(extension(self));
        }
        words
    }

    /// The canonical two's-complement words as little-endian bytes, with
    /// redundant sign-extension bytes removed.
    pub fn to_signed_bytes_le(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = self
            .twos_complement_words()
            .iter()
            .flat_map(|w| w.to_le_bytes())
            .collect();
        let fill = if self.is_negative() { 0xff } else { 0x00 };
        while bytes.len() > 1 {
            let top = bytes[bytes.len() - 1];
            let next = bytes[bytes.len() - 2];
            if top == fill && (next & 0x80 == fill & 0x80) {
                bytes.pop();
            } else {
                break;
            }
        }
        bytes
    }

    /// Bit `idx` of the infinite two's-complement pattern.
    pub fn bit(&self, idx: usize) -> bool {
        if !self.is_negative() {
            return magnitude::bit(self.magnitude(), idx);
        }
        if idx >= self.bit_len() {
            return true;
        }
        // For -m the pattern is !(m - 1).
        let m_minus_one = magnitude::sub(self.magnitude(), &[1]);
        !magnitude::bit(&m_minus_one, idx)
    }

    /// Minimal number of bits needed to hold this value in two's complement,
    /// sign bit included. Zero and -1 need one bit.
    pub fn bit_width(&self) -> usize {
        if self.is_negative() {
            magnitude::bit_len(&magnitude::sub(self.magnitude(), &[1])) + 1
        } else {
            self.bit_len() + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: i128) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn test_not_matches_native() {
        for v in [0i128, 1, -1, 2, -2, 255, -256, i64::MAX as i128, i64::MIN as i128] {
            assert_eq!(not(&big(v)), big(!v), "!{v}");
        }
    }

    #[test]
    fn test_and_or_xor_match_native() {
        let values = [0i128, 1, -1, 6, -6, 0x1234_5678_9abc, -(1 << 70), (1 << 70) + 3, i128::MIN / 2];
        for &a in &values {
            for &b in &values {
                assert_eq!(and(&big(a), &big(b)), big(a & b), "{a} & {b}");
                assert_eq!(or(&big(a), &big(b)), big(a | b), "{a} | {b}");
                assert_eq!(xor(&big(a), &big(b)), big(a ^ b), "{a} ^ {b}");
            }
        }
    }

    #[test]
    fn test_and_all_zero_pattern() {
        // -2^64 & -2^64 stays -2^64: low word zero, extension ones.
        let x = BigInt::from_words(crate::Sign::Negative, vec![0, 1]);
        assert_eq!(and(&x, &x), x);
        assert_eq!(or(&x, &big(-1)), big(-1));
    }

    #[test]
    fn test_shifts_match_native() {
        for v in [0i128, 1, -1, 5, -5, 1 << 60, -(1 << 60) - 7, i64::MIN as i128] {
            for n in [0usize, 1, 3, 63, 64, 65] {
                assert_eq!(shr(&big(v), n), big(v >> n), "{v} >> {n}");
            }
            for n in [0usize, 1, 3, 30] {
                assert_eq!(shl(&big(v), n), big(v << n), "{v} << {n}");
            }
        }
    }

    #[test]
    fn test_shr_past_width() {
        assert_eq!(shr(&big(12345), 1000), BigInt::zero());
        assert_eq!(shr(&big(-12345), 1000), big(-1));
    }

    #[test]
    fn test_signed_shift_amounts() {
        assert_eq!(shl_signed(&big(8), -2), big(2));
        assert_eq!(shr_signed(&big(8), -2), big(32));
        assert_eq!(shl_signed(&big(-1), 64), BigInt::from_words(crate::Sign::Negative, vec![0, 1]));
    }

    #[test]
    fn test_twos_complement_words() {
        assert_eq!(BigInt::zero().twos_complement_words(), vec![0]);
        assert_eq!(big(1).twos_complement_words(), vec![1]);
        assert_eq!(big(-1).twos_complement_words(), vec![Word::MAX]);
        assert_eq!(big(i64::MIN as i128).twos_complement_words(), vec![1 << 63]);
        assert_eq!(big(1 << 63).twos_complement_words(), vec![1 << 63, 0]);
        assert_eq!(big(-(1 << 63) - 1).twos_complement_words(), vec![(1 << 63) - 1, Word::MAX]);
        assert_eq!(big(-(1 << 64)).twos_complement_words(), vec![0, Word::MAX]);
    }

    #[test]
    fn test_signed_bytes() {
        assert_eq!(BigInt::zero().to_signed_bytes_le(), vec![0]);
        assert_eq!(big(-1).to_signed_bytes_le(), vec![0xff]);
        assert_eq!(big(128).to_signed_bytes_le(), vec![0x80, 0x00]);
        assert_eq!(big(-128).to_signed_bytes_le(), vec![0x80]);
        assert_eq!(big(-129).to_signed_bytes_le(), vec![0x7f, 0xff]);
        assert_eq!(big(0x1234).to_signed_bytes_le(), vec![0x34, 0x12]);
    }

    #[test]
    fn test_bit_and_width() {
        let v = big(-6); // ...11010
        assert!(!v.bit(0));
        assert!(v.bit(1));
        assert!(!v.bit(2));
        assert!(v.bit(3));
        assert!(v.bit(500));
        assert_eq!(big(0).bit_width(), 1);
        assert_eq!(big(-1).bit_width(), 1);
        assert_eq!(big(127).bit_width(), 8);
        assert_eq!(big(-128).bit_width(), 8);
        assert_eq!(big(-129).bit_width(), 9);
    }
}
