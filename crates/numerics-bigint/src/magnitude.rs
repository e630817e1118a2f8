//! Unsigned word-level arithmetic.
//!
//! Every function here works on little-endian word slices (index 0 is the
//! least significant word). Inputs are expected in canonical form, i.e. with
//! no most-significant zero words, and every returned vector is canonical too.
//! The empty slice is zero.

use std::cmp::Ordering;

use crate::bigint::{DoubleWord, Word, WORD_BITS};

/// Drop most-significant zero words.
#[inline]
pub(crate) fn trim(words: &mut Vec<Word>) {
    while words.last() == Some(&0) {
        words.pop();
    }
}

/// Number of significant bits.
pub(crate) fn bit_len(a: &[Word]) -> usize {
    match a.last() {
        None => 0,
        Some(&top) => (a.len() - 1) * WORD_BITS + (WORD_BITS - top.leading_zeros() as usize),
    }
}

/// Number of trailing zero bits, `None` for zero.
pub(crate) fn trailing_zeros(a: &[Word]) -> Option<usize> {
    let i = a.iter().position(|&w| w != 0)?;
    Some(i * WORD_BITS + a[i].trailing_zeros() as usize)
}

/// Bit `idx` of the magnitude.
pub(crate) fn bit(a: &[Word], idx: usize) -> bool {
    a.get(idx / WORD_BITS)
        .map_or(false, |&w| (w >> (idx % WORD_BITS)) & 1 == 1)
}

/// Compare two canonical magnitudes.
///
/// A longer canonical magnitude is always larger; equal lengths are decided
/// by the first differing word from the top.
pub(crate) fn cmp(a: &[Word], b: &[Word]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// a + b.
pub(crate) fn add(a: &[Word], b: &[Word]) -> Vec<Word> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry: Word = 0;

    for (i, &lv) in long.iter().enumerate() {
        let sv = short.get(i).copied().unwrap_or(0);
        let sum = lv as DoubleWord + sv as DoubleWord + carry as DoubleWord;
        out.push(sum as Word);
        carry = (sum >> WORD_BITS) as Word;
    }
    if carry != 0 {
        out.push(carry);
    }
    trim(&mut out);
    out
}

/// a - b, where the caller guarantees a >= b.
pub(crate) fn sub(a: &[Word], b: &[Word]) -> Vec<Word> {
    debug_assert!(cmp(a, b) != Ordering::Less, "magnitude subtraction underflow");
    let mut out = Vec::with_capacity(a.len());
    let mut borrow: Word = 0;

    for (i, &av) in a.iter().enumerate() {
        let bv = b.get(i).copied().unwrap_or(0);
        let (d1, b1) = av.overflowing_sub(bv);
        let (d2, b2) = d1.overflowing_sub(borrow);
        out.push(d2);
        borrow = (b1 as Word) + (b2 as Word);
    }
    trim(&mut out);
    out
}

/// Schoolbook product a * b.
///
/// Each step computes `x * y + acc + carry`, bounded by
/// `(B-1)^2 + (B-1) + (B-1) = B^2 - 1`, so the double word never overflows
/// and the carry out always fits a single word.
pub(crate) fn mul(a: &[Word], b: &[Word]) -> Vec<Word> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut out = vec![0 as Word; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry: Word = 0;
        for (j, &y) in b.iter().enumerate() {
            let prod = x as DoubleWord * y as DoubleWord
                + out[i + j] as DoubleWord
                + carry as DoubleWord;
            out[i + j] = prod as Word;
            carry = (prod >> WORD_BITS) as Word;
        }
        out[i + b.len()] = carry;
    }
    trim(&mut out);
    out
}

/// In place: words = words * mul + add.
pub(crate) fn mul_add_word(words: &mut Vec<Word>, mul: Word, add: Word) {
    let mut carry = add;
    for w in words.iter_mut() {
        let t = *w as DoubleWord * mul as DoubleWord + carry as DoubleWord;
        *w = t as Word;
        carry = (t >> WORD_BITS) as Word;
    }
    if carry != 0 {
        words.push(carry);
    }
    trim(words);
}

/// Short division by a single nonzero word: (a / d, a % d).
pub(crate) fn div_rem_word(a: &[Word], d: Word) -> (Vec<Word>, Word) {
    debug_assert!(d != 0);
    let mut q = vec![0 as Word; a.len()];
    let mut rem: Word = 0;
    let d = d as DoubleWord;

    for i in (0..a.len()).rev() {
        let cur = ((rem as DoubleWord) << WORD_BITS) | a[i] as DoubleWord;
        q[i] = (cur / d) as Word;
        rem = (cur % d) as Word;
    }
    trim(&mut q);
    (q, rem)
}

/// Long division: (a / b, a % b) for a nonzero divisor.
///
/// Single-word divisors take the short path. Otherwise both operands are
/// normalized so the divisor's top bit is set, each quotient word is
/// estimated from the top two remainder words and refined against the second
/// divisor word, then b * q_hat is subtracted from the running remainder with
/// at most one add-back. The remainder is shifted back at the end.
pub(crate) fn div_rem(a: &[Word], b: &[Word]) -> (Vec<Word>, Vec<Word>) {
    debug_assert!(!b.is_empty(), "magnitude division by zero");
    if cmp(a, b) == Ordering::Less {
        return (Vec::new(), a.to_vec());
    }
    if b.len() == 1 {
        let (q, r) = div_rem_word(a, b[0]);
        let r = if r == 0 { Vec::new() } else { vec![r] };
        return (q, r);
    }

    let shift = b[b.len() - 1].leading_zeros();
    tracing::trace!(
        shift,
        dividend_words = a.len(),
        divisor_words = b.len(),
        "multi-word division"
    );

    // The normalized divisor never spills; the dividend keeps its spill word.
    let mut v = shl_bits(b, shift);
    v.pop();
    let mut u = shl_bits(a, shift);

    let n = v.len();
    let m = u.len() - n - 1;
    let base: DoubleWord = 1 << WORD_BITS;
    let v_top = v[n - 1] as DoubleWord;
    let v_next = v[n - 2] as DoubleWord;
    let mut q = vec![0 as Word; m + 1];

    for j in (0..=m).rev() {
        let num = ((u[j + n] as DoubleWord) << WORD_BITS) | u[j + n - 1] as DoubleWord;
        let mut q_hat = num / v_top;
        let mut r_hat = num % v_top;

        while q_hat >= base || q_hat * v_next > ((r_hat << WORD_BITS) | u[j + n - 2] as DoubleWord)
        {
            q_hat -= 1;
            r_hat += v_top;
            if r_hat >= base {
                break;
            }
        }

        // u[j..=j+n] -= q_hat * v
        let mut mul_carry: Word = 0;
        let mut borrow: Word = 0;
        for i in 0..n {
            let p = q_hat * v[i] as DoubleWord + mul_carry as DoubleWord;
            mul_carry = (p >> WORD_BITS) as Word;
            let (d1, b1) = u[i + j].overflowing_sub(p as Word);
            let (d2, b2) = d1.overflowing_sub(borrow);
            u[i + j] = d2;
            borrow = (b1 as Word) + (b2 as Word);
        }
        let (d1, b1) = u[j + n].overflowing_sub(mul_carry);
        let (d2, b2) = d1.overflowing_sub(borrow);
        u[j + n] = d2;

        let mut q_word = q_hat as Word;
        if b1 || b2 {
            // Estimate was one too large: add the divisor back.
            q_word -= 1;
            let mut carry: Word = 0;
            for i in 0..n {
                let sum = u[i + j] as DoubleWord + v[i] as DoubleWord + carry as DoubleWord;
                u[i + j] = sum as Word;
                carry = (sum >> WORD_BITS) as Word;
            }
            u[j + n] = u[j + n].wrapping_add(carry);
        }
        q[j] = q_word;
    }

    trim(&mut q);
    u.truncate(n);
    let mut r = shr_bits(&u, shift);
    trim(&mut r);
    (q, r)
}

/// Shift left by `shift < WORD_BITS` bits.
///
/// Returns `a.len() + 1` words; the last one holds the spilled bits and may
/// be zero, so the result is not trimmed.
pub(crate) fn shl_bits(a: &[Word], shift: u32) -> Vec<Word> {
    debug_assert!((shift as usize) < WORD_BITS);
    let mut out = Vec::with_capacity(a.len() + 1);
    if shift == 0 {
        out.extend_from_slice(a);
        out.push(0);
        return out;
    }
    let mut carry: Word = 0;
    for &w in a {
        out.push((w << shift) | carry);
        carry = w >> (WORD_BITS as u32 - shift);
    }
    out.push(carry);
    out
}

/// Shift right by `shift < WORD_BITS` bits. Not trimmed.
pub(crate) fn shr_bits(a: &[Word], shift: u32) -> Vec<Word> {
    debug_assert!((shift as usize) < WORD_BITS);
    if shift == 0 {
        return a.to_vec();
    }
    (0..a.len())
        .map(|i| {
            let hi = a.get(i + 1).map_or(0, |&next| next << (WORD_BITS as u32 - shift));
            (a[i] >> shift) | hi
        })
        .collect()
}

/// Prepend `n` zero words.
pub(crate) fn shl_words(a: &[Word], n: usize) -> Vec<Word> {
    if a.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0 as Word; n];
    out.extend_from_slice(a);
    out
}

/// Drop the `n` least significant words.
pub(crate) fn shr_words(a: &[Word], n: usize) -> &[Word] {
    a.get(n..).unwrap_or(&[])
}

/// a * 2^bits.
pub(crate) fn shl(a: &[Word], bits: usize) -> Vec<Word> {
    if a.is_empty() {
        return Vec::new();
    }
    let shifted = shl_bits(a, (bits % WORD_BITS) as u32);
    let mut out = shl_words(&shifted, bits / WORD_BITS);
    trim(&mut out);
    out
}

/// floor(a / 2^bits).
pub(crate) fn shr(a: &[Word], bits: usize) -> Vec<Word> {
    let mut out = shr_bits(shr_words(a, bits / WORD_BITS), (bits % WORD_BITS) as u32);
    trim(&mut out);
    out
}

/// Canonical words of a `u128`.
pub(crate) fn from_u128(value: u128) -> Vec<Word> {
    let mut out = vec![value as Word, (value >> WORD_BITS) as Word];
    trim(&mut out);
    out
}

/// The low 128 bits of the magnitude.
pub(crate) fn low_u128(a: &[Word]) -> u128 {
    let lo = a.first().copied().unwrap_or(0) as u128;
    let hi = a.get(1).copied().unwrap_or(0) as u128;
    (hi << WORD_BITS) | lo
}
