//! Constant-time comparison and selection.
//!
//! These avoid data-dependent branching on word contents. Timing still
//! depends on the word counts of the operands, which are public. The
//! result of `ct_select` is canonicalized, so trimming it reveals how many
//! most-significant zero words the selected value had.

use crate::bigint::{BigInt, Word};
use subtle::{Choice, ConstantTimeEq};

impl BigInt {
    /// Constant-time equality comparison.
    pub fn ct_eq(&self, other: &BigInt) -> Choice {
        let (a, b) = (self.magnitude(), other.magnitude());
        let max_len = a.len().max(b.len());

        let mut result = (self.is_negative() as u8).ct_eq(&(other.is_negative() as u8));
        for i in 0..max_len {
            let av = a.get(i).copied().unwrap_or(0);
            let bv = b.get(i).copied().unwrap_or(0);
            result &= av.ct_eq(&bv);
        }
        result
    }

    /// Constant-time conditional select: returns `a` if choice == 0, `b` if
    /// choice == 1.
    ///
    /// The selection itself is branch-free over the padded words. The final
    /// trim to canonical form is not.
    pub fn ct_select(a: &BigInt, b: &BigInt, choice: Choice) -> BigInt {
        let mask = (choice.unwrap_u8() as Word).wrapping_neg(); // 0 or 0xFFFF...
        let (am, bm) = (a.magnitude(), b.magnitude());
        let max_len = am.len().max(bm.len());

        let words = (0..max_len)
            .map(|i| {
                let av = am.get(i).copied().unwrap_or(0);
                let bv = bm.get(i).copied().unwrap_or(0);
                av ^ (mask & (av ^ bv))
            })
            .collect();

        let neg_a = a.is_negative() as Word;
        let neg_b = b.is_negative() as Word;
        let negative = neg_a ^ (mask & (neg_a ^ neg_b));
        BigInt::from_sign_magnitude(negative != 0, words)
    }
}

impl ConstantTimeEq for BigInt {
    fn ct_eq(&self, other: &Self) -> Choice {
        BigInt::ct_eq(self, other)
    }
}
