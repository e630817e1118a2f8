//! Uniform random big integers.
//!
//! The default entry points draw from OS randomness through `getrandom`;
//! with the `rand` feature any `rand::RngCore` can be supplied instead.

use std::ops::RangeInclusive;

use crate::bigint::{BigInt, Word, WORD_BITS};
use crate::ops;
use numerics_types::NumericsError;

/// Draw a uniform value in [0, 2^bits) from a byte source.
fn draw_bits<F>(bits: usize, fill: &mut F) -> Result<BigInt, NumericsError>
where
    F: FnMut(&mut [u8]) -> Result<(), NumericsError>,
{
    if bits == 0 {
        return Ok(BigInt::zero());
    }

    let num_words = bits.div_ceil(WORD_BITS);
    let mut buf = vec![0u8; num_words * 8];
    fill(&mut buf)?;

    let mut words: Vec<Word> = buf
        .chunks_exact(8)
        .map(|c| {
            let mut w = [0u8; 8];
            w.copy_from_slice(c);
            Word::from_le_bytes(w)
        })
        .collect();

    // Mask excess bits in the most significant word
    let excess = num_words * WORD_BITS - bits;
    if excess > 0 {
        if let Some(top) = words.last_mut() {
            *top &= Word::MAX >> excess;
        }
    }
    Ok(BigInt::from_sign_magnitude(false, words))
}

/// Rejection sampling over [lo, hi]: draw values with the bit length of the
/// span and retry until one lands inside it.
fn sample_range<F>(range: &RangeInclusive<BigInt>, fill: &mut F) -> Result<BigInt, NumericsError>
where
    F: FnMut(&mut [u8]) -> Result<(), NumericsError>,
{
    let (lo, hi) = (range.start(), range.end());
    if lo > hi {
        return Err(NumericsError::EmptyRange);
    }

    let span = ops::sub(hi, lo);
    let bits = span.bit_len();
    let mut attempts = 0u32;

    loop {
        let candidate = draw_bits(bits, fill)?;
        if candidate <= span {
            return Ok(ops::add(lo, &candidate));
        }
        attempts += 1;
        tracing::trace!(attempts, bits, "random sample outside range, redrawing");
    }
}

fn os_fill(buf: &mut [u8]) -> Result<(), NumericsError> {
    getrandom::getrandom(buf).map_err(|_| NumericsError::RandGenFail)
}

impl BigInt {
    /// A uniform value in [0, 2^bits) from OS randomness.
    pub fn random_bits(bits: usize) -> Result<BigInt, NumericsError> {
        draw_bits(bits, &mut os_fill)
    }

    /// A uniform value in the closed range, from OS randomness.
    ///
    /// ```
    /// use numerics_bigint::BigInt;
    ///
    /// let r = BigInt::random_in_range(&(BigInt::from(-5)..=BigInt::from(5))).unwrap();
    /// assert!(r >= BigInt::from(-5) && r <= BigInt::from(5));
    /// ```
    pub fn random_in_range(range: &RangeInclusive<BigInt>) -> Result<BigInt, NumericsError> {
        sample_range(range, &mut os_fill)
    }

    /// A uniform value in [0, 2^bits) drawn from `rng`.
    #[cfg(feature = "rand")]
    pub fn random_bits_with<R: rand::RngCore + ?Sized>(
        bits: usize,
        rng: &mut R,
    ) -> Result<BigInt, NumericsError> {
        draw_bits(bits, &mut |buf: &mut [u8]| {
            rng.try_fill_bytes(buf).map_err(|_| NumericsError::RandGenFail)
        })
    }

    /// A uniform value in the closed range drawn from `rng`.
    #[cfg(feature = "rand")]
    pub fn random_in_range_with<R: rand::RngCore + ?Sized>(
        range: &RangeInclusive<BigInt>,
        rng: &mut R,
    ) -> Result<BigInt, NumericsError> {
        sample_range(range, &mut |buf: &mut [u8]| {
            rng.try_fill_bytes(buf).map_err(|_| NumericsError::RandGenFail)
        })
    }
}
