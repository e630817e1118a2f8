//! Conversions between [`BigInt`] and the primitive integer types.

use crate::bigint::BigInt;
use crate::magnitude;
use numerics_types::NumericsError;

mod private {
    pub trait Sealed {}
}

/// A primitive integer type [`BigInt`] converts to and from.
///
/// Implemented for every signed and unsigned primitive up to 128 bits.
pub trait PrimitiveInt: Copy + Ord + Into<BigInt> + private::Sealed {
    /// Width in bits.
    const BITS: u32;
    /// True for the signed types.
    const SIGNED: bool;
    /// Smallest value.
    const MIN: Self;
    /// Largest value.
    const MAX: Self;

    /// Keep the low `BITS` bits of a 128-bit two's-complement pattern.
    fn from_u128_wrapping(bits: u128) -> Self;
}

macro_rules! impl_primitive_int {
    ($signed:literal: $($t:ident)*) => {$(
        impl private::Sealed for $t {}

        impl PrimitiveInt for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = $signed;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn from_u128_wrapping(bits: u128) -> Self {
                bits as $t
            }
        }

        impl TryFrom<&BigInt> for $t {
            type Error = NumericsError;

            fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
                value.try_to::<$t>()
            }
        }

        impl TryFrom<BigInt> for $t {
            type Error = NumericsError;

            fn try_from(value: BigInt) -> Result<Self, Self::Error> {
                value.try_to::<$t>()
            }
        }
    )*};
}

impl_primitive_int!(true: i8 i16 i32 i64 i128 isize);
impl_primitive_int!(false: u8 u16 u32 u64 u128 usize);

macro_rules! impl_from_signed {
    ($($t:ident)*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                BigInt::from_sign_magnitude(
                    value < 0,
                    magnitude::from_u128(value.unsigned_abs() as u128),
                )
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ident)*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                BigInt::from_sign_magnitude(false, magnitude::from_u128(value as u128))
            }
        }
    )*};
}

impl_from_signed!(i8 i16 i32 i64 i128 isize);
impl_from_unsigned!(u8 u16 u32 u64 u128 usize);

impl From<bool> for BigInt {
    fn from(value: bool) -> Self {
        BigInt::from(value as u8)
    }
}

impl BigInt {
    /// The low 128 bits of the two's-complement pattern.
    fn low_u128_twos(&self) -> u128 {
        let low = magnitude::low_u128(self.magnitude());
        if self.is_negative() {
            low.wrapping_neg()
        } else {
            low
        }
    }

    /// Return true if this value is in `T`'s range.
    pub fn fits<T: PrimitiveInt>(&self) -> bool {
        let bits = self.bit_len();
        match (T::SIGNED, self.is_negative()) {
            (false, true) => false,
            (false, false) => bits <= T::BITS as usize,
            (true, false) => bits < T::BITS as usize,
            // -2^(BITS-1) is the only value of full width that fits.
            (true, true) => {
                let width = T::BITS as usize;
                bits < width || (bits == width && self.trailing_zeros() == width - 1)
            }
        }
    }

    /// Exact conversion, or `OutOfRange`.
    ///
    /// ```
    /// use numerics_bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-128).try_to::<i8>(), Ok(-128));
    /// assert!(BigInt::from(128).try_to::<i8>().is_err());
    /// ```
    pub fn try_to<T: PrimitiveInt>(&self) -> Result<T, NumericsError> {
        if self.fits::<T>() {
            Ok(self.wrapping_to::<T>())
        } else {
            Err(NumericsError::OutOfRange)
        }
    }

    /// Exact conversion.
    ///
    /// # Panics
    ///
    /// Panics if the value does not fit in `T`, like an overflowing
    /// narrowing conversion of a native integer.
    pub fn to_primitive<T: PrimitiveInt>(&self) -> T {
        match self.try_to::<T>() {
            Ok(v) => v,
            Err(_) => panic!("BigInt value {self} out of range for the target integer type"),
        }
    }

    /// Conversion saturating to `T::MIN` / `T::MAX`.
    pub fn saturating_to<T: PrimitiveInt>(&self) -> T {
        match self.try_to::<T>() {
            Ok(v) => v,
            Err(_) if self.is_negative() => T::MIN,
            Err(_) => T::MAX,
        }
    }

    /// The low `T::BITS` bits of the two's-complement pattern.
    ///
    /// ```
    /// use numerics_bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-1).wrapping_to::<u8>(), 0xff);
    /// assert_eq!(BigInt::from(0x1_0000_0005u64).wrapping_to::<u32>(), 5);
    /// ```
    pub fn wrapping_to<T: PrimitiveInt>(&self) -> T {
        T::from_u128_wrapping(self.low_u128_twos())
    }
}
