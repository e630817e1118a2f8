//! Operator trait implementations.
//!
//! Every binary operator is available for owned and borrowed operands, with
//! a primitive integer on either side, and in compound-assignment form.

use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use crate::bigint::BigInt;
use crate::{bits, ops};

macro_rules! impl_binop {
    ($Trait:ident, $method:ident, $AssignTrait:ident, $assign:ident, $func:path) => {
        impl $Trait<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(self, rhs)
            }
        }

        impl $Trait<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $func(self, &rhs)
            }
        }

        impl $Trait<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(&self, rhs)
            }
        }

        impl $Trait<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $func(&self, &rhs)
            }
        }

        impl $AssignTrait<&BigInt> for BigInt {
            fn $assign(&mut self, rhs: &BigInt) {
                *self = $func(&*self, rhs);
            }
        }

        impl $AssignTrait<BigInt> for BigInt {
            fn $assign(&mut self, rhs: BigInt) {
                *self = $func(&*self, &rhs);
            }
        }

        impl_binop_primitive!(
            $Trait, $method, $AssignTrait, $assign, $func;
            i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize
        );
    };
}

macro_rules! impl_binop_primitive {
    ($Trait:ident, $method:ident, $AssignTrait:ident, $assign:ident, $func:path; $($t:ident)*) => {$(
        impl $Trait<$t> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: $t) -> BigInt {
                $func(self, &BigInt::from(rhs))
            }
        }

        impl $Trait<$t> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: $t) -> BigInt {
                $func(&self, &BigInt::from(rhs))
            }
        }

        impl $Trait<&BigInt> for $t {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(&BigInt::from(self), rhs)
            }
        }

        impl $Trait<BigInt> for $t {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $func(&BigInt::from(self), &rhs)
            }
        }

        impl $AssignTrait<$t> for BigInt {
            fn $assign(&mut self, rhs: $t) {
                *self = $func(&*self, &BigInt::from(rhs));
            }
        }
    )*};
}

impl_binop!(Add, add, AddAssign, add_assign, ops::add);
impl_binop!(Sub, sub, SubAssign, sub_assign, ops::sub);
impl_binop!(Mul, mul, MulAssign, mul_assign, ops::mul);
impl_binop!(Div, div, DivAssign, div_assign, ops::div);
impl_binop!(Rem, rem, RemAssign, rem_assign, ops::rem);
impl_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, bits::and);
impl_binop!(BitOr, bitor, BitOrAssign, bitor_assign, bits::or);
impl_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, bits::xor);

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let (sign, words) = self.into_parts();
        BigInt::from_sign_magnitude(!sign.is_negative(), words)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        ops::neg(self)
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        bits::not(&self)
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        bits::not(self)
    }
}

// Shift amounts of any integer type; a negative amount shifts the other way.
// Amounts past i128::MAX saturate, which only matters for u128.
macro_rules! impl_shift {
    ($($t:ident)*) => {$(
        impl Shl<$t> for &BigInt {
            type Output = BigInt;

            fn shl(self, rhs: $t) -> BigInt {
                bits::shl_signed(self, i128::try_from(rhs).unwrap_or(i128::MAX))
            }
        }

        impl Shl<$t> for BigInt {
            type Output = BigInt;

            fn shl(self, rhs: $t) -> BigInt {
                &self << rhs
            }
        }

        impl ShlAssign<$t> for BigInt {
            fn shl_assign(&mut self, rhs: $t) {
                *self = &*self << rhs;
            }
        }

        impl Shr<$t> for &BigInt {
            type Output = BigInt;

            fn shr(self, rhs: $t) -> BigInt {
                bits::shr_signed(self, i128::try_from(rhs).unwrap_or(i128::MAX))
            }
        }

        impl Shr<$t> for BigInt {
            type Output = BigInt;

            fn shr(self, rhs: $t) -> BigInt {
                &self >> rhs
            }
        }

        impl ShrAssign<$t> for BigInt {
            fn shr_assign(&mut self, rhs: $t) {
                *self = &*self >> rhs;
            }
        }
    )*};
}

impl_shift!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

// Comparisons against primitives never allocate: a value that does not fit
// the primitive type lies beyond its range on the side given by its sign.
macro_rules! impl_cmp_primitive {
    ($($t:ident)*) => {$(
        impl PartialEq<$t> for BigInt {
            fn eq(&self, other: &$t) -> bool {
                self.try_to::<$t>().is_ok_and(|v| v == *other)
            }
        }

        impl PartialEq<BigInt> for $t {
            fn eq(&self, other: &BigInt) -> bool {
                other == self
            }
        }

        impl PartialOrd<$t> for BigInt {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                match self.try_to::<$t>() {
                    Ok(v) => Some(v.cmp(other)),
                    Err(_) if self.is_negative() => Some(Ordering::Less),
                    Err(_) => Some(Ordering::Greater),
                }
            }
        }

        impl PartialOrd<BigInt> for $t {
            fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }
    )*};
}

impl_cmp_primitive!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}
