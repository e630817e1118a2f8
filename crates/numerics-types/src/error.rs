/// Errors reported by the checked big-integer operations.
///
/// Operations that mirror a native-integer trap (division by zero through the
/// `/` operator, out-of-range narrowing through `to_primitive`) panic instead;
/// each of them has a checked counterpart that returns one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NumericsError {
    // Parsing errors
    #[error("radix {0} is outside 2..=36")]
    InvalidRadix(u32),
    #[error("no digits to parse")]
    EmptyDigits,
    #[error("invalid digit {ch:?} at byte {index}")]
    InvalidDigit { ch: char, index: usize },

    // Arithmetic errors
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulus is zero")]
    ZeroModulus,
    #[error("no modular inverse")]
    NoInverse,
    #[error("negative exponent")]
    NegativeExponent,

    // Conversion errors
    #[error("value out of range for the target type")]
    OutOfRange,
    #[error("floating-point value is infinite or NaN")]
    NotFinite,
    #[error("floating-point value has a fractional part")]
    Inexact,

    // Random generation errors
    #[error("empty range")]
    EmptyRange,
    #[error("random generation failed")]
    RandGenFail,
}
