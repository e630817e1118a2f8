#![no_main]
use libfuzzer_sys::fuzz_target;
use numerics_bigint::{BigInt, Sign};

fn from_bytes(bytes: &[u8]) -> BigInt {
    let Some((&flags, rest)) = bytes.split_first() else {
        return BigInt::zero();
    };
    let x = BigInt::from_bytes_be(rest);
    if flags & 1 == 1 {
        -x
    } else {
        x
    }
}

fuzz_target!(|data: &[u8]| {
    let split = data.first().map_or(0, |&b| b as usize).min(data.len().saturating_sub(1));
    let (a, b) = data.get(1..).unwrap_or_default().split_at(split);
    let x = from_bytes(a);
    let y = from_bytes(b);

    match x.div_rem(&y) {
        Ok((q, r)) => {
            assert_eq!(&q * &y + &r, x);
            assert_eq!(r.cmp_abs(&y), std::cmp::Ordering::Less);
            assert!(r.is_zero() || r.sign() == x.sign());
            assert!(q.is_zero() || (q.sign() == Sign::Negative) == (x.sign() != y.sign()));
        }
        Err(_) => assert!(y.is_zero()),
    }
});
