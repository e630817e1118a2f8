#![no_main]
use libfuzzer_sys::fuzz_target;
use numerics_bigint::BigInt;

fuzz_target!(|data: &[u8]| {
    let Some((&radix, rest)) = data.split_first() else {
        return;
    };
    let radix = 2 + u32::from(radix) % 35;
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    if let Ok(x) = BigInt::from_str_radix(text, radix) {
        let printed = x.to_str_radix(radix, false);
        assert_eq!(BigInt::from_str_radix(&printed, radix), Ok(x));
    }
});
